use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
    Warning,
}

impl FlashKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
            Self::Warning => "alert alert-warning",
        }
    }

    /// Errors stay on screen until the user acts on them; only
    /// success/warning notices fade on their own.
    fn auto_dismisses(self) -> bool {
        !matches!(self, Self::Error)
    }
}

#[derive(Properties, PartialEq)]
pub struct FlashProps {
    pub kind: FlashKind,
    pub message: String,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Dismissible notice. When a dismiss callback is wired, success and
/// warning notices also dismiss themselves after a few seconds; dropping
/// the pending timeout on message change cancels the stale timer. Error
/// notices never self-dismiss.
#[function_component(Flash)]
pub fn flash(props: &FlashProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with((props.kind, props.message.clone()), move |(kind, _)| {
            let timeout = on_dismiss.filter(|_| kind.auto_dismisses()).map(|callback| {
                Timeout::new(AUTO_DISMISS_MS, move || callback.emit(()))
            });
            move || drop(timeout)
        });
    }

    let dismiss_button = props.on_dismiss.clone().map(|callback| {
        let onclick = Callback::from(move |_| callback.emit(()));
        html! {
            <button class="btn btn-ghost btn-xs" {onclick} aria-label="Cerrar">
                {"✕"}
            </button>
        }
    });

    html! {
        <div class={props.kind.class()} role="alert">
            <span>{ props.message.clone() }</span>
            { dismiss_button.unwrap_or_default() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notices_never_self_dismiss() {
        assert!(!FlashKind::Error.auto_dismisses());
    }

    #[test]
    fn transient_notices_fade() {
        assert!(FlashKind::Success.auto_dismisses());
        assert!(FlashKind::Warning.auto_dismisses());
    }
}
