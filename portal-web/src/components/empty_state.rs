use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
    #[prop_or_default]
    pub action_label: Option<String>,
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
}

/// "No results" placeholder with an optional action (clear filters, retry).
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let action = match (props.action_label.clone(), props.on_action.clone()) {
        (Some(label), Some(callback)) => {
            let onclick = Callback::from(move |_| callback.emit(()));
            html! { <button class="btn btn-primary" {onclick}>{ label }</button> }
        }
        _ => Html::default(),
    };

    html! {
        <div class="text-center py-20">
            <p class="text-gray-500 text-lg mb-4">{ props.message.clone() }</p>
            { action }
        </div>
    }
}
