use shared::models::ContactMessage;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading};

/// View state of the inbox. A failed fetch is its own state so it cannot
/// be mistaken for a genuinely empty inbox.
#[derive(Debug, Clone, PartialEq)]
enum InboxState {
    Loading,
    Failed(String),
    Loaded(Vec<ContactMessage>),
}

/// Inbox for contact-form messages. Read and delete only; the site never
/// replies from here.
#[function_component(AdminMessagesPage)]
pub fn admin_messages_page() -> Html {
    let inbox = use_state(|| InboxState::Loading);
    let expanded = use_state(|| None::<i64>);
    let notice = use_state(|| None::<(FlashKind, String)>);
    let generation = use_state(|| 0u32);

    {
        let inbox = inbox.clone();
        use_effect_with(*generation, move |_| {
            inbox.set(InboxState::Loading);
            spawn_local(async move {
                match ApiClient::shared().list_messages().await {
                    Ok(list) => inbox.set(InboxState::Loaded(list)),
                    Err(err) => inbox.set(InboxState::Failed(err.user_message())),
                }
            });
            || ()
        });
    }

    let on_retry = {
        let generation = generation.clone();
        Callback::from(move |()| generation.set(*generation + 1))
    };

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: i64| {
            expanded.set((*expanded != Some(id)).then_some(id));
        })
    };

    let on_delete = {
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |message: ContactMessage| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!(
                            "¿Eliminar el mensaje de {}?",
                            message.name
                        ))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_message(message.id).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Mensaje eliminado".to_string())));
                        generation.set(*generation + 1);
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
            });
        })
    };

    let listing = match &*inbox {
        InboxState::Loading => html! { <Loading /> },
        InboxState::Failed(message) => html! {
            <EmptyState
                message={message.clone()}
                action_label={Some("Reintentar".to_string())}
                on_action={Some(on_retry)}
            />
        },
        InboxState::Loaded(list) if list.is_empty() => html! {
            <EmptyState message={"No hay mensajes recibidos.".to_string()} />
        },
        InboxState::Loaded(list) => html! {
            <div class="space-y-3">
                { for list.iter().map(|message| {
                    let is_open = *expanded == Some(message.id);
                    let on_toggle = on_toggle.clone();
                    let on_delete = on_delete.clone();
                    let toggle_id = message.id;
                    let row_item = message.clone();
                    html! {
                        <div key={message.id} class="bg-white rounded-lg shadow-sm">
                            <button
                                class="w-full text-left p-4 flex justify-between items-center gap-4"
                                onclick={Callback::from(move |_| on_toggle.emit(toggle_id))}
                            >
                                <div class="min-w-0">
                                    <p class="font-medium truncate">{ message.subject.clone() }</p>
                                    <p class="text-sm text-gray-500 truncate">
                                        { format!("{} · {}", message.name, message.email) }
                                    </p>
                                </div>
                                <span class="text-sm text-gray-500 whitespace-nowrap">
                                    { message.created_at.format("%d/%m/%Y %H:%M").to_string() }
                                </span>
                            </button>
                            if is_open {
                                <div class="px-4 pb-4 space-y-3">
                                    if let Some(phone) = &message.phone {
                                        <p class="text-sm text-gray-600">{ format!("Teléfono: {phone}") }</p>
                                    }
                                    <p class="text-gray-700 whitespace-pre-wrap">{ message.message.clone() }</p>
                                    <button
                                        class="btn btn-ghost btn-xs text-error"
                                        onclick={Callback::from(move |_| on_delete.emit(row_item.clone()))}
                                    >
                                        {"Eliminar"}
                                    </button>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>
        },
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"Mensajes de contacto"}</h1>

            if let Some((kind, text)) = &*notice {
                <Flash kind={*kind} message={text.clone()} on_dismiss={dismiss_notice} />
            }

            { listing }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetch_is_not_an_empty_inbox() {
        let failed = InboxState::Failed("Error de conexión".to_string());
        let empty = InboxState::Loaded(Vec::new());
        assert_ne!(failed, empty);
        assert_ne!(failed, InboxState::Loading);
    }
}
