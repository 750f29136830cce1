use shared::models::NewContactMessage;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{Flash, FlashKind};
use crate::validators::is_valid_email;

/// Public contact form. The only unauthenticated write in the site.
#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);
    let outcome = use_state(|| None::<(FlashKind, String)>);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let subject = subject.clone();
        let message = message.clone();
        let sending = sending.clone();
        let outcome = outcome.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !is_valid_email(&email) {
                outcome.set(Some((
                    FlashKind::Error,
                    "Ingresa un correo electrónico válido".to_string(),
                )));
                return;
            }
            let phone_value = phone.trim().to_string();
            let payload = NewContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (!phone_value.is_empty()).then_some(phone_value),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            sending.set(true);
            outcome.set(None);
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let subject = subject.clone();
            let message = message.clone();
            let sending = sending.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                match ApiClient::shared().send_contact_message(&payload).await {
                    Ok(()) => {
                        outcome.set(Some((
                            FlashKind::Success,
                            "¡Mensaje enviado! Te contactaremos pronto".to_string(),
                        )));
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        subject.set(String::new());
                        message.set(String::new());
                    }
                    Err(err) => outcome.set(Some((FlashKind::Error, err.user_message()))),
                }
                sending.set(false);
            });
        })
    };

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                message.set(area.value());
            }
        })
    };

    let dismiss = {
        let outcome = outcome.clone();
        Callback::from(move |()| outcome.set(None))
    };

    let disable_submit = *sending
        || name.trim().is_empty()
        || email.trim().is_empty()
        || subject.trim().is_empty()
        || message.trim().is_empty();

    html! {
        <div class="py-12 container mx-auto px-4 max-w-2xl">
            <h1 class="text-4xl font-bold text-gray-900 mb-2">{"Contacto"}</h1>
            <p class="text-gray-600 mb-8">
                {"Escríbenos y te responderemos a la brevedad."}
            </p>

            if let Some((kind, text)) = &*outcome {
                <div class="mb-6">
                    <Flash kind={*kind} message={text.clone()} on_dismiss={dismiss} />
                </div>
            }

            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="name"><span class="label-text">{"Nombre"}</span></label>
                    <input id="name" class="input input-bordered" required=true
                        value={(*name).clone()} oninput={bind_input(name.clone())} />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="email"><span class="label-text">{"Correo electrónico"}</span></label>
                        <input id="email" class="input input-bordered" type="email" required=true
                            value={(*email).clone()} oninput={bind_input(email.clone())} />
                    </div>
                    <div class="form-control">
                        <label class="label" for="phone"><span class="label-text">{"Teléfono (opcional)"}</span></label>
                        <input id="phone" class="input input-bordered" type="tel"
                            value={(*phone).clone()} oninput={bind_input(phone.clone())} />
                    </div>
                </div>
                <div class="form-control">
                    <label class="label" for="subject"><span class="label-text">{"Asunto"}</span></label>
                    <input id="subject" class="input input-bordered" required=true
                        value={(*subject).clone()} oninput={bind_input(subject.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="message"><span class="label-text">{"Mensaje"}</span></label>
                    <textarea id="message" class="textarea textarea-bordered h-32" required=true
                        value={(*message).clone()} oninput={on_message_input} />
                </div>
                <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                    { if *sending { "Enviando…" } else { "Enviar mensaje" } }
                </button>
            </form>
        </div>
    }
}
