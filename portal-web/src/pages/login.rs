use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::components::{Flash, FlashKind};
use crate::routes::{AdminRoute, Route};
use crate::session::{self, SessionState};

/// Admin login form.
///
/// Every failure is surfaced here as a message; a login error never
/// navigates away from this page. The one-shot "session expired" notice
/// left by the gateway is consumed on mount.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (session_state, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let expired_notice = use_state(session::take_expiry_notice);

    if session_state.hydrated && session_state.is_authenticated() {
        return html! { <Redirect<AdminRoute> to={AdminRoute::Dashboard} /> };
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            loading.set(true);
            error.set(None);
            let error = error.clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match ApiClient::shared().login(&request).await {
                    Ok(response) => {
                        session::login(&dispatch, response.access_token, response.user);
                        if let Some(navigator) = &navigator {
                            navigator.push(&AdminRoute::Dashboard);
                        }
                    }
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let dismiss_expired = {
        let expired_notice = expired_notice.clone();
        Callback::from(move |()| expired_notice.set(false))
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-gray-100">
            <div class="card w-full max-w-md shadow-lg bg-white">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Iniciar sesión"}</h2>
                    if *expired_notice {
                        <Flash
                            kind={FlashKind::Warning}
                            message={"Tu sesión ha expirado. Por favor, inicia sesión nuevamente.".to_string()}
                            on_dismiss={dismiss_expired}
                        />
                    }
                    if let Some(message) = &*error {
                        <Flash kind={FlashKind::Error} message={message.clone()} />
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Correo electrónico"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Contraseña"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { "Ingresando…" } else { "Ingresar" } }
                        </button>
                    </div>
                    <Link<Route> to={Route::Home} classes="link link-hover text-sm text-center mt-2">
                        {"Volver al sitio"}
                    </Link<Route>>
                </form>
            </div>
        </div>
    }
}
