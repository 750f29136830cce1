use shared::models::{CreateUserRequest, User, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading};
use crate::session::SessionState;

/// Account management, reachable from the sidebar only for superadmins.
/// The gate here is presentational; the backend rejects the calls for
/// anyone else.
#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let (session, _) = use_store::<SessionState>();

    let users = use_state(|| None::<Vec<User>>);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let name = use_state(String::new);
    let role = use_state(|| UserRole::Editor);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<(FlashKind, String)>);
    let generation = use_state(|| 0u32);

    {
        let users = users.clone();
        let notice = notice.clone();
        use_effect_with(*generation, move |_| {
            spawn_local(async move {
                match ApiClient::shared().list_users().await {
                    Ok(list) => users.set(Some(list)),
                    Err(err) => {
                        notice.set(Some((FlashKind::Error, err.user_message())));
                        users.set(Some(Vec::new()));
                    }
                }
            });
            || ()
        });
    }

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_role_change = {
        let role = role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(parsed) = select.value().parse::<UserRole>() {
                    role.set(parsed);
                }
            }
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let name = name.clone();
        let role = role.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = name.trim().to_string();
            let payload = CreateUserRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
                name: (!name_value.is_empty()).then_some(name_value),
                role: *role,
            };
            saving.set(true);
            let email = email.clone();
            let password = password.clone();
            let name = name.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match ApiClient::shared().create_user(&payload).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Usuario creado".to_string())));
                        email.set(String::new());
                        password.set(String::new());
                        name.set(String::new());
                        generation.set(*generation + 1);
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
                saving.set(false);
            });
        })
    };

    let current_user_id = session.user.as_ref().map(|user| user.id);
    let on_delete = {
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |user: User| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("¿Eliminar la cuenta {}?", user.email))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_user(user.id).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Usuario eliminado".to_string())));
                        generation.set(*generation + 1);
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
            });
        })
    };

    let is_superadmin = session
        .user
        .as_ref()
        .is_some_and(|user| user.role == UserRole::Superadmin);
    if !is_superadmin {
        return html! {
            <Flash
                kind={FlashKind::Warning}
                message={"Solo una cuenta superadmin puede administrar usuarios.".to_string()}
            />
        };
    }

    let listing = match &*users {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! {
            <EmptyState message={"No hay cuentas registradas.".to_string()} />
        },
        Some(list) => html! {
            <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Correo"}</th>
                            <th>{"Nombre"}</th>
                            <th>{"Rol"}</th>
                            <th>{"Alta"}</th>
                            <th class="text-right">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.iter().map(|user| {
                            let is_self = current_user_id == Some(user.id);
                            let on_delete = on_delete.clone();
                            let row_item = user.clone();
                            html! {
                                <tr key={user.id}>
                                    <td class="font-medium">{ user.email.clone() }</td>
                                    <td>{ user.name.clone().unwrap_or_else(|| "—".to_string()) }</td>
                                    <td><span class="badge badge-outline">{ user.role.as_str() }</span></td>
                                    <td>{ user.created_at.format("%d/%m/%Y").to_string() }</td>
                                    <td class="text-right">
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            disabled={is_self}
                                            onclick={Callback::from(move |_| on_delete.emit(row_item.clone()))}
                                        >
                                            {"Eliminar"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        },
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"Usuarios"}</h1>

            if let Some((kind, text)) = &*notice {
                <Flash kind={*kind} message={text.clone()} on_dismiss={dismiss_notice} />
            }

            <form class="grid grid-cols-1 md:grid-cols-5 gap-3 bg-white rounded-lg shadow-sm p-4" onsubmit={onsubmit}>
                <input
                    class="input input-bordered"
                    type="email"
                    placeholder="Correo electrónico"
                    required=true
                    value={(*email).clone()}
                    oninput={bind_input(email.clone())}
                />
                <input
                    class="input input-bordered"
                    type="password"
                    placeholder="Contraseña"
                    required=true
                    value={(*password).clone()}
                    oninput={bind_input(password.clone())}
                />
                <input
                    class="input input-bordered"
                    placeholder="Nombre (opcional)"
                    value={(*name).clone()}
                    oninput={bind_input(name.clone())}
                />
                <select class="select select-bordered" onchange={on_role_change}>
                    { for [UserRole::Editor, UserRole::Admin, UserRole::Superadmin].iter().map(|value| {
                        html! {
                            <option value={value.as_str()} selected={*role == *value}>
                                { value.as_str() }
                            </option>
                        }
                    }) }
                </select>
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled={*saving || email.trim().is_empty() || password.is_empty()}
                >
                    { if *saving { "Creando…" } else { "Crear" } }
                </button>
            </form>

            { listing }
        </div>
    }
}
