use shared::models::UserRole;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::ApiClient;
use crate::routes::{AdminRoute, Route};
use crate::session::{self, SessionState};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
    pub current: AdminRoute,
}

/// Admin frame: sidebar navigation plus logout. On mount it revalidates the
/// profile against the backend; an expired token surfaces here as a 401 and
/// the gateway ends the session.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match ApiClient::shared().get_profile().await {
                    Ok(user) => session::update_user(&dispatch, user),
                    // Transient failures keep the cached identity; a 401 is
                    // already handled by the gateway.
                    Err(_) => {}
                }
            });
            || ()
        });
    }

    let on_logout = {
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session::logout(&dispatch);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let is_superadmin = session
        .user
        .as_ref()
        .is_some_and(|user| user.role == UserRole::Superadmin);
    let display_name = session
        .user
        .as_ref()
        .map(|user| user.name.clone().unwrap_or_else(|| user.email.clone()))
        .unwrap_or_default();

    html! {
        <div class="min-h-screen flex bg-gray-100">
            <aside class="w-64 bg-gray-900 text-gray-100 flex flex-col">
                <div class="p-4 text-lg font-bold border-b border-gray-700">
                    {"Administración"}
                </div>
                <nav class="flex-grow p-2">
                    <ul class="menu gap-1">
                        { for AdminRoute::nav_items().into_iter()
                            // Account management is only shown to superadmins;
                            // the backend enforces the real permission.
                            .filter(|(route, _)| !matches!(route, AdminRoute::Users) || is_superadmin)
                            .map(|(route, label)| {
                                let active = route == props.current;
                                html! {
                                    <li>
                                        <Link<AdminRoute>
                                            to={route}
                                            classes={if active { "active font-semibold" } else { "" }}
                                        >
                                            { label }
                                        </Link<AdminRoute>>
                                    </li>
                                }
                            })
                        }
                    </ul>
                </nav>
                <div class="p-4 border-t border-gray-700 space-y-2">
                    <p class="text-sm text-gray-400 truncate">{ display_name }</p>
                    <button class="btn btn-outline btn-sm w-full" onclick={on_logout}>
                        {"Cerrar sesión"}
                    </button>
                </div>
            </aside>
            <main class="flex-grow p-6 lg:p-8">
                { props.children.clone() }
            </main>
        </div>
    }
}
