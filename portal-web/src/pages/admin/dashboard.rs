use shared::models::{DashboardRecent, DashboardStats};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{Flash, FlashKind, Loading};
use crate::routes::AdminRoute;

/// Admin landing page: resource counters plus the latest activity.
#[function_component(AdminDashboardPage)]
pub fn admin_dashboard_page() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let recent = use_state(|| None::<DashboardRecent>);
    let error = use_state(|| None::<String>);

    {
        let stats = stats.clone();
        let recent = recent.clone();
        let error = error.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = ApiClient::shared();
                match client.dashboard_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(err) => {
                        error.set(Some(err.user_message()));
                        stats.set(Some(DashboardStats::default()));
                    }
                }
                match client.dashboard_recent().await {
                    Ok(data) => recent.set(Some(data)),
                    Err(_) => recent.set(Some(DashboardRecent::default())),
                }
            });
            || ()
        });
    }

    let Some(stats) = (*stats).clone() else {
        return html! { <Loading /> };
    };

    let cards = [
        ("Publicaciones", stats.publications, AdminRoute::Publications),
        ("Categorías", stats.categories, AdminRoute::Categories),
        ("Galería", stats.gallery, AdminRoute::Gallery),
        ("Mensajes", stats.messages, AdminRoute::Messages),
    ];

    html! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold text-gray-900">{"Panel de administración"}</h1>

            if let Some(message) = &*error {
                <Flash kind={FlashKind::Error} message={message.clone()} />
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                { for cards.iter().map(|(label, value, route)| html! {
                    <Link<AdminRoute> to={route.clone()} classes="card bg-white shadow-sm hover:shadow-md transition-shadow">
                        <div class="card-body">
                            <p class="text-sm text-gray-500">{ *label }</p>
                            <p class="text-3xl font-bold text-gray-900">{ *value }</p>
                        </div>
                    </Link<AdminRoute>>
                }) }
            </div>

            if let Some(recent) = &*recent {
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="card bg-white shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title">{"Publicaciones recientes"}</h2>
                            <ul class="divide-y">
                                { for recent.publications.iter().map(|publication| html! {
                                    <li class="py-2 flex justify-between gap-2">
                                        <span class="truncate">{ publication.title.clone() }</span>
                                        <span class="text-sm text-gray-500 whitespace-nowrap">
                                            { publication.created_at.format("%d/%m/%Y").to_string() }
                                        </span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                    <div class="card bg-white shadow-sm">
                        <div class="card-body">
                            <h2 class="card-title">{"Mensajes recientes"}</h2>
                            <ul class="divide-y">
                                { for recent.messages.iter().map(|message| html! {
                                    <li class="py-2">
                                        <p class="font-medium">{ message.subject.clone() }</p>
                                        <p class="text-sm text-gray-500">
                                            { format!("{} · {}", message.name, message.email) }
                                        </p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}
