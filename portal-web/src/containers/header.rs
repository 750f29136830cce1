use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::routes::Route;
use crate::session::SessionState;

const NAV_ITEMS: [(Route, &str); 5] = [
    (Route::Home, "Inicio"),
    (Route::About, "Nosotros"),
    (Route::Blog, "Blog"),
    (Route::Gallery, "Galería"),
    (Route::Contact, "Contacto"),
];

/// Public navigation bar. Shows a link into the admin panel while a
/// session is active; this is display convenience, the guard still runs.
#[function_component(Header)]
pub fn header() -> Html {
    let (session, _) = use_store::<SessionState>();

    html! {
        <header class="navbar bg-white shadow-sm sticky top-0 z-10">
            <div class="flex-1">
                <Link<Route> to={Route::Home} classes="text-xl font-bold text-blue-700 px-4">
                    {"I.E. JAQG"}
                </Link<Route>>
            </div>
            <nav class="flex-none">
                <ul class="menu menu-horizontal px-1 gap-1">
                    { for NAV_ITEMS.iter().map(|(route, label)| html! {
                        <li>
                            <Link<Route> to={route.clone()}>{ *label }</Link<Route>>
                        </li>
                    }) }
                    {
                        if session.is_authenticated() {
                            html! {
                                <li>
                                    <Link<Route> to={Route::AdminRoot} classes="font-semibold">
                                        {"Panel"}
                                    </Link<Route>>
                                </li>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </ul>
            </nav>
        </header>
    }
}
