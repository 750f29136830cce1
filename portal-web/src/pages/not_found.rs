use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="py-24 text-center">
            <h1 class="text-6xl font-bold text-gray-300 mb-4">{"404"}</h1>
            <p class="text-lg text-gray-600 mb-6">{"La página que buscas no existe."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Volver al inicio"}
            </Link<Route>>
        </div>
    }
}
