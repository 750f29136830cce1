use shared::models::{PageParams, Publication};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::routes::Route;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let recent = use_state(Vec::<Publication>::new);

    {
        let recent = recent.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let params = PageParams::new(1, 3);
                match ApiClient::shared().list_publications(&params).await {
                    Ok(page) => recent.set(page.items),
                    // The home page renders fine without the teaser strip.
                    Err(err) => warn(&format!("no se pudieron cargar publicaciones: {err}")),
                }
            });
            || ()
        });
    }

    html! {
        <>
            <section class="hero min-h-[60vh] bg-blue-700 text-white">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold mb-4">
                            {"I.E. José Abelardo Quiñones Gonzales"}
                        </h1>
                        <p class="text-lg mb-6">
                            {"Formando estudiantes con valores y excelencia académica."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="btn btn-warning">
                            {"Contáctanos"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="py-16 container mx-auto px-4">
                <div class="flex items-center justify-between mb-8">
                    <h2 class="text-3xl font-bold text-gray-900">{"Últimas publicaciones"}</h2>
                    <Link<Route> to={Route::Blog} classes="link link-primary">
                        {"Ver todas"}
                    </Link<Route>>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for recent.iter().map(|publication| html! {
                        <div class="card bg-white shadow-sm hover:shadow-md transition-shadow">
                            if let Some(image_url) = &publication.image_url {
                                <figure>
                                    <img src={image_url.clone()} alt={publication.title.clone()} class="h-44 w-full object-cover" loading="lazy" />
                                </figure>
                            }
                            <div class="card-body">
                                <h3 class="card-title text-lg">{ publication.title.clone() }</h3>
                                <p class="text-sm text-gray-500">
                                    { publication.created_at.format("%d/%m/%Y").to_string() }
                                </p>
                                <div class="card-actions justify-end">
                                    <Link<Route>
                                        to={Route::BlogPost { slug: publication.slug.clone() }}
                                        classes="btn btn-ghost btn-sm"
                                    >
                                        {"Leer más"}
                                    </Link<Route>>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
        </>
    }
}
