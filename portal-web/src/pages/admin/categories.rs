use shared::models::{Category, NewCategory};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading};
use crate::validators::slugify;

/// Category management: flat list with an inline creation form. The
/// backend returns the full set, so there is no pagination here.
#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let categories = use_state(|| None::<Vec<Category>>);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<(FlashKind, String)>);
    let generation = use_state(|| 0u32);

    {
        let categories = categories.clone();
        let notice = notice.clone();
        use_effect_with(*generation, move |_| {
            spawn_local(async move {
                match ApiClient::shared().list_categories().await {
                    Ok(list) => categories.set(Some(list)),
                    Err(err) => {
                        notice.set(Some((FlashKind::Error, err.user_message())));
                        categories.set(Some(Vec::new()));
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

    let onsubmit = {
        let name = name.clone();
        let description = description.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = name.trim().to_string();
            if name_value.is_empty() {
                return;
            }
            let description_value = description.trim().to_string();
            let payload = NewCategory {
                slug: slugify(&name_value),
                name: name_value,
                description: (!description_value.is_empty()).then_some(description_value),
            };
            saving.set(true);
            let name = name.clone();
            let description = description.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match ApiClient::shared().create_category(&payload).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Categoría creada".to_string())));
                        name.set(String::new());
                        description.set(String::new());
                        generation.set(*generation + 1);
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let notice = notice.clone();
        let generation = generation.clone();
        Callback::from(move |category: Category| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("¿Eliminar \"{}\"?", category.name))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let notice = notice.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_category(category.id).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Categoría eliminada".to_string())));
                        generation.set(*generation + 1);
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
            });
        })
    };

    let listing = match &*categories {
        None => html! { <Loading /> },
        Some(list) if list.is_empty() => html! {
            <EmptyState message={"Aún no hay categorías.".to_string()} />
        },
        Some(list) => html! {
            <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
                <table class="table w-full">
                    <thead>
                        <tr>
                            <th>{"Nombre"}</th>
                            <th>{"Slug"}</th>
                            <th>{"Descripción"}</th>
                            <th class="text-right">{"Acciones"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for list.iter().map(|category| {
                            let on_delete = on_delete.clone();
                            let row_item = category.clone();
                            html! {
                                <tr key={category.id}>
                                    <td class="font-medium">{ category.name.clone() }</td>
                                    <td class="font-mono text-sm">{ category.slug.clone() }</td>
                                    <td>{ category.description.clone().unwrap_or_else(|| "—".to_string()) }</td>
                                    <td class="text-right">
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
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
            <h1 class="text-2xl font-bold text-gray-900">{"Categorías"}</h1>

            if let Some((kind, text)) = &*notice {
                <Flash kind={*kind} message={text.clone()} on_dismiss={dismiss_notice} />
            }

            <form class="flex flex-col md:flex-row gap-3 bg-white rounded-lg shadow-sm p-4" onsubmit={onsubmit}>
                <input
                    class="input input-bordered w-full md:max-w-xs"
                    placeholder="Nombre de la categoría"
                    required=true
                    value={(*name).clone()}
                    oninput={bind_input(name.clone())}
                />
                <input
                    class="input input-bordered w-full"
                    placeholder="Descripción (opcional)"
                    value={(*description).clone()}
                    oninput={bind_input(description.clone())}
                />
                <button class="btn btn-primary" type="submit" disabled={*saving || name.trim().is_empty()}>
                    { if *saving { "Creando…" } else { "Crear" } }
                </button>
            </form>

            { listing }
        </div>
    }
}
