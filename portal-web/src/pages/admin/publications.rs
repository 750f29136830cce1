use shared::models::{Category, Publication};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::use_debounce;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading, Pagination};
use crate::config::{ADMIN_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::filters::FilterState;
use crate::hooks::use_list_query;
use crate::routes::AdminRoute;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// Publications management table. Same URL-driven list controller as the
/// public blog, with row actions on top.
#[function_component(AdminPublicationsPage)]
pub fn admin_publications_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let filters = FilterState::from_location(location.as_ref());

    let draft = use_state(|| filters.search.clone());
    let categories = use_state(Vec::<Category>::new);
    let notice = use_state(|| None::<(FlashKind, String)>);

    {
        let categories = categories.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                match ApiClient::shared().list_categories().await {
                    Ok(list) => categories.set(list),
                    Err(err) => warn(&format!("no se pudieron cargar las categorías: {err}")),
                }
            });
            || ()
        });
    }

    {
        let draft = draft.clone();
        use_effect_with(filters.search.clone(), move |search| {
            if *draft != *search {
                draft.set(search.clone());
            }
            || ()
        });
    }

    let list = use_list_query(&filters, ADMIN_PAGE_SIZE, |params| async move {
        ApiClient::shared().list_publications(&params).await
    });

    let commit_search = {
        let filters = filters.clone();
        let draft = draft.clone();
        let navigator = navigator.clone();
        use_debounce(
            move || {
                if *draft == filters.search {
                    return;
                }
                let updated = filters.with_search((*draft).clone());
                if let Some(navigator) = &navigator {
                    let _ =
                        navigator.replace_with_query(&AdminRoute::Publications, &updated.to_query());
                }
            },
            SEARCH_DEBOUNCE_MS,
        )
    };

    let on_search_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                draft.set(input.value());
                commit_search.run();
            }
        })
    };

    let on_category_change = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            let updated = filters.with_category((!value.is_empty()).then_some(value));
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&AdminRoute::Publications, &updated.to_query());
            }
        })
    };

    let on_page = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |page: u32| {
            let updated = filters.with_page(page);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&AdminRoute::Publications, &updated.to_query());
            }
        })
    };

    let on_delete = {
        let notice = notice.clone();
        let retry = list.retry.clone();
        Callback::from(move |publication: Publication| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("¿Eliminar \"{}\"?", publication.title))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let notice = notice.clone();
            let retry = retry.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_publication(publication.id).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Publicación eliminada".to_string())));
                        retry.emit(());
                    }
                    Err(err) => notice.set(Some((FlashKind::Error, err.user_message()))),
                }
            });
        })
    };

    let results = match list.state.page() {
        None => html! { <Loading /> },
        Some(page) if page.is_empty() => html! {
            <EmptyState message={"No hay publicaciones para los filtros seleccionados.".to_string()} />
        },
        Some(page) => html! {
            <>
                <div class="overflow-x-auto bg-white rounded-lg shadow-sm">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>{"Título"}</th>
                                <th>{"Categoría"}</th>
                                <th>{"Fecha"}</th>
                                <th class="text-right">{"Acciones"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for page.items.iter().map(|publication| {
                                let on_delete = on_delete.clone();
                                let row_item = publication.clone();
                                html! {
                                    <tr key={publication.id}>
                                        <td class="font-medium">{ publication.title.clone() }</td>
                                        <td>
                                            { publication.category.as_ref()
                                                .map(|category| category.name.clone())
                                                .unwrap_or_else(|| "—".to_string()) }
                                        </td>
                                        <td>{ publication.created_at.format("%d/%m/%Y").to_string() }</td>
                                        <td class="text-right space-x-2">
                                            <Link<AdminRoute>
                                                to={AdminRoute::PublicationEdit { id: publication.id }}
                                                classes="btn btn-ghost btn-xs"
                                            >
                                                {"Editar"}
                                            </Link<AdminRoute>>
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
                <div class="mt-6">
                    <Pagination
                        page={page.page}
                        total_pages={page.total_pages()}
                        on_change={on_page}
                    />
                </div>
            </>
        },
    };

    let dismiss_notice = {
        let notice = notice.clone();
        Callback::from(move |()| notice.set(None))
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Publicaciones"}</h1>
                <Link<AdminRoute> to={AdminRoute::PublicationNew} classes="btn btn-primary btn-sm">
                    {"Nueva publicación"}
                </Link<AdminRoute>>
            </div>

            <div class="flex flex-col md:flex-row gap-3">
                <input
                    class="input input-bordered w-full md:max-w-xs"
                    type="search"
                    placeholder="Buscar…"
                    value={(*draft).clone()}
                    oninput={on_search_input}
                />
                <select class="select select-bordered" onchange={on_category_change}>
                    <option value="" selected={filters.category.is_none()}>{"Todas las categorías"}</option>
                    { for categories.iter().map(|category| {
                        let id = category.id.to_string();
                        let selected = filters.category.as_deref() == Some(id.as_str());
                        html! {
                            <option value={id} {selected}>{ category.name.clone() }</option>
                        }
                    }) }
                </select>
            </div>

            if let Some((kind, text)) = &*notice {
                <Flash kind={*kind} message={text.clone()} on_dismiss={dismiss_notice} />
            }

            if let Some(message) = &list.error {
                <div class="flex items-center gap-3">
                    <div class="flex-grow">
                        <Flash
                            kind={FlashKind::Error}
                            message={message.clone()}
                            on_dismiss={list.dismiss.clone()}
                        />
                    </div>
                    <button
                        class="btn btn-outline btn-sm"
                        onclick={{
                            let retry = list.retry.clone();
                            Callback::from(move |_| retry.emit(()))
                        }}
                    >
                        {"Reintentar"}
                    </button>
                </div>
            }

            { results }
        </div>
    }
}
