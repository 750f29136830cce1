use shared::models::{GALLERY_CATEGORIES, GalleryItem};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading, Pagination};
use crate::config::ADMIN_PAGE_SIZE;
use crate::filters::FilterState;
use crate::hooks::use_list_query;
use crate::routes::AdminRoute;

/// Gallery management grid: category filter and pagination in the URL,
/// delete on each card.
#[function_component(AdminGalleryPage)]
pub fn admin_gallery_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let filters = FilterState::from_location(location.as_ref());
    let notice = use_state(|| None::<(FlashKind, String)>);

    let list = use_list_query(&filters, ADMIN_PAGE_SIZE, |params| async move {
        ApiClient::shared().list_gallery(&params).await
    });

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
                let _ = navigator.push_with_query(&AdminRoute::Gallery, &updated.to_query());
            }
        })
    };

    let on_page = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |page: u32| {
            let updated = filters.with_page(page);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&AdminRoute::Gallery, &updated.to_query());
            }
        })
    };

    let on_delete = {
        let notice = notice.clone();
        let retry = list.retry.clone();
        Callback::from(move |item: GalleryItem| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message(&format!("¿Eliminar \"{}\"?", item.title))
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let notice = notice.clone();
            let retry = retry.clone();
            spawn_local(async move {
                match ApiClient::shared().delete_gallery_item(item.id).await {
                    Ok(()) => {
                        notice.set(Some((FlashKind::Success, "Imagen eliminada".to_string())));
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
            <EmptyState message={"No hay imágenes en esta categoría.".to_string()} />
        },
        Some(page) => html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    { for page.items.iter().map(|item| {
                        let on_delete = on_delete.clone();
                        let card_item = item.clone();
                        html! {
                            <div key={item.id} class="card bg-white shadow-sm">
                                <figure>
                                    <img src={item.url.clone()} alt={item.title.clone()}
                                        class="w-full h-40 object-cover" loading="lazy" />
                                </figure>
                                <div class="card-body p-4">
                                    <p class="font-medium truncate">{ item.title.clone() }</p>
                                    if let Some(category) = &item.category {
                                        <span class="badge badge-outline badge-sm">{ category.clone() }</span>
                                    }
                                    <div class="card-actions justify-end mt-2">
                                        <Link<AdminRoute>
                                            to={AdminRoute::GalleryEdit { id: item.id }}
                                            classes="btn btn-ghost btn-xs"
                                        >
                                            {"Editar"}
                                        </Link<AdminRoute>>
                                        <button
                                            class="btn btn-ghost btn-xs text-error"
                                            onclick={Callback::from(move |_| on_delete.emit(card_item.clone()))}
                                        >
                                            {"Eliminar"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
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
                <h1 class="text-2xl font-bold text-gray-900">{"Galería"}</h1>
                <Link<AdminRoute> to={AdminRoute::GalleryNew} classes="btn btn-primary btn-sm">
                    {"Nueva imagen"}
                </Link<AdminRoute>>
            </div>

            <select class="select select-bordered" onchange={on_category_change}>
                <option value="" selected={filters.category.is_none()}>{"Todas las categorías"}</option>
                { for GALLERY_CATEGORIES.iter().map(|name| {
                    let selected = filters.category.as_deref() == Some(*name);
                    html! { <option value={*name} {selected}>{ *name }</option> }
                }) }
            </select>

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
