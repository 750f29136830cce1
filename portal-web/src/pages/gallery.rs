use shared::models::{GALLERY_CATEGORIES, GalleryItem};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading, Pagination};
use crate::config::GALLERY_PAGE_SIZE;
use crate::filters::FilterState;
use crate::hooks::use_list_query;
use crate::routes::Route;

/// Public image gallery: the same URL-driven list pattern as the blog,
/// filtered by category name instead of category id.
#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let filters = FilterState::from_location(location.as_ref());

    let list = use_list_query(&filters, GALLERY_PAGE_SIZE, |params| async move {
        ApiClient::shared().list_gallery(&params).await
    });

    let on_category = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |category: Option<String>| {
            let updated = filters.with_category(category);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&Route::Gallery, &updated.to_query());
            }
        })
    };

    let on_page = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |page: u32| {
            let updated = filters.with_page(page);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&Route::Gallery, &updated.to_query());
            }
        })
    };

    let clear_filters = {
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Gallery);
            }
        })
    };

    let selected = filters.category.clone();
    let category_filter = html! {
        <div class="flex flex-wrap gap-2 mb-8">
            {
                {
                    let on_category = on_category.clone();
                    let class = if selected.is_none() { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" };
                    html! {
                        <span {class} onclick={Callback::from(move |_| on_category.emit(None))}>
                            {"Todas"}
                        </span>
                    }
                }
            }
            { for GALLERY_CATEGORIES.iter().map(|name| {
                let active = selected.as_deref() == Some(*name);
                let class = if active { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" };
                let on_category = on_category.clone();
                let onclick = Callback::from(move |_| on_category.emit(Some((*name).to_string())));
                html! { <span {class} {onclick}>{ *name }</span> }
            }) }
        </div>
    };

    let results = match list.state.page() {
        None => html! { <Loading /> },
        Some(page) if page.is_empty() => html! {
            <EmptyState
                message={"No hay imágenes en esta categoría.".to_string()}
                action_label={filters.has_active_filters().then(|| "Ver toda la galería".to_string())}
                on_action={filters.has_active_filters().then(|| clear_filters.clone())}
            />
        },
        Some(page) => html! {
            <>
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4 mb-10">
                    { for page.items.iter().map(gallery_card) }
                </div>
                <Pagination
                    page={page.page}
                    total_pages={page.total_pages()}
                    on_change={on_page}
                />
            </>
        },
    };

    html! {
        <div class="py-12 bg-gray-50 min-h-screen">
            <div class="container mx-auto px-4">
                <h1 class="text-4xl font-bold text-gray-900 mb-6">{"Galería"}</h1>
                { category_filter }
                if let Some(message) = &list.error {
                    <div class="mb-6 flex items-center gap-3">
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
        </div>
    }
}

fn gallery_card(item: &GalleryItem) -> Html {
    html! {
        <figure class="bg-white rounded-lg shadow-sm overflow-hidden">
            <img
                src={item.url.clone()}
                alt={item.title.clone()}
                class="w-full h-48 object-cover"
                loading="lazy"
            />
            <figcaption class="p-3">
                <p class="font-medium text-gray-900">{ item.title.clone() }</p>
                if let Some(caption) = &item.caption {
                    <p class="text-sm text-gray-500">{ caption.clone() }</p>
                }
            </figcaption>
        </figure>
    }
}
