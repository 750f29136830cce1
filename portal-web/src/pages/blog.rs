use shared::models::{Category, Publication};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_debounce;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Flash, FlashKind, Loading, Pagination};
use crate::config::{BLOG_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::filters::FilterState;
use crate::hooks::use_list_query;
use crate::routes::Route;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// Public blog: the reference list view. Filters live in the URL, the
/// search box commits through a 500 ms debounce, and every filter change
/// re-fetches one page of publications.
#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let filters = FilterState::from_location(location.as_ref());

    // Draft search text: updates on every keystroke so the field stays
    // responsive, lags the URL by at most the debounce window.
    let draft = use_state(|| filters.search.clone());
    let categories = use_state(Vec::<Category>::new);

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

    // Back/forward navigation rewrites the committed search; resync the
    // draft so the input reflects the URL again.
    {
        let draft = draft.clone();
        use_effect_with(filters.search.clone(), move |search| {
            if *draft != *search {
                draft.set(search.clone());
            }
            || ()
        });
    }

    let list = use_list_query(&filters, BLOG_PAGE_SIZE, |params| async move {
        ApiClient::shared().list_publications(&params).await
    });

    // Commit the draft after the debounce window. Typing edits replace the
    // history entry instead of stacking one per keystroke.
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
                    let _ = navigator.replace_with_query(&Route::Blog, &updated.to_query());
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

    let on_category = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |category: Option<String>| {
            let updated = filters.with_category(category);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&Route::Blog, &updated.to_query());
            }
        })
    };

    let on_page = {
        let filters = filters.clone();
        let navigator = navigator.clone();
        Callback::from(move |page: u32| {
            let updated = filters.with_page(page);
            if let Some(navigator) = &navigator {
                let _ = navigator.push_with_query(&Route::Blog, &updated.to_query());
            }
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        })
    };

    let clear_filters = {
        let draft = draft.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            draft.set(String::new());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Blog);
            }
        })
    };

    let category_badges = {
        let selected = filters.category.clone();
        let on_category = on_category.clone();
        html! {
            <div class="flex flex-wrap gap-2">
                {
                    {
                        let on_category = on_category.clone();
                        let all_class = if selected.is_none() { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" };
                        html! {
                            <span class={all_class} onclick={Callback::from(move |_| on_category.emit(None))}>
                                {"Todas"}
                            </span>
                        }
                    }
                }
                { for categories.iter().map(|category| {
                    let id = category.id.to_string();
                    let active = selected.as_deref() == Some(id.as_str());
                    let class = if active { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" };
                    let on_category = on_category.clone();
                    let onclick = Callback::from(move |_| on_category.emit(Some(id.clone())));
                    html! { <span {class} {onclick}>{ category.name.clone() }</span> }
                }) }
            </div>
        }
    };

    let results = match list.state.page() {
        None => html! { <Loading /> },
        Some(page) if page.is_empty() => html! {
            <EmptyState
                message={"No se encontraron publicaciones con los filtros seleccionados.".to_string()}
                action_label={filters.has_active_filters().then(|| "Ver todas las publicaciones".to_string())}
                on_action={filters.has_active_filters().then(|| clear_filters.clone())}
            />
        },
        Some(page) => html! {
            <>
                <div class="space-y-8 mb-12">
                    { for page.items.iter().map(publication_card) }
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
                <div class="mb-8">
                    <h1 class="text-4xl font-bold text-gray-900 mb-2">{"Publicaciones"}</h1>
                    <p class="text-lg text-gray-600">
                        {"Noticias, eventos y artículos de nuestra comunidad educativa."}
                    </p>
                </div>

                <div class="bg-white rounded-lg shadow-sm p-6 mb-8 space-y-4">
                    <input
                        class="input input-bordered w-full"
                        type="search"
                        placeholder="Buscar publicaciones…"
                        value={(*draft).clone()}
                        oninput={on_search_input}
                    />
                    { category_badges }
                </div>

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

fn publication_card(publication: &Publication) -> Html {
    let excerpt = publication
        .excerpt
        .clone()
        .unwrap_or_else(|| truncate(&publication.content, 300));
    html! {
        <article class="bg-white rounded-lg shadow-sm overflow-hidden hover:shadow-md transition-shadow">
            if let Some(image_url) = &publication.image_url {
                <img src={image_url.clone()} alt={publication.title.clone()} class="w-full h-72 object-cover" loading="lazy" />
            }
            <div class="p-8">
                <div class="flex flex-wrap items-center gap-3 text-sm text-gray-600 mb-3">
                    if let Some(category) = &publication.category {
                        <span class="badge badge-info">{ category.name.clone() }</span>
                    }
                    <span>{ publication.created_at.format("%d/%m/%Y").to_string() }</span>
                    if let Some(author) = &publication.author {
                        if let Some(name) = &author.name {
                            <span>{ name.clone() }</span>
                        }
                    }
                </div>
                <h2 class="text-2xl font-bold text-gray-900 mb-3">{ publication.title.clone() }</h2>
                <p class="text-gray-600 mb-4">{ excerpt }</p>
                <Link<Route>
                    to={Route::BlogPost { slug: publication.slug.clone() }}
                    classes="btn btn-primary btn-sm"
                >
                    {"Leer más"}
                </Link<Route>>
            </div>
        </article>
    }
}

fn truncate(content: &str, limit: usize) -> String {
    if content.chars().count() <= limit {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(limit).collect();
    truncated.push('…');
    truncated
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use yew::prelude::*;
    use yew_hooks::use_debounce;

    use crate::config::SEARCH_DEBOUNCE_MS;

    wasm_bindgen_test_configure!(run_in_browser);

    const KEYSTROKES: [&str; 3] = ["e", "ev", "evento"];
    const KEYSTROKE_GAP_MS: u32 = 100;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        commits: Rc<RefCell<Vec<String>>>,
    }

    /// The search-box wiring in miniature: a draft that changes on every
    /// keystroke and a debounced commit that compares it against the
    /// committed value before recording it.
    #[function_component(SearchBurstHarness)]
    fn search_burst_harness(props: &HarnessProps) -> Html {
        let step = use_state(|| 0usize);
        let draft = use_state(String::new);
        let committed = use_state(String::new);

        let commit = {
            let draft = draft.clone();
            let committed = committed.clone();
            let commits = props.commits.clone();
            use_debounce(
                move || {
                    if *draft == *committed {
                        return;
                    }
                    commits.borrow_mut().push((*draft).clone());
                    committed.set((*draft).clone());
                },
                SEARCH_DEBOUNCE_MS,
            )
        };

        {
            let step = step.clone();
            let draft = draft.clone();
            use_effect_with(*step, move |current| {
                if let Some(text) = KEYSTROKES.get(*current) {
                    draft.set((*text).to_string());
                    commit.run();
                    let step = step.clone();
                    let next = *current + 1;
                    Timeout::new(KEYSTROKE_GAP_MS, move || step.set(next)).forget();
                }
                || ()
            });
        }

        html! {}
    }

    #[wasm_bindgen_test]
    async fn keystroke_burst_commits_once_with_the_final_value() {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let _app = yew::Renderer::<SearchBurstHarness>::with_root_and_props(
            root,
            HarnessProps {
                commits: commits.clone(),
            },
        )
        .render();

        // Three keystrokes inside the window, then enough idle time for
        // the debounce to fire once.
        let burst = KEYSTROKES.len() as u32 * KEYSTROKE_GAP_MS;
        TimeoutFuture::new(burst + SEARCH_DEBOUNCE_MS + 300).await;

        assert_eq!(*commits.borrow(), vec!["evento".to_string()]);
    }
}
