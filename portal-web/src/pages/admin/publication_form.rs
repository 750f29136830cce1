use shared::models::{Category, NewPublication, PublicationPatch};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{Flash, FlashKind, Loading};
use crate::routes::AdminRoute;
use crate::validators::{is_valid_url, slugify};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

#[derive(Properties, PartialEq)]
pub struct PublicationFormProps {
    /// `None` creates a new publication, `Some(id)` edits an existing one.
    pub id: Option<i64>,
}

/// Create/edit form for a publication. The slug tracks the title until the
/// user edits the slug by hand.
#[function_component(PublicationFormPage)]
pub fn publication_form_page(props: &PublicationFormProps) -> Html {
    let navigator = use_navigator();

    let title = use_state(String::new);
    let slug = use_state(String::new);
    let slug_touched = use_state(|| false);
    let content = use_state(String::new);
    let excerpt = use_state(String::new);
    let image_url = use_state(String::new);
    let category_id = use_state(|| None::<i64>);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| props.id.is_some());
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

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
        let title = title.clone();
        let slug = slug.clone();
        let slug_touched = slug_touched.clone();
        let content = content.clone();
        let excerpt = excerpt.clone();
        let image_url = image_url.clone();
        let category_id = category_id.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match ApiClient::shared().get_publication(id).await {
                        Ok(publication) => {
                            title.set(publication.title);
                            slug.set(publication.slug);
                            slug_touched.set(true);
                            content.set(publication.content);
                            excerpt.set(publication.excerpt.unwrap_or_default());
                            image_url.set(publication.image_url.unwrap_or_default());
                            category_id.set(Some(publication.category_id));
                        }
                        Err(err) => error.set(Some(err.user_message())),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_title_input = {
        let title = title.clone();
        let slug = slug.clone();
        let slug_touched = slug_touched.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                if !*slug_touched {
                    slug.set(slugify(&value));
                }
                title.set(value);
            }
        })
    };

    let on_slug_input = {
        let slug = slug.clone();
        let slug_touched = slug_touched.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                slug_touched.set(true);
                slug.set(input.value());
            }
        })
    };

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category_id.set(select.value().parse::<i64>().ok());
            }
        })
    };

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let on_content_input = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let onsubmit = {
        let id = props.id;
        let title = title.clone();
        let slug = slug.clone();
        let content = content.clone();
        let excerpt = excerpt.clone();
        let image_url = image_url.clone();
        let category_id = category_id.clone();
        let saving = saving.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(category_id) = *category_id else {
                error.set(Some("Selecciona una categoría".to_string()));
                return;
            };
            let image_value = image_url.trim().to_string();
            if !image_value.is_empty() && !is_valid_url(&image_value) {
                error.set(Some(
                    "La URL de la imagen debe comenzar con http:// o https://".to_string(),
                ));
                return;
            }
            let excerpt_value = excerpt.trim().to_string();
            saving.set(true);
            error.set(None);
            let title = (*title).clone();
            let slug = (*slug).clone();
            let content = (*content).clone();
            let saving = saving.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let outcome = match id {
                    None => {
                        client
                            .create_publication(&NewPublication {
                                title,
                                slug,
                                content,
                                excerpt: (!excerpt_value.is_empty()).then_some(excerpt_value),
                                image_url: (!image_value.is_empty()).then_some(image_value),
                                category_id,
                            })
                            .await
                    }
                    Some(id) => {
                        client
                            .update_publication(
                                id,
                                &PublicationPatch {
                                    title: Some(title),
                                    slug: Some(slug),
                                    content: Some(content),
                                    excerpt: (!excerpt_value.is_empty()).then_some(excerpt_value),
                                    image_url: (!image_value.is_empty()).then_some(image_value),
                                    category_id: Some(category_id),
                                },
                            )
                            .await
                    }
                };
                match outcome {
                    Ok(()) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&AdminRoute::Publications);
                        }
                    }
                    Err(err) => {
                        error.set(Some(err.user_message()));
                        saving.set(false);
                    }
                }
            });
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let heading = if props.id.is_some() {
        "Editar publicación"
    } else {
        "Nueva publicación"
    };
    let disable_submit =
        *saving || title.trim().is_empty() || slug.trim().is_empty() || content.trim().is_empty();

    html! {
        <div class="max-w-3xl space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{ heading }</h1>

            if let Some(message) = &*error {
                <Flash
                    kind={FlashKind::Error}
                    message={message.clone()}
                    on_dismiss={{
                        let error = error.clone();
                        Callback::from(move |()| error.set(None))
                    }}
                />
            }

            <form class="space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="title"><span class="label-text">{"Título"}</span></label>
                    <input id="title" class="input input-bordered" required=true
                        value={(*title).clone()} oninput={on_title_input} />
                </div>
                <div class="form-control">
                    <label class="label" for="slug"><span class="label-text">{"Slug"}</span></label>
                    <input id="slug" class="input input-bordered font-mono" required=true
                        value={(*slug).clone()} oninput={on_slug_input} />
                </div>
                <div class="form-control">
                    <label class="label" for="category"><span class="label-text">{"Categoría"}</span></label>
                    <select id="category" class="select select-bordered" onchange={on_category_change}>
                        <option value="" selected={category_id.is_none()} disabled=true>
                            {"Selecciona una categoría"}
                        </option>
                        { for categories.iter().map(|category| {
                            let selected = *category_id == Some(category.id);
                            html! {
                                <option value={category.id.to_string()} {selected}>
                                    { category.name.clone() }
                                </option>
                            }
                        }) }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="excerpt"><span class="label-text">{"Resumen (opcional)"}</span></label>
                    <input id="excerpt" class="input input-bordered"
                        value={(*excerpt).clone()} oninput={bind_input(excerpt.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="image_url"><span class="label-text">{"URL de imagen (opcional)"}</span></label>
                    <input id="image_url" class="input input-bordered" type="url"
                        value={(*image_url).clone()} oninput={bind_input(image_url.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="content"><span class="label-text">{"Contenido"}</span></label>
                    <textarea id="content" class="textarea textarea-bordered h-64 font-mono" required=true
                        value={(*content).clone()} oninput={on_content_input} />
                </div>
                <div class="flex gap-3">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        { if *saving { "Guardando…" } else { "Guardar" } }
                    </button>
                    <Link<AdminRoute> to={AdminRoute::Publications} classes="btn btn-ghost">
                        {"Cancelar"}
                    </Link<AdminRoute>>
                </div>
            </form>
        </div>
    }
}
