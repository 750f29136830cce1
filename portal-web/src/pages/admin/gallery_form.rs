use shared::models::{GALLERY_CATEGORIES, GalleryItemPatch, NewGalleryItem};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{Flash, FlashKind, Loading};
use crate::routes::AdminRoute;
use crate::validators::is_valid_url;

#[derive(Properties, PartialEq)]
pub struct GalleryFormProps {
    /// `None` registers a new image, `Some(id)` edits an existing one.
    pub id: Option<i64>,
}

/// Create/edit form for a gallery image.
#[function_component(GalleryFormPage)]
pub fn gallery_form_page(props: &GalleryFormProps) -> Html {
    let navigator = use_navigator();

    let title = use_state(String::new);
    let url = use_state(String::new);
    let caption = use_state(String::new);
    let category = use_state(|| None::<String>);
    let loading = use_state(|| props.id.is_some());
    let saving = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let title = title.clone();
        let url = url.clone();
        let caption = caption.clone();
        let category = category.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match ApiClient::shared().get_gallery_item(id).await {
                        Ok(item) => {
                            title.set(item.title);
                            url.set(item.url);
                            caption.set(item.caption.unwrap_or_default());
                            category.set(item.category);
                        }
                        Err(err) => error.set(Some(err.user_message())),
                    }
                    loading.set(false);
                });
            }
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

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let value = select.value();
                category.set((!value.is_empty()).then_some(value));
            }
        })
    };

    let onsubmit = {
        let id = props.id;
        let title = title.clone();
        let url = url.clone();
        let caption = caption.clone();
        let category = category.clone();
        let saving = saving.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let url_value = url.trim().to_string();
            if !is_valid_url(&url_value) {
                error.set(Some(
                    "La URL de la imagen debe comenzar con http:// o https://".to_string(),
                ));
                return;
            }
            let caption_value = caption.trim().to_string();
            saving.set(true);
            error.set(None);
            let title = (*title).clone();
            let category = (*category).clone();
            let saving = saving.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = ApiClient::shared();
                let outcome = match id {
                    None => {
                        client
                            .create_gallery_item(&NewGalleryItem {
                                title,
                                url: url_value,
                                caption: (!caption_value.is_empty()).then_some(caption_value),
                                category,
                            })
                            .await
                    }
                    Some(id) => {
                        client
                            .update_gallery_item(
                                id,
                                &GalleryItemPatch {
                                    title: Some(title),
                                    url: Some(url_value),
                                    caption: (!caption_value.is_empty()).then_some(caption_value),
                                    category,
                                },
                            )
                            .await
                    }
                };
                match outcome {
                    Ok(()) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&AdminRoute::Gallery);
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
        "Editar imagen"
    } else {
        "Nueva imagen"
    };
    let disable_submit = *saving || title.trim().is_empty() || url.trim().is_empty();

    html! {
        <div class="max-w-xl space-y-6">
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
                        value={(*title).clone()} oninput={bind_input(title.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="url"><span class="label-text">{"URL de la imagen"}</span></label>
                    <input id="url" class="input input-bordered" type="url" required=true
                        value={(*url).clone()} oninput={bind_input(url.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="caption"><span class="label-text">{"Descripción (opcional)"}</span></label>
                    <input id="caption" class="input input-bordered"
                        value={(*caption).clone()} oninput={bind_input(caption.clone())} />
                </div>
                <div class="form-control">
                    <label class="label" for="category"><span class="label-text">{"Categoría"}</span></label>
                    <select id="category" class="select select-bordered" onchange={on_category_change}>
                        <option value="" selected={category.is_none()}>{"Sin categoría"}</option>
                        { for GALLERY_CATEGORIES.iter().map(|name| {
                            let selected = category.as_deref() == Some(*name);
                            html! { <option value={*name} {selected}>{ *name }</option> }
                        }) }
                    </select>
                </div>
                <div class="flex gap-3">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        { if *saving { "Guardando…" } else { "Guardar" } }
                    </button>
                    <Link<AdminRoute> to={AdminRoute::Gallery} classes="btn btn-ghost">
                        {"Cancelar"}
                    </Link<AdminRoute>>
                </div>
            </form>
        </div>
    }
}
