use shared::models::{ApiError, Publication};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::ApiClient;
use crate::components::{EmptyState, Loading};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

enum PostState {
    Loading,
    Found(Box<Publication>),
    Missing(String),
}

/// Detail view for a single publication, addressed by slug.
#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    let state = use_state(|| PostState::Loading);

    {
        let state = state.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            state.set(PostState::Loading);
            spawn_local(async move {
                match ApiClient::shared().get_publication_by_slug(&slug).await {
                    Ok(publication) => state.set(PostState::Found(Box::new(publication))),
                    Err(ApiError::NotFound) => {
                        state.set(PostState::Missing("Publicación no encontrada".to_string()));
                    }
                    Err(err) => state.set(PostState::Missing(err.user_message())),
                }
            });
            || ()
        });
    }

    match &*state {
        PostState::Loading => html! { <Loading /> },
        PostState::Missing(message) => html! {
            <div class="py-12 container mx-auto px-4">
                <EmptyState message={message.clone()} />
                <div class="text-center">
                    <Link<Route> to={Route::Blog} classes="btn btn-primary">
                        {"Volver al blog"}
                    </Link<Route>>
                </div>
            </div>
        },
        PostState::Found(publication) => {
            // The content is authored HTML from the admin editor.
            let content = Html::from_html_unchecked(AttrValue::from(publication.content.clone()));
            html! {
                <article class="py-12 container mx-auto px-4 max-w-3xl">
                    if let Some(image_url) = &publication.image_url {
                        <img
                            src={image_url.clone()}
                            alt={publication.title.clone()}
                            class="w-full h-96 object-cover rounded-lg mb-8"
                        />
                    }
                    <div class="flex flex-wrap items-center gap-3 text-sm text-gray-600 mb-4">
                        if let Some(category) = &publication.category {
                            <span class="badge badge-info">{ category.name.clone() }</span>
                        }
                        <span>{ publication.created_at.format("%d/%m/%Y").to_string() }</span>
                    </div>
                    <h1 class="text-4xl font-bold text-gray-900 mb-6">
                        { publication.title.clone() }
                    </h1>
                    <div class="prose prose-lg max-w-none text-gray-700">
                        { content }
                    </div>
                    <div class="mt-10">
                        <Link<Route> to={Route::Blog} classes="link link-primary">
                            {"← Volver al blog"}
                        </Link<Route>>
                    </div>
                </article>
            }
        }
    }
}
