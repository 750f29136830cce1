//! HTTP client boundary.
//!
//! Every request leaves through [`ApiClient`]: the bearer token is attached
//! on the way out, and failures are normalized into the closed
//! [`ApiError`] taxonomy on the way in. A 401 on a protected request hands
//! control to the session gateway; nothing outside this module inspects
//! raw status codes or error bodies.

use gloo_storage::{LocalStorage, Storage};
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiError, Category, CategoryPatch, ContactMessage, DashboardRecent, DashboardStats,
    GalleryItem, GalleryItemPatch, ListEnvelope, LoginRequest, LoginResponse, NewCategory,
    NewContactMessage, NewGalleryItem, NewPublication, PageParams, Paginated, Publication,
    PublicationPatch, UpdateUserRequest, User,
};
use wasm_bindgen::prelude::*;

use crate::config::{AppConfig, STORAGE_KEY_TOKEN};
use crate::session;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// REST client for the institutional backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    /// Create a client against the given backend origin.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Process-wide client built from [`AppConfig`].
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&AppConfig::new().api_base_url))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Outgoing-request hook: add the bearer credential when a session
    /// token is persisted, pass through unchanged otherwise.
    fn attach_auth(request: RequestBuilder) -> RequestBuilder {
        match LocalStorage::get::<String>(STORAGE_KEY_TOKEN) {
            Ok(token) => request.bearer_auth(token),
            Err(_) => request,
        }
    }

    /// Send a request and normalize the outcome. `path` identifies the
    /// endpoint for the 401 policy.
    async fn execute(&self, path: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = Self::attach_auth(request).send().await.map_err(|err| {
            // No response at all: transient, never touches the session.
            warn(&format!("sin respuesta del backend: {err}"));
            ApiError::Network(err.to_string())
        })?;
        Self::check(path, response).await
    }

    /// Incoming-response hook.
    async fn check(path: &str, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let detail = read_error_detail(response).await;
        let error = ApiError::from_status(status.as_u16(), detail);
        match &error {
            ApiError::Unauthorized => session::handle_unauthorized(path),
            ApiError::Forbidden => {
                // Authorization failure, not authentication: log only.
                warn(&format!("permiso denegado en {path}"));
            }
            _ => {}
        }
        Err(error)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.client.get(self.api_url(path));
        let response = self.execute(path, request).await?;
        decode(response).await
    }

    // --- auth ---

    /// Authenticate with email/password. A 401 here means bad credentials,
    /// not an expired session.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let path = "administracion/login";
        let request = self.client.post(self.api_url(path)).json(payload);
        let response = self
            .execute(path, request)
            .await
            .map_err(ApiError::for_login)?;
        decode(response).await
    }

    /// Fetch the authenticated profile. A 401 here is the usual way an
    /// expired token is discovered.
    pub async fn get_profile(&self) -> Result<User, ApiError> {
        self.get_json("administracion/mi-perfil").await
    }

    // --- publications ---

    pub async fn list_publications(
        &self,
        params: &PageParams,
    ) -> Result<Paginated<Publication>, ApiError> {
        let path = "publicaciones";
        let request = self.client.get(self.api_url(path)).query(params);
        let response = self.execute(path, request).await?;
        let envelope: ListEnvelope<Publication> = decode(response).await?;
        Ok(envelope.into_paginated(params))
    }

    pub async fn get_publication(&self, id: i64) -> Result<Publication, ApiError> {
        self.get_json(&format!("publicaciones/{id}")).await
    }

    /// The backend has no by-slug endpoint, so fetch a wide page and match
    /// locally. Acceptable for a small institutional blog.
    pub async fn get_publication_by_slug(&self, slug: &str) -> Result<Publication, ApiError> {
        let params = PageParams::new(1, 100);
        let page = self.list_publications(&params).await?;
        page.items
            .into_iter()
            .find(|publication| publication.slug == slug)
            .ok_or(ApiError::NotFound)
    }

    pub async fn create_publication(&self, payload: &NewPublication) -> Result<(), ApiError> {
        let path = "publicaciones";
        let request = self.client.post(self.api_url(path)).json(payload);
        self.execute(path, request).await.map(drop)
    }

    pub async fn update_publication(
        &self,
        id: i64,
        payload: &PublicationPatch,
    ) -> Result<(), ApiError> {
        let path = format!("publicaciones/{id}");
        let request = self.client.put(self.api_url(&path)).json(payload);
        self.execute(&path, request).await.map(drop)
    }

    pub async fn delete_publication(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("publicaciones/{id}");
        let request = self.client.delete(self.api_url(&path));
        self.execute(&path, request).await.map(drop)
    }

    // --- categories ---

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("categorias").await
    }

    pub async fn create_category(&self, payload: &NewCategory) -> Result<(), ApiError> {
        let path = "categorias";
        let request = self.client.post(self.api_url(path)).json(payload);
        self.execute(path, request).await.map(drop)
    }

    pub async fn update_category(&self, id: i64, payload: &CategoryPatch) -> Result<(), ApiError> {
        let path = format!("categorias/{id}");
        let request = self.client.put(self.api_url(&path)).json(payload);
        self.execute(&path, request).await.map(drop)
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("categorias/{id}");
        let request = self.client.delete(self.api_url(&path));
        self.execute(&path, request).await.map(drop)
    }

    // --- gallery ---

    pub async fn list_gallery(
        &self,
        params: &PageParams,
    ) -> Result<Paginated<GalleryItem>, ApiError> {
        let path = "galeria";
        let request = self.client.get(self.api_url(path)).query(params);
        let response = self.execute(path, request).await?;
        let envelope: ListEnvelope<GalleryItem> = decode(response).await?;
        Ok(envelope.into_paginated(params))
    }

    pub async fn get_gallery_item(&self, id: i64) -> Result<GalleryItem, ApiError> {
        self.get_json(&format!("galeria/{id}")).await
    }

    pub async fn create_gallery_item(&self, payload: &NewGalleryItem) -> Result<(), ApiError> {
        let path = "galeria";
        let request = self.client.post(self.api_url(path)).json(payload);
        self.execute(path, request).await.map(drop)
    }

    pub async fn update_gallery_item(
        &self,
        id: i64,
        payload: &GalleryItemPatch,
    ) -> Result<(), ApiError> {
        let path = format!("galeria/{id}");
        let request = self.client.put(self.api_url(&path)).json(payload);
        self.execute(&path, request).await.map(drop)
    }

    pub async fn delete_gallery_item(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("galeria/{id}");
        let request = self.client.delete(self.api_url(&path));
        self.execute(&path, request).await.map(drop)
    }

    // --- contact messages ---

    /// Public contact form; the one unauthenticated write.
    pub async fn send_contact_message(&self, payload: &NewContactMessage) -> Result<(), ApiError> {
        let path = "mensajes_contacto";
        let request = self.client.post(self.api_url(path)).json(payload);
        self.execute(path, request).await.map(drop)
    }

    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>, ApiError> {
        self.get_json("mensajes_contacto").await
    }

    pub async fn delete_message(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("mensajes_contacto/{id}");
        let request = self.client.delete(self.api_url(&path));
        self.execute(&path, request).await.map(drop)
    }

    // --- users ---

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("usuarios").await
    }

    pub async fn create_user(
        &self,
        payload: &shared::models::CreateUserRequest,
    ) -> Result<(), ApiError> {
        let path = "usuarios";
        let request = self.client.post(self.api_url(path)).json(payload);
        self.execute(path, request).await.map(drop)
    }

    pub async fn update_user(&self, id: i64, payload: &UpdateUserRequest) -> Result<(), ApiError> {
        let path = format!("usuarios/{id}");
        let request = self.client.put(self.api_url(&path)).json(payload);
        self.execute(&path, request).await.map(drop)
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("usuarios/{id}");
        let request = self.client.delete(self.api_url(&path));
        self.execute(&path, request).await.map(drop)
    }

    // --- dashboard ---

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("dashboard/stats").await
    }

    pub async fn dashboard_recent(&self) -> Result<DashboardRecent, ApiError> {
        self.get_json("dashboard/recent").await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Pull the backend's `msg`/`message` field out of an error body, once.
async fn read_error_detail(response: Response) -> Option<String> {
    let body = response.json::<serde_json::Value>().await.ok()?;
    body.get("msg")
        .or_else(|| body.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}
