//! Tests for the API client boundary.
//!
//! Validates base-URL handling, endpoint construction, and the error
//! normalization the rest of the client relies on.

#[cfg(test)]
mod tests {
    use crate::api::ApiClient;
    use shared::models::{ApiError, LoginRequest, NewContactMessage, PageParams};

    #[test]
    fn client_creation() {
        let _client = ApiClient::new("http://localhost:5000/api");
    }

    #[test]
    fn api_url_joins_without_duplicate_slashes() {
        let client = ApiClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.api_url("/publicaciones"),
            "http://localhost:5000/api/publicaciones"
        );
        assert_eq!(
            client.api_url("categorias"),
            "http://localhost:5000/api/categorias"
        );
    }

    #[test]
    fn resource_paths_match_the_backend() {
        let id = 42;
        assert_eq!(format!("publicaciones/{id}"), "publicaciones/42");
        assert_eq!(format!("galeria/{id}"), "galeria/42");
        assert_eq!(format!("mensajes_contacto/{id}"), "mensajes_contacto/42");
        assert_eq!(format!("usuarios/{id}"), "usuarios/42");
    }

    #[test]
    fn list_params_serialize_as_query_string() {
        let params = PageParams::new(2, 20).with_search("aniversario");
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(query, "page=2&per_page=20&search=aniversario");
    }

    #[test]
    fn login_error_reports_bad_credentials() {
        assert_eq!(
            ApiError::Unauthorized.for_login(),
            ApiError::InvalidCredentials
        );

        // Other failures pass through untouched.
        let error = ApiError::Network("timeout".to_string()).for_login();
        assert!(matches!(error, ApiError::Network(_)));
    }

    #[test]
    fn status_codes_map_to_the_closed_taxonomy() {
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert!(matches!(
            ApiError::from_status(500, None),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(422, Some("slug duplicado".to_string())),
            ApiError::Validation(detail) if detail == "slug duplicado"
        ));
    }

    #[test]
    fn login_payload_shape() {
        let payload = LoginRequest {
            email: "admin@iejaqg.edu.pe".to_string(),
            password: "secreta".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["email"], "admin@iejaqg.edu.pe");
        assert_eq!(value["password"], "secreta");
    }

    #[test]
    fn contact_payload_omits_empty_phone() {
        let payload = NewContactMessage {
            name: "Vecina".to_string(),
            email: "vecina@example.com".to_string(),
            phone: None,
            subject: "Matrícula".to_string(),
            message: "¿Cuándo abre la matrícula?".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("phone").is_none());
    }
}
