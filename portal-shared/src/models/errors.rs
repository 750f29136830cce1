use thiserror::Error;

/// Closed taxonomy for every failure the HTTP boundary can produce.
///
/// Transport shapes (status codes, error bodies) are mapped into this enum
/// exactly once, at the client boundary; nothing downstream inspects raw
/// responses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Login was rejected (401 on the login endpoint).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The request payload was rejected (400/422).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The bearer token is missing, expired or revoked (401 after login).
    #[error("unauthorized")]
    Unauthorized,

    /// Authenticated but not allowed (403). Not a session failure.
    #[error("forbidden")]
    Forbidden,

    /// The resource does not exist (404).
    #[error("not found")]
    NotFound,

    /// The backend failed (>= 500).
    #[error("server error: {0}")]
    Server(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but its body did not parse.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify an HTTP status plus the optional `msg`/`message` field the
    /// backend puts in error bodies.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        let detail = |fallback: &str| detail.clone().unwrap_or_else(|| fallback.to_string());
        match status {
            400 | 422 => Self::Validation(detail("solicitud inválida")),
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            status if status >= 500 => Self::Server(detail(&format!("HTTP {status}"))),
            status => Self::Server(detail(&format!("respuesta inesperada HTTP {status}"))),
        }
    }

    /// Re-map for the login call, where a 401 means bad credentials rather
    /// than an expired session.
    #[must_use]
    pub fn for_login(self) -> Self {
        match self {
            Self::Unauthorized => Self::InvalidCredentials,
            other => other,
        }
    }

    /// True for failures where no response was received at all; these never
    /// mutate session state.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// User-facing message, in the site's language.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Credenciales inválidas".to_string(),
            Self::Validation(detail) => detail.clone(),
            Self::Unauthorized => {
                "Tu sesión ha expirado. Por favor, inicia sesión nuevamente.".to_string()
            }
            Self::Forbidden => "No tienes permisos para realizar esta acción".to_string(),
            Self::NotFound => "Recurso no encontrado".to_string(),
            Self::Server(_) => "Error del servidor, intenta nuevamente".to_string(),
            Self::Network(_) => "Error de conexión, verifica tu internet".to_string(),
            Self::Decode(_) => "Ocurrió un error, intenta nuevamente".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_status() {
        assert_eq!(
            ApiError::from_status(400, Some("faltan campos".to_string())),
            ApiError::Validation("faltan campos".to_string())
        );
        assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, None), ApiError::Forbidden);
        assert_eq!(ApiError::from_status(404, None), ApiError::NotFound);
        assert!(matches!(ApiError::from_status(500, None), ApiError::Server(_)));
        assert!(matches!(ApiError::from_status(503, None), ApiError::Server(_)));
    }

    #[test]
    fn unexpected_status_still_produces_an_error() {
        // 418 and friends must classify somewhere rather than panic.
        assert!(matches!(ApiError::from_status(418, None), ApiError::Server(_)));
    }

    #[test]
    fn login_remaps_unauthorized() {
        assert_eq!(
            ApiError::from_status(401, None).for_login(),
            ApiError::InvalidCredentials
        );
        // Everything else passes through untouched.
        assert_eq!(
            ApiError::from_status(403, None).for_login(),
            ApiError::Forbidden
        );
        assert_eq!(
            ApiError::Network("timeout".to_string()).for_login(),
            ApiError::Network("timeout".to_string())
        );
    }

    #[test]
    fn only_network_failures_are_transient() {
        assert!(ApiError::Network("offline".to_string()).is_transient());
        assert!(!ApiError::Unauthorized.is_transient());
        assert!(!ApiError::Server("boom".to_string()).is_transient());
    }

    #[test]
    fn every_variant_has_a_user_message() {
        let variants = [
            ApiError::InvalidCredentials,
            ApiError::Validation("x".to_string()),
            ApiError::Unauthorized,
            ApiError::Forbidden,
            ApiError::NotFound,
            ApiError::Server("x".to_string()),
            ApiError::Network("x".to_string()),
            ApiError::Decode("x".to_string()),
        ];
        for variant in variants {
            assert!(!variant.user_message().is_empty());
        }
    }
}
