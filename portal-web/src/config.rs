//! Frontend configuration.
//!
//! The only environment-dependent value is the backend origin; everything
//! else is a fixed convention shared across pages.

/// Base URL of the REST backend, resolved at build time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("PORTAL_API_URL")
                .unwrap_or("http://localhost:5000/api")
                .to_string(),
        }
    }
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Items per page on the public blog. Full-width cards, so few per page.
pub const BLOG_PAGE_SIZE: u32 = 5;
/// Items per page on the public gallery grid.
pub const GALLERY_PAGE_SIZE: u32 = 12;
/// Items per page on admin list screens.
pub const ADMIN_PAGE_SIZE: u32 = 20;

/// Idle time before a search box commits its draft value.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// LocalStorage key holding the opaque bearer token.
pub const STORAGE_KEY_TOKEN: &str = "auth_token";
/// LocalStorage key holding the JSON-serialized user identity.
pub const STORAGE_KEY_USER: &str = "user";
/// SessionStorage key flagging a forced logout, consumed by the login page.
pub const STORAGE_KEY_SESSION_EXPIRED: &str = "session_expired";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_a_default() {
        let config = AppConfig::new();
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn storage_keys_are_distinct() {
        assert_ne!(STORAGE_KEY_TOKEN, STORAGE_KEY_USER);
        assert_ne!(STORAGE_KEY_TOKEN, STORAGE_KEY_SESSION_EXPIRED);
    }
}
