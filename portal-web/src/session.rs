//! Session gateway: the single authority over "is the user logged in".
//!
//! The yewdux store and the persisted LocalStorage pair are only ever
//! written here, together, so they cannot diverge. Everything else reads
//! the store through `use_store`/`use_selector` and treats it as
//! read-only.

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use shared::models::User;
use wasm_bindgen::prelude::*;
use yewdux::prelude::*;

use crate::config::{STORAGE_KEY_SESSION_EXPIRED, STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// In-memory session: bearer token plus cached identity.
///
/// Invariant: authenticated if and only if both halves are present.
/// `hydrated` stays false until the persisted copy has been read once, so
/// guards can wait instead of flash-redirecting on first render.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub hydrated: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    fn with_login(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            hydrated: true,
        }
    }

    #[must_use]
    fn cleared() -> Self {
        Self {
            token: None,
            user: None,
            hydrated: true,
        }
    }
}

/// Read the persisted session into the store. A lone key (token without
/// user or vice versa) is treated as corrupt and dropped whole.
pub fn hydrate(dispatch: &Dispatch<SessionState>) {
    let token: Option<String> = LocalStorage::get(STORAGE_KEY_TOKEN).ok();
    let user: Option<User> = LocalStorage::get(STORAGE_KEY_USER).ok();
    let state = match (token, user) {
        (Some(token), Some(user)) => SessionState::with_login(token, user),
        (None, None) => SessionState::cleared(),
        _ => {
            warn("sesión persistida incompleta, descartando");
            clear_persisted_session();
            SessionState::cleared()
        }
    };
    dispatch.set(state);
}

/// Record a successful login in storage and in the store, in that order,
/// within a single event-loop turn.
pub fn login(dispatch: &Dispatch<SessionState>, token: String, user: User) {
    if LocalStorage::set(STORAGE_KEY_TOKEN, &token).is_err()
        || LocalStorage::set(STORAGE_KEY_USER, &user).is_err()
    {
        warn("no se pudo persistir la sesión");
    }
    dispatch.set(SessionState::with_login(token, user));
}

/// Clear the session everywhere. Calling this while already logged out is
/// a no-op.
pub fn logout(dispatch: &Dispatch<SessionState>) {
    clear_persisted_session();
    dispatch.set(SessionState::cleared());
}

/// Refresh the cached identity after a profile fetch or update.
pub fn update_user(dispatch: &Dispatch<SessionState>, user: User) {
    if LocalStorage::set(STORAGE_KEY_USER, &user).is_err() {
        warn("no se pudo persistir el usuario");
    }
    dispatch.reduce_mut(|state| state.user = Some(user));
}

/// Remove the persisted pair. Returns whether there was a session to clear.
pub fn clear_persisted_session() -> bool {
    let had_token = LocalStorage::get::<String>(STORAGE_KEY_TOKEN).is_ok();
    LocalStorage::delete(STORAGE_KEY_TOKEN);
    LocalStorage::delete(STORAGE_KEY_USER);
    had_token
}

/// Global reaction to a 401 on a protected request: clear the persisted
/// session, leave a one-shot notice for the login page and navigate there.
/// From an already-anonymous state this does nothing, so a burst of 401s
/// redirects at most once.
pub fn expire_session() {
    if !clear_persisted_session() {
        return;
    }
    warn("sesión expirada, redirigiendo a login");
    let _ = SessionStorage::set(STORAGE_KEY_SESSION_EXPIRED, true);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Consume the "session expired" notice, if one was left behind. The first
/// caller sees it; subsequent callers do not.
pub fn take_expiry_notice() -> bool {
    let flagged = SessionStorage::get::<bool>(STORAGE_KEY_SESSION_EXPIRED).is_ok();
    if flagged {
        SessionStorage::delete(STORAGE_KEY_SESSION_EXPIRED);
    }
    flagged
}

/// Decide whether a 401 should terminate the session. The login call
/// handles its own 401 (bad credentials), and while the user is on the
/// login page a forced redirect would only loop.
#[must_use]
pub fn should_force_logout(request_path: &str, current_path: &str) -> bool {
    !request_path.contains("administracion/login") && !current_path.starts_with("/login")
}

/// Entry point used by the HTTP client's response check.
pub fn handle_unauthorized(request_path: &str) {
    let current_path = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    if should_force_logout(request_path, &current_path) {
        expire_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::UserRole;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "admin@iejaqg.edu.pe".to_string(),
            name: None,
            avatar: None,
            role: UserRole::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn authenticated_requires_both_halves() {
        let empty = SessionState::default();
        assert!(!empty.is_authenticated());

        let token_only = SessionState {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(!token_only.is_authenticated());

        let user_only = SessionState {
            user: Some(sample_user()),
            ..Default::default()
        };
        assert!(!user_only.is_authenticated());

        let full = SessionState::with_login("abc".to_string(), sample_user());
        assert!(full.is_authenticated());
    }

    #[test]
    fn invariant_holds_across_transitions() {
        let mut state = SessionState::default();
        for _ in 0..3 {
            state = SessionState::with_login("token".to_string(), sample_user());
            assert_eq!(
                state.is_authenticated(),
                state.token.is_some() && state.user.is_some()
            );
            state = SessionState::cleared();
            assert_eq!(
                state.is_authenticated(),
                state.token.is_some() && state.user.is_some()
            );
        }
    }

    #[test]
    fn cleared_state_is_hydrated() {
        assert!(SessionState::cleared().hydrated);
        assert!(!SessionState::default().hydrated);
    }

    #[test]
    fn login_request_never_forces_logout() {
        assert!(!should_force_logout("administracion/login", "/admin"));
    }

    #[test]
    fn login_page_never_forces_logout() {
        assert!(!should_force_logout("publicaciones", "/login"));
    }

    #[test]
    fn protected_request_elsewhere_forces_logout() {
        assert!(should_force_logout("publicaciones", "/admin/publicaciones"));
        assert!(should_force_logout("dashboard/stats", "/admin"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use chrono::Utc;
    use shared::models::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_user() -> User {
        User {
            id: 1,
            email: "admin@iejaqg.edu.pe".to_string(),
            name: Some("Admin".to_string()),
            avatar: None,
            role: UserRole::Superadmin,
            created_at: Utc::now(),
        }
    }

    #[wasm_bindgen_test]
    fn persistence_roundtrip() {
        clear_persisted_session();
        let user = sample_user();
        LocalStorage::set(STORAGE_KEY_TOKEN, &"tok-123".to_string()).unwrap();
        LocalStorage::set(STORAGE_KEY_USER, &user).unwrap();

        let token: String = LocalStorage::get(STORAGE_KEY_TOKEN).unwrap();
        let stored: User = LocalStorage::get(STORAGE_KEY_USER).unwrap();
        assert_eq!(token, "tok-123");
        assert_eq!(stored, user);

        assert!(clear_persisted_session());
        assert!(LocalStorage::get::<String>(STORAGE_KEY_TOKEN).is_err());
        assert!(LocalStorage::get::<User>(STORAGE_KEY_USER).is_err());
    }

    #[wasm_bindgen_test]
    fn clearing_twice_is_a_noop() {
        LocalStorage::set(STORAGE_KEY_TOKEN, &"tok".to_string()).unwrap();
        LocalStorage::set(STORAGE_KEY_USER, &sample_user()).unwrap();
        assert!(clear_persisted_session());
        assert!(!clear_persisted_session());
    }

    #[wasm_bindgen_test]
    fn expiry_notice_is_consumed_once() {
        SessionStorage::set(STORAGE_KEY_SESSION_EXPIRED, true).unwrap();
        assert!(take_expiry_notice());
        assert!(!take_expiry_notice());
    }
}
