use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to an administrative account.
///
/// Roles only gate which admin screens are rendered; the backend enforces
/// the actual permissions on every request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Superadmin,
}

impl UserRole {
    /// Canonical string representation used by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Superadmin => "superadmin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "superadmin" => Ok(Self::Superadmin),
            _ => Err("unknown user role"),
        }
    }
}

/// Administrative user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's email address, also the login name.
    pub email: String,

    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Optional avatar URL on the asset host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    /// Role used for client-side display gating.
    pub role: UserRole,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload: the bearer token plus the identity to cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Payload to create an administrative account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: UserRole,
}

/// Partial update for an administrative account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user() -> User {
        User {
            id: 7,
            email: "admin@iejaqg.edu.pe".to_string(),
            name: Some("Administradora".to_string()),
            avatar: None,
            role: UserRole::Admin,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = sample_user();
        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, user);
    }

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("admin", UserRole::Admin),
            ("editor", UserRole::Editor),
            ("superadmin", UserRole::Superadmin),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(text.parse::<UserRole>().unwrap(), role);
        }
        assert!("root".parse::<UserRole>().is_err());
    }

    #[test]
    fn user_role_serde_is_lowercase() {
        let json = serde_json::to_string(&UserRole::Superadmin).unwrap();
        assert_eq!(json, "\"superadmin\"");
        let role: UserRole = serde_json::from_str("\"editor\"").unwrap();
        assert_eq!(role, UserRole::Editor);
    }

    #[test]
    fn optional_name_is_omitted() {
        let mut user = sample_user();
        user.name = None;
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("name").is_none());
    }

    #[test]
    fn update_request_skips_unset_fields() {
        let patch = UpdateUserRequest {
            name: Some("Nuevo nombre".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
