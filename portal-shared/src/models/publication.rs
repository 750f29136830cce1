use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::user::User;

/// A blog/news publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Publication {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub category_id: i64,
    /// Embedded category, present on list/detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub author_id: i64,
    /// Embedded author, present on list/detail responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload to create a publication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPublication {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category_id: i64,
}

/// Partial update for a publication; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"{
            "id": 3,
            "title": "Aniversario institucional",
            "slug": "aniversario-institucional",
            "content": "<p>Celebramos un año más.</p>",
            "excerpt": null,
            "image_url": "https://res.cloudinary.com/demo/aniversario.jpg",
            "status": "published",
            "published_at": "2025-07-10T12:00:00Z",
            "category_id": 2,
            "author_id": 1,
            "created_at": "2025-07-09T08:30:00Z",
            "updated_at": "2025-07-10T12:00:00Z"
        }"#;

        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.id, 3);
        assert_eq!(publication.slug, "aniversario-institucional");
        assert!(publication.excerpt.is_none());
        assert!(publication.category.is_none());
        assert!(publication.author.is_none());
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = PublicationPatch {
            title: Some("Título corregido".to_string()),
            category_id: Some(4),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("title"));
        assert!(object.contains_key("category_id"));
    }
}
