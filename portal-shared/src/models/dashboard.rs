use serde::{Deserialize, Serialize};

use super::message::ContactMessage;
use super::publication::Publication;

/// Resource counters shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    #[serde(default)]
    pub publications: u64,
    #[serde(default)]
    pub categories: u64,
    #[serde(default)]
    pub gallery: u64,
    #[serde(default)]
    pub messages: u64,
    #[serde(default)]
    pub total_messages: u64,
    #[serde(default)]
    pub users: u64,
}

/// Latest activity shown on the admin dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardRecent {
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub messages: Vec<ContactMessage>,
}
