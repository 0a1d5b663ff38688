//! User resource, as nested inside other payloads.

use serde::{Deserialize, Serialize};

/// A user account, as embedded in other resources (e.g., a milestone's
/// creator). Only the compact representation the service nests is modeled
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// The unique identifier of the user.
    pub id: u64,
    /// The user's login name.
    pub login: String,
    /// The user's avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// The canonical API URL of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether the user is a site administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,
}
