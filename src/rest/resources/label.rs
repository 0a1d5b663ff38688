//! Label resource, yielded by milestone label listings.

use serde::{Deserialize, Serialize};

/// A label attached to issues under a milestone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// The label's name.
    pub name: String,
    /// The label's color as a hex string without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// The canonical API URL of the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether this is one of the service's default labels.
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_label_deserializes_from_listing_item() {
        let label: Label = serde_json::from_value(json!({
            "url": "https://api.example.test/repos/octocat/hello-world/labels/bug",
            "name": "bug",
            "color": "f29513",
            "default": true
        }))
        .unwrap();

        assert_eq!(label.name, "bug");
        assert_eq!(label.color.as_deref(), Some("f29513"));
        assert_eq!(label.is_default, Some(true));
    }

    #[test]
    fn test_label_requires_a_name() {
        let result: Result<Label, _> = serde_json::from_value(json!({"color": "f29513"}));
        assert!(result.is_err());
    }
}
