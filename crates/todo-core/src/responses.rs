//! JSON response shapes shared by the HTTP API and the `todo` CLI.
//!
//! List responses are plain `Vec<Item>` arrays and need no wrapper.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// Message reported when an update or delete targets a missing item.
pub const NOT_FOUND_MESSAGE: &str = "Record Not Found";

/// Response to creating an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateResponse {
    pub id: ItemId,
}

/// Response to setting an item's completion flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateResponse {
    pub updated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateResponse {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            updated: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            updated: false,
            error: Some(message.into()),
        }
    }
}

/// Response to deleting an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteResponse {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            deleted: true,
            error: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            deleted: false,
            error: Some(message.into()),
        }
    }
}

/// Liveness probe response. `alive` is always true when the server answers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub alive: bool,
}

impl HealthResponse {
    #[must_use]
    pub const fn alive() -> Self {
        Self { alive: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn success_omits_error_field() {
        let value = serde_json::to_value(UpdateResponse::success()).unwrap();
        assert_eq!(value, json!({ "updated": true }));
    }

    #[test]
    fn failure_carries_message() {
        let value = serde_json::to_value(DeleteResponse::failure(NOT_FOUND_MESSAGE)).unwrap();
        assert_eq!(
            value,
            json!({ "deleted": false, "error": "Record Not Found" })
        );
    }

    #[test]
    fn create_response_renders_plain_id() {
        let response = CreateResponse {
            id: ItemId::parse("64c11bd1da6b431c66c28a88").unwrap(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value, json!({ "id": "64c11bd1da6b431c66c28a88" }));
    }

    #[test]
    fn health_is_alive() {
        let value = serde_json::to_value(HealthResponse::alive()).unwrap();
        assert_eq!(value, json!({ "alive": true }));
    }
}
