//! Semantic error types for resource operations.
//!
//! This module maps outcomes into the categories callers act on:
//!
//! - [`ResourceError::AuthenticationRequired`]: local precondition failure,
//!   raised before any network I/O
//! - [`ResourceError::MalformedResponse`]: the server answered, but the JSON
//!   cannot be decoded into the declared shape
//! - [`ResourceError::UpdateRejected`]: a mutating call was sent and refused
//! - [`ResourceError::NotFound`]: 404 on a read
//! - [`ResourceError::Response`]: any other non-success read status
//! - [`ResourceError::Transport`]: the request never completed
//!
//! A no-op update is *not* an error; it reports `Ok(false)` from the
//! operation itself. See [`Milestone::update`](crate::rest::resources::Milestone::update).

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse};

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The session carries no credentials and the operation mutates server
    /// state. No request was issued.
    #[error("authentication required; configure credentials on the session")]
    AuthenticationRequired,

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {reason}")]
    MalformedResponse {
        /// Why decoding failed.
        reason: String,
    },

    /// The server refused a mutating call.
    #[error("update rejected with status {status}: {message}")]
    UpdateRejected {
        /// The HTTP status code of the refusal.
        status: u16,
        /// The server's error message.
        message: String,
    },

    /// A read addressed a resource that does not exist (HTTP 404).
    #[error("resource at {url} not found")]
    NotFound {
        /// The URL that was requested.
        url: String,
    },

    /// A read failed with a non-success status other than 404.
    #[error("request failed with status {status}: {message}")]
    Response {
        /// The HTTP status code.
        status: u16,
        /// The server's error message.
        message: String,
    },

    /// A transport-level failure from the session collaborator.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl ResourceError {
    /// Classifies a non-success response to a read request.
    ///
    /// 404 becomes [`ResourceError::NotFound`]; everything else becomes
    /// [`ResourceError::Response`] carrying the server's message.
    #[must_use]
    pub fn from_read_failure(url: &str, response: &HttpResponse) -> Self {
        if response.status == 404 {
            Self::NotFound {
                url: url.to_string(),
            }
        } else {
            Self::Response {
                status: response.status,
                message: response.server_message(),
            }
        }
    }
}

// Verify ResourceError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_from_read_failure_maps_404_to_not_found() {
        let response = HttpResponse::new(404, HashMap::new(), Some(json!({"message": "Not Found"})));
        let error = ResourceError::from_read_failure("https://example.test/milestones/1", &response);

        assert!(matches!(
            error,
            ResourceError::NotFound { url } if url == "https://example.test/milestones/1"
        ));
    }

    #[test]
    fn test_from_read_failure_maps_other_statuses_to_response() {
        let response = HttpResponse::new(500, HashMap::new(), Some(json!({"message": "boom"})));
        let error = ResourceError::from_read_failure("https://example.test/milestones/1", &response);

        assert!(matches!(
            error,
            ResourceError::Response { status: 500, message } if message == "boom"
        ));
    }

    #[test]
    fn test_error_messages_name_the_failure() {
        let auth = ResourceError::AuthenticationRequired;
        assert!(auth.to_string().contains("authentication required"));

        let rejected = ResourceError::UpdateRejected {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        assert!(rejected.to_string().contains("422"));
        assert!(rejected.to_string().contains("Validation Failed"));
    }

    #[test]
    fn test_all_variants_implement_std_error() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(ResourceError::AuthenticationRequired),
            Box::new(ResourceError::MalformedResponse {
                reason: "bad timestamp".to_string(),
            }),
            Box::new(ResourceError::NotFound {
                url: "https://example.test".to_string(),
            }),
        ];
        assert_eq!(errors.len(), 3);
    }
}
