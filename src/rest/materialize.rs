//! JSON materialization into typed resource values.
//!
//! Materialization is the single funnel through which raw JSON becomes a
//! typed value: resource constructors run it eagerly over the whole payload,
//! and [`PageCursor`](crate::rest::PageCursor) runs it per item as it
//! yields. Field decoding rules are declared on the target types with serde
//! (timestamps via chrono, nested resources as structs, null/absent fields
//! as `None`); any decode failure is reported as
//! [`ResourceError::MalformedResponse`] rather than silently coerced.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::rest::errors::ResourceError;

/// Decodes a JSON value into `T`.
///
/// # Errors
///
/// Returns [`ResourceError::MalformedResponse`] with the decode reason if
/// the value does not match `T`'s declared shape, e.g. a malformed timestamp,
/// a missing required field, or a mistyped value.
pub fn materialize<T: DeserializeOwned>(json: &Value) -> Result<T, ResourceError> {
    serde_json::from_value(json.clone()).map_err(|e| ResourceError::MalformedResponse {
        reason: e.to_string(),
    })
}
