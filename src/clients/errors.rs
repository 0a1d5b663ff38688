//! Transport-level error types for the HTTP session.
//!
//! The session deliberately treats HTTP status codes as data, not errors:
//! a 404 or 500 still produces an `Ok(HttpResponse)`. Only failures below
//! the HTTP layer (connection refused, DNS, timeout, TLS) surface here, so
//! resource code can always distinguish "the server answered" from "the
//! request never completed".

use thiserror::Error;

/// Error type for session-level network failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A connection, DNS, timeout, or protocol failure from the underlying
    /// HTTP client. The request may never have reached the server.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

// Verify HttpError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpError>();
};
