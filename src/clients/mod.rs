//! HTTP session layer for communication with the service.
//!
//! This module provides the thin transport collaborator the resource core
//! calls into:
//!
//! - [`Session`]: the async HTTP channel plus authentication state
//! - [`HttpResponse`]: status, headers, JSON body, and the `Link`-header
//!   continuation URL
//! - [`HttpError`]: transport-level failures (connection, DNS, timeout)
//!
//! The session carries no retry or caching logic; it issues one request per
//! call and returns whatever the server said. HTTP error statuses are data
//! at this layer; the resource layer in [`crate::rest`] turns them into
//! semantic errors.

mod errors;
mod response;
mod session;

pub use errors::HttpError;
pub use response::{parse_next_link, HttpResponse};
pub use session::{Session, CLIENT_VERSION};
