//! Credential types for session authentication.
//!
//! This module provides the [`Credentials`] type describing the local
//! authentication state a [`Session`](crate::Session) carries. Mutating
//! resource operations check for its presence before any network I/O.

mod credentials;

pub use credentials::Credentials;
