//! Generic resource infrastructure.
//!
//! This module is the core of the object model, shared by every resource
//! kind:
//!
//! - **[`materialize`]**: JSON → typed value, with absence/null as `None`
//!   and decode failures as [`ResourceError::MalformedResponse`]
//! - **[`require_auth`]**: the guard every mutating operation runs before
//!   any network I/O
//! - **[`PageCursor<T>`]**: the lazy, restartable-from-scratch fetcher
//!   behind paginated sub-collections
//! - **[`ResourceError`]**: the semantic error vocabulary
//!
//! Concrete resource types (milestones, labels, users) live in
//! [`resources`]; they are field mapping over this machinery.

mod errors;
mod materialize;
mod pagination;

pub mod resources;

pub use errors::ResourceError;
pub use materialize::materialize;
pub use pagination::{PageCursor, DEFAULT_PER_PAGE};

use crate::clients::Session;

/// Checks that the session is authenticated before a mutating operation.
///
/// This is a purely local precondition: when it fails, no request has been
/// issued and none will be.
///
/// # Errors
///
/// Returns [`ResourceError::AuthenticationRequired`] if the session carries
/// no credentials.
pub fn require_auth(session: &Session) -> Result<(), ResourceError> {
    if session.has_auth() {
        Ok(())
    } else {
        Err(ResourceError::AuthenticationRequired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    #[test]
    fn test_require_auth_rejects_anonymous_session() {
        let session = Session::anonymous();
        assert!(matches!(
            require_auth(&session),
            Err(ResourceError::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_require_auth_passes_authenticated_session() {
        let session = Session::authenticated(Credentials::token("abc"));
        assert!(require_auth(&session).is_ok());
    }
}
