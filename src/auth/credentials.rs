//! API credentials for authenticated sessions.
//!
//! Supports the two credential forms the service accepts: a personal access
//! token and basic username/password authentication. Either form is carried
//! by a [`Session`](crate::Session) and rendered into an `Authorization`
//! header on every request.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Credentials used to authenticate a session.
///
/// # Example
///
/// ```rust
/// use tracker_api::Credentials;
///
/// let token = Credentials::token("abc123");
/// assert_eq!(token.header_value(), "token abc123");
///
/// let basic = Credentials::basic("octocat", "secret");
/// assert!(basic.header_value().starts_with("Basic "));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A personal access token.
    Token(String),
    /// Basic username/password authentication.
    Basic {
        /// The account username.
        username: String,
        /// The account password.
        password: String,
    },
}

impl Credentials {
    /// Creates token credentials.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }

    /// Creates basic-auth credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Renders the `Authorization` header value for these credentials.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Token(token) => format!("token {token}"),
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                format!("Basic {encoded}")
            }
        }
    }
}

/// Secrets stay out of debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Credentials::Token(***)"),
            Self::Basic { username, .. } => f
                .debug_struct("Credentials::Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_header_value() {
        let credentials = Credentials::token("abc123");
        assert_eq!(credentials.header_value(), "token abc123");
    }

    #[test]
    fn test_basic_header_value_is_base64_of_user_colon_pass() {
        let credentials = Credentials::basic("user", "pass");
        // base64("user:pass")
        assert_eq!(credentials.header_value(), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let token = Credentials::token("super-secret");
        assert!(!format!("{token:?}").contains("super-secret"));

        let basic = Credentials::basic("octocat", "hunter2");
        let debug = format!("{basic:?}");
        assert!(debug.contains("octocat"));
        assert!(!debug.contains("hunter2"));
    }
}
