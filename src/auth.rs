//! Author sessions.
//!
//! Publishing is gated behind a login, but credential validation itself is
//! out of scope: the only implementation accepts any non-blank pair. The
//! capability seam exists so the publish path consumes a [`Session`]
//! rather than raw flags.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("username and password are both required")]
    MissingCredentials,
}

/// An authenticated author identity. The username becomes the `author`
/// field of anything published under this session, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
}

/// Capability for establishing an author session.
pub trait Authenticator {
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError>;
}

/// The sole authenticator: accepts any credential pair where neither half
/// is blank.
#[derive(Debug, Default)]
pub struct PermissiveAuth;

impl Authenticator for PermissiveAuth {
    fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Session {
            username: username.to_owned(),
        })
    }
}
