//! Driving port for login and registration use-cases.
//!
//! Front ends call this port to authenticate without knowing which directory
//! backs it, so account flows can be tested against a double.

use async_trait::async_trait;

use crate::domain::{Error, Identity, LoginCredentials, Registration, SessionToken};

/// Successful outcome of a login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    /// Identity the token was issued for.
    pub identity: Identity,
    /// Encoded session token ready to persist.
    pub token: SessionToken,
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve credentials to an identity and issue a token.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedSession, Error>;

    /// Create a new identity and issue a token.
    ///
    /// Fails with [`crate::domain::ErrorCode::DuplicateIdentity`] when the
    /// email is already known.
    async fn register(&self, registration: &Registration) -> Result<AuthenticatedSession, Error>;
}
