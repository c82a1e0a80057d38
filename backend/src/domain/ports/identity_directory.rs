//! Port abstraction for the identity directory and its errors.
use async_trait::async_trait;

use crate::domain::{Email, Identity};

use super::define_port_error;

define_port_error! {
    /// Errors raised by identity directory adapters.
    pub enum IdentityDirectoryError {
        /// An identity with this email is already present.
        DuplicateEmail { email: String } => "identity already exists for {email}",
        /// Directory state could not be accessed.
        Unavailable { message: String } => "identity directory unavailable: {message}",
    }
}

/// Ordered collection of known identities keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Find the identity whose email matches exactly.
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Identity>, IdentityDirectoryError>;

    /// Append a new identity. Fails with `DuplicateEmail` when the email is taken.
    async fn insert(&self, identity: Identity) -> Result<(), IdentityDirectoryError>;

    /// All identities in insertion order.
    async fn list(&self) -> Result<Vec<Identity>, IdentityDirectoryError>;
}
