//! Directory-backed implementation of the [`LoginService`] port.
//!
//! Authentication is a local simulation: any non-empty password is accepted
//! and unknown emails are provisioned on first login. Do not mistake this for
//! credential checking.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    AuthenticatedSession, IdentityDirectory, IdentityDirectoryError, LoginService,
};
use crate::domain::{
    Email, Error, Identity, IdentityId, LoginCredentials, Registration, Role, TokenCodec,
};

/// Delay applied before every directory call.
pub const SIMULATED_LATENCY: Duration = Duration::from_secs(1);

/// Message reported when registering an email the directory already holds.
pub const DUPLICATE_IDENTITY_MESSAGE: &str = "User already exists";

/// Last name given to identities provisioned on first login.
pub const PROVISIONED_LAST_NAME: &str = "User";

/// Avatar URL for a member, keyed by `query`.
pub fn avatar_url(query: &str) -> String {
    format!("/placeholder.svg?height=40&width=40&query={query}")
}

/// Resolves credentials against an identity directory and issues tokens.
#[derive(Clone)]
pub struct Authenticator<D> {
    directory: Arc<D>,
    codec: TokenCodec,
}

impl<D> Authenticator<D> {
    /// Create an authenticator over `directory`, issuing tokens with `codec`.
    pub fn new(directory: Arc<D>, codec: TokenCodec) -> Self {
        Self { directory, codec }
    }
}

impl<D> Authenticator<D>
where
    D: IdentityDirectory,
{
    fn map_directory_error(error: IdentityDirectoryError) -> Error {
        match error {
            IdentityDirectoryError::DuplicateEmail { .. } => {
                Error::duplicate_identity(DUPLICATE_IDENTITY_MESSAGE)
            }
            IdentityDirectoryError::Unavailable { message } => {
                Error::internal(format!("identity directory unavailable: {message}"))
            }
        }
    }

    fn provision(email: &Email) -> Identity {
        let local = email.local_part();
        Identity::new(
            IdentityId::random(),
            email.clone(),
            local,
            PROVISIONED_LAST_NAME,
            Role::User,
        )
        .with_avatar(avatar_url(local))
    }

    fn session_for(&self, identity: Identity) -> Result<AuthenticatedSession, Error> {
        let token = self.codec.issue(&identity)?;
        Ok(AuthenticatedSession { identity, token })
    }
}

#[async_trait]
impl<D> LoginService for Authenticator<D>
where
    D: IdentityDirectory,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedSession, Error> {
        tokio::time::sleep(SIMULATED_LATENCY).await;

        let email = credentials.email();
        let existing = self
            .directory
            .find_by_email(email)
            .await
            .map_err(Self::map_directory_error)?;
        let identity = match existing {
            Some(identity) => identity,
            None => {
                let identity = Self::provision(email);
                self.directory
                    .insert(identity.clone())
                    .await
                    .map_err(Self::map_directory_error)?;
                info!(id = %identity.id(), "provisioned identity on first login");
                identity
            }
        };
        self.session_for(identity)
    }

    async fn register(&self, registration: &Registration) -> Result<AuthenticatedSession, Error> {
        tokio::time::sleep(SIMULATED_LATENCY).await;

        let email = registration.email();
        let existing = self
            .directory
            .find_by_email(email)
            .await
            .map_err(Self::map_directory_error)?;
        if existing.is_some() {
            return Err(Error::duplicate_identity(DUPLICATE_IDENTITY_MESSAGE));
        }

        let identity = Identity::new(
            IdentityId::random(),
            email.clone(),
            registration.first_name(),
            registration.last_name(),
            Role::User,
        )
        .with_avatar(avatar_url(registration.first_name()));
        self.directory
            .insert(identity.clone())
            .await
            .map_err(Self::map_directory_error)?;
        info!(id = %identity.id(), "registered identity");
        self.session_for(identity)
    }
}
