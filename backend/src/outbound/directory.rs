//! In-memory identity directory seeded with the built-in admin.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{IdentityDirectory, IdentityDirectoryError};
use crate::domain::{Email, Error, Identity};
use crate::example_data::admin_identity;

/// Ordered identity list owned by whoever constructs it.
#[derive(Debug, Default)]
pub struct InMemoryIdentityDirectory {
    identities: Mutex<Vec<Identity>>,
}

impl InMemoryIdentityDirectory {
    /// Directory holding `identities` in the given order.
    pub fn with_identities(identities: Vec<Identity>) -> Self {
        Self {
            identities: Mutex::new(identities),
        }
    }

    /// Directory holding only the admin identity.
    pub fn seeded() -> Result<Self, Error> {
        Ok(Self::with_identities(vec![admin_identity()?]))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Identity>>, IdentityDirectoryError> {
        self.identities
            .lock()
            .map_err(|_| IdentityDirectoryError::unavailable("directory lock poisoned"))
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryIdentityDirectory {
    async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<Identity>, IdentityDirectoryError> {
        Ok(self
            .lock()?
            .iter()
            .find(|identity| identity.email() == email)
            .cloned())
    }

    async fn insert(&self, identity: Identity) -> Result<(), IdentityDirectoryError> {
        let mut identities = self.lock()?;
        if identities.iter().any(|known| known.email() == identity.email()) {
            return Err(IdentityDirectoryError::duplicate_email(
                identity.email().to_string(),
            ));
        }
        identities.push(identity);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Identity>, IdentityDirectoryError> {
        Ok(self.lock()?.clone())
    }
}
