//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod identity_directory;
mod key_value_store;
mod login_service;
mod notifier;
mod post_repository;

#[cfg(test)]
pub use identity_directory::MockIdentityDirectory;
pub use identity_directory::{IdentityDirectory, IdentityDirectoryError};
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{KeyValueStore, KeyValueStoreError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{AuthenticatedSession, LoginService};
#[cfg(test)]
pub use notifier::MockNotifier;
pub use notifier::{NOTIFICATION_TTL, Notification, Notifier, Severity};
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
