//! Outbound adapters implementing domain ports for local infrastructure.
//!
//! - **storage**: key/value stores (in-memory, directory-backed)
//! - **directory**: in-memory identity directory
//! - **posts**: post repository over a key/value store
//! - **notifier**: notifications as tracing events
//!
//! Adapters are thin translators between domain types and their stored
//! representation. They contain no business logic.

pub mod directory;
pub mod notifier;
pub mod posts;
pub mod storage;

pub use directory::InMemoryIdentityDirectory;
pub use notifier::{NOTIFICATION_TARGET, TracingNotifier};
pub use posts::{KeyValuePostRepository, POSTS_KEY};
pub use storage::{DirKeyValueStore, InMemoryKeyValueStore, OpenStoreError};
