//! Port for the dashboard's post collection.
//!
//! The collection is loaded and saved as a whole, mirroring how the
//! dashboard keeps one serialised array under a single storage key.

use async_trait::async_trait;

use crate::domain::Post;

use super::define_port_error;

define_port_error! {
    /// Errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Backing storage failed.
        Storage { message: String } => "post storage failed: {message}",
        /// The collection could not be serialised for writing.
        Encode { message: String } => "failed to encode posts: {message}",
    }
}

/// Whole-collection post storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Load every stored post in display order.
    ///
    /// Malformed stored data is reported as an empty collection.
    async fn load(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// Replace the stored collection.
    async fn save(&self, posts: &[Post]) -> Result<(), PostRepositoryError>;
}
