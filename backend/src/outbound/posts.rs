//! Post repository persisting the dashboard collection as one JSON array.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Post;
use crate::domain::ports::{KeyValueStore, PostRepository, PostRepositoryError};

/// Storage key holding the serialised post array.
pub const POSTS_KEY: &str = "posts";

/// [`PostRepository`] over a [`KeyValueStore`].
///
/// Stored data that fails to parse is reported as an empty collection; the
/// next save overwrites it.
#[derive(Clone)]
pub struct KeyValuePostRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValuePostRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostRepository for KeyValuePostRepository {
    async fn load(&self) -> Result<Vec<Post>, PostRepositoryError> {
        let raw = self
            .store
            .get(POSTS_KEY)
            .map_err(|err| PostRepositoryError::storage(err.to_string()))?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(posts) => Ok(posts),
            Err(error) => {
                warn!(%error, "stored posts are malformed; starting from an empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, posts: &[Post]) -> Result<(), PostRepositoryError> {
        let payload = serde_json::to_string(posts)
            .map_err(|err| PostRepositoryError::encode(err.to_string()))?;
        self.store
            .set(POSTS_KEY, &payload)
            .map_err(|err| PostRepositoryError::storage(err.to_string()))
    }
}
