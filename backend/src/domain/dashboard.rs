//! Dashboard use-cases over the signed-in member's post collection.
//!
//! Every operation requires a restored session. The collection is loaded and
//! saved whole; new posts are prepended so the list stays newest-first.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use crate::domain::ports::{Notification, Notifier, PostRepository, PostRepositoryError};
use crate::domain::{
    Category, CategoryFilter, Error, FeedQuery, INCOMPLETE_POST_MESSAGE, Post, PostDraft, PostEdit,
    PostForm, PostId, SearchScope, SessionStore,
};

pub const POST_CREATED_MESSAGE: &str = "Post created successfully!";
pub const POST_UPDATED_MESSAGE: &str = "Post updated successfully!";
pub const POST_DELETED_MESSAGE: &str = "Post deleted successfully!";

/// Cover image for a new post in `category`.
pub fn post_image_url(category: Category) -> String {
    format!(
        "/placeholder.svg?height=200&width=300&query={}",
        category.as_str().to_lowercase()
    )
}

/// Summary figures shown above the post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub total_views: u64,
}

/// Dashboard service implementing post management.
#[derive(Clone)]
pub struct DashboardService<R> {
    posts: Arc<R>,
    sessions: SessionStore,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl<R> DashboardService<R> {
    pub fn new(
        posts: Arc<R>,
        sessions: SessionStore,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            sessions,
            notifier,
            clock,
        }
    }
}

impl<R> DashboardService<R>
where
    R: PostRepository,
{
    fn map_repository_error(error: PostRepositoryError) -> Error {
        Error::internal(error.to_string())
    }

    fn validated(&self, form: &PostForm) -> Result<PostEdit, Error> {
        form.validate().map_err(|_| {
            self.notifier.notify(Notification::error(INCOMPLETE_POST_MESSAGE));
            Error::invalid_request(INCOMPLETE_POST_MESSAGE)
        })
    }

    async fn load(&self) -> Result<Vec<Post>, Error> {
        self.posts.load().await.map_err(Self::map_repository_error)
    }

    async fn save(&self, posts: &[Post]) -> Result<(), Error> {
        self.posts
            .save(posts)
            .await
            .map_err(Self::map_repository_error)
    }

    /// Create a post authored by the signed-in member.
    pub async fn create(&self, form: &PostForm) -> Result<Post, Error> {
        let identity = self.sessions.require_identity()?;
        let edit = self.validated(form)?;

        let post = Post::new(PostDraft {
            id: PostId::random(),
            category: edit.category(),
            title: edit.title().to_owned(),
            content: edit.content().to_owned(),
            author: identity.full_name(),
            created_at: self.clock.utc(),
            views: 0,
            image: Some(post_image_url(edit.category())),
            likes: 0,
            comments: 0,
        })
        .map_err(|err| Error::invalid_request(err.to_string()))?;

        let mut posts = self.load().await?;
        posts.insert(0, post.clone());
        self.save(&posts).await?;

        info!(id = %post.id(), "post created");
        self.notifier.notify(Notification::success(POST_CREATED_MESSAGE));
        Ok(post)
    }

    /// Replace the title, content, and category of post `id`.
    pub async fn update(&self, id: &PostId, form: &PostForm) -> Result<Post, Error> {
        self.sessions.require_identity()?;
        let edit = self.validated(form)?;

        let mut posts = self.load().await?;
        let post = posts
            .iter_mut()
            .find(|post| post.id() == id)
            .ok_or_else(|| Error::not_found(format!("post {id} not found")))?;
        post.apply_edit(edit);
        let updated = post.clone();
        self.save(&posts).await?;

        info!(%id, "post updated");
        self.notifier.notify(Notification::success(POST_UPDATED_MESSAGE));
        Ok(updated)
    }

    /// Remove post `id`.
    pub async fn delete(&self, id: &PostId) -> Result<(), Error> {
        self.sessions.require_identity()?;

        let mut posts = self.load().await?;
        let before = posts.len();
        posts.retain(|post| post.id() != id);
        if posts.len() == before {
            return Err(Error::not_found(format!("post {id} not found")));
        }
        self.save(&posts).await?;

        info!(%id, "post deleted");
        self.notifier.notify(Notification::success(POST_DELETED_MESSAGE));
        Ok(())
    }

    /// Stored posts filtered with the dashboard search scope.
    pub async fn list(&self, category: CategoryFilter, search: &str) -> Result<Vec<Post>, Error> {
        self.sessions.require_identity()?;
        let posts = self.load().await?;
        Ok(FeedQuery::new(SearchScope::Dashboard)
            .with_category(category)
            .with_search(search)
            .apply(&posts))
    }

    pub async fn stats(&self) -> Result<DashboardStats, Error> {
        self.sessions.require_identity()?;
        let posts = self.load().await?;
        let total_views = posts
            .iter()
            .map(Post::views)
            .try_fold(0_u64, u64::checked_add)
            .ok_or_else(|| Error::internal("stored view counts overflow"))?;
        Ok(DashboardStats {
            total_posts: posts.len(),
            total_views,
        })
    }
}
