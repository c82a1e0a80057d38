//! Post read-model entity shared by the home feed and the dashboard.
//!
//! Posts serialise as camelCase JSON (`createdAt`, `content`), which is the
//! shape persisted under the `posts` storage key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors raised when constructing posts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostValidationError {
    #[error("post id must not be empty")]
    EmptyId,
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("unknown post category: {value}")]
    UnknownCategory { value: String },
}

/// Identifier of a post, unique within its owning collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Result<Self, PostValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(PostValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Fresh random identifier for newly created posts.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostId> for String {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PostId {
    type Error = PostValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Post category. Parsing is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Article,
    Event,
    Education,
    Job,
}

impl Category {
    /// Every category in filter-tab order.
    pub const ALL: [Category; 4] = [Self::Article, Self::Event, Self::Education, Self::Job];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::Event => "Event",
            Self::Education => "Education",
            Self::Job => "Job",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PostValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| PostValidationError::UnknownCategory {
                value: value.to_owned(),
            })
    }
}

/// Input payload for [`Post::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub id: PostId,
    pub category: Category,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub views: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
}

/// A post as shown in a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: PostId,
    category: Category,
    title: String,
    content: String,
    author: String,
    created_at: DateTime<Utc>,
    views: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    likes: u64,
    comments: u64,
}

impl Post {
    /// Validate and construct a post.
    pub fn new(draft: PostDraft) -> Result<Self, PostValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    /// Body text; the home feed stores its excerpt here.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
    pub fn author(&self) -> &str {
        self.author.as_str()
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
    pub fn views(&self) -> u64 {
        self.views
    }
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
    pub fn likes(&self) -> u64 {
        self.likes
    }
    pub fn comments(&self) -> u64 {
        self.comments
    }

    /// Replace the editable fields, keeping identity and counters.
    pub(crate) fn apply_edit(&mut self, edit: PostEdit) {
        self.category = edit.category;
        self.title = edit.title;
        self.content = edit.content;
    }
}

impl TryFrom<PostDraft> for Post {
    type Error = PostValidationError;

    fn try_from(draft: PostDraft) -> Result<Self, Self::Error> {
        if draft.title.trim().is_empty() {
            return Err(PostValidationError::EmptyField { field: "title" });
        }
        Ok(Self {
            id: draft.id,
            category: draft.category,
            title: draft.title,
            content: draft.content,
            author: draft.author,
            created_at: draft.created_at,
            views: draft.views,
            image: draft.image,
            likes: draft.likes,
            comments: draft.comments,
        })
    }
}

impl<'de> Deserialize<'de> for Post {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        PostDraft::deserialize(deserializer)?
            .try_into()
            .map_err(serde::de::Error::custom)
    }
}

/// Message shown when a dashboard form is incomplete.
pub const INCOMPLETE_POST_MESSAGE: &str = "Please fill in all fields";

/// Dashboard create/edit form as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub category: Category,
    pub title: String,
    pub content: String,
}

impl PostForm {
    pub fn new(category: Category, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Both title and content must contain text.
    pub fn validate(&self) -> Result<PostEdit, PostValidationError> {
        if self.title.trim().is_empty() {
            return Err(PostValidationError::EmptyField { field: "title" });
        }
        if self.content.trim().is_empty() {
            return Err(PostValidationError::EmptyField { field: "content" });
        }
        Ok(PostEdit {
            category: self.category,
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}

/// Validated editable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEdit {
    category: Category,
    title: String,
    content: String,
}

impl PostEdit {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}
