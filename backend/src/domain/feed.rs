//! Feed filtering over ordered post sequences.
//!
//! Filtering never reorders: the output is always a subsequence of the
//! input. Two search scopes exist because the dashboard matches on title and
//! content only, while the home feed also matches the author label.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::domain::{Category, Post, PostValidationError};

/// Tab label the home feed uses for the unfiltered view.
pub const ALL_POSTS_LABEL: &str = "All Posts";

/// Category selector: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn admits(self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => post.category() == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = PostValidationError;

    /// Accepts `all`, `All Posts`, or an exact category name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" | ALL_POSTS_LABEL => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        Self::Only(value)
    }
}

/// Which post fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Title and content.
    Dashboard,
    /// Title, content, and author.
    HomeFeed,
}

/// Category plus free-text search, evaluated against a post list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    category: CategoryFilter,
    search: String,
    scope: SearchScope,
}

impl FeedQuery {
    /// Unfiltered query in `scope`.
    pub fn new(scope: SearchScope) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            scope,
        }
    }

    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search term. The empty string disables text matching.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn scope(&self) -> SearchScope {
        self.scope
    }

    /// Posts matching both predicates, in input order.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::{FeedQuery, SearchScope};
    ///
    /// let query = FeedQuery::new(SearchScope::Dashboard).with_search("");
    /// assert!(query.apply(&[]).is_empty());
    /// ```
    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        let needle = self.search.to_lowercase();
        posts
            .iter()
            .filter(|post| self.category.admits(post))
            .filter(|post| needle.is_empty() || self.matches_text(post, &needle))
            .cloned()
            .collect()
    }

    fn matches_text(&self, post: &Post, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);
        let body_hit = contains(post.title()) || contains(post.content());
        match self.scope {
            SearchScope::Dashboard => body_hit,
            SearchScope::HomeFeed => body_hit || contains(post.author()),
        }
    }
}

/// Post totals for the filter tabs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryCounts {
    total: usize,
    by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    /// Count for the "All Posts" tab.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn get(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// `(label, count)` pairs in tab order, starting with "All Posts".
    pub fn tabs(&self) -> Vec<(&'static str, usize)> {
        std::iter::once((ALL_POSTS_LABEL, self.total))
            .chain(Category::ALL.into_iter().map(|c| (c.as_str(), self.get(c))))
            .collect()
    }
}

/// Tally `posts` per category.
pub fn category_counts(posts: &[Post]) -> CategoryCounts {
    let mut by_category = BTreeMap::new();
    for post in posts {
        *by_category.entry(post.category()).or_insert(0) += 1;
    }
    CategoryCounts {
        total: posts.len(),
        by_category,
    }
}

#[cfg(test)]
mod tests;
