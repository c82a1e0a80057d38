//! Domain primitives, ports, and services.
//!
//! Purpose: define the strongly typed entities of the social feed (identities,
//! session tokens, posts) and the use-cases that act on them. Adapters live in
//! `crate::outbound` and plug in through the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure with a stable code.
//! - Identity and friends: directory entries keyed by email.
//! - SessionStore / TokenCodec: unsigned session tokens and their storage.
//! - Authenticator: the directory-backed login port implementation.
//! - FeedQuery: category and text filtering over post lists.
//! - AccountService / DashboardService: use-cases a front end drives.

pub mod account;
pub mod auth;
pub mod authenticator;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod identity;
pub mod ports;
pub mod post;
pub mod session;

pub use self::account::AccountService;
pub use self::auth::{
    FormErrors, FormField, LoginCredentials, LoginForm, LoginValidationError, PASSWORD_MIN_LEN,
    Registration, RegistrationForm,
};
pub use self::authenticator::{Authenticator, SIMULATED_LATENCY, avatar_url};
pub use self::dashboard::{DashboardService, DashboardStats};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::feed::{
    ALL_POSTS_LABEL, CategoryCounts, CategoryFilter, FeedQuery, SearchScope, category_counts,
};
pub use self::identity::{Email, Identity, IdentityId, IdentityValidationError, Role};
pub use self::post::{
    Category, INCOMPLETE_POST_MESSAGE, Post, PostDraft, PostEdit, PostForm, PostId,
    PostValidationError,
};
pub use self::session::{
    InvalidToken, SessionState, SessionStore, SessionToken, TOKEN_KEY, TokenCodec,
};
