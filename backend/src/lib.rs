//! Social feed backend library: sessions, identities, posts, and feeds.

pub mod config;
pub mod domain;
pub mod example_data;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::AppSettings;
