//! Identity data model.
//!
//! An [`Identity`] is the profile record the directory owns. Session tokens
//! carry a denormalised copy, so every field round-trips through serde.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the identity constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityValidationError {
    /// Identifier was empty or padded with whitespace.
    #[error("identity id must be a non-empty, unpadded string")]
    InvalidId,
    /// Email was empty or only whitespace.
    #[error("email must not be empty")]
    EmptyEmail,
}

/// Stable identity identifier.
///
/// The seeded administrator uses `"1"`; provisioned identities use random
/// UUID strings. Any non-empty string without surrounding whitespace is
/// accepted so tokens minted by either path decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityId(String);

impl IdentityId {
    /// Validate and construct an [`IdentityId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentityValidationError> {
        Self::from_owned(id.into())
    }

    /// Generate a new random [`IdentityId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    fn from_owned(id: String) -> Result<Self, IdentityValidationError> {
        if id.is_empty() || id.trim() != id {
            return Err(IdentityValidationError::InvalidId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for IdentityId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<IdentityId> for String {
    fn from(value: IdentityId) -> Self {
        value.0
    }
}

impl TryFrom<String> for IdentityId {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Email address used as the directory's unique key.
///
/// Stored exactly as entered. Comparison is exact and case-sensitive, so a
/// padded address is a different key from the unpadded one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        let email = email.as_ref();
        if email.trim().is_empty() {
            return Err(IdentityValidationError::EmptyEmail);
        }
        Ok(Self(email.to_owned()))
    }

    /// Text before the first `@`, or the whole address when there is none.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::Email;
    ///
    /// let email = Email::new("new@x.com").unwrap();
    /// assert_eq!(email.local_part(), "new");
    /// ```
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or(self.0.as_str())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Access level attached to an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular member; every provisioned or registered identity.
    User,
    /// The seeded administrator.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

/// A known user's profile record.
///
/// ## Invariants
/// - `id` is non-empty with no surrounding whitespace.
/// - `email` is non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    id: IdentityId,
    email: Email,
    first_name: String,
    last_name: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl Identity {
    /// Build an identity from validated components, without an avatar.
    pub fn new(
        id: IdentityId,
        email: Email,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            avatar: None,
        }
    }

    /// Attach an avatar URI.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &IdentityId {
        &self.id
    }

    /// Unique email key.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Access level.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Optional avatar URI.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// `"<first> <last>"`, used as the author label on posts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests;
