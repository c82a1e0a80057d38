//! Session tokens and the store that persists them.
//!
//! Tokens are base64-encoded JSON claims: the identity fields plus an `exp`
//! timestamp in epoch milliseconds. They are NOT signed. Anyone holding a
//! token can read and rewrite it, so this scheme is only fit for a local
//! demo; a deployment must swap in a MAC-protected or signed claims format.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::ports::KeyValueStore;
use crate::domain::{Email, Error, Identity, IdentityId, Role};

/// Storage key holding the encoded session token.
pub const TOKEN_KEY: &str = "token";

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Encoded session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an encoded token string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encoded form, as persisted.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<SessionToken> for String {
    fn from(value: SessionToken) -> Self {
        value.0
    }
}

/// Reasons a token fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidToken {
    /// The payload is not base64, not JSON, or not the expected shape.
    #[error("malformed session token: {reason}")]
    Malformed { reason: String },
    /// The token's expiry has been reached.
    #[error("session token expired at {expired_at}")]
    Expired { expired_at: DateTime<Utc> },
}

impl InvalidToken {
    fn malformed(reason: impl std::fmt::Display) -> Self {
        Self::Malformed {
            reason: reason.to_string(),
        }
    }
}

impl From<InvalidToken> for Error {
    fn from(value: InvalidToken) -> Self {
        Error::invalid_token(value.to_string())
    }
}

/// Wire schema of the token payload.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TokenClaims {
    id: String,
    email: String,
    first_name: String,
    last_name: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    exp: i64,
}

impl TokenClaims {
    fn new(identity: &Identity, exp: i64) -> Self {
        Self {
            id: identity.id().to_string(),
            email: identity.email().to_string(),
            first_name: identity.first_name().to_owned(),
            last_name: identity.last_name().to_owned(),
            role: identity.role(),
            avatar: identity.avatar().map(str::to_owned),
            exp,
        }
    }

    fn into_identity(self) -> Result<Identity, InvalidToken> {
        let id = IdentityId::new(self.id).map_err(InvalidToken::malformed)?;
        let email = Email::new(self.email).map_err(InvalidToken::malformed)?;
        let identity = Identity::new(id, email, self.first_name, self.last_name, self.role);
        Ok(match self.avatar {
            Some(avatar) => identity.with_avatar(avatar),
            None => identity,
        })
    }
}

/// Issues and decodes session tokens against an injected clock.
#[derive(Clone)]
pub struct TokenCodec {
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Create a codec reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Encode `identity` with an expiry [`TOKEN_TTL_HOURS`] from now.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use social_backend::domain::{Email, Identity, IdentityId, Role, TokenCodec};
    ///
    /// let codec = TokenCodec::new(Arc::new(DefaultClock));
    /// let identity = Identity::new(
    ///     IdentityId::new("1").unwrap(),
    ///     Email::new("admin@atg.world").unwrap(),
    ///     "Admin",
    ///     "User",
    ///     Role::Admin,
    /// );
    /// let token = codec.issue(&identity).unwrap();
    /// assert_eq!(codec.decode(token.as_str()).unwrap(), identity);
    /// ```
    pub fn issue(&self, identity: &Identity) -> Result<SessionToken, Error> {
        let expires_at = self.clock.utc() + TimeDelta::hours(TOKEN_TTL_HOURS);
        let claims = TokenClaims::new(identity, expires_at.timestamp_millis());
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| Error::internal(format!("failed to encode session claims: {err}")))?;
        Ok(SessionToken(STANDARD.encode(payload)))
    }

    /// Decode `token`, rejecting malformed payloads and reached expiries.
    pub fn decode(&self, token: &str) -> Result<Identity, InvalidToken> {
        let bytes = STANDARD.decode(token.trim()).map_err(InvalidToken::malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&bytes).map_err(InvalidToken::malformed)?;
        let expired_at = DateTime::<Utc>::from_timestamp_millis(claims.exp)
            .ok_or_else(|| InvalidToken::malformed("expiry out of range"))?;
        if self.clock.utc() >= expired_at {
            return Err(InvalidToken::Expired { expired_at });
        }
        claims.into_identity()
    }
}

/// Session view a front end renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    token: Option<SessionToken>,
}

impl SessionState {
    /// The signed-out state.
    pub fn anonymous() -> Self {
        Self {
            identity: None,
            token: None,
        }
    }

    /// A signed-in state for `identity` holding `token`.
    pub fn authenticated(identity: Identity, token: SessionToken) -> Self {
        Self {
            identity: Some(identity),
            token: Some(token),
        }
    }

    /// Signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Persisted token, if any.
    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// `true` when both identity and token are present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some() && self.token.is_some()
    }

    /// Consume the state, yielding the identity when signed in.
    pub fn into_identity(self) -> Option<Identity> {
        self.identity
    }
}

/// Persists the current session token under [`TOKEN_KEY`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    codec: TokenCodec,
}

impl SessionStore {
    /// Create a store writing through `store` and decoding with `codec`.
    pub fn new(store: Arc<dyn KeyValueStore>, codec: TokenCodec) -> Self {
        Self { store, codec }
    }

    /// Codec shared with the authenticator.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Issue a token for `identity`.
    pub fn issue(&self, identity: &Identity) -> Result<SessionToken, Error> {
        self.codec.issue(identity)
    }

    /// Decode `token` without touching storage.
    pub fn decode(&self, token: &str) -> Result<Identity, InvalidToken> {
        self.codec.decode(token)
    }

    /// Write `token`, replacing any previous session.
    pub fn persist(&self, token: &SessionToken) -> Result<(), Error> {
        self.store
            .set(TOKEN_KEY, token.as_str())
            .map_err(|err| Error::internal(format!("failed to persist session: {err}")))?;
        info!("session persisted");
        Ok(())
    }

    /// Restore the stored session.
    ///
    /// An absent, unreadable, malformed, or expired token yields the
    /// anonymous state, and whatever was stored is removed.
    pub fn restore(&self) -> SessionState {
        let raw = match self.store.get(TOKEN_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionState::anonymous(),
            Err(error) => {
                warn!(%error, "session token unreadable; treating as signed out");
                self.discard();
                return SessionState::anonymous();
            }
        };

        match self.codec.decode(&raw) {
            Ok(identity) => SessionState::authenticated(identity, SessionToken(raw)),
            Err(error) => {
                debug!(%error, "discarding invalid session token");
                self.discard();
                SessionState::anonymous()
            }
        }
    }

    /// Remove the stored token.
    pub fn clear(&self) -> Result<(), Error> {
        self.store
            .remove(TOKEN_KEY)
            .map_err(|err| Error::internal(format!("failed to clear session: {err}")))?;
        info!("session cleared");
        Ok(())
    }

    /// Guard for protected views: the signed-in identity or `Unauthorized`.
    pub fn require_identity(&self) -> Result<Identity, Error> {
        self.restore()
            .into_identity()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    fn discard(&self) {
        if let Err(error) = self.store.remove(TOKEN_KEY) {
            warn!(%error, "failed to remove invalid session token");
        }
    }
}
