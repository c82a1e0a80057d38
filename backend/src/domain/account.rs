//! Account use-cases a front end binds to: sign in, sign up, sign out.
//!
//! Each operation validates its form, calls the [`LoginService`], writes the
//! session through the [`SessionStore`], and reports the outcome to the
//! [`Notifier`].

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ports::{LoginService, Notification, Notifier};
use crate::domain::{
    Error, ErrorCode, Identity, LoginForm, RegistrationForm, SessionState, SessionStore,
    SessionToken,
};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const LOGIN_FAILURE_MESSAGE: &str = "Login failed. Please try again.";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Account created successfully!";
pub const REGISTER_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";
pub const LOGOUT_MESSAGE: &str = "Logged out";

/// Account service over an injected login port, session store, and notifier.
#[derive(Clone)]
pub struct AccountService {
    login: Arc<dyn LoginService>,
    sessions: SessionStore,
    notifier: Arc<dyn Notifier>,
}

impl AccountService {
    pub fn new(
        login: Arc<dyn LoginService>,
        sessions: SessionStore,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            login,
            sessions,
            notifier,
        }
    }

    /// Validate `form`, authenticate, and persist the new session.
    ///
    /// Form errors are returned without notifying; the caller renders them
    /// next to the fields.
    pub async fn login(&self, form: &LoginForm) -> Result<Identity, Error> {
        let credentials = form.validate()?;
        let session = match self.login.authenticate(&credentials).await {
            Ok(session) => session,
            Err(error) => {
                warn!(%error, "login failed");
                self.notifier.notify(Notification::error(LOGIN_FAILURE_MESSAGE));
                return Err(error);
            }
        };
        self.start_session(
            session.identity,
            &session.token,
            LOGIN_SUCCESS_MESSAGE,
            LOGIN_FAILURE_MESSAGE,
        )
    }

    /// Validate `form`, register, and persist the new session.
    pub async fn register(&self, form: &RegistrationForm) -> Result<Identity, Error> {
        let registration = form.validate()?;
        let session = match self.login.register(&registration).await {
            Ok(session) => session,
            Err(error) => {
                warn!(%error, "registration failed");
                let message = match error.code() {
                    ErrorCode::DuplicateIdentity => error.message(),
                    _ => REGISTER_FAILURE_MESSAGE,
                };
                self.notifier.notify(Notification::error(message));
                return Err(error);
            }
        };
        self.start_session(
            session.identity,
            &session.token,
            REGISTER_SUCCESS_MESSAGE,
            REGISTER_FAILURE_MESSAGE,
        )
    }

    /// Drop the stored session.
    pub fn logout(&self) -> Result<(), Error> {
        self.sessions.clear()?;
        self.notifier.notify(Notification::info(LOGOUT_MESSAGE));
        Ok(())
    }

    /// Session restored from storage.
    pub fn current(&self) -> SessionState {
        self.sessions.restore()
    }

    /// Session store backing this service, for route guards.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn start_session(
        &self,
        identity: Identity,
        token: &SessionToken,
        success: &str,
        failure: &str,
    ) -> Result<Identity, Error> {
        if let Err(error) = self.sessions.persist(token) {
            self.notifier.notify(Notification::error(failure));
            return Err(error);
        }
        info!(id = %identity.id(), "session started");
        self.notifier.notify(Notification::success(success));
        Ok(identity)
    }
}

#[cfg(test)]
mod tests;
