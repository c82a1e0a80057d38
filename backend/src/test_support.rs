//! Test utilities for the backend crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Only compiled for tests or with the `test-support` feature.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::{Notification, Notifier};
use crate::domain::{Email, Identity, IdentityId, Role};

/// Fixed instant most fixtures start from.
pub fn fixture_timestamp() -> DateTime<Utc> {
    match Utc.with_ymd_and_hms(2026, 2, 24, 10, 30, 0).single() {
        Some(timestamp) => timestamp,
        None => panic!("valid fixture timestamp"),
    }
}

/// Clock that only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let delta = match TimeDelta::from_std(delta) {
            Ok(delta) => delta,
            Err(error) => {
                panic!("failed to convert Duration to TimeDelta: {error}; delta={delta:?}")
            }
        };
        *self.lock_clock() += delta;
    }

    pub fn advance_millis(&self, millis: i64) {
        *self.lock_clock() += TimeDelta::milliseconds(millis);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::new(fixture_timestamp())
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Notifier that keeps every notification for later assertions.
#[derive(Default)]
pub struct RecordingNotifier(Mutex<Vec<Notification>>);

impl RecordingNotifier {
    /// Notifications received so far, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        match self.0.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => panic!("notifier mutex"),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        match self.0.lock() {
            Ok(mut entries) => entries.push(notification),
            Err(_) => panic!("notifier mutex"),
        }
    }
}

/// Regular member identity used across tests.
pub fn member_identity(email: &str) -> Identity {
    let email = match Email::new(email) {
        Ok(email) => email,
        Err(error) => panic!("fixture email must be valid: {error}"),
    };
    Identity::new(IdentityId::random(), email, "Ada", "Lovelace", Role::User)
}
