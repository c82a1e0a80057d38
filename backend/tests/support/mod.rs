//! Shared wiring for integration tests.

use std::path::Path;
use std::sync::Arc;

use social_backend::domain::ports::KeyValueStore;
use social_backend::domain::{
    AccountService, Authenticator, DashboardService, SessionStore, TokenCodec,
};
use social_backend::outbound::{
    DirKeyValueStore, InMemoryIdentityDirectory, KeyValuePostRepository,
};
use social_backend::test_support::{MutableClock, RecordingNotifier};

/// Services wired over a directory-backed store, as the binary wires them.
pub struct Harness {
    pub clock: Arc<MutableClock>,
    pub notifier: Arc<RecordingNotifier>,
    pub directory: Arc<InMemoryIdentityDirectory>,
    pub sessions: SessionStore,
    pub account: AccountService,
    pub dashboard: DashboardService<KeyValuePostRepository>,
}

impl Harness {
    /// Wire services over `root` sharing `clock`.
    pub fn open(root: &Path, clock: Arc<MutableClock>) -> Self {
        let store: Arc<dyn KeyValueStore> =
            Arc::new(DirKeyValueStore::open(root).expect("open store"));
        let notifier = Arc::new(RecordingNotifier::default());
        let codec = TokenCodec::new(clock.clone());
        let sessions = SessionStore::new(store.clone(), codec.clone());
        let directory = Arc::new(InMemoryIdentityDirectory::seeded().expect("seed directory"));
        let authenticator = Authenticator::new(directory.clone(), codec);
        let account = AccountService::new(
            Arc::new(authenticator),
            sessions.clone(),
            notifier.clone(),
        );
        let dashboard = DashboardService::new(
            Arc::new(KeyValuePostRepository::new(store)),
            sessions.clone(),
            notifier.clone(),
            clock.clone(),
        );
        Self {
            clock,
            notifier,
            directory,
            sessions,
            account,
            dashboard,
        }
    }

    /// Messages notified so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notifier
            .notifications()
            .into_iter()
            .map(|notification| notification.message)
            .collect()
    }
}
