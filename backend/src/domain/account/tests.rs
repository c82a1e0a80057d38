//! Tests for the account service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{
    AuthenticatedSession, KeyValueStoreError, MockKeyValueStore, MockLoginService, Severity,
};
use crate::domain::{FormField, TokenCodec};
use crate::outbound::storage::InMemoryKeyValueStore;
use crate::test_support::{MutableClock, RecordingNotifier, member_identity};

struct Harness {
    codec: TokenCodec,
    notifier: Arc<RecordingNotifier>,
    sessions: SessionStore,
}

impl Harness {
    fn service(&self, login: MockLoginService) -> AccountService {
        AccountService::new(Arc::new(login), self.sessions.clone(), self.notifier.clone())
    }

    fn session_for(&self, identity: &Identity) -> AuthenticatedSession {
        AuthenticatedSession {
            identity: identity.clone(),
            token: self.codec.issue(identity).expect("issue token"),
        }
    }

    fn messages(&self) -> Vec<(Severity, String)> {
        self.notifier
            .notifications()
            .into_iter()
            .map(|n| (n.severity, n.message))
            .collect()
    }
}

#[fixture]
fn harness() -> Harness {
    let codec = TokenCodec::new(Arc::new(MutableClock::default()));
    Harness {
        sessions: SessionStore::new(Arc::new(InMemoryKeyValueStore::default()), codec.clone()),
        codec,
        notifier: Arc::new(RecordingNotifier::default()),
    }
}

fn registration_form(email: &str) -> RegistrationForm {
    RegistrationForm {
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: email.into(),
        password: "secret1".to_owned().into(),
        confirm_password: "secret1".to_owned().into(),
    }
}

#[rstest]
#[tokio::test]
async fn login_persists_session_and_notifies(harness: Harness) {
    let identity = member_identity("ada@example.com");
    let session = harness.session_for(&identity);
    let mut login = MockLoginService::new();
    login
        .expect_authenticate()
        .times(1)
        .return_once(move |_| Ok(session));
    let service = harness.service(login);

    let signed_in = service
        .login(&LoginForm::new("ada@example.com", "secret1"))
        .await
        .expect("login succeeds");

    assert_eq!(signed_in, identity);
    assert_eq!(service.current().identity(), Some(&identity));
    assert_eq!(
        harness.messages(),
        vec![(Severity::Success, LOGIN_SUCCESS_MESSAGE.to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn invalid_login_form_never_reaches_authenticator(harness: Harness) {
    let mut login = MockLoginService::new();
    login.expect_authenticate().times(0);
    let service = harness.service(login);

    let err = service
        .login(&LoginForm::new("not-an-email", "123"))
        .await
        .expect_err("form must be rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    let details = err.details().expect("field details");
    assert_eq!(details[FormField::Email.to_string()], "Email is invalid");
    assert!(harness.messages().is_empty());
}

#[rstest]
#[tokio::test]
async fn failed_login_notifies_error(harness: Harness) {
    let mut login = MockLoginService::new();
    login
        .expect_authenticate()
        .return_once(|_| Err(Error::internal("directory unavailable")));
    let service = harness.service(login);

    let err = service
        .login(&LoginForm::new("ada@example.com", "secret1"))
        .await
        .expect_err("login must fail");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert!(!service.current().is_authenticated());
    assert_eq!(
        harness.messages(),
        vec![(Severity::Error, LOGIN_FAILURE_MESSAGE.to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn register_persists_session(harness: Harness) {
    let identity = member_identity("grace@example.com");
    let session = harness.session_for(&identity);
    let mut login = MockLoginService::new();
    login
        .expect_register()
        .withf(|registration| registration.first_name() == "Grace")
        .return_once(move |_| Ok(session));
    let service = harness.service(login);

    service
        .register(&registration_form("grace@example.com"))
        .await
        .expect("registration succeeds");

    assert!(service.current().is_authenticated());
    assert_eq!(
        harness.messages(),
        vec![(Severity::Success, REGISTER_SUCCESS_MESSAGE.to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn duplicate_registration_reports_directory_message(harness: Harness) {
    let mut login = MockLoginService::new();
    login
        .expect_register()
        .return_once(|_| Err(Error::duplicate_identity("User already exists")));
    let service = harness.service(login);

    let err = service
        .register(&registration_form("admin@atg.world"))
        .await
        .expect_err("duplicate must fail");

    assert_eq!(err.code(), ErrorCode::DuplicateIdentity);
    assert_eq!(
        harness.messages(),
        vec![(Severity::Error, "User already exists".to_owned())]
    );
}

#[rstest]
#[tokio::test]
async fn logout_clears_session(harness: Harness) {
    let identity = member_identity("ada@example.com");
    let session = harness.session_for(&identity);
    let mut login = MockLoginService::new();
    login.expect_authenticate().return_once(move |_| Ok(session));
    let service = harness.service(login);
    service
        .login(&LoginForm::new("ada@example.com", "secret1"))
        .await
        .expect("login succeeds");

    service.logout().expect("logout succeeds");

    assert_eq!(service.current(), SessionState::anonymous());
    assert_eq!(
        harness.messages().last(),
        Some(&(Severity::Info, LOGOUT_MESSAGE.to_owned()))
    );
}

#[rstest]
#[tokio::test]
async fn unwritable_storage_fails_login(harness: Harness) {
    let identity = member_identity("ada@example.com");
    let session = harness.session_for(&identity);
    let mut login = MockLoginService::new();
    login.expect_authenticate().return_once(move |_| Ok(session));
    let mut store = MockKeyValueStore::new();
    store
        .expect_set()
        .returning(|key, _| Err(KeyValueStoreError::io(key, "quota exceeded")));
    let service = AccountService::new(
        Arc::new(login),
        SessionStore::new(Arc::new(store), harness.codec.clone()),
        harness.notifier.clone(),
    );

    let err = service
        .login(&LoginForm::new("ada@example.com", "secret1"))
        .await
        .expect_err("persist failure must surface");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(
        harness.messages(),
        vec![(Severity::Error, LOGIN_FAILURE_MESSAGE.to_owned())]
    );
}
