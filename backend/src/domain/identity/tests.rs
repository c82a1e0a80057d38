//! Tests for the identity model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn admin() -> Identity {
    Identity::new(
        IdentityId::new("1").expect("fixture id"),
        Email::new("admin@atg.world").expect("fixture email"),
        "Admin",
        "User",
        Role::Admin,
    )
    .with_avatar("/placeholder.svg?height=40&width=40")
}

#[rstest]
#[case("")]
#[case(" 1")]
#[case("1 ")]
fn identity_id_rejects_blank_or_padded(#[case] raw: &str) {
    assert_eq!(IdentityId::new(raw), Err(IdentityValidationError::InvalidId));
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(IdentityId::random(), IdentityId::random());
}

#[rstest]
#[case("")]
#[case("   ")]
fn email_rejects_blank(#[case] raw: &str) {
    assert_eq!(Email::new(raw), Err(IdentityValidationError::EmptyEmail));
}

#[rstest]
fn email_is_kept_verbatim() {
    let email = Email::new(" Admin@ATG.world").expect("valid email");
    assert_eq!(email.as_ref(), " Admin@ATG.world");
    assert_ne!(email, Email::new("Admin@ATG.world").expect("valid email"));
}

#[rstest]
#[case("new@x.com", "new")]
#[case("first.last@example.org", "first.last")]
#[case("no-at-sign", "no-at-sign")]
#[case("a@b@c", "a")]
fn email_local_part(#[case] raw: &str, #[case] expected: &str) {
    let email = Email::new(raw).expect("valid email");
    assert_eq!(email.local_part(), expected);
}

#[rstest]
fn serialises_with_camel_case_fields(admin: Identity) {
    let value = serde_json::to_value(&admin).expect("serialise identity");
    assert_eq!(
        value,
        json!({
            "id": "1",
            "email": "admin@atg.world",
            "firstName": "Admin",
            "lastName": "User",
            "role": "admin",
            "avatar": "/placeholder.svg?height=40&width=40",
        })
    );
}

#[rstest]
fn deserialising_validates_fields() {
    let payload = json!({
        "id": "",
        "email": "x@y.z",
        "firstName": "X",
        "lastName": "Y",
        "role": "user",
    });
    let result: Result<Identity, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn avatar_is_optional_on_the_wire() {
    let payload = json!({
        "id": "abc",
        "email": "x@y.z",
        "firstName": "X",
        "lastName": "Y",
        "role": "user",
    });
    let identity: Identity = serde_json::from_value(payload).expect("identity without avatar");
    assert!(identity.avatar().is_none());
    assert_eq!(identity.role(), Role::User);
}

#[rstest]
fn full_name_joins_first_and_last(admin: Identity) {
    assert_eq!(admin.full_name(), "Admin User");
}
