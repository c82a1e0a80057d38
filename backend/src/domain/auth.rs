//! Authentication primitives: credentials, registrations, and form checks.
//!
//! Form validation runs before any authenticator call and reports every
//! failing field at once so a front end can render messages inline.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use zeroize::Zeroizing;

use crate::domain::{Email, Error};

/// Minimum password length enforced by the login and registration forms.
pub const PASSWORD_MIN_LEN: usize = 6;

/// Domain error returned when credential values are missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Credentials handed to the authenticator.
///
/// ## Invariants
/// - `email` is not blank; it is kept exactly as entered.
/// - `password` is non-empty; its content is never inspected further.
///
/// # Examples
/// ```
/// use social_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin@atg.world", "anything").unwrap();
/// assert_eq!(creds.email().as_ref(), "admin@atg.world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = Email::new(email).map_err(|_| LoginValidationError::EmptyEmail)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the directory lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    credentials: LoginCredentials,
    first_name: String,
    last_name: String,
}

impl Registration {
    /// Build a registration from validated credentials and names.
    pub fn new(
        credentials: LoginCredentials,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Email the new identity will be keyed by.
    pub fn email(&self) -> &Email {
        self.credentials.email()
    }

    /// Password supplied at registration.
    pub fn password(&self) -> &str {
        self.credentials.password()
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}

/// Form inputs that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        };
        f.write_str(name)
    }
}

/// Per-field validation failures collected from a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_owned());
    }

    /// Message recorded for `field`, if it failed.
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// `true` when no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields and their messages in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn check(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl From<FormErrors> for Error {
    fn from(value: FormErrors) -> Self {
        let details = value
            .iter()
            .map(|(field, message)| (field.to_string(), Value::String(message.to_owned())))
            .collect::<serde_json::Map<_, _>>();
        Error::invalid_request(format!("form validation failed: {value}"))
            .with_details(Value::Object(details))
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Shape check only: something, an @, something, a dot, something.
        Regex::new(r"\S+@\S+\.\S+")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn check_email(errors: &mut FormErrors, email: &str) {
    if email.is_empty() {
        errors.insert(FormField::Email, "Email is required");
    } else if !email_regex().is_match(email) {
        errors.insert(FormField::Email, "Email is invalid");
    }
}

fn check_password(errors: &mut FormErrors, password: &str) {
    if password.is_empty() {
        errors.insert(FormField::Password, "Password is required");
    } else if password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(FormField::Password, "Password must be at least 6 characters");
    }
}

/// Raw sign-in form input.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: Zeroizing<String>,
}

impl LoginForm {
    /// Build a form from raw input.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Validate the form, returning credentials or every failing field.
    pub fn validate(&self) -> Result<LoginCredentials, FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.check()?;
        LoginCredentials::try_from_parts(&self.email, &self.password)
            .map_err(|err| credential_error(&err))
    }
}

/// Raw sign-up form input.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Zeroizing<String>,
    pub confirm_password: Zeroizing<String>,
}

impl RegistrationForm {
    /// Validate the form, returning a registration or every failing field.
    ///
    /// # Examples
    /// ```
    /// use social_backend::domain::{FormField, RegistrationForm};
    ///
    /// let form = RegistrationForm {
    ///     email: "ada@example.com".into(),
    ///     password: "secret1".to_owned().into(),
    ///     confirm_password: "secret2".to_owned().into(),
    ///     ..RegistrationForm::default()
    /// };
    /// let errors = form.validate().unwrap_err();
    /// assert_eq!(errors.get(FormField::ConfirmPassword), Some("Passwords do not match"));
    /// assert_eq!(errors.get(FormField::FirstName), Some("First name is required"));
    /// ```
    pub fn validate(&self) -> Result<Registration, FormErrors> {
        let mut errors = FormErrors::default();
        if self.first_name.trim().is_empty() {
            errors.insert(FormField::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(FormField::LastName, "Last name is required");
        }
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        if self.confirm_password.is_empty() {
            errors.insert(FormField::ConfirmPassword, "Please confirm your password");
        } else if *self.password != *self.confirm_password {
            errors.insert(FormField::ConfirmPassword, "Passwords do not match");
        }
        errors.check()?;

        let credentials = LoginCredentials::try_from_parts(&self.email, &self.password)
            .map_err(|err| credential_error(&err))?;
        Ok(Registration::new(
            credentials,
            self.first_name.trim(),
            self.last_name.trim(),
        ))
    }
}

fn credential_error(err: &LoginValidationError) -> FormErrors {
    let mut errors = FormErrors::default();
    match err {
        LoginValidationError::EmptyEmail => errors.insert(FormField::Email, "Email is required"),
        LoginValidationError::EmptyPassword => {
            errors.insert(FormField::Password, "Password is required");
        }
    }
    errors
}
