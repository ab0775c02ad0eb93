//! Shape checks for the sign-in, sign-up and password reset forms

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_INVALID_EMAIL: &str = "Invalid email address";
pub const MSG_SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const MSG_FIRST_NAME_REQUIRED: &str = "First name is required";
pub const MSG_LAST_NAME_REQUIRED: &str = "Last name is required";

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Per-field messages shown inline next to the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// First message recorded for `field`
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&joined.join(", "))
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add("email", MSG_INVALID_EMAIL);
    }
}

fn check_password(errors: &mut FieldErrors, password: &str) {
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.add("password", MSG_SHORT_PASSWORD);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SignInForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignInForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.first_name.is_empty() {
            errors.add("firstName", MSG_FIRST_NAME_REQUIRED);
        }
        if self.last_name.is_empty() {
            errors.add("lastName", MSG_LAST_NAME_REQUIRED);
        }
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgotPasswordForm {
    #[serde(default)]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, &self.email);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        for ok in ["user@example.com", "first.last+tag@mail.example.org", "o'neil@x.io"] {
            assert!(is_valid_email(ok), "{ok} should pass");
        }
        for bad in [
            "",
            "plain",
            "@example.com",
            "a@b",
            ".a@example.com",
            "a..b@example.com",
            "a.@example.com",
            "a@-x.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should fail");
        }
    }

    #[test]
    fn test_sign_in_collects_both_fields() {
        let errors = SignInForm::new("nope", "123").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some(MSG_INVALID_EMAIL));
        assert_eq!(errors.get("password"), Some(MSG_SHORT_PASSWORD));
    }

    #[test]
    fn test_password_boundary() {
        assert!(SignInForm::new("user@example.com", "12345").validate().is_err());
        assert!(SignInForm::new("user@example.com", "123456").validate().is_ok());
    }

    #[test]
    fn test_sign_up_requires_names() {
        let form = SignUpForm {
            first_name: String::new(),
            last_name: "Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret1".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some(MSG_FIRST_NAME_REQUIRED));
        assert_eq!(errors.get("lastName"), None);
    }

    #[test]
    fn test_sign_up_form_field_names() {
        let form: SignUpForm = serde_json::from_str(
            r#"{"firstName":"Jo","lastName":"Doe","email":"jo@example.com","password":"secret1"}"#,
        )
        .unwrap();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_forgot_password_email_only() {
        assert!(ForgotPasswordForm { email: "user@example.com".into() }.validate().is_ok());
        let errors = ForgotPasswordForm::default().validate().unwrap_err();
        assert_eq!(errors.to_string(), "email: Invalid email address");
    }
}
