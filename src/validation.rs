//! Form Validation
//!
//! Client-side checks run before any request is issued.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::models::{LoginRequest, Role, SignupRequest};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_CONFIRM: &str = "confirmPassword";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_TERMS: &str = "acceptTerms";

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+{}[]:;<>,.?~\\/-";

static LOGIN_EMAIL: OnceLock<Regex> = OnceLock::new();
static SIGNUP_EMAIL: OnceLock<Regex> = OnceLock::new();

fn login_email() -> &'static Regex {
    LOGIN_EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+$").expect("valid login email pattern"))
}

fn signup_email() -> &'static Regex {
    SIGNUP_EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid signup email pattern"))
}

/// Per-field messages in stable order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Forget one field's message (e.g. when it regains focus)
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub accept_terms: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::User.as_str().to_string(),
            accept_terms: false,
        }
    }
}

/// At least 8 characters with lowercase, uppercase, digit and symbol
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.email.is_empty() {
        errors.insert(FIELD_EMAIL, "Email is required");
    } else if !login_email().is_match(&form.email) {
        errors.insert(FIELD_EMAIL, "Invalid email format");
    }

    if form.password.is_empty() {
        errors.insert(FIELD_PASSWORD, "Password is required");
    } else if form.password.chars().count() < 6 {
        errors.insert(FIELD_PASSWORD, "Password must be at least 6 characters");
    }

    errors.into_result(LoginRequest {
        email: form.email.clone(),
        password: form.password.clone(),
    })
}

pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.insert(FIELD_NAME, "Full name is required");
    }

    if form.email.is_empty() {
        errors.insert(FIELD_EMAIL, "Email is required");
    } else if !signup_email().is_match(&form.email) {
        errors.insert(FIELD_EMAIL, "Invalid email format");
    }

    if form.password.is_empty() {
        errors.insert(FIELD_PASSWORD, "Password is required");
    } else if !is_strong_password(&form.password) {
        errors.insert(
            FIELD_PASSWORD,
            "Password must be at least 8 characters and include uppercase, lowercase, number, and symbol",
        );
    }

    if form.confirm_password.is_empty() {
        errors.insert(FIELD_CONFIRM, "Please confirm your password");
    } else if form.confirm_password != form.password {
        errors.insert(FIELD_CONFIRM, PASSWORD_MISMATCH);
    }

    let role = form.role.parse::<Role>().ok();
    if role.is_none() {
        errors.insert(FIELD_ROLE, "Role is required");
    }

    if !form.accept_terms {
        errors.insert(FIELD_TERMS, "You must accept the Terms and Privacy Policy");
    }

    errors.into_result(SignupRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
        role: role.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_signup() -> SignupForm {
        SignupForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Engine#42".to_string(),
            confirm_password: "Engine#42".to_string(),
            role: "admin".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_valid_signup_builds_request() {
        let request = validate_signup(&valid_signup()).unwrap();
        assert_eq!(request.role, Role::Admin);
        assert_eq!(request.email, "ada@example.com");
    }

    #[test]
    fn test_empty_signup_reports_every_field() {
        let form = SignupForm {
            role: String::new(),
            ..SignupForm::default()
        };
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.get(FIELD_NAME), Some("Full name is required"));
        assert_eq!(errors.get(FIELD_CONFIRM), Some("Please confirm your password"));
        assert_eq!(errors.get(FIELD_ROLE), Some("Role is required"));
    }

    #[test]
    fn test_mismatched_confirmation() {
        let form = SignupForm {
            confirm_password: "Engine#43".to_string(),
            ..valid_signup()
        };
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FIELD_CONFIRM), Some(PASSWORD_MISMATCH));
    }

    #[test]
    fn test_password_complexity() {
        assert!(is_strong_password("Engine#42"));
        assert!(is_strong_password("a1B\\cdefg"));
        assert!(!is_strong_password("engine#42"));
        assert!(!is_strong_password("ENGINE#42"));
        assert!(!is_strong_password("Engine#xy"));
        assert!(!is_strong_password("Engine42x"));
        assert!(!is_strong_password("En#4"));
    }

    #[test]
    fn test_signup_email_needs_domain_dot() {
        let form = SignupForm {
            email: "ada@localhost".to_string(),
            ..valid_signup()
        };
        let errors = validate_signup(&form).unwrap_err();
        assert_eq!(errors.get(FIELD_EMAIL), Some("Invalid email format"));
    }

    #[test]
    fn test_login_rules() {
        let ok = LoginForm {
            email: "ada@localhost".to_string(),
            password: "secret".to_string(),
        };
        assert!(validate_login(&ok).is_ok());

        let short = LoginForm {
            email: "ada example.com".to_string(),
            password: "12345".to_string(),
        };
        let errors = validate_login(&short).unwrap_err();
        assert_eq!(errors.get(FIELD_EMAIL), Some("Invalid email format"));
        assert_eq!(errors.get(FIELD_PASSWORD), Some("Password must be at least 6 characters"));

        let errors = validate_login(&LoginForm::default()).unwrap_err();
        assert_eq!(errors.get(FIELD_EMAIL), Some("Email is required"));
        assert_eq!(errors.get(FIELD_PASSWORD), Some("Password is required"));
    }

    #[test]
    fn test_clear_single_field() {
        let mut errors = validate_login(&LoginForm::default()).unwrap_err();
        errors.clear(FIELD_EMAIL);
        assert_eq!(errors.get(FIELD_EMAIL), None);
        assert_eq!(errors.len(), 1);
    }
}
