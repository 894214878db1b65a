//! Form DTOs for submitted HTML forms
//!
//! All form DTOs implement `Deserialize` and `Validate`. Missing fields
//! deserialize as empty strings so they fail validation instead of the
//! extractor. Usernames, e-mails, and message text are trimmed on the way
//! in so length checks see the stored value.

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

// ============================================================================
// Auth Forms
// ============================================================================

/// Signup form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SignupForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 50, message = "E-mail must be 1-50 characters"),
        email(message = "Invalid e-mail address")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    /// Optional avatar URL; blank means the default picture
    #[validate(length(max = 255, message = "Image URL must be at most 255 characters"))]
    pub image_url: Option<String>,
}

/// Login form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct LoginForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Message Forms
// ============================================================================

/// New message form
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct NewMessageForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 140, message = "Message must be 1-140 characters"))]
    pub text: String,
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|s| s.trim().to_string())
}

/// Pick one human-readable message out of a set of validation errors
///
/// Fields are visited in name order so the result is stable.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("Invalid {field}"),
            })
        })
        .unwrap_or_else(|| "Invalid input".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(username: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_valid_signup() {
        assert!(signup("testuser", "test@test.com", "HASHED_PASSWORD")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_blank_signup_fields() {
        let errors = signup("", "test@test.com", "password").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let errors = signup("testuser", "", "password").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let errors = signup("testuser", "not-an-email", "password").validate().unwrap_err();
        assert_eq!(first_validation_message(&errors), "Invalid e-mail address");

        let errors = signup("testuser", "test@test.com", "12345").validate().unwrap_err();
        assert_eq!(
            first_validation_message(&errors),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_message_length() {
        assert!(NewMessageForm { text: "hi".into() }.validate().is_ok());
        assert!(NewMessageForm { text: String::new() }.validate().is_err());
        assert!(NewMessageForm { text: "x".repeat(141) }.validate().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_blank() {
        let form: LoginForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.username, "");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let form: LoginForm =
            serde_json::from_str(r#"{"username": " padded ", "password": " secret "}"#).unwrap();
        assert_eq!(form.username, "padded");
        assert_eq!(form.password, " secret ");

        let text = format!("  {}  ", "a".repeat(140));
        let form: NewMessageForm =
            serde_json::from_value(serde_json::json!({ "text": text })).unwrap();
        assert_eq!(form.text.len(), 140);
        assert!(form.validate().is_ok());

        let form: NewMessageForm = serde_json::from_str(r#"{"text": "   "}"#).unwrap();
        assert!(form.validate().is_err());
    }
}
