//! Validated contact form message.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_MESSAGE_LEN: usize = 5000;

/// The three form fields, trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

fn check_length(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::out_of_range(field, 1, max as i32, len as i32));
    }
    Ok(())
}

/// Loose shape check: one `@`, something before it, a dot in the domain.
fn check_email(email: &str) -> Result<(), ValidationError> {
    let invalid = || ValidationError::invalid_format("email", "expected name@domain");
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || email.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(())
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();
        let message = message.into().trim().to_string();

        check_length("name", &name, MAX_NAME_LEN)?;
        check_length("email", &email, MAX_EMAIL_LEN)?;
        check_email(&email)?;
        check_length("message", &message, MAX_MESSAGE_LEN)?;

        Ok(Self {
            name,
            email,
            message,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Form-encoded field pairs in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}
