use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    // The deliberately simple local@domain.tld shape used on both sides of
    // the wire
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("contact email pattern is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    MissingField(&'static str),
    InvalidEmail,
}

impl std::fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactValidationError::MissingField(field) => {
                write!(f, "All fields are required (missing: {})", field)
            }
            ContactValidationError::InvalidEmail => write!(f, "Invalid email format"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Raw form body as posted by the client.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A contact form submission that passed validation: all fields non-empty
/// after trimming, email in local@domain.tld shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactMessage {
    pub fn new(form: ContactForm) -> Result<Self, ContactValidationError> {
        let name = form.name.trim();
        let email = form.email.trim();
        let subject = form.subject.trim();
        let message = form.message.trim();

        if name.is_empty() {
            return Err(ContactValidationError::MissingField("name"));
        }
        if email.is_empty() {
            return Err(ContactValidationError::MissingField("email"));
        }
        if subject.is_empty() {
            return Err(ContactValidationError::MissingField("subject"));
        }
        if message.is_empty() {
            return Err(ContactValidationError::MissingField("message"));
        }

        if !email_re().is_match(email) {
            return Err(ContactValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_accepted_and_trimmed() {
        let msg =
            ContactMessage::new(form("  Ada ", " ada@example.com ", "Hi", "Hello there")).unwrap();

        assert_eq!(msg.name(), "Ada");
        assert_eq!(msg.email(), "ada@example.com");
    }

    #[test]
    fn test_every_field_is_required() {
        assert_eq!(
            ContactMessage::new(form("", "a@b.co", "s", "m")).unwrap_err(),
            ContactValidationError::MissingField("name")
        );
        assert_eq!(
            ContactMessage::new(form("n", "", "s", "m")).unwrap_err(),
            ContactValidationError::MissingField("email")
        );
        assert_eq!(
            ContactMessage::new(form("n", "a@b.co", "   ", "m")).unwrap_err(),
            ContactValidationError::MissingField("subject")
        );
        assert_eq!(
            ContactMessage::new(form("n", "a@b.co", "s", "")).unwrap_err(),
            ContactValidationError::MissingField("message")
        );
    }

    #[test]
    fn test_email_shape_is_checked() {
        for bad in ["bad", "a@b", "a b@c.de", "@example.com", "a@.com"] {
            let result = ContactMessage::new(form("n", bad, "s", "m"));
            assert!(result.is_err(), "accepted bad email {:?}", bad);
        }

        assert!(ContactMessage::new(form("n", "a@example.co.uk", "s", "m")).is_ok());
    }
}
