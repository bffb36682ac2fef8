//! Contact form model
//!
//! The checks here are the same ones the browser enforces through `required`
//! and `type="email"` on the inputs. Nothing is sent anywhere.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LandingError, Result};

/// The "valid email address" production browsers use for `type="email"`
static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

/// Fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Company,
    Message,
}

impl ContactField {
    /// Fields in form order
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Company,
        Self::Message,
    ];

    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Company => "Company",
            Self::Message => "Message",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::FirstName => "John",
            Self::LastName => "Doe",
            Self::Email => "john@example.com",
            Self::Company => "Your Company",
            Self::Message => "Tell us about your AI project requirements...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Message => "message",
        };
        f.write_str(name)
    }
}

/// Current contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Builder-style setter, mostly for tests
    #[must_use]
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Checks required presence and email shape.
    ///
    /// # Errors
    ///
    /// Returns the first failing constraint in form order:
    /// `LandingError::MissingField` for an empty required field, then
    /// `LandingError::InvalidEmail` for a malformed address.
    pub fn validate(&self) -> Result<()> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).is_empty())
        {
            return Err(LandingError::MissingField(field));
        }

        // Browsers strip surrounding whitespace from email inputs
        let email = self.email.trim();
        if is_email_shaped(email) {
            Ok(())
        } else {
            Err(LandingError::InvalidEmail(email.to_string()))
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::default()
            .with(ContactField::FirstName, "Thandi")
            .with(ContactField::LastName, "Nkosi")
            .with(ContactField::Email, "thandi@example.co.za")
            .with(ContactField::Message, "We want to automate invoicing.")
    }

    #[test]
    fn test_company_is_optional() {
        assert!(!ContactField::Company.is_required());
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_first_missing_field_is_reported() {
        let form = filled()
            .with(ContactField::LastName, "")
            .with(ContactField::Message, "");
        assert_eq!(
            form.validate(),
            Err(LandingError::MissingField(ContactField::LastName))
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email_shaped("a@b"));
        assert!(is_email_shaped("first.last+tag@sub.example.com"));
        assert!(!is_email_shaped("no-at-sign"));
        assert!(!is_email_shaped("a@-bad.com"));
        assert!(!is_email_shaped("a b@example.com"));
    }

    #[test]
    fn test_email_whitespace_is_trimmed() {
        let form = filled().with(ContactField::Email, "  thandi@example.co.za ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let form = filled().with(ContactField::Email, "thandi");
        assert_eq!(
            form.validate(),
            Err(LandingError::InvalidEmail("thandi".to_string()))
        );
    }

    #[test]
    fn test_set_and_value_agree() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set(field, field.label());
            assert_eq!(form.value(field), field.label());
        }
    }
}
