//! Error types for the landing page
//!
//! None of these reach the visitor. They exist so DOM access, configuration
//! and form checks stay panic-free and can be logged by the UI layer.

use crate::models::contact::ContactField;

/// Errors that can occur while wiring the landing page to the browser
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LandingError {
    /// No `window` object (not running in a browser)
    #[error("window is not available")]
    WindowUnavailable,

    /// No `document` on the window
    #[error("document is not available")]
    DocumentUnavailable,

    /// The browser refused to build an `IntersectionObserver`
    #[error("failed to create intersection observer: {0}")]
    ObserverCreation(String),

    /// Visibility threshold outside [0, 1] or not finite
    #[error("invalid visibility threshold: {0}")]
    InvalidThreshold(f64),

    /// Configuration could not be parsed or failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required contact field was left empty
    #[error("required field is empty: {0}")]
    MissingField(ContactField),

    /// The email field does not look like an address
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LandingError::WindowUnavailable.to_string(),
            "window is not available"
        );
        assert_eq!(
            LandingError::InvalidThreshold(1.5).to_string(),
            "invalid visibility threshold: 1.5"
        );
        assert_eq!(
            LandingError::MissingField(ContactField::Email).to_string(),
            "required field is empty: email"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = LandingError::InvalidConfig("bad json".to_string());
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }

    #[test]
    fn test_result_type() {
        let success: Result<u8> = Ok(1);
        assert!(success.is_ok());

        let failure: Result<u8> = Err(LandingError::DocumentUnavailable);
        assert!(failure.is_err());
    }
}
