//! Error types for the MobiDziennik scraper
//!
//! This module defines all error types used throughout the library.
//! MobiError implements Serialize so the CLI can report it as JSON.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for MobiDziennik scraper operations
#[derive(Error, Debug)]
pub enum MobiError {
    /// Network failure or non-2xx HTTP status
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The portal rejected the supplied credentials
    #[error("{0}")]
    AuthError(String),

    /// The lesson plan page could not be interpreted
    #[error("{0}")]
    ParseError(String),

    /// Unknown relative day requested
    #[error("Invalid day parameter: {0}. Use \"today\", \"tomorrow\", or \"dayaftertomorrow\"")]
    InvalidDay(String),
}

/// Serialize MobiError as its display string
impl Serialize for MobiError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for MobiDziennik scraper operations
pub type Result<T> = std::result::Result<T, MobiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobi_error_display_auth_error() {
        let error = MobiError::AuthError("Invalid credentials".to_string());
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_mobi_error_display_parse_error() {
        let error = MobiError::ParseError("Unable to find schedule content".to_string());
        assert_eq!(error.to_string(), "Unable to find schedule content");
    }

    #[test]
    fn test_mobi_error_display_invalid_day() {
        let error = MobiError::InvalidDay("yesterday".to_string());
        let display = error.to_string();
        assert!(display.contains("yesterday"));
        assert!(display.contains("dayaftertomorrow"));
    }

    #[test]
    fn test_mobi_error_serialize() {
        let error = MobiError::ParseError("test error".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"test error\"");
    }

    #[test]
    fn test_mobi_error_serialize_keeps_polish_text() {
        let error = MobiError::ParseError("Unable to parse lesson title: Fizyka odwołana".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Unable to parse lesson title: Fizyka odwołana\"");
    }
}
