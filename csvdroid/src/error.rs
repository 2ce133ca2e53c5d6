//! All error types for the csvdroid crate.
//!
//! The sanitizers and the row/document emitter never fail; these errors come from
//! reading localization tables, parsing language descriptors, reading back
//! `strings.xml` files and writing output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("invalid language `{0}`")]
    InvalidLanguage(String),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_unknown_column_error() {
        let error = Error::UnknownColumn("Deutsch".to_string());
        assert_eq!(error.to_string(), "unknown column `Deutsch`");
    }

    #[test]
    fn test_invalid_language_error() {
        let error = Error::InvalidLanguage("zh-Hant-TW".to_string());
        assert_eq!(error.to_string(), "invalid language `zh-Hant-TW`");
    }

    #[test]
    fn test_validation_error() {
        let error = Error::validation_error("no language columns configured");
        assert_eq!(
            error.to_string(),
            "validation error: no language columns configured"
        );
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            Error::UnknownColumn("test".to_string()),
            Error::InvalidLanguage("test".to_string()),
            Error::DataMismatch("test".to_string()),
            Error::InvalidResource("test".to_string()),
            Error::Validation("test".to_string()),
        ];

        for error in errors {
            let display = format!("{}", error);
            assert!(!display.is_empty());
            assert!(display.contains("test"));
        }
    }
}
