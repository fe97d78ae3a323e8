//! Client-side validation
//!
//! Everything here is detected before any network activity; a
//! `ValidationError` blocks the submission and is shown inline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingField {
        field: &'static str,
        message: &'static str,
    },

    #[error("You can upload up to {max} {unit} per {scope}.")]
    TooManyFiles {
        max: usize,
        unit: &'static str,
        scope: &'static str,
    },

    #[error("File too large: {name}. Max {limit} per {unit}.")]
    FileTooLarge {
        name: String,
        limit: &'static str,
        unit: &'static str,
    },
}

/// A field that must be non-blank before a write is issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredField {
    pub field: &'static str,
    pub message: &'static str,
}

impl RequiredField {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Checks `value`; blank and whitespace-only both count as missing
    pub fn check(&self, value: Option<&str>) -> Result<(), ValidationError> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(()),
            _ => Err(ValidationError::MissingField {
                field: self.field,
                message: self.message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_ui_copy() {
        let e = ValidationError::TooManyFiles {
            max: 5,
            unit: "files",
            scope: "catalog",
        };
        assert_eq!(e.to_string(), "You can upload up to 5 files per catalog.");

        let e = ValidationError::FileTooLarge {
            name: "video.mp4".into(),
            limit: "1GB",
            unit: "file",
        };
        assert_eq!(e.to_string(), "File too large: video.mp4. Max 1GB per file.");
    }

    #[test]
    fn required_field_rejects_blank() {
        let rule = RequiredField::new("name", "Name is required");
        assert!(rule.check(Some("Shoes")).is_ok());
        assert_eq!(
            rule.check(Some("   ")).unwrap_err().to_string(),
            "Name is required"
        );
        assert!(rule.check(None).is_err());
    }
}
