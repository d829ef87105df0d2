//! Error kinds surfaced by the store, queries and mutations.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Backing file exists but is not a JSON array of teachers.
    #[error("cannot parse teacher file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Teacher list could not be turned into JSON while saving.
    #[error("cannot serialize teachers for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("teacher file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-numeric text where an integer is required.
    #[error("{field} must be a whole number, got {value:?}")]
    Format { field: &'static str, value: String },

    #[error("no teacher matches {0:?}")]
    NotFound(String),

    #[error("unknown field {0:?} (expected name, age, dob or num_classes)")]
    InvalidField(String),

    #[error("no teachers available")]
    Empty,
}

pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    /// One-line message shown at the menu for recoverable errors.
    pub fn user_message(&self) -> String {
        match self {
            RegistryError::NotFound(_) => "Teacher not found.".to_string(),
            RegistryError::InvalidField(field) => format!("Invalid field: {}.", field),
            RegistryError::Format { .. } => format!("Invalid number: {}.", self),
            RegistryError::Empty => {
                "No teachers available to calculate average classes.".to_string()
            }
            RegistryError::Io { .. } | RegistryError::Serialize { .. } => {
                format!("Could not save teachers: {}", self)
            }
            RegistryError::Parse { .. } => format!("Could not read teachers: {}", self),
        }
    }
}

/// Parse user input as an integer for `field`.
pub fn parse_int(field: &'static str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| RegistryError::Format {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_trims_whitespace() {
        assert_eq!(parse_int("age", " 42 ").unwrap(), 42);
        assert_eq!(parse_int("age", "-3").unwrap(), -3);
    }

    #[test]
    fn user_messages() {
        let err = RegistryError::NotFound("zed".to_string());
        assert_eq!(err.user_message(), "Teacher not found.");

        let err = RegistryError::InvalidField("salary".to_string());
        assert!(err.user_message().contains("salary"));

        assert!(RegistryError::Empty.user_message().contains("No teachers"));

        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = RegistryError::Parse {
            path: PathBuf::from("teachers.json"),
            source,
        };
        assert!(err.user_message().starts_with("Could not read teachers"));
    }

    #[test]
    fn parse_int_rejects_text() {
        let err = parse_int("age", "forty").unwrap_err();
        assert!(matches!(err, RegistryError::Format { field: "age", .. }));
        assert!(err.to_string().contains("forty"));
    }
}
