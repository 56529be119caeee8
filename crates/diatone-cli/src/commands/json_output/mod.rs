//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`. In that mode nothing colored is printed;
//! the command writes one [`CommandOutput`] document to stdout, carrying
//! either the computed value or structured errors.

mod convert;
mod records;

pub use convert::{config_error_to_json, theory_error_to_json};
pub use records::{IntervalRecord, NoteRecord, RespellRecord, ScaleRecord};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::process::ExitCode;

/// Error codes for CLI operations.
///
/// Library errors pass their own `THEORY_xxx` codes through unchanged.
pub mod error_codes {
    /// Config file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file is not valid JSON for its schema
    pub const JSON_PARSE: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "THEORY_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Error family (name, range, quality, mode, meter)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            category: None,
            file: None,
            suggestion: None,
        }
    }

    /// Sets the error family.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// JSON output shared by all commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// The computed value (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

impl<T: Serialize> CommandOutput<T> {
    /// Print as pretty JSON and return the matching exit code.
    pub fn print(&self) -> Result<ExitCode> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize output")?;
        println!("{}", json);
        Ok(if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        })
    }
}

impl<T> From<Result<T, JsonError>> for CommandOutput<T> {
    fn from(result: Result<T, JsonError>) -> Self {
        match result {
            Ok(value) => CommandOutput::success(value),
            Err(error) => CommandOutput::failure(vec![error]),
        }
    }
}

/// Print a command result as JSON.
pub fn emit<T: Serialize>(result: Result<T, JsonError>) -> Result<ExitCode> {
    CommandOutput::from(result).print()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_serialization() {
        let error = JsonError::new("THEORY_001", "test error")
            .with_category("name")
            .with_file("modes.json");

        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"THEORY_001\""));
        assert!(json.contains("\"message\":\"test error\""));
        assert!(json.contains("\"category\":\"name\""));
        assert!(json.contains("\"file\":\"modes.json\""));
    }

    #[test]
    fn test_json_error_optional_fields_skipped() {
        let error = JsonError::new("CLI_001", "test error");
        let json = serde_json::to_string(&error).unwrap();

        assert!(!json.contains("\"category\""));
        assert!(!json.contains("\"file\""));
        assert!(!json.contains("\"suggestion\""));
    }

    #[test]
    fn test_output_from_result() {
        let ok: CommandOutput<u32> = Ok(7).into();
        assert!(ok.success);
        assert_eq!(ok.result, Some(7));
        assert!(ok.errors.is_empty());

        let err: CommandOutput<u32> = Err(JsonError::new("CLI_003", "bad")).into();
        assert!(!err.success);
        assert_eq!(err.result, None);
        assert_eq!(err.errors[0].code, "CLI_003");

        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("result").is_none());
    }
}
