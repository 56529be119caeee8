//! Conversion helpers for transforming errors to JSON format.

use diatone_theory::TheoryError;

use super::{error_codes, JsonError};
use crate::config::ConfigError;

/// Converts a library error to a JsonError, passing its code through.
pub fn theory_error_to_json(err: &TheoryError) -> JsonError {
    let error = JsonError::new(err.code(), err.to_string()).with_category(err.category());
    match err {
        TheoryError::NameFormat { .. } => {
            error.with_suggestion("use a letter A-G followed by only '#' or only 'b', e.g. F# or Bbb")
        }
        TheoryError::QualityNotApplicable { .. } => error.with_suggestion(
            "unison, 4th and 5th take per/aug/dim; 2nd, 3rd, 6th and 7th take min/maj/aug/dim",
        ),
        TheoryError::UnknownMode { .. } => {
            error.with_suggestion("run `diatone modes` to list the available patterns")
        }
        TheoryError::InvalidStepPattern { .. } => {
            error.with_suggestion("a pattern needs seven steps of 1 or 2 that add up to 12")
        }
        _ => error,
    }
}

/// Converts a config loading error to a JsonError.
pub fn config_error_to_json(err: &ConfigError) -> JsonError {
    let file = err.path().display().to_string();
    match err {
        ConfigError::FileRead { .. } => {
            JsonError::new(error_codes::FILE_READ, err.to_string()).with_file(file)
        }
        ConfigError::JsonParse { .. } => JsonError::new(error_codes::JSON_PARSE, err.to_string())
            .with_file(file)
            .with_suggestion(r#"expected { "patterns": { "<name>": [2, 2, 1, 2, 2, 2, 1] } }"#),
        ConfigError::Pattern { source, .. } => theory_error_to_json(source).with_file(file),
    }
}
