//! Note command implementation
//!
//! Parses a note name with octave and duration and prints its derived fields.

use anyhow::{Context, Result};
use colored::Colorize;
use diatone_theory::{Note, TheoryResult};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json, NoteRecord};
use super::reporting::print_note_details;

/// Duration flags shared by commands that build a note from a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteOptions {
    pub octave: i32,
    pub rhythm: u8,
    pub dots: u32,
    pub triplet: bool,
}

impl NoteOptions {
    /// Build a note named `name` with these options.
    pub fn build(&self, name: &str) -> TheoryResult<Note> {
        Note::builder()
            .octave(self.octave)
            .rhythm(self.rhythm)
            .dots(self.dots)
            .triplet(self.triplet)
            .named(name)
    }
}

/// Run the note command
///
/// # Arguments
/// * `name` - Note name, e.g. "C#" or "bb"
/// * `options` - Octave and duration
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(name: &str, options: NoteOptions, json_output: bool) -> Result<ExitCode> {
    let result = options.build(name);
    if json_output {
        return json_output::emit(
            result
                .map(NoteRecord::from)
                .map_err(|e| theory_error_to_json(&e)),
        );
    }

    let note = result.with_context(|| format!("Failed to build note '{}'", name))?;
    println!("{} {}", "Note:".cyan().bold(), note.key_id().bold());
    print_note_details(&note);
    Ok(ExitCode::SUCCESS)
}
