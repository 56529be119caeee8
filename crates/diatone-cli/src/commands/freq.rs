//! Freq command implementation
//!
//! Names the equal-tempered note nearest to a frequency.

use anyhow::{Context, Result};
use colored::Colorize;
use diatone_theory::{Accidental, Note};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json, NoteRecord};
use super::reporting::print_note_details;

/// Run the freq command
///
/// # Arguments
/// * `hz` - Frequency in Hz, must be positive
/// * `prefer` - Spelling for the five non-natural pitch classes
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(hz: f64, prefer: Accidental, json_output: bool) -> Result<ExitCode> {
    let result = Note::from_frequency(hz, prefer);
    if json_output {
        return json_output::emit(
            result
                .map(NoteRecord::from)
                .map_err(|e| theory_error_to_json(&e)),
        );
    }

    let note = result.context("Failed to name frequency")?;
    let cents = 1200.0 * (hz / note.frequency()).log2();
    println!(
        "{} {} Hz -> {} {}",
        "Frequency:".cyan().bold(),
        hz,
        note.key_id().bold(),
        format!("({:+.1} cents)", cents).dimmed()
    );
    print_note_details(&note);
    Ok(ExitCode::SUCCESS)
}
