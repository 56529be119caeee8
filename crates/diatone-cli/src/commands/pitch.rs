//! Pitch command implementation
//!
//! Names an absolute pitch (octave * 12 + pitch class).

use anyhow::Result;
use colored::Colorize;
use diatone_theory::{Accidental, Note};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json, NoteRecord};
use super::reporting::print_note_details;

/// Run the pitch command
///
/// # Arguments
/// * `hard_pitch` - Absolute pitch; 57 is A4
/// * `prefer` - Spelling for the five non-natural pitch classes
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(hard_pitch: i32, prefer: Accidental, json_output: bool) -> Result<ExitCode> {
    let result = Note::from_hard_pitch(hard_pitch, prefer);
    if json_output {
        return json_output::emit(
            result
                .map(NoteRecord::from)
                .map_err(|e| theory_error_to_json(&e)),
        );
    }

    let note = result?;
    println!(
        "{} {} -> {}",
        "Pitch:".cyan().bold(),
        hard_pitch,
        note.key_id().bold()
    );
    print_note_details(&note);
    Ok(ExitCode::SUCCESS)
}
