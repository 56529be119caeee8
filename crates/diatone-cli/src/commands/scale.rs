//! Scale command implementation
//!
//! Spells a mode from a root note and a named step pattern.

use anyhow::Result;
use colored::Colorize;
use diatone_theory::{Accidental, Mode, Note};
use std::process::ExitCode;

use super::json_output::{self, config_error_to_json, theory_error_to_json, JsonError, ScaleRecord};
use super::reporting::print_degrees;
use crate::config::load_mode_table;

/// Run the scale command
///
/// # Arguments
/// * `root` - Root note name
/// * `quality` - Step pattern name, e.g. "major" or "dorian"
/// * `octave` - Octave carried by every degree
/// * `prefer` - Respell every degree toward this accidental
/// * `modes_path` - Optional JSON file with extra step patterns
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    root: &str,
    quality: &str,
    octave: i32,
    prefer: Option<Accidental>,
    modes_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        return json_output::emit(build_json(root, quality, octave, prefer, modes_path));
    }

    let table = load_mode_table(modes_path)?;
    let root_note = Note::builder().octave(octave).named(root)?;
    let mode = Mode::with_table(&root_note, quality, &table)?;

    println!("{} {}", "Scale:".cyan().bold(), mode.name().bold());
    let steps: Vec<String> = mode.steps().iter().map(|s| s.to_string()).collect();
    println!("  {:<11} {}", "steps".dimmed(), steps.join(" "));
    print_degrees(mode.spelling());
    if let Some(prefer) = prefer {
        println!("  {}", format!("respelled toward {}:", prefer.as_str()).dimmed());
        print_degrees(mode.respelled(prefer).notes());
    }
    Ok(ExitCode::SUCCESS)
}

fn build_json(
    root: &str,
    quality: &str,
    octave: i32,
    prefer: Option<Accidental>,
    modes_path: Option<&str>,
) -> Result<ScaleRecord, JsonError> {
    let table = load_mode_table(modes_path).map_err(|e| config_error_to_json(&e))?;
    let root_note = Note::builder()
        .octave(octave)
        .named(root)
        .map_err(|e| theory_error_to_json(&e))?;
    let mode = Mode::with_table(&root_note, quality, &table).map_err(|e| theory_error_to_json(&e))?;
    let respelled = prefer.map(|prefer| mode.respelled(prefer));
    Ok(ScaleRecord { mode, respelled })
}
