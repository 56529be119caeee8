//! Respell command implementation
//!
//! Prints another spelling of the same pitch class.

use anyhow::{Context, Result};
use colored::Colorize;
use diatone_theory::{Accidental, Note};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json, RespellRecord};

/// Run the respell command
///
/// # Arguments
/// * `name` - Note name to respell
/// * `prefer` - Accidental to keep or move toward
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(name: &str, prefer: Option<Accidental>, json_output: bool) -> Result<ExitCode> {
    let result = Note::new(name).map(|from| {
        let to = from.enharmonic(prefer);
        RespellRecord { from, to }
    });
    if json_output {
        return json_output::emit(result.map_err(|e| theory_error_to_json(&e)));
    }

    let RespellRecord { from, to } =
        result.with_context(|| format!("Failed to respell '{}'", name))?;
    let preference = prefer.map(|p| p.as_str()).unwrap_or("none");
    println!(
        "{} {} -> {} {}",
        "Respell:".cyan().bold(),
        from.name(),
        to.name().green().bold(),
        format!("(prefer {}, pitch class {})", preference, to.pitch()).dimmed()
    );
    if from.name() == to.name() {
        println!("  {}", "already in the preferred spelling".dimmed());
    }
    Ok(ExitCode::SUCCESS)
}
