//! Meter command implementation
//!
//! Describes a time signature and, with a tempo, its timing in milliseconds.

use anyhow::{Context, Result};
use colored::Colorize;
use diatone_theory::{Tempo, TheoryResult, TimeSignature};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json};
use super::reporting::format_ticks;

fn build(top: u32, bottom: u32, bpm: Option<f64>) -> TheoryResult<TimeSignature> {
    let tempo = bpm.map(Tempo::new).transpose()?;
    TimeSignature::new(top, bottom, tempo)
}

/// Run the meter command
///
/// # Arguments
/// * `top` - Beats per measure
/// * `bottom` - Beat unit, a power of two from 1 to 512
/// * `bpm` - Optional tempo in beats per minute
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(top: u32, bottom: u32, bpm: Option<f64>, json_output: bool) -> Result<ExitCode> {
    let result = build(top, bottom, bpm);
    if json_output {
        return json_output::emit(result.map_err(|e| theory_error_to_json(&e)));
    }

    let meter = result.with_context(|| format!("Failed to build meter {}/{}", top, bottom))?;
    println!("{} {}/{}", "Meter:".cyan().bold(), meter.top(), meter.bottom());
    println!(
        "  {:<11} {} ({} ticks)",
        "beat".dimmed(),
        meter.beat().name(),
        format_ticks(meter.beat().length())
    );
    println!(
        "  {:<11} {} ticks",
        "measure".dimmed(),
        format_ticks(meter.measure_len())
    );
    if let Some(tempo) = meter.tempo() {
        println!(
            "  {:<11} {} bpm, {:.1} ms per beat",
            "tempo".dimmed(),
            tempo.bpm(),
            tempo.beat_len_ms()
        );
    }
    if let Some(ms) = meter.measure_len_ms() {
        println!("  {:<11} {:.1} ms per measure", "".dimmed(), ms);
    }
    Ok(ExitCode::SUCCESS)
}
