//! Interval command implementation
//!
//! Describes an interval and optionally moves a note by it.

use anyhow::{Context, Result};
use colored::Colorize;
use diatone_theory::{Interval, Note, TheoryResult};
use std::process::ExitCode;

use super::json_output::{self, theory_error_to_json, IntervalRecord};

fn build(quality: &str, base: &str, displace: i32, from: Option<&str>) -> TheoryResult<IntervalRecord> {
    let interval = Interval::parse(quality, base, displace)?;
    let from = from.map(Note::new).transpose()?;
    let to = from
        .as_ref()
        .map(|note| note.transpose(&interval))
        .transpose()?;
    Ok(IntervalRecord { interval, from, to })
}

/// Run the interval command
///
/// # Arguments
/// * `quality` - `per`, `min`, `maj`, `aug[N]`, or `dim[N]`
/// * `base` - `uni`, `2nd` .. `7th`
/// * `displace` - Octaves to add (negative moves down)
/// * `from` - Optional note name to transpose
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(
    quality: &str,
    base: &str,
    displace: i32,
    from: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let result = build(quality, base, displace, from);
    if json_output {
        return json_output::emit(result.map_err(|e| theory_error_to_json(&e)));
    }

    let record = result.with_context(|| format!("Failed to build interval '{} {}'", quality, base))?;
    let interval = record.interval;
    println!("{} {}", "Interval:".cyan().bold(), interval.to_string().bold());
    println!(
        "  {:<11} {}",
        "semitones".dimmed(),
        interval.pitch_difference()
    );
    println!(
        "  {:<11} {}",
        "letters".dimmed(),
        interval.letter_difference()
    );
    if let (Some(from), Some(to)) = (&record.from, &record.to) {
        println!(
            "  {:<11} {} -> {}",
            "transpose".dimmed(),
            from.key_id(),
            to.key_id().green().bold()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_with_transposition() {
        let record = build("maj", "3rd", 0, Some("Eb")).unwrap();
        assert_eq!(record.interval.pitch_difference(), 4);
        assert_eq!(record.to.unwrap().key_id(), "G4");
    }

    #[test]
    fn build_without_note() {
        let record = build("per", "5th", -1, None).unwrap();
        assert_eq!(record.interval.pitch_difference(), -5);
        assert!(record.from.is_none());
        assert!(record.to.is_none());
    }

    #[test]
    fn interval_success() {
        assert_eq!(run("aug", "4th", 0, Some("F"), false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run("dim2", "7th", 1, None, true).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn interval_rejects_bad_quality() {
        assert!(run("maj", "5th", 0, None, false).is_err());
        assert!(run("big", "3rd", 0, None, false).is_err());
        assert_eq!(
            run("maj", "9th", 0, None, true).unwrap(),
            ExitCode::from(1)
        );
    }

    #[test]
    fn interval_rejects_bad_note() {
        assert!(run("maj", "3rd", 0, Some("Q"), false).is_err());
    }

    #[test]
    fn build_rejects_oversized_displacement() {
        let err = build("maj", "3rd", 200_000_000, None).unwrap_err();
        assert_eq!(err.code(), "THEORY_015");
        assert_eq!(
            run("maj", "3rd", 200_000_000, None, true).unwrap(),
            ExitCode::from(1)
        );
        assert!(run("maj", "3rd", 200_000_000, None, false).is_err());
    }

    #[test]
    fn build_rejects_transposition_past_range() {
        let record = build("per", "uni", 178_956_970, None).unwrap();
        assert_eq!(record.interval.pitch_difference(), 2_147_483_640);
        let err = build("per", "uni", 178_956_970, Some("C")).unwrap_err();
        assert_eq!(err.code(), "THEORY_014");
    }
}
