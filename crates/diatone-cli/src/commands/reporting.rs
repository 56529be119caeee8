//! Human-readable rendering shared by several commands.

use colored::Colorize;
use diatone_theory::Note;

/// Print the derived fields of a note, indented under a header line.
pub(crate) fn print_note_details(note: &Note) {
    println!(
        "  {:<11} {} ({})",
        "letter".dimmed(),
        note.letter_name(),
        note.letter()
    );
    println!("  {:<11} {}", "pitch".dimmed(), note.pitch());
    println!("  {:<11} {}", "octave".dimmed(), note.octave());
    println!("  {:<11} {}", "hard pitch".dimmed(), note.hard_pitch());
    println!("  {:<11} {:.2} Hz", "frequency".dimmed(), note.frequency());
    println!("  {:<11} {}", "rhythm".dimmed(), describe_rhythm(note));
}

/// e.g. "quarter, dotted x1, 192 ticks"
pub(crate) fn describe_rhythm(note: &Note) -> String {
    let mut parts = vec![note.rhythm().name().to_string()];
    if note.dots() > 0 {
        parts.push(format!("dotted x{}", note.dots()));
    }
    if note.triplet() {
        parts.push("triplet".to_string());
    }
    parts.push(format!("{} ticks", format_ticks(note.rhythm().length())));
    parts.join(", ")
}

/// Whole tick counts without a fraction, others to three places.
pub(crate) fn format_ticks(length: f64) -> String {
    if length.fract() == 0.0 {
        format!("{}", length as u64)
    } else {
        format!("{:.3}", length)
    }
}

/// Print scale degrees on one line, the first highlighted.
pub(crate) fn print_degrees(notes: &[Note]) {
    let degrees: Vec<String> = notes
        .iter()
        .enumerate()
        .map(|(i, note)| {
            if i == 0 {
                note.name().green().bold().to_string()
            } else {
                note.name().to_string()
            }
        })
        .collect();
    println!("  {}", degrees.join(" "));
}
