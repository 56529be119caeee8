//! Diatone CLI - Command-line interface for music-theory primitives
//!
//! This binary exposes note spelling, enharmonic respelling, intervals,
//! mode spelling, and meter arithmetic.

use clap::{Parser, Subcommand};
use diatone_theory::Accidental;
use std::process::ExitCode;

use diatone_cli::commands;
use diatone_cli::commands::note::NoteOptions;

/// Diatone - Note Spelling, Intervals, and Scales
#[derive(Parser)]
#[command(name = "diatone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a note name and describe it
    Note {
        /// Note name: a letter A-G followed by only '#' or only 'b'
        name: String,

        /// Octave number
        #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
        octave: i32,

        /// Rhythm table index (0 = double whole, 3 = quarter, 10 = 512th)
        #[arg(short, long, default_value_t = 3)]
        rhythm: u8,

        /// Number of dots
        #[arg(long, default_value_t = 0)]
        dots: u32,

        /// Scale the duration to a triplet
        #[arg(long)]
        triplet: bool,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Respell a note as another name for the same pitch class
    Respell {
        /// Note name to respell
        name: String,

        /// Accidental to keep or move toward (sharp, flat)
        #[arg(long)]
        prefer: Option<Accidental>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Name an absolute pitch (octave * 12 + pitch class, A4 = 57)
    Pitch {
        /// Absolute pitch
        #[arg(allow_negative_numbers = true)]
        hard_pitch: i32,

        /// Spelling for non-natural pitch classes (sharp, flat)
        #[arg(long, default_value = "sharp")]
        prefer: Accidental,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Name the note nearest to a frequency
    Freq {
        /// Frequency in Hz
        hz: f64,

        /// Spelling for non-natural pitch classes (sharp, flat)
        #[arg(long, default_value = "sharp")]
        prefer: Accidental,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe an interval, optionally transposing a note by it
    Interval {
        /// Quality: per, min, maj, aug, augN, dim, dimN
        quality: String,

        /// Base: uni, 2nd, 3rd, 4th, 5th, 6th, 7th
        base: String,

        /// Octave displacement
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        displace: i32,

        /// Note to transpose by the interval
        #[arg(long)]
        from: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Spell a scale from a root note and a step pattern
    Scale {
        /// Root note name
        root: String,

        /// Step pattern name (see `diatone modes`)
        quality: String,

        /// Octave for every degree
        #[arg(short, long, default_value_t = 4, allow_negative_numbers = true)]
        octave: i32,

        /// Respell every degree toward this accidental (sharp, flat)
        #[arg(long)]
        prefer: Option<Accidental>,

        /// Path to a JSON file with extra step patterns
        #[arg(long)]
        modes: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the available step patterns
    Modes {
        /// Path to a JSON file with extra step patterns
        #[arg(long)]
        modes: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Describe a time signature and optional tempo
    Meter {
        /// Beats per measure
        top: u32,

        /// Beat unit (power of two from 1 to 512)
        bottom: u32,

        /// Tempo in beats per minute
        #[arg(long)]
        bpm: Option<f64>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Note {
            name,
            octave,
            rhythm,
            dots,
            triplet,
            json,
        } => commands::note::run(
            &name,
            NoteOptions {
                octave,
                rhythm,
                dots,
                triplet,
            },
            json,
        ),
        Commands::Respell { name, prefer, json } => commands::respell::run(&name, prefer, json),
        Commands::Pitch {
            hard_pitch,
            prefer,
            json,
        } => commands::pitch::run(hard_pitch, prefer, json),
        Commands::Freq { hz, prefer, json } => commands::freq::run(hz, prefer, json),
        Commands::Interval {
            quality,
            base,
            displace,
            from,
            json,
        } => commands::interval::run(&quality, &base, displace, from.as_deref(), json),
        Commands::Scale {
            root,
            quality,
            octave,
            prefer,
            modes,
            json,
        } => commands::scale::run(&root, &quality, octave, prefer, modes.as_deref(), json),
        Commands::Modes { modes, json } => commands::modes::run(modes.as_deref(), json),
        Commands::Meter {
            top,
            bottom,
            bpm,
            json,
        } => commands::meter::run(top, bottom, bpm, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_note_defaults() {
        let cli = Cli::try_parse_from(["diatone", "note", "C#"]).unwrap();
        match cli.command {
            Commands::Note {
                name,
                octave,
                rhythm,
                dots,
                triplet,
                json,
            } => {
                assert_eq!(name, "C#");
                assert_eq!(octave, 4);
                assert_eq!(rhythm, 3);
                assert_eq!(dots, 0);
                assert!(!triplet);
                assert!(!json);
            }
            _ => panic!("expected note command"),
        }
    }

    #[test]
    fn test_cli_parses_note_with_options() {
        let cli = Cli::try_parse_from([
            "diatone", "note", "bb", "--octave", "-1", "--rhythm", "5", "--dots", "2",
            "--triplet", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Note {
                octave,
                rhythm,
                dots,
                triplet,
                json,
                ..
            } => {
                assert_eq!(octave, -1);
                assert_eq!(rhythm, 5);
                assert_eq!(dots, 2);
                assert!(triplet);
                assert!(json);
            }
            _ => panic!("expected note command"),
        }
    }

    #[test]
    fn test_cli_parses_respell_preference() {
        let cli = Cli::try_parse_from(["diatone", "respell", "C#", "--prefer", "flat"]).unwrap();
        match cli.command {
            Commands::Respell { name, prefer, .. } => {
                assert_eq!(name, "C#");
                assert_eq!(prefer, Some(Accidental::Flat));
            }
            _ => panic!("expected respell command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_preference() {
        let result = Cli::try_parse_from(["diatone", "respell", "C#", "--prefer", "natural"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_pitch_default_preference() {
        let cli = Cli::try_parse_from(["diatone", "pitch", "-3"]).unwrap();
        match cli.command {
            Commands::Pitch {
                hard_pitch, prefer, ..
            } => {
                assert_eq!(hard_pitch, -3);
                assert_eq!(prefer, Accidental::Sharp);
            }
            _ => panic!("expected pitch command"),
        }
    }

    #[test]
    fn test_cli_parses_interval() {
        let cli = Cli::try_parse_from([
            "diatone", "interval", "dim2", "7th", "--displace", "-1", "--from", "Eb",
        ])
        .unwrap();
        match cli.command {
            Commands::Interval {
                quality,
                base,
                displace,
                from,
                json,
            } => {
                assert_eq!(quality, "dim2");
                assert_eq!(base, "7th");
                assert_eq!(displace, -1);
                assert_eq!(from.as_deref(), Some("Eb"));
                assert!(!json);
            }
            _ => panic!("expected interval command"),
        }
    }

    #[test]
    fn test_cli_parses_scale_with_modes_file() {
        let cli = Cli::try_parse_from([
            "diatone",
            "scale",
            "D",
            "dorian",
            "--modes",
            "modes.json",
            "--prefer",
            "sharp",
        ])
        .unwrap();
        match cli.command {
            Commands::Scale {
                root,
                quality,
                octave,
                prefer,
                modes,
                ..
            } => {
                assert_eq!(root, "D");
                assert_eq!(quality, "dorian");
                assert_eq!(octave, 4);
                assert_eq!(prefer, Some(Accidental::Sharp));
                assert_eq!(modes.as_deref(), Some("modes.json"));
            }
            _ => panic!("expected scale command"),
        }
    }

    #[test]
    fn test_cli_requires_quality_for_scale() {
        let result = Cli::try_parse_from(["diatone", "scale", "C"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_meter() {
        let cli = Cli::try_parse_from(["diatone", "meter", "6", "8", "--bpm", "96.5"]).unwrap();
        match cli.command {
            Commands::Meter {
                top, bottom, bpm, ..
            } => {
                assert_eq!(top, 6);
                assert_eq!(bottom, 8);
                assert_eq!(bpm, Some(96.5));
            }
            _ => panic!("expected meter command"),
        }
    }

    #[test]
    fn test_cli_parses_modes_json() {
        let cli = Cli::try_parse_from(["diatone", "modes", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Modes {
                modes: None,
                json: true
            }
        ));
    }
}
