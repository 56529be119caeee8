//! Diatone Music-Theory Core
//!
//! This crate models Western music-theory primitives: spelled notes, intervals,
//! modes built from step patterns, and rhythmic durations. Every value is
//! immutable and validated at construction.
//!
//! # Overview
//!
//! - **Pitch class** is 0-11 counted from C; **letter** is 0-6 over C D E F G A B.
//! - A note name is a letter followed by only `#` or only `b` (e.g. `F#`, `Bbb`).
//! - **Hard pitch** is `octave * 12 + pitch`, so A4 is 57.
//! - Durations are in ticks, a double whole note being 1024.
//!
//! # Example
//!
//! ```
//! use diatone_theory::{Accidental, Interval, Mode, Note};
//!
//! // Spell a note and respell it
//! let note = Note::new("A#").unwrap();
//! assert_eq!(note.hard_pitch(), 58);
//! assert_eq!(note.enharmonic(None).name(), "Bb");
//!
//! // Move it by a perfect fifth
//! let fifth = Interval::parse("per", "5th", 0).unwrap();
//! assert_eq!(note.transpose(&fifth).unwrap().key_id(), "E#5");
//!
//! // Spell a scale and render it with flats
//! let scale = Mode::from_name("D", "dorian").unwrap();
//! assert_eq!(scale.names(), ["D", "E", "F", "G", "A", "B", "C"]);
//! let flats = Mode::from_name("A#", "minor").unwrap().respelled(Accidental::Flat);
//! assert_eq!(flats.names(), ["Bb", "C", "Db", "Eb", "F", "Gb", "Ab"]);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error type with stable codes
//! - [`note`]: Notes, spelling, enharmonic respelling, frequency conversion
//! - [`interval`]: Interval quality, category, and semitone distance
//! - [`mode`]: Step-pattern table and mode spelling
//! - [`rhythm`]: Duration table with dots and triplets
//! - [`meter`]: Tempo and time signatures

pub mod error;
pub mod interval;
pub mod meter;
pub mod mode;
pub mod note;
pub mod rhythm;

// Re-export commonly used types at the crate root
pub use error::{TheoryError, TheoryResult};
pub use interval::{Interval, IntervalBase, Quality};
pub use meter::{Tempo, TimeSignature};
pub use mode::{validate_steps, Mode, ModeTable, RespelledScale, StepPattern};
pub use note::{Accidental, Note, NoteBuilder, Spelling};
pub use rhythm::{Rhythm, RhythmValue, DEFAULT_RHYTHM_INDEX};
