//! Notes: a spelled pitch class placed in an octave, with a duration.
//!
//! This module provides the [`Note`] value and the spelling functions it is
//! built on: parsing names, naming (pitch class, letter) pairs and absolute
//! pitches, enharmonic respelling, and frequency conversion.
//!
//! # Example
//!
//! ```
//! use diatone_theory::note::{Accidental, Note};
//!
//! let note = Note::builder().octave(4).rhythm(3).named("C#").unwrap();
//! assert_eq!(note.hard_pitch(), 49);
//! assert_eq!(note.rhythm().name(), "quarter");
//!
//! let flat = note.enharmonic(Some(Accidental::Flat));
//! assert_eq!(flat.name(), "Db");
//! assert_eq!(flat.hard_pitch(), 49);
//! ```

mod constants;
mod frequency;
mod spelling;


use std::fmt;

use serde::Serialize;

use crate::error::{TheoryError, TheoryResult};
use crate::interval::Interval;
use crate::rhythm::{Rhythm, DEFAULT_RHYTHM_INDEX};

pub use constants::{
    is_natural_pitch_class, DEFAULT_OCTAVE, LETTER_COUNT, LETTER_NAMES, NATURAL_PITCHES,
    NON_NATURAL_PITCH_CLASSES, PITCH_CLASS_COUNT, REFERENCE_FREQ, REFERENCE_HARD_PITCH,
};
pub use frequency::{frequency_to_hard_pitch, hard_pitch_to_frequency};
pub use spelling::{
    minimal_accidental_count, parse_note_name, respell, spell_hard_pitch, spell_pitch_letter,
    Accidental, Spelling,
};

pub(crate) use spelling::{spell, step_letter};

/// An immutable note value.
///
/// All derived fields (`letter`, `pitch`, `hard_pitch`, `rhythm`) are computed
/// once from the constructor inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    name: String,
    letter: u8,
    pitch: u8,
    octave: i32,
    hard_pitch: i32,
    rhythm: Rhythm,
    dots: u32,
    triplet: bool,
    #[serde(skip)]
    spelling: Spelling,
}

impl Note {
    /// Parse a note name with the default octave (4) and rhythm (quarter).
    pub fn new(name: &str) -> TheoryResult<Self> {
        NoteBuilder::new().named(name)
    }

    /// Start building a note with non-default octave or rhythm.
    pub fn builder() -> NoteBuilder {
        NoteBuilder::new()
    }

    /// Spell `pitch` on `letter` with default octave and rhythm.
    pub fn from_pitch_letter(pitch: u8, letter: u8) -> TheoryResult<Self> {
        NoteBuilder::new().spelled(pitch, letter)
    }

    /// Name an absolute pitch with the default rhythm.
    pub fn from_hard_pitch(hard_pitch: i32, prefer: Accidental) -> TheoryResult<Self> {
        NoteBuilder::new().at_hard_pitch(hard_pitch, prefer)
    }

    /// Name the nearest equal-tempered pitch to `hz` with the default rhythm.
    pub fn from_frequency(hz: f64, prefer: Accidental) -> TheoryResult<Self> {
        NoteBuilder::new().at_frequency(hz, prefer)
    }

    fn assemble(
        spelling: Spelling,
        octave: i32,
        rhythm: Rhythm,
        dots: u32,
        triplet: bool,
    ) -> TheoryResult<Self> {
        let hard_pitch = checked_hard_pitch(octave, spelling.pitch())?;
        Ok(Self {
            name: spelling.name().to_string(),
            letter: spelling.letter(),
            pitch: spelling.pitch(),
            octave,
            hard_pitch,
            rhythm,
            dots,
            triplet,
            spelling,
        })
    }

    /// Same duration, new spelling and octave.
    pub(crate) fn respelled_as(&self, spelling: Spelling, octave: i32) -> TheoryResult<Self> {
        Self::assemble(spelling, octave, self.rhythm, self.dots, self.triplet)
    }

    /// Note name, e.g. "F#".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diatonic letter index (0 = C .. 6 = B).
    pub fn letter(&self) -> u8 {
        self.letter
    }

    /// Upper-case letter, e.g. 'F'.
    pub fn letter_name(&self) -> char {
        self.spelling.letter_name()
    }

    /// Pitch class (0-11).
    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    /// Octave number; middle C is in octave 4.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Absolute pitch: `octave * 12 + pitch`.
    pub fn hard_pitch(&self) -> i32 {
        self.hard_pitch
    }

    /// Duration, with dots and triplet scaling applied.
    pub fn rhythm(&self) -> Rhythm {
        self.rhythm
    }

    /// Number of dots.
    pub fn dots(&self) -> u32 {
        self.dots
    }

    /// Whether the duration is scaled to a triplet.
    pub fn triplet(&self) -> bool {
        self.triplet
    }

    /// The underlying spelling (name, letter, pitch class, accidentals).
    pub fn spelling(&self) -> &Spelling {
        &self.spelling
    }

    /// The accidental kind, or `None` for a bare letter.
    pub fn accidental(&self) -> Option<Accidental> {
        self.spelling.accidental()
    }

    /// Number of `#` or `b` characters in the name.
    pub fn accidental_count(&self) -> u32 {
        self.spelling.accidental_count()
    }

    /// Equal-tempered frequency in Hz.
    pub fn frequency(&self) -> f64 {
        hard_pitch_to_frequency(self.hard_pitch)
    }

    /// Identifier used by display and playback layers: name plus octave.
    pub fn key_id(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }

    /// Another spelling of the same pitch class; see [`respell`].
    ///
    /// Octave and duration are carried over unchanged.
    pub fn enharmonic(&self, prefer: Option<Accidental>) -> Note {
        let spelling = respell(&self.spelling, prefer);
        // Same pitch class and octave, so the absolute pitch stands.
        Self {
            name: spelling.name().to_string(),
            letter: spelling.letter(),
            pitch: spelling.pitch(),
            spelling,
            ..self.clone()
        }
    }

    /// Move by an interval, keeping letter and pitch in step.
    ///
    /// The letter advances by the interval's letter difference and the
    /// absolute pitch by its pitch difference; the octave follows the new
    /// absolute pitch.
    ///
    /// # Errors
    ///
    /// Returns [`TheoryError::HardPitchOutOfRange`] if the new absolute pitch
    /// does not fit in an `i32`.
    ///
    /// # Examples
    /// ```
    /// use diatone_theory::interval::Interval;
    /// use diatone_theory::note::Note;
    ///
    /// let e = Note::new("E").unwrap();
    /// let tritone = Interval::parse("aug", "4th", 0).unwrap();
    /// let a_sharp = e.transpose(&tritone).unwrap();
    /// assert_eq!(a_sharp.key_id(), "A#4");
    /// ```
    pub fn transpose(&self, interval: &Interval) -> TheoryResult<Note> {
        let target = i64::from(self.hard_pitch) + i64::from(interval.pitch_difference());
        let hard_pitch = i32::try_from(target)
            .map_err(|_| TheoryError::HardPitchOutOfRange { hard_pitch: target })?;
        let letter = step_letter(self.letter, interval.letter_difference() as i32);
        let pitch = hard_pitch.rem_euclid(PITCH_CLASS_COUNT as i32) as u8;
        let octave = hard_pitch.div_euclid(PITCH_CLASS_COUNT as i32);
        self.respelled_as(spell(pitch, letter), octave)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Builder for [`Note`] values with explicit octave and duration.
///
/// The terminal methods differ in how the pitch is given; each validates its
/// inputs and the rhythm index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteBuilder {
    octave: i32,
    rhythm: u8,
    dots: u32,
    triplet: bool,
}

impl Default for NoteBuilder {
    fn default() -> Self {
        Self {
            octave: DEFAULT_OCTAVE,
            rhythm: DEFAULT_RHYTHM_INDEX,
            dots: 0,
            triplet: false,
        }
    }
}

impl NoteBuilder {
    /// Creates a builder with octave 4, a quarter note, no dots, no triplet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the octave. Ignored by the absolute-pitch and frequency constructors.
    pub fn octave(mut self, octave: i32) -> Self {
        self.octave = octave;
        self
    }

    /// Sets the rhythm table index (0 = double whole .. 10 = 512th).
    pub fn rhythm(mut self, index: u8) -> Self {
        self.rhythm = index;
        self
    }

    /// Sets the number of dots.
    pub fn dots(mut self, dots: u32) -> Self {
        self.dots = dots;
        self
    }

    /// Scales the duration to a triplet.
    pub fn triplet(mut self, triplet: bool) -> Self {
        self.triplet = triplet;
        self
    }

    /// Build from a note name such as "Bb".
    pub fn named(self, name: &str) -> TheoryResult<Note> {
        let spelling = parse_note_name(name)?;
        self.finish(spelling, self.octave)
    }

    /// Build from a pitch class spelled on a specific letter.
    pub fn spelled(self, pitch: u8, letter: u8) -> TheoryResult<Note> {
        let spelling = spell_pitch_letter(pitch, letter)?;
        self.finish(spelling, self.octave)
    }

    /// Build from an absolute pitch; the octave comes from the pitch.
    pub fn at_hard_pitch(self, hard_pitch: i32, prefer: Accidental) -> TheoryResult<Note> {
        let (spelling, octave) = spell_hard_pitch(hard_pitch, prefer);
        self.finish(spelling, octave)
    }

    /// Build from a frequency in Hz; the octave comes from the pitch.
    pub fn at_frequency(self, hz: f64, prefer: Accidental) -> TheoryResult<Note> {
        self.at_hard_pitch(frequency_to_hard_pitch(hz)?, prefer)
    }

    fn finish(self, spelling: Spelling, octave: i32) -> TheoryResult<Note> {
        let rhythm = Rhythm::from_index(self.rhythm, self.dots, self.triplet)?;
        Note::assemble(spelling, octave, rhythm, self.dots, self.triplet)
    }
}

/// `octave * 12 + pitch`, failing when it does not fit in an `i32`.
fn checked_hard_pitch(octave: i32, pitch: u8) -> TheoryResult<i32> {
    let hard_pitch = i64::from(octave) * i64::from(PITCH_CLASS_COUNT) + i64::from(pitch);
    i32::try_from(hard_pitch).map_err(|_| TheoryError::OctaveOutOfRange { octave, pitch })
}
