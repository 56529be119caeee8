//! Modes and scales.
//!
//! A mode is a root note plus a named step pattern. Spelling a mode walks the
//! pattern one diatonic letter at a time, so every degree lands on its own
//! letter and the accidentals fall out of the pitch arithmetic.
//!
//! # Example
//!
//! ```
//! use diatone_theory::mode::Mode;
//!
//! let mode = Mode::from_name("Eb", "major").unwrap();
//! assert_eq!(mode.names(), ["Eb", "F", "G", "Ab", "Bb", "C", "D"]);
//! ```

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{TheoryError, TheoryResult};
use crate::interval::Interval;
use crate::note::{spell, step_letter, Accidental, Note, LETTER_COUNT, PITCH_CLASS_COUNT};

/// Number of steps in a pattern, including the closing step back to the root.
pub const STEP_COUNT: usize = 7;

/// A validated step pattern: seven semitone steps of 1 or 2 summing to 12.
pub type StepPattern = [u8; STEP_COUNT];

const BUILT_IN_PATTERNS: [(&str, StepPattern); 9] = [
    ("major", [2, 2, 1, 2, 2, 2, 1]),
    ("minor", [2, 1, 2, 2, 1, 2, 2]),
    ("ionian", [2, 2, 1, 2, 2, 2, 1]),
    ("dorian", [2, 1, 2, 2, 2, 1, 2]),
    ("phrygian", [1, 2, 2, 2, 1, 2, 2]),
    ("lydian", [2, 2, 2, 1, 2, 2, 1]),
    ("mixolydian", [2, 2, 1, 2, 2, 1, 2]),
    ("aeolian", [2, 1, 2, 2, 1, 2, 2]),
    ("locrian", [1, 2, 2, 1, 2, 2, 2]),
];

static STANDARD_TABLE: OnceLock<ModeTable> = OnceLock::new();

/// Named step patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeTable {
    patterns: BTreeMap<String, StepPattern>,
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            patterns: BUILT_IN_PATTERNS
                .iter()
                .map(|(name, steps)| (name.to_string(), *steps))
                .collect(),
        }
    }
}

impl ModeTable {
    /// A table holding only the built-in patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared read-only table of the built-in patterns.
    pub fn standard() -> &'static ModeTable {
        STANDARD_TABLE.get_or_init(ModeTable::default)
    }

    /// Register a pattern, replacing any pattern with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`TheoryError::InvalidStepPattern`] unless the pattern has
    /// exactly seven steps, each 1 or 2, summing to 12.
    pub fn insert(&mut self, name: &str, steps: &[u8]) -> TheoryResult<()> {
        let pattern = validate_steps(name, steps)?;
        self.patterns.insert(name.to_string(), pattern);
        Ok(())
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> TheoryResult<&StepPattern> {
        self.patterns
            .get(name)
            .ok_or_else(|| TheoryError::UnknownMode {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.patterns.contains_key(name)
    }

    /// Pattern names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StepPattern)> {
        self.patterns.iter().map(|(name, steps)| (name.as_str(), steps))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Check a candidate step pattern.
pub fn validate_steps(name: &str, steps: &[u8]) -> TheoryResult<StepPattern> {
    let invalid = |message: String| TheoryError::InvalidStepPattern {
        name: name.to_string(),
        message,
    };

    let pattern: StepPattern = steps.try_into().map_err(|_| {
        invalid(format!(
            "expected {} steps, got {}",
            STEP_COUNT,
            steps.len()
        ))
    })?;
    if let Some(bad) = pattern.iter().find(|&&step| step != 1 && step != 2) {
        return Err(invalid(format!("step {} is not 1 or 2", bad)));
    }
    let total: u32 = pattern.iter().map(|&step| step as u32).sum();
    if total != PITCH_CLASS_COUNT as u32 {
        return Err(invalid(format!("steps sum to {}, expected 12", total)));
    }
    Ok(pattern)
}

/// A spelled mode: one note per degree, starting at the root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mode {
    name: String,
    root_note: Note,
    quality: String,
    steps: StepPattern,
    spelling: Vec<Note>,
}

impl Mode {
    /// Spell a mode from the built-in patterns.
    pub fn new(root: &Note, quality: &str) -> TheoryResult<Self> {
        Self::with_table(root, quality, ModeTable::standard())
    }

    /// Spell a mode from a root note name, default octave and rhythm.
    pub fn from_name(root: &str, quality: &str) -> TheoryResult<Self> {
        Self::new(&Note::new(root)?, quality)
    }

    /// Spell a mode using patterns from `table`.
    ///
    /// Each degree keeps the root's octave and duration. The last step only
    /// closes the octave and produces no degree. Degree `i` is spelled on the
    /// letter `i` steps above the root's.
    pub fn with_table(root: &Note, quality: &str, table: &ModeTable) -> TheoryResult<Self> {
        let steps = *table.get(quality)?;
        let whole = Interval::major_second()?;
        let half = Interval::minor_second()?;

        let mut spelling = Vec::with_capacity(LETTER_COUNT as usize);
        spelling.push(root.clone());
        let mut pitch = root.pitch() as i32;
        let mut letter = root.letter();
        for &step in &steps[..STEP_COUNT - 1] {
            let interval = if step == 2 { &whole } else { &half };
            pitch = (pitch + interval.pitch_difference()).rem_euclid(PITCH_CLASS_COUNT as i32);
            letter = step_letter(letter, interval.letter_difference() as i32);
            spelling.push(root.respelled_as(spell(pitch as u8, letter), root.octave())?);
        }

        Ok(Self {
            name: format!("{} {}", root.name(), quality),
            root_note: root.clone(),
            quality: quality.to_string(),
            steps,
            spelling,
        })
    }

    /// Display name, e.g. "C major".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The note the mode was built on; always the first degree.
    pub fn root_note(&self) -> &Note {
        &self.root_note
    }

    /// Step pattern name, e.g. "dorian".
    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn steps(&self) -> &StepPattern {
        &self.steps
    }

    /// The seven degrees in order.
    pub fn spelling(&self) -> &[Note] {
        &self.spelling
    }

    /// Degree by zero-based index (0 = root).
    pub fn degree(&self, index: usize) -> Option<&Note> {
        self.spelling.get(index)
    }

    /// Degree names in order.
    pub fn names(&self) -> Vec<&str> {
        self.spelling.iter().map(Note::name).collect()
    }

    /// Every degree respelled toward `prefer`, for sharp-only or flat-only
    /// display.
    ///
    /// The result is not a [`Mode`]: two degrees may share a letter and the
    /// first degree may be spelled differently from the root.
    pub fn respelled(&self, prefer: Accidental) -> RespelledScale {
        RespelledScale {
            mode: self.name.clone(),
            prefer,
            notes: self
                .spelling
                .iter()
                .map(|note| note.enharmonic(Some(prefer)))
                .collect(),
        }
    }
}

/// The degrees of a [`Mode`] rendered with a single accidental kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RespelledScale {
    mode: String,
    prefer: Accidental,
    notes: Vec<Note>,
}

impl RespelledScale {
    /// Name of the mode the degrees came from, e.g. "C# major".
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn prefer(&self) -> Accidental {
        self.prefer
    }

    /// The respelled degrees in order, same pitches as the mode's.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn names(&self) -> Vec<&str> {
        self.notes.iter().map(Note::name).collect()
    }
}
