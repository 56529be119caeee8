//! Note name spelling.
//!
//! Stateless conversions between textual note names and (pitch class,
//! letter) pairs, plus enharmonic respelling. A name is a letter `A`-`G`
//! followed by any number of `#` or any number of `b`, never both.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::constants::{
    is_natural_pitch_class, letter_index, natural_pitch, LETTER_COUNT, LETTER_NAMES,
    NATURAL_PITCHES, PITCH_CLASS_COUNT,
};
use crate::error::{TheoryError, TheoryResult};

/// Grammar for a note name without octave.
const NOTE_NAME_PATTERN: &str = r"^[A-Ga-g](#+|b+)?$";

/// Compiled note name regex (lazily initialized).
static NOTE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn note_name_regex() -> &'static Regex {
    NOTE_NAME_REGEX.get_or_init(|| Regex::new(NOTE_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Direction of an accidental, also used as a spelling preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    /// Raises by a semitone (`#`).
    Sharp,
    /// Lowers by a semitone (`b`).
    Flat,
}

impl Accidental {
    /// Returns the character written in note names.
    pub fn symbol(&self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }

    /// Returns the accidental as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accidental::Sharp => "sharp",
            Accidental::Flat => "flat",
        }
    }

    /// Letter direction that cancels this accidental (up for sharps).
    fn letter_step(&self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn of_offset(offset: i32) -> Option<Self> {
        match offset.signum() {
            1 => Some(Accidental::Sharp),
            -1 => Some(Accidental::Flat),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Accidental {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sharp" | "#" => Ok(Accidental::Sharp),
            "flat" | "b" => Ok(Accidental::Flat),
            _ => Err(format!("unknown accidental: {} (expected sharp or flat)", s)),
        }
    }
}

/// A spelled pitch class: the name together with the letter and pitch class
/// it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Spelling {
    name: String,
    letter: u8,
    pitch: u8,
    offset: i32,
}

impl Spelling {
    /// The note name, normalized to an upper-case letter (e.g. "Eb").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Diatonic letter index (0 = C .. 6 = B).
    pub fn letter(&self) -> u8 {
        self.letter
    }

    /// The letter as a character.
    pub fn letter_name(&self) -> char {
        LETTER_NAMES[self.letter as usize]
    }

    /// Pitch class (0-11).
    pub fn pitch(&self) -> u8 {
        self.pitch
    }

    /// Signed accidental count: sharps positive, flats negative.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Number of accidental characters in the name.
    pub fn accidental_count(&self) -> u32 {
        self.offset.unsigned_abs()
    }

    /// The accidental in the name, if any.
    pub fn accidental(&self) -> Option<Accidental> {
        Accidental::of_offset(self.offset)
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parse a note name such as "C", "f#", or "Bbb".
///
/// The letter is case-insensitive; the accidentals must be all `#` or all
/// `b`. The pitch class wraps into 0-11, so "B#" is pitch class 0.
///
/// # Examples
/// ```
/// use diatone_theory::note::parse_note_name;
///
/// let spelling = parse_note_name("eb").unwrap();
/// assert_eq!(spelling.name(), "Eb");
/// assert_eq!(spelling.letter(), 2);
/// assert_eq!(spelling.pitch(), 3);
///
/// assert!(parse_note_name("C#b").is_err());
/// ```
pub fn parse_note_name(name: &str) -> TheoryResult<Spelling> {
    let invalid = || TheoryError::NameFormat {
        name: name.to_string(),
    };
    if !note_name_regex().is_match(name) {
        return Err(invalid());
    }

    let mut chars = name.chars();
    let letter = chars.next().and_then(letter_index).ok_or_else(invalid)?;
    let accidentals = chars.as_str();
    let count = accidentals.len() as i32;
    let offset = if accidentals.starts_with('#') {
        count
    } else {
        -count
    };

    Ok(from_parts(letter, offset))
}

/// Name a pitch class using a specific letter.
///
/// The distance from the natural letter is folded into -5..=6 semitones, so
/// the name never carries more than six accidentals.
///
/// # Examples
/// ```
/// use diatone_theory::note::spell_pitch_letter;
///
/// assert_eq!(spell_pitch_letter(3, 2).unwrap().name(), "Eb");
/// assert_eq!(spell_pitch_letter(3, 1).unwrap().name(), "D#");
/// assert_eq!(spell_pitch_letter(0, 6).unwrap().name(), "B#");
/// assert!(spell_pitch_letter(12, 0).is_err());
/// ```
pub fn spell_pitch_letter(pitch: u8, letter: u8) -> TheoryResult<Spelling> {
    if pitch >= PITCH_CLASS_COUNT {
        return Err(TheoryError::PitchClassOutOfRange {
            pitch: pitch as i64,
        });
    }
    if letter >= LETTER_COUNT {
        return Err(TheoryError::LetterOutOfRange {
            letter: letter as i64,
        });
    }
    Ok(spell(pitch, letter))
}

/// Name an absolute pitch, returning the spelling and its octave.
///
/// Natural pitch classes get a bare letter. The other five get the lower
/// letter with `#` or the upper letter with `b`, per `prefer`.
///
/// # Examples
/// ```
/// use diatone_theory::note::{spell_hard_pitch, Accidental};
///
/// let (spelling, octave) = spell_hard_pitch(49, Accidental::Sharp);
/// assert_eq!((spelling.name(), octave), ("C#", 4));
///
/// let (spelling, octave) = spell_hard_pitch(49, Accidental::Flat);
/// assert_eq!((spelling.name(), octave), ("Db", 4));
/// ```
pub fn spell_hard_pitch(hard_pitch: i32, prefer: Accidental) -> (Spelling, i32) {
    let octave = hard_pitch.div_euclid(PITCH_CLASS_COUNT as i32);
    let pitch = hard_pitch.rem_euclid(PITCH_CLASS_COUNT as i32) as u8;

    // Highest natural at or below the pitch; C (0) always qualifies.
    let below = NATURAL_PITCHES
        .iter()
        .rposition(|&p| p <= pitch)
        .unwrap_or(0) as u8;

    let spelling = if natural_pitch(below) == pitch {
        from_parts(below, 0)
    } else {
        match prefer {
            Accidental::Sharp => from_parts(below, 1),
            Accidental::Flat => from_parts(step_letter(below, 1), -1),
        }
    };
    (spelling, octave)
}

/// Respell a name as another spelling of the same pitch class.
///
/// - Naturals are returned unchanged.
/// - A single accidental moves to the neighbouring letter unless it already
///   matches `prefer`.
/// - Two or more accidentals walk the letter away from the accidental until
///   the spelling has its minimum accidental count: 0 for natural pitch
///   classes, 1 otherwise. A one-accidental result that disagrees with
///   `prefer` is respelled once more.
///
/// # Examples
/// ```
/// use diatone_theory::note::{parse_note_name, respell, Accidental};
///
/// let c_sharp = parse_note_name("C#").unwrap();
/// assert_eq!(respell(&c_sharp, None).name(), "Db");
/// assert_eq!(respell(&c_sharp, Some(Accidental::Sharp)).name(), "C#");
///
/// let f_double_sharp = parse_note_name("F##").unwrap();
/// assert_eq!(respell(&f_double_sharp, None).name(), "G");
/// ```
pub fn respell(spelling: &Spelling, prefer: Option<Accidental>) -> Spelling {
    let Some(current) = spelling.accidental() else {
        return spelling.clone();
    };

    if spelling.accidental_count() == 1 {
        if prefer == Some(current) {
            return spelling.clone();
        }
        return spell(
            spelling.pitch,
            step_letter(spelling.letter, current.letter_step()),
        );
    }

    let minimum = minimal_accidental_count(spelling.pitch);
    let mut letter = spelling.letter;
    let mut reduced = spelling.clone();
    // Seven steps visit every letter, and one of them is minimal.
    for _ in 0..LETTER_COUNT {
        letter = step_letter(letter, current.letter_step());
        let candidate = spell(spelling.pitch, letter);
        if candidate.accidental_count() <= minimum {
            reduced = candidate;
            break;
        }
    }

    match (reduced.accidental(), prefer) {
        (Some(found), Some(wanted)) if found != wanted => respell(&reduced, prefer),
        _ => reduced,
    }
}

/// Fewest accidentals any spelling of this pitch class can have.
pub fn minimal_accidental_count(pitch: u8) -> u32 {
    if is_natural_pitch_class(pitch) {
        0
    } else {
        1
    }
}

/// Spell `pitch` on `letter`; both must already be in range.
pub(crate) fn spell(pitch: u8, letter: u8) -> Spelling {
    // Fold into -5..=6 so a tritone above the letter is spelled with sharps.
    let raw = pitch as i32 - natural_pitch(letter) as i32;
    let offset = (raw + 5).rem_euclid(PITCH_CLASS_COUNT as i32) - 5;
    from_parts(letter, offset)
}

/// Move a letter index by `delta` steps, wrapping B to C.
pub(crate) fn step_letter(letter: u8, delta: i32) -> u8 {
    (letter as i32 + delta).rem_euclid(LETTER_COUNT as i32) as u8
}

fn from_parts(letter: u8, offset: i32) -> Spelling {
    let pitch = (natural_pitch(letter) as i32 + offset).rem_euclid(PITCH_CLASS_COUNT as i32) as u8;
    let count = offset.unsigned_abs() as usize;
    let mut name = String::with_capacity(1 + count);
    name.push(LETTER_NAMES[letter as usize]);
    if let Some(accidental) = Accidental::of_offset(offset) {
        name.extend(std::iter::repeat(accidental.symbol()).take(count));
    }

    Spelling {
        name,
        letter,
        pitch,
        offset,
    }
}
