//! Rhythmic durations.
//!
//! Durations are measured in ticks, with a double whole note at 1024 and a
//! 512th note at 1. Dots and triplets produce fractional lengths, so lengths
//! are `f64`.

use serde::Serialize;

use crate::error::{TheoryError, TheoryResult};

/// Rhythm table index used when a caller does not supply one (quarter note).
pub const DEFAULT_RHYTHM_INDEX: u8 = 3;

/// Base note values, longest first. The discriminant is the table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum RhythmValue {
    DoubleWhole = 0,
    Whole = 1,
    Half = 2,
    Quarter = 3,
    Eighth = 4,
    Sixteenth = 5,
    ThirtySecond = 6,
    SixtyFourth = 7,
    HundredTwentyEighth = 8,
    TwoHundredFiftySixth = 9,
    FiveHundredTwelfth = 10,
}

impl RhythmValue {
    /// All values in table order.
    pub const ALL: [RhythmValue; 11] = [
        RhythmValue::DoubleWhole,
        RhythmValue::Whole,
        RhythmValue::Half,
        RhythmValue::Quarter,
        RhythmValue::Eighth,
        RhythmValue::Sixteenth,
        RhythmValue::ThirtySecond,
        RhythmValue::SixtyFourth,
        RhythmValue::HundredTwentyEighth,
        RhythmValue::TwoHundredFiftySixth,
        RhythmValue::FiveHundredTwelfth,
    ];

    /// Look up a value by table index (0-10).
    pub fn from_index(index: u8) -> TheoryResult<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(TheoryError::RhythmOutOfRange {
                index: index as i64,
            })
    }

    /// Table index (0-10).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Undotted length in ticks.
    pub fn base_length(&self) -> u32 {
        1024 >> self.index()
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            RhythmValue::DoubleWhole => "double whole",
            RhythmValue::Whole => "whole",
            RhythmValue::Half => "half",
            RhythmValue::Quarter => "quarter",
            RhythmValue::Eighth => "8th",
            RhythmValue::Sixteenth => "16th",
            RhythmValue::ThirtySecond => "32nd",
            RhythmValue::SixtyFourth => "64th",
            RhythmValue::HundredTwentyEighth => "128th",
            RhythmValue::TwoHundredFiftySixth => "256th",
            RhythmValue::FiveHundredTwelfth => "512th",
        }
    }
}

impl From<RhythmValue> for u8 {
    fn from(value: RhythmValue) -> Self {
        value.index()
    }
}

/// A resolved duration: base value plus its dotted/triplet length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rhythm {
    value: RhythmValue,
    length: f64,
    name: &'static str,
}

impl Rhythm {
    /// Resolve a duration. Dots are applied first, then the triplet scaling.
    ///
    /// # Examples
    /// ```
    /// use diatone_theory::rhythm::{Rhythm, RhythmValue};
    ///
    /// let dotted_quarter = Rhythm::new(RhythmValue::Quarter, 1, false);
    /// assert_eq!(dotted_quarter.length(), 192.0);
    ///
    /// let triplet_eighth = Rhythm::new(RhythmValue::Eighth, 0, true);
    /// assert!((triplet_eighth.length() - 64.0 * 2.0 / 3.0).abs() < 1e-9);
    /// ```
    pub fn new(value: RhythmValue, dots: u32, triplet: bool) -> Self {
        let mut length = dotted_length(value.base_length() as f64, dots);
        if triplet {
            length = triplet_length(length);
        }
        Self {
            value,
            length,
            name: value.name(),
        }
    }

    /// Resolve a duration from a table index (0-10).
    pub fn from_index(index: u8, dots: u32, triplet: bool) -> TheoryResult<Self> {
        Ok(Self::new(RhythmValue::from_index(index)?, dots, triplet))
    }

    /// The base note value.
    pub fn value(&self) -> RhythmValue {
        self.value
    }

    /// Length in ticks after dots and triplet scaling.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Name of the base note value.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Length of `base` extended by `dots` dots.
///
/// Each dot adds half of the previous addition, so the result approaches but
/// never reaches `2 * base`.
pub fn dotted_length(base: f64, dots: u32) -> f64 {
    let mut length = base;
    let mut addition = base;
    for _ in 0..dots {
        addition /= 2.0;
        if addition == 0.0 {
            break;
        }
        length += addition;
    }
    length
}

/// Length scaled to fit three in the space of two.
pub fn triplet_length(length: f64) -> f64 {
    length * 2.0 / 3.0
}
