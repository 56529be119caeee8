//! Intervals described by quality, base category, and octave displacement.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{TheoryError, TheoryResult};

/// Interval quality, parsed once from strings like "maj" or "aug2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Quality {
    Perfect,
    Minor,
    Major,
    /// Raised by the given number of semitones (at least 1).
    Augmented(u32),
    /// Lowered by the given number of semitones (at least 1).
    Diminished(u32),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Perfect => f.write_str("per"),
            Quality::Minor => f.write_str("min"),
            Quality::Major => f.write_str("maj"),
            Quality::Augmented(1) => f.write_str("aug"),
            Quality::Augmented(n) => write!(f, "aug{}", n),
            Quality::Diminished(1) => f.write_str("dim"),
            Quality::Diminished(n) => write!(f, "dim{}", n),
        }
    }
}

impl From<Quality> for String {
    fn from(quality: Quality) -> Self {
        quality.to_string()
    }
}

impl FromStr for Quality {
    type Err = TheoryError;

    /// Parses `per`, `min`, `maj`, `aug`, `aug<N>`, `dim`, or `dim<N>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || TheoryError::UnknownQuality {
            quality: s.to_string(),
        };
        match s {
            "per" => return Ok(Quality::Perfect),
            "min" => return Ok(Quality::Minor),
            "maj" => return Ok(Quality::Major),
            _ => {}
        }

        let (kind, amount): (fn(u32) -> Quality, &str) = if let Some(rest) = s.strip_prefix("aug")
        {
            (Quality::Augmented, rest)
        } else if let Some(rest) = s.strip_prefix("dim") {
            (Quality::Diminished, rest)
        } else {
            return Err(unknown());
        };

        if amount.is_empty() {
            return Ok(kind(1));
        }
        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unknown());
        }
        match amount.parse::<u32>() {
            Ok(n) if n > 0 => Ok(kind(n)),
            _ => Err(unknown()),
        }
    }
}

/// Interval category, independent of quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntervalBase {
    #[serde(rename = "uni")]
    Unison,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
    #[serde(rename = "4th")]
    Fourth,
    #[serde(rename = "5th")]
    Fifth,
    #[serde(rename = "6th")]
    Sixth,
    #[serde(rename = "7th")]
    Seventh,
}

impl IntervalBase {
    /// All categories in letter-distance order.
    pub const ALL: [IntervalBase; 7] = [
        IntervalBase::Unison,
        IntervalBase::Second,
        IntervalBase::Third,
        IntervalBase::Fourth,
        IntervalBase::Fifth,
        IntervalBase::Sixth,
        IntervalBase::Seventh,
    ];

    /// Returns the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalBase::Unison => "uni",
            IntervalBase::Second => "2nd",
            IntervalBase::Third => "3rd",
            IntervalBase::Fourth => "4th",
            IntervalBase::Fifth => "5th",
            IntervalBase::Sixth => "6th",
            IntervalBase::Seventh => "7th",
        }
    }

    /// Semitone offsets: one for perfect categories, `[minor, major]` otherwise.
    pub fn offsets(&self) -> &'static [i32] {
        match self {
            IntervalBase::Unison => &[0],
            IntervalBase::Second => &[1, 2],
            IntervalBase::Third => &[3, 4],
            IntervalBase::Fourth => &[5],
            IntervalBase::Fifth => &[7],
            IntervalBase::Sixth => &[8, 9],
            IntervalBase::Seventh => &[10, 11],
        }
    }

    /// Whether the category has minor and major forms.
    pub fn has_major_variant(&self) -> bool {
        self.offsets().len() == 2
    }

    /// Number of letters spanned (0 for a unison, 6 for a seventh).
    pub fn letter_difference(&self) -> u8 {
        *self as u8
    }

    fn smaller_offset(&self) -> i32 {
        self.offsets()[0]
    }

    fn larger_offset(&self) -> i32 {
        self.offsets()[self.offsets().len() - 1]
    }
}

impl fmt::Display for IntervalBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntervalBase {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalBase::ALL
            .iter()
            .copied()
            .find(|base| base.as_str() == s)
            .ok_or_else(|| TheoryError::UnknownIntervalBase {
                base: s.to_string(),
            })
    }
}

/// A directed interval.
///
/// `pitch_difference` and `letter_difference` are derived once at
/// construction from the quality, base, and displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    quality: Quality,
    base: IntervalBase,
    letter_difference: u8,
    pitch_difference: i32,
    displace: i32,
}

impl Interval {
    /// Build an interval, rejecting qualities that do not fit the category.
    ///
    /// # Errors
    ///
    /// Returns [`TheoryError::QualityNotApplicable`] for `maj`/`min` on a
    /// perfect category or `per` on the others, and
    /// [`TheoryError::IntervalOutOfRange`] when the semitone distance does
    /// not fit in an `i32`.
    ///
    /// # Examples
    /// ```
    /// use diatone_theory::interval::{Interval, IntervalBase, Quality};
    ///
    /// let major_third = Interval::new(Quality::Major, IntervalBase::Third, 0).unwrap();
    /// assert_eq!(major_third.pitch_difference(), 4);
    /// assert_eq!(major_third.letter_difference(), 2);
    ///
    /// let compound = Interval::new(Quality::Augmented(1), IntervalBase::Fourth, 1).unwrap();
    /// assert_eq!(compound.pitch_difference(), 18);
    ///
    /// assert!(Interval::new(Quality::Major, IntervalBase::Fifth, 0).is_err());
    /// ```
    pub fn new(quality: Quality, base: IntervalBase, displace: i32) -> TheoryResult<Self> {
        let not_applicable = || TheoryError::QualityNotApplicable {
            quality: quality.to_string(),
            base: base.to_string(),
        };

        let base_change = match quality {
            Quality::Perfect if base.has_major_variant() => return Err(not_applicable()),
            Quality::Minor | Quality::Major if !base.has_major_variant() => {
                return Err(not_applicable())
            }
            Quality::Augmented(n) | Quality::Diminished(n) if n == 0 => {
                return Err(TheoryError::UnknownQuality {
                    quality: quality.to_string(),
                })
            }
            Quality::Augmented(n) => i64::from(base.larger_offset()) + i64::from(n),
            Quality::Diminished(n) => i64::from(base.smaller_offset()) - i64::from(n),
            Quality::Perfect | Quality::Minor => i64::from(base.smaller_offset()),
            Quality::Major => i64::from(base.larger_offset()),
        };

        let pitch_difference = base_change + 12 * i64::from(displace);
        let pitch_difference =
            i32::try_from(pitch_difference).map_err(|_| TheoryError::IntervalOutOfRange {
                quality: quality.to_string(),
                base: base.to_string(),
                displace,
            })?;

        Ok(Self {
            quality,
            base,
            letter_difference: base.letter_difference(),
            pitch_difference,
            displace,
        })
    }

    /// Build an interval from its string forms (e.g. `"dim2"`, `"7th"`).
    pub fn parse(quality: &str, base: &str, displace: i32) -> TheoryResult<Self> {
        Self::new(quality.parse()?, base.parse()?, displace)
    }

    /// The whole step used by scale generation.
    pub fn major_second() -> TheoryResult<Self> {
        Self::new(Quality::Major, IntervalBase::Second, 0)
    }

    /// The half step used by scale generation.
    pub fn minor_second() -> TheoryResult<Self> {
        Self::new(Quality::Minor, IntervalBase::Second, 0)
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn base(&self) -> IntervalBase {
        self.base
    }

    /// Octave displacement.
    pub fn displace(&self) -> i32 {
        self.displace
    }

    /// Signed distance in semitones, including displacement.
    pub fn pitch_difference(&self) -> i32 {
        self.pitch_difference
    }

    /// Distance in letters (0-6); displacement does not affect it.
    pub fn letter_difference(&self) -> u8 {
        self.letter_difference
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quality, self.base)?;
        if self.displace != 0 {
            write!(f, " {:+} oct", self.displace)?;
        }
        Ok(())
    }
}
