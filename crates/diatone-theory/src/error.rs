//! Error types for note, interval, mode, and meter construction.

use thiserror::Error;

/// Errors produced while constructing theory values.
///
/// Every constructor in this crate validates its inputs up front and returns
/// one of these instead of a partially-built value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TheoryError {
    #[error("invalid note name '{name}' (expected a letter A-G followed by only '#' or only 'b')")]
    NameFormat { name: String },
    #[error("pitch class {pitch} out of range (expected 0-11)")]
    PitchClassOutOfRange { pitch: i64 },
    #[error("letter index {letter} out of range (expected 0-6)")]
    LetterOutOfRange { letter: i64 },
    #[error("rhythm index {index} out of range (expected 0-10)")]
    RhythmOutOfRange { index: i64 },
    #[error("frequency {hz} Hz is not a positive finite number")]
    InvalidFrequency { hz: f64 },
    #[error("unknown interval quality '{quality}'")]
    UnknownQuality { quality: String },
    #[error("unknown interval base '{base}' (expected uni, 2nd, 3rd, 4th, 5th, 6th, or 7th)")]
    UnknownIntervalBase { base: String },
    #[error("quality '{quality}' does not apply to a {base}")]
    QualityNotApplicable { quality: String, base: String },
    #[error("unknown mode '{name}'")]
    UnknownMode { name: String },
    #[error("invalid step pattern '{name}': {message}")]
    InvalidStepPattern { name: String, message: String },
    #[error("tempo {bpm} bpm is not a positive finite number")]
    InvalidTempo { bpm: f64 },
    #[error("invalid time signature {top}/{bottom}: {message}")]
    InvalidTimeSignature {
        top: u32,
        bottom: u32,
        message: String,
    },
    #[error("octave {octave} is too far from zero to place pitch class {pitch}")]
    OctaveOutOfRange { octave: i32, pitch: u8 },
    #[error("absolute pitch {hard_pitch} out of range (expected a 32-bit integer)")]
    HardPitchOutOfRange { hard_pitch: i64 },
    #[error("interval {quality} {base} displaced {displace} octaves does not fit in 32 bits of semitones")]
    IntervalOutOfRange {
        quality: String,
        base: String,
        displace: i32,
    },
}

impl TheoryError {
    /// Returns the stable error code (e.g., "THEORY_001").
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::NameFormat { .. } => "THEORY_001",
            TheoryError::PitchClassOutOfRange { .. } => "THEORY_002",
            TheoryError::LetterOutOfRange { .. } => "THEORY_003",
            TheoryError::RhythmOutOfRange { .. } => "THEORY_004",
            TheoryError::InvalidFrequency { .. } => "THEORY_005",
            TheoryError::UnknownQuality { .. } => "THEORY_006",
            TheoryError::UnknownIntervalBase { .. } => "THEORY_007",
            TheoryError::UnknownMode { .. } => "THEORY_008",
            TheoryError::InvalidStepPattern { .. } => "THEORY_009",
            TheoryError::InvalidTempo { .. } => "THEORY_010",
            TheoryError::InvalidTimeSignature { .. } => "THEORY_011",
            TheoryError::QualityNotApplicable { .. } => "THEORY_012",
            TheoryError::OctaveOutOfRange { .. } => "THEORY_013",
            TheoryError::HardPitchOutOfRange { .. } => "THEORY_014",
            TheoryError::IntervalOutOfRange { .. } => "THEORY_015",
        }
    }

    /// Returns the error family, used to group codes in diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            TheoryError::NameFormat { .. } => "name",
            TheoryError::PitchClassOutOfRange { .. }
            | TheoryError::LetterOutOfRange { .. }
            | TheoryError::RhythmOutOfRange { .. }
            | TheoryError::InvalidFrequency { .. }
            | TheoryError::OctaveOutOfRange { .. }
            | TheoryError::HardPitchOutOfRange { .. }
            | TheoryError::IntervalOutOfRange { .. } => "range",
            TheoryError::UnknownQuality { .. }
            | TheoryError::UnknownIntervalBase { .. }
            | TheoryError::QualityNotApplicable { .. } => "quality",
            TheoryError::UnknownMode { .. } | TheoryError::InvalidStepPattern { .. } => "mode",
            TheoryError::InvalidTempo { .. } | TheoryError::InvalidTimeSignature { .. } => {
                "meter"
            }
        }
    }
}

/// Result alias used throughout the crate.
pub type TheoryResult<T> = Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            TheoryError::NameFormat { name: "H".into() },
            TheoryError::PitchClassOutOfRange { pitch: 12 },
            TheoryError::LetterOutOfRange { letter: 7 },
            TheoryError::RhythmOutOfRange { index: 11 },
            TheoryError::InvalidFrequency { hz: -1.0 },
            TheoryError::UnknownQuality { quality: "big".into() },
            TheoryError::UnknownIntervalBase { base: "9th".into() },
            TheoryError::QualityNotApplicable {
                quality: "maj".into(),
                base: "5th".into(),
            },
            TheoryError::UnknownMode { name: "bebop".into() },
            TheoryError::InvalidStepPattern {
                name: "x".into(),
                message: "empty".into(),
            },
            TheoryError::InvalidTempo { bpm: 0.0 },
            TheoryError::InvalidTimeSignature {
                top: 4,
                bottom: 3,
                message: "bottom must be a power of two".into(),
            },
            TheoryError::OctaveOutOfRange {
                octave: i32::MAX,
                pitch: 0,
            },
            TheoryError::HardPitchOutOfRange {
                hard_pitch: i64::from(i32::MAX) + 1,
            },
            TheoryError::IntervalOutOfRange {
                quality: "maj".into(),
                base: "3rd".into(),
                displace: i32::MAX,
            },
        ];

        let mut codes: Vec<&str> = errors.iter().map(TheoryError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_name_format_message() {
        let err = TheoryError::NameFormat { name: "C#b".into() };
        assert!(err.to_string().contains("'C#b'"));
        assert_eq!(err.category(), "name");
    }

    #[test]
    fn test_overflow_errors_are_range_family() {
        let err = TheoryError::OctaveOutOfRange {
            octave: i32::MAX,
            pitch: 0,
        };
        assert_eq!(err.code(), "THEORY_013");
        assert_eq!(err.category(), "range");
        let err = TheoryError::IntervalOutOfRange {
            quality: "maj".into(),
            base: "3rd".into(),
            displace: -200_000_000,
        };
        assert_eq!(err.category(), "range");
    }
}
