//! Absolute pitch and frequency conversion (12-tone equal temperament, A4 = 440 Hz).

use super::constants::{REFERENCE_FREQ, REFERENCE_HARD_PITCH};
use crate::error::{TheoryError, TheoryResult};

/// Convert a frequency in Hz to the nearest absolute pitch.
///
/// Uses `round(12 * log2(hz / 440)) + 57`, where 57 is A in octave 4.
///
/// # Examples
/// ```
/// use diatone_theory::note::frequency_to_hard_pitch;
///
/// assert_eq!(frequency_to_hard_pitch(440.0).unwrap(), 57);
/// assert_eq!(frequency_to_hard_pitch(261.626).unwrap(), 48);
/// assert!(frequency_to_hard_pitch(0.0).is_err());
/// ```
pub fn frequency_to_hard_pitch(hz: f64) -> TheoryResult<i32> {
    if !hz.is_finite() || hz <= 0.0 {
        return Err(TheoryError::InvalidFrequency { hz });
    }
    let semitones = 12.0 * (hz / REFERENCE_FREQ).log2();
    Ok((semitones.round() as i32).saturating_add(REFERENCE_HARD_PITCH))
}

/// Convert an absolute pitch to its equal-tempered frequency in Hz.
///
/// # Examples
/// ```
/// use diatone_theory::note::hard_pitch_to_frequency;
///
/// assert!((hard_pitch_to_frequency(57) - 440.0).abs() < 1e-9);
/// assert!((hard_pitch_to_frequency(45) - 220.0).abs() < 1e-9);
/// ```
pub fn hard_pitch_to_frequency(hard_pitch: i32) -> f64 {
    let semitones = f64::from(hard_pitch) - f64::from(REFERENCE_HARD_PITCH);
    REFERENCE_FREQ * 2.0_f64.powf(semitones / 12.0)
}
