//! Lookup tables shared by note spelling and frequency conversion.

/// Number of diatonic letters.
pub const LETTER_COUNT: u8 = 7;

/// Number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// Natural letters in diatonic order (index 0 = C).
pub const LETTER_NAMES: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Pitch class of each natural letter (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub const NATURAL_PITCHES: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Pitch classes that no natural letter reaches.
pub const NON_NATURAL_PITCH_CLASSES: [u8; 5] = [1, 3, 6, 8, 10];

/// Octave used when a caller does not supply one.
pub const DEFAULT_OCTAVE: i32 = 4;

/// Reference frequency for equal temperament (A4).
pub const REFERENCE_FREQ: f64 = 440.0;

/// Absolute pitch of the reference A (octave 4 * 12 + pitch class 9).
pub const REFERENCE_HARD_PITCH: i32 = 57;

/// Pitch class of a natural letter. `letter` must be in 0-6.
pub(crate) fn natural_pitch(letter: u8) -> u8 {
    NATURAL_PITCHES[letter as usize]
}

/// Returns true if a natural letter spells this pitch class without accidentals.
pub fn is_natural_pitch_class(pitch: u8) -> bool {
    NATURAL_PITCHES.contains(&pitch)
}

/// Letter index for a letter character, case-insensitive.
pub(crate) fn letter_index(letter: char) -> Option<u8> {
    let upper = letter.to_ascii_uppercase();
    LETTER_NAMES
        .iter()
        .position(|&c| c == upper)
        .map(|i| i as u8)
}
