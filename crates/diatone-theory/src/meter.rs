//! Tempo and time signatures.

use serde::Serialize;

use crate::error::{TheoryError, TheoryResult};
use crate::rhythm::{Rhythm, RhythmValue};

/// Milliseconds in a minute.
const MS_PER_MINUTE: f64 = 60_000.0;

/// Beats per minute and the resulting beat length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tempo {
    bpm: f64,
    beat_len_ms: f64,
}

impl Tempo {
    /// # Examples
    /// ```
    /// use diatone_theory::meter::Tempo;
    ///
    /// assert_eq!(Tempo::new(120.0).unwrap().beat_len_ms(), 500.0);
    /// assert!(Tempo::new(0.0).is_err());
    /// ```
    pub fn new(bpm: f64) -> TheoryResult<Self> {
        if !bpm.is_finite() || bpm <= 0.0 {
            return Err(TheoryError::InvalidTempo { bpm });
        }
        Ok(Self {
            bpm,
            beat_len_ms: MS_PER_MINUTE / bpm,
        })
    }

    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Length of one beat in milliseconds.
    pub fn beat_len_ms(&self) -> f64 {
        self.beat_len_ms
    }
}

/// A time signature such as 3/4 or 6/8, with an optional tempo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSignature {
    top: u32,
    bottom: u32,
    beat: Rhythm,
    measure_len: f64,
    tempo: Option<Tempo>,
}

impl TimeSignature {
    /// Build a time signature.
    ///
    /// The beat is the rhythm whose base value matches `bottom` (4 is a
    /// quarter, 8 an eighth). `bottom` must be a power of two from 1 to 512.
    pub fn new(top: u32, bottom: u32, tempo: Option<Tempo>) -> TheoryResult<Self> {
        let invalid = |message: &str| TheoryError::InvalidTimeSignature {
            top,
            bottom,
            message: message.to_string(),
        };
        if top == 0 {
            return Err(invalid("top must be at least 1"));
        }
        if !bottom.is_power_of_two() || bottom > 512 {
            return Err(invalid("bottom must be a power of two from 1 to 512"));
        }

        // bottom 1 (whole) is table index 1; each halving moves one index down.
        let index = (bottom * 2).trailing_zeros() as u8;
        let beat = Rhythm::new(RhythmValue::from_index(index)?, 0, false);
        Ok(Self {
            top,
            bottom,
            beat,
            measure_len: beat.length() * top as f64,
            tempo,
        })
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn bottom(&self) -> u32 {
        self.bottom
    }

    /// Rhythm of one beat.
    pub fn beat(&self) -> Rhythm {
        self.beat
    }

    /// Length of one measure in ticks.
    pub fn measure_len(&self) -> f64 {
        self.measure_len
    }

    pub fn tempo(&self) -> Option<Tempo> {
        self.tempo
    }

    /// Length of one measure in milliseconds, when a tempo is set.
    pub fn measure_len_ms(&self) -> Option<f64> {
        self.tempo
            .map(|tempo| tempo.beat_len_ms() * self.top as f64)
    }
}
