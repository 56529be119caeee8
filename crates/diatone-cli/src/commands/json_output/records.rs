//! Output record types for commands whose result is more than one library value.

use diatone_theory::{Interval, Mode, Note, RespelledScale};
use serde::Serialize;

/// JSON result for `note`, `pitch`, and `freq`.
#[derive(Debug, Clone, Serialize)]
pub struct NoteRecord {
    /// The note itself
    pub note: Note,
    /// Name plus octave, e.g. "Db4"
    pub key_id: String,
    /// Equal-tempered frequency in Hz
    pub frequency: f64,
}

impl From<Note> for NoteRecord {
    fn from(note: Note) -> Self {
        Self {
            key_id: note.key_id(),
            frequency: note.frequency(),
            note,
        }
    }
}

/// JSON result for `respell`.
#[derive(Debug, Clone, Serialize)]
pub struct RespellRecord {
    /// The note as given
    pub from: Note,
    /// The respelled note
    pub to: Note,
}

/// JSON result for `scale`.
#[derive(Debug, Clone, Serialize)]
pub struct ScaleRecord {
    pub mode: Mode,
    /// Degrees rendered toward `--prefer`, when given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respelled: Option<RespelledScale>,
}

/// JSON result for `interval`.
#[derive(Debug, Clone, Serialize)]
pub struct IntervalRecord {
    pub interval: Interval,
    /// Starting note, when `--from` was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Note>,
    /// Starting note moved by the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Note>,
}
