//! Property tests across notes, intervals, modes, and meter.
//!
//! These exercise the public API end to end: spelling round trips, respelling
//! stability, scale construction, and the JSON shape of output values.

use diatone_theory::note::{minimal_accidental_count, LETTER_COUNT, PITCH_CLASS_COUNT};
use diatone_theory::{
    Accidental, Interval, IntervalBase, Mode, ModeTable, Note, Quality, Tempo, TheoryError,
    TimeSignature,
};
use pretty_assertions::assert_eq;

// ============================================================================
// Absolute Pitch Tests
// ============================================================================

/// Every absolute pitch in the piano range survives naming.
#[test]
fn test_hard_pitch_round_trip() {
    for octave in 0..=8 {
        for pitch in 0..12 {
            let hard_pitch = octave * 12 + pitch;
            let note = Note::from_hard_pitch(hard_pitch, Accidental::Flat).unwrap();
            assert_eq!(note.hard_pitch(), hard_pitch);
            assert_eq!(
                Note::builder()
                    .octave(note.octave())
                    .named(note.name())
                    .unwrap()
                    .hard_pitch(),
                hard_pitch,
                "{} should parse back to {}",
                note.key_id(),
                hard_pitch
            );
        }
    }
}

/// Frequencies of named notes map back to the same note.
#[test]
fn test_frequency_round_trip() {
    for hard_pitch in 12..108 {
        let note = Note::from_hard_pitch(hard_pitch, Accidental::Sharp).unwrap();
        let back = Note::from_frequency(note.frequency(), Accidental::Sharp).unwrap();
        assert_eq!(back, note);
    }
}

#[test]
fn test_concert_a() {
    let a4 = Note::from_frequency(440.0, Accidental::Sharp).unwrap();
    assert_eq!(a4.name(), "A");
    assert_eq!(a4.octave(), 4);
}

// ============================================================================
// Respelling Tests
// ============================================================================

/// Respelling with no preference always reaches the fewest accidentals.
#[test]
fn test_respell_is_minimal() {
    for pitch in 0..PITCH_CLASS_COUNT {
        for letter in 0..LETTER_COUNT {
            let note = Note::from_pitch_letter(pitch, letter).unwrap();
            let respelled = note.enharmonic(None);
            let minimum = minimal_accidental_count(pitch);
            if note.accidental_count() == 1 && minimum == 0 {
                // E#, Fb, B#, Cb move to the neighbouring natural.
                assert_eq!(respelled.accidental_count(), 0, "{}", note.name());
            } else if note.accidental_count() != 1 {
                assert_eq!(respelled.accidental_count(), minimum, "{}", note.name());
            }
            assert_eq!(respelled.pitch(), pitch);
        }
    }
}

/// Respelling toward a preference is stable once applied.
#[test]
fn test_respell_preference_is_idempotent() {
    for pitch in 0..PITCH_CLASS_COUNT {
        for letter in 0..LETTER_COUNT {
            let note = Note::from_pitch_letter(pitch, letter).unwrap();
            for prefer in [Accidental::Sharp, Accidental::Flat] {
                let once = note.enharmonic(Some(prefer));
                let twice = once.enharmonic(Some(prefer));
                assert_eq!(twice, once, "{} toward {}", note.name(), prefer);
            }
        }
    }
}

/// Respelling never changes what sounds.
#[test]
fn test_respell_preserves_hard_pitch() {
    for name in ["C##", "Fbb", "B#", "Cb", "E###", "Gbbb", "Ab", "D#"] {
        let note = Note::builder().octave(3).named(name).unwrap();
        for prefer in [None, Some(Accidental::Sharp), Some(Accidental::Flat)] {
            assert_eq!(note.enharmonic(prefer).hard_pitch(), note.hard_pitch());
        }
    }
}

// ============================================================================
// Interval Tests
// ============================================================================

/// Stacking the interval steps of a major scale reaches the octave.
#[test]
fn test_transpose_by_scale_steps() {
    let whole = Interval::major_second().unwrap();
    let half = Interval::minor_second().unwrap();
    let mut note = Note::new("G").unwrap();
    let mut names = vec![note.name().to_string()];
    for step in [&whole, &whole, &half, &whole, &whole, &whole, &half] {
        note = note.transpose(step).unwrap();
        names.push(note.name().to_string());
    }
    assert_eq!(names, ["G", "A", "B", "C", "D", "E", "F#", "G"]);
    assert_eq!(note.key_id(), "G5");
}

#[test]
fn test_transpose_downward() {
    let down_fourth = Interval::new(Quality::Perfect, IntervalBase::Fifth, -1).unwrap();
    let c = Note::new("C").unwrap();
    let g = c.transpose(&down_fourth).unwrap();
    assert_eq!(g.key_id(), "G3");
}

// ============================================================================
// Mode Tests
// ============================================================================

#[test]
fn test_major_and_minor_on_c() {
    assert_eq!(
        Mode::from_name("C", "major").unwrap().names(),
        ["C", "D", "E", "F", "G", "A", "B"]
    );
    assert_eq!(
        Mode::from_name("C", "minor").unwrap().names(),
        ["C", "D", "Eb", "F", "G", "Ab", "Bb"]
    );
}

/// Major and ionian, minor and aeolian are the same pattern.
#[test]
fn test_aliases_agree() {
    for root in ["C", "Db", "F#", "A"] {
        let major = Mode::from_name(root, "major").unwrap();
        let ionian = Mode::from_name(root, "ionian").unwrap();
        assert_eq!(major.names(), ionian.names());

        let minor = Mode::from_name(root, "minor").unwrap();
        let aeolian = Mode::from_name(root, "aeolian").unwrap();
        assert_eq!(minor.names(), aeolian.names());
    }
}

#[test]
fn test_custom_table() {
    let mut table = ModeTable::new();
    table.insert("whole_step_heavy", &[2, 2, 2, 2, 1, 2, 1]).unwrap();
    let root = Note::new("C").unwrap();
    let mode = Mode::with_table(&root, "whole_step_heavy", &table).unwrap();
    assert_eq!(mode.names(), ["C", "D", "E", "F#", "G#", "A", "B"]);

    assert!(matches!(
        Mode::new(&root, "whole_step_heavy"),
        Err(TheoryError::UnknownMode { .. })
    ));
}

// ============================================================================
// Meter Tests
// ============================================================================

#[test]
fn test_meter_values() {
    let meter = TimeSignature::new(4, 4, Some(Tempo::new(120.0).unwrap())).unwrap();
    assert_eq!(meter.beat().name(), "quarter");
    assert_eq!(meter.measure_len(), 512.0);
    assert_eq!(meter.tempo().map(|t| t.beat_len_ms()), Some(500.0));
}

// ============================================================================
// Serialization Tests
// ============================================================================

#[test]
fn test_interval_json() {
    let interval = Interval::parse("aug2", "4th", 1).unwrap();
    let json = serde_json::to_value(interval).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "quality": "aug2",
            "base": "4th",
            "letter_difference": 3,
            "pitch_difference": 19,
            "displace": 1
        })
    );
}

#[test]
fn test_mode_json() {
    let mode = Mode::from_name("D", "major").unwrap();
    let json = serde_json::to_value(&mode).unwrap();
    assert_eq!(json["name"], "D major");
    assert_eq!(json["quality"], "major");
    assert_eq!(json["root_note"]["name"], "D");
    assert_eq!(json["steps"], serde_json::json!([2, 2, 1, 2, 2, 2, 1]));
    let names: Vec<&str> = json["spelling"]
        .as_array()
        .unwrap()
        .iter()
        .map(|note| note["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["D", "E", "F#", "G", "A", "B", "C#"]);
}

#[test]
fn test_error_codes_reach_callers() {
    let err = Note::new("X#").unwrap_err();
    assert_eq!(err.code(), "THEORY_001");
    assert_eq!(err.category(), "name");

    let err = Interval::parse("maj", "5th", 0).unwrap_err();
    assert_eq!(err.code(), "THEORY_012");
}
