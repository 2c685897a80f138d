use std::{fs, path::Path};

use midly::{MidiMessage, Smf, TrackEventKind};

use crate::{error::MidiError, notation::Pitch};

/// Reads a standard MIDI file into the ordered pitch sequence it plays.
///
/// Every note-on with a nonzero velocity contributes one pitch, in track
/// order; note-offs that carry a nonzero release velocity do too, matching
/// how the notes were originally captured. Timing, channels and every other
/// kind of event are ignored — only the pitches matter here, because the
/// sequence is about to be read as a program (or replayed as-is).
///
/// # Parameters
/// - `path`: Path of the performance file.
///
/// # Returns
/// The pitches in order of appearance.
///
/// # Errors
/// Returns a [`MidiError`] if the file cannot be read or is not a
/// well-formed standard MIDI file.
pub fn read_performance(path: &Path) -> Result<Vec<Pitch>, MidiError> {
    let bytes = fs::read(path)?;
    let smf = Smf::parse(&bytes)?;

    let mut pitches = Vec::new();

    for track in &smf.tracks {
        for event in track {
            let TrackEventKind::Midi { message, .. } = event.kind else {
                continue;
            };

            match message {
                MidiMessage::NoteOn { key, vel } | MidiMessage::NoteOff { key, vel }
                    if vel.as_int() != 0 =>
                {
                    pitches.push(Pitch::from_key(key.as_int()));
                },
                _ => {},
            }
        }
    }

    Ok(pitches)
}
