use std::{thread, time::Duration};

use midir::MidiOutput;

use crate::{error::MidiError, notation::Pitch};

/// MIDI note-on status byte, channel 1.
const NOTE_ON: u8 = 0x90;
/// MIDI note-off status byte, channel 1.
const NOTE_OFF: u8 = 0x80;
/// Fixed note-on velocity.
const VELOCITY: u8 = 64;
/// How long each note sounds.
const NOTE_DURATION: Duration = Duration::from_millis(400);

/// Plays a pitch sequence on the first available MIDI output port.
///
/// Each pitch is sounded for a fixed duration at a fixed velocity, one after
/// the other. The call blocks until the last note has been released.
///
/// # Parameters
/// - `pitches`: The sequence to play, in order.
///
/// # Errors
/// Returns a [`MidiError`] if no output port exists, the connection fails,
/// or the device rejects a message.
pub fn play(pitches: &[Pitch]) -> Result<(), MidiError> {
    let output = MidiOutput::new("pitchlang")?;
    let ports = output.ports();
    let port = ports.first().ok_or(MidiError::NoOutputPort)?;

    let mut connection = output.connect(port, "pitchlang-play")
                               .map_err(|e| MidiError::Device(e.to_string()))?;

    for pitch in pitches {
        let key = pitch.key();

        connection.send(&[NOTE_ON, key, VELOCITY])?;
        thread::sleep(NOTE_DURATION);
        connection.send(&[NOTE_OFF, key, 0])?;
    }

    connection.close();
    Ok(())
}
