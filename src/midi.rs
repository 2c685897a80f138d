/// Playback of a pitch sequence on a MIDI output device.
///
/// Sends note-on/note-off pairs at a fixed tempo. This is a presentation
/// layer only: nothing it does feeds back into evaluation.
pub mod player;

/// Reading a recorded performance into a pitch sequence.
///
/// Extracts the ordered pitched notes of a standard MIDI file, which lets a
/// recorded performance double as program input.
pub mod reader;
