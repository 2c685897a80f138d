#[derive(Debug)]
/// Represents all errors that can occur in the MIDI adapters.
pub enum MidiError {
    /// Reading the performance file from disk failed.
    Io(std::io::Error),
    /// The performance file is not a well-formed standard MIDI file.
    Format(midly::Error),
    /// No MIDI output port is available for playback.
    NoOutputPort,
    /// The output device rejected a connection or a message.
    Device(String),
}

impl std::fmt::Display for MidiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(inner) => write!(f, "Failed to read performance file: {inner}"),
            Self::Format(inner) => write!(f, "Malformed performance file: {inner}"),
            Self::NoOutputPort => write!(f, "No MIDI output port is available."),
            Self::Device(details) => write!(f, "MIDI output failed: {details}"),
        }
    }
}

impl std::error::Error for MidiError {}

impl From<std::io::Error> for MidiError {
    fn from(inner: std::io::Error) -> Self {
        Self::Io(inner)
    }
}

impl From<midly::Error> for MidiError {
    fn from(inner: midly::Error) -> Self {
        Self::Format(inner)
    }
}

impl From<midir::InitError> for MidiError {
    fn from(inner: midir::InitError) -> Self {
        Self::Device(inner.to_string())
    }
}

impl From<midir::SendError> for MidiError {
    fn from(inner: midir::SendError) -> Self {
        Self::Device(inner.to_string())
    }
}
