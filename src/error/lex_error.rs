use crate::notation::Pitch;

#[derive(Debug)]
/// Represents all errors that can occur while lexing a pitch sequence.
pub enum LexError {
    /// The pitch at the current position has no catalogue entry.
    ///
    /// Raised for sharps, for octaves outside the lexical bands, and for the
    /// bare arrow-tail code, none of which can start a token.
    UnknownCode {
        /// The offending pitch.
        code:     Pitch,
        /// Index of the pitch in the code sequence.
        position: usize,
    },
    /// A number or identifier run reached the end of input before its
    /// closing sentinel.
    UnterminatedLiteral {
        /// Index of the code that opened the run.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCode { code, position } => {
                write!(f, "Error at code {position}: '{code}' has no lexical meaning.")
            },
            Self::UnterminatedLiteral { position } => write!(f,
                                                             "Error at code {position}: literal run never reached its closing sentinel."),
        }
    }
}

impl std::error::Error for LexError {}
