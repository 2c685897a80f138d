#[derive(Debug)]
/// Represents all errors that can occur while encoding program text into a
/// pitch sequence.
pub enum EncodeError {
    /// The surface lexer found text that is not part of the language.
    UnknownToken {
        /// The offending slice of source text.
        token: String,
    },
    /// A number literal does not fit the six-digit encoding.
    NumberTooLarge {
        /// The literal value.
        n: i64,
    },
    /// An identifier uses a letter with no code in the alphabet.
    ///
    /// Identifier letters are restricted to D, E, F, G, A and B; in
    /// particular C is the identifier sentinel and can never appear in a
    /// name.
    UnencodableIdentifier {
        /// The identifier as written.
        name: String,
    },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { token } => {
                write!(f, "Cannot encode '{token}': not a token of the language.")
            },
            Self::NumberTooLarge { n } => write!(f,
                                                 "Cannot encode {n}: number literals support at most six decimal digits."),
            Self::UnencodableIdentifier { name } => write!(f,
                                                           "Cannot encode identifier '{name}': names may only use the letters D, E, F, G, A and B."),
        }
    }
}

impl std::error::Error for EncodeError {}
