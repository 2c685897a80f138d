/// Encoding errors.
///
/// Defines the errors raised while turning program text into a pitch
/// sequence: text the surface lexer cannot tokenize, numbers beyond the
/// six-digit encoding, and identifiers using letters outside the alphabet.
pub mod encode_error;
/// Lexical errors.
///
/// Defines the errors raised while reading a pitch sequence back into
/// tokens: pitches with no catalogue entry and literal runs that never reach
/// their closing sentinel.
pub mod lex_error;
/// MIDI I/O errors.
///
/// Wraps the failures of the two device-facing adapters: reading a recorded
/// performance file and playing a pitch sequence on an output port.
pub mod midi_error;
/// Parsing errors.
///
/// Defines the errors raised while building the AST from the token stream:
/// unexpected tokens at expression positions and mismatches where a specific
/// token was required.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised during evaluation: unbound
/// variables, applying a non-function, operand type mismatches, and integer
/// overflow.
pub mod runtime_error;

pub use encode_error::EncodeError;
pub use lex_error::LexError;
pub use midi_error::MidiError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
