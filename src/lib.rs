//! # pitchlang
//!
//! pitchlang is a tiny pure functional language whose source "bytes" are
//! musical pitch names. A fixed catalogue maps pitches like `C2` or `A1` to
//! tokens, so every program is also a melody: text can be encoded into a
//! pitch sequence, a recorded performance can be lexed as a program, and
//! either can be played back or evaluated to a value.
//!
//! The pipeline is `encode(text) → codes → lexer → parser → eval(env, ast)`,
//! with the encode direction and the evaluation direction meeting only at
//! the pitch sequence in the middle.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    interpreter::{encoder::encode, env::Env, evaluator::core::eval, lexer::Lexer,
                  parser::core::Parser, value::Value},
    notation::Pitch,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression variants for all language constructs.
/// - Defines the binary and unary operator enums.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised while encoding,
/// lexing, parsing, evaluating, or talking to a MIDI device. Each phase has
/// its own enum with descriptive messages; all of them integrate with the
/// standard error traits.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Carries positions (into the pitch sequence) and offending values where
///   they exist.
pub mod error;
/// Orchestrates the entire process of program execution.
///
/// This module ties together the token codec (encoder and lexer), the
/// parser, the evaluator, value representations, and the environment to
/// provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all core components: encoder, lexer, parser, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The MIDI adapters: performance input and audible output.
///
/// These are mechanical collaborators around the core: reading a recorded
/// performance file into a pitch sequence, and playing a pitch sequence on
/// an output device. Neither feeds back into evaluation.
///
/// # Responsibilities
/// - Extracts pitched notes from standard MIDI files.
/// - Sends note-on/note-off events at a fixed tempo.
pub mod midi;
/// The symbolic alphabet shared by programs and music.
///
/// Defines pitch classes and pitches, their conventional names, and the
/// conversions to and from MIDI key numbers.
///
/// # Responsibilities
/// - Defines `PitchClass` and `Pitch` with display and parsing.
/// - Converts between pitches and MIDI keys.
pub mod notation;

/// Evaluates a program given as text.
///
/// The text is encoded into its pitch sequence and then run like any other
/// sequence. The starting environment is supplied explicitly — typically
/// empty, or pre-seeded with a prelude value by the driver.
///
/// # Errors
/// Returns an error if the text cannot be encoded, the sequence fails to
/// lex or parse, or evaluation fails.
///
/// # Examples
/// ```
/// use pitchlang::{interpreter::env::Env, run_source};
///
/// let value = run_source("2 + 3 * 4", &Env::new()).unwrap();
/// assert_eq!(value.to_string(), "Number(14)");
///
/// // 'H' is not a note letter, so no program can mention it.
/// assert!(run_source("H + 1", &Env::new()).is_err());
/// ```
pub fn run_source(source: &str, env: &Env) -> Result<Value, Box<dyn std::error::Error>> {
    let codes = encode(source)?;
    run_pitches(&codes, env)
}

/// Evaluates a program given as a pitch sequence.
///
/// The sequence may come from [`run_source`]'s encoder, from a recorded
/// performance, or from pitch names typed by hand — the lexer treats them
/// all alike. One expression is parsed and evaluated; codes after the end of
/// that expression are ignored.
///
/// # Errors
/// Returns an error if the sequence fails to lex or parse, or evaluation
/// fails.
///
/// # Examples
/// ```
/// use pitchlang::{interpreter::env::Env, notation::Pitch, run_pitches};
///
/// // 1 + 2, spelled directly in pitch names.
/// let codes: Vec<Pitch> = ["C4", "B4", "C4", "E1", "C4", "B4", "B4", "C4"]
///     .iter()
///     .map(|name| name.parse().unwrap())
///     .collect();
///
/// let value = run_pitches(&codes, &Env::new()).unwrap();
/// assert_eq!(value.to_string(), "Number(3)");
/// ```
pub fn run_pitches(pitches: &[Pitch], env: &Env) -> Result<Value, Box<dyn std::error::Error>> {
    let mut parser = Parser::new(Lexer::new(pitches));
    let expr = parser.parse_expr()?;

    Ok(eval(env, &expr)?)
}
