/// The encoder module turns program text into a pitch sequence.
///
/// This is the encode direction of the token codec. A surface lexer splits
/// the text into tokens, and each token is mapped to its fixed run of pitch
/// codes from the catalogue.
///
/// # Responsibilities
/// - Tokenizes program text (keywords, punctuation, literals, identifiers).
/// - Maps each token to 1–2 catalogue codes, or to a sentinel-delimited run
///   for numbers and identifiers.
/// - Rejects text that has no pitch spelling.
pub mod encoder;
/// The environment module holds the name-to-value mapping used during
/// evaluation.
///
/// Environments are persistent: extending one produces a new environment and
/// leaves the original untouched, which is what makes captured closure
/// environments immune to later bindings.
///
/// # Responsibilities
/// - Provides non-destructive extension (`put`) and lookup (`get`).
/// - Permits shadowing without mutating existing bindings.
pub mod env;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic and logical operations, and produces a final value. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Implements closure capture, application, and the accumulator loop.
/// - Reports runtime errors such as unbound names or type mismatches.
pub mod evaluator;
/// The lexer module reads a pitch sequence back into tokens.
///
/// This is the decode direction of the token codec: a pull-based lexer with
/// one code of lookahead that classifies catalogue codes and reassembles
/// sentinel-delimited literal runs.
///
/// # Responsibilities
/// - Classifies the current code without consuming it (`peek`).
/// - Consumes codes and produces tokens, resolving the `=`/`==`/`=>`
///   ambiguity (`next`).
/// - Reports lexical errors for codes with no catalogue entry and for
///   unterminated literal runs.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the lexer's token stream and constructs an AST by
/// recursive descent with precedence climbing for binary operators.
///
/// # Responsibilities
/// - Parses atoms, left-folded application chains, and operator tiers.
/// - Validates the grammar, reporting expected-versus-actual mismatches.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: numbers, booleans, and closures.
/// - Renders values as their tag and payload (e.g. `Number(62)`).
pub mod value;
