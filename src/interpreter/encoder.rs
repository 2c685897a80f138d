use logos::Logos;

use crate::{
    error::EncodeError,
    notation::{Pitch, PitchClass},
};

/// Represents a token of the textual surface syntax.
///
/// This is the input side of the encode direction: program text is split
/// into these tokens, and each one is then spelled as a run of pitch codes.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum SourceToken {
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Mul,
    /// `==`
    #[token("==")]
    DoubleEquals,
    /// `=>`
    #[token("=>")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `let`
    #[token("let")]
    Let,
    /// `in`
    #[token("in")]
    In,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `loop`
    #[token("loop")]
    Loop,
    /// `{`
    #[token("{")]
    LCurly,
    /// `}`
    #[token("}")]
    RCurly,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Not,
    /// `:`
    #[token(":")]
    Colon,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Number literal tokens, such as `43`.
    #[regex(r"[0-9]+", parse_number)]
    Number(i64),
    /// Identifier tokens; uppercase note-letter names such as `AB`.
    ///
    /// The regex admits `C` so that a name like `CAB` fails with a precise
    /// error during encoding rather than as an unknown token here.
    #[regex(r"[A-G]+", |lex| lex.slice().to_string())]
    Ident(String),
}

/// Parses a number literal from the current token slice.
fn parse_number(lex: &mut logos::Lexer<SourceToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// The decimal weight of each digit position, most significant first, paired
/// with the pitch class that encodes it.
const DIGIT_WEIGHTS: [(i64, PitchClass); 6] = [(100_000, PitchClass::D),
                                               (10_000, PitchClass::E),
                                               (1_000, PitchClass::F),
                                               (100, PitchClass::G),
                                               (10, PitchClass::A),
                                               (1, PitchClass::B)];

/// The octave band carrying digit-weight codes.
const NUMBER_BAND: i8 = 4;
/// The octave band carrying identifier-letter codes.
const IDENT_BAND: i8 = 5;

/// Encodes program text into the pitch sequence that spells it.
///
/// Punctuation and keywords map to a fixed run of one or two codes; number
/// literals and identifiers become sentinel-delimited runs. The result is
/// both a program (feed it to the lexer) and a melody (feed it to the
/// player).
///
/// # Errors
/// Returns an [`EncodeError`] if the text contains anything that is not a
/// token of the language, a number of more than six digits, or an
/// identifier using a letter outside D, E, F, G, A, B.
///
/// # Example
/// ```
/// use pitchlang::interpreter::encoder::encode;
///
/// let codes = encode("21 *").unwrap();
/// let spelled: Vec<String> = codes.iter().map(ToString::to_string).collect();
///
/// // 21 = two tens-codes, one ones-code, framed by the number sentinel.
/// assert_eq!(spelled, ["C4", "A4", "A4", "B4", "C4", "G1"]);
/// ```
pub fn encode(source: &str) -> Result<Vec<Pitch>, EncodeError> {
    let mut codes = Vec::new();
    let mut lexer = SourceToken::lexer(source);

    while let Some(token) = lexer.next() {
        let Ok(token) = token else {
            return Err(EncodeError::UnknownToken { token: lexer.slice().to_string() });
        };

        encode_token(&token, &mut codes)?;
    }

    Ok(codes)
}

/// Appends the catalogue run for one surface token.
fn encode_token(token: &SourceToken, codes: &mut Vec<Pitch>) -> Result<(), EncodeError> {
    use PitchClass::{A, B, C, D, E, F, G};

    let run: &[Pitch] = match token {
        SourceToken::LParen => &[Pitch::new(C, 1)],
        SourceToken::RParen => &[Pitch::new(D, 1)],
        SourceToken::Plus => &[Pitch::new(E, 1)],
        SourceToken::Minus => &[Pitch::new(F, 1)],
        SourceToken::Mul => &[Pitch::new(G, 1)],
        SourceToken::Equals => &[Pitch::new(A, 1)],
        SourceToken::DoubleEquals => &[Pitch::new(A, 1), Pitch::new(A, 1)],
        SourceToken::Arrow => &[Pitch::new(A, 1), Pitch::new(B, 1)],
        SourceToken::If => &[Pitch::new(C, 2)],
        SourceToken::Then => &[Pitch::new(D, 2)],
        SourceToken::Else => &[Pitch::new(E, 2)],
        SourceToken::Backslash => &[Pitch::new(F, 2)],
        SourceToken::Let => &[Pitch::new(G, 2)],
        SourceToken::In => &[Pitch::new(A, 2)],
        SourceToken::Semicolon => &[Pitch::new(B, 2)],
        SourceToken::Loop => &[Pitch::new(C, 3)],
        SourceToken::LCurly => &[Pitch::new(D, 3)],
        SourceToken::RCurly => &[Pitch::new(E, 3)],
        SourceToken::Less => &[Pitch::new(F, 3)],
        SourceToken::Greater => &[Pitch::new(G, 3)],
        SourceToken::Not => &[Pitch::new(A, 3)],
        SourceToken::Colon => &[Pitch::new(B, 3)],
        SourceToken::True => &[Pitch::new(C, 6)],
        SourceToken::False => &[Pitch::new(D, 6)],
        SourceToken::Number(n) => return encode_number(*n, codes),
        SourceToken::Ident(name) => return encode_ident(name, codes),
    };

    codes.extend_from_slice(run);
    Ok(())
}

/// Encodes a number literal as a sentinel-delimited run.
///
/// For each decimal position from most significant to least, the position's
/// weight code is emitted digit-value times. A zero digit emits nothing, so
/// it is invisible in the run — the decode side reconstructs the value by
/// summing weights, not by counting positions.
fn encode_number(n: i64, codes: &mut Vec<Pitch>) -> Result<(), EncodeError> {
    if !(0..=999_999).contains(&n) {
        return Err(EncodeError::NumberTooLarge { n });
    }

    codes.push(Pitch::new(PitchClass::C, NUMBER_BAND));

    let mut rest = n;
    for (weight, class) in DIGIT_WEIGHTS {
        let digit = rest / weight;
        rest %= weight;

        for _ in 0..digit {
            codes.push(Pitch::new(class, NUMBER_BAND));
        }
    }

    codes.push(Pitch::new(PitchClass::C, NUMBER_BAND));
    Ok(())
}

/// Encodes an identifier as a sentinel-delimited run of letter codes.
///
/// Only the letters D, E, F, G, A and B have codes; C is the sentinel
/// itself, which is why it can never appear in a name.
fn encode_ident(name: &str, codes: &mut Vec<Pitch>) -> Result<(), EncodeError> {
    let mut letters = Vec::with_capacity(name.len());

    for character in name.chars() {
        let class = match character {
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            _ => return Err(EncodeError::UnencodableIdentifier { name: name.to_string() }),
        };
        letters.push(Pitch::new(class, IDENT_BAND));
    }

    codes.push(Pitch::new(PitchClass::C, IDENT_BAND));
    codes.extend(letters);
    codes.push(Pitch::new(PitchClass::C, IDENT_BAND));
    Ok(())
}
