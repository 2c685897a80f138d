/// Represents one of the twelve chromatic pitch classes.
///
/// The seven natural classes double as the "letter" half of the lexical
/// alphabet. The sharp classes carry no lexical meaning, but recorded
/// performances contain them, so they are representable and flow through the
/// same pipeline until the lexer rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchClass {
    /// C
    C,
    /// C♯
    CSharp,
    /// D
    D,
    /// D♯
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F♯
    FSharp,
    /// G
    G,
    /// G♯
    GSharp,
    /// A
    A,
    /// A♯
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// Returns the semitone offset of this class within an octave (C = 0).
    #[must_use]
    pub const fn semitone(self) -> u8 {
        match self {
            Self::C => 0,
            Self::CSharp => 1,
            Self::D => 2,
            Self::DSharp => 3,
            Self::E => 4,
            Self::F => 5,
            Self::FSharp => 6,
            Self::G => 7,
            Self::GSharp => 8,
            Self::A => 9,
            Self::ASharp => 10,
            Self::B => 11,
        }
    }

    /// Returns the class for a semitone offset, wrapping at the octave.
    #[must_use]
    pub const fn from_semitone(semitone: u8) -> Self {
        match semitone % 12 {
            0 => Self::C,
            1 => Self::CSharp,
            2 => Self::D,
            3 => Self::DSharp,
            4 => Self::E,
            5 => Self::F,
            6 => Self::FSharp,
            7 => Self::G,
            8 => Self::GSharp,
            9 => Self::A,
            10 => Self::ASharp,
            _ => Self::B,
        }
    }

    /// Returns the conventional name of this class, e.g. `"C#"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Parses a conventional class name, e.g. `"F"` or `"F#"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "C" => Some(Self::C),
            "C#" => Some(Self::CSharp),
            "D" => Some(Self::D),
            "D#" => Some(Self::DSharp),
            "E" => Some(Self::E),
            "F" => Some(Self::F),
            "F#" => Some(Self::FSharp),
            "G" => Some(Self::G),
            "G#" => Some(Self::GSharp),
            "A" => Some(Self::A),
            "A#" => Some(Self::ASharp),
            "B" => Some(Self::B),
            _ => None,
        }
    }

    /// Returns `true` when the class is one of the seven naturals.
    #[must_use]
    pub const fn is_natural(self) -> bool {
        !matches!(self,
                  Self::CSharp | Self::DSharp | Self::FSharp | Self::GSharp | Self::ASharp)
    }
}

/// A pitch: a class paired with an octave number.
///
/// This is the "alphabet code" of the language — every lexical token is
/// spelled with pitches, and every pitch also denotes a playable note. The
/// octave is signed because MIDI keys 0–11 live in octave −1.
///
/// # Example
/// ```
/// use pitchlang::notation::{Pitch, PitchClass};
///
/// let a4: Pitch = "A4".parse().unwrap();
///
/// assert_eq!(a4, Pitch::new(PitchClass::A, 4));
/// assert_eq!(a4.key(), 69);
/// assert_eq!(a4.to_string(), "A4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    /// The pitch class.
    pub class:  PitchClass,
    /// The octave number, where octave 4 contains middle C.
    pub octave: i8,
}

impl Pitch {
    /// Creates a pitch from a class and an octave.
    #[must_use]
    pub const fn new(class: PitchClass, octave: i8) -> Self {
        Self { class, octave }
    }

    /// Converts a MIDI key number (0–127) to a pitch.
    ///
    /// # Example
    /// ```
    /// use pitchlang::notation::Pitch;
    ///
    /// assert_eq!(Pitch::from_key(61).to_string(), "C#4");
    /// assert_eq!(Pitch::from_key(0).to_string(), "C-1");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_key(key: u8) -> Self {
        Self { class:  PitchClass::from_semitone(key % 12),
               octave: (key / 12) as i8 - 1, }
    }

    /// Converts the pitch back to a MIDI key number.
    ///
    /// The inverse of [`Pitch::from_key`] for the 0–127 range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn key(self) -> u8 {
        ((self.octave as i16 + 1) * 12 + self.class.semitone() as i16) as u8
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.class.name(), self.octave)
    }
}

/// The error returned when a string is not a valid pitch name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePitchError {
    /// The text that failed to parse.
    pub text: String,
}

impl std::fmt::Display for ParsePitchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a pitch name such as 'C4' or 'F#2'.", self.text)
    }
}

impl std::error::Error for ParsePitchError {}

impl std::str::FromStr for Pitch {
    type Err = ParsePitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePitchError { text: s.to_string() };

        let split = if s.get(1..2) == Some("#") { 2 } else { 1 };
        let (name, octave) = s.split_at_checked(split).ok_or_else(err)?;

        let class = PitchClass::from_name(name).ok_or_else(err)?;
        let octave = octave.parse().map_err(|_| err())?;

        Ok(Self { class, octave })
    }
}
