use std::fmt;

/// The letter written directly before a literal's opening quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// No letter before the quote.
    Plain,
    /// `s"..."`: substitution.
    S,
    /// `f"..."`: formatted.
    F,
    /// Any other letter, e.g. `raw"..."`. Carries no interpolation.
    Other(char),
}

impl Prefix {
    /// Classify the character preceding an opening quote.
    pub fn from_preceding(ch: Option<char>) -> Self {
        match ch {
            Some('s') => Prefix::S,
            Some('f') => Prefix::F,
            Some(c) if c.is_alphabetic() => Prefix::Other(c),
            _ => Prefix::Plain,
        }
    }

    /// Whether this prefix turns on interpolation.
    pub fn is_interpolating(self) -> bool {
        matches!(self, Prefix::S | Prefix::F)
    }

    pub fn letter(self) -> Option<char> {
        match self {
            Prefix::Plain => None,
            Prefix::S => Some('s'),
            Prefix::F => Some('f'),
            Prefix::Other(c) => Some(c),
        }
    }
}

/// Renders the prefix as written in source; `Plain` renders as nothing.
impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

/// A string literal found by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralRecord {
    /// Body between the delimiting quotes, exactly as written. Escapes are
    /// kept verbatim and line breaks inside triple literals become `\n`.
    pub content: String,
    pub prefix: Prefix,
    /// 1-based line of the opening quote.
    pub start_line: usize,
    pub is_triple: bool,
}

impl LiteralRecord {
    pub fn new(
        content: impl Into<String>,
        prefix: Prefix,
        start_line: usize,
        is_triple: bool,
    ) -> Self {
        Self {
            content: content.into(),
            prefix,
            start_line,
            is_triple,
        }
    }
}
