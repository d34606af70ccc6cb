/// One line of input, without its line terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Input text split into numbered lines.
///
/// Both `\n` and `\r\n` terminators are stripped. Leading and trailing
/// whitespace is kept, since it is part of any triple-quoted literal that
/// spans the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<SourceLine>,
}

impl SourceText {
    pub fn new(source: &str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .map(|(i, text)| SourceLine::new(i + 1, text))
            .collect();
        Self { lines }
    }

    /// Number of lines. Valid line numbers are `1..=len()`.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[SourceLine] {
        &self.lines
    }

    /// Look up a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&SourceLine> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }

    /// Whether `number` names a line of this text.
    pub fn contains_line(&self, number: usize) -> bool {
        (1..=self.len()).contains(&number)
    }
}

impl From<&str> for SourceText {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}
