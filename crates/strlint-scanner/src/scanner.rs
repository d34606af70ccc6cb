use std::iter::FusedIterator;
use std::slice;

use tracing::{debug, trace};

use crate::literal::{LiteralRecord, Prefix};
use crate::source::{SourceLine, SourceText};

/// Scanner position relative to a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Not inside any literal.
    Outside,
    /// Inside `"..."`. Ends at the next unescaped quote or at end of line.
    OpenSingle,
    /// Inside `"""..."""`. Survives line boundaries.
    OpenTriple,
}

/// Character-level string literal scanner.
///
/// Walks the lines of a [`SourceText`] once and yields a [`LiteralRecord`]
/// each time a literal closes. Nothing outside literals is interpreted, so
/// the scanner works on any input and never fails: unterminated literals
/// are dropped.
///
/// The opening quote run is settled by looking at most three characters
/// ahead on the current line:
/// - `"""` opens a triple literal
/// - `""` is an empty single literal
/// - `"` opens a single literal
pub struct LiteralScanner<'a> {
    lines: slice::Iter<'a, SourceLine>,
    chars: Vec<char>,
    pos: usize,
    line: usize,
    mode: Mode,

    // The literal currently being accumulated
    content: String,
    prefix: Prefix,
    start_line: usize,
    /// The previous character of an open single literal was an unescaped `\`.
    escaped: bool,
    /// Consecutive quotes inside a triple literal not yet added to `content`.
    quote_run: usize,
}

impl<'a> LiteralScanner<'a> {
    /// Create a scanner over the given source.
    pub fn new(source: &'a SourceText) -> Self {
        Self {
            lines: source.lines().iter(),
            chars: Vec::new(),
            pos: 0,
            line: 0,
            mode: Mode::Outside,
            content: String::new(),
            prefix: Prefix::Plain,
            start_line: 0,
            escaped: false,
            quote_run: 0,
        }
    }

    /// Scan the entire source into a vector of literals.
    pub fn scan(source: &SourceText) -> Vec<LiteralRecord> {
        LiteralScanner::new(source).collect()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Consume one character (or one opening quote run) of the current line.
    fn step(&mut self) -> Option<LiteralRecord> {
        match self.mode {
            Mode::Outside => {
                if self.peek() == '"' {
                    self.open_literal()
                } else {
                    self.advance();
                    None
                }
            }
            Mode::OpenSingle => self.step_single(),
            Mode::OpenTriple => self.step_triple(),
        }
    }

    fn open_literal(&mut self) -> Option<LiteralRecord> {
        self.prefix = Prefix::from_preceding(self.previous());
        self.start_line = self.line;
        self.content.clear();
        self.escaped = false;
        self.quote_run = 0;

        match self.quotes_ahead() {
            3 => {
                self.pos += 3;
                self.mode = Mode::OpenTriple;
                None
            }
            2 => {
                self.pos += 2;
                Some(self.close(false))
            }
            _ => {
                self.pos += 1;
                self.mode = Mode::OpenSingle;
                None
            }
        }
    }

    fn step_single(&mut self) -> Option<LiteralRecord> {
        let ch = self.peek();
        self.advance();

        if ch == '"' && !self.escaped {
            return Some(self.close(false));
        }

        // `\\` escapes itself, so only an odd run of backslashes escapes a quote
        self.escaped = ch == '\\' && !self.escaped;
        self.content.push(ch);
        None
    }

    fn step_triple(&mut self) -> Option<LiteralRecord> {
        let ch = self.peek();
        self.advance();

        if ch == '"' {
            self.quote_run += 1;
            if self.quote_run == 3 {
                return Some(self.close(true));
            }
        } else {
            self.flush_quotes();
            self.content.push(ch);
        }
        None
    }

    /// Quotes held back in a triple literal turned out to be text.
    fn flush_quotes(&mut self) {
        for _ in 0..self.quote_run {
            self.content.push('"');
        }
        self.quote_run = 0;
    }

    fn close(&mut self, is_triple: bool) -> LiteralRecord {
        self.mode = Mode::Outside;
        self.escaped = false;
        self.quote_run = 0;

        let record = LiteralRecord::new(
            std::mem::take(&mut self.content),
            self.prefix,
            self.start_line,
            is_triple,
        );
        trace!(
            line = record.start_line,
            triple = record.is_triple,
            prefix = %record.prefix,
            "literal closed"
        );
        record
    }

    fn discard(&mut self) {
        debug!(
            line = self.start_line,
            mode = ?self.mode,
            "discarding unterminated literal"
        );
        self.mode = Mode::Outside;
        self.content.clear();
        self.escaped = false;
        self.quote_run = 0;
    }

    /// Finish the current line and load the next one.
    /// Returns `false` once the input is exhausted.
    fn next_line(&mut self) -> bool {
        match self.mode {
            Mode::Outside => {}
            Mode::OpenSingle => self.discard(),
            Mode::OpenTriple => {
                self.flush_quotes();
                self.content.push('\n');
            }
        }

        match self.lines.next() {
            Some(line) => {
                self.line = line.number;
                self.chars = line.text.chars().collect();
                self.pos = 0;
                true
            }
            None => {
                if self.mode != Mode::Outside {
                    self.discard();
                }
                self.chars.clear();
                self.pos = 0;
                false
            }
        }
    }

    // --- Helpers ---

    /// Number of consecutive quotes (at most three) starting at the cursor.
    fn quotes_ahead(&self) -> usize {
        self.chars[self.pos..]
            .iter()
            .take(3)
            .take_while(|&&c| c == '"')
            .count()
    }

    fn peek(&self) -> char {
        if self.is_at_line_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn previous(&self) -> Option<char> {
        self.pos.checked_sub(1).map(|i| self.chars[i])
    }

    fn advance(&mut self) {
        if !self.is_at_line_end() {
            self.pos += 1;
        }
    }

    fn is_at_line_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

impl Iterator for LiteralScanner<'_> {
    type Item = LiteralRecord;

    fn next(&mut self) -> Option<LiteralRecord> {
        loop {
            if self.is_at_line_end() {
                if !self.next_line() {
                    return None;
                }
                continue;
            }
            if let Some(record) = self.step() {
                return Some(record);
            }
        }
    }
}

impl FusedIterator for LiteralScanner<'_> {}
