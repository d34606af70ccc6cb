//! Interpolation consistency check for a single literal.
//!
//! A literal whose content contains `$name`, `$_name` or `${expr}` probably
//! wants interpolation; a literal marked `s` or `f` without any of those
//! probably doesn't. Either mismatch becomes a [`Diagnostic`].

use std::fmt;

use strlint_scanner::{LiteralRecord, Prefix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Content looks interpolated but the literal has no `s`/`f` prefix.
    MissingPrefix,
    /// The literal has an `s`/`f` prefix but nothing to interpolate.
    UnneededPrefix,
}

impl DiagnosticKind {
    pub fn description(self) -> &'static str {
        match self {
            DiagnosticKind::MissingPrefix => "possible missing interpolation prefix",
            DiagnosticKind::UnneededPrefix => "possible unneeded prefix",
        }
    }
}

/// A mismatch between a literal's prefix and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub content: String,
    pub prefix: Prefix,
    /// Line of the literal's opening quote.
    pub line: usize,
}

impl Diagnostic {
    pub fn message(&self) -> &'static str {
        self.kind.description()
    }
}

/// Renders the report line for this diagnostic.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::MissingPrefix => write!(
                f,
                "Possible missing s or f on string \"{}\", line {}",
                self.content, self.line
            ),
            DiagnosticKind::UnneededPrefix => write!(
                f,
                "Possible unneeded {prefix} on string {prefix}\"{}\", line {}",
                self.content,
                self.line,
                prefix = self.prefix
            ),
        }
    }
}

/// Whether `content` has a `$` directly followed by a letter, `_` or `{`.
///
/// Only ASCII letters count here, unlike prefix detection, which accepts any
/// alphabetic character: `"$é"` does not look interpolated.
pub fn looks_interpolated(content: &str) -> bool {
    content
        .chars()
        .zip(content.chars().skip(1))
        .any(|(dollar, next)| {
            dollar == '$' && (next.is_ascii_alphabetic() || next == '_' || next == '{')
        })
}

/// Check one literal. Returns `None` when prefix and content agree.
pub fn classify(literal: &LiteralRecord) -> Option<Diagnostic> {
    let seems_interpolated = looks_interpolated(&literal.content);
    let has_prefix = literal.prefix.is_interpolating();

    let kind = match (seems_interpolated, has_prefix) {
        (true, false) => DiagnosticKind::MissingPrefix,
        (false, true) => DiagnosticKind::UnneededPrefix,
        _ => return None,
    };

    Some(Diagnostic {
        kind,
        content: literal.content.clone(),
        prefix: literal.prefix,
        line: literal.start_line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(content: &str, prefix: Prefix) -> LiteralRecord {
        LiteralRecord::new(content, prefix, 1, false)
    }

    fn kind_of(content: &str, prefix: Prefix) -> Option<DiagnosticKind> {
        classify(&literal(content, prefix)).map(|d| d.kind)
    }

    // =========================================================================
    // looks_interpolated
    // =========================================================================

    #[test]
    fn test_dollar_followed_by_letter() {
        assert!(looks_interpolated("Hello $name"));
        assert!(looks_interpolated("$x"));
        assert!(looks_interpolated("Total: $Amount"));
    }

    #[test]
    fn test_dollar_followed_by_underscore_or_brace() {
        assert!(looks_interpolated("$_private"));
        assert!(looks_interpolated("sum: ${a + b}"));
    }

    #[test]
    fn test_dollar_without_identifier() {
        assert!(!looks_interpolated("costs $5"));
        assert!(!looks_interpolated("trailing $"));
        assert!(!looks_interpolated("$ alone"));
        assert!(!looks_interpolated("$(paren)"));
    }

    #[test]
    fn test_dollar_followed_by_non_ascii_letter() {
        assert!(!looks_interpolated("price $é"));
        assert!(!looks_interpolated("$Ωmega"));
        assert!(looks_interpolated("$é and $e"));
    }

    #[test]
    fn test_no_dollar() {
        assert!(!looks_interpolated(""));
        assert!(!looks_interpolated("plain text {braces}"));
    }

    #[test]
    fn test_dollar_on_later_line_of_triple_content() {
        assert!(looks_interpolated("first line\nsecond $line"));
    }

    // =========================================================================
    // classify
    // =========================================================================

    #[test]
    fn test_interpolated_with_prefix_is_clean() {
        assert_eq!(kind_of("Hello $name", Prefix::S), None);
        assert_eq!(kind_of("$x%.2f", Prefix::F), None);
    }

    #[test]
    fn test_plain_without_prefix_is_clean() {
        assert_eq!(kind_of("Hello", Prefix::Plain), None);
        assert_eq!(kind_of("", Prefix::Plain), None);
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(
            classify(&literal("Hello $name", Prefix::Plain)),
            Some(Diagnostic {
                kind: DiagnosticKind::MissingPrefix,
                content: "Hello $name".into(),
                prefix: Prefix::Plain,
                line: 1,
            })
        );
    }

    #[test]
    fn test_unneeded_prefix() {
        assert_eq!(kind_of("Hello", Prefix::S), Some(DiagnosticKind::UnneededPrefix));
        assert_eq!(kind_of("", Prefix::F), Some(DiagnosticKind::UnneededPrefix));
    }

    #[test]
    fn test_other_prefix_counts_as_no_prefix() {
        assert_eq!(
            kind_of("$name", Prefix::Other('r')),
            Some(DiagnosticKind::MissingPrefix)
        );
        assert_eq!(kind_of("plain", Prefix::Other('r')), None);
    }

    #[test]
    fn test_diagnostic_keeps_start_line() {
        let record = LiteralRecord::new("a\n$b", Prefix::Plain, 7, true);
        assert_eq!(classify(&record).map(|d| d.line), Some(7));
    }

    #[test]
    fn test_classify_is_idempotent() {
        let record = literal("Hi $user", Prefix::Plain);
        assert_eq!(classify(&record), classify(&record));
    }

    // =========================================================================
    // Messages
    // =========================================================================

    #[test]
    fn test_missing_prefix_display() {
        let diag = classify(&literal("Hi $user", Prefix::Plain)).unwrap();
        assert_eq!(
            diag.to_string(),
            "Possible missing s or f on string \"Hi $user\", line 1"
        );
        assert_eq!(diag.message(), "possible missing interpolation prefix");
    }

    #[test]
    fn test_unneeded_prefix_display() {
        let diag = classify(&LiteralRecord::new("Hello", Prefix::F, 3, false)).unwrap();
        assert_eq!(
            diag.to_string(),
            "Possible unneeded f on string f\"Hello\", line 3"
        );
        assert_eq!(diag.message(), "possible unneeded prefix");
    }
}
