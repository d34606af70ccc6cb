//! strlint checker
//!
//! Checks each string literal found by `strlint-scanner` for an
//! interpolation prefix that disagrees with its content, and reports the
//! mismatches.
//!
//! ```text
//! SourceText → LiteralScanner → classify() → Reporter
//! ```
//!
//! # Example
//!
//! ```
//! let diagnostics = strlint_checker::check("val greeting = \"Hi $user\"").unwrap();
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].to_string(),
//!     "Possible missing s or f on string \"Hi $user\", line 1"
//! );
//! ```

pub mod classify;
pub mod input;
pub mod report;

use std::io::{self, Write};

use strlint_scanner::{LiteralScanner, SourceText};
use tracing::debug;

pub use classify::{classify, looks_interpolated, Diagnostic, DiagnosticKind};
pub use input::{Input, STDIN_SENTINEL};
pub use report::Reporter;

/// Errors that stop a check before any diagnostics are written.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("cannot read {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),

    /// A literal claims a line the source doesn't have. Always a bug.
    #[error("internal error: literal at line {line} outside source of {total} lines")]
    LineOutOfRange { line: usize, total: usize },
}

/// Check every literal in `source`, returning diagnostics in scan order.
pub fn check_source(source: &SourceText) -> Result<Vec<Diagnostic>, CheckError> {
    let mut diagnostics = Vec::new();
    let mut literals = 0;

    for literal in LiteralScanner::new(source) {
        if !source.contains_line(literal.start_line) {
            return Err(CheckError::LineOutOfRange {
                line: literal.start_line,
                total: source.len(),
            });
        }
        literals += 1;
        diagnostics.extend(classify(&literal));
    }

    debug!(
        lines = source.len(),
        literals,
        diagnostics = diagnostics.len(),
        "check finished"
    );
    Ok(diagnostics)
}

/// Check source text given as a string.
pub fn check(source: &str) -> Result<Vec<Diagnostic>, CheckError> {
    check_source(&SourceText::new(source))
}

/// Check `source` and write the report to `out`. Returns the number of
/// diagnostics written.
pub fn lint<W: Write>(source: &SourceText, out: W) -> Result<usize, CheckError> {
    let diagnostics = check_source(source)?;

    let mut reporter = Reporter::new(out);
    for diagnostic in &diagnostics {
        reporter.report(diagnostic)?;
    }
    Ok(reporter.finish()?)
}
