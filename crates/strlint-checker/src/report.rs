use std::io::{self, Write};

use crate::classify::Diagnostic;

/// Writes diagnostics one per line and counts them.
///
/// Call [`Reporter::finish`] once all diagnostics are reported to write the
/// summary line and get the final count.
pub struct Reporter<W: Write> {
    out: W,
    count: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    pub fn report(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.out, "{diagnostic}")?;
        self.count += 1;
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Write the summary (only if something was reported) and return the count.
    pub fn finish(mut self) -> io::Result<usize> {
        if self.count > 0 {
            writeln!(self.out, "{} string interpolation issues found", self.count)?;
        }
        self.out.flush()?;
        Ok(self.count)
    }
}
