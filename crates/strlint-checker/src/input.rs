use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use strlint_scanner::SourceText;

use crate::CheckError;

/// Argument value that selects standard input instead of a file.
pub const STDIN_SENTINEL: &str = "-";

/// Where the text to check comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(arg: &str) -> Self {
        if arg == STDIN_SENTINEL {
            Input::Stdin
        } else {
            Input::File(PathBuf::from(arg))
        }
    }

    /// Read the whole input into lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected; only literal
    /// boundaries matter to the scanner.
    pub fn read(&self) -> Result<SourceText, CheckError> {
        let bytes = match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin().lock().read_to_end(&mut buf).map(|_| buf)
            }
            Input::File(path) => fs::read(path),
        }
        .map_err(|source| CheckError::Read {
            input: self.to_string(),
            source,
        })?;

        Ok(SourceText::new(&String::from_utf8_lossy(&bytes)))
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}
