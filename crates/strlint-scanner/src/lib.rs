//! strlint scanner
//!
//! Finds double-quoted string literals in source text without tokenizing
//! the host language. Handles plain `"..."` literals, triple-quoted
//! `"""..."""` literals that span lines, backslash-escaped quotes, and the
//! single-letter prefix written directly before the opening quote.
//!
//! # Example
//!
//! ```
//! use strlint_scanner::{LiteralScanner, Prefix, SourceText};
//!
//! let source = SourceText::new("val greeting = s\"Hi $user\"");
//! let literals: Vec<_> = LiteralScanner::new(&source).collect();
//! assert_eq!(literals.len(), 1);
//! assert_eq!(literals[0].content, "Hi $user");
//! assert_eq!(literals[0].prefix, Prefix::S);
//! ```

pub mod literal;
pub mod scanner;
pub mod source;

pub use literal::{LiteralRecord, Prefix};
pub use scanner::{LiteralScanner, Mode};
pub use source::{SourceLine, SourceText};
