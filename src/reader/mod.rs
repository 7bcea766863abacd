//! Support for reading definitions from strings.

use std::io::ErrorKind;

use crate::ast::DefNode;

pub mod checkpoint;
pub mod parse;
pub mod token;

pub use checkpoint::CheckpointIter;
pub use parse::{Parsed, Parser};
pub use token::{tokenize, Token, TokenKind, Tokenizer};

/// Parse the string as a single definition, `def type[name] { formula }`.
pub fn parse_definition(input: &str) -> ReadResult<DefNode> {
    parse::parse(input)
}

/// Error type if a read does not complete.
///
/// A reader may fail to split the input into tokens at all, e.g. on "@": no rule
/// applies at that offset, and nothing after it is examined.
/// This is distinct from input that tokenizes but is not a definition, e.g. "def def":
/// the parser tried every alternative and none matched.
///
/// Both carry a byte offset into the input; nothing finer is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadErr {
    /// No lexing rule matches at this offset.
    Lex { offset: usize },
    /// The input is not a definition; `offset` is the furthest token the parser examined.
    Unmatched { offset: usize },
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            ReadErr::Lex { offset } => write!(f, "error lexing at offset {offset}"),
            ReadErr::Unmatched { offset } => {
                write!(f, "input is not a definition (stopped at offset {offset})")
            }
        }
    }
}

impl std::error::Error for ReadErr {}

impl ReadErr {
    /// Byte offset into the source that this error refers to.
    pub fn offset(&self) -> usize {
        match self {
            ReadErr::Lex { offset } | ReadErr::Unmatched { offset } => *offset,
        }
    }
}

/// The main result type for this module:
/// a T (token, node, etc), or an error.
pub type ReadResult<T> = Result<T, ReadErr>;

impl From<ReadErr> for std::io::Error {
    fn from(value: ReadErr) -> Self {
        std::io::Error::new(ErrorKind::InvalidInput, value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_has_offset() {
        let lex = ReadErr::Lex { offset: 12 };
        assert_eq!(lex.to_string(), "error lexing at offset 12");
        assert_eq!(lex.offset(), 12);

        let unmatched = ReadErr::Unmatched { offset: 4 };
        assert!(unmatched.to_string().contains("offset 4"));
    }

    #[test]
    fn error_into_io() {
        let err: std::io::Error = ReadErr::Lex { offset: 3 }.into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("offset 3"));
    }
}
