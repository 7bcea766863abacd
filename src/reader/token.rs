//! Module for extracting definition tokens from an input string.
//!
//! The tokenizer keeps two cursors into the source: `committed`, the start of the next
//! token, and `peek`, which scans ahead. Each lexing rule scans from `peek` and either
//! commits the scanned span as a token or resets `peek` back to `committed`, so a rule
//! that fails never consumes anything.

use crate::reader::{ReadErr, ReadResult};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Equals,
    Bang,
    Def,
    Forall,
    Exists,
    And,
    Or,
    Implies,
    Iff,
    /// A bracketed type literal, `type[name]`.
    Type,
    /// Identifier or operator name.
    Symbol,
    /// End of input. Emitted once the source is exhausted, and on every pull after that.
    Eos,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::LBrace => "LBrace",
            TokenKind::RBrace => "RBrace",
            TokenKind::Comma => "Comma",
            TokenKind::Equals => "Equals",
            TokenKind::Bang => "Bang",
            TokenKind::Def => "Def",
            TokenKind::Forall => "Forall",
            TokenKind::Exists => "Exists",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Implies => "Implies",
            TokenKind::Iff => "Iff",
            TokenKind::Type => "Type",
            TokenKind::Symbol => "Symbol",
            TokenKind::Eos => "Eos",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A token along with its position in the input string.
///
/// `offset` and `length` are byte positions in the string handed to [`Tokenizer::new`],
/// so `&source[offset..offset + length] == text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub offset: usize,
    pub length: usize,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.length
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:?} @{} len={}",
            self.kind, self.text, self.offset, self.length
        )
    }
}

/// Multi-character lexemes. A table entry only matches when it is the entire
/// run of non-delimiter characters at the cursor; "forallx" is a symbol.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("def", TokenKind::Def),
    ("forall", TokenKind::Forall),
    ("exists", TokenKind::Exists),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("=>", TokenKind::Implies),
    ("<=>", TokenKind::Iff),
];

const TYPE_OPEN: &str = "type[";
const TYPE_CLOSE: char = ']';

mod regex {
    use regex::Regex;
    use std::sync::OnceLock;

    pub(super) fn space() -> &'static Regex {
        static SPACE: OnceLock<Regex> = OnceLock::new();
        SPACE.get_or_init(|| {
            Regex::new(r"\A[[:space:]]+").expect("could not compile regex for empty space")
        })
    }

    /// Maximal run of characters that are neither whitespace nor punctuation delimiters.
    pub(super) fn run() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[^[:space:](){},]+").expect("could not compile regex for lexeme run")
        })
    }

    pub(super) fn symbol() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r"\A[[:alnum:]+\-*/^_\\]+").expect("could not compile regex for symbol")
        })
    }
}

/// Where a tokenizer stopped scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Halt {
    End,
    Failed(usize),
}

/// Lazy tokenizer over a source string.
///
/// Tokens are produced on demand by [`Tokenizer::next_token`], or through the
/// `Iterator` impl, which yields every token up to and including [`TokenKind::Eos`]
/// (or the single lex error) and then ends.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    /// One past the last non-whitespace byte.
    end: usize,
    committed: usize,
    peek: usize,
    halt: Option<Halt>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        let start = source.len() - source.trim_start().len();
        let end = start + source.trim().len();
        Tokenizer {
            source,
            end,
            committed: start,
            peek: start,
            halt: None,
        }
    }

    /// A tokenizer over the same source, positioned at its beginning.
    pub fn restart(&self) -> Tokenizer<'a> {
        Tokenizer::new(self.source)
    }

    /// Get the next token.
    ///
    /// Once the input is exhausted this keeps returning `Eos`; once lexing has failed it
    /// keeps returning the same error.
    pub fn next_token(&mut self) -> ReadResult<Token> {
        match self.halt {
            Some(Halt::End) => return Ok(self.eos()),
            Some(Halt::Failed(offset)) => return Err(ReadErr::Lex { offset }),
            None => (),
        }

        let result = self.lex();
        match &result {
            Ok(token) => {
                tracing::trace!(%token, "lexed");
                if token.is(TokenKind::Eos) {
                    self.halt = Some(Halt::End);
                }
            }
            Err(err) => {
                tracing::debug!(offset = err.offset(), "lexing failed");
                self.halt = Some(Halt::Failed(err.offset()));
            }
        }
        result
    }

    fn lex(&mut self) -> ReadResult<Token> {
        self.skip_whitespace();
        if self.committed >= self.end {
            return Ok(self.eos());
        }

        if let Some(token) = self.keyword() {
            return Ok(token);
        }
        if let Some(token) = self.structural() {
            return Ok(token);
        }
        if let Some(token) = self.type_literal()? {
            return Ok(token);
        }
        if let Some(token) = self.symbol() {
            return Ok(token);
        }

        Err(ReadErr::Lex {
            offset: self.committed,
        })
    }

    /// Unscanned input, from the peek cursor.
    fn rest(&self) -> &'a str {
        &self.source[self.peek..self.end]
    }

    fn skip_whitespace(&mut self) {
        if let Some(space) = regex::space().find(self.rest()) {
            self.peek += space.len();
        }
        self.committed = self.peek;
    }

    fn keyword(&mut self) -> Option<Token> {
        let run = regex::run().find(self.rest())?.as_str();
        self.peek += run.len();
        match KEYWORDS.iter().find(|(text, _)| *text == run) {
            Some((_, kind)) => Some(self.token_found(*kind)),
            None => self.token_not_found(),
        }
    }

    fn structural(&mut self) -> Option<Token> {
        let kind = match self.rest().chars().next()? {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            '=' => TokenKind::Equals,
            '!' => TokenKind::Bang,
            _ => return self.token_not_found(),
        };
        self.peek += 1;
        Some(self.token_found(kind))
    }

    /// `type[` up to and including the first `]`, verbatim.
    fn type_literal(&mut self) -> ReadResult<Option<Token>> {
        if !self.rest().starts_with(TYPE_OPEN) {
            return Ok(self.token_not_found());
        }
        match self.rest().find(TYPE_CLOSE) {
            Some(close) => {
                self.peek += close + TYPE_CLOSE.len_utf8();
                Ok(Some(self.token_found(TokenKind::Type)))
            }
            None => {
                self.token_not_found();
                Err(ReadErr::Lex {
                    offset: self.committed,
                })
            }
        }
    }

    fn symbol(&mut self) -> Option<Token> {
        let symbol = regex::symbol().find(self.rest())?;
        self.peek += symbol.len();
        Some(self.token_found(TokenKind::Symbol))
    }

    fn token_found(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            text: self.source[self.committed..self.peek].to_owned(),
            offset: self.committed,
            length: self.peek - self.committed,
        };
        self.committed = self.peek;
        token
    }

    fn token_not_found(&mut self) -> Option<Token> {
        self.peek = self.committed;
        None
    }

    fn eos(&self) -> Token {
        Token {
            kind: TokenKind::Eos,
            text: String::new(),
            offset: self.end,
            length: 0,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = ReadResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halt.is_some() {
            return None;
        }
        Some(self.next_token())
    }
}

/// Split the input into its constituent tokens, ending with `Eos`.
pub fn tokenize(input: &str) -> ReadResult<Vec<Token>> {
    Tokenizer::new(input).collect()
}
