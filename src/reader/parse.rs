//! Recursive-descent parser for definitions.
//!
//! There is one routine per grammar rule:
//!
//! ```text
//! definition       := 'def' TYPE '{' formula '}'
//! formula          := binary_connective | parenthesized | quantifier
//!                   | negation | equality | predicate
//! binary_connective:= binary_lhs ('and' | 'or' | '=>' | '<=>') formula
//! binary_lhs       := parenthesized | quantifier | negation | equality | predicate
//! parenthesized    := '(' formula ')'
//! quantifier       := ('forall' | 'exists') variable formula
//! negation         := '!' formula
//! equality         := term '=' term
//! predicate        := (TYPE | 'in') '(' term_list ')'
//! term             := function | variable
//! function         := SYMBOL '(' term_list ')'
//! variable         := SYMBOL
//! term_list        := ε | term (',' term)*
//! ```
//!
//! Alternatives are ordered: the first one that matches wins, and an alternative that
//! fails part-way is rewound completely before the next is tried. `binary_lhs` leaves out
//! `binary_connective`, so there is no left recursion, and chains of connectives nest to
//! the right.
//!
//! Each routine runs inside [`Parser::attempt`], which holds one checkpoint on the token
//! stream for the duration of the routine: a match commits it, anything else rolls it
//! back. The checkpoint stack therefore mirrors the call stack, and a routine that does
//! not match leaves the stream exactly where it found it.

use crate::ast::*;
use crate::reader::checkpoint::CheckpointIter;
use crate::reader::token::{Token, TokenKind, Tokenizer};
use crate::reader::{ReadErr, ReadResult};

/// Outcome of a grammar routine: `Ok(Some)` on a match, `Ok(None)` if the rule does not
/// apply here, `Err` if the tokenizer failed.
pub type Parsed<T> = ReadResult<Option<T>>;

/// Parse the input as a complete definition.
///
/// If the input is not a definition, the remaining input is still tokenized, so a lex
/// error anywhere in it is reported in preference to the non-match.
pub fn parse(input: &str) -> ReadResult<DefNode> {
    let mut parser = Parser::new(input);
    if let Some(def) = parser.definition()? {
        if parser.end()? {
            return Ok(def);
        }
    }
    let offset = parser.furthest_offset();
    parser.drain()?;
    tracing::debug!(offset, "input is not a definition");
    Err(ReadErr::Unmatched { offset })
}

pub struct Parser<'a> {
    tokens: CheckpointIter<Tokenizer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            tokens: CheckpointIter::new(Tokenizer::new(input)),
        }
    }

    /// Number of tokens consumed.
    pub fn position(&self) -> usize {
        self.tokens.position()
    }

    /// Number of grammar routines in progress.
    pub fn depth(&self) -> usize {
        self.tokens.depth()
    }

    /// Whether the next token is the end of input. Consumes it if so; otherwise the
    /// position is unchanged.
    pub fn end(&mut self) -> ReadResult<bool> {
        Ok(self.attempt("end", |p| p.expect(TokenKind::Eos))?.is_some())
    }

    /// Run `rule` inside a checkpoint: commit on a match, roll back otherwise.
    fn attempt<T>(
        &mut self,
        rule: &'static str,
        f: impl FnOnce(&mut Self) -> Parsed<T>,
    ) -> Parsed<T> {
        let start = self.tokens.position();
        tracing::trace!(rule, start, "attempt");
        self.tokens.create_checkpoint();
        let result = f(self);
        match &result {
            Ok(Some(_)) => {
                tracing::trace!(rule, start, end = self.tokens.position(), "matched");
                self.tokens.commit_checkpoint();
            }
            Ok(None) | Err(_) => {
                tracing::trace!(rule, start, "no match");
                self.tokens.rollback();
            }
        }
        result
    }

    /// Ordered choice: the first alternative that matches.
    fn first_of<T>(&mut self, alternatives: &[fn(&mut Self) -> Parsed<T>]) -> Parsed<T> {
        for alternative in alternatives {
            if let Some(node) = alternative(self)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }

    /// The next token, or `None` once the stream has ended.
    fn next_token(&mut self) -> Parsed<Token> {
        self.tokens.next().transpose()
    }

    /// The next token, if it is of the given kind.
    fn expect(&mut self, kind: TokenKind) -> Parsed<Token> {
        Ok(self.next_token()?.filter(|token| token.is(kind)))
    }

    pub fn definition(&mut self) -> Parsed<DefNode> {
        self.attempt("definition", |p| {
            let Some(token) = p.expect(TokenKind::Def)? else {
                return Ok(None);
            };
            let Some(name) = p.expect(TokenKind::Type)? else {
                return Ok(None);
            };
            if p.expect(TokenKind::LBrace)?.is_none() {
                return Ok(None);
            }
            let Some(body) = p.formula()? else {
                return Ok(None);
            };
            if p.expect(TokenKind::RBrace)?.is_none() {
                return Ok(None);
            }
            Ok(Some(DefNode {
                token,
                name: TypeLiteral { token: name },
                body,
            }))
        })
    }

    pub fn formula(&mut self) -> Parsed<Formula> {
        self.attempt("formula", |p| {
            p.first_of(&[
                Self::binary_connective,
                Self::parenthesized,
                Self::quantifier,
                Self::negation,
                Self::equality,
                Self::predicate,
            ])
        })
    }

    pub fn binary_connective(&mut self) -> Parsed<Formula> {
        self.attempt("binary_connective", |p| {
            let Some(lhs) = p.binary_lhs()? else {
                return Ok(None);
            };
            let Some(token) = p.next_token()? else {
                return Ok(None);
            };
            let op = match token.kind {
                TokenKind::And => ConnectiveOp::And,
                TokenKind::Or => ConnectiveOp::Or,
                TokenKind::Implies => ConnectiveOp::Implies,
                TokenKind::Iff => ConnectiveOp::Iff,
                _ => return Ok(None),
            };
            let Some(rhs) = p.formula()? else {
                return Ok(None);
            };
            Ok(Some(Formula::Connective(Connective {
                token,
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            })))
        })
    }

    pub fn binary_lhs(&mut self) -> Parsed<Formula> {
        self.attempt("binary_lhs", |p| {
            p.first_of(&[
                Self::parenthesized,
                Self::quantifier,
                Self::negation,
                Self::equality,
                Self::predicate,
            ])
        })
    }

    /// A parenthesized formula is the formula itself; parentheses leave no node behind.
    pub fn parenthesized(&mut self) -> Parsed<Formula> {
        self.attempt("parenthesized", |p| {
            if p.expect(TokenKind::LParen)?.is_none() {
                return Ok(None);
            }
            let Some(inner) = p.formula()? else {
                return Ok(None);
            };
            if p.expect(TokenKind::RParen)?.is_none() {
                return Ok(None);
            }
            Ok(Some(inner))
        })
    }

    /// The bound variable is a bare symbol, never a general term.
    pub fn quantifier(&mut self) -> Parsed<Formula> {
        self.attempt("quantifier", |p| {
            let Some(token) = p.next_token()? else {
                return Ok(None);
            };
            let kind = match token.kind {
                TokenKind::Forall => QuantifierKind::Forall,
                TokenKind::Exists => QuantifierKind::Exists,
                _ => return Ok(None),
            };
            let Some(bound) = p.variable()? else {
                return Ok(None);
            };
            let Some(body) = p.formula()? else {
                return Ok(None);
            };
            Ok(Some(Formula::Quantifier(Quantifier {
                token,
                kind,
                bound,
                body: Box::new(body),
            })))
        })
    }

    pub fn negation(&mut self) -> Parsed<Formula> {
        self.attempt("negation", |p| {
            let Some(token) = p.expect(TokenKind::Bang)? else {
                return Ok(None);
            };
            let Some(inner) = p.formula()? else {
                return Ok(None);
            };
            Ok(Some(Formula::Negation(Negation {
                token,
                inner: Box::new(inner),
            })))
        })
    }

    pub fn equality(&mut self) -> Parsed<Formula> {
        self.attempt("equality", |p| {
            let Some(lhs) = p.term()? else {
                return Ok(None);
            };
            let Some(token) = p.expect(TokenKind::Equals)? else {
                return Ok(None);
            };
            let Some(rhs) = p.term()? else {
                return Ok(None);
            };
            Ok(Some(Formula::Equal(Equal { token, lhs, rhs })))
        })
    }

    pub fn predicate(&mut self) -> Parsed<Formula> {
        self.attempt("predicate", |p| {
            let Some(token) = p.next_token()? else {
                return Ok(None);
            };
            let name = match token.kind {
                TokenKind::Type => PredicateName::Type(TypeLiteral { token }),
                TokenKind::Symbol if token.text == "in" => {
                    PredicateName::In(SymbolLiteral { token })
                }
                _ => return Ok(None),
            };
            let Some(args) = p.arguments()? else {
                return Ok(None);
            };
            Ok(Some(Formula::Predicate(Predicate { name, args })))
        })
    }

    pub fn term(&mut self) -> Parsed<Term> {
        self.attempt("term", |p| {
            if let Some(function) = p.function()? {
                return Ok(Some(Term::Function(function)));
            }
            Ok(p.variable()?.map(Term::Variable))
        })
    }

    pub fn function(&mut self) -> Parsed<FunctionCall> {
        self.attempt("function", |p| {
            let Some(token) = p.expect(TokenKind::Symbol)? else {
                return Ok(None);
            };
            let Some(args) = p.arguments()? else {
                return Ok(None);
            };
            Ok(Some(FunctionCall { token, args }))
        })
    }

    pub fn variable(&mut self) -> Parsed<Variable> {
        self.attempt("variable", |p| {
            Ok(p.expect(TokenKind::Symbol)?.map(|token| Variable { token }))
        })
    }

    /// Zero or more comma-separated terms. A comma must be followed by a term; a
    /// dangling comma fails the whole list rather than truncating it.
    pub fn term_list(&mut self) -> Parsed<Vec<Term>> {
        self.attempt("term_list", |p| {
            let mut terms = Vec::new();
            let Some(first) = p.term()? else {
                return Ok(Some(terms));
            };
            terms.push(first);
            while let Some(token) = p.next_token()? {
                if !token.is(TokenKind::Comma) {
                    p.tokens.step_back();
                    break;
                }
                let Some(term) = p.term()? else {
                    return Ok(None);
                };
                terms.push(term);
            }
            Ok(Some(terms))
        })
    }

    /// `'(' term_list ')'`, shared by functions and predicates.
    fn arguments(&mut self) -> Parsed<Vec<Term>> {
        if self.expect(TokenKind::LParen)?.is_none() {
            return Ok(None);
        }
        let Some(args) = self.term_list()? else {
            return Ok(None);
        };
        if self.expect(TokenKind::RParen)?.is_none() {
            return Ok(None);
        }
        Ok(Some(args))
    }

    /// Pull the rest of the input through the tokenizer, surfacing any lex error.
    fn drain(&mut self) -> ReadResult<()> {
        while let Some(token) = self.next_token()? {
            if token.is(TokenKind::Eos) {
                break;
            }
        }
        Ok(())
    }

    /// Offset of the furthest token examined on any path.
    fn furthest_offset(&self) -> usize {
        match self.tokens.furthest() {
            Some(Ok(token)) => token.offset,
            Some(Err(err)) => err.offset(),
            None => 0,
        }
    }
}
