//! Syntax tree for definitions.
//!
//! Nodes are built bottom-up by the parser and never change afterwards. Every node keeps
//! the token it was anchored on, so positions survive into whatever consumes the tree.

use crate::reader::Token;

pub mod visit;

pub use visit::Visitor;

/// `def type[name] { body }`, the root of every parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefNode {
    /// The `def` keyword.
    pub token: Token,
    pub name: TypeLiteral,
    pub body: Formula,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    Equal(Equal),
    Negation(Negation),
    Connective(Connective),
    Quantifier(Quantifier),
    Predicate(Predicate),
}

impl Formula {
    /// The token this formula is anchored on.
    pub fn token(&self) -> &Token {
        match self {
            Formula::Equal(node) => &node.token,
            Formula::Negation(node) => &node.token,
            Formula::Connective(node) => &node.token,
            Formula::Quantifier(node) => &node.token,
            Formula::Predicate(node) => node.name.token(),
        }
    }
}

/// `lhs = rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equal {
    pub token: Token,
    pub lhs: Term,
    pub rhs: Term,
}

/// `! inner`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negation {
    pub token: Token,
    pub inner: Box<Formula>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectiveOp {
    And,
    Or,
    Implies,
    Iff,
}

/// `lhs op rhs`; chains nest to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connective {
    pub token: Token,
    pub op: ConnectiveOp,
    pub lhs: Box<Formula>,
    pub rhs: Box<Formula>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    Forall,
    Exists,
}

/// `forall bound body` / `exists bound body`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantifier {
    pub token: Token,
    pub kind: QuantifierKind,
    pub bound: Variable,
    pub body: Box<Formula>,
}

/// `type[name](args)` or `in(args)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub name: PredicateName,
    pub args: Vec<Term>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateName {
    Type(TypeLiteral),
    /// Set membership.
    In(SymbolLiteral),
}

impl PredicateName {
    pub fn token(&self) -> &Token {
        match self {
            PredicateName::Type(literal) => &literal.token,
            PredicateName::In(literal) => &literal.token,
        }
    }

    /// `set` for `type[set]`, `in` for membership.
    pub fn as_str(&self) -> &str {
        match self {
            PredicateName::Type(literal) => literal.name(),
            PredicateName::In(literal) => literal.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Variable(Variable),
    Function(FunctionCall),
}

impl Term {
    pub fn token(&self) -> &Token {
        match self {
            Term::Variable(node) => &node.token,
            Term::Function(node) => &node.token,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.token().text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub token: Token,
}

impl Variable {
    pub fn symbol(&self) -> &str {
        &self.token.text
    }
}

/// `symbol(args)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    /// The function's name.
    pub token: Token,
    pub args: Vec<Term>,
}

impl FunctionCall {
    pub fn symbol(&self) -> &str {
        &self.token.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub token: Token,
}

impl TypeLiteral {
    /// The text between the brackets of `type[...]`.
    pub fn name(&self) -> &str {
        let text = self.token.text.as_str();
        text.strip_prefix("type[")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolLiteral {
    pub token: Token,
}

impl SymbolLiteral {
    pub fn as_str(&self) -> &str {
        &self.token.text
    }
}
