//! Traversal hook for the syntax tree.
//!
//! `accept` on a node calls the one `Visitor` method for that node's shape and returns its
//! result. Nothing recurses on its own: a visitor that wants the whole tree calls `accept`
//! on the children it cares about, in the order it wants.

use super::*;

pub trait Visitor {
    type Output;

    fn visit_def(&mut self, node: &DefNode) -> Self::Output;
    fn visit_equal(&mut self, node: &Equal) -> Self::Output;
    fn visit_negation(&mut self, node: &Negation) -> Self::Output;
    fn visit_connective(&mut self, node: &Connective) -> Self::Output;
    fn visit_quantifier(&mut self, node: &Quantifier) -> Self::Output;
    fn visit_predicate(&mut self, node: &Predicate) -> Self::Output;
    fn visit_variable(&mut self, node: &Variable) -> Self::Output;
    fn visit_function(&mut self, node: &FunctionCall) -> Self::Output;
    fn visit_type_literal(&mut self, node: &TypeLiteral) -> Self::Output;
    fn visit_symbol_literal(&mut self, node: &SymbolLiteral) -> Self::Output;
}

impl DefNode {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_def(self)
    }
}

impl Formula {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Formula::Equal(node) => node.accept(visitor),
            Formula::Negation(node) => node.accept(visitor),
            Formula::Connective(node) => node.accept(visitor),
            Formula::Quantifier(node) => node.accept(visitor),
            Formula::Predicate(node) => node.accept(visitor),
        }
    }
}

impl Equal {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_equal(self)
    }
}

impl Negation {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_negation(self)
    }
}

impl Connective {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_connective(self)
    }
}

impl Quantifier {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_quantifier(self)
    }
}

impl Predicate {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_predicate(self)
    }
}

impl PredicateName {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            PredicateName::Type(node) => node.accept(visitor),
            PredicateName::In(node) => node.accept(visitor),
        }
    }
}

impl Term {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Term::Variable(node) => node.accept(visitor),
            Term::Function(node) => node.accept(visitor),
        }
    }
}

impl Variable {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_variable(self)
    }
}

impl FunctionCall {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_function(self)
    }
}

impl TypeLiteral {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_type_literal(self)
    }
}

impl SymbolLiteral {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_symbol_literal(self)
    }
}
