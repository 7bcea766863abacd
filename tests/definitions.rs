//! Whole definitions through the public API.

use axiomdef::ast::{ConnectiveOp, Formula, QuantifierKind, Term};
use axiomdef::reader::TokenKind;
use axiomdef::{parse_definition, ReadErr};

#[test]
fn parse_field_axioms() -> Result<(), ReadErr> {
    let def = parse_definition(include_str!("../demos/field.def"))?;
    assert_eq!(def.name.name(), "field");

    let Formula::Quantifier(set) = &def.body else {
        panic!("expected quantifier, got {:?}", def.body);
    };
    assert_eq!(set.kind, QuantifierKind::Forall);
    assert_eq!(set.bound.symbol(), "F");

    let Formula::Connective(conj) = set.body.as_ref() else {
        panic!("expected connective, got {:?}", set.body);
    };
    assert_eq!(conj.op, ConnectiveOp::And);
    let Formula::Predicate(is_set) = conj.lhs.as_ref() else {
        panic!("expected predicate, got {:?}", conj.lhs);
    };
    assert_eq!(is_set.name.as_str(), "set");

    let Formula::Quantifier(closure) = conj.rhs.as_ref() else {
        panic!("expected quantifier, got {:?}", conj.rhs);
    };
    assert_eq!(closure.kind, QuantifierKind::Forall);
    assert_eq!(closure.bound.symbol(), "a");
    Ok(())
}

#[test]
fn tokens_anchor_nodes() -> Result<(), ReadErr> {
    let input = "def type[group] { exists e forall g *(g, e) = g }";
    let def = parse_definition(input)?;
    assert_eq!(def.token.offset, 0);
    assert_eq!(def.name.token.kind, TokenKind::Type);

    let Formula::Quantifier(exists) = &def.body else {
        panic!("expected quantifier, got {:?}", def.body);
    };
    assert_eq!(&input[exists.token.span()], "exists");
    let Formula::Quantifier(forall) = exists.body.as_ref() else {
        panic!("expected quantifier, got {:?}", exists.body);
    };
    let Formula::Equal(equal) = forall.body.as_ref() else {
        panic!("expected equality, got {:?}", forall.body);
    };
    assert_eq!(equal.token.offset, input.find(" = ").unwrap() + 1);
    let Term::Function(product) = &equal.lhs else {
        panic!("expected function, got {:?}", equal.lhs);
    };
    assert_eq!(product.symbol(), "*");
    assert_eq!(product.args[1].symbol(), "e");
    Ok(())
}

#[test]
fn rejected_inputs() {
    for (input, want) in [
        ("def type[x] { }", ReadErr::Unmatched { offset: 14 }),
        ("type[x] { a = b }", ReadErr::Unmatched { offset: 0 }),
        ("def type[x] { a = b", ReadErr::Unmatched { offset: 19 }),
        ("def type[x] { f(a,) = b }", ReadErr::Unmatched { offset: 18 }),
        ("def type[x] { a = b } @", ReadErr::Lex { offset: 22 }),
        ("def type[x { a = b }", ReadErr::Lex { offset: 4 }),
        ("@", ReadErr::Lex { offset: 0 }),
    ] {
        assert_eq!(parse_definition(input), Err(want), "for {:?}", input);
    }
}
