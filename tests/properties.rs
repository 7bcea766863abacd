//! Property-based tests for the tokenizer, the checkpointing iterator and the parser's
//! backtracking.

use axiomdef::reader::{tokenize, CheckpointIter, Parser, ReadResult, TokenKind};
use proptest::prelude::*;

/// A lexeme that tokenizes on its own.
fn lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "def", "forall", "exists", "and", "or", "=>", "<=>", "(", ")", "{", "}", ",", "=",
            "!", "in",
        ])
        .prop_map(str::to_owned),
        "[a-zA-Z0-9][a-zA-Z0-9_+*/^-]{0,5}",
        "type\\[[a-z ]{0,6}\\]",
    ]
}

fn whitespace() -> impl Strategy<Value = String> {
    "[ \n\t]{1,3}"
}

/// Lexemes separated by whitespace, with optional whitespace around the whole thing.
fn source() -> impl Strategy<Value = String> {
    (
        prop::collection::vec((lexeme(), whitespace()), 0..24),
        "[ \n]{0,2}",
    )
        .prop_map(|(parts, lead)| {
            let mut source = lead;
            for (lexeme, space) in parts {
                source.push_str(&lexeme);
                source.push_str(&space);
            }
            source
        })
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Checkpoint,
    Rollback,
    Commit,
    StepBack,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Next),
        1 => Just(Op::Checkpoint),
        1 => Just(Op::Rollback),
        1 => Just(Op::Commit),
        1 => Just(Op::StepBack),
    ]
}

proptest! {
    #[test]
    fn token_offsets_index_source(source in source()) {
        let tokens = tokenize(&source).expect("generated source should tokenize");
        for token in &tokens {
            prop_assert_eq!(&source[token.span()], token.text.as_str());
        }
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eos));
    }

    #[test]
    fn tokens_rebuild_trimmed_source(source in source()) {
        let tokens = tokenize(&source).expect("generated source should tokenize");
        let start = source.len() - source.trim_start().len();

        let mut rebuilt = String::new();
        let mut end = start;
        for token in &tokens {
            let gap = &source[end..token.offset];
            prop_assert!(gap.chars().all(char::is_whitespace), "non-space gap {:?}", gap);
            rebuilt.push_str(gap);
            rebuilt.push_str(&token.text);
            end = token.offset + token.length;
        }
        prop_assert_eq!(rebuilt.as_str(), source.trim());
    }

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,40}") {
        if let Ok(tokens) = tokenize(&source) {
            for token in &tokens {
                prop_assert_eq!(&source[token.span()], token.text.as_str());
            }
        }
    }

    #[test]
    fn rollback_replays(
        values in prop::collection::vec(any::<u32>(), 0..32),
        skip in 0usize..40,
        read in 0usize..40,
    ) {
        let mut it = CheckpointIter::new(values.clone().into_iter());
        it.by_ref().take(skip).for_each(drop);
        let start = it.position();
        it.create_checkpoint();
        let first: Vec<u32> = it.by_ref().take(read).collect();
        it.rollback();
        prop_assert_eq!(it.position(), start);
        let second: Vec<u32> = it.by_ref().take(read).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn matches_cursor_model(
        values in prop::collection::vec(any::<u8>(), 0..16),
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let mut it = CheckpointIter::new(values.clone().into_iter());
        let mut cursor = 0usize;
        let mut stack: Vec<usize> = Vec::new();

        for op in ops {
            match op {
                Op::Next => {
                    let want = values.get(cursor).copied();
                    prop_assert_eq!(it.next(), want);
                    if want.is_some() {
                        cursor += 1;
                    }
                }
                Op::Checkpoint => {
                    it.create_checkpoint();
                    stack.push(cursor);
                }
                Op::Rollback => {
                    if let Some(saved) = stack.pop() {
                        it.rollback();
                        cursor = saved;
                    }
                }
                Op::Commit => {
                    stack.pop();
                    it.commit_checkpoint();
                }
                Op::StepBack => {
                    if cursor > 0 {
                        it.step_back();
                        cursor -= 1;
                    }
                }
            }
            prop_assert_eq!(it.position(), cursor);
            prop_assert_eq!(it.depth(), stack.len());
        }
    }

    #[test]
    fn non_match_restores_cursor(source in source(), skip in 0usize..4) {
        type Rule = fn(&mut Parser<'_>) -> ReadResult<bool>;
        let rules: [(&str, Rule); 14] = [
            ("definition", |p| Ok(p.definition()?.is_some())),
            ("formula", |p| Ok(p.formula()?.is_some())),
            ("binary_connective", |p| Ok(p.binary_connective()?.is_some())),
            ("binary_lhs", |p| Ok(p.binary_lhs()?.is_some())),
            ("parenthesized", |p| Ok(p.parenthesized()?.is_some())),
            ("quantifier", |p| Ok(p.quantifier()?.is_some())),
            ("negation", |p| Ok(p.negation()?.is_some())),
            ("equality", |p| Ok(p.equality()?.is_some())),
            ("predicate", |p| Ok(p.predicate()?.is_some())),
            ("term", |p| Ok(p.term()?.is_some())),
            ("function", |p| Ok(p.function()?.is_some())),
            ("variable", |p| Ok(p.variable()?.is_some())),
            ("end", |p| p.end()),
            ("term_list", |p| Ok(p.term_list()?.is_some())),
        ];

        for (name, rule) in rules {
            let mut parser = Parser::new(&source);
            for _ in 0..skip {
                let _ = parser.variable();
            }
            let before = parser.position();
            let matched = rule(&mut parser).expect("generated source should tokenize");
            if !matched {
                prop_assert_eq!(parser.position(), before, "{} moved the cursor", name);
            }
            prop_assert_eq!(parser.depth(), 0, "{} left a checkpoint open", name);
        }
    }
}
