//! Reader for axiom definitions, e.g. the field axioms:
//!
//! ```text
//! def type[field] { forall F type[set](F) and ... }
//! ```
//!
//! Text goes through a tokenizer, a checkpointing iterator that lets the parser backtrack
//! without re-scanning, and a recursive-descent parser that builds the syntax tree.

pub mod ast;
pub mod reader;

#[cfg(feature = "render")]
mod render;
#[cfg(feature = "render")]
pub use render::render_definition;

pub use ast::DefNode;
pub use reader::{parse_definition, ReadErr, ReadResult};
