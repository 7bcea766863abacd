//! Render a definition's syntax tree as Graphviz.
//!
//! Usage:
//!
//! ```ignore
//! <field.def def_to_graphviz | dot -T png >output.png
//! ```

use std::io::{stdout, Read, Write};

use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let def = axiomdef::parse_definition(&input)?;
    stdout().lock().write_all(&axiomdef::render_definition(&def))
}
