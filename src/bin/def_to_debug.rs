//! Read a definition and print:
//! - each token on stderr, as the tokenizer produced it
//! - the syntax tree on stdout, in the debug format from `derive(Debug)`.
//!
//! ```ignore
//! <field.def def_to_debug
//! ```
//!
//! Set `RUST_LOG=axiomdef=trace` to watch the parser backtrack.

use std::io::Read;

use axiomdef::reader::Tokenizer;
use tracing_subscriber::EnvFilter;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    for token in Tokenizer::new(&input) {
        eprintln!("{}", token?);
    }

    let def = axiomdef::parse_definition(&input)?;
    println!("{:#?}", def);
    Ok(())
}
