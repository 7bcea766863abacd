//! Render a definition's syntax tree as a Graphviz graph.

use dot_writer::Attributes;
use dot_writer::DotWriter;

use crate::ast::*;
use crate::reader::Token;

/// Render the tree into a Graphviz digraph, one record node per syntax node.
pub fn render_definition(def: &DefNode) -> Vec<u8> {
    let mut graph = GraphvizVisitor::default();
    def.accept(&mut graph);

    let mut outbuf = Vec::new();
    {
        let mut writer = DotWriter::from(&mut outbuf);
        let mut digraph = writer.digraph();
        for (name, label) in &graph.nodes {
            let mut node = digraph.node_named(name);
            node.set_shape(dot_writer::Shape::Record);
            node.set_label(label);
        }
        for (tail, head) in &graph.edges {
            digraph.edge(tail, head);
        }
    }
    outbuf
}

/// Escape characters that are structural in record labels.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Visitor that records each node it visits, then its children, and returns the node's name.
#[derive(Default)]
struct GraphvizVisitor {
    /// Node name and record label, in visiting order.
    nodes: Vec<(String, String)>,
    edges: Vec<(String, String)>,
}

impl GraphvizVisitor {
    fn add_node(&mut self, kind: &str, token: &Token) -> String {
        let name = format!("n{}", self.nodes.len());
        let label = format!("{{{}|{}|@{}}}", kind, escape(&token.text), token.offset);
        self.nodes.push((name.clone(), label));
        name
    }

    fn add_edge(&mut self, tail: &str, head: &str) {
        self.edges.push((tail.to_owned(), head.to_owned()));
    }

    fn add_children<'n>(&mut self, parent: &str, children: impl IntoIterator<Item = &'n Term>) {
        for child in children {
            let child = child.accept(self);
            self.add_edge(parent, &child);
        }
    }
}

impl Visitor for GraphvizVisitor {
    type Output = String;

    fn visit_def(&mut self, node: &DefNode) -> String {
        let name = self.add_node("def", &node.token);
        let type_name = node.name.accept(self);
        self.add_edge(&name, &type_name);
        let body = node.body.accept(self);
        self.add_edge(&name, &body);
        name
    }

    fn visit_equal(&mut self, node: &Equal) -> String {
        let name = self.add_node("equal", &node.token);
        self.add_children(&name, [&node.lhs, &node.rhs]);
        name
    }

    fn visit_negation(&mut self, node: &Negation) -> String {
        let name = self.add_node("negation", &node.token);
        let inner = node.inner.accept(self);
        self.add_edge(&name, &inner);
        name
    }

    fn visit_connective(&mut self, node: &Connective) -> String {
        let name = self.add_node("connective", &node.token);
        for child in [&node.lhs, &node.rhs] {
            let child = child.accept(self);
            self.add_edge(&name, &child);
        }
        name
    }

    fn visit_quantifier(&mut self, node: &Quantifier) -> String {
        let name = self.add_node("quantifier", &node.token);
        let bound = node.bound.accept(self);
        self.add_edge(&name, &bound);
        let body = node.body.accept(self);
        self.add_edge(&name, &body);
        name
    }

    fn visit_predicate(&mut self, node: &Predicate) -> String {
        let name = self.add_node("predicate", node.name.token());
        self.add_children(&name, &node.args);
        name
    }

    fn visit_variable(&mut self, node: &Variable) -> String {
        self.add_node("variable", &node.token)
    }

    fn visit_function(&mut self, node: &FunctionCall) -> String {
        let name = self.add_node("function", &node.token);
        self.add_children(&name, &node.args);
        name
    }

    fn visit_type_literal(&mut self, node: &TypeLiteral) -> String {
        self.add_node("type", &node.token)
    }

    fn visit_symbol_literal(&mut self, node: &SymbolLiteral) -> String {
        self.add_node("symbol", &node.token)
    }
}
