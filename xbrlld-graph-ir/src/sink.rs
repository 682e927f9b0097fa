//! QuadSink trait for event-driven dataset construction
//!
//! Mapping rules emit quads through a sink without knowing the concrete
//! storage. `Dataset` is the standard sink; tests can substitute their own.

use crate::{GraphName, Term};

/// Event-driven interface for RDF dataset construction
///
/// # Example
///
/// ```
/// use xbrlld_graph_ir::{Dataset, GraphName, QuadSink, Term};
///
/// let mut sink = Dataset::new();
///
/// sink.on_prefix("skos", "http://www.w3.org/2004/02/skos/core#");
///
/// let node = sink.blank();
/// sink.emit(
///     node,
///     Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
///     Term::iri("http://www.w3.org/2004/02/skos/core#Concept"),
///     &GraphName::Default,
/// );
///
/// assert_eq!(sink.len(), 1);
/// ```
pub trait QuadSink {
    /// Called when a prefix is declared
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Emit a quad; returns `true` if it was new
    fn emit(&mut self, s: Term, p: Term, o: Term, g: &GraphName) -> bool;

    /// Create a fresh blank node term
    fn blank(&mut self) -> Term;

    /// Emit a triple into the default graph
    fn emit_default(&mut self, s: Term, p: Term, o: Term) -> bool {
        self.emit(s, p, o, &GraphName::Default)
    }
}
