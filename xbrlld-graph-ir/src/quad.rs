//! Quads and graph names

use crate::Term;
use serde::{Deserialize, Serialize};

/// Graph component of a quad
///
/// `Default` sorts before every named graph, which is what lets writers emit
/// the default graph first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GraphName {
    /// The default (unnamed) graph
    Default,
    /// A named graph, identified by an IRI or blank node
    Named(Term),
}

impl GraphName {
    /// Named graph from an expanded IRI
    pub fn iri(iri: impl AsRef<str>) -> Self {
        GraphName::Named(Term::iri(iri))
    }

    /// Check whether this is the default graph
    pub fn is_default(&self) -> bool {
        matches!(self, GraphName::Default)
    }

    /// The graph name as a term (None for the default graph)
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            GraphName::Default => None,
            GraphName::Named(t) => Some(t),
        }
    }
}

/// An RDF quad: subject, predicate, object, graph
///
/// Field order gives the derived ordering (SPOG).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quad {
    pub s: Term,
    pub p: Term,
    pub o: Term,
    pub g: GraphName,
}

impl Quad {
    pub fn new(s: Term, p: Term, o: Term, g: GraphName) -> Self {
        Self { s, p, o, g }
    }

    /// Check whether this quad matches a pattern; `None` matches anything
    pub fn matches(
        &self,
        s: Option<&Term>,
        p: Option<&Term>,
        o: Option<&Term>,
        g: Option<&GraphName>,
    ) -> bool {
        s.map_or(true, |s| &self.s == s)
            && p.map_or(true, |p| &self.p == p)
            && o.map_or(true, |o| &self.o == o)
            && g.map_or(true, |g| &self.g == g)
    }
}

impl std::fmt::Display for Quad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.g {
            GraphName::Default => write!(f, "{} {} {} .", self.s, self.p, self.o),
            GraphName::Named(g) => write!(f, "{} {} {} {} .", self.s, self.p, self.o, g),
        }
    }
}
