//! RDF dataset - a set of quads spread over a default graph and named graphs
//!
//! The `Dataset` is the single output model of the mapping engine. It has
//! set semantics, is append-only, and iterates in SPOG order.

use crate::{BlankId, GraphName, Quad, QuadSink, Term};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};

/// A collection of RDF quads
///
/// # Design Decisions
///
/// - **BTreeSet storage**: Inserting an existing quad is a no-op, so rules can
///   be re-run without producing duplicates.
/// - **Blank node allocation**: The dataset owns the counter for fresh blank
///   nodes so that several conversions writing into one dataset never collide.
/// - **Skolem blank nodes**: `skolem_blank` derives a label from a key, so the
///   same key always yields the same node.
///
/// # Example
///
/// ```
/// use xbrlld_graph_ir::{Dataset, GraphName, Term};
///
/// let mut dataset = Dataset::new();
/// let g = GraphName::iri("http://example.org/role/balance");
///
/// let cube = dataset.skolem_blank(&["dsd", "http://example.org/Hypercube"]);
/// dataset.insert(
///     cube.clone(),
///     Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
///     Term::iri("http://purl.org/linked-data/cube#DataStructureDefinition"),
///     g.clone(),
/// );
///
/// assert_eq!(cube, dataset.skolem_blank(&["dsd", "http://example.org/Hypercube"]));
/// assert_eq!(dataset.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    /// The quads in this dataset
    quads: BTreeSet<Quad>,
    /// Prefix mappings used by formatters (deterministic order via BTreeMap)
    pub prefixes: BTreeMap<String, String>,
    /// Counter for fresh blank node labels
    blank_counter: u64,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dataset with the standard prefix table bound
    pub fn with_standard_prefixes() -> Self {
        let mut dataset = Self::new();
        for (prefix, ns) in xbrlld_vocab::prefixes::BINDINGS {
            dataset.add_prefix(prefix, ns);
        }
        dataset
    }

    /// Add a prefix mapping
    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Insert a quad by components
    ///
    /// Returns `true` if the quad was not present before.
    pub fn insert(&mut self, s: Term, p: Term, o: Term, g: GraphName) -> bool {
        self.quads.insert(Quad::new(s, p, o, g))
    }

    /// Insert a prebuilt quad
    pub fn insert_quad(&mut self, quad: Quad) -> bool {
        self.quads.insert(quad)
    }

    /// Check whether the dataset contains a quad
    pub fn contains(&self, s: &Term, p: &Term, o: &Term, g: &GraphName) -> bool {
        self.quads
            .contains(&Quad::new(s.clone(), p.clone(), o.clone(), g.clone()))
    }

    /// Iterate quads matching a pattern; `None` positions match anything
    ///
    /// Yielded quads borrow the dataset, not the pattern. A bound subject
    /// narrows the scan to that subject's SPOG range.
    pub fn quads_matching<'a, 'p>(
        &'a self,
        s: Option<&'p Term>,
        p: Option<&'p Term>,
        o: Option<&'p Term>,
        g: Option<&'p GraphName>,
    ) -> impl Iterator<Item = &'a Quad> + 'p
    where
        'a: 'p,
    {
        let candidates: Box<dyn Iterator<Item = &'a Quad> + 'p> = match s {
            Some(subject) => Box::new(
                self.quads
                    .range(Self::subject_floor(subject)..)
                    .take_while(move |q| &q.s == subject),
            ),
            None => Box::new(self.quads.iter()),
        };
        candidates.filter(move |q| q.matches(s, p, o, g))
    }

    /// Smallest quad with subject `s`
    ///
    /// The empty blank label sorts before every other term and the default
    /// graph before every named graph.
    fn subject_floor(s: &Term) -> Quad {
        Quad::new(s.clone(), Term::blank(""), Term::blank(""), GraphName::Default)
    }

    /// Allocate a fresh blank node, unique within this dataset
    pub fn fresh_blank(&mut self) -> Term {
        let label = format!("b{}", self.blank_counter);
        self.blank_counter += 1;
        Term::BlankNode(BlankId::new(label))
    }

    /// Blank node whose label is a function of `key`
    ///
    /// The key parts are joined with a separator that cannot occur in IRIs,
    /// then hashed with SHA-256.
    pub fn skolem_blank(&self, key: &[&str]) -> Term {
        let mut hasher = Sha256::new();
        for (i, part) in key.iter().enumerate() {
            if i > 0 {
                hasher.update([0x1f]);
            }
            hasher.update(part.as_bytes());
        }
        let digest = hasher.finalize();
        Term::BlankNode(BlankId::new(format!("sk{}", hex::encode(&digest[..12]))))
    }

    /// Get the number of quads
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iterate over quads in SPOG order
    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// All distinct graph names, default graph first
    pub fn graph_names(&self) -> BTreeSet<&GraphName> {
        self.quads.iter().map(|q| &q.g).collect()
    }

    /// Quads of a single graph, in SPO order
    pub fn graph<'a>(&'a self, g: &'a GraphName) -> impl Iterator<Item = &'a Quad> + 'a {
        self.quads.iter().filter(move |q| &q.g == g)
    }

    /// Merge another dataset into this one
    ///
    /// Prefixes from `other` do not override existing bindings.
    pub fn extend_from(&mut self, other: Dataset) {
        for (prefix, ns) in other.prefixes {
            self.prefixes.entry(prefix).or_insert(ns);
        }
        self.quads.extend(other.quads);
        self.blank_counter = self.blank_counter.max(other.blank_counter);
    }
}

impl QuadSink for Dataset {
    fn on_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.add_prefix(prefix, namespace_iri);
    }

    fn emit(&mut self, s: Term, p: Term, o: Term, g: &GraphName) -> bool {
        let inserted = self.insert(s, p, o, g.clone());
        if !inserted {
            tracing::trace!("duplicate quad ignored");
        }
        inserted
    }

    fn blank(&mut self) -> Term {
        self.fresh_blank()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Quad;
    type IntoIter = std::collections::btree_set::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}

impl FromIterator<Quad> for Dataset {
    fn from_iter<T: IntoIterator<Item = Quad>>(iter: T) -> Self {
        Dataset {
            quads: iter.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl Extend<Quad> for Dataset {
    fn extend<T: IntoIterator<Item = Quad>>(&mut self, iter: T) {
        self.quads.extend(iter);
    }
}
