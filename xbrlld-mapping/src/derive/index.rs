//! Predicate-indexed view of a dataset for rule joins
//!
//! Rules look quads up by predicate, by (predicate, subject) and by
//! (predicate, object). The index is built once per rule run, so each
//! lookup costs a hash probe instead of a scan of the dataset.

use hashbrown::HashMap;
use xbrlld_graph_ir::{Dataset, GraphName, Quad, Term};

#[derive(Debug, Default)]
pub(super) struct QuadIndex<'a> {
    /// Index by predicate
    by_p: HashMap<Term, Vec<&'a Quad>>,
    /// Index by (predicate, subject)
    by_ps: HashMap<(Term, Term), Vec<&'a Quad>>,
    /// Index by (predicate, object), non-literal objects only
    by_po: HashMap<(Term, Term), Vec<&'a Quad>>,
}

impl<'a> QuadIndex<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        let mut index = Self::default();
        for quad in dataset {
            index.by_p.entry(quad.p.clone()).or_default().push(quad);
            index
                .by_ps
                .entry((quad.p.clone(), quad.s.clone()))
                .or_default()
                .push(quad);
            if !quad.o.is_literal() {
                index
                    .by_po
                    .entry((quad.p.clone(), quad.o.clone()))
                    .or_default()
                    .push(quad);
            }
        }
        index
    }

    /// All quads with predicate `p`
    pub fn by_p(&self, p: &Term) -> impl Iterator<Item = &'a Quad> + '_ {
        self.by_p.get(p).into_iter().flatten().copied()
    }

    /// All quads with predicate `p` and subject `s`
    pub fn by_ps(&self, p: &Term, s: &Term) -> impl Iterator<Item = &'a Quad> + '_ {
        self.by_ps
            .get(&(p.clone(), s.clone()))
            .into_iter()
            .flatten()
            .copied()
    }

    /// All quads with predicate `p` and non-literal object `o`
    pub fn by_po(&self, p: &Term, o: &Term) -> impl Iterator<Item = &'a Quad> + '_ {
        self.by_po
            .get(&(p.clone(), o.clone()))
            .into_iter()
            .flatten()
            .copied()
    }

    /// Objects of `(s, p, ?o)` in graph `g`
    pub fn objects(&self, s: &Term, p: &Term, g: &GraphName) -> Vec<&'a Term> {
        self.by_ps(p, s)
            .filter(|q| &q.g == g)
            .map(|q| &q.o)
            .collect()
    }
}
