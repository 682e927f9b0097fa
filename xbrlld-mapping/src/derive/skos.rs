//! SKOS hierarchy rule
//!
//! `(s, parent-child, o)` in graph `g` yields, in `g`:
//! `s a skos:Concept; skos:narrower o; skos:inScheme g` and
//! `o a skos:Concept; skos:broader s; skos:inScheme g`.

use super::index::QuadIndex;
use xbrlld_graph_ir::{Dataset, Quad, Term};
use xbrlld_vocab::{arcrole, rdf, skos};

pub(super) const RULE: &str = "skos-hierarchy";

pub(super) fn skos_hierarchy(dataset: &Dataset) -> Vec<Quad> {
    let parent_child = Term::iri(arcrole::PARENT_CHILD);
    let rdf_type = Term::iri(rdf::TYPE);
    let concept = Term::iri(skos::CONCEPT);
    let narrower = Term::iri(skos::NARROWER);
    let broader = Term::iri(skos::BROADER);
    let in_scheme = Term::iri(skos::IN_SCHEME);

    let index = QuadIndex::new(dataset);
    let mut out = Vec::new();
    for q in index.by_p(&parent_child) {
        // Only named graphs act as concept schemes
        let Some(scheme) = q.g.as_term() else {
            continue;
        };
        if q.o.is_literal() {
            continue;
        }
        let quad = |s: &Term, p: &Term, o: &Term| Quad::new(s.clone(), p.clone(), o.clone(), q.g.clone());

        out.push(quad(&q.s, &rdf_type, &concept));
        out.push(quad(&q.s, &narrower, &q.o));
        out.push(quad(&q.s, &in_scheme, scheme));
        out.push(quad(&q.o, &rdf_type, &concept));
        out.push(quad(&q.o, &broader, &q.s));
        out.push(quad(&q.o, &in_scheme, scheme));
    }
    out
}
