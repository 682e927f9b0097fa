//! Observation rule
//!
//! Every fact with a concept and a value is also a `qb:Observation`:
//! `fact a qb:Observation; qb:measureType concept; concept value`.

use super::index::QuadIndex;
use xbrlld_graph_ir::{Dataset, Quad, Term};
use xbrlld_vocab::{qb, rdf, xbrll};

pub(super) const RULE: &str = "qb-observation";

pub(super) fn observations(dataset: &Dataset) -> Vec<Quad> {
    let rdf_type = Term::iri(rdf::TYPE);
    let fact_class = Term::iri(xbrll::FACT);
    let concept_p = Term::iri(xbrll::CONCEPT);
    let value_p = Term::iri(xbrll::VALUE);
    let observation = Term::iri(qb::OBSERVATION);
    let measure_type = Term::iri(qb::MEASURE_TYPE);

    let index = QuadIndex::new(dataset);
    let mut out = Vec::new();
    for typed in index.by_po(&rdf_type, &fact_class) {
        let (fact, g) = (&typed.s, &typed.g);
        let values = index.objects(fact, &value_p, g);
        if values.is_empty() {
            continue;
        }
        for concept in index.by_ps(&concept_p, fact).filter(|q| &q.g == g) {
            // The concept becomes a predicate
            if !concept.o.is_iri() {
                continue;
            }
            out.push(Quad::new(fact.clone(), rdf_type.clone(), observation.clone(), g.clone()));
            out.push(Quad::new(fact.clone(), measure_type.clone(), concept.o.clone(), g.clone()));
            for value in &values {
                out.push(Quad::new(fact.clone(), concept.o.clone(), (*value).clone(), g.clone()));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use xbrlld_graph_ir::GraphName;

    fn fact(ds: &mut Dataset, concept: &str, value: Option<Term>) -> Term {
        let f = ds.fresh_blank();
        let g = GraphName::Default;
        ds.insert(f.clone(), Term::iri(rdf::TYPE), Term::iri(xbrll::FACT), g.clone());
        ds.insert(f.clone(), Term::iri(xbrll::CONCEPT), Term::iri(concept), g.clone());
        if let Some(v) = value {
            ds.insert(f.clone(), Term::iri(xbrll::VALUE), v, g);
        }
        f
    }

    #[test]
    fn test_fact_becomes_observation() {
        let mut ds = Dataset::new();
        let assets = "http://ex.org/t#Assets";
        let f = fact(&mut ds, assets, Some(Term::decimal("100")));
        let quads = observations(&ds);
        ds.extend(quads);
        let g = GraphName::Default;

        assert!(ds.contains(&f, &Term::iri(rdf::TYPE), &Term::iri(qb::OBSERVATION), &g));
        assert!(ds.contains(&f, &Term::iri(qb::MEASURE_TYPE), &Term::iri(assets), &g));
        assert!(ds.contains(&f, &Term::iri(assets), &Term::decimal("100"), &g));
    }

    #[test]
    fn test_nil_fact_is_not_an_observation() {
        let mut ds = Dataset::new();
        fact(&mut ds, "http://ex.org/t#Assets", None);
        assert!(observations(&ds).is_empty());
    }
}
