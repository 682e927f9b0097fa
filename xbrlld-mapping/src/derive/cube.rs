//! RDF Data Cube structure rules
//!
//! A hypercube reached by an `all` arc from a primary item becomes a
//! `qb:DataSet`. Its structure definition gains a measure component for every
//! domain member of the primary item, a dimension component for every
//! hypercube dimension, and the fixed components every XBRL fact carries.

use super::index::QuadIndex;
use std::collections::BTreeSet;
use xbrlld_graph_ir::{Dataset, GraphName, Quad, Term};
use xbrlld_vocab::{dim_arcrole, qb, rdf, skos, xbrll};

pub(super) const MEASURE_RULE: &str = "qb-measure";
pub(super) const DIMENSION_RULE: &str = "qb-dimension";
pub(super) const FIXED_COMPONENTS_RULE: &str = "qb-fixed-components";

/// Components present on every structure definition: (component role, property, property class)
const FIXED_COMPONENTS: [(&str, &str, &str); 6] = [
    (qb::DIMENSION, qb::MEASURE_TYPE, qb::DIMENSION_PROPERTY),
    (qb::DIMENSION, xbrll::CONCEPT, qb::DIMENSION_PROPERTY),
    (qb::DIMENSION, xbrll::HAS_ENTITY, qb::DIMENSION_PROPERTY),
    (qb::DIMENSION, xbrll::PERIOD, qb::DIMENSION_PROPERTY),
    (qb::ATTRIBUTE, xbrll::UNIT_REF, qb::ATTRIBUTE_PROPERTY),
    (qb::ATTRIBUTE, xbrll::DECIMALS, qb::ATTRIBUTE_PROPERTY),
];

fn graph_key(g: &GraphName) -> String {
    g.as_term().map(Term::to_string).unwrap_or_default()
}

/// Structure definition node of `hypercube` within graph `g`
fn structure_node(dataset: &Dataset, g: &GraphName, hypercube: &Term) -> Term {
    dataset.skolem_blank(&["dsd", &graph_key(g), &hypercube.to_string()])
}

/// Component node of `structure` binding `property` under `role`
fn component_node(dataset: &Dataset, structure: &Term, role: &str, property: &Term) -> Term {
    dataset.skolem_blank(&["component", &structure.to_string(), role, &property.to_string()])
}

/// Collects derived quads for one rule
struct Out<'a> {
    dataset: &'a Dataset,
    quads: Vec<Quad>,
}

impl<'a> Out<'a> {
    fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            quads: Vec::new(),
        }
    }

    fn push(&mut self, s: &Term, p: &str, o: &Term, g: &GraphName) {
        self.quads
            .push(Quad::new(s.clone(), Term::iri(p), o.clone(), g.clone()));
    }

    /// Add `structure qb:component [ role property ]` to graph `g`
    fn component(&mut self, structure: &Term, role: &str, property: &Term, g: &GraphName) {
        let component = component_node(self.dataset, structure, role, property);
        self.push(structure, qb::COMPONENT, &component, g);
        self.push(&component, role, property, g);
    }
}

/// `(graph, primary item, hypercube)` for every `all` arc in a named graph
fn all_arcs<'a>(index: &QuadIndex<'a>) -> Vec<(&'a GraphName, &'a Term, &'a Term)> {
    let all = Term::iri(dim_arcrole::ALL);
    index
        .by_p(&all)
        .filter(|q| !q.g.is_default() && !q.o.is_literal())
        .map(|q| (&q.g, &q.s, &q.o))
        .collect()
}

/// `(graph, hypercube, structure)` for every hypercube with a structure
/// definition that is reached by an `all` arc in the same graph
fn structured_hypercubes<'a>(index: &QuadIndex<'a>) -> BTreeSet<(&'a GraphName, &'a Term, &'a Term)> {
    let structure = Term::iri(qb::STRUCTURE);
    let mut out = BTreeSet::new();
    for (g, _, hypercube) in all_arcs(index) {
        for dsd in index.objects(hypercube, &structure, g) {
            out.insert((g, hypercube, dsd));
        }
    }
    out
}

pub(super) fn measure_structures(dataset: &Dataset) -> Vec<Quad> {
    let index = QuadIndex::new(dataset);
    let domain_member = Term::iri(dim_arcrole::DOMAIN_MEMBER);
    let mut out = Out::new(dataset);

    for (g, primary_item, hypercube) in all_arcs(&index) {
        let measures = index.objects(primary_item, &domain_member, g);
        if measures.is_empty() {
            continue;
        }
        let dsd = structure_node(dataset, g, hypercube);
        out.push(hypercube, rdf::TYPE, &Term::iri(qb::DATA_SET), g);
        out.push(hypercube, qb::STRUCTURE, &dsd, g);
        out.push(&dsd, rdf::TYPE, &Term::iri(qb::DATA_STRUCTURE_DEFINITION), g);
        for measure in measures {
            out.component(&dsd, qb::MEASURE, measure, g);
            out.push(measure, rdf::TYPE, &Term::iri(qb::MEASURE_PROPERTY), &GraphName::Default);
        }
    }
    out.quads
}

pub(super) fn dimension_components(dataset: &Dataset) -> Vec<Quad> {
    let index = QuadIndex::new(dataset);
    let hypercube_dimension = Term::iri(dim_arcrole::HYPERCUBE_DIMENSION);
    let dimension_domain = Term::iri(dim_arcrole::DIMENSION_DOMAIN);
    let mut out = Out::new(dataset);

    for (g, hypercube, dsd) in structured_hypercubes(&index) {
        for dimension in index.objects(hypercube, &hypercube_dimension, g) {
            out.component(dsd, qb::DIMENSION, dimension, g);
            out.push(dimension, rdf::TYPE, &Term::iri(qb::DIMENSION_PROPERTY), &GraphName::Default);

            // The domain may be declared in any link-role
            for q in index.by_ps(&dimension_domain, dimension) {
                out.push(dimension, qb::CODE_LIST, &q.o, &GraphName::Default);
                out.push(&q.o, rdf::TYPE, &Term::iri(skos::CONCEPT_SCHEME), &GraphName::Default);
            }
        }
    }
    out.quads
}

pub(super) fn fixed_components(dataset: &Dataset) -> Vec<Quad> {
    let index = QuadIndex::new(dataset);
    let mut out = Out::new(dataset);
    let structures: BTreeSet<(&GraphName, &Term)> = structured_hypercubes(&index)
        .into_iter()
        .map(|(g, _, dsd)| (g, dsd))
        .collect();

    for (g, dsd) in structures {
        for (role, property, class) in FIXED_COMPONENTS {
            let property = Term::iri(property);
            out.component(dsd, role, &property, g);
            out.push(&property, rdf::TYPE, &Term::iri(class), &GraphName::Default);
        }
    }
    out.quads
}
