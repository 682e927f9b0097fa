//! Relationship extractor
//!
//! Each arc becomes a direct `from <arcrole> to` triple plus a qualified arc
//! resource carrying the arc metadata. Label and reference resources are
//! qualified too, since their values are structured.

use super::Pass;
use crate::uri::concept_uri;
use xbrlld_graph_ir::Term;
use xbrlld_model::{Relationship, Resource, Target};
use xbrlld_vocab::{dim_arcrole, link, rdf, xbrll, xlink};

/// Structural tags by arc-role: (arc-role, tag for FROM, tag for TO)
const STRUCTURAL_TAGS: [(&str, Option<&str>, Option<&str>); 6] = [
    (dim_arcrole::ALL, Some(xbrll::PRIMARY_ITEM), Some(xbrll::HYPERCUBE)),
    (dim_arcrole::NOT_ALL, Some(xbrll::PRIMARY_ITEM), Some(xbrll::HYPERCUBE)),
    (dim_arcrole::HYPERCUBE_DIMENSION, None, Some(xbrll::DIMENSION)),
    (dim_arcrole::DIMENSION_DOMAIN, None, Some(xbrll::DIMENSION_DOMAIN)),
    (dim_arcrole::DIMENSION_DEFAULT, None, Some(xbrll::DIMENSION_DEFAULT)),
    (dim_arcrole::DOMAIN_MEMBER, None, Some(xbrll::DOMAIN_MEMBER)),
];

/// Tags applied to the ends of an arc with the given arc-role
fn structural_tags(arcrole: &str) -> (Option<&'static str>, Option<&'static str>) {
    STRUCTURAL_TAGS
        .iter()
        .find(|(a, _, _)| *a == arcrole)
        .map_or((None, None), |&(_, from, to)| (from, to))
}

pub(super) fn add_relationships(pass: &mut Pass<'_, '_>) {
    let model = pass.scope.model;
    let arcrole = pass.arcrole;
    let relationships = model.relationship_set(arcrole, Some(pass.linkrole));
    let (from_tag, to_tag) = structural_tags(arcrole);

    for rel in relationships {
        let from = Term::iri(concept_uri(&rel.from));
        let to = match &rel.to {
            Target::Concept(qname) => Term::iri(concept_uri(qname)),
            Target::Resource(resource) => add_qualified_resource(pass, resource),
        };
        pass.add(&from, arcrole, to.clone());
        add_qualified_arc(pass, rel, &from, &to);

        if let Some(tag) = from_tag {
            pass.add(&from, rdf::TYPE, Term::iri(tag));
        }
        if let (Some(tag), Target::Concept(_)) = (to_tag, &rel.to) {
            pass.add(&to, rdf::TYPE, Term::iri(tag));
        }
    }
}

/// Anonymous resource standing for a label or reference
fn add_qualified_resource(pass: &mut Pass<'_, '_>, resource: &Resource) -> Term {
    let node = pass.fresh_blank();
    pass.add(&node, rdf::TYPE, Term::iri(concept_uri(&resource.element)));
    if let Some(role) = &resource.role {
        pass.add(&node, xlink::ROLE, Term::iri(role));
    }
    let text = resource.text.trim();
    let value = match &resource.lang {
        Some(lang) => Term::lang_string(text, lang),
        None => Term::string(text),
    };
    pass.add(&node, rdf::VALUE, value);
    node
}

/// Anonymous resource carrying the arc's link element, ends, order and
/// preferred label
fn add_qualified_arc(pass: &mut Pass<'_, '_>, rel: &Relationship, from: &Term, to: &Term) {
    let arc = pass.fresh_blank();
    let arcrole = pass.arcrole;
    pass.add(&arc, rdf::TYPE, Term::iri(concept_uri(&rel.link)));
    pass.add(&arc, xlink::ARCROLE, Term::iri(arcrole));
    pass.add(&arc, xlink::FROM, from.clone());
    pass.add(&arc, xlink::TO, to.clone());
    pass.add(&arc, link::ORDER, Term::decimal(decimal_lexical(rel.order)));
    if let Some(preferred) = &rel.preferred_label {
        pass.add(&arc, xlink::PREFERRED_LABEL, Term::iri(preferred));
    }
}

/// xsd:decimal lexical form of an arc order
pub(crate) fn decimal_lexical(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
