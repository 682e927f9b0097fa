//! Taxonomy pipeline: roles, concepts, labels and relationships
//!
//! The pipeline runs one pass per (arc-role, link-role) pair. Every triple a
//! pass emits lands in the named graph of its link-role.

mod concepts;
mod relationships;
mod roles;

use crate::options::ConverterOptions;
use crate::warning::{ConversionWarning, Warnings};
use std::collections::BTreeSet;
use xbrlld_graph_ir::{Dataset, GraphName, Term};
use xbrlld_model::XbrlModel;
use xbrlld_vocab::{arcrole, dim_arcrole};

/// Taxonomy-wide lookups computed once per conversion
pub(crate) struct TaxonomyScope<'a> {
    pub model: &'a XbrlModel,
    pub options: &'a ConverterOptions,
    /// Every label role registered in the taxonomy
    pub label_roles: Vec<&'a str>,
    /// Every label language registered in the taxonomy
    pub languages: Vec<&'a str>,
}

impl<'a> TaxonomyScope<'a> {
    pub fn new(model: &'a XbrlModel, options: &'a ConverterOptions) -> Self {
        Self {
            model,
            options,
            label_roles: model.label_roles().into_iter().collect(),
            languages: model.languages().into_iter().collect(),
        }
    }
}

/// One (arc-role, link-role) pass writing into the link-role's graph
pub(crate) struct Pass<'s, 'd> {
    pub scope: &'s TaxonomyScope<'s>,
    pub arcrole: &'s str,
    pub linkrole: &'s str,
    pub graph: GraphName,
    dataset: &'d mut Dataset,
    warnings: &'d mut Warnings,
}

impl<'s, 'd> Pass<'s, 'd> {
    pub fn new(
        scope: &'s TaxonomyScope<'s>,
        arcrole: &'s str,
        linkrole: &'s str,
        dataset: &'d mut Dataset,
        warnings: &'d mut Warnings,
    ) -> Self {
        Self {
            scope,
            arcrole,
            linkrole,
            graph: GraphName::iri(linkrole),
            dataset,
            warnings,
        }
    }

    /// Insert `(s, p, o)` into this pass's graph
    pub fn add(&mut self, s: &Term, p: &str, o: Term) {
        self.dataset.insert(s.clone(), Term::iri(p), o, self.graph.clone());
    }

    pub fn fresh_blank(&mut self) -> Term {
        self.dataset.fresh_blank()
    }

    pub fn warn(&mut self, warning: ConversionWarning) {
        self.warnings.push(warning);
    }
}

/// Arc-roles considered for a taxonomy, sorted
fn arcroles(model: &XbrlModel) -> BTreeSet<&str> {
    arcrole::STANDARD
        .iter()
        .chain(dim_arcrole::ALL_ARCROLES.iter())
        .copied()
        .chain(model.arcrole_types())
        .collect()
}

/// Run every (arc-role, link-role) pass of a taxonomy model
///
/// Derivation is not part of this function; callers run it over the whole
/// dataset afterwards.
pub(crate) fn extract(
    model: &XbrlModel,
    options: &ConverterOptions,
    dataset: &mut Dataset,
    warnings: &mut Warnings,
) {
    let scope = TaxonomyScope::new(model, options);

    let not_all = model.relationship_set(dim_arcrole::NOT_ALL, None).len();
    if not_all > 0 {
        warnings.push(ConversionWarning::NotAllArcrole {
            relationships: not_all,
        });
    }

    for arcrole in arcroles(model) {
        for linkrole in model.link_roles(arcrole) {
            tracing::debug!(arcrole, linkrole, "taxonomy pass");
            let mut pass = Pass::new(&scope, arcrole, linkrole, dataset, warnings);
            roles::add_role(&mut pass);
            concepts::add_concepts(&mut pass);
            relationships::add_relationships(&mut pass);
        }
    }
}
