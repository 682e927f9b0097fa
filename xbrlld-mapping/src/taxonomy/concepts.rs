//! Concept and label extractors

use super::Pass;
use crate::uri::{concept_uri, normalize};
use crate::warning::ConversionWarning;
use std::collections::BTreeSet;
use xbrlld_graph_ir::Term;
use xbrlld_model::{Concept, QName};
use xbrlld_vocab::{foundation, owl, rdf, rdfs, role, xbrli, xbrll, xsd};

/// Emit every concept at either end of the current pass's relationships
///
/// Concepts owned by the XBRL foundation namespaces are skipped.
pub(super) fn add_concepts(pass: &mut Pass<'_, '_>) {
    let model = pass.scope.model;
    let endpoints: BTreeSet<&QName> = model
        .relationship_set(pass.arcrole, Some(pass.linkrole))
        .into_iter()
        .flat_map(|r| r.concepts())
        .collect();

    for qname in endpoints {
        if foundation::is_excluded(&qname.namespace) {
            continue;
        }
        match model.concept(qname) {
            Some(concept) => add_concept(pass, concept),
            None => {
                let warning = ConversionWarning::UnknownConcept {
                    qname: qname.to_string(),
                    arcrole: pass.arcrole.to_string(),
                    linkrole: pass.linkrole.to_string(),
                };
                pass.warn(warning);
            }
        }
    }
}

fn add_concept(pass: &mut Pass<'_, '_>, concept: &Concept) {
    let uri = concept_uri(&concept.qname);
    let c = Term::iri(&uri);

    // XLink to RDF: a locator's xlink:role types the located resource
    pass.add(&c, rdf::TYPE, Term::iri(pass.linkrole));

    pass.add(&c, owl::SAME_AS, Term::iri(normalize(&uri)));
    if let Some(id) = &concept.id {
        pass.add(&c, xsd::ID, Term::string(id));
    }
    pass.add(&c, rdfs::IS_DEFINED_BY, Term::iri(&concept.qname.namespace));
    pass.add(&c, rdf::TYPE, Term::iri(xbrll::CONCEPT_CLASS));
    if let Some(type_qname) = &concept.type_qname {
        pass.add(&c, rdf::TYPE, Term::iri(concept_uri(type_qname)));
    }

    pass.add(&c, xsd::ABSTRACT, Term::boolean(concept.is_abstract));
    pass.add(&c, xsd::NILLABLE, Term::boolean(concept.nillable));

    // Presence, not value: an absent group and a default one must stay distinct
    if let Some(group) = &concept.substitution_group {
        pass.add(&c, xsd::SUBSTITUTION_GROUP, Term::iri(concept_uri(group)));
    }
    if let Some(domain) = &concept.typed_domain {
        pass.add(&c, xbrli::TYPED_DOMAIN_REF, Term::iri(concept_uri(domain)));
    }
    if let Some(period_type) = &concept.period_type {
        pass.add(&c, xbrli::PERIOD_TYPE, Term::string(period_type));
    }
    if let Some(balance) = &concept.balance {
        pass.add(&c, xbrli::BALANCE, Term::string(balance));
    }

    add_labels(pass, &c, concept);
}

/// Emit a concept's label for every registered (label-role, language) pair
fn add_labels(pass: &mut Pass<'_, '_>, c: &Term, concept: &Concept) {
    let scope = pass.scope;
    for &label_role in &scope.label_roles {
        for &lang in &scope.languages {
            let Some(text) = concept.label(label_role, lang) else {
                continue;
            };
            pass.add(c, label_role, Term::lang_string(text, lang));
            if label_role == role::LABEL {
                pass.add(c, rdfs::LABEL, Term::lang_string(text, lang));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Pass, TaxonomyScope};
    use super::*;
    use crate::options::ConverterOptions;
    use crate::warning::Warnings;
    use xbrlld_graph_ir::{Dataset, GraphName};
    use xbrlld_model::{DocumentType, Label, Relationship, Target, XbrlModel};
    use xbrlld_vocab::{arcrole, link, xbrldt};

    const NS: &str = "http://ex.org/2024";
    const ROLE: &str = "http://ex.org/role/balance";

    fn model() -> XbrlModel {
        let mut model = XbrlModel::new("tax.xsd", DocumentType::Schema);
        let mut assets = Concept::new(QName::new(NS, "Assets"));
        assets.id = Some("ex_Assets".into());
        assets.type_qname = Some(QName::new(xbrli::NS, "monetaryItemType"));
        assets.substitution_group = Some(QName::new(xbrli::NS, "item"));
        assets.period_type = Some("instant".into());
        assets.balance = Some("debit".into());
        assets.labels = vec![
            Label {
                role: role::LABEL.into(),
                lang: "en".into(),
                text: "Assets".into(),
            },
            Label {
                role: "http://www.xbrl.org/2003/role/terseLabel".into(),
                lang: "en".into(),
                text: "Assets, total".into(),
            },
        ];
        let mut sheet = Concept::new(QName::new(NS, "BalanceSheet"));
        sheet.is_abstract = true;
        model.add_concept(assets).add_concept(sheet);

        for (from, to) in [
            (QName::new(NS, "BalanceSheet"), QName::new(NS, "Assets")),
            (QName::new(NS, "BalanceSheet"), QName::new(NS, "Missing")),
            (QName::new(NS, "BalanceSheet"), QName::new(xbrldt::NS, "hypercubeItem")),
        ] {
            model.add_relationship(Relationship {
                from,
                to: Target::Concept(to),
                arcrole: arcrole::PARENT_CHILD.into(),
                linkrole: ROLE.into(),
                order: 1.0,
                preferred_label: None,
                link: QName::new(link::NS, "presentationLink"),
            });
        }
        model
    }

    fn run(model: &XbrlModel) -> (Dataset, Warnings) {
        let options = ConverterOptions::default();
        let scope = TaxonomyScope::new(model, &options);
        let mut dataset = Dataset::new();
        let mut warnings = Warnings::new();
        let mut pass = Pass::new(&scope, arcrole::PARENT_CHILD, ROLE, &mut dataset, &mut warnings);
        add_concepts(&mut pass);
        (dataset, warnings)
    }

    #[test]
    fn test_concept_triples() {
        let (ds, _) = run(&model());
        let g = GraphName::iri(ROLE);
        let assets = Term::iri("http://ex.org/2024#Assets");

        let has = |p: &str, o: Term| ds.contains(&assets, &Term::iri(p), &o, &g);

        assert!(has(rdf::TYPE, Term::iri(ROLE)));
        assert!(has(rdf::TYPE, Term::iri(xbrll::CONCEPT_CLASS)));
        assert!(has(
            rdf::TYPE,
            Term::iri("http://www.xbrl.org/2003/instance#monetaryItemType")
        ));
        assert!(has(owl::SAME_AS, Term::iri("http://ex.org#Assets")));
        assert!(has(xsd::ID, Term::string("ex_Assets")));
        assert!(has(rdfs::IS_DEFINED_BY, Term::iri(NS)));
        assert!(has(xsd::ABSTRACT, Term::boolean(false)));
        assert!(has(xsd::NILLABLE, Term::boolean(false)));
        assert!(has(
            xsd::SUBSTITUTION_GROUP,
            Term::iri("http://www.xbrl.org/2003/instance#item")
        ));
        assert!(has(xbrli::PERIOD_TYPE, Term::string("instant")));
        assert!(has(xbrli::BALANCE, Term::string("debit")));
        assert!(has(role::LABEL, Term::lang_string("Assets", "en")));
        assert!(has(rdfs::LABEL, Term::lang_string("Assets", "en")));
        assert!(has(
            "http://www.xbrl.org/2003/role/terseLabel",
            Term::lang_string("Assets, total", "en")
        ));
        // Terse labels are not copied to rdfs:label
        assert!(!has(rdfs::LABEL, Term::lang_string("Assets, total", "en")));
    }

    #[test]
    fn test_abstract_flag_and_no_optional_triples() {
        let (ds, _) = run(&model());
        let g = GraphName::iri(ROLE);
        let sheet = Term::iri("http://ex.org/2024#BalanceSheet");
        assert!(ds.contains(&sheet, &Term::iri(xsd::ABSTRACT), &Term::boolean(true), &g));
        assert_eq!(
            ds.quads_matching(Some(&sheet), Some(&Term::iri(xsd::SUBSTITUTION_GROUP)), None, None)
                .count(),
            0
        );
        assert_eq!(
            ds.quads_matching(Some(&sheet), Some(&Term::iri(rdfs::LABEL)), None, None)
                .count(),
            0
        );
    }

    #[test]
    fn test_foundation_and_unknown_concepts() {
        let (ds, warnings) = run(&model());
        let hypercube_item = Term::iri("http://xbrl.org/2005/xbrldt#hypercubeItem");
        assert_eq!(ds.quads_matching(Some(&hypercube_item), None, None, None).count(), 0);

        let unknown: Vec<_> = warnings
            .iter()
            .filter(|w| matches!(w, ConversionWarning::UnknownConcept { .. }))
            .collect();
        assert_eq!(unknown.len(), 1);
    }
}
