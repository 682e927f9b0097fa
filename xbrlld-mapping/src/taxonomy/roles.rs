//! Role extractor

use super::Pass;
use crate::uri::concept_uri;
use crate::warning::ConversionWarning;
use xbrlld_graph_ir::Term;
use xbrlld_vocab::{link, rdf, rdfs, role, xbrll, xsd};

/// Emit the link-role of the current pass as an `xbrll:Role`
///
/// A role with no `link:roleType` declaration gets its class triples only
/// and a warning. The standard extended-link role needs no declaration.
pub(super) fn add_role(pass: &mut Pass<'_, '_>) {
    let role_uri = Term::iri(pass.linkrole);

    // XLink to RDF: the value of xlink:role is an rdfs:Class
    pass.add(&role_uri, rdf::TYPE, Term::iri(rdfs::CLASS));
    pass.add(&role_uri, rdf::TYPE, Term::iri(xbrll::ROLE));

    let Some(role_type) = pass.scope.model.role_type(pass.linkrole) else {
        if pass.linkrole != role::LINK {
            let role = pass.linkrole.to_string();
            pass.warn(ConversionWarning::MissingRoleDefinition { role });
        }
        return;
    };

    if let Some(id) = &role_type.id {
        pass.add(&role_uri, xsd::ID, Term::string(id));
    }
    if let Some(namespace) = &role_type.namespace {
        pass.add(&role_uri, rdfs::IS_DEFINED_BY, Term::iri(namespace));
    }
    if let Some(definition) = &role_type.definition {
        let lang = pass.scope.options.language.as_str();
        pass.add(&role_uri, link::DEFINITION, Term::lang_string(definition, lang));
    }
    for element in &role_type.used_on {
        pass.add(&role_uri, link::USED_ON, Term::iri(concept_uri(element)));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Pass, TaxonomyScope};
    use super::*;
    use crate::options::ConverterOptions;
    use crate::warning::Warnings;
    use xbrlld_graph_ir::{Dataset, GraphName};
    use xbrlld_model::{DocumentType, QName, RoleType, XbrlModel};

    const ROLE: &str = "http://ex.org/role/balance";

    fn run(model: &XbrlModel, linkrole: &str) -> (Dataset, Warnings) {
        let options = ConverterOptions::default().with_language("cy");
        let scope = TaxonomyScope::new(model, &options);
        let mut dataset = Dataset::new();
        let mut warnings = Warnings::new();
        let mut pass = Pass::new(
            &scope,
            xbrlld_vocab::arcrole::PARENT_CHILD,
            linkrole,
            &mut dataset,
            &mut warnings,
        );
        add_role(&mut pass);
        (dataset, warnings)
    }

    #[test]
    fn test_declared_role() {
        let mut model = XbrlModel::new("tax.xsd", DocumentType::Schema);
        model.add_role_type(RoleType {
            uri: ROLE.to_string(),
            id: Some("balance".to_string()),
            namespace: Some("http://ex.org/t".to_string()),
            definition: Some("Mantolen".to_string()),
            used_on: vec![QName::new(link::NS, "presentationLink")],
        });

        let (dataset, warnings) = run(&model, ROLE);
        let g = GraphName::iri(ROLE);
        let role = Term::iri(ROLE);

        assert!(warnings.is_empty());
        assert!(dataset.contains(&role, &Term::iri(rdf::TYPE), &Term::iri(xbrll::ROLE), &g));
        assert!(dataset.contains(
            &role,
            &Term::iri(link::DEFINITION),
            &Term::lang_string("Mantolen", "cy"),
            &g
        ));
        assert!(dataset.contains(
            &role,
            &Term::iri(link::USED_ON),
            &Term::iri("http://www.xbrl.org/2003/linkbase#presentationLink"),
            &g
        ));
        assert_eq!(dataset.len(), 6);
    }

    #[test]
    fn test_undeclared_role_warns() {
        let model = XbrlModel::new("tax.xsd", DocumentType::Schema);
        let (dataset, warnings) = run(&model, ROLE);
        assert_eq!(dataset.len(), 2);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_standard_link_role_needs_no_declaration() {
        let model = XbrlModel::new("tax.xsd", DocumentType::Schema);
        let (dataset, warnings) = run(&model, role::LINK);
        assert_eq!(dataset.len(), 2);
        assert!(warnings.is_empty());
    }
}
