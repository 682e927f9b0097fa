//! The navigable XBRL model of one loaded document and its DTS

use crate::{Concept, Context, Fact, QName, Relationship, RoleType, Unit};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Kind of the entry-point document
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Schema,
    Linkbase,
    Instance,
    InlineXbrl,
    Unknown,
}

impl DocumentType {
    pub fn is_taxonomy(self) -> bool {
        matches!(self, DocumentType::Schema | DocumentType::Linkbase)
    }

    pub fn is_instance(self) -> bool {
        matches!(self, DocumentType::Instance | DocumentType::InlineXbrl)
    }
}

/// A document referenced (imported, linked) by the entry point
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub uri: String,
    pub document_type: DocumentType,
}

/// Serialized shape of a model; relationships and lookups are indexed on load
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct ModelDocument {
    uri: String,
    document_type: Option<DocumentType>,
    #[serde(default)]
    concepts: Vec<Concept>,
    #[serde(default)]
    role_types: Vec<RoleType>,
    #[serde(default)]
    arcrole_types: Vec<String>,
    #[serde(default)]
    relationships: Vec<Relationship>,
    #[serde(default)]
    facts: Vec<Fact>,
    #[serde(default)]
    contexts: BTreeMap<String, Context>,
    #[serde(default)]
    units: BTreeMap<String, Unit>,
    #[serde(default)]
    referenced_documents: Vec<DocumentReference>,
}

/// A loaded XBRL document with everything discovered from it
///
/// The model is read-only to the mapping engine. It is assembled either
/// through the `add_*` methods or by deserializing JSON.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "ModelDocument", into = "ModelDocument")]
pub struct XbrlModel {
    pub uri: String,
    pub document_type: DocumentType,

    /// Concepts keyed by qualified name
    concepts: BTreeMap<QName, Concept>,

    /// Role types keyed by role URI (first declaration wins)
    role_types: BTreeMap<String, RoleType>,

    /// Arc-roles declared by `link:arcroleType`
    arcrole_types: BTreeSet<String>,

    relationships: Vec<Relationship>,

    /// Index: arc-role → positions in `relationships`
    by_arcrole: BTreeMap<String, Vec<usize>>,

    facts: Vec<Fact>,
    contexts: BTreeMap<String, Context>,
    units: BTreeMap<String, Unit>,
    referenced_documents: Vec<DocumentReference>,
}

impl XbrlModel {
    /// Create an empty model for a document
    pub fn new(uri: impl Into<String>, document_type: DocumentType) -> Self {
        Self {
            uri: uri.into(),
            document_type,
            concepts: BTreeMap::new(),
            role_types: BTreeMap::new(),
            arcrole_types: BTreeSet::new(),
            relationships: Vec::new(),
            by_arcrole: BTreeMap::new(),
            facts: Vec::new(),
            contexts: BTreeMap::new(),
            units: BTreeMap::new(),
            referenced_documents: Vec::new(),
        }
    }

    // === Building ===

    pub fn add_concept(&mut self, concept: Concept) -> &mut Self {
        self.concepts.insert(concept.qname.clone(), concept);
        self
    }

    pub fn add_role_type(&mut self, role_type: RoleType) -> &mut Self {
        self.role_types
            .entry(role_type.uri.clone())
            .or_insert(role_type);
        self
    }

    pub fn add_arcrole_type(&mut self, arcrole: impl Into<String>) -> &mut Self {
        self.arcrole_types.insert(arcrole.into());
        self
    }

    pub fn add_relationship(&mut self, relationship: Relationship) -> &mut Self {
        self.by_arcrole
            .entry(relationship.arcrole.clone())
            .or_default()
            .push(self.relationships.len());
        self.relationships.push(relationship);
        self
    }

    pub fn add_fact(&mut self, fact: Fact) -> &mut Self {
        self.facts.push(fact);
        self
    }

    pub fn add_context(&mut self, id: impl Into<String>, context: Context) -> &mut Self {
        self.contexts.insert(id.into(), context);
        self
    }

    pub fn add_unit(&mut self, id: impl Into<String>, unit: Unit) -> &mut Self {
        self.units.insert(id.into(), unit);
        self
    }

    pub fn add_reference(
        &mut self,
        uri: impl Into<String>,
        document_type: DocumentType,
    ) -> &mut Self {
        self.referenced_documents.push(DocumentReference {
            uri: uri.into(),
            document_type,
        });
        self
    }

    // === Taxonomy accessors ===

    pub fn concept(&self, qname: &QName) -> Option<&Concept> {
        self.concepts.get(qname)
    }

    pub fn concepts(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.values()
    }

    pub fn role_type(&self, uri: &str) -> Option<&RoleType> {
        self.role_types.get(uri)
    }

    pub fn arcrole_types(&self) -> impl Iterator<Item = &str> {
        self.arcrole_types.iter().map(String::as_str)
    }

    /// Relationships with the given arc-role, optionally restricted to one link-role
    pub fn relationship_set(&self, arcrole: &str, linkrole: Option<&str>) -> Vec<&Relationship> {
        self.by_arcrole
            .get(arcrole)
            .map(|positions| {
                positions
                    .iter()
                    .map(|&i| &self.relationships[i])
                    .filter(|r| linkrole.map_or(true, |lr| r.linkrole == lr))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Link-roles having at least one relationship under `arcrole`, sorted
    pub fn link_roles(&self, arcrole: &str) -> BTreeSet<&str> {
        self.relationship_set(arcrole, None)
            .into_iter()
            .map(|r| r.linkrole.as_str())
            .collect()
    }

    /// Every label role used by any concept label
    pub fn label_roles(&self) -> BTreeSet<&str> {
        self.concepts
            .values()
            .flat_map(|c| c.labels.iter().map(|l| l.role.as_str()))
            .collect()
    }

    /// Every label language used by any concept label
    pub fn languages(&self) -> BTreeSet<&str> {
        self.concepts
            .values()
            .flat_map(|c| c.labels.iter().map(|l| l.lang.as_str()))
            .collect()
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    // === Instance accessors ===

    /// All facts as reported, duplicates included
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Facts with complete duplicates removed, in document order
    ///
    /// Two facts are complete duplicates when concept, context, unit, value,
    /// decimals and precision are all equal.
    pub fn canonical_facts(&self) -> Vec<&Fact> {
        let mut seen = HashSet::new();
        self.facts.iter().filter(|f| seen.insert(*f)).collect()
    }

    pub fn context(&self, id: &str) -> Option<&Context> {
        self.contexts.get(id)
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    pub fn referenced_documents(&self) -> &[DocumentReference] {
        &self.referenced_documents
    }
}

impl From<ModelDocument> for XbrlModel {
    fn from(doc: ModelDocument) -> Self {
        let mut model = XbrlModel::new(doc.uri, doc.document_type.unwrap_or(DocumentType::Unknown));
        for concept in doc.concepts {
            model.add_concept(concept);
        }
        for role_type in doc.role_types {
            model.add_role_type(role_type);
        }
        for arcrole in doc.arcrole_types {
            model.add_arcrole_type(arcrole);
        }
        for relationship in doc.relationships {
            model.add_relationship(relationship);
        }
        model.facts = doc.facts;
        model.contexts = doc.contexts;
        model.units = doc.units;
        model.referenced_documents = doc.referenced_documents;
        model
    }
}

impl From<XbrlModel> for ModelDocument {
    fn from(model: XbrlModel) -> Self {
        ModelDocument {
            uri: model.uri,
            document_type: Some(model.document_type),
            concepts: model.concepts.into_values().collect(),
            role_types: model.role_types.into_values().collect(),
            arcrole_types: model.arcrole_types.into_iter().collect(),
            relationships: model.relationships,
            facts: model.facts,
            contexts: model.contexts,
            units: model.units,
            referenced_documents: model.referenced_documents,
        }
    }
}
