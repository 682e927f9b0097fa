//! Taxonomy definitions: concepts, labels and role types

use crate::QName;
use serde::{Deserialize, Serialize};

/// A human-readable label attached to a concept
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label role URI (e.g. the standard label role)
    pub role: String,
    /// xml:lang of the label resource
    pub lang: String,
    pub text: String,
}

/// A concept (schema element) defined by a taxonomy
///
/// `qname.namespace` is the target namespace of the defining schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub qname: QName,

    /// `@id` of the element declaration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Declared datatype
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_qname: Option<QName>,

    /// Ancestor types the declared type derives from, nearest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub base_types: Vec<QName>,

    #[serde(rename = "abstract", default)]
    pub is_abstract: bool,

    #[serde(default)]
    pub nillable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution_group: Option<QName>,

    /// `instant` or `duration`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_type: Option<String>,

    /// `debit` or `credit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,

    /// Element referenced by `xbrldt:typedDomainRef`, for typed dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed_domain: Option<QName>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,
}

impl Concept {
    pub fn new(qname: QName) -> Self {
        Self {
            qname,
            id: None,
            type_qname: None,
            base_types: Vec::new(),
            is_abstract: false,
            nillable: false,
            substitution_group: None,
            period_type: None,
            balance: None,
            typed_domain: None,
            labels: Vec::new(),
        }
    }

    /// Check whether the concept's type is `item_type` or derives from it
    pub fn instance_of_type(&self, item_type: &QName) -> bool {
        self.type_qname.as_ref() == Some(item_type) || self.base_types.contains(item_type)
    }

    /// Label for an exact (role, language) pair; no fallback
    pub fn label(&self, role: &str, lang: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.role == role && l.lang == lang)
            .map(|l| l.text.as_str())
    }
}

/// A `link:roleType` declaration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleType {
    pub uri: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Target namespace of the schema declaring the role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,

    /// Elements (e.g. `link:presentationLink`) the role may be used on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub used_on: Vec<QName>,
}
