//! Relationships (arcs) between concepts and resources

use crate::QName;
use serde::{Deserialize, Serialize};

/// A label or reference resource at the end of a qualified arc
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource element name (e.g. `link:label`, `link:reference`)
    pub element: QName,

    /// xlink:role of the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Text content as displayed
    #[serde(default)]
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// The `to` end of a relationship
///
/// In JSON a concept target is a Clark-notation string and a resource target
/// is an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    Concept(QName),
    Resource(Resource),
}

impl Target {
    pub fn as_concept(&self) -> Option<&QName> {
        match self {
            Target::Concept(q) => Some(q),
            Target::Resource(_) => None,
        }
    }

    pub fn as_resource(&self) -> Option<&Resource> {
        match self {
            Target::Concept(_) => None,
            Target::Resource(r) => Some(r),
        }
    }
}

/// A typed arc: (from, to, arc-role, link-role) plus arc metadata
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub from: QName,
    pub to: Target,
    pub arcrole: String,
    pub linkrole: String,

    /// Arc order; ties between siblings are legal
    #[serde(default = "default_order")]
    pub order: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_label: Option<String>,

    /// Extended-link element containing the arc (e.g. `link:presentationLink`)
    pub link: QName,
}

fn default_order() -> f64 {
    1.0
}

impl Relationship {
    /// Concepts at either end (the `to` end only when it is a concept)
    pub fn concepts(&self) -> impl Iterator<Item = &QName> {
        std::iter::once(&self.from).chain(self.to.as_concept())
    }
}
