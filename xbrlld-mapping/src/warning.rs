//! Non-fatal conversion conditions

use crate::derive::DerivationDiagnostics;
use hashbrown::HashSet;
use std::fmt;
use xbrlld_graph_ir::Dataset;

/// A data-quality condition that did not stop the conversion
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConversionWarning {
    /// A link-role is used without a `link:roleType` declaration
    MissingRoleDefinition { role: String },

    /// The taxonomy uses `notAll`, which is mapped as if it were `all`
    NotAllArcrole { relationships: usize },

    /// A fact value did not parse under its declared item type
    UnparseableValue {
        concept: String,
        value: String,
        datatype: String,
    },

    /// A `decimals` or `precision` value is neither `INF` nor an integer
    UnparseableDecimals { concept: String, value: String },

    /// A relationship endpoint has no concept definition in the model
    UnknownConcept {
        qname: String,
        arcrole: String,
        linkrole: String,
    },
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::MissingRoleDefinition { role } => {
                write!(f, "role {} has no roleType definition; emitted without metadata", role)
            }
            ConversionWarning::NotAllArcrole { relationships } => write!(
                f,
                "This taxonomy uses a notAll arcrole ({} relationships). notAll arcroles have \
                 complex semantics which have not been fully considered in the conversion to RDF.",
                relationships
            ),
            ConversionWarning::UnparseableValue {
                concept,
                value,
                datatype,
            } => write!(
                f,
                "value '{}' of {} is not a valid {}; emitted as a plain literal",
                value, concept, datatype
            ),
            ConversionWarning::UnparseableDecimals { concept, value } => write!(
                f,
                "decimals/precision '{}' of {} is neither INF nor an integer; emitted as a plain literal",
                value, concept
            ),
            ConversionWarning::UnknownConcept {
                qname,
                arcrole,
                linkrole,
            } => write!(
                f,
                "concept {} used by {} in {} is not defined in the taxonomy",
                qname, arcrole, linkrole
            ),
        }
    }
}

/// Ordered, duplicate-free warning log
///
/// Each warning is also logged through `tracing` the first time it is seen.
#[derive(Clone, Debug, Default)]
pub struct Warnings {
    log: Vec<ConversionWarning>,
    seen: HashSet<ConversionWarning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: ConversionWarning) {
        if !self.seen.insert(warning.clone()) {
            return;
        }
        tracing::warn!("{}", warning);
        self.log.push(warning);
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConversionWarning> {
        self.log.iter()
    }

    pub fn into_vec(self) -> Vec<ConversionWarning> {
        self.log
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct Conversion {
    pub dataset: Dataset,
    pub warnings: Vec<ConversionWarning>,
    pub diagnostics: DerivationDiagnostics,
}
