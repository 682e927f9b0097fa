//! Qualified names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An XML qualified name: namespace URI plus local name
///
/// Serialized in Clark notation, `{namespace}localName`, which is how the
/// JSON model files spell every element and type reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QName {
    pub namespace: String,
    pub local_name: String,
}

impl QName {
    pub fn new(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local_name: local_name.into(),
        }
    }

    /// Clark notation: `{namespace}localName`
    pub fn clark(&self) -> String {
        format!("{{{}}}{}", self.namespace, self.local_name)
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.local_name)
    }
}

impl FromStr for QName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('{')
            .ok_or_else(|| format!("expected Clark notation {{namespace}}local, got '{}'", s))?;
        let (namespace, local) = rest
            .split_once('}')
            .ok_or_else(|| format!("unterminated namespace in '{}'", s))?;
        if local.is_empty() {
            return Err(format!("empty local name in '{}'", s));
        }
        Ok(QName::new(namespace, local))
    }
}

impl TryFrom<String> for QName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QName> for String {
    fn from(value: QName) -> Self {
        value.clark()
    }
}
