//! Instance document content: facts, contexts and units

use crate::QName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reported fact
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fact {
    pub concept: QName,

    /// Lexical value; `None` when the fact is nil
    #[serde(default)]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_ref: Option<String>,
}

impl Fact {
    pub fn is_nil(&self) -> bool {
        self.value.is_none()
    }
}

/// Entity identifier (scheme + value)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub scheme: String,
    pub identifier: String,
}

/// Reporting period of a context
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Period {
    Instant {
        date: NaiveDate,
    },
    Duration {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    Forever,
}

/// Value a context assigns to a dimension
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Member {
    /// Explicit member: a domain-member concept
    Explicit(QName),
    /// Typed member: the string value of the typed-domain element
    Typed(String),
}

/// One dimension/member pair of a context's segment or scenario
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionValue {
    pub dimension: QName,
    #[serde(flatten)]
    pub member: Member,
}

/// Entity, period and dimensional scope of facts
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    pub period: Period,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<DimensionValue>,
}

/// Unit of measure; a ratio unit has denominators
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub numerators: Vec<QName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub denominators: Vec<QName>,
}

impl Unit {
    pub fn is_ratio(&self) -> bool {
        !self.denominators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_json() {
        let p: Period =
            serde_json::from_str(r#"{"type": "instant", "date": "2024-06-30"}"#).unwrap();
        assert_eq!(
            p,
            Period::Instant {
                date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
            }
        );

        let p: Period = serde_json::from_str(
            r#"{"type": "duration", "start_date": "2024-01-01", "end_date": "2024-12-31"}"#,
        )
        .unwrap();
        assert!(matches!(p, Period::Duration { .. }));

        let p: Period = serde_json::from_str(r#"{"type": "forever"}"#).unwrap();
        assert_eq!(p, Period::Forever);
    }

    #[test]
    fn test_dimension_value_json() {
        let explicit: DimensionValue = serde_json::from_str(
            r#"{"dimension": "{http://ex.org/t}SegmentAxis", "explicit": "{http://ex.org/t}RetailMember"}"#,
        )
        .unwrap();
        assert_eq!(
            explicit.member,
            Member::Explicit(QName::new("http://ex.org/t", "RetailMember"))
        );

        let typed: DimensionValue = serde_json::from_str(
            r#"{"dimension": "{http://ex.org/t}DirectorAxis", "typed": "1"}"#,
        )
        .unwrap();
        assert_eq!(typed.member, Member::Typed("1".to_string()));
    }

    #[test]
    fn test_nil_fact() {
        let f: Fact = serde_json::from_str(r#"{"concept": "{http://ex.org/t}Assets"}"#).unwrap();
        assert!(f.is_nil());
    }
}
