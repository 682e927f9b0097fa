//! Fact value conversion
//!
//! Item types are looked up in a fixed, ordered table; the first type the
//! concept is an instance of decides the literal's datatype. New item types
//! are new table rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use xbrlld_graph_ir::{Datatype, Term};
use xbrlld_model::{Concept, QName};
use xbrlld_vocab::xbrli::{self, item_types};

/// xsd:decimal lexical space
static DECIMAL_LEXICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("valid decimal regex"));

/// Lexical value → typed literal; `None` when the value does not parse
type Converter = fn(&str) -> Option<Term>;

struct ValueRule {
    item_type: &'static str,
    /// Datatype name reported when conversion fails
    datatype: &'static str,
    convert: Converter,
}

const VALUE_TABLE: [ValueRule; 7] = [
    ValueRule {
        item_type: item_types::BOOLEAN,
        datatype: "xsd:boolean",
        convert: to_boolean,
    },
    ValueRule {
        item_type: item_types::MONETARY,
        datatype: "xsd:decimal",
        convert: to_decimal,
    },
    ValueRule {
        item_type: item_types::DATE,
        datatype: "xsd:date",
        convert: to_date,
    },
    ValueRule {
        item_type: item_types::DURATION,
        datatype: "xsd:duration",
        convert: to_duration,
    },
    ValueRule {
        item_type: item_types::DECIMAL,
        datatype: "xsd:decimal",
        convert: to_decimal,
    },
    ValueRule {
        item_type: item_types::SHARES,
        datatype: "xsd:decimal",
        convert: to_decimal,
    },
    ValueRule {
        item_type: item_types::PURE,
        datatype: "xsd:decimal",
        convert: to_decimal,
    },
];

fn to_boolean(raw: &str) -> Option<Term> {
    Some(Term::boolean(raw.trim() == "true"))
}

fn to_decimal(raw: &str) -> Option<Term> {
    let raw = raw.trim();
    if DECIMAL_LEXICAL.is_match(raw) {
        return Some(Term::decimal(raw));
    }
    // Scientific notation and the like: rewrite in plain decimal notation
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(Term::decimal(v.to_string())),
        _ => None,
    }
}

fn to_date(raw: &str) -> Option<Term> {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))?;
    Some(Term::typed(date.format("%Y-%m-%d").to_string(), Datatype::xsd_date()))
}

fn to_duration(raw: &str) -> Option<Term> {
    Some(Term::typed(raw.trim(), Datatype::xsd_duration()))
}

/// Outcome of converting a fact value
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum FactValue {
    /// Converted under the concept's item type, or passed through because
    /// no table row applies
    Literal(Term),
    /// The item type matched but the value did not parse; passed through as
    /// a plain literal
    Unparseable { literal: Term, datatype: &'static str },
}

pub(crate) fn convert_value(concept: Option<&Concept>, raw: &str) -> FactValue {
    let rule = concept.and_then(|c| {
        VALUE_TABLE
            .iter()
            .find(|rule| c.instance_of_type(&QName::new(xbrli::NS, rule.item_type)))
    });
    match rule {
        None => FactValue::Literal(Term::string(raw)),
        Some(rule) => match (rule.convert)(raw) {
            Some(term) => FactValue::Literal(term),
            None => FactValue::Unparseable {
                literal: Term::string(raw),
                datatype: rule.datatype,
            },
        },
    }
}

/// `decimals`/`precision` attribute value
///
/// `INF` is a string (its value space is not numeric), integers are
/// `xsd:integer`; anything else is `None`.
pub(crate) fn precision_literal(raw: &str) -> Option<Term> {
    let raw = raw.trim();
    if raw == "INF" {
        return Some(Term::string(raw));
    }
    raw.parse::<i64>().ok().map(Term::integer)
}
