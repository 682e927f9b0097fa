//! Identity rules: canonical concept URIs and version-agnostic aliases

use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use xbrlld_model::QName;

/// Characters an N-Triples/Turtle IRIREF may not contain
const IRIREF_EXCLUDED: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Canonical URI of a concept (or any element): `namespace#localName`
pub fn concept_uri(qname: &QName) -> String {
    format!("{}#{}", qname.namespace, qname.local_name)
}

/// URI of a reporting entity: scheme prefix followed by its identifier
///
/// Both parts are trimmed. Characters not allowed in an IRIREF are
/// percent-encoded; existing `%XX` escapes pass through unchanged.
pub fn entity_uri(prefix: &str, identifier: &str) -> String {
    let raw = format!("{}{}", prefix.trim(), identifier.trim());
    utf8_percent_encode(&raw, IRIREF_EXCLUDED).to_string()
}

/// `/YYYY`, `/YYYY-MM` or `/YYYY-MM-DD` path segment
static DATE_SEGMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/\d{4}(?:-\d{2}){0,2}([/#]|$)").expect("valid date segment regex")
});

/// Alphabetic fragment ending in a bare year
static FRAGMENT_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(#[A-Za-z]+)\d{4}$").expect("valid fragment year regex"));

/// Slash before the fragment or at the end
static TRAILING_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/(#|$)").expect("valid trailing slash regex"));

fn normalize_once(uri: &str) -> String {
    let s = DATE_SEGMENT.replace_all(uri, "${1}");
    let s = FRAGMENT_YEAR.replace(&s, "${1}");
    TRAILING_SLASH.replace_all(&s, "${1}").into_owned()
}

/// Version-agnostic alias of a URI
///
/// Removes date path segments, a year suffix on the fragment, and the slash
/// left dangling before `#` or at the end. Applied to a fixed point, so
/// `normalize(normalize(u)) == normalize(u)`.
pub fn normalize(uri: &str) -> String {
    let mut current = uri.to_string();
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_uri() {
        let q = QName::new("http://fasb.org/us-gaap/2024", "Assets");
        assert_eq!(concept_uri(&q), "http://fasb.org/us-gaap/2024#Assets");
        assert_eq!(concept_uri(&q), concept_uri(&q.clone()));
    }

    #[test]
    fn test_entity_uri_trims_and_encodes() {
        assert_eq!(
            entity_uri(" http://data.companieshouse.gov.uk/doc/company/ ", " 01234567 "),
            "http://data.companieshouse.gov.uk/doc/company/01234567"
        );
        assert_eq!(
            entity_uri("http://example.org/ids/", " ACME Corp "),
            "http://example.org/ids/ACME%20Corp"
        );
        assert_eq!(
            entity_uri("http://example.org/ids/", "a<b>\"c\"{d}|e^f\\g`h"),
            "http://example.org/ids/a%3Cb%3E%22c%22%7Bd%7D%7Ce%5Ef%5Cg%60h"
        );
        assert_eq!(entity_uri("http://example.org/ids/", "50%25"), "http://example.org/ids/50%25");
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(
            normalize("http://fasb.org/us-gaap/2024#NetIncomeLoss"),
            "http://fasb.org/us-gaap#NetIncomeLoss"
        );
        assert_eq!(
            normalize("http://example.com/2024-01-01/foo#Bar"),
            "http://example.com/foo#Bar"
        );
        assert_eq!(
            normalize("http://example.com/foo/#Bar"),
            "http://example.com/foo#Bar"
        );
        assert_eq!(
            normalize("http://example.com/foo#Bar2024"),
            "http://example.com/foo#Bar"
        );
        assert_eq!(
            normalize("http://xbrl.frc.org.uk/fr/2023-01-01/core#Equity"),
            "http://xbrl.frc.org.uk/fr/core#Equity"
        );
    }

    #[test]
    fn test_normalize_noop_without_dates() {
        assert_eq!(normalize("http://x.org/foo#Bar"), "http://x.org/foo#Bar");
        assert_eq!(normalize("http://2024.example.org/a#B"), "http://2024.example.org/a#B");
        assert_eq!(normalize("http://x.org:2024/a#B"), "http://x.org:2024/a#B");
    }

    #[test]
    fn test_normalize_consecutive_segments() {
        assert_eq!(
            normalize("http://example.com/2023/2024-05/foo#Bar"),
            "http://example.com/foo#Bar"
        );
    }

    #[test]
    fn test_normalize_idempotent() {
        for uri in [
            "http://fasb.org/us-gaap/2024#NetIncomeLoss",
            "http://example.com/foo#Bar20242024",
            "http://example.com/2024-01-01/foo/#Bar",
            "http://x.org/foo#Bar",
        ] {
            let once = normalize(uri);
            assert_eq!(normalize(&once), once, "not idempotent for {}", uri);
        }
    }
}
