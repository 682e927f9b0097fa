//! JSON-LD context for consumers of converted datasets

use serde_json::{json, Map, Value};
use std::collections::BTreeSet;
use xbrlld_graph_ir::{Dataset, Term};
use xbrlld_vocab::{jsonld, qb, time, xbrldt, xbrli, xsd};

/// Build the JSON-LD context describing a converted dataset
///
/// Besides the dataset's prefixes and the fixed xbrl-json terms, every
/// explicit dimension found in the dataset is declared `@id`-valued so its
/// members compact to IRIs.
pub fn build_context(dataset: &Dataset) -> Value {
    let mut context = Map::new();
    context.insert("@vocab".into(), json!(jsonld::XBRL_JSON_VOCAB));
    for (prefix, namespace) in &dataset.prefixes {
        context.insert(prefix.clone(), json!(namespace));
    }

    context.insert("facts".into(), json!({ "@container": "@index" }));
    context.insert("dimensions".into(), json!("@nest"));
    context.insert("unit".into(), json!({ "@type": "@id", "@nest": "dimensions" }));
    context.insert(
        "concept".into(),
        json!({ "@id": qb::MEASURE_TYPE, "@type": "@id", "@nest": "dimensions" }),
    );
    context.insert("entity".into(), json!({ "@type": "@id", "@nest": "dimensions" }));
    context.insert(
        "period".into(),
        json!({ "@type": time::INTERVAL, "@nest": "dimensions" }),
    );
    context.insert("value".into(), json!({ "@id": qb::OBS_VALUE }));

    for dimension in explicit_dimensions(dataset) {
        context.insert(dimension.to_string(), json!({ "@type": "@id" }));
    }
    Value::Object(context)
}

/// IRIs of dimension concepts that have no typed domain
fn explicit_dimensions(dataset: &Dataset) -> BTreeSet<&str> {
    let substitution_group = Term::iri(xsd::SUBSTITUTION_GROUP);
    let dimension_item = Term::iri(xbrldt::DIMENSION_ITEM);
    let typed_domain = Term::iri(xbrli::TYPED_DOMAIN_REF);

    dataset
        .quads_matching(None, Some(&substitution_group), Some(&dimension_item), None)
        .filter(|q| {
            dataset
                .quads_matching(Some(&q.s), Some(&typed_domain), None, None)
                .next()
                .is_none()
        })
        .filter_map(|q| q.s.as_iri())
        .collect()
}
