//! Instance fact extractor
//!
//! Every canonical fact becomes an anonymous `xbrll:Fact` resource hanging
//! off a single anonymous `xbrll:Report`. All instance triples go to the
//! default graph.
//!
//! Two shapes are asymmetric on purpose: a duration period is an anonymous
//! resource while an instant is a bare date literal, and a ratio unit is an
//! anonymous resource while a simple unit is its measure URIs.

mod values;

use crate::options::ConverterOptions;
use crate::uri::{concept_uri, entity_uri};
use crate::warning::{ConversionWarning, Warnings};
use values::{convert_value, precision_literal, FactValue};
use xbrlld_graph_ir::{Datatype, QuadSink, Term};
use xbrlld_model::{Context, Fact, Member, Period, Unit, XbrlModel};
use xbrlld_vocab::{rdf, xbrll};

/// Writes one instance document's facts into a sink
struct FactWriter<'a, S: QuadSink> {
    model: &'a XbrlModel,
    options: &'a ConverterOptions,
    sink: &'a mut S,
    warnings: &'a mut Warnings,
}

impl<'a, S: QuadSink> FactWriter<'a, S> {
    fn add(&mut self, s: &Term, p: &str, o: Term) {
        self.sink.emit_default(s.clone(), Term::iri(p), o);
    }

    fn add_fact(&mut self, report: &Term, fact: &Fact) {
        let node = self.sink.blank();
        self.add(&node, rdf::TYPE, Term::iri(xbrll::FACT));
        self.add(report, xbrll::HAS_FACT, node.clone());
        self.add(&node, xbrll::CONCEPT, Term::iri(concept_uri(&fact.concept)));

        if let Some(raw) = &fact.value {
            let literal = match convert_value(self.model.concept(&fact.concept), raw) {
                FactValue::Literal(term) => term,
                FactValue::Unparseable { literal, datatype } => {
                    self.warnings.push(ConversionWarning::UnparseableValue {
                        concept: fact.concept.to_string(),
                        value: raw.clone(),
                        datatype: datatype.to_string(),
                    });
                    literal
                }
            };
            self.add(&node, xbrll::VALUE, literal);
        }

        for (predicate, attr) in [
            (xbrll::DECIMALS, &fact.decimals),
            (xbrll::PRECISION, &fact.precision),
        ] {
            if let Some(raw) = attr.as_deref().filter(|v| !v.is_empty()) {
                self.add_precision(&node, predicate, fact, raw);
            }
        }

        if let Some(context) = fact.context_ref.as_deref().and_then(|id| self.model.context(id)) {
            self.add_context(&node, context);
        }
        if let Some(unit) = fact.unit_ref.as_deref().and_then(|id| self.model.unit(id)) {
            self.add_unit(&node, unit);
        }
    }

    fn add_precision(&mut self, node: &Term, predicate: &str, fact: &Fact, raw: &str) {
        let literal = match precision_literal(raw) {
            Some(literal) => literal,
            None => {
                self.warnings.push(ConversionWarning::UnparseableDecimals {
                    concept: fact.concept.to_string(),
                    value: raw.to_string(),
                });
                Term::string(raw)
            }
        };
        self.add(node, predicate, literal);
    }

    fn add_context(&mut self, node: &Term, context: &Context) {
        for dim in &context.dimensions {
            let value = match &dim.member {
                Member::Explicit(member) => Term::iri(concept_uri(member)),
                Member::Typed(text) => Term::string(text),
            };
            self.add(node, &concept_uri(&dim.dimension), value);
        }

        if let Some(entity) = &context.entity {
            let prefix = self.options.entity_prefix(entity.scheme.trim());
            let uri = entity_uri(prefix, &entity.identifier);
            self.add(node, xbrll::HAS_ENTITY, Term::iri(uri));
        }

        match &context.period {
            Period::Duration {
                start_date,
                end_date,
            } => {
                let period = self.sink.blank();
                self.add(node, xbrll::PERIOD, period.clone());
                self.add(&period, xbrll::START_PERIOD, date_literal(start_date));
                self.add(&period, xbrll::END_PERIOD, date_literal(end_date));
            }
            Period::Instant { date } => {
                self.add(node, xbrll::PERIOD, date_literal(date));
            }
            Period::Forever => {}
        }
    }

    fn add_unit(&mut self, node: &Term, unit: &Unit) {
        if unit.is_ratio() {
            let unit_node = self.sink.blank();
            self.add(node, xbrll::UNIT_REF, unit_node.clone());
            for measure in &unit.numerators {
                self.add(&unit_node, xbrll::NUMERATOR, Term::iri(concept_uri(measure)));
            }
            for measure in &unit.denominators {
                self.add(&unit_node, xbrll::DENOMINATOR, Term::iri(concept_uri(measure)));
            }
        } else {
            for measure in &unit.numerators {
                self.add(node, xbrll::UNIT_REF, Term::iri(concept_uri(measure)));
            }
        }
    }
}

fn date_literal(date: &chrono::NaiveDate) -> Term {
    Term::typed(date.format("%Y-%m-%d").to_string(), Datatype::xsd_date())
}

/// Emit the report resource and every canonical fact of `model`
///
/// Returns the number of facts written.
pub(crate) fn extract<S: QuadSink>(
    model: &XbrlModel,
    options: &ConverterOptions,
    sink: &mut S,
    warnings: &mut Warnings,
) -> usize {
    let facts = model.canonical_facts();
    let report = sink.blank();
    sink.emit_default(report.clone(), Term::iri(rdf::TYPE), Term::iri(xbrll::REPORT));

    let mut writer = FactWriter {
        model,
        options,
        sink,
        warnings,
    };
    for fact in &facts {
        writer.add_fact(&report, fact);
    }
    tracing::info!(facts = facts.len(), uri = %model.uri, "facts converted");
    facts.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::COMPANIES_HOUSE_SCHEME;
    use chrono::NaiveDate;
    use xbrlld_graph_ir::{Dataset, GraphName};
    use xbrlld_model::{Concept, DimensionValue, DocumentType, Entity, QName};
    use xbrlld_vocab::xbrli;

    const NS: &str = "http://ex.org/t";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fact(local: &str, value: Option<&str>, context: &str, unit: Option<&str>) -> Fact {
        Fact {
            concept: QName::new(NS, local),
            value: value.map(str::to_string),
            decimals: None,
            precision: None,
            context_ref: Some(context.to_string()),
            unit_ref: unit.map(str::to_string),
        }
    }

    fn model() -> XbrlModel {
        let mut m = XbrlModel::new("report.xbrl", DocumentType::Instance);
        let mut assets = Concept::new(QName::new(NS, "Assets"));
        assets.type_qname = Some(QName::new(xbrli::NS, "monetaryItemType"));
        m.add_concept(assets);
        m.add_context(
            "FY",
            Context {
                entity: Some(Entity {
                    scheme: COMPANIES_HOUSE_SCHEME.into(),
                    identifier: "01234567".into(),
                }),
                period: Period::Duration {
                    start_date: date(2024, 1, 1),
                    end_date: date(2024, 12, 31),
                },
                dimensions: vec![],
            },
        );
        m.add_context(
            "END",
            Context {
                entity: Some(Entity {
                    scheme: "http://www.sec.gov/CIK".into(),
                    identifier: "0000320193".into(),
                }),
                period: Period::Instant {
                    date: date(2024, 6, 30),
                },
                dimensions: vec![
                    DimensionValue {
                        dimension: QName::new(NS, "RegionAxis"),
                        member: Member::Explicit(QName::new(NS, "EuropeMember")),
                    },
                    DimensionValue {
                        dimension: QName::new(NS, "CustomerAxis"),
                        member: Member::Typed("ACME".into()),
                    },
                ],
            },
        );
        m.add_unit(
            "GBP",
            Unit {
                numerators: vec![QName::new("http://www.xbrl.org/2003/iso4217", "GBP")],
                denominators: vec![],
            },
        );
        m.add_unit(
            "GBPperShare",
            Unit {
                numerators: vec![QName::new("http://www.xbrl.org/2003/iso4217", "GBP")],
                denominators: vec![QName::new(xbrli::NS, "shares")],
            },
        );
        m
    }

    fn run(m: &XbrlModel) -> (Dataset, Warnings) {
        let mut ds = Dataset::new();
        let mut warnings = Warnings::new();
        extract(m, &ConverterOptions::default(), &mut ds, &mut warnings);
        (ds, warnings)
    }

    fn only_fact(ds: &Dataset) -> Term {
        let facts: Vec<_> = ds
            .quads_matching(None, Some(&Term::iri(xbrll::HAS_FACT)), None, None)
            .map(|q| q.o.clone())
            .collect();
        assert_eq!(facts.len(), 1);
        facts[0].clone()
    }

    fn object(ds: &Dataset, s: &Term, p: &str) -> Vec<Term> {
        ds.quads_matching(Some(s), Some(&Term::iri(p)), None, None)
            .map(|q| q.o.clone())
            .collect()
    }

    #[test]
    fn test_duration_fact() {
        let mut m = model();
        let mut f = fact("Assets", Some("1000"), "FY", Some("GBP"));
        f.decimals = Some("INF".into());
        m.add_fact(f);
        let (ds, warnings) = run(&m);
        assert!(warnings.is_empty());
        let node = only_fact(&ds);

        assert_eq!(object(&ds, &node, xbrll::VALUE), vec![Term::decimal("1000")]);
        assert_eq!(object(&ds, &node, xbrll::DECIMALS), vec![Term::string("INF")]);
        assert_eq!(
            object(&ds, &node, xbrll::HAS_ENTITY),
            vec![Term::iri("http://data.companieshouse.gov.uk/doc/company/01234567")]
        );

        let period = object(&ds, &node, xbrll::PERIOD);
        assert_eq!(period.len(), 1);
        assert!(period[0].is_blank());
        assert_eq!(
            object(&ds, &period[0], xbrll::START_PERIOD),
            vec![Term::typed("2024-01-01", Datatype::xsd_date())]
        );
        assert_eq!(
            object(&ds, &period[0], xbrll::END_PERIOD),
            vec![Term::typed("2024-12-31", Datatype::xsd_date())]
        );

        assert_eq!(
            object(&ds, &node, xbrll::UNIT_REF),
            vec![Term::iri("http://www.xbrl.org/2003/iso4217#GBP")]
        );
    }

    #[test]
    fn test_instant_fact_with_dimensions() {
        let mut m = model();
        let mut f = fact("Assets", Some("5"), "END", Some("GBPperShare"));
        f.decimals = Some("-3".into());
        m.add_fact(f);
        let (ds, _) = run(&m);
        let node = only_fact(&ds);

        assert_eq!(
            object(&ds, &node, xbrll::PERIOD),
            vec![Term::typed("2024-06-30", Datatype::xsd_date())]
        );
        assert_eq!(object(&ds, &node, xbrll::DECIMALS), vec![Term::integer(-3)]);
        assert_eq!(
            object(&ds, &node, xbrll::HAS_ENTITY),
            vec![Term::iri("http://www.sec.gov/CIK0000320193")]
        );
        assert_eq!(
            object(&ds, &node, "http://ex.org/t#RegionAxis"),
            vec![Term::iri("http://ex.org/t#EuropeMember")]
        );
        assert_eq!(
            object(&ds, &node, "http://ex.org/t#CustomerAxis"),
            vec![Term::string("ACME")]
        );

        let unit = object(&ds, &node, xbrll::UNIT_REF);
        assert_eq!(unit.len(), 1);
        assert!(unit[0].is_blank());
        assert_eq!(
            object(&ds, &unit[0], xbrll::NUMERATOR),
            vec![Term::iri("http://www.xbrl.org/2003/iso4217#GBP")]
        );
        assert_eq!(
            object(&ds, &unit[0], xbrll::DENOMINATOR),
            vec![Term::iri("http://www.xbrl.org/2003/instance#shares")]
        );
    }

    #[test]
    fn test_nil_fact_has_no_value() {
        let mut m = model();
        m.add_fact(fact("Assets", None, "FY", None));
        let (ds, _) = run(&m);
        let node = only_fact(&ds);
        assert!(object(&ds, &node, xbrll::VALUE).is_empty());
        assert_eq!(object(&ds, &node, xbrll::CONCEPT).len(), 1);
    }

    #[test]
    fn test_bad_values_warn_and_pass_through() {
        let mut m = model();
        let mut f = fact("Assets", Some("lots"), "FY", None);
        f.precision = Some("high".into());
        m.add_fact(f);
        let (ds, warnings) = run(&m);
        let node = only_fact(&ds);

        assert_eq!(object(&ds, &node, xbrll::VALUE), vec![Term::string("lots")]);
        assert_eq!(object(&ds, &node, xbrll::PRECISION), vec![Term::string("high")]);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_duplicate_facts_collapse() {
        let mut m = model();
        m.add_fact(fact("Assets", Some("1"), "FY", None));
        m.add_fact(fact("Assets", Some("1"), "FY", None));
        let mut ds = Dataset::new();
        let n = extract(&m, &ConverterOptions::default(), &mut ds, &mut Warnings::new());
        assert_eq!(n, 1);
        assert!(ds.iter().all(|q| q.g == GraphName::Default));
    }
}
