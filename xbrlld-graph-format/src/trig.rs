//! TriG formatter
//!
//! Emits the dataset's prefix table, then the default graph, then one
//! `<graph> { ... }` block per named graph. Within a graph, triples are
//! grouped by subject and predicate using `;` and `,`.

use crate::Result;
use std::collections::BTreeMap;
use std::io::Write;
use xbrlld_graph_ir::datatype::iri as dt_iri;
use xbrlld_graph_ir::term::escape_literal;
use xbrlld_graph_ir::{Dataset, GraphName, Quad, Term};
use xbrlld_vocab::rdf;

const INDENT: &str = "    ";

/// Compacts expanded IRIs to `prefix:local` form
#[derive(Clone, Debug)]
pub struct PrefixCompactor {
    /// (prefix, namespace), longest namespace first
    bindings: Vec<(String, String)>,
}

impl PrefixCompactor {
    pub fn new(prefixes: &BTreeMap<String, String>) -> Self {
        let mut bindings: Vec<(String, String)> = prefixes
            .iter()
            .map(|(p, ns)| (p.clone(), ns.clone()))
            .collect();
        bindings.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(&b.0)));
        Self { bindings }
    }

    /// Compact an IRI, or `None` if no binding yields a valid local name
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.bindings.iter().find_map(|(prefix, ns)| {
            iri.strip_prefix(ns.as_str())
                .filter(|local| is_safe_local(local))
                .map(|local| format!("{}:{}", prefix, local))
        })
    }

    fn term(&self, term: &Term) -> String {
        match term {
            Term::Iri(iri) => self
                .compact(iri)
                .unwrap_or_else(|| format!("<{}>", iri)),
            Term::BlankNode(id) => id.to_ntriples(),
            Term::Literal {
                value,
                datatype,
                language,
            } => {
                let lexical = format!("\"{}\"", escape_literal(&value.lexical()));
                if let Some(lang) = language {
                    if lang.is_empty() {
                        lexical
                    } else {
                        format!("{}@{}", lexical, lang)
                    }
                } else if datatype.as_iri() == dt_iri::XSD_STRING {
                    lexical
                } else {
                    format!("{}^^{}", lexical, self.term(&Term::iri(datatype.as_iri())))
                }
            }
        }
    }

    fn predicate(&self, term: &Term) -> String {
        if term.as_iri() == Some(rdf::TYPE) {
            "a".to_string()
        } else {
            self.term(term)
        }
    }
}

/// Conservative subset of Turtle's PN_LOCAL
fn is_safe_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {}
        _ => return false,
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Write a dataset as TriG
pub fn write_trig<W: Write>(dataset: &Dataset, out: &mut W) -> Result<()> {
    let compactor = PrefixCompactor::new(&dataset.prefixes);

    for (prefix, ns) in &dataset.prefixes {
        writeln!(out, "@prefix {}: <{}> .", prefix, ns)?;
    }

    let mut graphs: BTreeMap<&GraphName, Vec<&Quad>> = BTreeMap::new();
    for quad in dataset {
        graphs.entry(&quad.g).or_default().push(quad);
    }
    tracing::debug!(
        quads = dataset.len(),
        graphs = graphs.len(),
        "writing TriG"
    );

    for (graph, quads) in graphs {
        writeln!(out)?;
        match graph {
            GraphName::Default => write_triples(out, &compactor, &quads, "")?,
            GraphName::Named(name) => {
                writeln!(out, "{} {{", compactor.term(name))?;
                write_triples(out, &compactor, &quads, INDENT)?;
                writeln!(out, "}}")?;
            }
        }
    }
    Ok(())
}

/// Format a dataset as a TriG string
pub fn format_trig(dataset: &Dataset) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_trig(dataset, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Write SPO-sorted triples grouped by subject, then predicate
fn write_triples<W: Write>(
    out: &mut W,
    compactor: &PrefixCompactor,
    quads: &[&Quad],
    indent: &str,
) -> Result<()> {
    let mut i = 0;
    while i < quads.len() {
        let subject = &quads[i].s;
        let end = quads[i..]
            .iter()
            .position(|q| &q.s != subject)
            .map_or(quads.len(), |n| i + n);

        write!(out, "{}{}", indent, compactor.term(subject))?;
        let group = &quads[i..end];
        let mut j = 0;
        while j < group.len() {
            let predicate = &group[j].p;
            if j > 0 {
                write!(out, " ;\n{}{}", indent, INDENT)?;
            } else {
                write!(out, " ")?;
            }
            write!(out, "{}", compactor.predicate(predicate))?;

            let mut first = true;
            while j < group.len() && &group[j].p == predicate {
                let sep = if first { " " } else { ", " };
                write!(out, "{}{}", sep, compactor.term(&group[j].o))?;
                first = false;
                j += 1;
            }
        }
        writeln!(out, " .")?;
        i = end;
    }
    Ok(())
}
