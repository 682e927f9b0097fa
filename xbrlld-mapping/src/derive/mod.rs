//! Derivation engine
//!
//! Additive graph rewrites that synthesize SKOS hierarchies and RDF Data Cube
//! structures from the raw mapped triples. Each rule reads the dataset,
//! collects the quads it would insert, and only then writes them back, so a
//! rule never observes its own output mid-pass.
//!
//! Rules introduce no fresh blank nodes: structure and component nodes are
//! skolemised from their defining key. Re-running any rule on an already
//! derived dataset inserts nothing.

mod cube;
mod index;
mod observation;
mod skos;

use crate::options::ConverterOptions;
use std::collections::BTreeMap;
use xbrlld_graph_ir::{Dataset, Quad};

/// Counters describing what a derivation run did
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DerivationDiagnostics {
    /// Number of new quads each rule inserted, keyed by rule name
    pub rules_fired: BTreeMap<String, usize>,
    /// Total number of quads inserted
    pub quads_inserted: usize,
}

impl DerivationDiagnostics {
    /// Record that a rule fired
    pub fn record_rule_fired(&mut self, rule_name: &str) {
        *self.rules_fired.entry(rule_name.to_string()).or_insert(0) += 1;
        self.quads_inserted += 1;
    }

    /// Fold another run's counters into this one
    pub fn merge(&mut self, other: DerivationDiagnostics) {
        for (rule, count) in other.rules_fired {
            *self.rules_fired.entry(rule).or_insert(0) += count;
        }
        self.quads_inserted += other.quads_inserted;
    }

    /// How many quads `rule_name` inserted
    pub fn fired(&self, rule_name: &str) -> usize {
        self.rules_fired.get(rule_name).copied().unwrap_or(0)
    }
}

/// Insert a rule's output, counting only quads that were not already present
fn commit(
    dataset: &mut Dataset,
    rule_name: &str,
    quads: Vec<Quad>,
    diagnostics: &mut DerivationDiagnostics,
) {
    for quad in quads {
        if dataset.insert_quad(quad) {
            diagnostics.record_rule_fired(rule_name);
        }
    }
}

/// Run the taxonomy rewrites over the whole dataset
///
/// The cube rules run in dependency order: dimension and fixed components
/// attach to structures created by the measure rule.
pub(crate) fn derive_taxonomy(
    dataset: &mut Dataset,
    options: &ConverterOptions,
) -> DerivationDiagnostics {
    let mut diagnostics = DerivationDiagnostics::default();

    if options.derive_skos {
        let quads = skos::skos_hierarchy(dataset);
        commit(dataset, skos::RULE, quads, &mut diagnostics);
    }

    if options.derive_cube {
        let quads = cube::measure_structures(dataset);
        commit(dataset, cube::MEASURE_RULE, quads, &mut diagnostics);
        let quads = cube::dimension_components(dataset);
        commit(dataset, cube::DIMENSION_RULE, quads, &mut diagnostics);
        let quads = cube::fixed_components(dataset);
        commit(dataset, cube::FIXED_COMPONENTS_RULE, quads, &mut diagnostics);
    }

    tracing::debug!(
        quads_inserted = diagnostics.quads_inserted,
        rules = ?diagnostics.rules_fired,
        "taxonomy derivation complete"
    );
    diagnostics
}

/// Classify instance facts as Data Cube observations
pub(crate) fn derive_instance(
    dataset: &mut Dataset,
    options: &ConverterOptions,
) -> DerivationDiagnostics {
    let mut diagnostics = DerivationDiagnostics::default();
    if options.derive_cube {
        let quads = observation::observations(dataset);
        commit(dataset, observation::RULE, quads, &mut diagnostics);
    }
    tracing::debug!(
        quads_inserted = diagnostics.quads_inserted,
        "instance derivation complete"
    );
    diagnostics
}
