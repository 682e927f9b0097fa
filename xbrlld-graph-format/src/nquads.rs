//! N-Quads formatter
//!
//! One quad per line, fully expanded, in dataset (SPOG) order.

use crate::Result;
use std::io::Write;
use xbrlld_graph_ir::Dataset;

/// Write a dataset as N-Quads
pub fn write_nquads<W: Write>(dataset: &Dataset, out: &mut W) -> Result<()> {
    for quad in dataset {
        writeln!(out, "{}", quad)?;
    }
    Ok(())
}

/// Format a dataset as an N-Quads string
pub fn format_nquads(dataset: &Dataset) -> String {
    dataset.iter().map(|q| format!("{}\n", q)).collect()
}
