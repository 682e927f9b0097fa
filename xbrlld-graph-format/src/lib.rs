//! RDF dataset formatters
//!
//! This crate provides formatters that convert an `xbrlld_graph_ir::Dataset`
//! to text:
//!
//! - **TriG**: prefix-compacted, default graph first, one block per named graph
//! - **N-Quads**: line-based, fully expanded
//!
//! # Example
//!
//! ```
//! use xbrlld_graph_ir::{Dataset, GraphName, Term};
//! use xbrlld_graph_format::{format_nquads, Format};
//!
//! let mut dataset = Dataset::new();
//! dataset.insert(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//!     GraphName::Default,
//! );
//!
//! let text = format_nquads(&dataset);
//! assert_eq!(
//!     text,
//!     "<http://example.org/alice> <http://xmlns.com/foaf/0.1/name> \"Alice\" .\n"
//! );
//! assert_eq!("trig".parse::<Format>().unwrap(), Format::Trig);
//! ```

mod error;
mod nquads;
mod trig;

pub use error::{FormatError, Result};
pub use nquads::{format_nquads, write_nquads};
pub use trig::{format_trig, write_trig, PrefixCompactor};

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use xbrlld_graph_ir::Dataset;

/// Output serialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Trig,
    Nquads,
}

impl Format {
    /// Write a dataset in this format
    pub fn write<W: Write>(&self, dataset: &Dataset, out: &mut W) -> Result<()> {
        match self {
            Format::Trig => write_trig(dataset, out),
            Format::Nquads => write_nquads(dataset, out),
        }
    }

    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Trig => "trig",
            Format::Nquads => "nq",
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "trig" => Ok(Format::Trig),
            "nquads" | "n-quads" | "nq" => Ok(Format::Nquads),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Trig => write!(f, "trig"),
            Format::Nquads => write!(f, "nquads"),
        }
    }
}
