//! Format-agnostic RDF dataset intermediate representation
//!
//! This crate provides the canonical types the XBRL mapping engine writes
//! into and the serializers read from, regardless of the output format
//! (TriG, N-Quads).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form. Compaction
//!    is handled by formatters at output time.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype, never
//!    optional. Plain strings use `xsd:string`, language-tagged strings use
//!    `rdf:langString`.
//!
//! 3. **Set semantics** - The `Dataset` type stores quads in a `BTreeSet`, so
//!    inserting a quad twice is a no-op and iteration order is deterministic.
//!
//! 4. **Append-only** - Nothing is ever removed from a dataset once inserted.
//!
//! # Example
//!
//! ```
//! use xbrlld_graph_ir::{Dataset, GraphName, Term};
//!
//! let mut dataset = Dataset::new();
//!
//! let inserted = dataset.insert(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//!     GraphName::Default,
//! );
//! assert!(inserted);
//! assert_eq!(dataset.len(), 1);
//! ```

pub mod datatype;
mod dataset;
mod quad;
mod sink;
pub mod term;

pub use datatype::Datatype;
pub use dataset::Dataset;
pub use quad::{GraphName, Quad};
pub use sink::QuadSink;
pub use term::{BlankId, LiteralValue, Term};
