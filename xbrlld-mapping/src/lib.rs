//! XBRL to RDF mapping engine
//!
//! Walks an [`XbrlModel`](xbrlld_model::XbrlModel) and emits an RDF quad
//! dataset using fixed vocabulary mappings:
//!
//! - **Taxonomies**: one named graph per link-role holding roles, concepts,
//!   labels, relationships and qualified arc metadata; SKOS concept schemes
//!   and RDF Data Cube structures are derived from the raw relationships.
//! - **Instances**: one anonymous resource per canonical fact under a single
//!   report resource, with typed values, dimensions, entity, period and unit;
//!   facts are also classified as Data Cube observations.
//!
//! # Usage
//!
//! Build a [`Converter`] around a [`ModelLoader`](xbrlld_model::ModelLoader),
//! then call [`Converter::taxonomy`] or [`Converter::instance`]. The returned
//! [`Conversion`] carries the dataset, the non-fatal warnings and derivation
//! counters. [`build_context`] produces a JSON-LD context for the result.

pub mod context;
mod converter;
mod derive;
pub mod error;
mod instance;
pub mod options;
mod taxonomy;
pub mod uri;
mod warning;

pub use context::build_context;
pub use converter::Converter;
pub use derive::DerivationDiagnostics;
pub use error::{ConvertError, Result};
pub use options::ConverterOptions;
pub use uri::{concept_uri, normalize};
pub use warning::{Conversion, ConversionWarning, Warnings};
