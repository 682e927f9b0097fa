//! XBRL document model
//!
//! This crate defines the read-only object model the mapping engine walks:
//! concepts, role types, relationships (arcs), facts, contexts and units, as
//! an XBRL processor would expose them after parsing and DTS discovery.
//!
//! Parsing XML itself is outside this crate. Models arrive through a
//! [`ModelLoader`]:
//!
//! - [`MemoryLoader`] serves models built in code (tests, embedding)
//! - [`JsonModelLoader`] reads models pre-parsed into JSON, optionally mapping
//!   document URLs to local files through a catalog
//!
//! # Example
//!
//! ```
//! use xbrlld_model::{DocumentType, MemoryLoader, ModelLoader, XbrlModel};
//!
//! let mut loader = MemoryLoader::new();
//! loader.insert(XbrlModel::new("https://example.com/tax.xsd", DocumentType::Schema));
//!
//! let model = loader.load("https://example.com/tax.xsd").unwrap();
//! assert_eq!(model.document_type, DocumentType::Schema);
//! assert!(loader.load("https://example.com/other.xsd").is_err());
//! ```

mod concept;
pub mod error;
mod instance;
mod loader;
mod model;
mod qname;
mod relationship;

pub use concept::{Concept, Label, RoleType};
pub use error::{LoadError, Result};
pub use instance::{Context, DimensionValue, Entity, Fact, Member, Period, Unit};
pub use loader::{JsonModelLoader, MemoryLoader, ModelLoader};
pub use model::{DocumentReference, DocumentType, XbrlModel};
pub use qname::QName;
pub use relationship::{Relationship, Resource, Target};
