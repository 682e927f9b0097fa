//! Converter facade: load a document, run the pipelines, collect the result

use crate::derive::{self, DerivationDiagnostics};
use crate::error::{ConvertError, Result};
use crate::options::ConverterOptions;
use crate::warning::{Conversion, Warnings};
use crate::{instance, taxonomy};
use xbrlld_graph_ir::Dataset;
use xbrlld_model::{DocumentType, ModelLoader, XbrlModel};

/// Converts XBRL documents obtained from an injected [`ModelLoader`]
///
/// A converter holds no per-conversion state; every call builds a fresh
/// dataset.
#[derive(Debug, Clone)]
pub struct Converter<L> {
    loader: L,
    options: ConverterOptions,
}

impl<L: ModelLoader> Converter<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            options: ConverterOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConverterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    fn load(&self, location: &str) -> Result<XbrlModel> {
        self.loader.load(location).map_err(|source| ConvertError::Load {
            location: location.to_string(),
            source,
        })
    }

    fn load_taxonomy(&self, location: &str) -> Result<XbrlModel> {
        let model = self.load(location)?;
        if !model.document_type.is_taxonomy() {
            return Err(ConvertError::NotTaxonomy {
                location: location.to_string(),
            });
        }
        Ok(model)
    }

    /// Extract a taxonomy into `dataset` and run the taxonomy rewrites
    fn add_taxonomy(
        &self,
        model: &XbrlModel,
        dataset: &mut Dataset,
        warnings: &mut Warnings,
    ) -> DerivationDiagnostics {
        taxonomy::extract(model, &self.options, dataset, warnings);
        derive::derive_taxonomy(dataset, &self.options)
    }

    /// Convert a taxonomy schema or linkbase
    pub fn taxonomy(&self, location: &str) -> Result<Conversion> {
        let model = self.load_taxonomy(location)?;
        tracing::info!(location, concepts = model.concepts().count(), "taxonomy loaded");

        let mut dataset = Dataset::with_standard_prefixes();
        let mut warnings = Warnings::new();
        let diagnostics = self.add_taxonomy(&model, &mut dataset, &mut warnings);

        Ok(Conversion {
            dataset,
            warnings: warnings.into_vec(),
            diagnostics,
        })
    }

    /// Convert an instance document
    ///
    /// With `with_taxonomy`, every schema the instance references is loaded
    /// through the same loader and converted into the same dataset.
    pub fn instance(&self, location: &str, with_taxonomy: bool) -> Result<Conversion> {
        let model = self.load(location)?;
        if !model.document_type.is_instance() {
            return Err(ConvertError::NotInstance {
                location: location.to_string(),
            });
        }
        if model.canonical_facts().is_empty() {
            return Err(ConvertError::NoFacts {
                location: location.to_string(),
            });
        }

        let mut dataset = Dataset::with_standard_prefixes();
        let mut warnings = Warnings::new();
        instance::extract(&model, &self.options, &mut dataset, &mut warnings);
        let mut diagnostics = derive::derive_instance(&mut dataset, &self.options);

        if with_taxonomy {
            for reference in model.referenced_documents() {
                if reference.document_type != DocumentType::Schema {
                    continue;
                }
                tracing::info!(schema = %reference.uri, "converting referenced taxonomy");
                let schema = self.load_taxonomy(&reference.uri)?;
                diagnostics.merge(self.add_taxonomy(&schema, &mut dataset, &mut warnings));
            }
        }

        Ok(Conversion {
            dataset,
            warnings: warnings.into_vec(),
            diagnostics,
        })
    }
}
