use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use xbrlld_graph_format::Format;
use xbrlld_mapping::ConverterOptions;
use xbrlld_model::JsonModelLoader;

const APP_DIR: &str = "xbrlld";
const CONFIG_FILE: &str = "config.toml";

/// Contents of `config.toml`
///
/// ```toml
/// language = "en"
/// format = "trig"
///
/// [entity_schemes]
/// "http://www.companieshouse.gov.uk/" = "http://data.companieshouse.gov.uk/doc/company/"
///
/// [catalog]
/// "https://example.com/taxonomy.xsd" = "models/taxonomy.json"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Language tag of role definitions
    pub language: Option<String>,

    /// Output format used when `--format` is not given
    pub format: Option<String>,

    /// Entity identifier scheme → URI prefix rewrites
    pub entity_schemes: BTreeMap<String, String>,

    /// Document URL → local JSON model file
    pub catalog: BTreeMap<String, PathBuf>,

    /// Directory the config was read from; relative catalog paths resolve here
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// `<config_dir>/xbrlld/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit `--config` path must exist. Without one, the default location
/// is read if present, otherwise defaults apply.
pub fn load_config(config_override: Option<&Path>) -> CliResult<Config> {
    let path = match config_override {
        Some(p) if p.is_file() => p.to_path_buf(),
        Some(p) => {
            return Err(CliError::Config(format!(
                "config file does not exist: {}",
                p.display()
            )))
        }
        None => match default_config_path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(Config::default()),
        },
    };
    parse_config_file(&path)
}

fn parse_config_file(path: &Path) -> CliResult<Config> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("failed to read {}: {e}", path.display())))?;
    let mut config: Config = toml::from_str(&text)
        .map_err(|e| CliError::Config(format!("invalid config {}: {e}", path.display())))?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

impl Config {
    /// Converter options with this config's overrides applied.
    pub fn converter_options(&self) -> ConverterOptions {
        let mut options = ConverterOptions::default();
        if let Some(lang) = &self.language {
            options = options.with_language(lang);
        }
        for (scheme, prefix) in &self.entity_schemes {
            options = options.with_entity_scheme(scheme, prefix);
        }
        options
    }

    /// Model loader resolving catalog entries relative to the config file.
    pub fn loader(&self) -> JsonModelLoader {
        let catalog = self.catalog.iter().map(|(url, path)| {
            let path = match &self.base_dir {
                Some(base) if path.is_relative() => base.join(path),
                _ => path.clone(),
            };
            (url.clone(), path)
        });
        JsonModelLoader::new().with_catalog(catalog)
    }

    /// Output format: `--format`, then config, then the output extension.
    pub fn output_format(&self, flag: Option<&str>, output: &Path) -> CliResult<Format> {
        if let Some(f) = flag.or(self.format.as_deref()) {
            return Ok(Format::from_str(f)?);
        }
        Ok(output
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| Format::from_str(ext).ok())
            .unwrap_or_default())
    }
}
