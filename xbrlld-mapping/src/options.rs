//! Converter configuration

/// Company registry scheme rewritten to resolvable company URIs by default
pub const COMPANIES_HOUSE_SCHEME: &str = "http://www.companieshouse.gov.uk/";

/// Namespace of resolvable Companies House company resources
pub const COMPANIES_HOUSE_COMPANY: &str = "http://data.companieshouse.gov.uk/doc/company/";

/// Options shared by taxonomy and instance conversion
#[derive(Clone, Debug)]
pub struct ConverterOptions {
    /// Language tag of role definitions
    pub language: String,

    /// Entity identifier scheme → URI prefix rewrites, first match wins
    pub entity_schemes: Vec<(String, String)>,

    /// Derive SKOS concept schemes from parent-child arcs
    pub derive_skos: bool,

    /// Derive Data Cube structures and observations
    pub derive_cube: bool,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            entity_schemes: vec![(
                COMPANIES_HOUSE_SCHEME.to_string(),
                COMPANIES_HOUSE_COMPANY.to_string(),
            )],
            derive_skos: true,
            derive_cube: true,
        }
    }
}

impl ConverterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Add or replace a scheme rewrite
    pub fn with_entity_scheme(mut self, scheme: impl Into<String>, prefix: impl Into<String>) -> Self {
        let scheme = scheme.into();
        let prefix = prefix.into();
        match self.entity_schemes.iter_mut().find(|(s, _)| *s == scheme) {
            Some(entry) => entry.1 = prefix,
            None => self.entity_schemes.push((scheme, prefix)),
        }
        self
    }

    pub fn with_derive_skos(mut self, enabled: bool) -> Self {
        self.derive_skos = enabled;
        self
    }

    pub fn with_derive_cube(mut self, enabled: bool) -> Self {
        self.derive_cube = enabled;
        self
    }

    /// URI prefix for entity identifiers under `scheme`
    pub fn entity_prefix<'a>(&'a self, scheme: &'a str) -> &'a str {
        self.entity_schemes
            .iter()
            .find(|(s, _)| s == scheme)
            .map_or(scheme, |(_, prefix)| prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rewrites_companies_house() {
        let opts = ConverterOptions::default();
        assert_eq!(opts.entity_prefix(COMPANIES_HOUSE_SCHEME), COMPANIES_HOUSE_COMPANY);
        assert_eq!(opts.entity_prefix("http://www.sec.gov/CIK"), "http://www.sec.gov/CIK");
    }

    #[test]
    fn test_with_entity_scheme_replaces() {
        let opts = ConverterOptions::default()
            .with_entity_scheme(COMPANIES_HOUSE_SCHEME, "https://find-and-update.company-information.service.gov.uk/company/");
        assert_eq!(opts.entity_schemes.len(), 1);
        assert!(opts.entity_prefix(COMPANIES_HOUSE_SCHEME).starts_with("https://find"));
    }
}
