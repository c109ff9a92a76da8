use std::fmt::{self, Display, Formatter};

/// Text formats the detector knows, in the order it tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    pub const CHAIN: [Format; 3] = [Format::Json, Format::Yaml, Format::Xml];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where the wrapped structure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A mapping or sequence handed in directly.
    Adopted,
    /// Text that one of the parsers accepted.
    Detected(Format),
    /// Nothing matched; the raw input is kept as is.
    Opaque,
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Adopted => write!(f, "adopted"),
            Origin::Detected(format) => write!(f, "{}", format),
            Origin::Opaque => write!(f, "opaque"),
        }
    }
}

/// Which values returned from a lookup get wrapped in a new view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Only sequences. Nested mappings come back as plain values.
    #[default]
    Lists,
    /// Sequences and mappings.
    Containers,
}

/// Detector settings. Resolved once and carried by every view built from
/// the detector, nested views included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Run the YAML step. Without the `yaml` feature the step never
    /// matches, whatever this says.
    pub yaml: bool,
    /// Adopt a document that parses to null instead of trying the next
    /// format.
    pub null_is_match: bool,
    pub wrap: WrapMode,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            yaml: yaml_available(),
            null_is_match: false,
            wrap: WrapMode::Lists,
        }
    }
}

impl DetectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_yaml(mut self, yaml: bool) -> Self {
        self.yaml = yaml && yaml_available();
        self
    }

    pub fn with_null_is_match(mut self, null_is_match: bool) -> Self {
        self.null_is_match = null_is_match;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Whether a YAML engine was compiled in.
pub const fn yaml_available() -> bool {
    cfg!(feature = "yaml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert_eq!(config.yaml, yaml_available());
        assert!(!config.null_is_match);
        assert_eq!(config.wrap, WrapMode::Lists);
    }

    #[test]
    fn test_builder() {
        let config = DetectorConfig::new()
            .with_yaml(false)
            .with_null_is_match(true)
            .with_wrap(WrapMode::Containers);
        assert!(!config.yaml);
        assert!(config.null_is_match);
        assert_eq!(config.wrap, WrapMode::Containers);
    }

    #[test]
    fn test_chain_order() {
        assert_eq!(Format::CHAIN, [Format::Json, Format::Yaml, Format::Xml]);
        assert_eq!(Origin::Detected(Format::Xml).to_string(), "xml");
        assert_eq!(Origin::Opaque.to_string(), "opaque");
    }
}
