//! # Configuration
//!
//! Checker configuration is managed by [`confique`], loading a TOML
//! file over compiled-in defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_type` | `0` | Registry index of the checker type |
//! | `checked_attr` | `"region"` | Attribute whose value is checked |
//! | `result_attr` | `"defect"` | Attribute receiving the verdict |
//! | `min_value` | `"0.0"` | Minimum bound text |
//! | `max_value` | `"0.0"` | Maximum bound text |
//!
//! Bound values stay textual here: only the selected checker type knows
//! how to parse them, and a parse failure should surface as rejected
//! configuration, not as a config-file type error.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one value checker, stored in TOML.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Registry index of the checker type (see the catalogue).
    #[config(default = 0)]
    pub data_type: usize,

    /// Name of the attribute whose value should be checked.
    #[config(default = "region")]
    pub checked_attr: String,

    /// Name of the attribute that receives the check verdict.
    #[config(default = "defect")]
    pub result_attr: String,

    /// Minimum allowed value, in the checker type's text format.
    #[config(default = "0.0")]
    pub min_value: String,

    /// Maximum allowed value, in the checker type's text format.
    #[config(default = "0.0")]
    pub max_value: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            data_type: 0,
            checked_attr: "region".to_string(),
            result_attr: "defect".to_string(),
            min_value: "0.0".to_string(),
            max_value: "0.0".to_string(),
        }
    }
}

impl CheckerConfig {
    /// Load configuration, layering the given file (if any) over the
    /// compiled-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_published_property_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.data_type, 0);
        assert_eq!(config.checked_attr, "region");
        assert_eq!(config.result_attr, "defect");
        assert_eq!(config.min_value, "0.0");
        assert_eq!(config.max_value, "0.0");
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = CheckerConfig::load(None).unwrap();
        assert_eq!(config, CheckerConfig::default());
    }

    #[test]
    fn load_layers_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "data_type = 1\nchecked_attr = \"center\"\nmin_value = \"0,0\"\nmax_value = \"10,10\""
        )
        .unwrap();

        let config = CheckerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.data_type, 1);
        assert_eq!(config.checked_attr, "center");
        assert_eq!(config.min_value, "0,0");
        assert_eq!(config.max_value, "10,10");
        // Unset keys keep their defaults.
        assert_eq!(config.result_attr, "defect");
    }
}
