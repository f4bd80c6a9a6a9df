// File: crates/timechart-core/src/config.rs
// Summary: TOML-backed chart configuration (container geometry + interaction switches).

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::interaction::InteractionConfig;
use crate::layout::LayoutOptions;

/// Everything a container needs besides its rows and time range.
///
/// Every field is optional in the file; missing ones take the defaults.
///
/// ```toml
/// [layout]
/// width = 960
/// padding = { left = 10, right = 10 }
///
/// [interaction]
/// pan_enabled = true
/// min_duration_ms = 60000
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub layout: LayoutOptions,
    pub interaction: InteractionConfig,
}

impl ChartConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<string>")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}
