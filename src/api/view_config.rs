use serde::{Deserialize, Serialize};

use crate::core::{Theme, VisualSpec};
use crate::error::{ChartError, ChartResult};

/// Public view bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartViewConfig {
    #[serde(default)]
    pub theme: Theme,
    /// Library-level stylistic defaults, lowest precedence in the config
    /// merge. Only its `config` subtree participates.
    #[serde(default)]
    pub library_defaults: VisualSpec,
}

impl ChartViewConfig {
    /// Creates a config with the given theme and empty library defaults.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            library_defaults: VisualSpec::default(),
        }
    }

    /// Sets library-level stylistic defaults.
    #[must_use]
    pub fn with_library_defaults(mut self, library_defaults: VisualSpec) -> Self {
        self.library_defaults = library_defaults;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
