// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engine configuration.
//!
//! A [`Config`] describes the starting state of an [`Engine`](crate::Engine).
//! Every field has a default, so a partial document is enough:
//!
//! ```rust
//! use consolog::{Config, Level};
//!
//! let config = Config::from_json(r#"{"level": "warn", "disabled_contexts": ["Noisy"]}"#).unwrap();
//! assert_eq!(config.level, Level::Warn);
//! assert!(config.enabled);
//! assert!(config.show_timestamp);
//! ```

use crate::Level;
use crate::style::StyleOverrides;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Global kill switch.
    pub enabled: bool,
    /// Messages below this level are dropped.
    pub level: Level,
    /// Whether prefixes and structured events carry a timestamp.
    pub show_timestamp: bool,
    /// Styles replacing the built-in ones.
    #[serde(skip_serializing_if = "StyleOverrides::is_empty")]
    pub styles: StyleOverrides,
    /// Contexts whose messages are suppressed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_contexts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            level: Level::Debug,
            show_timestamp: true,
            styles: StyleOverrides::default(),
            disabled_contexts: Vec::new(),
        }
    }
}

impl Config {
    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn show_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    pub fn styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = styles;
        self
    }

    pub fn disable_context(mut self, context: impl Into<String>) -> Self {
        self.disabled_contexts.push(context.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn empty_document_is_default() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn parses_styles_and_contexts() {
        let config = Config::from_json(
            r#"{"enabled": false, "show_timestamp": false, "styles": {"error": "color: red"}, "disabled_contexts": ["A", "B"]}"#,
        )
        .unwrap();
        assert!(!config.enabled);
        assert!(!config.show_timestamp);
        assert_eq!(config.styles.get(Level::Error), Some("color: red"));
        assert_eq!(config.disabled_contexts, vec!["A", "B"]);
    }

    #[cfg_attr(not(target_arch = "wasm32"), test)]
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
    fn rejects_unknown_level() {
        let err = Config::from_json(r#"{"level": "verbose"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
