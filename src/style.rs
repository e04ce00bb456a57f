// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-level display styles.
//!
//! A style is an opaque hint handed to the sink alongside the prefix. The
//! browser console reads it as a CSS declaration for the `%c` directive; the
//! native console ignores it.

use crate::Level;
use serde::{Deserialize, Serialize};

/// One style string for every level.
///
/// There is no missing-key state: each level always has an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleTable {
    debug: String,
    info: String,
    warn: String,
    error: String,
}

impl StyleTable {
    /// The style for `level`.
    pub fn get(&self, level: Level) -> &str {
        match level {
            Level::Debug => &self.debug,
            Level::Info => &self.info,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
        }
    }

    fn slot(&mut self, level: Level) -> &mut String {
        match level {
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
        }
    }

    /// Overwrites the entries present in `overrides`, leaving the rest alone.
    pub fn merge(&mut self, overrides: &StyleOverrides) {
        for level in Level::ALL {
            if let Some(style) = overrides.get(level) {
                *self.slot(level) = style.to_string();
            }
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            debug: "color: #6b7280".to_string(),
            info: "color: #2563eb".to_string(),
            warn: "color: #d97706; font-weight: bold".to_string(),
            error: "color: #dc2626; font-weight: bold".to_string(),
        }
    }
}

/// A partial [`StyleTable`].
///
/// ```
/// use consolog::{Level, StyleOverrides};
///
/// let overrides = StyleOverrides::new().info("color: teal");
/// assert_eq!(overrides.get(Level::Info), Some("color: teal"));
/// assert_eq!(overrides.get(Level::Warn), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    debug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style for `level`.
    pub fn set(mut self, level: Level, style: impl Into<String>) -> Self {
        let style = Some(style.into());
        match level {
            Level::Debug => self.debug = style,
            Level::Info => self.info = style,
            Level::Warn => self.warn = style,
            Level::Error => self.error = style,
        }
        self
    }

    pub fn debug(self, style: impl Into<String>) -> Self {
        self.set(Level::Debug, style)
    }

    pub fn info(self, style: impl Into<String>) -> Self {
        self.set(Level::Info, style)
    }

    pub fn warn(self, style: impl Into<String>) -> Self {
        self.set(Level::Warn, style)
    }

    pub fn error(self, style: impl Into<String>) -> Self {
        self.set(Level::Error, style)
    }

    /// The override for `level`, if one was supplied.
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Debug => self.debug.as_deref(),
            Level::Info => self.info.as_deref(),
            Level::Warn => self.warn.as_deref(),
            Level::Error => self.error.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Level::ALL.into_iter().all(|level| self.get(level).is_none())
    }
}

impl From<&StyleTable> for StyleOverrides {
    /// Overrides that reproduce `table` exactly.
    fn from(table: &StyleTable) -> Self {
        Level::ALL
            .into_iter()
            .fold(StyleOverrides::new(), |overrides, level| {
                overrides.set(level, table.get(level))
            })
    }
}
