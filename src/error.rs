// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors from the parsing surfaces.
//!
//! Logging itself never fails. Only turning text into a [`Level`](crate::Level)
//! or a [`Config`](crate::Config) can.

/// Error type for parsing levels and configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name is not one of `debug`, `info`, `warn`, `error`.
    #[error("unknown log level '{0}'")]
    UnknownLevel(String),

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
