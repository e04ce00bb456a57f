// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default engine.
//!
//! Most code should construct an [`Engine`] and pass it where it is needed;
//! each test can then own independent state.  For small programs that would
//! rather reach for a single shared instance, [`global`] hands out one that is
//! created on first use and lives for the rest of the process.
//!
//! # Examples
//!
//! ```
//! use consolog::{global, Level, MemorySink};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(MemorySink::new());
//! global().add_sink(capture.clone());
//!
//! global().create("App").info("hello", vec![]);
//! assert!(capture.drain_logs().contains("hello"));
//! ```

use crate::engine::Engine;
use std::sync::OnceLock;

/// Storage for the default engine.  `Engine` does its own locking.
static GLOBAL_ENGINE: OnceLock<Engine> = OnceLock::new();

/// Returns the process-wide engine, initializing it with a
/// [`ConsoleSink`](crate::ConsoleSink) and the default configuration on first use.
pub fn global() -> &'static Engine {
    GLOBAL_ENGINE.get_or_init(Engine::new)
}
