// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! This module provides an in-memory sink for testing and debugging purposes.
//! The `MemorySink` captures every call the engine makes on its sink rather
//! than writing to a console, making it ideal for:
//!
//! - Unit testing code that logs through an [`Engine`](crate::Engine)
//! - Asserting which console channel a line was routed to
//! - Capturing logs in environments where the console is unavailable
//!
//! ## Architecture
//!
//! The sink keeps a `Mutex<Vec<SinkEvent>>` so that it can be shared through
//! an `Arc` between the engine and the test that inspects it.

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One call made on a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    /// A record written on the channel for its level.
    Record(LogRecord),
    /// A group was opened.
    GroupOpen {
        header: String,
        style: String,
        collapsed: bool,
    },
    /// A group was closed.
    GroupClose,
}

/// A sink that stores every call in memory.
///
/// # Example
///
/// ```rust
/// use consolog::{Engine, Level, MemorySink};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let engine = Engine::with_sinks(vec![sink.clone()]);
///
/// engine.create("App").warn("oops", vec![]);
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level(), Level::Warn);
/// assert!(sink.drain_logs().contains("[App]"));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<SinkEvent>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived; Default is the obvious empty buffer
// - Clone: NOT implemented - two sinks sharing nothing would surprise whoever
//   cloned one expecting to observe the other; share through Arc instead
// - PartialEq/Eq/Hash: NOT implemented - mutex state comparison is problematic
// - Send/Sync: automatic through the Mutex

impl MemorySink {
    /// Creates a sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SinkEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, event: SinkEvent) {
        self.lock().push(event);
    }

    /// A copy of every call recorded so far.
    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().clone()
    }

    /// Takes every call recorded so far, clearing the buffer.
    pub fn drain_events(&self) -> Vec<SinkEvent> {
        std::mem::take(&mut *self.lock())
    }

    /// The records written so far, ignoring group calls.
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Record(record) => Some(record.clone()),
                _ => None,
            })
            .collect()
    }

    /// Drains all records into a single string, one line each, clearing the buffer.
    ///
    /// Group calls are dropped.
    ///
    /// ```rust
    /// use consolog::{Engine, MemorySink};
    /// use std::sync::Arc;
    ///
    /// let sink = Arc::new(MemorySink::new());
    /// let engine = Engine::with_sinks(vec![sink.clone()]);
    /// engine.info("First message", None, vec![]);
    /// engine.warn("Second message", None, vec![]);
    ///
    /// let logs = sink.drain_logs();
    /// assert!(logs.contains("First message"));
    /// assert!(logs.contains("Second message"));
    /// assert_eq!(sink.drain_logs(), "");
    /// ```
    pub fn drain_logs(&self) -> String {
        self.drain_events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Record(record) => Some(record.to_string()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replays every recorded call onto `sink`, clearing the buffer.
    ///
    /// Useful to flush what was captured in an adversarial environment onto a
    /// real console once one is available.
    pub fn drain_to(&self, sink: &dyn Sink) {
        for event in self.drain_events() {
            match event {
                SinkEvent::Record(record) => sink.write_record(record),
                SinkEvent::GroupOpen {
                    header,
                    style,
                    collapsed,
                } => sink.open_group(&header, &style, collapsed),
                SinkEvent::GroupClose => sink.close_group(),
            }
        }
    }

    /// Flushes all recorded calls to the host console, clearing the buffer.
    pub fn drain_to_console(&self) {
        self.drain_to(&crate::console_sink::ConsoleSink::new());
    }
}

impl Sink for MemorySink {
    fn write_record(&self, record: LogRecord) {
        self.push(SinkEvent::Record(record));
    }

    fn open_group(&self, header: &str, style: &str, collapsed: bool) {
        self.push(SinkEvent::GroupOpen {
            header: header.to_string(),
            style: style.to_string(),
            collapsed,
        });
    }

    fn close_group(&self) {
        self.push(SinkEvent::GroupClose);
    }
}
