// SPDX-License-Identifier: MIT OR Apache-2.0

//! The filtering and dispatch engine.
//!
//! An [`Engine`] owns all mutable logging state: the global switch, the
//! minimum level, whether timestamps are shown, the per-level styles, the set of
//! disabled contexts and the timers in flight.  Every log call runs the same
//! decision sequence before anything is formatted:
//!
//! 1. the engine must be enabled;
//! 2. the message level must be at least the minimum level;
//! 3. a non-empty context must not be disabled.
//!
//! Calls that fail any check return without touching a sink.  Calls that pass
//! are turned into a [`LogRecord`] and handed to every sink, in the order they
//! were issued.
//!
//! # Examples
//!
//! ```
//! use consolog::{Engine, Level, MemorySink, args};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let engine = Engine::with_sinks(vec![sink.clone()]);
//! engine.hide_timestamp();
//!
//! engine.info("listening", Some("Http"), args![8080]);
//! engine.set_level(Level::Warn);
//! engine.info("dropped", Some("Http"), args![]);
//!
//! assert_eq!(sink.drain_logs(), "[INFO] [Http] listening 8080");
//! ```
//!
//! # Thread safety
//!
//! State sits behind a spinlock so that one engine can be shared across
//! threads or parked in a `static` (see [`global`](crate::global)).  The lock
//! is released before any sink runs, which lets a sink log through the same
//! engine.

use crate::config::Config;
use crate::console_sink::ConsoleSink;
use crate::handle::ContextHandle;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::spinlock::Spinlock;
use crate::style::{StyleOverrides, StyleTable};
use crate::sys::{self, Instant};
use crate::value::Value;
use crate::Level;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Arc;

#[derive(Debug)]
struct State {
    enabled: bool,
    min_level: Level,
    show_timestamp: bool,
    styles: StyleTable,
    disabled_contexts: HashSet<String>,
    timers: HashMap<String, Instant>,
}

impl State {
    fn from_config(config: &Config) -> Self {
        let mut styles = StyleTable::default();
        styles.merge(&config.styles);
        Self {
            enabled: config.enabled,
            min_level: config.level,
            show_timestamp: config.show_timestamp,
            styles,
            disabled_contexts: config.disabled_contexts.iter().cloned().collect(),
            timers: HashMap::new(),
        }
    }

    fn admits_context(&self, context: Option<&str>) -> bool {
        context.is_none_or(|context| !self.disabled_contexts.contains(context))
    }

    fn admits(&self, level: Level, context: Option<&str>) -> bool {
        self.enabled && level.index() >= self.min_level.index() && self.admits_context(context)
    }
}

/// An empty context is the same as no context.
fn non_empty(context: Option<&str>) -> Option<&str> {
    context.filter(|context| !context.is_empty())
}

/// Wire shape of a structured event.  Absent fields are left out of the text.
#[derive(Serialize)]
struct StructuredEvent<'a> {
    level: Level,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

/**
A logging engine.

Construct one per application (or per test) and pass it to whatever needs to
log.  All methods take `&self`.
*/
#[derive(Debug)]
pub struct Engine {
    state: Spinlock<State>,
    sinks: Spinlock<Vec<Arc<dyn Sink>>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// An engine with the default configuration writing to the host console.
    pub fn new() -> Self {
        Self::with_sinks(vec![Arc::new(ConsoleSink::new())])
    }

    /// An engine with the default configuration writing to `sinks`.
    pub fn with_sinks(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self::from_config(Config::default(), sinks)
    }

    /// An engine starting from `config`, writing to `sinks`.
    pub fn from_config(config: Config, sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            state: Spinlock::new(State::from_config(&config)),
            sinks: Spinlock::new(sinks),
        }
    }

    // ------------------------------------------------------------------
    // sinks
    // ------------------------------------------------------------------

    /// The sinks currently receiving output.
    pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
        self.sinks.read(|sinks| sinks.clone())
    }

    /// Adds a sink alongside the existing ones.
    pub fn add_sink(&self, sink: Arc<dyn Sink>) {
        self.sinks.write(|sinks| sinks.push(sink));
    }

    /// Replaces every sink.  With no sinks, output is silently dropped.
    pub fn set_sinks(&self, sinks: Vec<Arc<dyn Sink>>) {
        self.sinks.write(|current| *current = sinks);
    }

    /// Flushes every sink.
    pub fn flush(&self) {
        for sink in self.sinks() {
            sink.flush();
        }
    }

    // ------------------------------------------------------------------
    // configuration
    // ------------------------------------------------------------------

    pub fn enable(&self) {
        self.state.write(|state| state.enabled = true);
    }

    /// Suppresses all output until [`enable`](Self::enable).  Level, context
    /// and style settings are kept as they are.
    pub fn disable(&self) {
        self.state.write(|state| state.enabled = false);
    }

    pub fn is_enabled(&self) -> bool {
        self.state.read(|state| state.enabled)
    }

    /// Drops messages below `level`.
    pub fn set_level(&self, level: Level) {
        self.state.write(|state| state.min_level = level);
    }

    /// The minimum level.
    pub fn level(&self) -> Level {
        self.state.read(|state| state.min_level)
    }

    pub fn show_timestamp(&self) {
        self.state.write(|state| state.show_timestamp = true);
    }

    pub fn hide_timestamp(&self) {
        self.state.write(|state| state.show_timestamp = false);
    }

    pub fn timestamps_shown(&self) -> bool {
        self.state.read(|state| state.show_timestamp)
    }

    /// Suppresses every message carrying `context`.  Disabling twice is a no-op.
    pub fn disable_context(&self, context: &str) {
        self.state.write(|state| {
            state.disabled_contexts.insert(context.to_string());
        });
    }

    /// Lets messages carrying `context` through again.  Enabling a context that
    /// was never disabled is a no-op.
    pub fn enable_context(&self, context: &str) {
        self.state.write(|state| {
            state.disabled_contexts.remove(context);
        });
    }

    pub fn is_context_disabled(&self, context: &str) -> bool {
        self.state
            .read(|state| state.disabled_contexts.contains(context))
    }

    /// Replaces the styles of the levels present in `overrides`.
    ///
    /// ```
    /// use consolog::{Engine, Level, StyleOverrides};
    ///
    /// let engine = Engine::with_sinks(vec![]);
    /// let before = engine.styles();
    /// engine.configure_styles(StyleOverrides::new().info("X"));
    /// assert_eq!(engine.styles().get(Level::Info), "X");
    /// assert_eq!(engine.styles().get(Level::Warn), before.get(Level::Warn));
    /// ```
    pub fn configure_styles(&self, overrides: StyleOverrides) {
        self.state.write(|state| state.styles.merge(&overrides));
    }

    /// A copy of the current style table.
    pub fn styles(&self) -> StyleTable {
        self.state.read(|state| state.styles.clone())
    }

    /// A snapshot of the current settings.  Timers are not part of it.
    pub fn config(&self) -> Config {
        self.state.read(|state| {
            let mut disabled_contexts: Vec<String> =
                state.disabled_contexts.iter().cloned().collect();
            disabled_contexts.sort();
            Config {
                enabled: state.enabled,
                level: state.min_level,
                show_timestamp: state.show_timestamp,
                styles: StyleOverrides::from(&state.styles),
                disabled_contexts,
            }
        })
    }

    // ------------------------------------------------------------------
    // contexts
    // ------------------------------------------------------------------

    /// A handle that logs with `context` filled in.
    ///
    /// Handles are independent of each other and of the engine's state; any
    /// number may exist for the same context.
    pub fn create(&self, context: impl Into<String>) -> ContextHandle<'_> {
        ContextHandle::new(self, context.into())
    }

    // ------------------------------------------------------------------
    // filtering and dispatch
    // ------------------------------------------------------------------

    fn log(&self, level: Level, message: &str, context: Option<&str>, data: Vec<Value>) {
        let context = non_empty(context);
        let Some((style, show_timestamp)) = self.state.read(|state| {
            state
                .admits(level, context)
                .then(|| (state.styles.get(level).to_string(), state.show_timestamp))
        }) else {
            return;
        };
        let timestamp = show_timestamp.then(sys::iso_timestamp);
        let record = LogRecord::new(level, context, timestamp.as_deref(), style, message, data);
        for sink in self.sinks() {
            sink.write_record(record.clone());
        }
    }

    pub fn debug(&self, message: &str, context: Option<&str>, data: Vec<Value>) {
        self.log(Level::Debug, message, context, data);
    }

    pub fn info(&self, message: &str, context: Option<&str>, data: Vec<Value>) {
        self.log(Level::Info, message, context, data);
    }

    pub fn warn(&self, message: &str, context: Option<&str>, data: Vec<Value>) {
        self.log(Level::Warn, message, context, data);
    }

    pub fn error(&self, message: &str, context: Option<&str>, data: Vec<Value>) {
        self.log(Level::Error, message, context, data);
    }

    /**
    Logs a structured event as a single JSON text.

    The event is `{"level", "message", "context", "data", "timestamp"}`;
    `context` and `data` are left out when not given and `timestamp` when
    timestamps are hidden.  An empty context is kept in the event, though it
    neither filters nor appears in the prefix.  The text then goes through the regular dispatch at
    `level`, so it is subject to the same filters.

    ```
    use consolog::{Engine, Level, MemorySink};
    use std::sync::Arc;

    let sink = Arc::new(MemorySink::new());
    let engine = Engine::with_sinks(vec![sink.clone()]);
    engine.hide_timestamp();
    engine.json(Level::Info, "m", Some("ctx"), Some(serde_json::json!({"a": 1})));

    let records = sink.records();
    assert_eq!(records[0].message(), r#"{"level":"info","message":"m","context":"ctx","data":{"a":1}}"#);
    ```
    */
    pub fn json(
        &self,
        level: Level,
        message: &str,
        context: Option<&str>,
        data: Option<serde_json::Value>,
    ) {
        let Some(show_timestamp) = self.state.read(|state| {
            state
                .admits(level, non_empty(context))
                .then_some(state.show_timestamp)
        }) else {
            return;
        };
        let event = StructuredEvent {
            level,
            message,
            context,
            data: data.as_ref(),
            timestamp: show_timestamp.then(sys::iso_timestamp),
        };
        // string keys and JSON values only, so serialization cannot fail
        let Ok(text) = serde_json::to_string(&event) else {
            return;
        };
        self.log(level, &text, context, Vec::new());
    }

    /// Logs `payload` at info level under a `DATA:` label.
    pub fn data(&self, context: &str, payload: impl Into<Value>) {
        self.log(Level::Info, "DATA:", Some(context), vec![payload.into()]);
    }

    // ------------------------------------------------------------------
    // timing
    // ------------------------------------------------------------------

    /// Starts (or restarts) the timer named `label`.
    pub fn start(&self, label: &str, context: Option<&str>) {
        let now = Instant::now();
        self.state.write(|state| {
            state.timers.insert(label.to_string(), now);
        });
        self.log(
            Level::Debug,
            &format!("Timer '{label}' started"),
            context,
            Vec::new(),
        );
    }

    /// Stops the timer named `label` and returns the elapsed milliseconds.
    ///
    /// An unknown label logs a warning and returns `0.0`.
    pub fn end(&self, label: &str, context: Option<&str>) -> f64 {
        let now = Instant::now();
        let Some(start) = self.state.write(|state| state.timers.remove(label)) else {
            self.log(
                Level::Warn,
                &format!("No timer found for '{label}'"),
                context,
                Vec::new(),
            );
            return 0.0;
        };
        let elapsed = now.duration_since(start).as_secs_f64() * 1000.0;
        self.log(
            Level::Info,
            &format!("Timer '{label}' ended: {elapsed:.2}ms"),
            context,
            Vec::new(),
        );
        elapsed
    }

    pub fn is_timer_running(&self, label: &str) -> bool {
        self.state.read(|state| state.timers.contains_key(label))
    }

    fn measure_started(&self, label: &str, context: Option<&str>) -> Instant {
        self.log(
            Level::Debug,
            &format!("Measure '{label}' start"),
            context,
            Vec::new(),
        );
        Instant::now()
    }

    fn measure_finished(&self, label: &str, context: Option<&str>, start: Instant) -> f64 {
        let elapsed = sys::round_ms(sys::elapsed_ms(start));
        self.log(
            Level::Info,
            &format!("Measure '{label}' end: {elapsed:.2}ms"),
            context,
            Vec::new(),
        );
        elapsed
    }

    /**
    Runs `f` and returns how long it took, in milliseconds rounded to two places.

    A panic in `f` unwinds straight through; no "end" line is logged for it.
    */
    pub fn measure<F: FnOnce()>(&self, label: &str, f: F, context: Option<&str>) -> f64 {
        let start = self.measure_started(label, context);
        f();
        self.measure_finished(label, context, start)
    }

    /**
    Like [`measure`](Self::measure), for work that can fail.

    An `Err` is returned unchanged and no "end" line is logged.

    ```
    use consolog::{Engine, MemorySink};
    use std::sync::Arc;

    let sink = Arc::new(MemorySink::new());
    let engine = Engine::with_sinks(vec![sink.clone()]);

    let (answer, ms) = engine.try_measure("parse", || "42".parse::<u32>(), None).unwrap();
    assert_eq!(answer, 42);
    assert!(ms >= 0.0);

    assert!(engine.try_measure("parse", || "x".parse::<u32>(), None).is_err());
    ```
    */
    pub fn try_measure<T, E, F>(
        &self,
        label: &str,
        f: F,
        context: Option<&str>,
    ) -> Result<(T, f64), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let start = self.measure_started(label, context);
        let value = f()?;
        Ok((value, self.measure_finished(label, context, start)))
    }

    /**
    Awaits `work` and returns how long it took, in milliseconds rounded to two places.

    The time spent suspended inside `work` counts.  If `work` panics, or the
    returned future is dropped before it completes, no "end" line is logged.
    */
    pub async fn measure_async<Fut>(&self, label: &str, work: Fut, context: Option<&str>) -> f64
    where
        Fut: Future<Output = ()>,
    {
        let start = self.measure_started(label, context);
        work.await;
        self.measure_finished(label, context, start)
    }

    /// Like [`measure_async`](Self::measure_async), for work that can fail.
    /// An `Err` is returned unchanged and no "end" line is logged.
    pub async fn try_measure_async<T, E, Fut>(
        &self,
        label: &str,
        work: Fut,
        context: Option<&str>,
    ) -> Result<(T, f64), E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        let start = self.measure_started(label, context);
        let value = work.await?;
        Ok((value, self.measure_finished(label, context, start)))
    }

    // ------------------------------------------------------------------
    // grouping
    // ------------------------------------------------------------------

    /**
    Opens a console group headed `[GROUP: <label>] [<context>]`.

    Only the enabled switch and the disabled contexts are checked; the
    minimum level does not apply to groups.  Without an explicit `style` the
    current info style is used.
    */
    pub fn group(&self, label: &str, context: Option<&str>, style: Option<&str>, collapsed: bool) {
        let context = non_empty(context);
        let Some(style) = self.state.read(|state| {
            (state.enabled && state.admits_context(context)).then(|| {
                style
                    .unwrap_or_else(|| state.styles.get(Level::Info))
                    .to_string()
            })
        }) else {
            return;
        };
        let header = match context {
            Some(context) => format!("[GROUP: {label}] [{context}]"),
            None => format!("[GROUP: {label}]"),
        };
        for sink in self.sinks() {
            sink.open_group(&header, &style, collapsed);
        }
    }

    /// Closes the most recently opened group.  Never filtered, never checked
    /// against the number of open groups.
    pub fn group_end(&self) {
        for sink in self.sinks() {
            sink.close_group();
        }
    }
}
