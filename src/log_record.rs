// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type handed to sinks.
//!
//! A [`LogRecord`] is produced once a message has passed every filter. It keeps
//! the pieces of the line separate so each sink can lay them out the way its
//! host expects: the browser console wants `"%c<prefix>", style, message, ...`
//! while a terminal wants a single line of text.
//!
//! # Example
//!
//! ```rust
//! use consolog::{Level, LogRecord, args};
//!
//! let record = LogRecord::new(Level::Info, Some("App"), None, "color: teal", "ready", args![8080]);
//! assert_eq!(record.prefix(), "[INFO] [App]");
//! assert_eq!(record.to_string(), "[INFO] [App] ready 8080");
//! ```

use crate::Level;
use crate::value::Value;
use std::fmt::Display;

/**
A log record that passed filtering.

The prefix embeds the uppercased level, the bracketed context when there is
one, and the ISO-8601 timestamp when timestamps are shown.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: Level,
    prefix: String,
    style: String,
    message: String,
    args: Vec<Value>,
}

impl LogRecord {
    pub fn new(
        level: Level,
        context: Option<&str>,
        timestamp: Option<&str>,
        style: impl Into<String>,
        message: impl Into<String>,
        args: Vec<Value>,
    ) -> Self {
        let mut prefix = format!("[{}]", level.label());
        if let Some(context) = context {
            prefix.push_str(&format!(" [{}]", context));
        }
        if let Some(timestamp) = timestamp {
            prefix.push(' ');
            prefix.push_str(timestamp);
        }
        Self {
            level,
            prefix,
            style: style.into(),
            message: message.into(),
            args,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The display prefix, without any style directive.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The style hint for the prefix.
    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Trailing values, in the order the caller passed them.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The prefix as a console format string, with a `%c` directive picking up the style.
    pub fn styled_prefix(&self) -> String {
        format!("%c{}", self.prefix)
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

- Clone: sinks may fan a record out to several places
- PartialEq: tests compare records; Eq is out because Value carries f64
- Default: no, a record without a level makes no sense
- Hash/Ord: no meaningful identity or ordering
*/
