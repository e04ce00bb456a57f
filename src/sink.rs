// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use std::fmt::Debug;

/**
The host console that ultimately renders log lines.

A sink exposes one output channel per [`Level`](crate::Level) (selected from
[`LogRecord::level`]) and the grouping primitives of a browser console.
*/
pub trait Sink: Debug + Send + Sync {
    /**
    Writes a record on the channel for its level.
    */
    fn write_record(&self, record: LogRecord);

    /**
    Opens a nested group with the given header.

    The header is plain text; `style` is the hint to render it with.
    */
    fn open_group(&self, header: &str, style: &str, collapsed: bool);

    /**
    Closes the most recently opened group.

    Sinks decide for themselves what closing with no open group means.
    */
    fn close_group(&self);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self) {}
}

/*
Boilerplate notes.

# Sink

Clone on a trait object is out; sinks are shared through Arc.
PartialEq/Eq would have to pick between data and provenance equality, so no.
Default makes no sense for the trait.
Send/Sync are required so one engine can be reached from anywhere.
*/
