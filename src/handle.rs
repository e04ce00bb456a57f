// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-bound handles.

use crate::engine::Engine;
use crate::value::Value;
use std::future::Future;

/**
An [`Engine`] bound to a fixed context.

Every method forwards to the engine method of the same name with the context
filled in.  The handle holds nothing but the context string: creating or
dropping one never changes the engine.

```
use consolog::{Engine, MemorySink, args};
use std::sync::Arc;

let sink = Arc::new(MemorySink::new());
let engine = Engine::with_sinks(vec![sink.clone()]);
engine.hide_timestamp();

let db = engine.create("Db");
db.warn("slow query", args!["users", 1200]);
assert_eq!(sink.drain_logs(), "[WARN] [Db] slow query users 1200");
```
*/
#[derive(Debug, Clone)]
pub struct ContextHandle<'e> {
    engine: &'e Engine,
    context: String,
}

impl<'e> ContextHandle<'e> {
    pub(crate) fn new(engine: &'e Engine, context: String) -> Self {
        Self { engine, context }
    }

    /// The context this handle logs with.
    pub fn context(&self) -> &str {
        &self.context
    }

    fn ctx(&self) -> Option<&str> {
        Some(self.context.as_str())
    }

    pub fn debug(&self, message: &str, data: Vec<Value>) {
        self.engine.debug(message, self.ctx(), data);
    }

    pub fn info(&self, message: &str, data: Vec<Value>) {
        self.engine.info(message, self.ctx(), data);
    }

    pub fn warn(&self, message: &str, data: Vec<Value>) {
        self.engine.warn(message, self.ctx(), data);
    }

    pub fn error(&self, message: &str, data: Vec<Value>) {
        self.engine.error(message, self.ctx(), data);
    }

    pub fn data(&self, payload: impl Into<Value>) {
        self.engine.data(&self.context, payload);
    }

    pub fn start(&self, label: &str) {
        self.engine.start(label, self.ctx());
    }

    pub fn end(&self, label: &str) -> f64 {
        self.engine.end(label, self.ctx())
    }

    pub fn measure<F: FnOnce()>(&self, label: &str, f: F) -> f64 {
        self.engine.measure(label, f, self.ctx())
    }

    pub fn try_measure<T, E, F>(&self, label: &str, f: F) -> Result<(T, f64), E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.engine.try_measure(label, f, self.ctx())
    }

    pub async fn measure_async<Fut>(&self, label: &str, work: Fut) -> f64
    where
        Fut: Future<Output = ()>,
    {
        self.engine.measure_async(label, work, self.ctx()).await
    }

    pub async fn try_measure_async<T, E, Fut>(&self, label: &str, work: Fut) -> Result<(T, f64), E>
    where
        Fut: Future<Output = Result<T, E>>,
    {
        self.engine.try_measure_async(label, work, self.ctx()).await
    }

    pub fn group(&self, label: &str, style: Option<&str>, collapsed: bool) {
        self.engine.group(label, self.ctx(), style, collapsed);
    }
}
