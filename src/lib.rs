//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# consolog

consolog is a small logging facade over the host console.

It adds the handful of things a bare console lacks when debugging a small or
medium application: level filtering, per-context muting, timestamps, styled
prefixes, timers and single-line JSON events.  It is not a telemetry pipeline;
there is no transport, persistence, rotation or sampling.

# The engine

All state lives in an [`Engine`]: an on/off switch, the minimum [`Level`],
whether timestamps are shown, a [`StyleTable`], the contexts currently muted
and the timers in flight.  Construct one, hand out references, and log:

```rust
use consolog::{Engine, Level, args};

let engine = Engine::new();
engine.info("server starting", Some("Http"), args![8080]);

let db = engine.create("Db");
db.warn("slow query", args!["users"]);

engine.set_level(Level::Error);
db.warn("this is dropped", args![]);
```

A message is written only if the engine is enabled, its level is at least the
minimum level, and its context (if any) is not disabled.  Everything else is
dropped before any formatting happens.

# Levels

| Name  | Console channel  |
|-------|------------------|
| debug | `console.debug`  |
| info  | `console.info`   |
| warn  | `console.warn`   |
| error | `console.error`  |

# Output

Each line starts with a prefix such as `[WARN] [Db] 2024-05-01T12:30:00.125Z`,
rendered with the level's style.  The message and any trailing [`Value`]s follow
in the order given.  [`Engine::json`] instead produces a single JSON text:

```rust
# use consolog::{Engine, Level};
# let engine = Engine::new();
engine.json(Level::Info, "user created", Some("Auth"), Some(serde_json::json!({"id": 7})));
```

On wasm32 output goes to the browser console, with `%c` styling and native
console groups.  Elsewhere it goes to stdout and stderr.  Any [`Sink`] can be
plugged in instead; [`MemorySink`] captures everything for tests.

# Timing

```rust
# use consolog::Engine;
# let engine = Engine::new();
engine.start("load", None);
// ...
let ms = engine.end("load", None);

let ms = engine.measure("parse", || { /* work */ }, None);
```

# Multithreading

An [`Engine`] is `Send + Sync`.  Its lock is never held while a sink runs, so
sinks may log through the engine that called them.
*/

mod config;
mod console_sink;
mod engine;
mod error;
mod global;
mod handle;
mod inmemory_sink;
mod level;
mod log_record;
mod macros;
mod sink;
mod spinlock;
mod style;
mod sys;
mod value;

pub use config::Config;
pub use console_sink::ConsoleSink;
pub use engine::Engine;
pub use error::Error;
pub use global::global;
pub use handle::ContextHandle;
pub use inmemory_sink::{MemorySink, SinkEvent};
pub use level::Level;
pub use log_record::LogRecord;
pub use sink::Sink;
pub use style::{StyleOverrides, StyleTable};
pub use value::Value;
