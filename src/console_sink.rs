// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::log_record::LogRecord;
use crate::sink::Sink;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::atomic::{AtomicUsize, Ordering};

/**
A sink that writes to the host console.

On wasm32 this is the browser console: each level goes to its own
`console.*` method, the prefix is styled through `%c`, and groups map to
`console.group`/`console.groupCollapsed`/`console.groupEnd`.

On native targets debug and info lines go to stdout, warn and error lines to
stderr.  Style hints are dropped, and each open group indents the lines
written inside it.
*/
#[derive(Debug, Default)]
pub struct ConsoleSink {
    #[cfg(not(target_arch = "wasm32"))]
    depth: AtomicUsize,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug/Default: derived
// - Clone/Copy: NOT implemented - on native the sink tracks group depth, and
//   a copy would indent independently of the original
// - PartialEq/Eq/Hash: NOT implemented - no meaningful identity
// - Send/Sync: automatic

impl ConsoleSink {
    pub const fn new() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            depth: AtomicUsize::new(0),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn indent(&self) -> String {
        "  ".repeat(self.depth.load(Ordering::Relaxed))
    }
}

/// Largest integer a JS number holds exactly.
#[cfg(target_arch = "wasm32")]
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

#[cfg(target_arch = "wasm32")]
fn to_js(value: &crate::Value) -> wasm_bindgen::JsValue {
    use crate::Value;
    use wasm_bindgen::JsValue;
    match value {
        Value::Text(text) => JsValue::from_str(text),
        Value::Int(n) if n.unsigned_abs() <= MAX_SAFE_INTEGER => JsValue::from_f64(*n as f64),
        Value::Int(n) => js_sys::BigInt::from(*n).into(),
        Value::UInt(n) if *n <= MAX_SAFE_INTEGER => JsValue::from_f64(*n as f64),
        Value::UInt(n) => js_sys::BigInt::from(*n).into(),
        Value::Number(n) => JsValue::from_f64(*n),
        Value::Bool(b) => JsValue::from_bool(*b),
        Value::Null => JsValue::NULL,
        Value::Structured(json) => {
            let text = json.to_string();
            js_sys::JSON::parse(&text).unwrap_or_else(|_| JsValue::from_str(&text))
        }
    }
}

impl Sink for ConsoleSink {
    fn write_record(&self, record: LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::Level;
            use std::io::Write;
            let line = format!("{}{}\n", self.indent(), record);
            match record.level() {
                Level::Debug | Level::Info => std::io::stdout()
                    .lock()
                    .write_all(line.as_bytes())
                    .expect("Can't log to stdout"),
                Level::Warn | Level::Error => std::io::stderr()
                    .lock()
                    .write_all(line.as_bytes())
                    .expect("Can't log to stderr"),
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            use wasm_bindgen::JsValue;
            let parts = js_sys::Array::new();
            parts.push(&JsValue::from_str(&record.styled_prefix()));
            parts.push(&JsValue::from_str(record.style()));
            parts.push(&JsValue::from_str(record.message()));
            for arg in record.args() {
                parts.push(&to_js(arg));
            }
            match record.level() {
                Level::Debug => web_sys::console::debug(&parts),
                Level::Info => web_sys::console::info(&parts),
                Level::Warn => web_sys::console::warn(&parts),
                Level::Error => web_sys::console::error(&parts),
            }
        }
    }

    #[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
    fn open_group(&self, header: &str, style: &str, collapsed: bool) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let marker = if collapsed { "▸" } else { "▾" };
            let line = format!("{}{} {}\n", self.indent(), marker, header);
            std::io::stdout()
                .lock()
                .write_all(line.as_bytes())
                .expect("Can't log to stdout");
            self.depth.fetch_add(1, Ordering::Relaxed);
        }
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsValue;
            let parts = js_sys::Array::of2(
                &JsValue::from_str(&format!("%c{}", header)),
                &JsValue::from_str(style),
            );
            if collapsed {
                web_sys::console::group_collapsed(&parts);
            } else {
                web_sys::console::group(&parts);
            }
        }
    }

    fn close_group(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = self
                .depth
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |d| d.checked_sub(1));
        }
        #[cfg(target_arch = "wasm32")]
        web_sys::console::group_end();
    }

    fn flush(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            std::io::stdout().lock().flush().expect("Can't flush stdout");
            std::io::stderr().lock().flush().expect("Can't flush stderr");
        }
    }
}
