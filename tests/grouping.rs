// SPDX-License-Identifier: MIT OR Apache-2.0

//! Console groups.

use consolog::{Engine, Level, MemorySink, SinkEvent, StyleOverrides, StyleTable};
use std::sync::Arc;

fn engine() -> (Engine, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Engine::with_sinks(vec![sink.clone()]), sink)
}

fn open(header: &str, style: &str, collapsed: bool) -> SinkEvent {
    SinkEvent::GroupOpen {
        header: header.to_string(),
        style: style.to_string(),
        collapsed,
    }
}

#[test]
fn headers_with_and_without_context() {
    let (engine, sink) = engine();
    engine.group("Startup", Some("App"), Some("font-weight: bold"), false);
    engine.group("Details", None, Some("s"), true);
    engine.group_end();
    engine.group_end();
    assert_eq!(
        sink.events(),
        vec![
            open("[GROUP: Startup] [App]", "font-weight: bold", false),
            open("[GROUP: Details]", "s", true),
            SinkEvent::GroupClose,
            SinkEvent::GroupClose,
        ]
    );
}

#[test]
fn default_style_is_the_current_info_style() {
    let (engine, sink) = engine();
    engine.group("a", None, None, false);
    engine.configure_styles(StyleOverrides::new().info("color: teal"));
    engine.create("Ctx").group("b", None, false);
    assert_eq!(
        sink.events(),
        vec![
            open("[GROUP: a]", StyleTable::default().get(Level::Info), false),
            open("[GROUP: b] [Ctx]", "color: teal", false),
        ]
    );
}

#[test]
fn groups_ignore_the_minimum_level() {
    let (engine, sink) = engine();
    engine.set_level(Level::Error);
    engine.group("visible", None, None, false);
    engine.info("hidden", None, vec![]);
    assert_eq!(sink.events().len(), 1);
}

#[test]
fn groups_respect_enabled_and_disabled_contexts() {
    let (engine, sink) = engine();
    engine.disable_context("Muted");
    engine.group("muted", Some("Muted"), None, false);
    engine.disable();
    engine.group("off", None, None, false);
    assert!(sink.events().is_empty());
}

#[test]
fn group_end_is_never_filtered_or_balanced() {
    let (engine, sink) = engine();
    engine.group_end();
    engine.disable();
    engine.group_end();
    assert_eq!(
        sink.events(),
        vec![SinkEvent::GroupClose, SinkEvent::GroupClose]
    );
}
