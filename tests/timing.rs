// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named timers and measured work.

use consolog::{Engine, Level, LogRecord, MemorySink};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn engine() -> (Engine, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let engine = Engine::with_sinks(vec![sink.clone()]);
    engine.hide_timestamp();
    (engine, sink)
}

fn summary(records: &[LogRecord]) -> Vec<(Level, String)> {
    records
        .iter()
        .map(|r| (r.level(), r.message().to_string()))
        .collect()
}

#[test]
fn start_end_reports_elapsed_time() {
    let (engine, sink) = engine();
    let wall = Instant::now();
    engine.start("load", None);
    assert!(engine.is_timer_running("load"));
    thread::sleep(Duration::from_millis(20));
    let elapsed = engine.end("load", None);
    let outer = wall.elapsed().as_secs_f64() * 1000.0;

    assert!(elapsed >= 20.0, "elapsed {elapsed}");
    assert!(elapsed <= outer, "elapsed {elapsed} > wall {outer}");
    assert!(!engine.is_timer_running("load"));

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level(), Level::Debug);
    assert_eq!(records[0].message(), "Timer 'load' started");
    assert_eq!(records[1].level(), Level::Info);
    assert_eq!(
        records[1].message(),
        format!("Timer 'load' ended: {elapsed:.2}ms")
    );
}

#[test]
fn ending_twice_warns_and_returns_zero() {
    let (engine, sink) = engine();
    engine.start("once", None);
    assert!(engine.end("once", None) >= 0.0);
    sink.drain_events();

    assert_eq!(engine.end("once", None), 0.0);
    assert_eq!(
        summary(&sink.records()),
        vec![(Level::Warn, "No timer found for 'once'".to_string())]
    );
}

#[test]
fn restarting_a_running_timer_keeps_the_last_start() {
    let (engine, _sink) = engine();
    engine.start("lap", None);
    thread::sleep(Duration::from_millis(40));
    engine.start("lap", None);
    let elapsed = engine.end("lap", None);
    assert!(elapsed < 40.0, "elapsed {elapsed} includes the first start");
    assert_eq!(engine.end("lap", None), 0.0);
}

#[test]
fn a_label_can_be_reused_after_it_ends() {
    let (engine, _sink) = engine();
    engine.start("job", None);
    engine.end("job", None);
    engine.start("job", None);
    assert!(engine.is_timer_running("job"));
    assert!(engine.end("job", None) >= 0.0);
}

#[test]
fn timers_run_even_when_their_logs_are_filtered() {
    let (engine, sink) = engine();
    engine.set_level(Level::Error);
    engine.start("quiet", None);
    assert!(engine.end("quiet", None) >= 0.0);
    assert_eq!(engine.end("quiet", None), 0.0);
    assert!(sink.events().is_empty());
}

#[test]
fn measure_rounds_to_two_decimals() {
    let (engine, sink) = engine();
    let mut ran = false;
    let elapsed = engine.measure(
        "work",
        || {
            thread::sleep(Duration::from_millis(5));
            ran = true;
        },
        Some("Bench"),
    );
    assert!(ran);
    assert!(elapsed >= 5.0, "elapsed {elapsed}");
    assert_eq!((elapsed * 100.0).round() / 100.0, elapsed);

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level(), Level::Debug);
    assert_eq!(records[0].message(), "Measure 'work' start");
    assert_eq!(records[1].level(), Level::Info);
    assert_eq!(
        records[1].message(),
        format!("Measure 'work' end: {elapsed:.2}ms")
    );
    assert!(records.iter().all(|r| r.prefix() == format!("[{}] [Bench]", r.level().label())));
}

#[test]
fn measure_lets_panics_through_without_an_end_line() {
    let (engine, sink) = engine();
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        engine.measure("explodes", || panic!("kaboom"), None)
    }));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"kaboom"));
    assert_eq!(
        summary(&sink.records()),
        vec![(Level::Debug, "Measure 'explodes' start".to_string())]
    );

    // the engine is still usable afterwards
    engine.info("after", None, vec![]);
    assert_eq!(sink.records().len(), 2);
}

#[derive(Debug, PartialEq)]
struct ParseFailure(&'static str);

#[test]
fn try_measure_propagates_errors_unchanged() {
    let (engine, sink) = engine();
    let err = engine
        .try_measure("parse", || Err::<u32, _>(ParseFailure("bad input")), None)
        .unwrap_err();
    assert_eq!(err, ParseFailure("bad input"));
    assert_eq!(sink.records().len(), 1);

    let (value, elapsed) = engine
        .try_measure("parse", || Ok::<_, ParseFailure>(7), None)
        .unwrap();
    assert_eq!(value, 7);
    assert!(elapsed >= 0.0);
    assert_eq!(sink.records().len(), 3);
}

#[test_executors::async_test]
async fn measure_async_includes_the_awaited_work() {
    let (engine, sink) = engine();
    let elapsed = engine
        .measure_async(
            "fetch",
            async {
                thread::sleep(Duration::from_millis(10));
            },
            Some("Net"),
        )
        .await;
    assert!(elapsed >= 10.0, "elapsed {elapsed}");
    assert_eq!((elapsed * 100.0).round() / 100.0, elapsed);
    assert_eq!(
        summary(&sink.records()),
        vec![
            (Level::Debug, "Measure 'fetch' start".to_string()),
            (Level::Info, format!("Measure 'fetch' end: {elapsed:.2}ms")),
        ]
    );
}

#[test_executors::async_test]
async fn try_measure_async_propagates_errors_without_an_end_line() {
    let (engine, sink) = engine();
    let result = engine
        .try_measure_async("fetch", async { Err::<(), _>(ParseFailure("offline")) }, None)
        .await;
    assert_eq!(result.unwrap_err(), ParseFailure("offline"));
    assert_eq!(
        summary(&sink.records()),
        vec![(Level::Debug, "Measure 'fetch' start".to_string())]
    );

    let handle = engine.create("Net");
    let (body, _) = handle
        .try_measure_async("fetch", async { Ok::<_, ParseFailure>("body") })
        .await
        .unwrap();
    assert_eq!(body, "body");
    let elapsed = handle.measure_async("idle", async {}).await;
    assert!(elapsed >= 0.0);
}
