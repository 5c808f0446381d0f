//! Integration test: structured logs for a fixture run
//!
//! Every record the harness emits for a verification run must pass the
//! log validator, and the summary record must agree with the results.
//!
//! Run: cargo test -p mprintf-harness --test structured_log_test

use std::path::Path;

use mprintf_harness::fixtures::load_dir;
use mprintf_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, validate_log_line, validate_log_text,
};
use mprintf_harness::{FixtureSet, TestRunner, VerificationSummary};

fn run_logged() -> (String, VerificationSummary) {
    let sets = load_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")).unwrap();
    let runner = TestRunner::new("log-test");
    let mut emitter = LogEmitter::to_buffer("log-test");
    let mut results = Vec::new();
    for set in &sets {
        for result in runner.run(set) {
            emitter
                .emit_entry(LogEntry::for_case(&set.family, &result))
                .unwrap();
            results.push(result);
        }
    }
    let summary = VerificationSummary::from_results(results);
    emitter
        .emit_entry(LogEntry::for_summary(&summary, 0))
        .unwrap();
    (String::from_utf8(emitter.into_inner()).unwrap(), summary)
}

#[test]
fn every_emitted_line_validates() {
    let (text, summary) = run_logged();
    let (lines, errors) = validate_log_text(&text);
    assert!(errors.is_empty(), "{:?}", errors.iter().map(ToString::to_string).collect::<Vec<_>>());
    assert_eq!(lines, summary.total + 1);
}

#[test]
fn summary_record_matches_results() {
    let (text, summary) = run_logged();
    let last = text.lines().last().unwrap();
    let entry = validate_log_line(last, 1).unwrap();
    assert_eq!(entry.event, "fixture.summary");
    assert_eq!(entry.outcome, Some(Outcome::Pass));
    let details = entry.details.unwrap();
    assert_eq!(details["total"], summary.total);
    assert_eq!(details["failed"], 0);
}

#[test]
fn trace_ids_are_sequential() {
    let (text, _) = run_logged();
    for (i, line) in text.lines().enumerate() {
        let entry = validate_log_line(line, i + 1).unwrap();
        assert_eq!(entry.trace_id, format!("mprintf::log-test::{:03}", i + 1));
    }
}

#[test]
fn failing_case_is_logged_with_details() {
    let set = FixtureSet::from_json(
        r#"{"version":"v1","family":"stdio/printf","captured_at":"2026-10-14T00:00:00Z","cases":[
            {"name":"wrong","function":"m_vsnprintf","section":"hex","inputs":{"format":"%x","args":[{"kind":"int","value":1}]},"expected_output":"1","expected_return":1}
        ]}"#,
    )
    .unwrap();
    let result = TestRunner::new("log-test").run(&set).remove(0);
    let entry = LogEntry::for_case(&set.family, &result);
    assert_eq!(entry.level, LogLevel::Warn);
    assert_eq!(entry.outcome, Some(Outcome::Fail));
    assert_eq!(entry.returned, Some(3));
    let details = entry.details.clone().unwrap();
    assert_eq!(details["actual"], "0x1");

    let mut emitter = LogEmitter::to_buffer("fail");
    emitter.emit_entry(entry).unwrap();
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(validate_log_text(&text).1.is_empty());
}

#[test]
fn case_record_without_case_name_is_rejected() {
    let line = LogEntry::new("mprintf::r::001", LogLevel::Info, "fixture.case")
        .to_jsonl()
        .unwrap();
    let errors = validate_log_line(&line, 1).unwrap_err();
    assert_eq!(errors[0].field, "case_name");
}
