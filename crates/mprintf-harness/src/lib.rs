//! Conformance harness for mprintf.
//!
//! This crate provides:
//! - Fixtures: JSON reference cases for buffer and streaming calls
//! - Runner: execute cases against `mprintf-core` and compare
//! - Reports: markdown + JSON summaries of a verification run
//! - Structured logging: JSONL records for every case, with a validator

#![forbid(unsafe_code)]

pub mod args;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use args::ArgSpec;
pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureInputs, FixtureSet};
pub use report::ConformanceReport;
pub use runner::{Execution, TestRunner, execute_case};
pub use verify::{VerificationResult, VerificationSummary};
