//! Test execution engine.

use mprintf_console::IoSink;
use mprintf_core::{BoundedWriter, Printer, format_into, m_vprintf};

use crate::args::to_format_args;
use crate::diff;
use crate::error::HarnessError;
use crate::fixtures::{FixtureCase, FixtureInputs, FixtureSet};
use crate::verify::VerificationResult;

/// Outcome of running one formatting call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Output bytes up to the terminator.
    pub output: Vec<u8>,
    pub returned: usize,
    /// Whether the truncation marker was written. Always false for
    /// streaming calls, which do not expose the writer.
    pub truncated: bool,
}

impl Execution {
    #[must_use]
    pub fn rendered(&self) -> String {
        render_bytes(&self.output)
    }
}

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(verify_case).collect()
    }
}

fn verify_case(case: &FixtureCase) -> VerificationResult {
    let (actual, actual_return, truncated) = match execute_case(case) {
        Ok(run) => (run.rendered(), Some(run.returned), run.truncated),
        Err(err) => (format!("unsupported:{err}"), None, false),
    };
    let passed = actual == case.expected_output && actual_return == Some(case.expected_return);
    let diff = if passed {
        None
    } else if actual != case.expected_output {
        Some(diff::render_diff(&case.expected_output, &actual))
    } else {
        Some(format!(
            "return mismatch: expected={}, actual={}",
            case.expected_return,
            actual_return.map_or_else(|| String::from("none"), |n| n.to_string())
        ))
    };
    VerificationResult {
        case_name: case.name.clone(),
        section: case.section.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        expected_return: case.expected_return,
        actual_return,
        truncated,
        diff,
    }
}

/// Execute the call a fixture case describes.
pub fn execute_case(case: &FixtureCase) -> Result<Execution, HarnessError> {
    match case.function.as_str() {
        "m_vsnprintf" | "m_snprintf" => execute_buffer(&case.inputs),
        "m_vprintf" | "m_printf" => execute_stream(&case.inputs),
        "printer_unset" => execute_unset(&case.inputs),
        other => Err(HarnessError::UnknownFunction {
            function: other.to_string(),
        }),
    }
}

/// Buffer mode into a fresh `capacity`-byte buffer.
pub fn execute_buffer(inputs: &FixtureInputs) -> Result<Execution, HarnessError> {
    let args = to_format_args(&inputs.args)?;
    let mut buf = vec![0u8; inputs.capacity];
    let mut writer = BoundedWriter::new(&mut buf);
    let returned = format_into(&mut writer, inputs.format.as_bytes(), &args);
    let truncated = writer.is_truncated();
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    buf.truncate(end);
    Ok(Execution {
        output: buf,
        returned,
        truncated,
    })
}

/// Streaming mode into an in-memory sink.
pub fn execute_stream(inputs: &FixtureInputs) -> Result<Execution, HarnessError> {
    let args = to_format_args(&inputs.args)?;
    let mut sink = IoSink::new(Vec::new());
    let returned = m_vprintf(&mut sink, inputs.channel, inputs.format.as_bytes(), &args);
    Ok(Execution {
        output: sink.finish()?,
        returned,
        truncated: false,
    })
}

/// Streaming through a printer with no sink installed.
fn execute_unset(inputs: &FixtureInputs) -> Result<Execution, HarnessError> {
    let args = to_format_args(&inputs.args)?;
    let mut printer: Printer<IoSink<Vec<u8>>> = Printer::new().on_channel(inputs.channel);
    let returned = printer.printf(inputs.format.as_bytes(), &args);
    Ok(Execution {
        output: Vec::new(),
        returned,
        truncated: false,
    })
}

/// Printable ASCII verbatim; `\` and everything else as `\\` / `\xNN`.
#[must_use]
pub fn render_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            0x20..=0x7e => out.push(char::from(b)),
            _ => out.push_str(&format!("\\x{b:02x}")),
        }
    }
    out
}
