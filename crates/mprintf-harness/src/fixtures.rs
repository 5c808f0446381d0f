//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::args::ArgSpec;
use crate::error::HarnessError;

/// Inputs of one formatting call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureInputs {
    /// Destination capacity for buffer calls. Streaming calls always
    /// stage into the fixed staging buffer and ignore it.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Channel id handed to the sink in streaming calls.
    #[serde(default)]
    pub channel: u8,
    pub format: String,
    #[serde(default)]
    pub args: Vec<ArgSpec>,
}

fn default_capacity() -> usize {
    mprintf_core::MPRINTF_BUF_SIZE
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Entry point: `m_vsnprintf`, `m_vprintf`, or `printer_unset`.
    pub function: String,
    /// Behaviour area this case pins down (e.g. `truncation`).
    pub section: String,
    pub inputs: FixtureInputs,
    /// Expected output bytes, non-printable bytes escaped as `\xNN`.
    pub expected_output: String,
    /// Expected return value.
    pub expected_return: usize,
}

/// A collection of fixture cases for one family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        Self::from_json(&content)
    }
}

/// Sorted list of `*.json` files in `dir`.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| HarnessError::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every fixture set in `dir`. Fails if there are none.
pub fn load_dir(dir: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    let sets = fixture_paths(dir)?
        .iter()
        .map(|path| FixtureSet::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    if sets.is_empty() {
        return Err(HarnessError::NoFixtures {
            dir: dir.to_path_buf(),
        });
    }
    Ok(sets)
}
