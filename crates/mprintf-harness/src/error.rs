//! Harness error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported argument kind '{kind}'")]
    UnsupportedArg { kind: String },
    #[error("argument of kind '{kind}' cannot take value {value}")]
    BadArgValue { kind: String, value: String },
    #[error("unknown fixture function '{function}'")]
    UnknownFunction { function: String },
    #[error("no fixture JSON files found in {}", dir.display())]
    NoFixtures { dir: PathBuf },
    #[error(transparent)]
    Console(#[from] mprintf_console::ConsoleError),
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
