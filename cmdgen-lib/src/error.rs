use std::path::PathBuf;

use reqwest::StatusCode;

pub type Result<T, E = RegisterError> = std::result::Result<T, E>;

/// Every way a registration run can fail. None of these are retried.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    /// The secrets store is missing, unreadable, or incomplete.
    #[error("Could not load secrets from `{path}`: {reason}")]
    Config { path: PathBuf, reason: String },

    /// The command definition file could not be read.
    #[error("Could not read command file `{path}`")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to reach the platform")]
    Transport(#[from] reqwest::Error),

    /// The platform answered with a non-2xx status.
    #[error("Platform rejected the command with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Platform response is not valid json")]
    MalformedResponse(#[source] serde_json::Error),

    /// A 2xx response that doesn't carry a usable `id`/`name` pair.
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    #[error("Could not write command record to `{path}`")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RegisterError {
    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
