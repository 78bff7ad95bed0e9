use serde::Serialize;
use thiserror::Error;

/// Conditions that abort an ingestion run.
///
/// Every virtual server is stamped with the owning device's address, so a
/// run cannot continue once that address is unknown or unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("device IP not found on line {line_number}: `{line}`")]
    DeviceIpNotFound { line_number: usize, line: String },

    #[error("device IP `{value}` on line {line_number} is not a valid address")]
    DeviceIpMalformed { line_number: usize, value: String },

    #[error(
        "virtual server `{vserver}` on line {line_number} declared before the device IP \
         (missing `set ns config -IPAddress`)"
    )]
    DeviceIpMissing { line_number: usize, vserver: String },
}

impl IngestError {
    pub fn line_number(&self) -> usize {
        match self {
            IngestError::DeviceIpNotFound { line_number, .. }
            | IngestError::DeviceIpMalformed { line_number, .. }
            | IngestError::DeviceIpMissing { line_number, .. } => *line_number,
        }
    }
}

/// Why a single recognized command could not be turned into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractError {
    #[error("expected at least {expected} tokens, found {found}")]
    TooFewTokens { expected: usize, found: usize },

    #[error("invalid {field} `{value}`: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("option {flag} not found")]
    MissingOption { flag: &'static str },
}

impl ExtractError {
    pub fn invalid(field: &'static str, value: &str, reason: impl ToString) -> Self {
        ExtractError::InvalidField {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
