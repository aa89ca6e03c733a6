use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a claim set was rejected.
///
/// Every variant is an authentication failure. Callers may present them
/// uniformly, but the distinction is kept so it can be logged and tested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("Missing hash claim")]
    MissingHash,

    #[error("Hash mismatch")]
    HashMismatch,

    #[error("Missing auth_date claim")]
    MissingAuthDate,

    #[error("Malformed auth_date: {0}")]
    MalformedTimestamp(String),

    #[error("Login is older than the freshness window")]
    Expired,

    /// A claim arrived with more than one value.
    #[error("Malformed claims: duplicate field {0}")]
    MalformedClaims(String),
}

impl VerificationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingHash => ErrorCode::MissingHash,
            Self::HashMismatch => ErrorCode::HashMismatch,
            Self::MissingAuthDate => ErrorCode::MissingAuthDate,
            Self::MalformedTimestamp(_) => ErrorCode::MalformedTimestamp,
            Self::Expired => ErrorCode::Expired,
            Self::MalformedClaims(_) => ErrorCode::MalformedClaims,
        }
    }
}

/// Stable machine-readable codes for verification failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingHash,
    HashMismatch,
    MissingAuthDate,
    MalformedTimestamp,
    Expired,
    MalformedClaims,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingHash => "MISSING_HASH",
            Self::HashMismatch => "HASH_MISMATCH",
            Self::MissingAuthDate => "MISSING_AUTH_DATE",
            Self::MalformedTimestamp => "MALFORMED_TIMESTAMP",
            Self::Expired => "EXPIRED",
            Self::MalformedClaims => "MALFORMED_CLAIMS",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shared secret could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretError {
    #[error("Bot token must not be empty")]
    Empty,
}
