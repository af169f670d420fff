use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tally workspace.
///
/// The aggregation engine itself is total over well-formed input; the only
/// error it can raise is `InvalidPeriod`, and that happens when a period label
/// is parsed at the API boundary. The remaining variants describe failures of
/// the row sources the orchestrator talks to.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TallyError {
    /// The period label is outside the enumerated set for the operation.
    #[error("invalid period: {period}")]
    InvalidPeriod {
        /// The label that failed to parse (e.g. "fortnight").
        period: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data.
    #[error("data issue: {0}")]
    Data(String),

    /// The registered source does not implement the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "analysis").
        capability: String,
    },

    /// The row source returned an error.
    #[error("{name} failed: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A requested resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "fund 42".
        what: String,
    },

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {name}")]
    SourceTimeout {
        /// Source name that timed out.
        name: String,
        /// Capability label (e.g. "analysis", "fund_history").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },
}

impl TallyError {
    /// Helper: build an `InvalidPeriod` error for an unparseable label.
    pub fn invalid_period(period: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            period: period.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(name: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::SourceTimeout {
            name: name.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are not actionable.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
