// src/error.rs
//! Error taxonomy for form editing and search submission

use thiserror::Error;

/// Generic notice shown for any service-side failure.
pub const GENERIC_NOTICE: &str = "An error occurred. Please try again.";

/// Errors raised while editing the competitor list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("the first competitor row cannot be removed")]
    AnchorRow,

    #[error("competitor row {index} does not exist (list has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised by a single search submission
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("search query must not be empty")]
    EmptyQuery,

    #[error("a search is already in progress")]
    Busy,

    #[error("request to analysis service failed: {0}")]
    Transport(String),

    #[error("analysis service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("analysis service returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Service-side failures are terminal for one submission only; the user may resubmit.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            SubmitError::Transport(_)
                | SubmitError::Status { .. }
                | SubmitError::MalformedResponse(_)
        )
    }

    /// Text shown to the user. Service-side failures carry no detail.
    pub fn notice(&self) -> String {
        if self.is_retryable() {
            GENERIC_NOTICE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}
