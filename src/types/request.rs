// src/types/request.rs
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Result count sent with every search; no control exposes it.
pub const DEFAULT_NUM_RESULTS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub competitors: Vec<String>,
    pub num_results: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, competitors: Vec<String>) -> Self {
        Self {
            query: query.into(),
            competitors,
            num_results: DEFAULT_NUM_RESULTS,
        }
    }

    /// Outbound payloads missing a query never leave the client
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.query.trim().is_empty() {
            return Err(SubmitError::EmptyQuery);
        }
        Ok(())
    }
}
