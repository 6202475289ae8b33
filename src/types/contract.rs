// src/types/contract.rs
//! Boundary validation for analysis service responses.
//!
//! A body that is not JSON, is not an object, or carries a field of the wrong
//! type is rejected as malformed. Required fields that are merely missing (or
//! null) are tolerated: they are reported as violations, logged, and rendered
//! as placeholders.

use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use super::response::SearchResponse;
use crate::error::SubmitError;

const RESPONSE_FIELDS: &[&str] = &["query", "results", "swot_analysis", "data_source_info"];
const RESULT_FIELDS: &[&str] = &["title", "url", "snippet", "analysis"];
const SWOT_FIELDS: &[&str] = &["strengths", "weaknesses", "opportunities", "threats"];
const COMPARISON_FIELDS: &[&str] = &[
    "competitors",
    "competitive_advantages",
    "competitive_disadvantages",
];
const COMPETITOR_FIELDS: &[&str] = &["website", "name"];

/// A required field absent from an inbound payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    pub path: String,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field `{}`", self.path)
    }
}

#[derive(Debug, Clone)]
pub struct ContractReport {
    pub response: SearchResponse,
    pub violations: Vec<ContractViolation>,
}

impl ContractReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Parse a raw response body
pub fn parse_response(body: &str) -> Result<ContractReport, SubmitError> {
    debug!("Validating analysis response body ({} bytes)", body.len());
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SubmitError::MalformedResponse(format!("body is not valid JSON: {}", e)))?;
    validate_response(value)
}

/// Validate an already-decoded JSON value
pub fn validate_response(value: Value) -> Result<ContractReport, SubmitError> {
    if !value.is_object() {
        return Err(SubmitError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    let violations = collect_violations(&value);
    for violation in &violations {
        warn!("Analysis response contract violation: {}", violation);
    }

    let response: SearchResponse = serde_json::from_value(value)
        .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;

    Ok(ContractReport {
        response,
        violations,
    })
}

fn collect_violations(root: &Value) -> Vec<ContractViolation> {
    let mut violations = Vec::new();
    require(root, "", RESPONSE_FIELDS, &mut violations);

    if let Some(results) = root.get("results").and_then(Value::as_array) {
        for (i, result) in results.iter().enumerate() {
            require(result, &format!("results[{}]", i), RESULT_FIELDS, &mut violations);
        }
    }

    if let Some(swot) = root.get("swot_analysis").filter(|v| v.is_object()) {
        require(swot, "swot_analysis", SWOT_FIELDS, &mut violations);
    }

    if let Some(comparison) = root.get("comparison").filter(|v| v.is_object()) {
        require(comparison, "comparison", COMPARISON_FIELDS, &mut violations);

        if let Some(main) = comparison.get("main_product").filter(|v| v.is_object()) {
            require(main, "comparison.main_product", COMPETITOR_FIELDS, &mut violations);
        }
        if let Some(competitors) = comparison.get("competitors").and_then(Value::as_array) {
            for (i, competitor) in competitors.iter().enumerate() {
                require(
                    competitor,
                    &format!("comparison.competitors[{}]", i),
                    COMPETITOR_FIELDS,
                    &mut violations,
                );
            }
        }
    }

    violations
}

fn require(value: &Value, prefix: &str, fields: &[&str], out: &mut Vec<ContractViolation>) {
    // Non-object entries are left for serde to reject with a type error
    let Some(object) = value.as_object() else {
        return;
    };
    for field in fields {
        if object.get(*field).map_or(true, Value::is_null) {
            let path = if prefix.is_empty() {
                field.to_string()
            } else {
                format!("{}.{}", prefix, field)
            };
            out.push(ContractViolation { path });
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
