use crate::error::Result;
use crate::schema::{CalculationOutcome, LoanRequest};

/// Deserializes a loan request from its JSON wire form. A missing or
/// malformed field surfaces here, before validation runs.
pub fn request_from_json(payload: &str) -> Result<LoanRequest> {
    Ok(serde_json::from_str(payload)?)
}

pub fn outcome_to_json(outcome: &CalculationOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
