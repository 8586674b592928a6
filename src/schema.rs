use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LoanRequest {
    #[schemars(
        description = "Date the principal is disbursed, in YYYY-MM-DD format. The schedule's first row reports on this date."
    )]
    pub start_date: NaiveDate,

    #[schemars(
        description = "Final date of the loan's life in YYYY-MM-DD format. Must not be before the start date."
    )]
    pub end_date: NaiveDate,

    #[schemars(
        description = "Due date of the first installment in YYYY-MM-DD format. Must fall between the start and end dates. Subsequent installments fall one calendar month apart, clamped to month-end when the anchor day does not exist in a target month."
    )]
    pub first_payment_date: NaiveDate,

    #[schemars(description = "Amount lent. Must be greater than zero.")]
    pub principal: f64,

    #[schemars(
        description = "Annual interest rate as a percentage (e.g. 12.0 means 12% per year). Must be greater than zero. Interest accrues exponentially over a fixed 360-day base."
    )]
    pub annual_rate_percent: f64,

    #[schemars(
        description = "Total number of installments over the loan's life. Each installment amortizes principal / installment_count. Must be greater than zero."
    )]
    pub installment_count: u32,
}

impl LoanRequest {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LoanRequest)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// One line of the amortization schedule. Rows are emitted in strictly
/// increasing date order, one per competency date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Competency date this row reports on.
    pub date: NaiveDate,
    /// Principal released on this date; nonzero only on the first row.
    pub disbursed_principal: f64,
    /// "k/N" on the k-th payment date, empty on period boundaries.
    pub installment_label: String,
    /// Principal portion realized this row; nonzero only on payment dates.
    pub amortization: f64,
    /// Interest accrued since the previous row.
    pub accrual: f64,
    /// Interest settled this row; nonzero only on payment dates.
    pub paid: f64,
    /// Running unpaid interest balance after this row.
    pub accrued_interest: f64,
    /// Outstanding balance including this row's capitalized accrual,
    /// before amortization.
    pub debt_balance: f64,
    /// Outstanding balance net of this row's amortization.
    pub balance: f64,
    /// Cash due this row: amortization plus interest paid.
    pub total: f64,
}

/// Transport-facing result shape: a success flag, a human-readable message
/// and the full row list on success. Failure carries no rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub success: bool,
    pub message: String,
    pub rows: Option<Vec<ScheduleRow>>,
}

impl CalculationOutcome {
    pub fn succeeded(rows: Vec<ScheduleRow>) -> Self {
        Self {
            success: true,
            message: "Schedule computed successfully".to_string(),
            rows: Some(rows),
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            rows: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> LoanRequest {
        LoanRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            first_payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            principal: 10_000.0,
            annual_rate_percent: 12.0,
            installment_count: 12,
        }
    }

    #[test]
    fn test_schema_generation() {
        let schema_json = LoanRequest::schema_as_json().unwrap();
        assert!(schema_json.contains("start_date"));
        assert!(schema_json.contains("first_payment_date"));
        assert!(schema_json.contains("installment_count"));
    }

    #[test]
    fn test_request_round_trip() {
        let request = sample_request();
        let json = serde_json::to_string_pretty(&request).unwrap();
        assert!(json.contains("2024-01-01"));

        let deserialized: LoanRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.start_date, request.start_date);
        assert_eq!(deserialized.installment_count, 12);
    }

    #[test]
    fn test_outcome_shapes() {
        let ok = CalculationOutcome::succeeded(vec![]);
        assert!(ok.success);
        assert!(ok.rows.is_some());

        let err = CalculationOutcome::failed("Principal must be greater than zero".to_string());
        assert!(!err.success);
        assert!(err.rows.is_none());
    }
}
