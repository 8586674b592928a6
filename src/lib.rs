//! # Loan Schedule Builder
//!
//! A library for computing amortization schedules for a single loan:
//! given its calendar parameters, principal, annual rate and installment
//! count, it produces one row per relevant calendar date showing accrued
//! interest, amortized principal, outstanding balances and payment amounts.
//!
//! ## Core Concepts
//!
//! - **Competency dates**: the dates the schedule reports on — month-end
//!   period boundaries merged with installment due dates
//! - **Payment dates**: monthly from the first payment, anchored on its
//!   day-of-month with month-end clamping (the 31st falls back to the last
//!   day of shorter months)
//! - **Accrual**: interest generated between two competency dates by the
//!   exponential day-count formula `(1 + rate/100)^(days/360) - 1`, applied
//!   to the outstanding balance plus carried unpaid interest
//! - **Recurrence**: a stateful left-to-right fold — each row is a pure
//!   function of the previous row's balances and the two dates
//!
//! ## Example
//!
//! ```rust,ignore
//! use loan_schedule_builder::*;
//! use chrono::NaiveDate;
//!
//! let request = LoanRequest {
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     first_payment_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
//!     principal: 10_000.0,
//!     annual_rate_percent: 12.0,
//!     installment_count: 12,
//! };
//!
//! let rows = compute_schedule(&request).unwrap();
//! ```

pub mod calendar;
pub mod engine;
pub mod error;
pub mod ingestion;
pub mod schedule;
pub mod schema;

pub use engine::AmortizationEngine;
pub use error::{LoanScheduleError, Result};
pub use ingestion::*;
pub use schedule::{payment_dates, DateSchedule};
pub use schema::{CalculationOutcome, LoanRequest, ScheduleRow};

use log::{debug, info};

pub struct LoanScheduleCalculator;

impl LoanScheduleCalculator {
    pub fn compute(request: &LoanRequest) -> Result<Vec<ScheduleRow>> {
        validate_request(request)?;

        info!(
            "Computing schedule for {} -> {}, {} installments",
            request.start_date, request.end_date, request.installment_count
        );

        let schedule = DateSchedule::build(
            request.start_date,
            request.end_date,
            request.first_payment_date,
        );
        debug!(
            "Schedule has {} competency dates, {} payment dates",
            schedule.dates.len(),
            schedule.payment_dates.len()
        );

        AmortizationEngine::new(request).run(&schedule)
    }
}

pub fn compute_schedule(request: &LoanRequest) -> Result<Vec<ScheduleRow>> {
    LoanScheduleCalculator::compute(request)
}

/// Transport-facing entry point: folds validation and computation errors
/// into the discriminated outcome shape. Failure is all-or-nothing — no
/// partial row list is ever returned.
pub fn calculate(request: &LoanRequest) -> CalculationOutcome {
    match LoanScheduleCalculator::compute(request) {
        Ok(rows) => CalculationOutcome::succeeded(rows),
        Err(e) => CalculationOutcome::failed(e.to_string()),
    }
}

/// Checks the request preconditions, reporting the first violated one.
/// Date ordering is checked before the amount fields.
fn validate_request(request: &LoanRequest) -> Result<()> {
    if request.end_date < request.start_date {
        return Err(LoanScheduleError::EndBeforeStart {
            start: request.start_date,
            end: request.end_date,
        });
    }

    if request.first_payment_date < request.start_date
        || request.first_payment_date > request.end_date
    {
        return Err(LoanScheduleError::FirstPaymentOutOfRange {
            first_payment: request.first_payment_date,
            start: request.start_date,
            end: request.end_date,
        });
    }

    if request.principal <= 0.0 {
        return Err(LoanScheduleError::NonPositivePrincipal(request.principal));
    }

    if request.annual_rate_percent <= 0.0 {
        return Err(LoanScheduleError::NonPositiveRate(
            request.annual_rate_percent,
        ));
    }

    if request.installment_count == 0 {
        return Err(LoanScheduleError::ZeroInstallmentCount);
    }

    Ok(())
}
