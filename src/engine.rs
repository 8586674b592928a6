use crate::calendar::days_between;
use crate::error::{LoanScheduleError, Result};
use crate::schedule::DateSchedule;
use crate::schema::{LoanRequest, ScheduleRow};
use chrono::NaiveDate;

/// Fixed day-count base for the exponential accrual factor. This is a
/// convention, not a calendar-derived quantity.
const DAY_COUNT_BASE: f64 = 360.0;

/// Accumulator threaded through the fold over competency dates. Each row is
/// a pure function of this state, the current date and whether an
/// installment falls due.
#[derive(Debug, Clone)]
struct EngineState {
    balance: f64,
    accrued_interest: f64,
    previous_date: NaiveDate,
    payments_made: u32,
}

pub struct AmortizationEngine {
    principal: f64,
    annual_rate_percent: f64,
    installment_count: u32,
}

impl AmortizationEngine {
    pub fn new(request: &LoanRequest) -> Self {
        Self {
            principal: request.principal,
            annual_rate_percent: request.annual_rate_percent,
            installment_count: request.installment_count,
        }
    }

    /// Walks the schedule left to right and emits one row per date.
    /// A non-finite intermediate (possible only for pathological inputs)
    /// aborts the whole computation; there are no partial results.
    pub fn run(&self, schedule: &DateSchedule) -> Result<Vec<ScheduleRow>> {
        let Some(&first_date) = schedule.dates.first() else {
            return Ok(Vec::new());
        };

        let mut state = EngineState {
            balance: self.principal,
            accrued_interest: 0.0,
            previous_date: first_date,
            payments_made: 0,
        };

        let mut rows = Vec::with_capacity(schedule.dates.len());

        for (index, &date) in schedule.dates.iter().enumerate() {
            let (next_state, row) =
                self.step(&state, index, date, schedule.is_payment_date(date));

            let finite = row.accrual.is_finite()
                && row.paid.is_finite()
                && row.debt_balance.is_finite()
                && row.balance.is_finite()
                && row.total.is_finite();
            if !finite {
                return Err(LoanScheduleError::NonFiniteResult { date });
            }

            rows.push(row);
            state = next_state;
        }

        Ok(rows)
    }

    fn step(
        &self,
        state: &EngineState,
        index: usize,
        date: NaiveDate,
        is_payment: bool,
    ) -> (EngineState, ScheduleRow) {
        let amortization = if is_payment {
            self.principal / f64::from(self.installment_count)
        } else {
            0.0
        };

        let accrual = if index == 0 {
            0.0
        } else {
            let days = days_between(state.previous_date, date) as f64;
            let factor = (1.0 + self.annual_rate_percent / 100.0).powf(days / DAY_COUNT_BASE);
            (factor - 1.0) * (state.balance + state.accrued_interest)
        };

        let paid = if is_payment {
            state.accrued_interest + accrual
        } else {
            0.0
        };

        let accrued_interest = state.accrued_interest + accrual - paid;

        // Accrual capitalizes into the reported debt balance whether or not
        // a payment occurs; amortization is subtracted afterwards.
        let debt_balance = state.balance + accrual;
        let balance = debt_balance - amortization;
        let total = amortization + paid;

        let payments_made = if is_payment {
            state.payments_made + 1
        } else {
            state.payments_made
        };

        let installment_label = if is_payment {
            format!("{}/{}", payments_made, self.installment_count)
        } else {
            String::new()
        };

        let row = ScheduleRow {
            date,
            disbursed_principal: if index == 0 { self.principal } else { 0.0 },
            installment_label,
            amortization,
            accrual,
            paid,
            accrued_interest,
            debt_balance,
            balance,
            total,
        };

        let next_state = EngineState {
            balance,
            accrued_interest,
            previous_date: date,
            payments_made,
        };

        (next_state, row)
    }
}
