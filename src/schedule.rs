use crate::calendar::{advance_one_month, next_month_end};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

/// The ordered set of dates the engine reports on, together with the subset
/// on which an installment falls due. Interest must be reported both at
/// month-end period boundaries and at payment events, which do not
/// generally coincide, so the two sequences are merged and deduplicated.
#[derive(Debug, Clone)]
pub struct DateSchedule {
    pub dates: Vec<NaiveDate>,
    pub payment_dates: BTreeSet<NaiveDate>,
}

impl DateSchedule {
    pub fn build(start: NaiveDate, end: NaiveDate, first_payment: NaiveDate) -> Self {
        let payments = payment_dates(first_payment, end);

        let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
        dates.insert(start);
        dates.insert(end);

        // Month-end boundaries after the start month, bounded by the end
        // date (which already stands in for its own period boundary).
        let mut cursor = next_month_end(start);
        while cursor < end {
            dates.insert(cursor);
            cursor = next_month_end(cursor);
        }

        dates.extend(payments.iter().copied());

        Self {
            dates: dates.into_iter().collect(),
            payment_dates: payments.into_iter().collect(),
        }
    }

    pub fn is_payment_date(&self, date: NaiveDate) -> bool {
        self.payment_dates.contains(&date)
    }
}

/// Generates the installment due dates: monthly from the first payment,
/// anchored on its day-of-month with month-end clamping. The sequence stops
/// at the first date that is not before `end` — that date is included even
/// when it overshoots `end`.
pub fn payment_dates(first_payment: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let anchor_day = first_payment.day();
    let mut dates = vec![first_payment];

    let mut current = first_payment;
    while current < end {
        current = advance_one_month(current, anchor_day);
        dates.push(current);
    }

    dates
}
