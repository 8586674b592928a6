use chrono::{Datelike, Days, NaiveDate};

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .checked_sub_days(Days::new(1))
        .unwrap()
}

pub fn next_month_end(date: NaiveDate) -> NaiveDate {
    let year = if date.month() == 12 {
        date.year() + 1
    } else {
        date.year()
    };

    let month = if date.month() == 12 {
        1
    } else {
        date.month() + 1
    };

    last_day_of_month(year, month)
}

/// Advances `date` by one calendar month, landing on `day_of_month` in the
/// target month. When that day does not exist there (e.g. the 31st of a
/// 30-day month) the last day of the target month is used instead.
///
/// The desired day is passed separately so a cadence anchored on the 31st
/// returns to the 31st after passing through a shorter month, rather than
/// staying clamped forever.
pub fn advance_one_month(date: NaiveDate, day_of_month: u32) -> NaiveDate {
    let year = if date.month() == 12 {
        date.year() + 1
    } else {
        date.year()
    };

    let month = if date.month() == 12 {
        1
    } else {
        date.month() + 1
    };

    let last_day = last_day_of_month(year, month).day();
    NaiveDate::from_ymd_opt(year, month, day_of_month.min(last_day)).unwrap()
}

pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
