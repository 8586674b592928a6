use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanScheduleError {
    #[error("End date {end} must not be before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("First payment date {first_payment} must fall between start date {start} and end date {end}")]
    FirstPaymentOutOfRange {
        first_payment: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("Principal must be greater than zero, got {0}")]
    NonPositivePrincipal(f64),

    #[error("Annual rate must be greater than zero, got {0}")]
    NonPositiveRate(f64),

    #[error("Installment count must be greater than zero")]
    ZeroInstallmentCount,

    #[error("Schedule computation produced a non-finite value at {date}")]
    NonFiniteResult { date: NaiveDate },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoanScheduleError>;
