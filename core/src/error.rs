use thiserror::Error;

/// Errors raised while turning caller input into stored values.
///
/// Storage failures are not listed here; repositories report those through
/// `anyhow` with the offending path attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaysheetError {
    #[error("{field} must be a number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: String },

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: String,
        max: String,
    },

    #[error("{0} is too large to compute")]
    Overflow(&'static str),

    #[error("invalid day key '{0}', expected YYYY-MM-DD")]
    InvalidDayKey(String),

    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
}
