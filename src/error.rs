//! Error type for the date calculations.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateCalcError {
    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidArgument {
        /// The month number that was provided.
        month: u32,
    },

    /// Returned when a date string matches none of the accepted formats.
    #[error("invalid date: {input}")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when stepping a date leaves the range chrono can represent.
    #[error("date out of range")]
    OutOfRange,
}

impl DateCalcError {
    pub(crate) fn invalid_date(input: &str) -> Self {
        DateCalcError::InvalidDate {
            input: input.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_argument() {
        let err = DateCalcError::InvalidArgument { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_date() {
        let err = DateCalcError::invalid_date("31-02-2024x");
        assert_eq!(err.to_string(), "invalid date: 31-02-2024x");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateCalcError>();
    }
}
