// ⚠️ Enrolment Errors - Typed failures for the calculator
// Only malformed input can fail: the arithmetic itself is total.

use chrono::NaiveDate;

/// Error type for all fallible operations in the enrolment calculator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnrolmentError {
    /// Date of birth missing or not a real calendar date.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Date of birth lies after the evaluation date.
    #[error("date of birth {date_of_birth} is after {today}")]
    FutureDateOfBirth {
        date_of_birth: NaiveDate,
        today: NaiveDate,
    },

    /// A supplied term table breaks the calendar invariants.
    #[error("invalid academic calendar: {reason}")]
    InvalidCalendar { reason: String },
}

impl EnrolmentError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EnrolmentError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn invalid_calendar(reason: impl Into<String>) -> Self {
        EnrolmentError::InvalidCalendar {
            reason: reason.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
