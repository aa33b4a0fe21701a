// 🎂 Age Calculator - Whole years and months since birth
//
// Elapsed time is truncated to whole months. The day-of-month borrow is
// applied exactly once: if today's day-of-month is before the birth
// day-of-month, the current month is not yet complete.

use crate::error::EnrolmentError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elapsed time since birth, truncated to whole months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    /// Always 0..=11
    pub months: u32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years and {} months", self.years, self.months)
    }
}

/// Calculate the age of a child born on `date_of_birth` as of `today`.
///
/// A date of birth after `today` is rejected with
/// [`EnrolmentError::FutureDateOfBirth`] rather than clamped.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> Result<Age, EnrolmentError> {
    if date_of_birth > today {
        return Err(EnrolmentError::FutureDateOfBirth {
            date_of_birth,
            today,
        });
    }

    let year_diff = i64::from(today.year()) - i64::from(date_of_birth.year());
    let month_diff = i64::from(today.month()) - i64::from(date_of_birth.month());
    let mut total_months = year_diff * 12 + month_diff;

    // Borrow once for the incomplete current month
    if today.day() < date_of_birth.day() {
        total_months -= 1;
    }

    // dob <= today guarantees total_months >= 0
    let total_months = total_months.max(0) as u32;

    Ok(Age {
        years: total_months / 12,
        months: total_months % 12,
    })
}

// ============================================================================
// TESTS
// ============================================================================
