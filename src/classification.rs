// 🏷️ Year-Level Classification - Two distinct policies
//
// 1. Birth-date cutoff: compares the date of birth with May 1st of its own year
// 2. Age at today: under 5 years old → Year 0, otherwise Year 1
//
// The two rules disagree for many children. They stay separate on purpose;
// the enrolment summary picks one through ClassificationPolicy.

use crate::age::Age;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month and day of the birth-date cutoff (May 1st).
pub const CUTOFF_MONTH: u32 = 5;
pub const CUTOFF_DAY: u32 = 1;

/// Age in whole years from which a child is placed in Year 1.
pub const YEAR_ONE_MIN_AGE: u32 = 5;

// ============================================================================
// CLASSIFICATION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Year 0")]
    Year0,
    #[serde(rename = "Year 1")]
    Year1,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Year0 => "Year 0",
            Classification::Year1 => "Year 1",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// POLICY
// ============================================================================

/// Which rule the enrolment summary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationPolicy {
    /// Current age in whole years (what the form displays)
    #[default]
    AgeAtToday,

    /// Date of birth against May 1st of the birth year
    BirthDateCutoff,
}

impl ClassificationPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            ClassificationPolicy::AgeAtToday => "age_at_today",
            ClassificationPolicy::BirthDateCutoff => "birth_date_cutoff",
        }
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Birth-date rule: born on or before May 1st of the birth year → Year 1,
/// born after it → Year 0. The cutoff date itself counts as Year 1.
pub fn classify_by_birth_date(date_of_birth: NaiveDate) -> Classification {
    let cutoff = NaiveDate::from_ymd_opt(date_of_birth.year(), CUTOFF_MONTH, CUTOFF_DAY);

    // May 1st exists in every year NaiveDate can represent; the None arm is unreachable
    match cutoff {
        Some(cutoff) if date_of_birth <= cutoff => Classification::Year1,
        Some(_) | None => Classification::Year0,
    }
}

/// Age rule: under 5 whole years → Year 0, 5 or older → Year 1.
pub fn classify_by_age(age: &Age) -> Classification {
    if age.years < YEAR_ONE_MIN_AGE {
        Classification::Year0
    } else {
        Classification::Year1
    }
}

// ============================================================================
// TESTS
// ============================================================================
