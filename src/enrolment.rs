// 🎒 Enrolment - Everything derived from one date of birth
//
// date of birth → { age, classification, enrolment year } → intake dates
//
// "today" is captured once by the caller and threaded through, so a single
// assessment never mixes two evaluation instants.

use crate::age::{calculate_age, Age};
use crate::classification::{
    classify_by_age, classify_by_birth_date, Classification, ClassificationPolicy,
};
use crate::config::EnrolmentConfig;
use crate::error::EnrolmentError;
use crate::intake::{intake_dates, upcoming_intakes};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Years between birth and the start of formal schooling.
pub const YEARS_UNTIL_ENROLMENT: i32 = 5;

/// Date format accepted for a date of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// ENROLMENT YEAR / DETAILS
// ============================================================================

/// Calendar year in which the child is expected to start school
pub fn enrolment_year(date_of_birth: NaiveDate) -> i32 {
    date_of_birth.year() + YEARS_UNTIL_ENROLMENT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolmentDetails {
    pub enrolment_year: i32,
    pub classification: Classification,
}

impl EnrolmentDetails {
    /// Derive details for a child, classifying with the given policy
    pub fn derive(
        date_of_birth: NaiveDate,
        today: NaiveDate,
        policy: ClassificationPolicy,
    ) -> Result<Self, EnrolmentError> {
        let classification = match policy {
            ClassificationPolicy::AgeAtToday => {
                classify_by_age(&calculate_age(date_of_birth, today)?)
            }
            ClassificationPolicy::BirthDateCutoff => classify_by_birth_date(date_of_birth),
        };

        Ok(EnrolmentDetails {
            enrolment_year: enrolment_year(date_of_birth),
            classification,
        })
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// Parse a `YYYY-MM-DD` date, naming `field` in the error
pub fn parse_date(input: &str, field: &str) -> Result<NaiveDate, EnrolmentError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(EnrolmentError::invalid_input(format!("{} is required", field)));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        EnrolmentError::invalid_input(format!(
            "{} {:?} is not a valid YYYY-MM-DD date ({})",
            field, trimmed, e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date of birth
pub fn parse_date_of_birth(input: &str) -> Result<NaiveDate, EnrolmentError> {
    parse_date(input, "date of birth")
}

/// Parse a pinned evaluation date, falling back to [`today`] when absent
pub fn parse_today(input: Option<&str>) -> Result<NaiveDate, EnrolmentError> {
    match input {
        Some(raw) => parse_date(raw, "today"),
        None => Ok(today()),
    }
}

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

// ============================================================================
// ASSESSMENT
// ============================================================================

/// All values shown to the family for one date of birth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub date_of_birth: NaiveDate,
    pub assessed_on: NaiveDate,
    pub age: Age,
    pub details: EnrolmentDetails,
    /// May-1st rule, always reported alongside the configured policy
    pub birth_date_classification: Classification,
    pub upcoming_intakes: Vec<NaiveDate>,
}

impl Assessment {
    /// Check if the configured policy and the birth-date rule disagree
    pub fn classifications_disagree(&self) -> bool {
        self.details.classification != self.birth_date_classification
    }
}

/// Assess a child as of `today`
pub fn assess(
    date_of_birth: NaiveDate,
    today: NaiveDate,
    config: &EnrolmentConfig,
) -> Result<Assessment, EnrolmentError> {
    let age = calculate_age(date_of_birth, today)?;
    let details = EnrolmentDetails::derive(date_of_birth, today, config.classification_policy)?;
    let birth_date_classification = classify_by_birth_date(date_of_birth);

    if details.enrolment_year != config.calendar.year() {
        debug!(
            enrolment_year = details.enrolment_year,
            calendar_year = config.calendar.year(),
            "using configured term table for a different enrolment year"
        );
    }

    let all_intakes = intake_dates(&config.calendar);
    let upcoming = upcoming_intakes(&all_intakes, today, config.max_upcoming_intakes);
    if upcoming.is_empty() && config.max_upcoming_intakes > 0 {
        warn!(
            calendar_year = config.calendar.year(),
            %today,
            "no upcoming intake dates in the configured calendar"
        );
    }

    debug!(
        %date_of_birth,
        %today,
        years = age.years,
        months = age.months,
        classification = %details.classification,
        enrolment_year = details.enrolment_year,
        upcoming = upcoming.len(),
        "assessment complete"
    );

    Ok(Assessment {
        date_of_birth,
        assessed_on: today,
        age,
        details,
        birth_date_classification,
        upcoming_intakes: upcoming,
    })
}

/// Assess a child as of the local date, captured once
pub fn assess_today(
    date_of_birth: NaiveDate,
    config: &EnrolmentConfig,
) -> Result<Assessment, EnrolmentError> {
    assess(date_of_birth, today(), config)
}

// ============================================================================
// TESTS
// ============================================================================
