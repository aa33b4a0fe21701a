// 📅 Academic Calendar - Four-term year with fixed start/end dates
//
// Only the 2025 table is known. It stands in for every enrolment year;
// a replacement table can be loaded from JSON without code changes.

use crate::error::EnrolmentError;
use anyhow::{Context as AnyhowContext, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Number of terms in one academic year.
pub const TERMS_PER_YEAR: usize = 4;

// ============================================================================
// TERM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    /// 1..=4
    pub ordinal: u8,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Term {
    pub fn new(ordinal: u8, start: NaiveDate, end: NaiveDate) -> Self {
        Term {
            ordinal,
            start,
            end,
        }
    }

    /// Check if a date falls within the term (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

// ============================================================================
// ACADEMIC CALENDAR
// ============================================================================

/// Ordered sequence of exactly four non-overlapping terms.
///
/// Construction always validates, including deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarDocument")]
pub struct AcademicCalendar {
    year: i32,
    terms: Vec<Term>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CalendarDocument {
    year: i32,
    terms: Vec<Term>,
}

impl TryFrom<CalendarDocument> for AcademicCalendar {
    type Error = EnrolmentError;

    fn try_from(doc: CalendarDocument) -> Result<Self, Self::Error> {
        AcademicCalendar::new(doc.year, doc.terms)
    }
}

impl AcademicCalendar {
    /// Create a calendar, checking the term invariants
    pub fn new(year: i32, terms: Vec<Term>) -> Result<Self, EnrolmentError> {
        if terms.len() != TERMS_PER_YEAR {
            return Err(EnrolmentError::invalid_calendar(format!(
                "expected {} terms, got {}",
                TERMS_PER_YEAR,
                terms.len()
            )));
        }

        for (i, term) in terms.iter().enumerate() {
            let expected = (i + 1) as u8;
            if term.ordinal != expected {
                return Err(EnrolmentError::invalid_calendar(format!(
                    "term at position {} has ordinal {}, expected {}",
                    i + 1,
                    term.ordinal,
                    expected
                )));
            }

            if term.start >= term.end {
                return Err(EnrolmentError::invalid_calendar(format!(
                    "term {} starts on {} but ends on {}",
                    term.ordinal, term.start, term.end
                )));
            }

            if i > 0 {
                let previous = &terms[i - 1];
                if term.start <= previous.end {
                    return Err(EnrolmentError::invalid_calendar(format!(
                        "term {} starts on {} before term {} ends on {}",
                        term.ordinal, term.start, previous.ordinal, previous.end
                    )));
                }
            }
        }

        Ok(AcademicCalendar { year, terms })
    }

    /// The hard-coded 2025 term table
    pub fn term_dates_2025() -> Self {
        AcademicCalendar {
            year: 2025,
            terms: vec![
                term_2025(1, (2, 4), (4, 11)),   // Feb 4 - Apr 11
                term_2025(2, (4, 28), (6, 27)),  // Apr 28 - Jun 27
                term_2025(3, (7, 14), (9, 19)),  // Jul 14 - Sep 19
                term_2025(4, (10, 6), (12, 18)), // Oct 6 - Dec 18
            ],
        }
    }

    /// Load and validate a calendar from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read calendar file: {:?}", path.as_ref()))?;

        let calendar: AcademicCalendar =
            serde_json::from_str(&content).context("Failed to parse calendar JSON")?;

        info!(year = calendar.year, path = ?path.as_ref(), "loaded academic calendar");
        Ok(calendar)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Get the term containing a date, if any
    pub fn term_containing(&self, date: NaiveDate) -> Option<&Term> {
        self.terms.iter().find(|term| term.contains(date))
    }
}

impl Default for AcademicCalendar {
    fn default() -> Self {
        Self::term_dates_2025()
    }
}

fn term_2025(ordinal: u8, start: (u32, u32), end: (u32, u32)) -> Term {
    Term::new(ordinal, ymd(2025, start.0, start.1), ymd(2025, end.0, end.1))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal term date")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_2025_table() {
        let calendar = AcademicCalendar::term_dates_2025();
        assert_eq!(calendar.year(), 2025);
        assert_eq!(calendar.terms().len(), 4);
        assert_eq!(calendar.terms()[0], Term::new(1, date(2025, 2, 4), date(2025, 4, 11)));
        assert_eq!(calendar.terms()[3], Term::new(4, date(2025, 10, 6), date(2025, 12, 18)));
    }

    #[test]
    fn test_2025_table_is_valid() {
        let builtin = AcademicCalendar::term_dates_2025();
        let rebuilt = AcademicCalendar::new(builtin.year(), builtin.terms().to_vec()).unwrap();
        assert_eq!(builtin, rebuilt);
    }

    #[test]
    fn test_rejects_wrong_term_count() {
        let mut terms = AcademicCalendar::term_dates_2025().terms().to_vec();
        terms.pop();
        let err = AcademicCalendar::new(2025, terms).unwrap_err();
        assert_eq!(
            err,
            EnrolmentError::invalid_calendar("expected 4 terms, got 3")
        );
    }

    #[test]
    fn test_rejects_inverted_term() {
        let mut terms = AcademicCalendar::term_dates_2025().terms().to_vec();
        terms[1] = Term::new(2, date(2025, 6, 27), date(2025, 4, 28));
        assert!(matches!(
            AcademicCalendar::new(2025, terms),
            Err(EnrolmentError::InvalidCalendar { .. })
        ));
    }

    #[test]
    fn test_rejects_overlap() {
        let mut terms = AcademicCalendar::term_dates_2025().terms().to_vec();
        terms[2] = Term::new(3, date(2025, 6, 27), date(2025, 9, 19));
        assert!(AcademicCalendar::new(2025, terms).is_err());
    }

    #[test]
    fn test_rejects_out_of_order_ordinals() {
        let mut terms = AcademicCalendar::term_dates_2025().terms().to_vec();
        terms[0].ordinal = 2;
        assert!(AcademicCalendar::new(2025, terms).is_err());
    }

    #[test]
    fn test_term_containing() {
        let calendar = AcademicCalendar::term_dates_2025();
        assert_eq!(calendar.term_containing(date(2025, 5, 1)).map(|t| t.ordinal), Some(2));
        assert_eq!(calendar.term_containing(date(2025, 4, 11)).map(|t| t.ordinal), Some(1));
        assert!(calendar.term_containing(date(2025, 4, 20)).is_none());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "year": 2026,
            "terms": [
                {"ordinal": 1, "start": "2026-02-02", "end": "2026-04-02"},
                {"ordinal": 2, "start": "2026-04-20", "end": "2026-07-03"},
                {"ordinal": 3, "start": "2026-07-20", "end": "2026-09-25"},
                {"ordinal": 4, "start": "2026-10-12", "end": "2026-12-16"}
            ]
        }"#;
        let calendar: AcademicCalendar = serde_json::from_str(json).unwrap();
        assert_eq!(calendar.year(), 2026);

        let overlapping = json.replace("2026-04-20", "2026-03-20");
        assert!(serde_json::from_str::<AcademicCalendar>(&overlapping).is_err());
    }
}
