// 🧾 Report - Plain-text rendering for the CLI
//
// Dates render the way the enrolment summary shows them:
// "Monday, February 10th, 2025"

use crate::calendar::AcademicCalendar;
use crate::enrolment::Assessment;
use chrono::{Datelike, NaiveDate};
use std::fmt::Write;

/// English ordinal suffix for a day of month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// "June 15th, 2020"
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

/// "Monday, February 10th, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), format_date(date))
}

/// Multi-line summary of an assessment
pub fn render_assessment(assessment: &Assessment) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Child Details:");
    let _ = writeln!(out, "Date of Birth: {}", format_date(assessment.date_of_birth));
    let _ = writeln!(out, "Current Age: {}", assessment.age);
    let _ = writeln!(out, "Assessed On: {}", format_date(assessment.assessed_on));

    let _ = writeln!(out);
    let _ = writeln!(out, "Enrolment Details:");
    let _ = writeln!(out, "Enrolment Year: {}", assessment.details.enrolment_year);
    let _ = writeln!(out, "Classification: {}", assessment.details.classification);
    if assessment.classifications_disagree() {
        let _ = writeln!(
            out,
            "Note: the May 1st birth-date rule gives {}",
            assessment.birth_date_classification
        );
    }

    if !assessment.upcoming_intakes.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Next Available Intake Dates:");
        for date in &assessment.upcoming_intakes {
            let _ = writeln!(out, "{}", format_long_date(*date));
        }
    }

    out.trim_end().to_string()
}

/// One line per term: "Term 1: February 4th, 2025 - April 11th, 2025"
pub fn render_calendar(calendar: &AcademicCalendar) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Academic Calendar {}:", calendar.year());
    for term in calendar.terms() {
        let _ = writeln!(
            out,
            "Term {}: {} - {}",
            term.ordinal,
            format_date(term.start),
            format_date(term.end)
        );
    }
    out.trim_end().to_string()
}

/// One long-form date per line, tagged with the term it starts in:
/// "Monday, June 2nd, 2025 (Term 2)"
pub fn render_intakes(dates: &[NaiveDate], calendar: &AcademicCalendar) -> String {
    dates
        .iter()
        .map(|date| match calendar.term_containing(*date) {
            Some(term) => format!("{} (Term {})", format_long_date(*date), term.ordinal),
            None => format_long_date(*date),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// TESTS
// ============================================================================
