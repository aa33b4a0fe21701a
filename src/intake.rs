// 🗓️ Intake Dates - First and sixth Monday of every term
//
// Two separate steps:
// 1. intake_dates: every candidate date of a calendar (up to 8)
// 2. upcoming_intakes: keep dates after today, truncated for display

use crate::calendar::AcademicCalendar;
use chrono::{Datelike, Days, NaiveDate};

/// Days between a term's first Monday and its sixth Monday.
pub const SIXTH_MONDAY_OFFSET_DAYS: u64 = 35;

/// Number of upcoming intakes the form shows.
pub const DEFAULT_UPCOMING_LIMIT: usize = 4;

/// First Monday on or after `date` (the date itself when it is a Monday).
///
/// `None` when that Monday would fall after `NaiveDate::MAX`.
pub fn first_monday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    let iso_weekday = u64::from(date.weekday().number_from_monday());
    date.checked_add_days(Days::new((8 - iso_weekday) % 7))
}

/// Enumerate intake dates for every term, in chronological order.
///
/// Each term contributes its first Monday and, when it falls on or before
/// the term end, the Monday five weeks later. Mondays past the last
/// representable date are skipped.
pub fn intake_dates(calendar: &AcademicCalendar) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(calendar.terms().len() * 2);

    for term in calendar.terms() {
        let Some(first_monday) = first_monday_on_or_after(term.start) else {
            continue;
        };
        dates.push(first_monday);

        let sixth_monday = first_monday.checked_add_days(Days::new(SIXTH_MONDAY_OFFSET_DAYS));
        if let Some(sixth_monday) = sixth_monday.filter(|monday| *monday <= term.end) {
            dates.push(sixth_monday);
        }
    }

    dates
}

/// Keep dates strictly after `today`, preserving order, at most `limit` of them
pub fn upcoming_intakes(dates: &[NaiveDate], today: NaiveDate, limit: usize) -> Vec<NaiveDate> {
    dates
        .iter()
        .copied()
        .filter(|date| *date > today)
        .take(limit)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Term;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_monday_from_tuesday() {
        assert_eq!(first_monday_on_or_after(date(2025, 2, 4)), Some(date(2025, 2, 10)));
    }

    #[test]
    fn test_first_monday_is_itself() {
        assert_eq!(first_monday_on_or_after(date(2025, 2, 3)), Some(date(2025, 2, 3)));
    }

    #[test]
    fn test_first_monday_from_sunday() {
        assert_eq!(first_monday_on_or_after(date(2025, 2, 9)), Some(date(2025, 2, 10)));
    }

    #[test]
    fn test_first_monday_every_weekday() {
        // 2025-02-03 is a Monday; every day of that week lands on 02-03 or 02-10
        for offset in 0..7 {
            let day = date(2025, 2, 3) + Days::new(offset);
            let monday = first_monday_on_or_after(day).unwrap();
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday >= day);
            assert!((monday - day).num_days() < 7);
        }
    }

    #[test]
    fn test_first_monday_near_max_date() {
        for offset in 0..7 {
            let day = NaiveDate::MAX - Days::new(offset);
            match first_monday_on_or_after(day) {
                Some(monday) => {
                    assert_eq!(monday.weekday(), Weekday::Mon);
                    assert!(monday >= day);
                }
                None => {
                    // iter_days stops before MAX itself
                    assert_ne!(NaiveDate::MAX.weekday(), Weekday::Mon);
                    assert!(day.iter_days().all(|d| d.weekday() != Weekday::Mon));
                }
            }
        }
    }

    #[test]
    fn test_calendar_at_max_year_does_not_overflow() {
        let year = NaiveDate::MAX.year();
        let calendar = AcademicCalendar::new(
            year,
            vec![
                Term::new(1, date(year, 1, 5), date(year, 3, 31)),
                Term::new(2, date(year, 4, 10), date(year, 6, 30)),
                Term::new(3, date(year, 7, 10), date(year, 9, 30)),
                Term::new(4, date(year, 12, 1), date(year, 12, 31)),
            ],
        )
        .unwrap();

        let dates = intake_dates(&calendar);

        // Term 4's sixth Monday lands after NaiveDate::MAX and is skipped
        assert_eq!(dates.len(), 7);
        let last = dates[6];
        assert_eq!((last.month(), last.weekday()), (12, Weekday::Mon));
        assert!(last.day() <= 7);
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_term_one_intakes() {
        let calendar = AcademicCalendar::term_dates_2025();
        let dates = intake_dates(&calendar);
        assert_eq!(dates[0], date(2025, 2, 10));
        assert_eq!(dates[1], date(2025, 3, 17));
    }

    #[test]
    fn test_full_2025_enumeration() {
        let dates = intake_dates(&AcademicCalendar::term_dates_2025());
        assert_eq!(
            dates,
            vec![
                date(2025, 2, 10),
                date(2025, 3, 17),
                date(2025, 4, 28),
                date(2025, 6, 2),
                date(2025, 7, 14),
                date(2025, 8, 18),
                date(2025, 10, 6),
                date(2025, 11, 10),
            ]
        );
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(dates.iter().all(|d| d.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_short_term_skips_sixth_monday() {
        let calendar = AcademicCalendar::new(
            2025,
            vec![
                Term::new(1, date(2025, 2, 4), date(2025, 3, 7)), // too short
                Term::new(2, date(2025, 4, 28), date(2025, 6, 2)), // sixth Monday == end
                Term::new(3, date(2025, 7, 14), date(2025, 9, 19)),
                Term::new(4, date(2025, 10, 6), date(2025, 11, 9)), // one day short
            ],
        )
        .unwrap();

        let dates = intake_dates(&calendar);
        assert_eq!(
            dates,
            vec![
                date(2025, 2, 10),
                date(2025, 4, 28),
                date(2025, 6, 2),
                date(2025, 7, 14),
                date(2025, 8, 18),
                date(2025, 10, 6),
            ]
        );
    }

    #[test]
    fn test_upcoming_excludes_today() {
        let dates = intake_dates(&AcademicCalendar::term_dates_2025());
        let upcoming = upcoming_intakes(&dates, date(2025, 4, 28), DEFAULT_UPCOMING_LIMIT);
        assert_eq!(
            upcoming,
            vec![
                date(2025, 6, 2),
                date(2025, 7, 14),
                date(2025, 8, 18),
                date(2025, 10, 6),
            ]
        );
    }

    #[test]
    fn test_upcoming_fewer_than_limit() {
        let dates = intake_dates(&AcademicCalendar::term_dates_2025());
        let upcoming = upcoming_intakes(&dates, date(2025, 9, 1), DEFAULT_UPCOMING_LIMIT);
        assert_eq!(upcoming, vec![date(2025, 10, 6), date(2025, 11, 10)]);

        assert!(upcoming_intakes(&dates, date(2026, 1, 1), DEFAULT_UPCOMING_LIMIT).is_empty());
    }

    #[test]
    fn test_upcoming_preserves_order_and_limit() {
        let dates = intake_dates(&AcademicCalendar::term_dates_2025());
        for limit in 0..10 {
            let upcoming = upcoming_intakes(&dates, date(2025, 1, 1), limit);
            assert_eq!(upcoming.len(), limit.min(dates.len()));
            assert_eq!(upcoming[..], dates[..upcoming.len()]);
        }
    }
}
