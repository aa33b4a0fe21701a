// Enrolment Calendar - Core Library
// Age, year-level classification, enrolment year and intake dates
// derived from a child's date of birth. Used by the CLI and the API server.

pub mod error;
pub mod age;
pub mod classification;
pub mod calendar;
pub mod intake;
pub mod enrolment;
pub mod config;
pub mod report;
pub mod logging;

// Re-export commonly used types
pub use error::EnrolmentError;
pub use age::{calculate_age, Age};
pub use classification::{
    classify_by_age, classify_by_birth_date, Classification, ClassificationPolicy,
};
pub use calendar::{AcademicCalendar, Term, TERMS_PER_YEAR};
pub use intake::{
    first_monday_on_or_after, intake_dates, upcoming_intakes, DEFAULT_UPCOMING_LIMIT,
};
pub use enrolment::{
    assess, assess_today, enrolment_year, parse_date, parse_date_of_birth, parse_today, today,
    Assessment, EnrolmentDetails,
};
pub use config::EnrolmentConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
