// ⚙️ Configuration - Calendar, classification policy, display limit
//
// JSON file, every field optional:
// {
//   "calendar": { "year": 2025, "terms": [ { "ordinal": 1, "start": "...", "end": "..." }, ... ] },
//   "classification_policy": "age_at_today",
//   "max_upcoming_intakes": 4
// }

use crate::calendar::AcademicCalendar;
use crate::classification::ClassificationPolicy;
use crate::intake::DEFAULT_UPCOMING_LIMIT;
use anyhow::{Context as AnyhowContext, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnrolmentConfig {
    /// Term table used for every enrolment year
    #[serde(default)]
    pub calendar: AcademicCalendar,

    /// Which classification rule the enrolment details use
    #[serde(default)]
    pub classification_policy: ClassificationPolicy,

    /// How many future intake dates to show
    #[serde(default = "default_max_upcoming_intakes")]
    pub max_upcoming_intakes: usize,
}

fn default_max_upcoming_intakes() -> usize {
    DEFAULT_UPCOMING_LIMIT
}

impl Default for EnrolmentConfig {
    fn default() -> Self {
        EnrolmentConfig {
            calendar: AcademicCalendar::default(),
            classification_policy: ClassificationPolicy::default(),
            max_upcoming_intakes: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

impl EnrolmentConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: EnrolmentConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        info!(
            path = ?path.as_ref(),
            calendar_year = config.calendar.year(),
            policy = config.classification_policy.name(),
            "loaded enrolment config"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
