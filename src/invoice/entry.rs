use log::warn;
use serde_json::Value;

use crate::api::RawRecord;
use crate::time::Date;

/// Tag assumed for records that do not carry one.
pub const DEFAULT_TAG: &str = "development";
/// Description used when every fallback source is empty.
pub const NO_DESCRIPTION: &str = "Sem descrição";

/// A single timesheet entry after normalization.
///
/// Every entry has a parseable date, a non-empty description and a finite,
/// non-negative duration in hours. The task label may still be blank here,
/// it is resolved to the sentinel group at aggregation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    date: Date,
    description: String,
    duration: f64,
    tag: String,
    task: String,
}

impl Entry {
    #[must_use]
    pub fn new(
        date: Date,
        description: impl Into<String>,
        duration: f64,
        tag: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            duration,
            tag: tag.into(),
            task: task.into(),
        }
    }

    /// Normalizes one raw api record.
    ///
    /// Records without a `start_date` are dropped silently, records whose
    /// `start_date` cannot be parsed are dropped with a diagnostic. Both
    /// are per-record conditions, never errors.
    pub fn from_record(record: &RawRecord) -> Option<Self> {
        let start_date = record.field_str("start_date").filter(|s| !s.is_empty())?;

        let date = match Date::parse_flexible(start_date) {
            Ok(date) => date,
            Err(error) => {
                warn!(
                    "skipping record {} with start date \"{}\": {}",
                    record.id().unwrap_or("?"),
                    start_date,
                    error
                );
                return None;
            }
        };

        Some(Self {
            date,
            description: description_of(record),
            duration: duration_of(record.field("duration")),
            tag: record
                .field_str("tag")
                .map(ToString::to_string)
                .unwrap_or_else(|| DEFAULT_TAG.to_string()),
            task: record
                .association_str("task")
                .map(|task| task.trim().to_string())
                .unwrap_or_default(),
        })
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn task(&self) -> &str {
        &self.task
    }
}

/// Fallback chain: the record's own description, then the task display
/// name from the associations, then the raw task identifier.
fn description_of(record: &RawRecord) -> String {
    record
        .field_str("description")
        .filter(|description| !description.is_empty())
        .map(ToString::to_string)
        .or_else(|| {
            record
                .association_str("task")
                .map(str::trim)
                .filter(|task| !task.is_empty())
                .map(ToString::to_string)
        })
        .or_else(|| {
            record.field("task").and_then(|task| match task {
                Value::String(task) if task.is_empty() => None,
                Value::Null => None,
                Value::String(task) => Some(task.clone()),
                other => Some(other.to_string()),
            })
        })
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}

/// Durations arrive as numbers or as strings, possibly with a decimal
/// comma. Anything unusable becomes zero hours instead of an error.
fn duration_of(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(string)) => string.trim().replace(',', ".").parse().ok(),
        _ => None,
    };

    match parsed {
        Some(duration) if duration.is_finite() && duration >= 0.0 => duration,
        _ => 0.0,
    }
}
