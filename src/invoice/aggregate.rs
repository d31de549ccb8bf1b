use std::collections::BTreeMap;

use indexmap::IndexMap;
use log::info;
use serde::Deserialize;

use crate::invoice::Entry;
use crate::time::Period;

/// Group label for entries whose task association is absent or blank.
pub const NO_TASK: &str = "Sem task";

/// Which key the aggregation groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// By the task display name, the canonical mode.
    #[default]
    Task,
    /// By the configured allow-list of interest tags.
    Tag,
}

/// One aggregated invoice line: a description and its summed hours.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    description: String,
    hours: f64,
}

impl Row {
    #[must_use]
    pub fn new(description: impl Into<String>, hours: f64) -> Self {
        Self {
            description: description.into(),
            hours,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }
}

/// The aggregated services of one invoicing period.
///
/// Groups iterate in ascending lexicographic order of their label and only
/// exist when at least one entry contributed to them. An empty table means
/// there is nothing to invoice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregationTable {
    groups: BTreeMap<String, Vec<Row>>,
}

impl AggregationTable {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Row])> {
        self.groups
            .iter()
            .map(|(label, rows)| (label.as_str(), rows.as_slice()))
    }

    #[must_use]
    pub fn group(&self, label: &str) -> Option<&[Row]> {
        self.groups.get(label).map(Vec::as_slice)
    }
}

/// Keeps only the entries dated inside the period (both ends inclusive),
/// preserving their order.
#[must_use]
pub fn filter_period(entries: Vec<Entry>, period: &Period) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| period.contains(entry.date()))
        .collect()
}

/// Builds the aggregation table for the given entries.
///
/// `interest_tags` is only consulted in [`GroupBy::Tag`] mode, where a tag
/// without any matching entries is skipped with a notice.
#[must_use]
pub fn aggregate(entries: &[Entry], mode: GroupBy, interest_tags: &[String]) -> AggregationTable {
    let mut groups = BTreeMap::new();

    match mode {
        GroupBy::Task => {
            let mut by_label: IndexMap<&str, Vec<&Entry>> = IndexMap::new();
            for entry in entries {
                let label = match entry.task().trim() {
                    "" => NO_TASK,
                    label => label,
                };
                by_label.entry(label).or_insert_with(Vec::new).push(entry);
            }

            for (label, group) in by_label {
                groups.insert(label.to_string(), sum_by_description(&group));
            }
        }
        GroupBy::Tag => {
            for tag in interest_tags {
                let group: Vec<&Entry> = entries
                    .iter()
                    .filter(|entry| entry.tag() == tag.as_str())
                    .collect();

                if group.is_empty() {
                    info!("no entries found for tag \"{}\"", tag);
                    continue;
                }

                groups.insert(tag.clone(), sum_by_description(&group));
            }
        }
    }

    AggregationTable { groups }
}

/// Sums durations by exact description and orders the result by summed
/// hours, descending. The sort is stable, ties keep the order in which
/// their description first appeared.
fn sum_by_description(entries: &[&Entry]) -> Vec<Row> {
    let mut sums: IndexMap<&str, f64> = IndexMap::new();
    for entry in entries {
        *sums.entry(entry.description()).or_insert(0.0) += entry.duration();
    }

    let mut rows: Vec<Row> = sums
        .into_iter()
        .map(|(description, hours)| Row::new(description, hours))
        .collect();
    rows.sort_by(|a, b| b.hours.total_cmp(&a.hours));

    rows
}
