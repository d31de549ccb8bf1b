mod aggregate;
mod entry;
mod totals;

pub use aggregate::*;
pub use entry::*;
pub use totals::*;

use crate::api::RawRecord;
use crate::time::Period;

/// Runs the in-memory half of the pipeline: normalize every record, keep
/// the entries dated inside the period, aggregate them.
///
/// An empty table is a regular outcome ("nothing to invoice"), the caller
/// decides whether a document gets rendered at all.
#[must_use]
pub fn build_table(
    records: &[RawRecord],
    period: &Period,
    mode: GroupBy,
    interest_tags: &[String],
) -> AggregationTable {
    let entries: Vec<Entry> = records.iter().filter_map(Entry::from_record).collect();
    let entries = filter_period(entries, period);

    aggregate(&entries, mode, interest_tags)
}
