use std::collections::HashMap;

use serde::Deserialize;

use crate::invoice::{AggregationTable, Row};
use crate::time::Month;

/// Contracted working hours per calendar month, keyed by month number.
///
/// The table is user-configurable, so lookups are forgiving: a month that
/// is missing from the table, or whose key does not parse as a month
/// number, simply contributes zero contracted hours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ContractedHours(HashMap<String, f64>);

impl ContractedHours {
    #[must_use]
    pub fn hours_for(&self, month: Month) -> f64 {
        self.0
            .iter()
            .find(|(key, _)| key.parse::<usize>().ok() == Some(month.as_usize()))
            .map(|(_, hours)| *hours)
            .unwrap_or(0.0)
    }
}

impl Default for ContractedHours {
    fn default() -> Self {
        Self(
            Month::months()
                .into_iter()
                .map(|month| (format!("{:02}", month.as_usize()), 160.0))
                .collect(),
        )
    }
}

impl<'a, const N: usize> From<[(&'a str, f64); N]> for ContractedHours {
    fn from(entries: [(&'a str, f64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(key, hours)| (key.to_string(), hours))
                .collect(),
        )
    }
}

/// Subtotal of one aggregation group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    label: String,
    hours: f64,
    value: f64,
}

impl GroupTotal {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// The billed totals of one invoice, at full precision.
///
/// Nothing in here is rounded, the renderer rounds once when formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    groups: Vec<GroupTotal>,
    total_hours: f64,
    total_value: f64,
    contracted_hours: f64,
    contracted_value: f64,
    overtime_hours: f64,
    overtime_value: f64,
    fixed_fee: f64,
    final_total: f64,
}

impl InvoiceTotals {
    /// Computes the invoice totals for an aggregation table.
    ///
    /// `month` is the month of the invoiced period and selects the
    /// contracted hours. Overtime may come out negative and is reported
    /// as-is. The final total charges the contracted hours plus the fixed
    /// fee, worked hours only show up in the overtime line.
    #[must_use]
    pub fn compute(
        table: &AggregationTable,
        rate: f64,
        month: Month,
        overtime_adjustment: f64,
        contracted: &ContractedHours,
        fixed_fee: f64,
    ) -> Self {
        let mut groups = Vec::with_capacity(table.len());
        let mut total_hours = 0.0;

        for (label, rows) in table.groups() {
            let hours: f64 = rows.iter().map(Row::hours).sum();
            total_hours += hours;
            groups.push(GroupTotal {
                label: label.to_string(),
                hours,
                value: hours * rate,
            });
        }

        let contracted_hours = contracted.hours_for(month);
        let contracted_value = contracted_hours * rate;
        let overtime_hours = overtime_adjustment + (total_hours - contracted_hours);

        Self {
            groups,
            total_hours,
            total_value: total_hours * rate,
            contracted_hours,
            contracted_value,
            overtime_hours,
            overtime_value: overtime_hours * rate,
            fixed_fee,
            final_total: contracted_value + fixed_fee,
        }
    }

    pub fn groups(&self) -> &[GroupTotal] {
        &self.groups
    }

    pub fn total_hours(&self) -> f64 {
        self.total_hours
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn contracted_hours(&self) -> f64 {
        self.contracted_hours
    }

    pub fn contracted_value(&self) -> f64 {
        self.contracted_value
    }

    pub fn overtime_hours(&self) -> f64 {
        self.overtime_hours
    }

    pub fn overtime_value(&self) -> f64 {
        self.overtime_value
    }

    pub fn fixed_fee(&self) -> f64 {
        self.fixed_fee
    }

    pub fn final_total(&self) -> f64 {
        self.final_total
    }
}
