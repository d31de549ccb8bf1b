use core::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::invoice::{ContractedHours, GroupBy};
use crate::time::{Month, Period, Year};
use crate::utils::StrExt;

/// The invoiced month, written as `"MM/YYYY"` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct MonthSpec {
    month: Month,
    year: Year,
}

impl MonthSpec {
    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Year {
        self.year
    }

    /// The period from the first to the last day of the month.
    #[must_use]
    pub fn period(&self) -> Period {
        Period::month(self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not a valid month. Expected format: \"MM/YYYY\" (e.g. \"05/2025\")")]
pub struct InvalidMonthSpec {
    input: String,
}

impl FromStr for MonthSpec {
    type Err = InvalidMonthSpec;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let error = || InvalidMonthSpec {
            input: string.to_string(),
        };

        let [Some(month), Some(year)] = string.split_exact::<2>("/") else {
            return Err(error());
        };

        let month = month
            .parse::<usize>()
            .ok()
            .and_then(|month| Month::try_from(month).ok())
            .ok_or_else(error)?;
        let year = year.parse::<usize>().map(Year::new).map_err(|_| error())?;

        Ok(Self { month, year })
    }
}

impl TryFrom<String> for MonthSpec {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

fn default_fixed_fee() -> f64 {
    120.0
}

fn default_interest_tags() -> Vec<String> {
    ["development", "meeting", "tests"]
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

/// The `[invoice]` section: everything that shapes the numbers on the
/// invoice, as opposed to who issues or receives it.
#[derive(Debug, Clone, Deserialize)]
pub struct Invoice {
    number: String,
    hourly_rate: f64,
    month: MonthSpec,
    #[serde(default)]
    overtime_adjustment: f64,
    #[serde(default = "default_fixed_fee")]
    fixed_fee: f64,
    #[serde(default)]
    group_by: GroupBy,
    #[serde(default = "default_interest_tags")]
    interest_tags: Vec<String>,
    #[serde(default)]
    contracted_hours: ContractedHours,
}

impl Invoice {
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[must_use]
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    #[must_use]
    pub fn month(&self) -> MonthSpec {
        self.month
    }

    #[must_use]
    pub fn overtime_adjustment(&self) -> f64 {
        self.overtime_adjustment
    }

    #[must_use]
    pub fn fixed_fee(&self) -> f64 {
        self.fixed_fee
    }

    #[must_use]
    pub fn group_by(&self) -> GroupBy {
        self.group_by
    }

    #[must_use]
    pub fn interest_tags(&self) -> &[String] {
        &self.interest_tags
    }

    #[must_use]
    pub fn contracted_hours(&self) -> &ContractedHours {
        &self.contracted_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_month_spec_parsing() {
        let spec: MonthSpec = "06/2025".parse().unwrap();
        assert_eq!(spec.month(), Month::June);
        assert_eq!(spec.year(), Year::new(2025));
        assert_eq!(spec.period().to_string(), "01/06/2025 a 30/06/2025");
    }

    #[test]
    fn test_month_spec_rejects_garbage() {
        for input in ["", "2025", "13/2025", "0/2025", "june/2025", "06-2025"] {
            assert!(input.parse::<MonthSpec>().is_err(), "input: {:?}", input);
        }
    }

    #[test]
    fn test_invoice_section_defaults() {
        let invoice: Invoice = toml::from_str(concat!(
            "number = \"3\"\n",
            "hourly_rate = 50.0\n",
            "month = \"06/2025\"\n",
        ))
        .unwrap();

        assert_eq!(invoice.number(), "3");
        assert_eq!(invoice.overtime_adjustment(), 0.0);
        assert_eq!(invoice.fixed_fee(), 120.0);
        assert_eq!(invoice.group_by(), GroupBy::Task);
        assert_eq!(invoice.interest_tags(), ["development", "meeting", "tests"]);
        assert_eq!(invoice.contracted_hours().hours_for(Month::June), 160.0);
    }

    #[test]
    fn test_invoice_section_overrides() {
        let invoice: Invoice = toml::from_str(concat!(
            "number = \"12A\"\n",
            "hourly_rate = 80.0\n",
            "month = \"02/2026\"\n",
            "overtime_adjustment = -2.5\n",
            "fixed_fee = 0.0\n",
            "group_by = \"tag\"\n",
            "interest_tags = [\"development\"]\n",
            "\n",
            "[contracted_hours]\n",
            "\"02\" = 152.0\n",
        ))
        .unwrap();

        assert_eq!(invoice.overtime_adjustment(), -2.5);
        assert_eq!(invoice.fixed_fee(), 0.0);
        assert_eq!(invoice.group_by(), GroupBy::Tag);
        assert_eq!(invoice.contracted_hours().hours_for(Month::February), 152.0);
        // a partial table only knows the months it lists
        assert_eq!(invoice.contracted_hours().hours_for(Month::March), 0.0);
    }
}
