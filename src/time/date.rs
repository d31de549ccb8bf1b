use core::fmt;
use core::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::time::{Month, Year};
use crate::utils::StrExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Returns the date of the first day as a date in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day as a date in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    /// The current date in UTC.
    #[must_use]
    pub fn today() -> Self {
        let seconds = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self::from_days_since_epoch((seconds / 86_400) as usize)
    }

    #[must_use]
    const fn from_days_since_epoch(mut days: usize) -> Self {
        let mut year = Year::new(1970);
        while days >= year.days() {
            days -= year.days();
            year = year.next();
        }

        let mut month = Month::January;
        while days >= year.number_of_days_in_month(month) {
            days -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self {
            year,
            month,
            day: days + 1,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year()))
            .replace("{month}", &format!("{:02}", self.month()))
            .replace("{day}", &format!("{:02}", self.day()))
    }
}

impl Date {
    /// Parses the `start_date` strings found in timesheet records.
    ///
    /// Timestamps (anything containing a `T`) keep only their date part.
    /// Everything else is truncated to ten characters and tried as
    /// `YYYY-MM-DD`, then `DD/MM/YYYY`, then `MM/DD/YYYY`. The first
    /// format that parses wins.
    pub fn parse_flexible(input: &str) -> Result<Self, InvalidDate> {
        if let Some((date, _time)) = input.split_once('T') {
            return date.parse();
        }

        let truncated = input.get(..10).unwrap_or(input);

        truncated
            .parse()
            .or_else(|_| Self::parse_slash_separated(truncated, true))
            .or_else(|_| Self::parse_slash_separated(truncated, false))
            .map_err(|_| InvalidDate::ParseDateError {
                input: input.to_string(),
            })
    }

    fn parse_slash_separated(input: &str, day_first: bool) -> Result<Self, InvalidDate> {
        let [Some(first), Some(second), Some(year)] = input.split_exact::<3>("/") else {
            return Err(InvalidDate::ParseDateError {
                input: input.to_string(),
            });
        };

        let (day, month) = if day_first {
            (first, second)
        } else {
            (second, first)
        };

        let year = Year::new(parse_or_err(year)?);
        let month =
            Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                input: input.to_string(),
            })?;

        Self::new(year, month, parse_or_err(day)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not a valid date")]
    ParseDateError { input: String },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: input.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year)?);
            let month =
                Month::try_from(parse_or_err(month)?).map_err(|_| InvalidDate::ParseDateError {
                    input: string.to_string(),
                })?;
            let day = parse_or_err(day)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}
