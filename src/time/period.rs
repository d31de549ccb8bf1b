use core::fmt;

use crate::time::{Date, Month, Year};

/// An inclusive range of calendar dates, usually one invoicing month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    start: Date,
    end: Date,
}

impl Period {
    /// Creates a new period. `start` and `end` are both part of it.
    ///
    /// # Panics
    ///
    /// Panics in debug builds when `start` is after `end`.
    #[must_use]
    pub fn new(start: Date, end: Date) -> Self {
        debug_assert!(start <= end, "period start must not be after its end");
        Self { start, end }
    }

    /// The period spanning a whole month, from its first to its last day.
    #[must_use]
    pub const fn month(year: Year, month: Month) -> Self {
        Self {
            start: Date::first_day(year, month),
            end: Date::last_day(year, month),
        }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} a {}",
            self.start.formatted("{day}/{month}/{year}"),
            self.end.formatted("{day}/{month}/{year}")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_month_period() {
        let period = Period::month(Year::new(2025), Month::June);

        assert_eq!(period.start(), Date::first_day(Year::new(2025), Month::June));
        assert_eq!(period.end(), Date::last_day(Year::new(2025), Month::June));
        assert_eq!(period.end().day(), 30);
        assert_eq!(period.to_string(), "01/06/2025 a 30/06/2025");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let period = Period::month(Year::new(2025), Month::June);

        assert!(period.contains(period.start()));
        assert!(period.contains(period.end()));
        assert!(period.contains(Date::new(Year::new(2025), Month::June, 15).unwrap()));

        assert!(!period.contains(Date::new(Year::new(2025), Month::May, 31).unwrap()));
        assert!(!period.contains(Date::new(Year::new(2025), Month::July, 1).unwrap()));
    }
}
