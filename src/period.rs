use crate::consts::MONTHS_PER_YEAR;
use crate::protocol::TemporalAmount;
use crate::{DateTimeError, YearMonth};
use std::fmt;

/// A date-based amount of years and months, such as "1 year and 2 months".
///
/// The two components are kept as supplied; `of(0, 15)` is fifteen months,
/// not one year and three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    years: i32,
    months: i32,
}

impl Period {
    /// A period of no time.
    pub const ZERO: Self = Self { years: 0, months: 0 };

    /// Creates a period of years and months
    pub const fn of(years: i32, months: i32) -> Self {
        Self { years, months }
    }

    /// Creates a period of whole years
    pub const fn of_years(years: i32) -> Self {
        Self { years, months: 0 }
    }

    /// Creates a period of whole months
    pub const fn of_months(months: i32) -> Self {
        Self { years: 0, months }
    }

    /// Returns the years component
    #[inline]
    pub const fn years(self) -> i32 {
        self.years
    }

    /// Returns the months component
    #[inline]
    pub const fn months(self) -> i32 {
        self.months
    }

    /// Checks if both components are zero
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0
    }

    /// Total number of months, counting each year as twelve
    pub const fn total_months(self) -> i64 {
        self.years as i64 * MONTHS_PER_YEAR + self.months as i64
    }

    /// Returns this period with both components negated.
    ///
    /// # Errors
    /// Returns `DateTimeError::Overflow` if a component is `i32::MIN`.
    pub fn negated(self) -> Result<Self, DateTimeError> {
        let years = self
            .years
            .checked_neg()
            .ok_or(DateTimeError::Overflow("negated"))?;
        let months = self
            .months
            .checked_neg()
            .ok_or(DateTimeError::Overflow("negated"))?;
        Ok(Self { years, months })
    }
}

impl TemporalAmount for Period {
    fn add_to(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError> {
        temporal
            .plus_years(i64::from(self.years))?
            .plus_months(i64::from(self.months))
    }

    fn subtract_from(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError> {
        temporal
            .minus_years(i64::from(self.years))?
            .minus_months(i64::from(self.months))
    }
}

impl fmt::Display for Period {
    /// ISO-8601 period form, e.g. `P1Y2M`; zero renders as `P0M`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0M");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u8) -> YearMonth {
        YearMonth::of(year, month).unwrap()
    }

    #[test]
    fn test_constructors_and_accessors() {
        let period = Period::of(1, 2);
        assert_eq!(period.years(), 1);
        assert_eq!(period.months(), 2);
        assert_eq!(Period::of_years(3), Period::of(3, 0));
        assert_eq!(Period::of_months(7), Period::of(0, 7));
        assert!(Period::ZERO.is_zero());
        assert!(!period.is_zero());
    }

    #[test]
    fn test_total_months() {
        assert_eq!(Period::of(1, 2).total_months(), 14);
        assert_eq!(Period::of(-1, 2).total_months(), -10);
        assert_eq!(Period::of(0, 15).total_months(), 15);
    }

    #[test]
    fn test_add_to() {
        assert_eq!(ym(2007, 11).plus(&Period::of(1, 2)).unwrap(), ym(2009, 1));
        assert_eq!(ym(2007, 11).plus(&Period::of_months(2)).unwrap(), ym(2008, 1));
        assert_eq!(ym(2007, 11).plus(&Period::ZERO).unwrap(), ym(2007, 11));
    }

    #[test]
    fn test_subtract_from() {
        assert_eq!(ym(2009, 1).minus(&Period::of(1, 2)).unwrap(), ym(2007, 11));
        assert_eq!(ym(2008, 1).minus(&Period::of_months(2)).unwrap(), ym(2007, 11));
    }

    #[test]
    fn test_negated() {
        assert_eq!(Period::of(1, -2).negated().unwrap(), Period::of(-1, 2));
        assert!(Period::of(i32::MIN, 0).negated().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Period::of(1, 2).to_string(), "P1Y2M");
        assert_eq!(Period::of_years(3).to_string(), "P3Y");
        assert_eq!(Period::of_months(-7).to_string(), "P-7M");
        assert_eq!(Period::ZERO.to_string(), "P0M");
    }
}
