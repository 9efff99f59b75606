use crate::consts::{ERA_BCE, ERA_CE, MONTHS_PER_YEAR};
use crate::protocol::{DateField, TemporalAccessor};
use crate::DateTimeError;
use chrono::{Datelike, Local, NaiveDate, Utc};

/// Source of the current calendar date.
///
/// [`YearMonth::now_with`](crate::YearMonth::now_with) reads through this
/// trait, so tests can substitute a [`FixedClock`] for the system clock.
pub trait Clock {
    /// Returns today's date as seen by this clock.
    fn today(&self) -> NaiveDate;
}

/// System clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// System clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcClock;

impl Clock for UtcClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock frozen at a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl TemporalAccessor for NaiveDate {
    fn is_field_supported(&self, _field: DateField) -> bool {
        // a civil date carries every date-level field
        true
    }

    fn get_field(&self, field: DateField) -> Result<i64, DateTimeError> {
        let value = match field {
            DateField::DayOfWeek => i64::from(self.weekday().number_from_monday()),
            DateField::DayOfMonth => i64::from(self.day()),
            DateField::DayOfYear => i64::from(self.ordinal()),
            DateField::MonthOfYear => i64::from(self.month()),
            DateField::ProlepticMonth => {
                i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month()) - 1
            }
            DateField::YearOfEra => {
                let year = self.year();
                i64::from(if year < 1 { 1 - year } else { year })
            }
            DateField::Year => i64::from(self.year()),
            DateField::Era => {
                if self.year() < 1 {
                    ERA_BCE
                } else {
                    ERA_CE
                }
            }
        };
        Ok(value)
    }
}
