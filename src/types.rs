use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTHS_PER_YEAR};
use crate::protocol::{DateField, TemporalField};
use crate::DateTimeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve months of the proleptic Gregorian calendar, numbered 1 to 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MonthOfYear {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthOfYear {
    /// All months in calendar order.
    pub const VALUES: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Resolves a month number to its named constant.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the value is not in `1..=12`.
    pub fn of(value: u8) -> Result<Self, DateTimeError> {
        DateField::MonthOfYear
            .range()
            .check_valid_value(i64::from(value), DateField::MonthOfYear)?;
        Ok(Self::VALUES[usize::from(value - 1)])
    }

    /// Returns the month number, from 1 (January) to 12 (December)
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the month name, capitalized
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Days in this month for a year of the given leap status
    pub const fn length(self, leap_year: bool) -> u8 {
        match self {
            Self::February => {
                if leap_year {
                    29
                } else {
                    28
                }
            }
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    /// Month `months` later, wrapping around the end of the year.
    pub fn plus(self, months: i64) -> Self {
        let index =
            (i64::from(self.value()) - 1 + months.rem_euclid(MONTHS_PER_YEAR)).rem_euclid(MONTHS_PER_YEAR);
        Self::VALUES[index as usize]
    }

    /// Month `months` earlier, wrapping around the start of the year.
    pub fn minus(self, months: i64) -> Self {
        self.plus(-months.rem_euclid(MONTHS_PER_YEAR))
    }

    /// Converts a month number coming from a `chrono` date.
    /// Callers must guarantee the value is in `1..=12`; `chrono` does.
    pub(crate) const fn from_chrono_month(value: u32) -> Self {
        debug_assert!(value >= 1 && value <= 12);
        Self::VALUES[(value - 1) as usize]
    }
}

impl TryFrom<u8> for MonthOfYear {
    type Error = DateTimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl From<MonthOfYear> for u8 {
    fn from(month: MonthOfYear) -> Self {
        month.value()
    }
}

impl fmt::Display for MonthOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: MonthOfYear) -> u8 {
    month.length(is_leap_year(year))
}
