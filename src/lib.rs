mod clock;
mod consts;
mod period;
mod prelude;
mod protocol;
mod types;

pub use clock::{Clock, FixedClock, SystemClock, UtcClock};
pub use consts::*;
pub use period::Period;
pub use protocol::{
    DateField, DateUnit, TemporalAccessor, TemporalAdjuster, TemporalAmount, TemporalField,
    TemporalUnit, ValueRange,
};
pub use types::{days_in_month, is_leap_year, MonthOfYear};

use crate::consts::{MAX_YEAR_DIGITS, MONTH_DIGITS, YEAR_PAD_DIGITS};
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::any;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// An immutable year-month in the proleptic Gregorian calendar, such as
/// `2007-12`.
///
/// Years run from [`MIN_YEAR`] to [`MAX_YEAR`]; every live value holds a
/// valid year and month, enforced at construction. All operations return a
/// new value and leave the receiver untouched.
///
/// Equality and ordering consider year first, then month, so the derived
/// order is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: MonthOfYear,
}

/// Errors raised by construction, field queries and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// A value fell outside the bounds declared for its field.
    #[error("invalid value for {field}: {value} (valid values {range})")]
    OutOfRange {
        field: String,
        value: i64,
        range: ValueRange,
    },

    /// Field recognized by the protocol but not usable with this value type.
    #[error("unsupported field: {0}")]
    UnsupportedField(String),

    /// Unit recognized by the protocol but not usable with this value type.
    #[error("unsupported unit: {0}")]
    UnsupportedUnit(String),

    /// Field values that can exceed 32 bits must be read with `get_long`.
    #[error("field {0} does not fit in an i32, use get_long instead")]
    UnsupportedIntField(String),

    /// Checked arithmetic left the safe integer domain.
    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A foreign temporal object did not yield the required fields.
    #[error("unable to obtain a year-month from {value} of type {type_name}")]
    Unconvertible {
        value: String,
        type_name: &'static str,
    },

    /// The year lies outside what a civil date can represent.
    #[error("year {0} is outside the range representable as a calendar date")]
    Unrepresentable(i32),
}

/// Error type for year-month text parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Empty or whitespace-only input.
    #[error("empty year-month string")]
    EmptyInput,

    /// Input does not match the `yyyy-MM` pattern.
    #[error("invalid year-month format: {0}")]
    InvalidFormat(String),

    /// Well-formed text carrying an out-of-range year or month.
    #[error(transparent)]
    Invalid(#[from] DateTimeError),
}

// Shape only; digit counts and sign rules are enforced in `from_str`.
static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(\d+)-(\d+)$").expect("year-month pattern is well-formed"));

impl YearMonth {
    /// Creates a year-month from a year and a month number.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the year is outside
    /// [`MIN_YEAR`]`..=`[`MAX_YEAR`] or the month is outside `1..=12`.
    pub fn of(year: i32, month: u8) -> Result<Self, DateTimeError> {
        DateField::Year
            .range()
            .check_valid_value(i64::from(year), DateField::Year)?;
        Ok(Self {
            year,
            month: MonthOfYear::of(month)?,
        })
    }

    /// Creates a year-month from a year and a named month.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the year is outside
    /// [`MIN_YEAR`]`..=`[`MAX_YEAR`].
    pub fn of_month(year: i32, month: MonthOfYear) -> Result<Self, DateTimeError> {
        DateField::Year
            .range()
            .check_valid_value(i64::from(year), DateField::Year)?;
        Ok(Self { year, month })
    }

    /// Current year-month from the system clock in the local timezone.
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Current year-month from the system clock in UTC.
    pub fn now_utc() -> Self {
        Self::now_with(&UtcClock)
    }

    /// Current year-month in the given timezone.
    pub fn now_in<Tz: TimeZone>(zone: &Tz) -> Self {
        Utc::now().with_timezone(zone).date_naive().into()
    }

    /// Current year-month as seen by the given clock.
    pub fn now_with(clock: &impl Clock) -> Self {
        clock.today().into()
    }

    /// Extracts a year-month from any temporal object carrying year and
    /// month fields. Passing a `YearMonth` yields an equal value.
    ///
    /// # Errors
    /// Returns `DateTimeError::Unconvertible`, naming the source object and
    /// its type, if either field cannot be read or resolves out of range.
    pub fn from_temporal<T>(temporal: &T) -> Result<Self, DateTimeError>
    where
        T: TemporalAccessor + ?Sized,
    {
        let unconvertible = || DateTimeError::Unconvertible {
            value: format!("{temporal:?}"),
            type_name: any::type_name::<T>(),
        };
        let year = temporal
            .get_field(DateField::Year)
            .map_err(|_| unconvertible())?;
        let month = temporal
            .get_field(DateField::MonthOfYear)
            .map_err(|_| unconvertible())?;
        let year = i32::try_from(year).map_err(|_| unconvertible())?;
        let month = u8::try_from(month).map_err(|_| unconvertible())?;
        Self::of(year, month).map_err(|_| unconvertible())
    }

    /// Returns the year, from [`MIN_YEAR`] to [`MAX_YEAR`]
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> MonthOfYear {
        self.month
    }

    /// Returns the month number, from 1 to 12
    #[inline]
    pub const fn month_value(&self) -> u8 {
        self.month.value()
    }

    /// Months elapsed since 0000-01, negative before it.
    pub(crate) const fn proleptic_month(&self) -> i64 {
        self.year as i64 * MONTHS_PER_YEAR + (self.month.value() as i64 - 1)
    }

    /// Checks if the field can be queried on this value.
    ///
    /// True for `Year`, `MonthOfYear`, `ProlepticMonth`, `YearOfEra` and
    /// `Era`; foreign tokens answer for themselves.
    pub fn is_supported(&self, field: impl TemporalField) -> bool {
        field.is_supported_by(self)
    }

    /// Checks if the unit can be used in arithmetic on this value.
    ///
    /// True for `Months`, `Years`, `Decades`, `Centuries`, `Millennia` and
    /// `Eras`; foreign tokens answer for themselves.
    pub fn is_unit_supported(&self, unit: impl TemporalUnit) -> bool {
        unit.is_supported_by(self)
    }

    /// Range of valid values for the field as observed on this value.
    ///
    /// `YearOfEra` has one extra value in the BCE era, where year zero maps
    /// to year-of-era [`MAX_YEAR`]` + 1`.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not
    /// supported.
    pub fn range(&self, field: impl TemporalField) -> Result<ValueRange, DateTimeError> {
        field.range_refined_by(self)
    }

    /// Reads the field from this value as an `i64`.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not
    /// supported.
    pub fn get_long(&self, field: impl TemporalField) -> Result<i64, DateTimeError> {
        field.get_from(self)
    }

    /// Reads the field from this value as an `i32`.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedIntField` for fields whose range
    /// exceeds an `i32` (notably `ProlepticMonth`, which must be read with
    /// [`get_long`](Self::get_long)), and `DateTimeError::UnsupportedField`
    /// for unsupported fields.
    pub fn get(&self, field: impl TemporalField) -> Result<i32, DateTimeError> {
        let value = field.get_from(self)?;
        let range = field.range_refined_by(self)?;
        range.check_valid_int_value(value, field)
    }

    /// Returns a copy produced by the given adjuster.
    ///
    /// # Errors
    /// Propagates the adjuster's error.
    pub fn with<A>(&self, adjuster: &A) -> Result<Self, DateTimeError>
    where
        A: TemporalAdjuster + ?Sized,
    {
        adjuster.adjust_into(*self)
    }

    /// Returns a copy with the given field set to `value`.
    ///
    /// The value is validated against the field's declared bounds before
    /// dispatch. Setting `ProlepticMonth` moves by whole months and may
    /// change both components; setting `Era` flips the year across the era
    /// boundary; setting `YearOfEra` keeps the current era.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` or
    /// `DateTimeError::UnsupportedField`.
    pub fn with_field(&self, field: impl TemporalField, value: i64) -> Result<Self, DateTimeError> {
        field.adjust_into(*self, value)
    }

    /// Returns a copy with the given year.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the year is outside
    /// [`MIN_YEAR`]`..=`[`MAX_YEAR`].
    pub fn with_year(&self, year: i32) -> Result<Self, DateTimeError> {
        Self::of_month(year, self.month)
    }

    /// Returns a copy with the given month number.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the month is outside `1..=12`.
    pub fn with_month(&self, month: u8) -> Result<Self, DateTimeError> {
        Ok(Self {
            year: self.year,
            month: MonthOfYear::of(month)?,
        })
    }

    /// Returns a copy with the given named month.
    pub const fn with_month_of_year(&self, month: MonthOfYear) -> Self {
        Self {
            year: self.year,
            month,
        }
    }

    /// Returns a copy with `years` added, month unchanged.
    ///
    /// # Errors
    /// Returns `DateTimeError::Overflow` or `DateTimeError::OutOfRange` if
    /// the resulting year leaves the supported range.
    pub fn plus_years(&self, years: i64) -> Result<Self, DateTimeError> {
        if years == 0 {
            return Ok(*self);
        }
        let raw = i64::from(self.year)
            .checked_add(years)
            .ok_or(DateTimeError::Overflow("plus_years"))?;
        let year = DateField::Year
            .range()
            .check_valid_int_value(raw, DateField::Year)?;
        Ok(Self {
            year,
            month: self.month,
        })
    }

    /// Returns a copy with `months` added, rolling the year as needed.
    ///
    /// # Errors
    /// Returns `DateTimeError::Overflow` or `DateTimeError::OutOfRange` if
    /// the resulting year leaves the supported range.
    pub fn plus_months(&self, months: i64) -> Result<Self, DateTimeError> {
        if months == 0 {
            return Ok(*self);
        }
        let total = self
            .proleptic_month()
            .checked_add(months)
            .ok_or(DateTimeError::Overflow("plus_months"))?;
        // Euclidean division keeps the rollover correct across year zero
        let year = DateField::Year
            .range()
            .check_valid_int_value(total.div_euclid(MONTHS_PER_YEAR), DateField::Year)?;
        let month = u8::try_from(total.rem_euclid(MONTHS_PER_YEAR) + 1)
            .map_err(|_| DateTimeError::Overflow("plus_months"))?;
        Ok(Self {
            year,
            month: MonthOfYear::of(month)?,
        })
    }

    /// Returns a copy with `years` subtracted.
    ///
    /// # Errors
    /// As for [`plus_years`](Self::plus_years).
    pub fn minus_years(&self, years: i64) -> Result<Self, DateTimeError> {
        // i64::MIN has no positive counterpart, so split the step
        if years == i64::MIN {
            self.plus_years(i64::MAX)?.plus_years(1)
        } else {
            self.plus_years(-years)
        }
    }

    /// Returns a copy with `months` subtracted.
    ///
    /// # Errors
    /// As for [`plus_months`](Self::plus_months).
    pub fn minus_months(&self, months: i64) -> Result<Self, DateTimeError> {
        if months == i64::MIN {
            self.plus_months(i64::MAX)?.plus_months(1)
        } else {
            self.plus_months(-months)
        }
    }

    /// Returns a copy with the given amount added. The amount decides how
    /// to interpret itself.
    ///
    /// # Errors
    /// Propagates the amount's error.
    pub fn plus<A>(&self, amount: &A) -> Result<Self, DateTimeError>
    where
        A: TemporalAmount + ?Sized,
    {
        amount.add_to(*self)
    }

    /// Returns a copy with the given amount subtracted.
    ///
    /// # Errors
    /// Propagates the amount's error.
    pub fn minus<A>(&self, amount: &A) -> Result<Self, DateTimeError>
    where
        A: TemporalAmount + ?Sized,
    {
        amount.subtract_from(*self)
    }

    /// Returns a copy with `amount` of the given unit added.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedUnit` for units finer than a
    /// month, or an overflow/range error from the arithmetic.
    pub fn plus_by(&self, amount: i64, unit: impl TemporalUnit) -> Result<Self, DateTimeError> {
        unit.add_to(*self, amount)
    }

    /// Returns a copy with `amount` of the given unit subtracted.
    ///
    /// # Errors
    /// As for [`plus_by`](Self::plus_by).
    pub fn minus_by(&self, amount: i64, unit: impl TemporalUnit) -> Result<Self, DateTimeError> {
        if amount == i64::MIN {
            self.plus_by(i64::MAX, &unit)?.plus_by(1, &unit)
        } else {
            self.plus_by(-amount, unit)
        }
    }

    /// Amount of the given unit from this value until `end`, truncated
    /// towards zero. Negative if `end` is earlier.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedUnit` for units finer than a
    /// month.
    pub fn until(&self, end: Self, unit: impl TemporalUnit) -> Result<i64, DateTimeError> {
        unit.between(*self, end)
    }

    /// Checks if the year is a leap year under proleptic Gregorian rules
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this month, accounting for leap years
    pub const fn length_of_month(&self) -> u8 {
        self.month.length(self.is_leap_year())
    }

    /// Number of days in this year, 365 or 366
    pub const fn length_of_year(&self) -> u16 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Checks if the day-of-month is valid for this year-month
    pub const fn is_valid_day(&self, day: u8) -> bool {
        day >= 1 && day <= self.length_of_month()
    }

    /// Combines this year-month with a day-of-month into a civil date.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the day is invalid for this
    /// month, or `DateTimeError::Unrepresentable` if the year lies outside
    /// the range a `chrono::NaiveDate` can hold.
    pub fn at_day(&self, day: u8) -> Result<NaiveDate, DateTimeError> {
        if !self.is_valid_day(day) {
            return Err(DateTimeError::OutOfRange {
                field: DateField::DayOfMonth.to_string(),
                value: i64::from(day),
                range: ValueRange::of(1, i64::from(self.length_of_month())),
            });
        }
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month.value()), u32::from(day))
            .ok_or(DateTimeError::Unrepresentable(self.year))
    }

    /// Civil date of the last day of this month.
    ///
    /// # Errors
    /// Returns `DateTimeError::Unrepresentable` if the year lies outside
    /// the range a `chrono::NaiveDate` can hold.
    pub fn at_end_of_month(&self) -> Result<NaiveDate, DateTimeError> {
        self.at_day(self.length_of_month())
    }

    // --- dispatch over the well-known tokens ---

    pub(crate) const fn supports_field(&self, field: DateField) -> bool {
        matches!(
            field,
            DateField::Year
                | DateField::MonthOfYear
                | DateField::ProlepticMonth
                | DateField::YearOfEra
                | DateField::Era
        )
    }

    pub(crate) const fn supports_unit(&self, unit: DateUnit) -> bool {
        matches!(
            unit,
            DateUnit::Months
                | DateUnit::Years
                | DateUnit::Decades
                | DateUnit::Centuries
                | DateUnit::Millennia
                | DateUnit::Eras
        )
    }

    pub(crate) fn known_field_value(&self, field: DateField) -> Result<i64, DateTimeError> {
        match field {
            DateField::MonthOfYear => Ok(i64::from(self.month.value())),
            DateField::ProlepticMonth => Ok(self.proleptic_month()),
            DateField::YearOfEra => Ok(i64::from(if self.year < 1 {
                1 - self.year
            } else {
                self.year
            })),
            DateField::Year => Ok(i64::from(self.year)),
            DateField::Era => Ok(if self.year < 1 { ERA_BCE } else { ERA_CE }),
            other => Err(DateTimeError::UnsupportedField(other.to_string())),
        }
    }

    pub(crate) fn known_field_range(&self, field: DateField) -> Result<ValueRange, DateTimeError> {
        match field {
            // one extra year-of-era value on the BCE side of the boundary
            DateField::YearOfEra => Ok(if self.year < 1 {
                ValueRange::of(1, i64::from(MAX_YEAR) + 1)
            } else {
                ValueRange::of(1, i64::from(MAX_YEAR))
            }),
            f if self.supports_field(f) => Ok(f.range()),
            other => Err(DateTimeError::UnsupportedField(other.to_string())),
        }
    }

    pub(crate) fn known_field_adjust(
        self,
        field: DateField,
        value: i64,
    ) -> Result<Self, DateTimeError> {
        field.range().check_valid_value(value, field)?;
        match field {
            DateField::MonthOfYear => {
                let month =
                    u8::try_from(value).map_err(|_| DateTimeError::Overflow("with_field"))?;
                self.with_month(month)
            }
            DateField::ProlepticMonth => self.plus_months(value - self.proleptic_month()),
            DateField::YearOfEra => {
                let year =
                    i32::try_from(value).map_err(|_| DateTimeError::Overflow("with_field"))?;
                self.with_year(if self.year < 1 { 1 - year } else { year })
            }
            DateField::Year => {
                let year =
                    i32::try_from(value).map_err(|_| DateTimeError::Overflow("with_field"))?;
                self.with_year(year)
            }
            DateField::Era => {
                if self.known_field_value(DateField::Era)? == value {
                    Ok(self)
                } else {
                    self.with_year(1 - self.year)
                }
            }
            other => Err(DateTimeError::UnsupportedField(other.to_string())),
        }
    }

    pub(crate) fn known_unit_add(self, unit: DateUnit, amount: i64) -> Result<Self, DateTimeError> {
        match unit {
            DateUnit::Months => self.plus_months(amount),
            DateUnit::Years => self.plus_years(amount),
            DateUnit::Decades => self.plus_years(
                amount
                    .checked_mul(YEARS_PER_DECADE)
                    .ok_or(DateTimeError::Overflow("plus_decades"))?,
            ),
            DateUnit::Centuries => self.plus_years(
                amount
                    .checked_mul(YEARS_PER_CENTURY)
                    .ok_or(DateTimeError::Overflow("plus_centuries"))?,
            ),
            DateUnit::Millennia => self.plus_years(
                amount
                    .checked_mul(YEARS_PER_MILLENNIUM)
                    .ok_or(DateTimeError::Overflow("plus_millennia"))?,
            ),
            DateUnit::Eras => {
                let era = self.known_field_value(DateField::Era)?;
                self.known_field_adjust(
                    DateField::Era,
                    era.checked_add(amount)
                        .ok_or(DateTimeError::Overflow("plus_eras"))?,
                )
            }
            other => Err(DateTimeError::UnsupportedUnit(other.to_string())),
        }
    }

    pub(crate) fn known_unit_between(
        self,
        end: Self,
        unit: DateUnit,
    ) -> Result<i64, DateTimeError> {
        let months = end.proleptic_month() - self.proleptic_month();
        match unit {
            DateUnit::Months => Ok(months),
            DateUnit::Years => Ok(months / MONTHS_PER_YEAR),
            DateUnit::Decades => Ok(months / (MONTHS_PER_YEAR * YEARS_PER_DECADE)),
            DateUnit::Centuries => Ok(months / (MONTHS_PER_YEAR * YEARS_PER_CENTURY)),
            DateUnit::Millennia => Ok(months / (MONTHS_PER_YEAR * YEARS_PER_MILLENNIUM)),
            DateUnit::Eras => Ok(end.known_field_value(DateField::Era)?
                - self.known_field_value(DateField::Era)?),
            other => Err(DateTimeError::UnsupportedUnit(other.to_string())),
        }
    }
}

impl TemporalAccessor for YearMonth {
    fn is_field_supported(&self, field: DateField) -> bool {
        self.supports_field(field)
    }

    fn get_field(&self, field: DateField) -> Result<i64, DateTimeError> {
        self.known_field_value(field)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        // chrono's representable years sit strictly inside the supported range
        Self {
            year: date.year(),
            month: MonthOfYear::from_chrono_month(date.month()),
        }
    }
}

impl fmt::Display for YearMonth {
    /// `yyyy-MM`; the year is zero-padded to four digits and carries an
    /// explicit sign when negative or above [`UNSIGNED_YEAR_MAX`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year > UNSIGNED_YEAR_MAX {
            write!(f, "+{}-{:02}", self.year, self.month.value())
        } else if self.year < 0 {
            write!(f, "{:05}-{:02}", self.year, self.month.value())
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month.value())
        }
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let captures = DEFAULT_PATTERN
            .captures(trimmed)
            .ok_or_else(|| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let sign = &captures[1];
        let year_digits = &captures[2];
        let month_digits = &captures[3];

        // Strict sign rules: unsigned years are exactly four digits, a plus
        // sign is only valid once the year exceeds four digits.
        let width_ok = match sign {
            "" => year_digits.len() == YEAR_PAD_DIGITS,
            "+" => (YEAR_PAD_DIGITS + 1..=MAX_YEAR_DIGITS).contains(&year_digits.len()),
            _ => (YEAR_PAD_DIGITS..=MAX_YEAR_DIGITS).contains(&year_digits.len()),
        };
        if !width_ok {
            return Err(ParseError::InvalidFormat(format!(
                "year sign and digit count do not agree: {trimmed}"
            )));
        }
        if month_digits.len() != MONTH_DIGITS {
            return Err(ParseError::InvalidFormat(format!(
                "month must have exactly {MONTH_DIGITS} digits: {trimmed}"
            )));
        }

        let magnitude: i64 = year_digits
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let signed = if sign == "-" { -magnitude } else { magnitude };
        let year = i32::try_from(signed).map_err(|_| {
            ParseError::Invalid(DateTimeError::OutOfRange {
                field: DateField::Year.to_string(),
                value: signed,
                range: DateField::Year.range(),
            })
        })?;
        let month: u8 = month_digits
            .parse()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Ok(Self::of(year, month)?)
    }
}

impl serde::Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
