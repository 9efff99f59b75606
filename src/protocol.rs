use crate::consts::{
    ERA_BCE, ERA_CE, MAX_MONTH, MAX_YEAR, MIN_MONTH, MIN_YEAR, MONTHS_PER_YEAR,
};
use crate::prelude::*;
use crate::types::MonthOfYear;
use crate::{DateTimeError, YearMonth};
use std::fmt;

/// Inclusive range of valid values for a temporal field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min} - {max}")]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a range from `min` to `max`, both inclusive.
    pub const fn of(min: i64, max: i64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Returns the smallest valid value
    #[inline]
    pub const fn minimum(self) -> i64 {
        self.min
    }

    /// Returns the largest valid value
    #[inline]
    pub const fn maximum(self) -> i64 {
        self.max
    }

    /// Checks if the value is within the range
    pub const fn is_valid_value(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks if every value in the range fits in an `i32`
    pub const fn is_int_value(self) -> bool {
        self.min >= i32::MIN as i64 && self.max <= i32::MAX as i64
    }

    /// Validates that the value is within the range.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` naming `field` if the value is outside.
    pub fn check_valid_value(self, value: i64, field: impl fmt::Display) -> Result<i64, DateTimeError> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(DateTimeError::OutOfRange {
                field: field.to_string(),
                value,
                range: self,
            })
        }
    }

    /// Validates that the value is within the range and fits in an `i32`.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedIntField` if the range itself exceeds
    /// `i32`, or `DateTimeError::OutOfRange` if the value is outside the range.
    pub fn check_valid_int_value(
        self,
        value: i64,
        field: impl fmt::Display,
    ) -> Result<i32, DateTimeError> {
        if !self.is_int_value() {
            return Err(DateTimeError::UnsupportedIntField(field.to_string()));
        }
        let checked = self.check_valid_value(value, field)?;
        i32::try_from(checked).map_err(|_| DateTimeError::Overflow("check_valid_int_value"))
    }
}

/// Well-known date fields.
///
/// The day-level fields are recognized by the protocol but carry no meaning
/// for a [`YearMonth`]; querying them fails with an unsupported-field error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
}

impl DateField {
    /// Returns the field name
    pub const fn name(self) -> &'static str {
        match self {
            Self::DayOfWeek => "DayOfWeek",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::MonthOfYear => "MonthOfYear",
            Self::ProlepticMonth => "ProlepticMonth",
            Self::YearOfEra => "YearOfEra",
            Self::Year => "Year",
            Self::Era => "Era",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Well-known date units.
///
/// `Days` and `Weeks` are recognized but not usable with a [`YearMonth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateUnit {
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
}

impl DateUnit {
    /// Returns the unit name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
            Self::Decades => "Decades",
            Self::Centuries => "Centuries",
            Self::Millennia => "Millennia",
            Self::Eras => "Eras",
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field token usable in [`YearMonth`] queries and adjustments.
///
/// The well-known [`DateField`] tokens implement this by dispatching into
/// the value type; external tokens implement it to extend the protocol.
pub trait TemporalField: fmt::Display {
    /// Field-declared bounds, independent of any particular value.
    fn range(&self) -> ValueRange;

    /// Whether this field can be queried on the given value.
    fn is_supported_by(&self, temporal: &YearMonth) -> bool;

    /// Bounds as observed on the given value.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not supported.
    fn range_refined_by(&self, temporal: &YearMonth) -> Result<ValueRange, DateTimeError> {
        if self.is_supported_by(temporal) {
            Ok(self.range())
        } else {
            Err(DateTimeError::UnsupportedField(self.to_string()))
        }
    }

    /// Extracts this field's value from the given value.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field is not supported.
    fn get_from(&self, temporal: &YearMonth) -> Result<i64, DateTimeError>;

    /// Returns a copy of `temporal` with this field set to `value`.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the value is outside the field's
    /// declared bounds, or `DateTimeError::UnsupportedField` if unsupported.
    fn adjust_into(&self, temporal: YearMonth, value: i64) -> Result<YearMonth, DateTimeError>;
}

impl<F: TemporalField + ?Sized> TemporalField for &F {
    fn range(&self) -> ValueRange {
        (**self).range()
    }

    fn is_supported_by(&self, temporal: &YearMonth) -> bool {
        (**self).is_supported_by(temporal)
    }

    fn range_refined_by(&self, temporal: &YearMonth) -> Result<ValueRange, DateTimeError> {
        (**self).range_refined_by(temporal)
    }

    fn get_from(&self, temporal: &YearMonth) -> Result<i64, DateTimeError> {
        (**self).get_from(temporal)
    }

    fn adjust_into(&self, temporal: YearMonth, value: i64) -> Result<YearMonth, DateTimeError> {
        (**self).adjust_into(temporal, value)
    }
}

/// A unit token usable in [`YearMonth`] arithmetic.
pub trait TemporalUnit: fmt::Display {
    /// Whether this unit can be added to the given value.
    fn is_supported_by(&self, temporal: &YearMonth) -> bool;

    /// Returns a copy of `temporal` with `amount` of this unit added.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedUnit` if the unit is not supported,
    /// or an overflow/range error from the underlying arithmetic.
    fn add_to(&self, temporal: YearMonth, amount: i64) -> Result<YearMonth, DateTimeError>;

    /// Amount of this unit between `start` (inclusive) and `end` (exclusive),
    /// truncated towards zero.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedUnit` if the unit is not supported.
    fn between(&self, start: YearMonth, end: YearMonth) -> Result<i64, DateTimeError>;
}

impl<U: TemporalUnit + ?Sized> TemporalUnit for &U {
    fn is_supported_by(&self, temporal: &YearMonth) -> bool {
        (**self).is_supported_by(temporal)
    }

    fn add_to(&self, temporal: YearMonth, amount: i64) -> Result<YearMonth, DateTimeError> {
        (**self).add_to(temporal, amount)
    }

    fn between(&self, start: YearMonth, end: YearMonth) -> Result<i64, DateTimeError> {
        (**self).between(start, end)
    }
}

/// An amount of time that knows how to apply itself to a [`YearMonth`].
pub trait TemporalAmount {
    /// Adds this amount to the given value.
    ///
    /// # Errors
    /// Propagates overflow and range errors from the underlying arithmetic.
    fn add_to(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError>;

    /// Subtracts this amount from the given value.
    ///
    /// # Errors
    /// Propagates overflow and range errors from the underlying arithmetic.
    fn subtract_from(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError>;
}

/// A strategy producing an adjusted copy of a [`YearMonth`].
///
/// Implemented by [`MonthOfYear`], by [`YearMonth`] itself, and by any
/// `Fn(YearMonth) -> Result<YearMonth, DateTimeError>` closure.
pub trait TemporalAdjuster {
    /// Applies this adjuster to the given value.
    ///
    /// # Errors
    /// Propagates errors from the underlying adjustment.
    fn adjust_into(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError>;
}

impl<F> TemporalAdjuster for F
where
    F: Fn(YearMonth) -> Result<YearMonth, DateTimeError>,
{
    fn adjust_into(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError> {
        self(temporal)
    }
}

impl TemporalAdjuster for MonthOfYear {
    fn adjust_into(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError> {
        temporal.with_field(DateField::MonthOfYear, i64::from(self.value()))
    }
}

impl TemporalAdjuster for YearMonth {
    fn adjust_into(&self, temporal: YearMonth) -> Result<YearMonth, DateTimeError> {
        temporal.with_field(DateField::ProlepticMonth, self.proleptic_month())
    }
}

/// A read-only temporal object the fields of a [`YearMonth`] can be
/// extracted from.
pub trait TemporalAccessor: fmt::Debug {
    /// Whether the given field can be read from this object.
    fn is_field_supported(&self, field: DateField) -> bool;

    /// Reads the given field from this object.
    ///
    /// # Errors
    /// Returns `DateTimeError::UnsupportedField` if the field cannot be read.
    fn get_field(&self, field: DateField) -> Result<i64, DateTimeError>;
}

impl TemporalField for DateField {
    fn range(&self) -> ValueRange {
        match self {
            Self::DayOfWeek => ValueRange::of(1, 7),
            Self::DayOfMonth => ValueRange::of(1, 31),
            Self::DayOfYear => ValueRange::of(1, 366),
            Self::MonthOfYear => ValueRange::of(i64::from(MIN_MONTH), i64::from(MAX_MONTH)),
            Self::ProlepticMonth => ValueRange::of(
                i64::from(MIN_YEAR) * MONTHS_PER_YEAR,
                i64::from(MAX_YEAR) * MONTHS_PER_YEAR + (MONTHS_PER_YEAR - 1),
            ),
            Self::YearOfEra => ValueRange::of(1, i64::from(MAX_YEAR) + 1),
            Self::Year => ValueRange::of(i64::from(MIN_YEAR), i64::from(MAX_YEAR)),
            Self::Era => ValueRange::of(ERA_BCE, ERA_CE),
        }
    }

    fn is_supported_by(&self, temporal: &YearMonth) -> bool {
        temporal.supports_field(*self)
    }

    fn range_refined_by(&self, temporal: &YearMonth) -> Result<ValueRange, DateTimeError> {
        temporal.known_field_range(*self)
    }

    fn get_from(&self, temporal: &YearMonth) -> Result<i64, DateTimeError> {
        temporal.known_field_value(*self)
    }

    fn adjust_into(&self, temporal: YearMonth, value: i64) -> Result<YearMonth, DateTimeError> {
        temporal.known_field_adjust(*self, value)
    }
}

impl TemporalUnit for DateUnit {
    fn is_supported_by(&self, temporal: &YearMonth) -> bool {
        temporal.supports_unit(*self)
    }

    fn add_to(&self, temporal: YearMonth, amount: i64) -> Result<YearMonth, DateTimeError> {
        temporal.known_unit_add(*self, amount)
    }

    fn between(&self, start: YearMonth, end: YearMonth) -> Result<i64, DateTimeError> {
        start.known_unit_between(end, *self)
    }
}
