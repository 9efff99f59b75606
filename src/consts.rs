/// Smallest supported year (inclusive)
pub const MIN_YEAR: i32 = -999_999_999;

/// Largest supported year (inclusive)
pub const MAX_YEAR: i32 = 999_999_999;

/// Largest year rendered and parsed without an explicit sign
pub const UNSIGNED_YEAR_MAX: i32 = 9_999;

/// Minimum valid month (January)
pub const MIN_MONTH: u8 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Months in a calendar year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Years in a decade
pub const YEARS_PER_DECADE: i64 = 10;

/// Years in a century
pub const YEARS_PER_CENTURY: i64 = 100;

/// Years in a millennium
pub const YEARS_PER_MILLENNIUM: i64 = 1_000;

/// Era of all years before year 1
pub const ERA_BCE: i64 = 0;

/// Era of year 1 and onwards
pub const ERA_CE: i64 = 1;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Unsigned years are zero-padded to this many digits
pub(crate) const YEAR_PAD_DIGITS: usize = 4;
/// Largest number of year digits accepted by the parser
pub(crate) const MAX_YEAR_DIGITS: usize = 10;
/// The month field is always two digits
pub(crate) const MONTH_DIGITS: usize = 2;
