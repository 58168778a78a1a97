/// Maximum valid year (inclusive); four digits is all the input mask can carry
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Months in a year, for month-index arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // unused
    31, // January
    28, // February (non-leap)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between day, month and year in the canonical text form
pub const FIELD_SEPARATOR: char = '/';
/// Alternate separator accepted by the parser and normalized to [`FIELD_SEPARATOR`]
pub const ALT_SEPARATOR: char = '-';

/// Digits kept by the input mask (`DDMMYYYY`)
pub const MASK_MAX_DIGITS: usize = 8;
/// Length of a complete masked value (`DD/MM/YYYY`)
pub const MASKED_LEN: usize = 10;
/// Digits before the first separator
pub const DAY_DIGITS: usize = 2;
/// Digits between the two separators
pub const MONTH_DIGITS: usize = 2;

/// Columns in the month grid
pub const DAYS_PER_WEEK: u8 = 7;

/// Days between 0000-03-01 and 1970-01-01 in the proleptic Gregorian calendar
pub(crate) const UNIX_EPOCH_DAY_OFFSET: i64 = 719_468;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
