//! Headless core of a date range picker.
//!
//! A range can be picked by clicking days on a month grid or by typing masked
//! `DD/MM/YYYY` text into a start and an end field. [`RangePicker`] keeps the
//! committed range, the displayed month and both raw field texts consistent;
//! the rendering layer feeds it [`Event`]s and re-renders from its accessors.

mod consts;
mod cursor;
mod date;
mod mask;
mod picker;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use cursor::{Cursor, Direction};
pub use date::{CalendarDate, format, parse, parse_masked};
pub use mask::{is_complete, mask};
pub use picker::{DayCell, Event, Field, RangePicker};
pub use range::{DateRange, RangeError, SelectionPhase};
pub use types::{Day, Month, Year, days_in_month, first_weekday_of_month, is_leap_year};

/// Why a piece of text (or a numeric triple) is not a committed date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,

    /// Masked text shorter than `DD/MM/YYYY`; the field is still being typed.
    #[error("Incomplete date: {len} of {max} characters", max = MASKED_LEN)]
    Incomplete { len: usize },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid year: {0} (must be 1-{max})", max = MAX_YEAR)]
    InvalidYear(i64),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { day: u8, month: u8, year: u16 },

    /// The triple does not name a real calendar date, e.g. 31/02/2024.
    #[error("Not a calendar date: {day:02}/{month:02}/{year:04}")]
    InvalidDate { day: i64, month: i64, year: i64 },
}
