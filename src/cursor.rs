use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, MAX_MONTH, ParseError,
    prelude::*,
    types::{Month, Year, days_in_month, first_weekday_of_month},
};

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    #[display(fmt = "prev")]
    Prev,
    #[display(fmt = "next")]
    Next,
}

/// The month the grid displays. Independent of the selected range.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{month}/{year}")]
pub struct Cursor {
    year:  Year,
    month: Month,
}

impl Cursor {
    pub const fn new(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub const fn containing(date: CalendarDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The current month in UTC.
    pub fn current() -> Self {
        Self::containing(CalendarDate::today())
    }

    #[inline]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Moves one month back or forward, rolling the year over at
    /// January/December. The cursor stays put rather than leave years
    /// `1..=9999`.
    #[must_use]
    pub fn navigate(self, direction: Direction) -> Self {
        match self.shifted(direction) {
            Some(next) => next,
            None => {
                tracing::debug!(cursor = %self, %direction, "navigation stopped at calendar bound");
                self
            }
        }
    }

    fn shifted(self, direction: Direction) -> Option<Self> {
        let month = self.month.get();
        match direction {
            Direction::Prev if self.month == Month::JANUARY => {
                Some(Self::new(self.year.pred()?, Month::new(MAX_MONTH).ok()?))
            }
            Direction::Next if month == MAX_MONTH => Some(Self::new(self.year.succ()?, Month::JANUARY)),
            Direction::Prev => Some(Self::new(self.year, Month::new(month - 1).ok()?)),
            Direction::Next => Some(Self::new(self.year, Month::new(month + 1).ok()?)),
        }
    }

    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Blank cells before day 1 in a Sunday-first week.
    pub fn first_weekday_offset(&self) -> u8 {
        first_weekday_of_month(self.year, self.month)
    }

    /// The date of `day` in this month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month has no such day.
    pub fn date(&self, day: u8) -> Result<CalendarDate, ParseError> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// True when `date` falls in this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.is_in_month(self.year, self.month)
    }
}
