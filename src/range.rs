use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, prelude::*};

/// Shown in place of an endpoint that has not been committed.
const EMPTY_ENDPOINT: &str = "--";

/// Where a two-click selection gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SelectionPhase {
    /// No start date.
    Empty,
    /// Start chosen, waiting for the end.
    Pending,
    /// Both endpoints chosen.
    Complete,
}

/// The selected `(start, end)` pair.
///
/// When both endpoints are set, `start <= end`. Clicks never leave an end
/// without a start, but clearing the start field while typing can; such a
/// range reports [`SelectionPhase::Empty`] and the next click discards the
/// dangling end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Endpoints")]
pub struct DateRange {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

/// Error type for building a range from explicit endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },
}

#[derive(Deserialize)]
struct Endpoints {
    start: Option<CalendarDate>,
    end:   Option<CalendarDate>,
}

impl TryFrom<Endpoints> for DateRange {
    type Error = RangeError;

    fn try_from(value: Endpoints) -> Result<Self, Self::Error> {
        Self::from_endpoints(value.start, value.end)
    }
}

impl DateRange {
    /// An empty selection.
    pub const fn new() -> Self {
        Self {
            start: None,
            end:   None,
        }
    }

    /// Builds a range from explicit endpoints, e.g. to seed a picker.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if both are set and start > end.
    pub fn from_endpoints(
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    ) -> Result<Self, RangeError> {
        match (start, end) {
            (Some(start), Some(end)) if start > end => Err(RangeError::InvalidRange { start, end }),
            _ => Ok(Self { start, end }),
        }
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    pub const fn phase(&self) -> SelectionPhase {
        match (self.start, self.end) {
            (None, _) => SelectionPhase::Empty,
            (Some(_), None) => SelectionPhase::Pending,
            (Some(_), Some(_)) => SelectionPhase::Complete,
        }
    }

    /// Advances the two-click gesture with a clicked day.
    ///
    /// An empty or complete selection restarts at `clicked`. A pending one
    /// completes when `clicked` is on or after the start; an earlier click
    /// replaces the start instead of inverting the range.
    #[must_use]
    pub fn click(self, clicked: CalendarDate) -> Self {
        match (self.start, self.end) {
            (Some(start), None) if clicked >= start => Self {
                start: Some(start),
                end:   Some(clicked),
            },
            _ => Self {
                start: Some(clicked),
                end:   None,
            },
        }
    }

    /// Replaces the start endpoint as-is; the caller keeps `start <= end`.
    #[must_use]
    pub(crate) const fn with_start(self, start: Option<CalendarDate>) -> Self {
        Self { start, ..self }
    }

    /// Replaces the end endpoint as-is; the caller keeps `start <= end`.
    #[must_use]
    pub(crate) const fn with_end(self, end: Option<CalendarDate>) -> Self {
        Self { end, ..self }
    }

    /// True when `date` is one of the endpoints.
    pub fn is_endpoint(&self, date: CalendarDate) -> bool {
        self.start == Some(date) || self.end == Some(date)
    }

    /// True when both endpoints are set and `date` lies strictly between them.
    pub fn is_strictly_inside(&self, date: CalendarDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start < date && date < end,
            _ => false,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let endpoint = |date: Option<CalendarDate>| {
            date.map_or_else(|| EMPTY_ENDPOINT.to_owned(), |d| d.to_string())
        };
        write!(f, "{} - {}", endpoint(self.start), endpoint(self.end))
    }
}
