//! The picker state object and its event transitions.
//!
//! [`RangePicker`] bundles the committed [`DateRange`], the displayed
//! [`Cursor`] and the raw text of both input fields. Each external event maps
//! to one transition that returns the next full state, so the rendering layer
//! only ever sees states where all four cells agree.

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, Cursor, DateRange, Direction, MIN_DAY, Month, ParseError, Year, format, mask,
    parse_masked, prelude::*,
};

/// One of the two text inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "end")]
    End,
}

/// Input arriving from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A day of the displayed month was clicked.
    DayClick(u8),
    /// The raw content of a field changed.
    FieldInput { field: Field, text: String },
    Navigate(Direction),
}

/// Render data for one day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayCell {
    pub day:      u8,
    /// The day is the range start or end.
    pub selected: bool,
    /// The day lies strictly between start and end.
    pub in_range: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangePicker {
    range:      DateRange,
    cursor:     Cursor,
    start_text: String,
    end_text:   String,
}

impl Default for RangePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RangePicker {
    /// An empty picker showing the current month.
    pub fn new() -> Self {
        Self::with_cursor(Cursor::current())
    }

    /// An empty picker showing the given month.
    pub const fn with_cursor(cursor: Cursor) -> Self {
        Self {
            range: DateRange::new(),
            cursor,
            start_text: String::new(),
            end_text: String::new(),
        }
    }

    /// Returns the state that follows `event`.
    #[must_use]
    pub fn transition(&self, event: &Event) -> Self {
        match event {
            Event::DayClick(day) => self.on_day_click(*day),
            Event::FieldInput { field, text } => self.on_field_input(*field, text),
            Event::Navigate(direction) => self.on_navigate(*direction),
        }
    }

    /// Replaces `self` with the state that follows `event`.
    pub fn apply(&mut self, event: &Event) {
        *self = self.transition(event);
    }

    /// Feeds a clicked day of the displayed month to the selection gesture,
    /// then rewrites both fields from the committed range.
    ///
    /// A day outside the displayed month is ignored.
    #[must_use]
    pub fn on_day_click(&self, day: u8) -> Self {
        let clicked = match self.cursor.date(day) {
            Ok(clicked) => clicked,
            Err(err) => {
                tracing::debug!(day, cursor = %self.cursor, %err, "ignoring click outside displayed month");
                return self.clone();
            }
        };

        let range = self.range.click(clicked);
        tracing::debug!(date = %clicked, phase = %range.phase(), "day clicked");
        Self {
            range,
            cursor: self.cursor,
            start_text: endpoint_text(range.start()),
            end_text: endpoint_text(range.end()),
        }
    }

    /// Applies a keystroke in `field`.
    ///
    /// The field always echoes the mask of `raw`. Until the mask is complete
    /// the field's endpoint is cleared. A complete mask that is not a real
    /// date commits nothing and leaves the previous endpoint in place, so the
    /// field text and the committed value can disagree until the user edits
    /// again. A valid date is committed to the field's endpoint; if it would
    /// cross the other endpoint, that endpoint and its text are overwritten
    /// with the same date. The cursor then moves to the date's month.
    #[must_use]
    pub fn on_field_input(&self, field: Field, raw: &str) -> Self {
        let masked = mask(raw);
        let mut next = self.clone();
        next.set_text(field, masked.clone());

        let date = match parse_masked(&masked) {
            Ok(date) => date,
            Err(ParseError::Incomplete { len }) => {
                tracing::debug!(%field, len, "input incomplete; clearing endpoint");
                next.range = with_endpoint(next.range, field, None);
                return next;
            }
            Err(err) => {
                tracing::debug!(%field, masked = %masked, %err, "complete input is not a calendar date");
                return next;
            }
        };

        let (other, crosses) = match field {
            Field::Start => (Field::End, next.range.end().is_some_and(|end| date > end)),
            Field::End => (Field::Start, next.range.start().is_some_and(|start| date < start)),
        };
        if crosses {
            tracing::debug!(%field, %other, %date, "typed date crosses the other endpoint; converging");
            next.range = with_endpoint(next.range, other, Some(date));
            next.set_text(other, masked);
        }

        next.range = with_endpoint(next.range, field, Some(date));
        if !next.cursor.contains(date) {
            next.cursor = Cursor::containing(date);
            tracing::debug!(cursor = %next.cursor, "paged to typed date");
        }
        tracing::debug!(%field, %date, "typed date committed");
        next
    }

    /// Pages the grid one month back or forward. The range and field texts
    /// are untouched.
    #[must_use]
    pub fn on_navigate(&self, direction: Direction) -> Self {
        let cursor = self.cursor.navigate(direction);
        tracing::debug!(%direction, %cursor, "navigated");
        Self {
            cursor,
            ..self.clone()
        }
    }

    fn set_text(&mut self, field: Field, text: String) {
        match field {
            Field::Start => self.start_text = text,
            Field::End => self.end_text = text,
        }
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn displayed_month(&self) -> Month {
        self.cursor.month()
    }

    pub const fn displayed_year(&self) -> Year {
        self.cursor.year()
    }

    pub const fn days_in_displayed_month(&self) -> u8 {
        self.cursor.days_in_month()
    }

    /// Leading blank cells of a Sunday-first grid.
    pub fn first_weekday_offset(&self) -> u8 {
        self.cursor.first_weekday_offset()
    }

    /// Raw content of the start field: masked, possibly partial or invalid.
    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    /// Raw content of the end field: masked, possibly partial or invalid.
    pub fn end_text(&self) -> &str {
        &self.end_text
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Start => self.start_text(),
            Field::End => self.end_text(),
        }
    }

    /// Canonical text of the committed start date.
    pub fn formatted_start(&self) -> Option<String> {
        self.range.start().map(format)
    }

    /// Canonical text of the committed end date.
    pub fn formatted_end(&self) -> Option<String> {
        self.range.end().map(format)
    }

    /// True when `day` of the displayed month is the start or the end.
    pub fn is_selected(&self, day: u8) -> bool {
        self.displayed_date(day)
            .is_some_and(|date| self.range.is_endpoint(date))
    }

    /// True when `day` of the displayed month lies strictly inside a
    /// complete range.
    pub fn is_in_range(&self, day: u8) -> bool {
        self.displayed_date(day)
            .is_some_and(|date| self.range.is_strictly_inside(date))
    }

    /// Every day of the displayed month, in order, with its highlight flags.
    pub fn day_cells(&self) -> Vec<DayCell> {
        (MIN_DAY..=self.days_in_displayed_month())
            .map(|day| DayCell {
                day,
                selected: self.is_selected(day),
                in_range: self.is_in_range(day),
            })
            .collect()
    }

    fn displayed_date(&self, day: u8) -> Option<CalendarDate> {
        self.cursor.date(day).ok()
    }
}

fn endpoint_text(date: Option<CalendarDate>) -> String {
    date.map(format).unwrap_or_default()
}

const fn with_endpoint(range: DateRange, field: Field, date: Option<CalendarDate>) -> DateRange {
    match field {
        Field::Start => range.with_start(date),
        Field::End => range.with_end(date),
    }
}
