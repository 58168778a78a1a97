use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::{
    ALT_SEPARATOR, FIELD_SEPARATOR, MONTHS_PER_YEAR, ParseError, is_complete,
    prelude::*,
    types::{Day, Month, Year, civil_from_days, days_from_civil},
};

const SECONDS_PER_DAY: u64 = 86_400;

/// A validated calendar date.
///
/// Field order makes the derived ordering chronological (year, then month,
/// then day). Values are only built from a successful [`parse`] or from a day
/// inside a displayed month, and are replaced wholesale rather than mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{day}/{month}/{year}")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl CalendarDate {
    /// Creates a date from an already validated year and month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` is not in that month.
    pub fn new(year: Year, month: Month, day: u8) -> Result<Self, ParseError> {
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw components (January is month 1).
    ///
    /// # Errors
    /// Returns the first component that fails validation.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Self::new(Year::new(year)?, Month::new(month)?, day)
    }

    /// Today's date in UTC.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        let days = i64::try_from(secs / SECONDS_PER_DAY).unwrap_or_default();
        let (year, month, day) = civil_from_days(days);
        Self::from_civil(year, month, day).unwrap_or(Self {
            year:  Year::MIN,
            month: Month::JANUARY,
            day:   Day::FIRST,
        })
    }

    /// Round-trip validation: lays the triple onto the calendar, letting month
    /// and day overflow roll over, and accepts it only if reading the date back
    /// gives the identical triple.
    pub(crate) fn from_civil(year: i64, month: i64, day: i64) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDate { day, month, year };

        let total_months = year * MONTHS_PER_YEAR + (month - 1);
        let normalized_year = total_months.div_euclid(MONTHS_PER_YEAR);
        let normalized_month = total_months.rem_euclid(MONTHS_PER_YEAR) + 1;
        let days = days_from_civil(normalized_year, normalized_month, day);
        if civil_from_days(days) != (year, month, day) {
            return Err(invalid());
        }

        let year = u16::try_from(year)
            .map_err(|_| ParseError::InvalidYear(year))
            .and_then(Year::new)?;
        let month = u8::try_from(month).map_err(|_| invalid()).and_then(Month::new)?;
        let day = u8::try_from(day).map_err(|_| invalid())?;
        Self::new(year, month, day)
    }

    #[inline]
    pub const fn year(&self) -> Year {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> Day {
        self.day
    }

    /// True when the date falls in the given month of the given year.
    pub fn is_in_month(&self, year: Year, month: Month) -> bool {
        self.year == year && self.month == month
    }
}

/// Canonical `DD/MM/YYYY` text of a date; always ten characters.
pub fn format(date: CalendarDate) -> String {
    date.to_string()
}

/// Parses `DD/MM/YYYY` (or `DD-MM-YYYY`) text into a calendar date.
///
/// Surrounding whitespace is ignored and every `-` is read as `/`. The text
/// must hold exactly three integer parts, and the triple must survive
/// round-trip validation, so `31/02/2024` fails even though every part is in
/// range on its own.
///
/// # Errors
/// `EmptyInput` for blank text, `InvalidFormat` for a wrong part count or a
/// non-numeric part, `InvalidDate` when the triple is not a real date, and
/// `InvalidYear` for year 0.
pub fn parse(s: &str) -> Result<CalendarDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| if c == ALT_SEPARATOR { FIELD_SEPARATOR } else { c })
        .collect();
    let parts: Vec<&str> = normalized.split(FIELD_SEPARATOR).collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "expected 3 '{FIELD_SEPARATOR}'-separated parts, found {}: {s}",
            parts.len()
        )));
    };

    let day = parse_part(day)?;
    let month = parse_part(month)?;
    let year = parse_part(year)?;
    CalendarDate::from_civil(i64::from(year), i64::from(month), i64::from(day))
}

/// Parses the masked content of an input field.
///
/// # Errors
/// `Incomplete` while the mask is shorter than `DD/MM/YYYY`, otherwise
/// whatever [`parse`] reports.
pub fn parse_masked(masked: &str) -> Result<CalendarDate, ParseError> {
    if !is_complete(masked) {
        return Err(ParseError::Incomplete { len: masked.len() });
    }
    parse(masked)
}

fn parse_part(part: &str) -> Result<i32, ParseError> {
    let part = part.trim();
    part.parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat(part.to_owned()))
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask;
    use crate::test_utils::{date, month, year};
    use proptest::prelude::*;

    #[test]
    fn test_format_zero_pads_every_component() {
        assert_eq!(format(date(2024, 3, 5)), "05/03/2024");
        assert_eq!(format(date(987, 12, 31)), "31/12/0987");
        assert_eq!(format(date(1, 1, 1)), "01/01/0001");
    }

    #[test]
    fn test_parse_valid() {
        let parsed = parse("15/06/2023").expect("valid date should parse");
        assert_eq!(parsed, date(2023, 6, 15));
        assert_eq!(parsed.year(), year(2023));
        assert_eq!(parsed.month(), month(6));
        assert_eq!(parsed.day().get(), 15);
    }

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    Option<(u16, u8, u8)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "  01/02/2024 ",
                expected:    Some((2024, 2, 1)),
                description: "surrounding whitespace",
            },
            TestCase {
                input:       "01-02-2024",
                expected:    Some((2024, 2, 1)),
                description: "hyphen separators",
            },
            TestCase {
                input:       "01-02/2024",
                expected:    Some((2024, 2, 1)),
                description: "mixed separators normalize",
            },
            TestCase {
                input:       "1/2/2024",
                expected:    Some((2024, 2, 1)),
                description: "unpadded parts",
            },
            TestCase {
                input:       "29/02/2024",
                expected:    Some((2024, 2, 29)),
                description: "leap day",
            },
            TestCase {
                input:       "29/02/2023",
                expected:    None,
                description: "leap day in common year",
            },
            TestCase {
                input:       "31/04/2024",
                expected:    None,
                description: "day 31 of a 30-day month",
            },
            TestCase {
                input:       "00/01/2024",
                expected:    None,
                description: "day zero",
            },
            TestCase {
                input:       "10/13/2024",
                expected:    None,
                description: "month thirteen",
            },
            TestCase {
                input:       "10/00/2024",
                expected:    None,
                description: "month zero",
            },
            TestCase {
                input:       "01/01/0000",
                expected:    None,
                description: "year zero",
            },
            TestCase {
                input:       "01/2024",
                expected:    None,
                description: "two parts",
            },
            TestCase {
                input:       "01/01/20/24",
                expected:    None,
                description: "four parts",
            },
            TestCase {
                input:       "aa/01/2024",
                expected:    None,
                description: "non-numeric part",
            },
            TestCase {
                input:       "01//2024",
                expected:    None,
                description: "empty part",
            },
        ];

        for case in &cases {
            let result = parse(case.input);
            match case.expected {
                Some((y, m, d)) => assert_eq!(result, Ok(date(y, m, d)), "{}", case.description),
                None => assert!(result.is_err(), "expected failure for: {}", case.description),
            }
        }
    }

    #[test]
    fn test_parse_error_kinds() {
        assert_eq!(parse("   "), Err(ParseError::EmptyInput));
        assert_eq!(
            parse("31/02/2024"),
            Err(ParseError::InvalidDate {
                day:   31,
                month: 2,
                year:  2024,
            })
        );
        assert_eq!(parse("01/01/0000"), Err(ParseError::InvalidYear(0)));
        assert!(matches!(parse("12/0"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(parse("xx/01/2024"), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_rejects_years_past_four_digits() {
        assert_eq!(parse("01/01/10000"), Err(ParseError::InvalidYear(10000)));
        assert_eq!(parse("31/12/9999"), Ok(date(9999, 12, 31)));
    }

    #[test]
    fn test_parse_masked() {
        assert_eq!(parse_masked(&mask("1206")), Err(ParseError::Incomplete { len: 5 }));
        assert_eq!(parse_masked(""), Err(ParseError::Incomplete { len: 0 }));
        assert_eq!(parse_masked(&mask("12062024")), Ok(date(2024, 6, 12)));
        assert!(matches!(
            parse_masked(&mask("31022024")),
            Err(ParseError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2024, 2, 1) < date(2024, 2, 2));
        assert_eq!(date(2024, 2, 2), date(2024, 2, 2));
    }

    #[test]
    fn test_is_in_month() {
        let d = date(2024, 6, 15);
        assert!(d.is_in_month(year(2024), month(6)));
        assert!(!d.is_in_month(year(2024), month(7)));
        assert!(!d.is_in_month(year(2023), month(6)));
    }

    #[test]
    fn test_today_is_a_real_date() {
        let today = CalendarDate::today();
        assert_eq!(parse(&format(today)), Ok(today));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2023, 6, 15);
        let json = serde_json::to_string(&d).expect("serialize date");
        assert_eq!(json, r#""15/06/2023""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("deserialize date");
        assert_eq!(parsed, d);

        assert!(serde_json::from_str::<CalendarDate>(r#""31/02/2024""#).is_err());
    }

    fn any_date() -> impl Strategy<Value = CalendarDate> {
        (1u16..=9999, 1u8..=12, 1u8..=31).prop_filter_map("day past end of month", |(y, m, d)| {
            CalendarDate::from_ymd(y, m, d).ok()
        })
    }

    proptest! {
        #[test]
        fn parse_inverts_format(d in any_date()) {
            prop_assert_eq!(parse(&format(d)), Ok(d));
        }

        #[test]
        fn complete_mask_parses_to_itself_or_fails(digits in "[0-9]{8}") {
            let masked = mask(&digits);
            prop_assert_eq!(masked.len(), crate::MASKED_LEN);
            if let Ok(d) = parse(&masked) {
                prop_assert_eq!(format(d), masked);
            }
        }
    }
}
