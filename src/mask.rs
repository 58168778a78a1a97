//! Live `DD/MM/YYYY` input mask.
//!
//! The mask only groups digits; it never looks at whether they form a date.

use crate::{DAY_DIGITS, FIELD_SEPARATOR, MASK_MAX_DIGITS, MASKED_LEN, MONTH_DIGITS};

/// Masks raw field text.
///
/// Keeps the first eight ASCII digits and drops everything else, then puts a
/// `/` after the day digits and another after the month digits once digits
/// exist past them. Only the digits of `raw` matter, so `mask` is idempotent.
pub fn mask(raw: &str) -> String {
    let mut masked = String::with_capacity(MASKED_LEN);
    for (idx, digit) in raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MASK_MAX_DIGITS)
        .enumerate()
    {
        if idx == DAY_DIGITS || idx == DAY_DIGITS + MONTH_DIGITS {
            masked.push(FIELD_SEPARATOR);
        }
        masked.push(digit);
    }
    tracing::trace!(raw, masked = %masked, "masked field input");
    masked
}

/// A masked value is a candidate date only at full `DD/MM/YYYY` length.
pub fn is_complete(masked: &str) -> bool {
    masked.len() == MASKED_LEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mask_cases() {
        struct TestCase {
            raw:      &'static str,
            expected: &'static str,
        }

        let cases = [
            TestCase { raw: "", expected: "" },
            TestCase { raw: "1", expected: "1" },
            TestCase { raw: "12", expected: "12" },
            TestCase { raw: "120", expected: "12/0" },
            TestCase { raw: "1206", expected: "12/06" },
            TestCase { raw: "12062", expected: "12/06/2" },
            TestCase { raw: "12062023", expected: "12/06/2023" },
            TestCase { raw: "1206202399", expected: "12/06/2023" },
            TestCase { raw: "12/06/2023", expected: "12/06/2023" },
            TestCase { raw: "12-06-2023", expected: "12/06/2023" },
            TestCase { raw: "ab1c2 0/6", expected: "12/06" },
            TestCase { raw: "//", expected: "" },
            TestCase { raw: "1/2/3", expected: "12/3" },
        ];

        for case in &cases {
            assert_eq!(mask(case.raw), case.expected, "raw input {:?}", case.raw);
        }
    }

    #[test]
    fn test_mask_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not part of the mask alphabet
        assert_eq!(mask("١٢3"), "3");
    }

    #[test]
    fn test_is_complete() {
        assert!(is_complete("31/02/2024"));
        assert!(!is_complete("31/02/202"));
        assert!(!is_complete(""));
    }

    #[test]
    fn test_typed_invalid_date_still_masks() {
        assert_eq!(mask("31022024"), "31/02/2024");
    }

    proptest! {
        #[test]
        fn mask_is_idempotent(raw in "\\PC{0,24}") {
            let once = mask(&raw);
            prop_assert_eq!(mask(&once), once);
        }

        #[test]
        fn mask_length_tracks_digit_count(digits in "[0-9]{0,12}") {
            let masked = mask(&digits);
            let kept = digits.len().min(MASK_MAX_DIGITS);
            let separators = usize::from(kept > DAY_DIGITS) + usize::from(kept > DAY_DIGITS + MONTH_DIGITS);
            prop_assert_eq!(masked.len(), kept + separators);
            prop_assert!(masked.len() <= MASKED_LEN);
            prop_assert_eq!(is_complete(&masked), kept == MASK_MAX_DIGITS);
        }
    }
}
