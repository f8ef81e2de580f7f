use once_cell::sync::Lazy;
use regex::Regex;

/// A leading 1-3 digit group with any number of optional `,ddd` groups.
/// An ungrouped run longer than three digits only contributes its first
/// three digits.
static STIPEND_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{1,3}(?:,\d{3})*|\d+").expect("valid stipend pattern"));

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));

/// Extract the stipend amount from free-form text
///
/// Takes the leftmost number, honouring thousands separators, so
/// `"₹25,000/month"` yields `25000` while `"₹10000/month"` yields `100`.
/// Absent text or text without digits yields `0`.
pub fn extract_stipend(text: Option<&str>) -> u64 {
    text.and_then(|t| STIPEND_RE.find(t))
        .and_then(|m| m.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

/// Extract a duration in months from free-form text
///
/// Only the first digit run counts: `"3-6 months"` yields `3`.
pub fn extract_duration_months(text: Option<&str>) -> u32 {
    text.and_then(|t| DIGITS_RE.find(t))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stipend_with_currency_and_separator() {
        assert_eq!(extract_stipend(Some("₹25,000/month")), 25000);
        assert_eq!(extract_stipend(Some("₹ 1,20,000 lump sum")), 1);
        assert_eq!(extract_stipend(Some("$1,250,000")), 1_250_000);
    }

    #[test]
    fn test_stipend_plain_numbers() {
        assert_eq!(extract_stipend(Some("12")), 12);
        assert_eq!(extract_stipend(Some("999")), 999);
        // Only the leading 1-3 digit group of an ungrouped run is read
        assert_eq!(extract_stipend(Some("10000 per month")), 100);
        assert_eq!(extract_stipend(Some("₹10000/month")), 100);
    }

    #[test]
    fn test_stipend_first_match_wins() {
        assert_eq!(extract_stipend(Some("₹15,000 - ₹20,000 /month")), 15000);
        assert_eq!(extract_stipend(Some("Performance based: 5000-8000")), 500);
    }

    #[test]
    fn test_stipend_without_digits() {
        assert_eq!(extract_stipend(Some("Unpaid")), 0);
        assert_eq!(extract_stipend(Some("")), 0);
        assert_eq!(extract_stipend(None), 0);
    }

    #[test]
    fn test_stipend_overflow_is_zero() {
        assert_eq!(extract_stipend(Some("999,999,999,999,999,999,999")), 0);
    }

    #[test]
    fn test_duration() {
        assert_eq!(extract_duration_months(Some("3-6 months")), 3);
        assert_eq!(extract_duration_months(Some("6 Months")), 6);
        assert_eq!(extract_duration_months(Some("12")), 12);
        assert_eq!(extract_duration_months(Some("Flexible")), 0);
        assert_eq!(extract_duration_months(None), 0);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        for text in ["₹25,000/month", "Unpaid", "3-6 months", "Not specified"] {
            assert_eq!(extract_stipend(Some(text)), extract_stipend(Some(text)));
            assert_eq!(
                extract_duration_months(Some(text)),
                extract_duration_months(Some(text))
            );
        }
    }
}
