//! Map numeral text to exact values.

use num_rational::Rational64;
use once_cell::sync::Lazy;
use regex::Regex;

use super::values::{CONNECTOR, TENS_FROM_THIRTY, TWENTY, number_table};
use crate::constants::{ARABIC_DECIMAL_SEPARATOR, digit_value};
use crate::engine::compile;

static NUMBER_TABLE: Lazy<Vec<(Regex, Rational64)>> = Lazy::new(|| {
    number_table()
        .into_iter()
        .map(|(pattern, numer, denom)| {
            let re = crate::built!(compile("numeral table", &format!("^{}", pattern)));
            (re, Rational64::new(numer, denom))
        })
        .collect()
});

static CONNECTOR_RE: Lazy<Regex> = Lazy::new(|| crate::built!(compile("numeral connector", CONNECTOR)));
static TWENTY_RE: Lazy<Regex> = Lazy::new(|| crate::built!(compile("twenty", &format!("^{}$", TWENTY))));
static PERFECT_TENS_RE: Lazy<Regex> =
    Lazy::new(|| crate::built!(compile("perfect tens", &format!("^(?:{}|{})$", TWENTY, TENS_FROM_THIRTY))));

/// Value of a spelled-out numeral.
///
/// `"ثلاثة وعشرين"` splits on the connector into ones and tens (23);
/// `"تسعين"` is a perfect tens word (90); anything else goes through the
/// ordered name table, so `"ثلاث"` is 3 and `"ربع"` is 1/4.
pub fn get_value(text: &str) -> Option<Rational64> {
    let text = text.trim();
    if let Some(m) = CONNECTOR_RE.find(text) {
        let ones = lookup(&text[..m.start()])?;
        let tens = tens_multiplier(&text[m.end()..])?;
        return Some(ones + tens * 10);
    }
    if PERFECT_TENS_RE.is_match(text) {
        return Some(tens_multiplier(text)? * 10);
    }
    lookup(text)
}

/// First table entry matching at the start of `text`.
pub fn lookup(text: &str) -> Option<Rational64> {
    let text = text.trim();
    NUMBER_TABLE.iter().find(|(re, _)| re.is_match(text)).map(|(_, value)| *value)
}

/// The ones digit a tens word is built on: `عشرين` is 2, `خمسين` is 5.
pub fn tens_multiplier(text: &str) -> Option<Rational64> {
    let text = text.trim();
    if TWENTY_RE.is_match(text) {
        return Some(Rational64::from_integer(2));
    }
    if !PERFECT_TENS_RE.is_match(text) {
        return None;
    }
    lookup(text).filter(|m| m.is_integer() && (3..=9).contains(&m.to_integer()))
}

/// Parse digits in any supported script, with an optional `.` or `٫`
/// decimal part. Returns `None` on overflow or stray characters.
pub fn parse_digits(text: &str) -> Option<Rational64> {
    let mut integer: i64 = 0;
    let mut fraction: i64 = 0;
    let mut scale: i64 = 1;
    let mut in_fraction = false;
    let mut seen = false;

    for c in text.trim().chars() {
        if c == '.' || c == ARABIC_DECIMAL_SEPARATOR {
            if in_fraction {
                return None;
            }
            in_fraction = true;
            continue;
        }
        let d = i64::from(digit_value(c)?);
        seen = true;
        if in_fraction {
            fraction = fraction.checked_mul(10)?.checked_add(d)?;
            scale = scale.checked_mul(10)?;
        } else {
            integer = integer.checked_mul(10)?.checked_add(d)?;
        }
    }
    if !seen {
        return None;
    }
    Some(Rational64::from_integer(integer) + Rational64::new(fraction, scale))
}

/// Value of a numeral written either in digits or in words.
pub fn numeral_value(text: &str) -> Option<Rational64> {
    parse_digits(text).or_else(|| get_value(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational64 {
        Rational64::new(n, d)
    }

    #[test]
    fn connector_composes_ones_and_tens() {
        assert_eq!(get_value("ثلاثة وعشرين"), Some(r(23, 1)));
        assert_eq!(get_value("واحد و تسعون"), Some(r(91, 1)));
        assert_eq!(get_value("خمسة وستين"), Some(r(65, 1)));
        // Both sides must be known.
        assert_eq!(get_value("كلمة وعشرين"), None);
        assert_eq!(get_value("ثلاثة وكلمة"), None);
    }

    #[test]
    fn perfect_tens() {
        assert_eq!(get_value("عشرين"), Some(r(20, 1)));
        assert_eq!(get_value("ثلاثون"), Some(r(30, 1)));
        assert_eq!(get_value("ستين"), Some(r(60, 1)));
        assert_eq!(get_value("ثمانين"), Some(r(80, 1)));
        assert_eq!(tens_multiplier("عشرة"), None);
    }

    #[test]
    fn table_prefers_specific_entries() {
        assert_eq!(get_value("مئتين"), Some(r(200, 1)));
        assert_eq!(get_value("مائة"), Some(r(100, 1)));
        assert_eq!(get_value("ألفين"), Some(r(2000, 1)));
        assert_eq!(get_value("ثلاث ارباع"), Some(r(3, 4)));
        assert_eq!(get_value("ثلاثة عشر"), Some(r(13, 1)));
        assert_eq!(get_value("ثلاثة"), Some(r(3, 1)));
        assert_eq!(get_value("إحدى عشرة"), Some(r(11, 1)));
        assert_eq!(get_value("اثنا عشر"), Some(r(12, 1)));
        assert_eq!(get_value("نص"), Some(r(1, 2)));
        assert_eq!(get_value("ربع"), Some(r(1, 4)));
        assert_eq!(get_value("ثلث"), Some(r(1, 3)));
        assert_eq!(get_value("ساعة"), None);
    }

    #[test]
    fn digits_in_every_script() {
        assert_eq!(parse_digits("42"), Some(r(42, 1)));
        assert_eq!(parse_digits("٤٢"), Some(r(42, 1)));
        assert_eq!(parse_digits("۴۲"), Some(r(42, 1)));
        assert_eq!(parse_digits("4.5"), Some(r(9, 2)));
        assert_eq!(parse_digits("٤٫٢٥"), Some(r(17, 4)));
        assert_eq!(parse_digits("1.2.3"), None);
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("99999999999999999999"), None);
        assert_eq!(numeral_value("خمسة"), Some(r(5, 1)));
    }
}
