//! Literal characters the rule patterns are assembled from.
//!
//! Only the handful of constants the rules need live here; the full letter,
//! diacritic and ligature tables belong to the caller.

pub const WAW: &str = "و";
pub const COMMA: &str = ",";
pub const ARABIC_COMMA: &str = "،";
pub const ARABIC_DECIMAL_SEPARATOR: char = '٫';

/// ASCII, Arabic-Indic and Extended Arabic-Indic digits.
pub const DIGIT_CLASS: &str = "[0-9٠-٩۰-۹]";

/// Map a digit from any supported script to its value.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        '\u{0660}'..='\u{0669}' => Some(c as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(c as u32 - 0x06F0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_across_scripts() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('٧'), Some(7));
        assert_eq!(digit_value('۷'), Some(7));
        assert_eq!(digit_value('x'), None);
    }
}
