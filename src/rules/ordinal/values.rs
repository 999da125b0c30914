//! Spelling variants of Arabic ordinals, without the article.

pub const ARTICLE: &str = "ال";
pub const OPTIONAL_ARTICLE: &str = "(?:ال)?";

pub const FIRST: &str = "(?:[أا]ول[ىي]?)";
pub const SECOND: &str = "(?:ثاني[ةه]?)";
pub const THIRD: &str = "(?:ثالث[ةه]?)";
pub const FOURTH: &str = "(?:رابع[ةه]?)";
pub const FIFTH: &str = "(?:خامس[ةه]?)";
pub const SIXTH: &str = "(?:سادس[ةه]?)";
pub const SEVENTH: &str = "(?:سابع[ةه]?)";
pub const EIGHTH: &str = "(?:ثامن[ةه]?)";
pub const NINTH: &str = "(?:تاسع[ةه]?)";
pub const TENTH: &str = "(?:عاشر[ةه]?)";

/// The "one" used in 11th and 21st, 31st, …
pub const UNIT_ONE: &str = "(?:حادي?[ةه]?)";

const TEEN: &str = r"\s?عشر[ةه]?";

/// Second to ninth, in order.
pub fn second_to_ninth() -> [&'static str; 8] {
    [SECOND, THIRD, FOURTH, FIFTH, SIXTH, SEVENTH, EIGHTH, NINTH]
}

/// `(pattern, value)` for 1st to 19th, teens first.
pub fn ones_table() -> Vec<(String, i64)> {
    let mut table = vec![(format!("(?:{}{})", UNIT_ONE, TEEN), 11)];
    table.extend(second_to_ninth().iter().zip(12..).map(|(stem, n)| (format!("(?:{}{})", stem, TEEN), n)));
    table.push((FIRST.to_string(), 1));
    table.extend(second_to_ninth().iter().zip(2..).map(|(stem, n)| (stem.to_string(), n)));
    table.push((TENTH.to_string(), 10));
    table
}

/// `(pattern, value)` for the ones part of 21st to 99th.
pub fn compound_ones_table() -> Vec<(String, i64)> {
    let mut table = vec![(UNIT_ONE.to_string(), 1)];
    table.extend(second_to_ninth().iter().zip(2..).map(|(stem, n)| (stem.to_string(), n)));
    table
}
