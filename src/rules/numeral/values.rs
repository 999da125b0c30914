//! Spelling variants of Arabic number words.
//!
//! Every constant is a regex fragment wrapped in `(?:…)` so it can be dropped
//! into a larger pattern as is. Variants cover hamza/alef, taa marbuta/haa and
//! yaa/alef maqsura spellings as well as the common colloquial forms.

pub const ONE: &str = "(?:واحد[ةه]?|[إا]حدى)";
pub const TWO: &str = "(?:[اإ]?ثن(?:ان|ين|تان|تين))";
pub const THREE: &str = "(?:[ثت]لا[ثت][ةه]?)";
pub const FOUR: &str = "(?:[أا]ربع[ةه]?)";
pub const FIVE: &str = "(?:خمس[ةه]?)";
pub const SIX: &str = "(?:ست[ةه]?)";
pub const SEVEN: &str = "(?:سبع[ةه]?)";
pub const EIGHT: &str = "(?:[ثت]ما?ني?[ةه]?)";
pub const NINE: &str = "(?:تسع[ةه]?)";
pub const TEN: &str = "(?:عشر[ةه]?)";

const TEEN: &str = r"\s?عشر[ةه]?";

pub const ELEVEN: &str = r"(?:(?:[أاإ]حد|[إا]حدى)\s?عشر[ةه]?)";
pub const TWELVE: &str = r"(?:[اإ]?ثنت?[اي]\s?عشر[ةه]?)";

/// 13 to 19: the ones stem followed by `عشر`.
pub fn teen(ones: &str) -> String {
    format!("(?:{}{})", ones, TEEN)
}

pub const TWENTY: &str = "(?:عشر(?:ين|ون))";
/// Thirty to ninety: a ones stem with the plural suffix.
pub const TENS_FROM_THIRTY: &str = "(?:(?:[ثت]لا[ثت]|[أا]ربع|خمس|ست|سبع|[ثت]ما?ن|تسع)(?:ين|ون))";

pub const TWO_HUNDREDS: &str = "(?:(?:مئت|مائت|ميت)(?:ين|ان))";
pub const HUNDREDS: &str = "(?:مئات)";
pub const HUNDRED: &str = "(?:(?:مئ|مائ|مي)[ةه])";
pub const TWO_THOUSANDS: &str = "(?:[أا]لف(?:ين|ان))";
pub const THOUSANDS: &str = "(?:[آا]لاف)";
pub const THOUSAND: &str = "(?:[أا]لف)";
pub const TWO_MILLIONS: &str = "(?:مليون(?:ين|ان))";
pub const MILLIONS: &str = "(?:ملايين)";
pub const MILLION: &str = "(?:مليون)";
pub const TWO_BILLIONS: &str = "(?:مليار(?:ين|ان))";
pub const BILLIONS: &str = "(?:مليارات)";
pub const BILLION: &str = "(?:مليار)";
pub const TWO_TRILLIONS: &str = "(?:تري?ليون(?:ين|ان))";
pub const TRILLIONS: &str = "(?:تري?ليونات)";
pub const TRILLION: &str = "(?:تري?ليون)";

pub const THREE_QUARTERS: &str = r"(?:[ثت]لا[ثت][ةه]?\s?[أا]رباع)";
pub const HALF: &str = "(?:نصف?)";
pub const QUARTER: &str = "(?:ربع)";
pub const THIRD: &str = "(?:[ثت]لث)";

/// Digits in any supported script, with an optional decimal part.
pub const DECIMAL: &str = "(?:[0-9٠-٩۰-۹]+[.٫][0-9٠-٩۰-۹]+)";
pub const INTEGER: &str = "(?:[0-9٠-٩۰-۹]+)";

/// The connector between the ones and the tens of a compound number.
pub const CONNECTOR: &str = r"\s+و\s*";

/// One to nine, in table order.
pub fn ones() -> [&'static str; 9] {
    [ONE, TWO, THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE]
}

/// Eleven to nineteen.
pub fn teens() -> Vec<String> {
    let mut out = vec![ELEVEN.to_string(), TWELVE.to_string()];
    out.extend([THREE, FOUR, FIVE, SIX, SEVEN, EIGHT, NINE].iter().map(|stem| teen(stem)));
    out
}

/// Multipliers following a count, plurals before singulars.
pub fn scales() -> [&'static str; 10] {
    [HUNDREDS, HUNDRED, THOUSANDS, THOUSAND, MILLIONS, MILLION, BILLIONS, BILLION, TRILLIONS, TRILLION]
}

/// Scale names that stand for a value on their own, duals first.
pub fn big_values() -> [&'static str; 15] {
    [
        TWO_HUNDREDS,
        TWO_THOUSANDS,
        TWO_MILLIONS,
        TWO_BILLIONS,
        TWO_TRILLIONS,
        HUNDREDS,
        HUNDRED,
        THOUSANDS,
        THOUSAND,
        MILLIONS,
        MILLION,
        BILLIONS,
        BILLION,
        TRILLIONS,
        TRILLION,
    ]
}

/// Fractions usable after `و` / `الا` in durations.
pub fn fractions() -> [&'static str; 4] {
    [THREE_QUARTERS, HALF, QUARTER, THIRD]
}

const MILLION_VALUE: i64 = 1_000_000;
const BILLION_VALUE: i64 = 1_000_000_000;
const TRILLION_VALUE: i64 = 1_000_000_000_000;

/// The lookup table behind `get_value`: `(pattern, numerator, denominator)`,
/// most specific first. Lookups take the first entry matching at the start of
/// the text.
pub fn number_table() -> Vec<(String, i64, i64)> {
    let mut table: Vec<(String, i64, i64)> = vec![
        (TWO_HUNDREDS.into(), 200, 1),
        (TWO_THOUSANDS.into(), 2000, 1),
        (TWO_MILLIONS.into(), 2 * MILLION_VALUE, 1),
        (TWO_BILLIONS.into(), 2 * BILLION_VALUE, 1),
        (TWO_TRILLIONS.into(), 2 * TRILLION_VALUE, 1),
        (HUNDREDS.into(), 100, 1),
        (HUNDRED.into(), 100, 1),
        (THOUSANDS.into(), 1000, 1),
        (THOUSAND.into(), 1000, 1),
        (MILLIONS.into(), MILLION_VALUE, 1),
        (MILLION.into(), MILLION_VALUE, 1),
        (BILLIONS.into(), BILLION_VALUE, 1),
        (BILLION.into(), BILLION_VALUE, 1),
        (TRILLIONS.into(), TRILLION_VALUE, 1),
        (TRILLION.into(), TRILLION_VALUE, 1),
        (THREE_QUARTERS.into(), 3, 4),
    ];
    table.extend(teens().into_iter().zip(11..).map(|(p, n)| (p, n, 1)));
    table.extend(ones().iter().zip(1..).map(|(p, n)| (p.to_string(), n, 1)));
    table.push((TEN.into(), 10, 1));
    table.push((HALF.into(), 1, 2));
    table.push((QUARTER.into(), 1, 4));
    table.push((THIRD.into(), 1, 3));
    table
}
