//! Words shared by the time rules.

use crate::error::{BuildError, Result};
use crate::pattern::{SPACE, named_group, non_capturing_group, optional_non_capturing_group};
use crate::rules::duration::values::lexicon;
use crate::value::DurationUnit;

pub const THIS: &str = "(?:ها?ذ[ياه]|ه[اذ]ي)";
pub const AFTER: &str = r"(?:(?:[إا]لل?ي\s+)?بعد)";
pub const BEFORE: &str = r"(?:(?:[إا]لل?ي\s+)?[أاق]بل)";
pub const PREVIOUS: &str = "(?:(?:الماضي?|السابق|المنصرم|الفا[يئ]ت)[ةه]?)";
pub const NEXT: &str = "(?:(?:الجاي|القادم|التالي?|ال[اآ]تي?|المقبل)[ةه]?)";
pub const IN_FROM_AT: &str = "(?:في|من|خلال|الموافق)";

pub const DAY: &str = "يوم";
pub const THE_DAY: &str = "اليوم";
pub const MONTH: &str = "شهر";
pub const THE_MONTH: &str = "الشهر";

/// "بعد القادم": the one after the next.
pub fn after_next() -> String {
    format!("{AFTER}{SPACE}{NEXT}")
}

/// "قبل الماضي": the one before the previous.
pub fn before_previous() -> String {
    format!("{BEFORE}{SPACE}{PREVIOUS}")
}

/// "هذا" with an optional preposition: "في هذا", "من هذه".
pub fn in_from_at_this() -> String {
    format!("{}{THIS}", optional_non_capturing_group([format!("{IN_FROM_AT}{SPACE}")]))
}

/// `[<prefix> ]<value> <modifier>`, with the named part captured as `value`:
/// "يوم الأحد القادم", "مارس الماضي".
pub fn with_modifier(prefix: &str, value: &str, modifier: &str) -> String {
    format!(
        "{}{}{SPACE}{modifier}",
        optional_non_capturing_group([format!("{prefix}{SPACE}")]),
        named_group("value", value)
    )
}

/// Noun forms of a unit as the time rules count it: "شهر", "شهرين", and the
/// form following a numeral ("3 أشهر", "11 شهرا").
pub struct UnitWords {
    pub one: String,
    pub two: String,
    pub several: String,
}

pub fn unit_words(unit: DurationUnit) -> Result<UnitWords> {
    let lex = lexicon(unit).ok_or(BuildError::MissingUnitForm { unit })?;
    Ok(UnitWords {
        one: lex.singular.to_string(),
        two: lex.dual.to_string(),
        several: non_capturing_group([lex.plural, lex.singular]),
    })
}
