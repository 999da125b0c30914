//! Month rules: named months ("مارس", "شهر 3", "أيلول القادم") and months
//! relative to the current one ("الشهر الماضي", "بعد 3 أشهر").

use chrono::Datelike;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::pattern::{SPACE, bounded, named_group, non_capturing_group, optional_non_capturing_group, spaced_patterns};
use crate::rules::numeral::predicates::integer_value;
use crate::rules::numeral::values::{EIGHT, ELEVEN, FIVE, FOUR, NINE, ONE, SEVEN, SIX, TEN, THREE, TWELVE, TWO};
use crate::rules::numeral::{numeral_pattern, rule_numeral};
use crate::rules::time::lexicon::{
    AFTER, BEFORE, MONTH, NEXT, PREVIOUS, THE_MONTH, after_next, before_previous, in_from_at_this, unit_words,
    with_modifier,
};
use crate::value::{DurationUnit, TimeValue};
use crate::{Context, Expression, ExpressionGroup, Value};

/// Month number and its two spellings: the Egyptian name and the Levantine one.
const MONTH_NAMES: [(u32, &str, &str, &str); 12] = [
    (1, "january", "يناير", "كانون الثاني"),
    (2, "february", "فبراير", "شباط"),
    (3, "march", "مارس", "[اأآ]ذار"),
    (4, "april", "نيسان", "[اأإآٱ]بريل"),
    (5, "may", "مايو", "[أا]يار"),
    (6, "june", "يونيو", "حزيران"),
    (7, "july", "يوليو", "تموز"),
    (8, "august", "[اأآ]غسطس", "[أاآ]ب"),
    (9, "september", "سبتمبر", "[اأ]يلول"),
    (10, "october", "[اأ]كتوبر", "تشرين ال[أا]ول"),
    (11, "november", "نوفمبر", "تشرين الثاني"),
    (12, "december", "ديسمبر", "كانون ال[أا]ول"),
];

/// Spelled month numbers, teens first so `احدى عشر` is not cut after `احدى`.
const MONTH_NUMBERS: [(u32, &str); 12] = [
    (11, ELEVEN),
    (12, TWELVE),
    (1, ONE),
    (2, TWO),
    (3, THREE),
    (4, FOUR),
    (5, FIVE),
    (6, SIX),
    (7, SEVEN),
    (8, EIGHT),
    (9, NINE),
    (10, TEN),
];

fn month(month: u32) -> Value {
    Value::Time(TimeValue { month: Some(month), ..TimeValue::default() })
}

fn months_offset(months: i32) -> Value {
    Value::Time(TimeValue { months: Some(months), ..TimeValue::default() })
}

/// Month names first, then `شهر <number>` ("شهر تسعة", "شهر 09").
pub fn months() -> Result<ExpressionGroup> {
    let mut members = Vec::with_capacity(24);
    for (number, name, first, second) in MONTH_NAMES {
        members.push(Expression::value(name, month(number), non_capturing_group([first, second]))?);
    }
    for (number, word) in MONTH_NUMBERS {
        let digits = if number < 10 { format!("0?{number}") } else { number.to_string() };
        let pattern = format!(r"{MONTH}{SPACE}(?:{word}|{digits}\b)");
        members.push(Expression::value(format!("month {number}"), month(number), pattern)?);
    }
    ExpressionGroup::new(members)
}

static MONTHS: Lazy<ExpressionGroup> = Lazy::new(|| crate::built!(months()));

pub(crate) fn month_names() -> &'static ExpressionGroup {
    &MONTHS
}

/// The month number of a fragment matched by the month names group.
pub(crate) fn month_of(fragment: &str, context: &Context) -> Option<u32> {
    MONTHS.value_of(fragment, context)?.as_time()?.month
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

/// A named month relative to the reference month.
///
/// The next March is this year's when March is still ahead, otherwise next
/// year's; the previous March is this year's when it is already behind.
/// `extra_years` shifts the result further ("بعد القادم", "قبل الماضي").
fn rolled_month(month: u32, current: u32, direction: Direction, extra_years: i32) -> TimeValue {
    let rollover = match direction {
        Direction::Next if month <= current => 1,
        Direction::Previous if month > current => -1,
        _ => 0,
    };
    TimeValue { month: Some(month), years: Some(extra_years + rollover), ..TimeValue::default() }
}

fn shifted_month(name: &str, modifier: &str, direction: Direction, extra_years: i32) -> Result<Expression> {
    let pattern = bounded(with_modifier(MONTH, MONTHS.join(), modifier));
    Expression::computed(name, pattern, move |caps, ctx| {
        let month = month_of(caps.name("value")?.as_str(), ctx)?;
        let current = ctx.reference_time.month();
        Some(Value::Time(rolled_month(month, current, direction, extra_years)))
    })
}

/// "مارس", "شهر مارس", "شهر 3"
pub fn rule_specific_month() -> Result<Expression> {
    let pattern = format!(
        "{}{}",
        optional_non_capturing_group([format!("{MONTH}{SPACE}")]),
        named_group("value", MONTHS.join())
    );
    Expression::computed("<month>", bounded(pattern), |caps, ctx| MONTHS.value_of(caps.name("value")?.as_str(), ctx))
}

/// "مارس القادم"
pub fn rule_next_specific_month() -> Result<Expression> {
    shifted_month("next <month>", NEXT, Direction::Next, 0)
}

/// "مارس الماضي"
pub fn rule_previous_specific_month() -> Result<Expression> {
    shifted_month("previous <month>", PREVIOUS, Direction::Previous, 0)
}

/// "مارس بعد القادم"
pub fn rule_after_next_specific_month() -> Result<Expression> {
    shifted_month("<month> after next", &after_next(), Direction::Next, 1)
}

/// "مارس قبل الماضي"
pub fn rule_before_previous_specific_month() -> Result<Expression> {
    shifted_month("<month> before previous", &before_previous(), Direction::Previous, -1)
}

fn fixed_months(name: &str, months: i32, alternatives: [String; 2]) -> Result<Expression> {
    Expression::value(name, months_offset(months), bounded(non_capturing_group(alternatives)))
}

/// "الشهر", "هذا الشهر", "في هذا الشهر"
pub fn rule_this_month() -> Result<Expression> {
    fixed_months("this month", 0, [THE_MONTH.to_string(), spaced_patterns([in_from_at_this().as_str(), THE_MONTH])])
}

/// "الشهر الماضي", "قبل شهر"
pub fn rule_last_month() -> Result<Expression> {
    let words = unit_words(DurationUnit::Months)?;
    fixed_months(
        "last month",
        -1,
        [spaced_patterns([BEFORE, words.one.as_str()]), spaced_patterns([THE_MONTH, PREVIOUS])],
    )
}

/// "الشهر قبل الماضي", "قبل شهرين"
pub fn rule_last_two_months() -> Result<Expression> {
    let words = unit_words(DurationUnit::Months)?;
    fixed_months(
        "two months ago",
        -2,
        [spaced_patterns([THE_MONTH, before_previous().as_str()]), spaced_patterns([BEFORE, words.two.as_str()])],
    )
}

/// "الشهر القادم", "بعد شهر"
pub fn rule_next_month() -> Result<Expression> {
    let words = unit_words(DurationUnit::Months)?;
    fixed_months("next month", 1, [spaced_patterns([THE_MONTH, NEXT]), spaced_patterns([AFTER, words.one.as_str()])])
}

/// "الشهر بعد القادم", "بعد شهرين"
pub fn rule_next_two_months() -> Result<Expression> {
    let words = unit_words(DurationUnit::Months)?;
    fixed_months(
        "in two months",
        2,
        [spaced_patterns([THE_MONTH, after_next().as_str()]), spaced_patterns([AFTER, words.two.as_str()])],
    )
}

fn counted_months(name: &str, word: &str, sign: i32) -> Result<Expression> {
    let several = unit_words(DurationUnit::Months)?.several;
    let pattern = spaced_patterns([word, named_group("value", numeral_pattern()).as_str(), several.as_str()]);
    Expression::computed(name, bounded(pattern), move |caps, ctx| {
        let count = integer_value(&rule_numeral().value_of(caps.name("value")?.as_str(), ctx)?)?;
        let months = i32::try_from(count).ok()?.checked_mul(sign)?;
        Some(months_offset(months))
    })
}

/// "بعد 3 أشهر", "بعد احدى عشر شهرا"
pub fn rule_after_n_months() -> Result<Expression> {
    counted_months("after <n> months", AFTER, 1)
}

/// "قبل 3 أشهر"
pub fn rule_before_n_months() -> Result<Expression> {
    counted_months("before <n> months", BEFORE, -1)
}

/// Named months, most specific first.
pub fn get_specific() -> Result<Vec<Expression>> {
    Ok(vec![
        rule_after_next_specific_month()?,
        rule_before_previous_specific_month()?,
        rule_next_specific_month()?,
        rule_previous_specific_month()?,
        rule_specific_month()?,
    ])
}

/// Months relative to the current one; the two-month forms come before the
/// one-month forms they start with.
pub fn get_relative() -> Result<Vec<Expression>> {
    Ok(vec![
        rule_last_two_months()?,
        rule_next_two_months()?,
        rule_last_month()?,
        rule_next_month()?,
        rule_after_n_months()?,
        rule_before_n_months()?,
        rule_this_month()?,
    ])
}
