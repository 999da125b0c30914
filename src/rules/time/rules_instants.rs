//! The present moment and days relative to today: "الآن", "أمس", "بكرة",
//! "بعد 3 أيام".

use crate::error::Result;
use crate::pattern::{SPACE, bounded, named_group, non_capturing_group, spaced_patterns};
use crate::rules::numeral::predicates::integer_value;
use crate::rules::numeral::{numeral_pattern, rule_numeral};
use crate::rules::time::lexicon::{
    AFTER, BEFORE, NEXT, PREVIOUS, THE_DAY, THIS, after_next, before_previous, in_from_at_this, unit_words,
};
use crate::value::{DurationUnit, TimeValue};
use crate::{Expression, Value};

fn days_offset(days: i32) -> Value {
    Value::Time(TimeValue { days: Some(days), ..TimeValue::default() })
}

fn yesterday() -> Result<String> {
    let one = unit_words(DurationUnit::Days)?.one;
    Ok(non_capturing_group([
        "[اإ]?مبارح".to_string(),
        "البارح[ةه]".to_string(),
        "(?:ال)?[أا]مس".to_string(),
        spaced_patterns([BEFORE, one.as_str()]),
        spaced_patterns([THE_DAY, PREVIOUS]),
    ]))
}

fn tomorrow() -> Result<String> {
    let one = unit_words(DurationUnit::Days)?.one;
    Ok(non_capturing_group([
        "(?:ال)?غدا?".to_string(),
        "بكر[ةه]".to_string(),
        spaced_patterns([THE_DAY, NEXT]),
        spaced_patterns([AFTER, one.as_str()]),
    ]))
}

fn fixed_days(name: &str, days: i32, pattern: String) -> Result<Expression> {
    Expression::value(name, days_offset(days), bounded(pattern))
}

/// "الآن", "هذا الوقت", "هسة", "في الحال"
pub fn rule_now() -> Result<Expression> {
    let now = TimeValue {
        years: Some(0),
        months: Some(0),
        days: Some(0),
        hours: Some(0),
        minutes: Some(0),
        seconds: Some(0),
        ..TimeValue::default()
    };
    let pattern = non_capturing_group([
        "ال[أآا]ن".to_string(),
        format!(r"{THIS}\s*(?:الوقت|اللح[زضظ][ةه])"),
        "هس[ةه]".to_string(),
        spaced_patterns(["في", "الحال"]),
    ]);
    Expression::value("now", Value::Time(now), bounded(pattern))
}

/// "اليوم", "في هذا اليوم"
pub fn rule_today() -> Result<Expression> {
    let this_day = spaced_patterns([in_from_at_this().as_str(), THE_DAY]);
    fixed_days("today", 0, non_capturing_group([THE_DAY.to_string(), this_day]))
}

/// "أمس", "مبارح", "البارحة", "قبل يوم", "اليوم السابق"
pub fn rule_yesterday() -> Result<Expression> {
    fixed_days("yesterday", -1, yesterday()?)
}

/// "أول أمس", "قبل أمس", "قبل يومين"
pub fn rule_before_yesterday() -> Result<Expression> {
    let two = unit_words(DurationUnit::Days)?.two;
    let pattern = non_capturing_group([
        spaced_patterns([non_capturing_group(["[أا]ول", BEFORE]), yesterday()?]),
        spaced_patterns([THE_DAY, before_previous().as_str()]),
        spaced_patterns([BEFORE, two.as_str()]),
    ]);
    fixed_days("the day before yesterday", -2, pattern)
}

/// "غدا", "بكرة", "اليوم التالي", "بعد يوم"
pub fn rule_tomorrow() -> Result<Expression> {
    fixed_days("tomorrow", 1, tomorrow()?)
}

/// "بعد غد", "بعد بكرة", "بعد يومين"
pub fn rule_after_tomorrow() -> Result<Expression> {
    let two = unit_words(DurationUnit::Days)?.two;
    let pattern = non_capturing_group([
        spaced_patterns([THE_DAY, after_next().as_str()]),
        spaced_patterns([AFTER, tomorrow()?.as_str()]),
        spaced_patterns([AFTER, two.as_str()]),
    ]);
    fixed_days("the day after tomorrow", 2, pattern)
}

fn counted_days(name: &str, word: &str, sign: i32) -> Result<Expression> {
    let several = unit_words(DurationUnit::Days)?.several;
    let pattern = format!("{word}{SPACE}{}{SPACE}{several}", named_group("value", numeral_pattern()));
    Expression::computed(name, bounded(pattern), move |caps, ctx| {
        let count = integer_value(&rule_numeral().value_of(caps.name("value")?.as_str(), ctx)?)?;
        let days = i32::try_from(count).ok()?.checked_mul(sign)?;
        Some(days_offset(days))
    })
}

/// "بعد 3 أيام", "بعد عشرين يوما"
pub fn rule_after_n_days() -> Result<Expression> {
    counted_days("after <n> days", AFTER, 1)
}

/// "قبل 3 أيام"
pub fn rule_before_n_days() -> Result<Expression> {
    counted_days("before <n> days", BEFORE, -1)
}

/// Two-day shifts come before the one-day shifts they contain.
pub fn get() -> Result<Vec<Expression>> {
    Ok(vec![
        rule_before_yesterday()?,
        rule_after_tomorrow()?,
        rule_yesterday()?,
        rule_tomorrow()?,
        rule_after_n_days()?,
        rule_before_n_days()?,
        rule_today()?,
        rule_now()?,
    ])
}
