//! Weekday rules: "الأحد", "يوم الثلاثاء القادم", "الجمعة قبل الماضية".

use chrono::Weekday;
use once_cell::sync::Lazy;

use crate::error::Result;
use crate::pattern::{SPACE, bounded, named_group, optional_non_capturing_group};
use crate::rules::time::lexicon::{DAY, NEXT, PREVIOUS, after_next, before_previous, with_modifier};
use crate::value::{RelativeWeekday, TimeValue};
use crate::{Context, Expression, ExpressionGroup, Value};

fn weekday(name: &str, weekday: Weekday, pattern: &str) -> Result<Expression> {
    let value = TimeValue { weekday: Some(RelativeWeekday::bare(weekday)), ..TimeValue::default() };
    Expression::value(name, Value::Time(value), pattern)
}

/// The seven weekday names, each resolving to a bare weekday.
pub fn weekdays() -> Result<ExpressionGroup> {
    ExpressionGroup::new(vec![
        weekday("sunday", Weekday::Sun, "ال[أا]حد")?,
        weekday("monday", Weekday::Mon, "ال[إا][تث]نين")?,
        weekday("tuesday", Weekday::Tue, "ال[ثت]لا[ثت]اء")?,
        weekday("wednesday", Weekday::Wed, "ال[أا]ربعاء")?,
        weekday("thursday", Weekday::Thu, "الخميس")?,
        weekday("friday", Weekday::Fri, "الجمع[ةه]")?,
        weekday("saturday", Weekday::Sat, "السبت")?,
    ])
}

static WEEKDAYS: Lazy<ExpressionGroup> = Lazy::new(|| crate::built!(weekdays()));

pub(crate) fn weekday_names() -> &'static ExpressionGroup {
    &WEEKDAYS
}

fn weekday_of(fragment: &str, context: &Context) -> Option<RelativeWeekday> {
    WEEKDAYS.value_of(fragment, context)?.as_time()?.weekday
}

fn shifted_weekday(name: &str, modifier: &str, n: i32) -> Result<Expression> {
    let pattern = bounded(with_modifier(DAY, WEEKDAYS.join(), modifier));
    Expression::computed(name, pattern, move |caps, ctx| {
        let weekday = weekday_of(caps.name("value")?.as_str(), ctx)?.nth(n);
        Some(Value::Time(TimeValue { weekday: Some(weekday), ..TimeValue::default() }))
    })
}

/// "الأحد", "يوم الأحد"
pub fn rule_weekday() -> Result<Expression> {
    let pattern = format!(
        "{}{}",
        optional_non_capturing_group([format!("{DAY}{SPACE}")]),
        named_group("value", WEEKDAYS.join())
    );
    Expression::computed("<weekday>", bounded(pattern), |caps, ctx| {
        WEEKDAYS.value_of(caps.name("value")?.as_str(), ctx)
    })
}

/// "الأحد القادم"
pub fn rule_next_weekday() -> Result<Expression> {
    shifted_weekday("next <weekday>", NEXT, 1)
}

/// "الأحد الماضي"
pub fn rule_previous_weekday() -> Result<Expression> {
    shifted_weekday("previous <weekday>", PREVIOUS, -1)
}

/// "الأحد بعد القادم"
pub fn rule_after_next_weekday() -> Result<Expression> {
    shifted_weekday("<weekday> after next", &after_next(), 2)
}

/// "الأحد قبل الماضي"
pub fn rule_before_previous_weekday() -> Result<Expression> {
    shifted_weekday("<weekday> before previous", &before_previous(), -2)
}

/// Most specific first.
pub fn get() -> Result<Vec<Expression>> {
    Ok(vec![
        rule_after_next_weekday()?,
        rule_before_previous_weekday()?,
        rule_next_weekday()?,
        rule_previous_weekday()?,
        rule_weekday()?,
    ])
}
