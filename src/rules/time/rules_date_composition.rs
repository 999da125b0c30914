//! A day of the month with its month: "الخامس من شهر مارس", "15 آذار",
//! "يوم الأحد 3 من هذا الشهر".

use crate::error::Result;
use crate::pattern::{SPACE, bounded, named_group, non_capturing_group, optional_non_capturing_group, spaced_patterns};
use crate::rules::numeral::predicates::day_of_month;
use crate::rules::numeral::rule_numeral_ones_tens;
use crate::rules::ordinal::rule_ordinal_any_article;
use crate::rules::time::helpers::days_in_month;
use crate::rules::time::lexicon::{DAY, IN_FROM_AT, MONTH, THE_DAY, THE_MONTH, in_from_at_this};
use crate::rules::time::rules_months::{month_names, month_of};
use crate::rules::time::rules_weekdays::weekday_names;
use crate::value::TimeValue;
use crate::{Context, Expression, ExpressionGroup, Value};

/// Any year in which February has 29 days, to bound days of a month given
/// without a year.
const LEAP_YEAR: i32 = 2000;

fn followed_by_space(pattern: &str) -> String {
    optional_non_capturing_group([format!("{pattern}{SPACE}")])
}

/// `[يوم ][اليوم ][<weekday> ][في ]`
fn optional_start() -> String {
    [DAY, THE_DAY, weekday_names().join(), IN_FROM_AT].iter().map(|p| followed_by_space(p)).collect()
}

/// `[في ][شهر ]`
fn optional_middle() -> String {
    format!("{}{}", followed_by_space(IN_FROM_AT), followed_by_space(MONTH))
}

fn this_month() -> String {
    non_capturing_group([THE_MONTH.to_string(), spaced_patterns([in_from_at_this().as_str(), THE_MONTH])])
}

/// How the day is written: an ordinal word or a cardinal numeral.
#[derive(Debug, Clone, Copy)]
enum DayForm {
    Ordinal,
    Numeral,
}

impl DayForm {
    fn group(self) -> &'static ExpressionGroup {
        match self {
            DayForm::Ordinal => rule_ordinal_any_article(),
            DayForm::Numeral => rule_numeral_ones_tens(),
        }
    }

    fn capture(self) -> &'static str {
        match self {
            DayForm::Ordinal => "ordinal",
            DayForm::Numeral => "numeral",
        }
    }

    fn day(self, caps: &regex::Captures<'_>, context: &Context) -> Option<u32> {
        let fragment = caps.name(self.capture())?.as_str();
        day_of_month(&self.group().value_of(fragment, context)?)
    }
}

/// `<start><day> <middle><tail>`
fn composition(form: DayForm, tail: String) -> String {
    format!(
        "{}{}{SPACE}{}{tail}",
        optional_start(),
        named_group(form.capture(), form.group().join()),
        optional_middle()
    )
}

fn day_and_specific_month(name: &str, form: DayForm) -> Result<Expression> {
    let pattern = composition(form, named_group("value", month_names().join()));
    Expression::computed(name, bounded(pattern), move |caps, ctx| {
        let month = month_of(caps.name("value")?.as_str(), ctx)?;
        let day = form.day(caps, ctx)?;
        if day > days_in_month(LEAP_YEAR, month)? {
            return None;
        }
        Some(Value::Time(TimeValue { month: Some(month), day: Some(day), ..TimeValue::default() }))
    })
}

fn day_and_this_month(name: &str, form: DayForm) -> Result<Expression> {
    Expression::computed(name, bounded(composition(form, this_month())), move |caps, ctx| {
        let day = form.day(caps, ctx)?;
        Some(Value::Time(TimeValue { months: Some(0), day: Some(day), ..TimeValue::default() }))
    })
}

/// "الخامس من شهر مارس", "الحادي والعشرين من كانون الثاني"
pub fn rule_ordinal_and_specific_month() -> Result<Expression> {
    day_and_specific_month("<ordinal> <month>", DayForm::Ordinal)
}

/// "15 مارس", "خمسة عشر من شهر آذار"
pub fn rule_numeral_and_specific_month() -> Result<Expression> {
    day_and_specific_month("<day> <month>", DayForm::Numeral)
}

/// "الخامس من هذا الشهر"
pub fn rule_ordinal_and_this_month() -> Result<Expression> {
    day_and_this_month("<ordinal> of this month", DayForm::Ordinal)
}

/// "يوم الأحد 15 من هذا الشهر"
pub fn rule_numeral_and_this_month() -> Result<Expression> {
    day_and_this_month("<day> of this month", DayForm::Numeral)
}

pub fn get() -> Result<Vec<Expression>> {
    Ok(vec![
        rule_ordinal_and_specific_month()?,
        rule_numeral_and_specific_month()?,
        rule_ordinal_and_this_month()?,
        rule_numeral_and_this_month()?,
    ])
}
