//! Time expressions: weekdays, months, days relative to today and days of a
//! month.
//!
//! Every rule produces a [`TimeValue`](crate::value::TimeValue), a calendar
//! delta resolved against [`Context::reference_time`](crate::Context).

pub mod helpers;
pub mod lexicon;
pub mod rules_date_composition;
pub mod rules_instants;
pub mod rules_months;
pub mod rules_weekdays;

#[cfg(test)]
mod tests;

use once_cell::sync::Lazy;

use crate::error::Result;
use crate::{Expression, ExpressionGroup};

/// Every time rule, most specific first: days of a month before the weekday
/// and month names they start with, multi-word shifts before the words they
/// contain.
pub fn get() -> Result<Vec<Expression>> {
    let mut rules = rules_date_composition::get()?;
    rules.extend(rules_weekdays::get()?);
    rules.extend(rules_months::get_specific()?);
    rules.extend(rules_months::get_relative()?);
    rules.extend(rules_instants::get()?);
    Ok(rules)
}

static RULE_TIME: Lazy<ExpressionGroup> = Lazy::new(|| crate::built!(get().and_then(ExpressionGroup::new)));

pub fn rule_time() -> &'static ExpressionGroup {
    &RULE_TIME
}

/// The weekday names group.
pub fn weekdays() -> &'static ExpressionGroup {
    rules_weekdays::weekday_names()
}

/// The month names group, including `شهر <number>`.
pub fn months() -> &'static ExpressionGroup {
    rules_months::month_names()
}
