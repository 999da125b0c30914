use num_rational::Rational64;
use once_cell::sync::Lazy;
use regex::Captures;

use super::values::{DUAL_EMPHASIS, EXCEPT, UnitLexicon, lexicon};
use crate::constants::{ARABIC_COMMA, COMMA, WAW};
use crate::error::{BuildError, Result};
use crate::pattern::{SPACE, SPACE_OR_NONE, named_group, non_capturing_group};
use crate::rules::numeral::resolver::get_value;
use crate::rules::numeral::values::fractions;
use crate::rules::numeral::{numeral_of, numeral_pattern};
use crate::value::{DurationAmount, DurationUnit, DurationValue};
use crate::{Context, Expression, ExpressionGroup, Value};

/// Between two unit slots: a comma and/or `و`, or plain whitespace.
fn unit_separator() -> String {
    format!(r"(?:\s*[{COMMA}{ARABIC_COMMA}]?\s*{WAW}\s*|\s+)")
}

fn fraction_pattern() -> String {
    non_capturing_group(fractions())
}

/// `و<fraction>` or `الا <fraction>` after a noun.
fn plus_tail() -> String {
    format!(r"{SPACE_OR_NONE}{WAW}{SPACE_OR_NONE}{}", named_group("plus", fraction_pattern()))
}

fn minus_tail() -> String {
    format!("{SPACE}{EXCEPT}{SPACE}{}", named_group("minus", fraction_pattern()))
}

/// `base + plus - minus`, reading the optional fraction captures.
fn with_fraction_tail(base: Rational64, caps: &Captures<'_>) -> Option<Rational64> {
    let mut value = base;
    if let Some(m) = caps.name("plus") {
        value += get_value(m.as_str())?;
    }
    if let Some(m) = caps.name("minus") {
        value -= get_value(m.as_str())?;
    }
    Some(value)
}

fn duration(amount: DurationAmount) -> Value {
    Value::Duration(DurationValue::single(amount))
}

/// Forms without a numeral re-express fractional values in the next smaller
/// unit: a quarter of an hour is 15 minutes.
fn lexical(value: Rational64, unit: DurationUnit) -> Value {
    duration(DurationAmount::new(value, unit).scaled_down())
}

/// `<numeral> <noun>` with an optional fraction tail; the unit is kept.
fn numeral_form(unit: DurationUnit, lex: &UnitLexicon) -> Result<Expression> {
    let pattern = format!(
        "{}{SPACE}{}{}",
        named_group("numeral", numeral_pattern()),
        non_capturing_group([lex.singular, lex.plural]),
        non_capturing_group([plus_tail(), minus_tail()]) + "?",
    );
    Expression::computed(format!("duration ({}: numeral)", unit.name()), pattern, move |caps, ctx| {
        let numeral = numeral_of(caps.name("numeral")?.as_str(), ctx)?;
        let value = with_fraction_tail(numeral, caps)?;
        Some(duration(DurationAmount::new(value, unit)))
    })
}

/// Fractions of a noun counting `base` units: `<fraction> <noun>`,
/// `<noun> و<fraction>` or `<noun> الا <fraction>`.
fn fraction_form(name: String, noun: &str, base: i64, unit: DurationUnit) -> Result<Expression> {
    let pattern = non_capturing_group([
        format!("{}{SPACE}{noun}", named_group("part", fraction_pattern())),
        format!("{noun}{}", plus_tail()),
        format!("{noun}{}", minus_tail()),
    ]);
    Expression::computed(name, pattern, move |caps, _| {
        let base = Rational64::from_integer(base);
        let value = match caps.name("part") {
            Some(part) => get_value(part.as_str())? * base,
            None => with_fraction_tail(base, caps)?,
        };
        Some(lexical(value, unit))
    })
}

/// The five forms of one unit slot, most specific first.
pub fn unit_forms(unit: DurationUnit) -> Result<ExpressionGroup> {
    let lex = lexicon(unit).ok_or(BuildError::MissingUnitForm { unit })?;
    let one = Rational64::from_integer(1);
    let two = Rational64::from_integer(2);
    ExpressionGroup::new(vec![
        numeral_form(unit, lex)?,
        fraction_form(format!("duration ({}: fraction of one)", unit.name()), lex.singular, 1, unit)?,
        fraction_form(format!("duration ({}: fraction of two)", unit.name()), lex.dual, 2, unit)?,
        Expression::value(
            format!("duration ({}: two)", unit.name()),
            lexical(two, unit),
            format!("{}{}", lex.dual, DUAL_EMPHASIS),
        )?,
        Expression::value(format!("duration ({}: one)", unit.name()), lexical(one, unit), lex.singular)?,
    ])
}

static UNIT_FORMS: Lazy<Vec<(DurationUnit, ExpressionGroup)>> = Lazy::new(|| {
    DurationUnit::DESCENDING.iter().map(|&unit| (unit, crate::built!(unit_forms(unit)))).collect()
});

fn forms(unit: DurationUnit) -> Option<&'static ExpressionGroup> {
    UNIT_FORMS.iter().find(|(u, _)| *u == unit).map(|(_, group)| group)
}

/// Resolve one unit slot through the unit's forms group.
fn slot_value(unit: DurationUnit, fragment: &str, context: &Context) -> Option<DurationValue> {
    match forms(unit)?.value_of(fragment, context)? {
        Value::Duration(d) => Some(d),
        _ => None,
    }
}

/// A rule chaining `units` in order: the first slot is required, every later
/// slot is optional and introduced by a separator.
///
/// ```text
/// [Hours, Minutes]:  \bو?(?P<hours>…)\b(?:SEP(?P<minutes>…)\b)?
/// ```
pub fn combined_expression(units: &[DurationUnit]) -> Result<Expression> {
    let (first, rest) = units.split_first().ok_or(BuildError::EmptyGroup)?;
    let slot = |unit: DurationUnit| -> Result<String> {
        let group = forms(unit).ok_or(BuildError::MissingUnitForm { unit })?;
        Ok(format!(r"{}\b", named_group(unit.name(), group.join())))
    };

    let mut pattern = format!(r"\b{WAW}?{}", slot(*first)?);
    for unit in rest {
        pattern.push_str(&format!("(?:{}{})?", unit_separator(), slot(*unit)?));
    }

    let name = format!("duration ({})", units.iter().map(|u| u.name()).collect::<Vec<_>>().join(" + "));
    let units = units.to_vec();
    Expression::computed(name, pattern, move |caps, ctx| {
        let mut total = DurationValue::default();
        for &unit in &units {
            let Some(m) = caps.name(unit.name()) else { continue };
            for amount in slot_value(unit, m.as_str(), ctx)?.amounts() {
                total.push(*amount);
            }
        }
        if total.is_empty() { None } else { Some(Value::Duration(total)) }
    })
}

static UNIT_RULES: Lazy<Vec<(DurationUnit, Expression)>> = Lazy::new(|| {
    DurationUnit::DESCENDING.iter().map(|&unit| (unit, crate::built!(combined_expression(&[unit])))).collect()
});

static RULE_DURATION: Lazy<ExpressionGroup> = Lazy::new(|| {
    let units = DurationUnit::DESCENDING;
    let members = (0..units.len()).map(|i| crate::built!(combined_expression(&units[i..]))).collect();
    crate::built!(ExpressionGroup::smart(members))
});

/// The rule for a single unit, e.g. "ساعتين وربع" for hours.
pub fn rule_duration_unit(unit: DurationUnit) -> &'static Expression {
    match UNIT_RULES.iter().find(|(u, _)| *u == unit) {
        Some((_, rule)) => rule,
        None => unreachable!("every duration unit has a rule"),
    }
}

/// Multi-unit durations: years down to seconds, then months down to seconds,
/// and so on to seconds alone. The earliest match wins; at the same position
/// the alternative starting with the larger unit does.
pub fn rule_duration() -> &'static ExpressionGroup {
    &RULE_DURATION
}
