use num_rational::Rational64;
use num_traits::CheckedMul;
use once_cell::sync::Lazy;

use super::resolver::{get_value, lookup, numeral_value, parse_digits};
use super::values::{
    CONNECTOR, DECIMAL, INTEGER, TEN, TENS_FROM_THIRTY, TWENTY, big_values, ones, scales, teens,
};
use crate::error::Result;
use crate::pattern::{SPACE_OR_NONE, named_group, non_capturing_group};
use crate::{Context, Expression, ExpressionGroup, Value};

fn number(value: Rational64) -> Value {
    Value::Number(value)
}

/// Whole-match text of the captures.
fn matched<'t>(caps: &regex::Captures<'t>) -> Option<&'t str> {
    caps.get(0).map(|m| m.as_str())
}

/// One to nine.
fn ones_pattern() -> String {
    non_capturing_group(ones())
}

/// One to nineteen, teens first so `ثلاثة عشر` is not cut after `ثلاثة`.
fn up_to_nineteen_pattern() -> String {
    let mut parts = teens();
    parts.extend(ones().iter().map(|p| p.to_string()));
    parts.push(TEN.to_string());
    non_capturing_group(parts)
}

fn perfect_tens_pattern() -> String {
    non_capturing_group([TWENTY, TENS_FROM_THIRTY])
}

/// `<ones> و<tens>` or a bare tens word.
fn tens_pattern() -> String {
    let compound = format!("{}{}{}", ones_pattern(), CONNECTOR, perfect_tens_pattern());
    non_capturing_group([compound, perfect_tens_pattern()])
}

fn numeral_scaled() -> Result<Expression> {
    let count = non_capturing_group([INTEGER.to_string(), tens_pattern(), up_to_nineteen_pattern()]);
    let count = named_group("count", count);
    let scale = named_group("scale", non_capturing_group(scales()));
    Expression::computed("numeral (scaled)", format!("{}{}{}", count, SPACE_OR_NONE, scale), |caps, _| {
        let count = numeral_value(caps.name("count")?.as_str())?;
        let scale = lookup(caps.name("scale")?.as_str())?;
        Some(number(count.checked_mul(&scale)?))
    })
}

fn numeral_tens() -> Result<Expression> {
    Expression::computed("numeral (tens)", tens_pattern(), |caps, _| get_value(matched(caps)?).map(number))
}

fn numeral_big() -> Result<Expression> {
    Expression::computed("numeral (scale names)", non_capturing_group(big_values()), |caps, _| {
        lookup(matched(caps)?).map(number)
    })
}

fn numeral_ones() -> Result<Expression> {
    Expression::computed("numeral (1..19)", up_to_nineteen_pattern(), |caps, _| get_value(matched(caps)?).map(number))
}

fn numeral_decimals() -> Result<Expression> {
    Expression::computed("numeral (decimal digits)", DECIMAL, |caps, _| parse_digits(matched(caps)?).map(number))
}

fn numeral_integers() -> Result<Expression> {
    Expression::computed("numeral (integer digits)", INTEGER, |caps, _| parse_digits(matched(caps)?).map(number))
}

static NUMERAL_SCALED: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_scaled()));
static NUMERAL_TENS: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_tens()));
static NUMERAL_BIG: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_big()));
static NUMERAL_ONES: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_ones()));
static NUMERAL_DECIMALS: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_decimals()));
static NUMERAL_INTEGERS: Lazy<Expression> = Lazy::new(|| crate::built!(numeral_integers()));

static RULE_NUMERAL: Lazy<ExpressionGroup> = Lazy::new(|| {
    crate::built!(
        ExpressionGroup::new(vec![
            crate::built!(numeral_scaled()),
            crate::built!(numeral_tens()),
            crate::built!(numeral_big()),
            crate::built!(numeral_ones()),
            crate::built!(numeral_decimals()),
            crate::built!(numeral_integers()),
        ])
        .and_then(ExpressionGroup::bounded)
    )
});

/// Numbers a day of the month is written with: tens, ones and digits.
static NUMERAL_ONES_TENS: Lazy<ExpressionGroup> = Lazy::new(|| {
    crate::built!(ExpressionGroup::new(vec![
        crate::built!(numeral_tens()),
        crate::built!(numeral_ones()),
        crate::built!(numeral_integers()),
    ]))
});

/// `<count> <scale>`: "ثلاثة آلاف" = 3000, "خمسمائة" = 500.
pub fn rule_numeral_scaled() -> &'static Expression {
    &NUMERAL_SCALED
}

/// "ثلاثة وعشرين" = 23, "تسعين" = 90.
pub fn rule_numeral_tens() -> &'static Expression {
    &NUMERAL_TENS
}

/// Scale names on their own: "مئتين" = 200, "مليون" = 10^6.
pub fn rule_numeral_big() -> &'static Expression {
    &NUMERAL_BIG
}

pub fn rule_numeral_ones() -> &'static Expression {
    &NUMERAL_ONES
}

pub fn rule_numeral_decimals() -> &'static Expression {
    &NUMERAL_DECIMALS
}

pub fn rule_numeral_integers() -> &'static Expression {
    &NUMERAL_INTEGERS
}

/// Every numeral rule, most specific first, bounded by word boundaries.
pub fn rule_numeral() -> &'static ExpressionGroup {
    &RULE_NUMERAL
}

pub fn rule_numeral_ones_tens() -> &'static ExpressionGroup {
    &NUMERAL_ONES_TENS
}

/// The numeral alternation, unbounded, for embedding in larger rules.
pub fn numeral_pattern() -> &'static str {
    RULE_NUMERAL.join()
}

/// Resolve a fragment matched by [`numeral_pattern`].
pub fn numeral_of(fragment: &str, context: &Context) -> Option<Rational64> {
    RULE_NUMERAL.value_of(fragment, context)?.as_number()
}
