use num_rational::Rational64;
use once_cell::sync::Lazy;
use regex::Regex;

use super::values::{ARTICLE, OPTIONAL_ARTICLE, compound_ones_table, ones_table};
use crate::engine::compile;
use crate::error::Result;
use crate::pattern::{named_group, non_capturing_group};
use crate::rules::numeral::resolver::tens_multiplier;
use crate::rules::numeral::values::{CONNECTOR, TENS_FROM_THIRTY, TWENTY};
use crate::{Expression, ExpressionGroup, Value};

fn anchored_table(name: &str, table: Vec<(String, i64)>) -> Vec<(Regex, i64)> {
    table
        .into_iter()
        .map(|(pattern, n)| (crate::built!(compile(name, &format!("^{}{}$", OPTIONAL_ARTICLE, pattern))), n))
        .collect()
}

static ONES: Lazy<Vec<(Regex, i64)>> = Lazy::new(|| anchored_table("ordinal table", ones_table()));
static COMPOUND_ONES: Lazy<Vec<(Regex, i64)>> =
    Lazy::new(|| anchored_table("compound ordinal table", compound_ones_table()));

fn find(table: &[(Regex, i64)], text: &str) -> Option<i64> {
    let text = text.trim();
    table.iter().find(|(re, _)| re.is_match(text)).map(|(_, n)| *n)
}

fn ordinal_ones(article: &str) -> Result<Expression> {
    let pattern = format!("{}{}", article, non_capturing_group(ones_table().into_iter().map(|(p, _)| p)));
    Expression::computed("ordinal (1..19)", pattern, |caps, _| {
        let n = find(&ONES, caps.get(0)?.as_str())?;
        Some(Value::Number(Rational64::from_integer(n)))
    })
}

fn ordinal_tens(article: &str) -> Result<Expression> {
    let ones = named_group("ones", non_capturing_group(compound_ones_table().into_iter().map(|(p, _)| p)));
    let tens = named_group("tens", non_capturing_group([TWENTY, TENS_FROM_THIRTY]));
    let pattern = format!("(?:{article}{ones}{CONNECTOR})?{article}{tens}");
    Expression::computed("ordinal (tens)", pattern, |caps, _| {
        let ones = match caps.name("ones") {
            Some(m) => find(&COMPOUND_ONES, m.as_str())?,
            None => 0,
        };
        let tens = tens_multiplier(caps.name("tens")?.as_str())?;
        Some(Value::Number(tens * 10 + ones))
    })
}

fn ordinals(article: &str) -> Result<ExpressionGroup> {
    ExpressionGroup::new(vec![ordinal_tens(article)?, ordinal_ones(article)?])?.bounded()
}

static ORDINAL_ONES: Lazy<Expression> = Lazy::new(|| crate::built!(ordinal_ones(ARTICLE)));
static ORDINAL_TENS: Lazy<Expression> = Lazy::new(|| crate::built!(ordinal_tens(ARTICLE)));
static RULE_ORDINAL: Lazy<ExpressionGroup> = Lazy::new(|| crate::built!(ordinals(ARTICLE)));
static ORDINAL_ANY_ARTICLE: Lazy<ExpressionGroup> = Lazy::new(|| crate::built!(ordinals(OPTIONAL_ARTICLE)));

/// First to nineteenth, masculine and feminine: "الأول", "الثانية عشرة".
pub fn rule_ordinal_ones() -> &'static Expression {
    &ORDINAL_ONES
}

/// "العشرين" = 20, "الحادي والعشرين" = 21.
pub fn rule_ordinal_tens() -> &'static Expression {
    &ORDINAL_TENS
}

/// Ordinals written with the article.
///
/// Without it most ordinals are also nouns or adjectives ("ثانية" is a
/// second, "أول" is also "first of"), so free text is only scanned for the
/// definite forms.
pub fn rule_ordinal() -> &'static ExpressionGroup {
    &RULE_ORDINAL
}

/// Ordinals with or without the article, for rules where the surrounding
/// words already mark a position ("أول أكتوبر", "خامس يوم").
pub fn rule_ordinal_any_article() -> &'static ExpressionGroup {
    &ORDINAL_ANY_ARTICLE
}
