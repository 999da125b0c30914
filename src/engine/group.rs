//! Ordered collections of expressions.

use regex::Regex;

use super::compile;
use super::expression::Expression;
use super::matches::Matches;
use crate::error::{BuildError, Result};
use crate::pattern::{bounded, demote_named_groups, non_capturing_group};
use crate::{Context, Value};

/// How a group scans its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// Members are merged into one alternation; earlier members win at a
    /// given position.
    Alternation,
    /// Members are alternative full expressions, most specific first. From
    /// each scan position every member is tried and the earliest match wins,
    /// ties going to the earlier member.
    Smart,
}

/// An ordered list of expressions that behaves like one rule.
///
/// ```text
/// members: [A, B, C]          join(): (?:A|B|C)   (named groups demoted)
///
/// "… B-text …" ── scan ──▶ slice "B-text"
///                           └─ get_matched_expression: A? no, B? yes ──▶ B resolves it
/// ```
pub struct ExpressionGroup {
    members: Vec<Expression>,
    mode: GroupMode,
    joined: String,
    /// Alternation-mode scanner; smart groups scan member by member.
    scanner: Option<Regex>,
}

impl ExpressionGroup {
    /// Merge `members` into one alternation, preserving their order.
    pub fn new(members: Vec<Expression>) -> Result<Self> {
        let group = Self::assemble(members, GroupMode::Alternation)?;
        let scanner = compile("group", &group.joined)?;
        Ok(ExpressionGroup { scanner: Some(scanner), ..group })
    }

    /// Ordered fallback over alternative full expressions.
    pub fn smart(members: Vec<Expression>) -> Result<Self> {
        Self::assemble(members, GroupMode::Smart)
    }

    fn assemble(members: Vec<Expression>, mode: GroupMode) -> Result<Self> {
        if members.is_empty() {
            return Err(BuildError::EmptyGroup);
        }
        let joined = non_capturing_group(members.iter().map(|m| demote_named_groups(m.source())));
        Ok(ExpressionGroup { members, mode, joined, scanner: None })
    }

    /// Require word boundaries around every match when scanning.
    ///
    /// Only affects standalone scanning; [`join`](Self::join) is unchanged so
    /// the group can still be embedded next to other fragments. Smart groups
    /// are returned as is.
    pub fn bounded(self) -> Result<Self> {
        if self.mode == GroupMode::Smart {
            return Ok(self);
        }
        let scanner = compile("group", &bounded(&self.joined))?;
        Ok(ExpressionGroup { scanner: Some(scanner), ..self })
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }

    pub fn members(&self) -> &[Expression] {
        &self.members
    }

    /// The alternation of every member's pattern, for embedding in larger rules.
    pub fn join(&self) -> &str {
        &self.joined
    }

    /// The first member whose pattern matches the whole of `text`.
    pub fn get_matched_expression(&self, text: &str) -> Option<&Expression> {
        self.members.iter().find(|m| m.is_full_match(text))
    }

    /// Resolve `fragment` through the member that matches it.
    pub fn value_of(&self, fragment: &str, context: &Context) -> Option<Value> {
        self.get_matched_expression(fragment)?.evaluate(fragment, context)
    }

    /// Scan `text` for non-overlapping matches, left to right.
    pub fn parse<'e, 't>(&'e self, text: &'t str, context: &Context) -> Matches<'e, 't> {
        Matches::for_group(self, text, context)
    }

    pub(crate) fn scanner(&self) -> Option<&Regex> {
        self.scanner.as_ref()
    }
}

impl std::fmt::Debug for ExpressionGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpressionGroup").field("mode", &self.mode).field("members", &self.members).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    fn number(n: i64) -> Value {
        Value::Number(Rational64::from_integer(n))
    }

    fn ctx() -> Context {
        Context::default()
    }

    #[test]
    fn empty_groups_are_rejected() {
        assert!(matches!(ExpressionGroup::new(Vec::new()), Err(BuildError::EmptyGroup)));
        assert!(matches!(ExpressionGroup::smart(Vec::new()), Err(BuildError::EmptyGroup)));
    }

    #[test]
    fn join_preserves_order_and_demotes_names() {
        let group = ExpressionGroup::new(vec![
            Expression::computed("a", "(?P<x>a)b", |_, _| Some(number(1))).unwrap(),
            Expression::value("c", number(2), "c").unwrap(),
        ])
        .unwrap();
        assert_eq!(group.join(), "(?:(?:a)b|c)");
    }

    #[test]
    fn matched_expression_is_the_first_full_match() {
        let group = ExpressionGroup::new(vec![
            Expression::value("two hundred", number(200), "مئتين").unwrap(),
            Expression::value("hundred", number(100), "مئ[ةه]").unwrap(),
            Expression::value("any", number(0), r"\w+").unwrap(),
        ])
        .unwrap();

        let hit = group.get_matched_expression("مئه").unwrap();
        assert!(std::ptr::eq(hit, &group.members()[1]));
        assert_eq!(group.get_matched_expression("مئتين").unwrap().name(), "two hundred");
        assert_eq!(group.get_matched_expression("كلمة").unwrap().name(), "any");
        assert!(group.get_matched_expression("").is_none());
        assert_eq!(group.value_of("مئتين", &ctx()), Some(number(200)));
    }

    #[test]
    fn alternation_scan_attributes_each_match_to_its_member() {
        let group = ExpressionGroup::new(vec![
            Expression::value("yes", number(1), "نعم").unwrap(),
            Expression::value("no", number(0), "لا").unwrap(),
        ])
        .unwrap();

        let found: Vec<_> = group.parse("لا ثم نعم", &ctx()).collect();
        let names: Vec<&str> = found.iter().map(|m| m.expression.name()).collect();
        assert_eq!(names, vec!["no", "yes"]);
        assert_eq!((found[1].start, found[1].end), (6, 9));
    }

    #[test]
    fn bounded_groups_skip_matches_inside_words() {
        let six = Expression::value("six", number(6), "ست[ةه]?").unwrap();
        let group = ExpressionGroup::new(vec![six]).unwrap().bounded().unwrap();
        assert_eq!(group.parse("مستشفى", &ctx()).count(), 0);
        assert_eq!(group.parse("ستة", &ctx()).count(), 1);
    }

    #[test]
    fn smart_groups_prefer_the_earliest_match_then_the_earlier_member() {
        let group = ExpressionGroup::smart(vec![
            Expression::value("ab", number(2), "ab").unwrap(),
            Expression::value("b", number(1), "b").unwrap(),
            Expression::value("a", number(0), "a").unwrap(),
        ])
        .unwrap();

        let names: Vec<String> = group.parse("b ab a", &ctx()).map(|m| m.expression.name().to_string()).collect();
        assert_eq!(names, vec!["b", "ab", "a"]);
    }
}
