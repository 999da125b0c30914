//! Lazy left-to-right scanning shared by expressions and groups.

use std::ops::Range;

use regex::Captures;

use super::expression::Expression;
use super::group::{ExpressionGroup, GroupMode};
use crate::{Context, Value};

/// One resolved match.
///
/// `start`/`end` are character offsets into the scanned text; `bytes` is the
/// same span in bytes, for slicing.
#[derive(Debug, Clone)]
pub struct MatchResult<'e> {
    pub start: usize,
    pub end: usize,
    pub bytes: Range<usize>,
    pub value: Value,
    /// The expression that produced the value.
    pub expression: &'e Expression,
}

enum Source<'e> {
    Expression(&'e Expression),
    Group(&'e ExpressionGroup),
}

/// A candidate found by the scanner, not yet resolved.
struct Hit<'e, 't> {
    expression: &'e Expression,
    span: Range<usize>,
    caps: Captures<'t>,
}

/// Converts increasing byte offsets to char offsets without rescanning.
#[derive(Debug, Default, Clone, Copy)]
struct CharCursor {
    byte: usize,
    chars: usize,
}

impl CharCursor {
    fn advance_to(&mut self, text: &str, byte: usize) -> usize {
        self.chars += text[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Iterator over the matches of an [`Expression`] or [`ExpressionGroup`].
///
/// Produced by `parse`; call `parse` again to restart.
pub struct Matches<'e, 't> {
    source: Source<'e>,
    text: &'t str,
    context: Context,
    pos: usize,
    cursor: CharCursor,
}

impl<'e, 't> Matches<'e, 't> {
    pub(crate) fn for_expression(expression: &'e Expression, text: &'t str, context: &Context) -> Self {
        Self::new(Source::Expression(expression), text, context)
    }

    pub(crate) fn for_group(group: &'e ExpressionGroup, text: &'t str, context: &Context) -> Self {
        Self::new(Source::Group(group), text, context)
    }

    fn new(source: Source<'e>, text: &'t str, context: &Context) -> Self {
        Matches { source, text, context: context.clone(), pos: 0, cursor: CharCursor::default() }
    }

    fn find_hit(&self) -> Option<Hit<'e, 't>> {
        let text = self.text;
        match self.source {
            Source::Expression(e) => {
                let caps = e.regex().captures_at(text, self.pos)?;
                let span = caps.get(0)?.range();
                Some(Hit { expression: e, span, caps })
            }
            Source::Group(g) => match g.mode() {
                GroupMode::Alternation => self.find_alternation(g),
                GroupMode::Smart => self.find_smart(g),
            },
        }
    }

    /// Scan the joined pattern, then hand the slice to the member that fully
    /// matches it.
    fn find_alternation(&self, group: &'e ExpressionGroup) -> Option<Hit<'e, 't>> {
        let text = self.text;
        let mut pos = self.pos;
        loop {
            let m = group.scanner()?.find_at(text, pos)?;
            let fragment = &text[m.range()];
            let found = group.get_matched_expression(fragment).and_then(|e| Some((e, e.anchored_captures(fragment)?)));
            match found {
                Some((expression, caps)) => return Some(Hit { expression, span: m.range(), caps }),
                None => {
                    tracing::warn!(fragment, "no member of the group matches the scanned slice");
                    pos = next_boundary(text, m.end().max(m.start() + 1));
                    if pos > text.len() {
                        return None;
                    }
                }
            }
        }
    }

    fn find_smart(&self, group: &'e ExpressionGroup) -> Option<Hit<'e, 't>> {
        let mut best: Option<Hit<'e, 't>> = None;
        for member in group.members() {
            let Some(caps) = member.regex().captures_at(self.text, self.pos) else {
                continue;
            };
            let Some(span) = caps.get(0).map(|m| m.range()) else {
                continue;
            };
            if best.as_ref().is_none_or(|b| span.start < b.span.start) {
                best = Some(Hit { expression: member, span, caps });
            }
        }
        if let Some(hit) = &best {
            tracing::trace!(alternative = hit.expression.name(), start = hit.span.start, "smart group selection");
        }
        best
    }
}

impl<'e, 't> Iterator for Matches<'e, 't> {
    type Item = MatchResult<'e>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pos > self.text.len() {
                return None;
            }
            let hit = self.find_hit()?;
            let Hit { expression, span, caps } = hit;

            if span.is_empty() {
                self.pos = next_boundary(self.text, span.end + 1);
                continue;
            }
            self.pos = span.end;

            let Some(value) = expression.resolve(&caps, &self.context) else {
                tracing::warn!(
                    expression = expression.name(),
                    fragment = &self.text[span.clone()],
                    "matched text has no value; skipping"
                );
                continue;
            };

            let start = self.cursor.advance_to(self.text, span.start);
            let end = self.cursor.advance_to(self.text, span.end);
            return Some(MatchResult { start, end, bytes: span, value, expression });
        }
    }
}

/// Smallest char boundary at or after `byte` (or one past the end).
fn next_boundary(text: &str, byte: usize) -> usize {
    let mut b = byte;
    while b < text.len() && !text.is_char_boundary(b) {
        b += 1;
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::Rational64;

    #[test]
    fn offsets_are_in_characters() {
        let e = Expression::value("x", Value::Number(Rational64::from_integer(1)), "خمسة").unwrap();
        let text = "مدة خمسة أيام";
        let m = e.parse(text, &Context::default()).next().unwrap();

        assert_eq!((m.start, m.end), (4, 8));
        assert_eq!(&text[m.bytes.clone()], "خمسة");
        assert_eq!(m.bytes, 7..15);
    }

    #[test]
    fn empty_matches_do_not_stall() {
        let e = Expression::value("maybe", Value::Number(Rational64::from_integer(1)), "ا?").unwrap();
        let found: Vec<_> = e.parse("بات", &Context::default()).collect();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].start, found[0].end), (1, 2));
    }

    #[test]
    fn iterator_adaptors_see_resolved_matches() {
        let e = Expression::value("five", Value::Number(Rational64::from_integer(5)), "خمسة").unwrap();
        let ctx = Context::default();
        let second = e.parse("خمسة أو خمسة", &ctx).find(|m| m.start > 0).unwrap();
        assert_eq!((second.start, second.end), (8, 12));
        assert_eq!(e.parse("لا شيء", &ctx).find(|_| true).map(|m| m.start), None);
    }

    #[test]
    fn matches_can_be_restarted() {
        let e = Expression::value("one", Value::Number(Rational64::from_integer(1)), "واحد").unwrap();
        let ctx = Context::default();
        assert_eq!(e.parse("واحد واحد", &ctx).count(), 2);
        assert_eq!(e.parse("واحد واحد", &ctx).take(1).count(), 1);
    }
}
