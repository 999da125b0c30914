//! A single rule: one pattern and the value it produces.

use regex::{Captures, Regex};

use super::compile;
use super::matches::Matches;
use crate::error::Result;
use crate::{Context, Value};

/// Computes a value from the captures of a successful match.
///
/// Returning `None` means the captured text could not be mapped to a value;
/// the match is skipped.
pub type Resolver = Box<dyn Fn(&Captures<'_>, &Context) -> Option<Value> + Send + Sync>;

enum Output {
    Value(Value),
    Computed(Resolver),
}

/// A compiled pattern paired with its output.
///
/// Immutable once built. Groups hand out references to their members, so
/// identity (`std::ptr::eq`) tells which member fired.
pub struct Expression {
    name: String,
    source: String,
    regex: Regex,
    /// `^(?:source)$`, used by [`Expression::evaluate`].
    anchored: Regex,
    output: Output,
}

impl Expression {
    /// An expression that always produces `value`.
    pub fn value(name: impl Into<String>, value: Value, pattern: impl Into<String>) -> Result<Self> {
        Self::build(name.into(), pattern.into(), Output::Value(value))
    }

    /// An expression whose value is computed from the match.
    pub fn computed<F>(name: impl Into<String>, pattern: impl Into<String>, resolver: F) -> Result<Self>
    where
        F: Fn(&Captures<'_>, &Context) -> Option<Value> + Send + Sync + 'static,
    {
        Self::build(name.into(), pattern.into(), Output::Computed(Box::new(resolver)))
    }

    fn build(name: String, source: String, output: Output) -> Result<Self> {
        let regex = compile(&name, &source)?;
        let anchored = compile(&name, &format!("^(?:{source})$"))?;
        Ok(Expression { name, source, regex, anchored, output })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern source, named groups included.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Scan `text` for non-overlapping matches, left to right.
    pub fn parse<'e, 't>(&'e self, text: &'t str, context: &Context) -> Matches<'e, 't> {
        Matches::for_expression(self, text, context)
    }

    /// True when the whole of `fragment` matches this pattern.
    pub fn is_full_match(&self, fragment: &str) -> bool {
        self.anchored.is_match(fragment)
    }

    /// Resolve `fragment` as a whole, e.g. a slice cut out of a joined match.
    pub fn evaluate(&self, fragment: &str, context: &Context) -> Option<Value> {
        let caps = self.anchored.captures(fragment)?;
        self.resolve(&caps, context)
    }

    pub(crate) fn anchored_captures<'t>(&self, fragment: &'t str) -> Option<Captures<'t>> {
        self.anchored.captures(fragment)
    }

    pub(crate) fn resolve(&self, caps: &Captures<'_>, context: &Context) -> Option<Value> {
        match &self.output {
            Output::Value(v) => Some(v.clone()),
            Output::Computed(resolver) => resolver(caps, context),
        }
    }
}

impl std::fmt::Debug for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let output = match &self.output {
            Output::Value(v) => format!("{:?}", v),
            Output::Computed(_) => "<function>".to_string(),
        };
        f.debug_struct("Expression").field("name", &self.name).field("output", &output).finish()
    }
}
