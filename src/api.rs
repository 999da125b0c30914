use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::ExpressionGroup;
use crate::engine::MatchResult;
use crate::rules::{duration, numeral, ordinal, time};
use crate::value::{Value, format_number};

/// Parsing context.
///
/// This holds what is needed to resolve relative expressions ("بكرة",
/// "الشهر القادم").
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference datetime relative expressions are resolved against.
    pub reference_time: NaiveDateTime,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            let date = NaiveDate::from_ymd_opt(2013, 2, 12).unwrap_or_default();
            Self { reference_time: NaiveDateTime::new(date, NaiveTime::MIN) }
        } else {
            Self { reference_time: Local::now().naive_local() }
        }
    }
}

/// An entity kind the parser can extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Numeral,
    Ordinal,
    Duration,
    Time,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [Dimension::Numeral, Dimension::Ordinal, Dimension::Duration, Dimension::Time];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Numeral => "numeral",
            Dimension::Ordinal => "ordinal",
            Dimension::Duration => "duration",
            Dimension::Time => "time",
        }
    }

    fn flag(self) -> Dimensions {
        match self {
            Dimension::Numeral => Dimensions::NUMERAL,
            Dimension::Ordinal => Dimensions::ORDINAL,
            Dimension::Duration => Dimensions::DURATION,
            Dimension::Time => Dimensions::TIME,
        }
    }

    fn rules(self) -> &'static ExpressionGroup {
        match self {
            Dimension::Numeral => numeral::rule_numeral(),
            Dimension::Ordinal => ordinal::rule_ordinal(),
            Dimension::Duration => duration::rule_duration(),
            Dimension::Time => time::rule_time(),
        }
    }
}

bitflags::bitflags! {
    /// A selection of dimensions to extract.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Dimensions: u8 {
        const NUMERAL  = 1 << 0;
        const ORDINAL  = 1 << 1;
        const DURATION = 1 << 2;
        const TIME     = 1 << 3;
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::all()
    }
}

/// Options that affect which entities are extracted.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub dimensions: Dimensions,
}

/// A resolved entity found in input.
///
/// `start`/`end` are character offsets into the original input.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Name of the dimension, e.g. `"time"` or `"duration"`.
    pub name: String,
    /// Slice of the original input that matched.
    pub body: String,
    pub value: Value,
    /// Canonical string form of `value`; times are resolved against the
    /// context's reference time.
    pub resolved: String,
    pub start: usize,
    pub end: usize,
    /// Name of the rule that produced this entity.
    pub rule: String,
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub text: String,
    /// Entities ordered by `(start, end)`. Different dimensions may overlap.
    pub results: Vec<Entity>,
    /// Total elapsed time spent matching and resolving.
    pub elapsed: Duration,
}

/// Parse `text` for every dimension with a default [`Context`].
///
/// # Example
/// ```
/// use raqm::parse;
///
/// let out = parse("بعد ساعتين");
/// assert!(out.results.iter().any(|e| e.name == "duration" && e.resolved == "2 hours"));
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, &Context::default(), &Options::default())
}

/// Parse `text` for the dimensions selected in `options`.
///
/// Use this when you want deterministic parsing by supplying a reference time.
pub fn parse_with(text: &str, context: &Context, options: &Options) -> ParseResult {
    let started = Instant::now();
    let mut results: Vec<Entity> = Dimension::ALL
        .into_iter()
        .filter(|dim| options.dimensions.contains(dim.flag()))
        .flat_map(|dim| parse_dimension(text, dim, context))
        .collect();
    results.sort_by_key(|e| (e.start, e.end));

    let elapsed = started.elapsed();
    tracing::debug!(entities = results.len(), ?elapsed, "parsed");
    ParseResult { text: text.to_string(), results, elapsed }
}

/// Extract the entities of a single dimension, in input order.
pub fn parse_dimension(text: &str, dimension: Dimension, context: &Context) -> Vec<Entity> {
    dimension.rules().parse(text, context).filter_map(|m| to_entity(text, dimension, context, m)).collect()
}

fn to_entity(text: &str, dimension: Dimension, context: &Context, m: MatchResult<'_>) -> Option<Entity> {
    let body = text.get(m.bytes.clone())?.to_string();
    let Some(resolved) = resolve(&m.value, context) else {
        tracing::warn!(
            dimension = dimension.name(),
            body = %body,
            "value cannot be resolved against the reference time"
        );
        return None;
    };
    tracing::trace!(
        dimension = dimension.name(),
        rule = m.expression.name(),
        body = %body,
        resolved = %resolved,
        "entity"
    );
    Some(Entity {
        name: dimension.name().to_string(),
        body,
        value: m.value,
        resolved,
        start: m.start,
        end: m.end,
        rule: m.expression.name().to_string(),
    })
}

fn resolve(value: &Value, context: &Context) -> Option<String> {
    match value {
        Value::Number(n) => Some(format_number(n)),
        Value::Duration(d) => Some(d.to_string()),
        Value::Time(t) => t.resolve(context.reference_time).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}
