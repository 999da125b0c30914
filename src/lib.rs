//! Rule-based extraction of numerals, ordinals, durations and dates from
//! Arabic text.
//!
//! Rules are regular expressions assembled from small lexical fragments,
//! paired with resolvers that turn a match into a [`Value`]. See
//! [`engine`] for how expressions and groups scan and resolve text, and
//! [`parse_with`] for the entity-level API.

extern crate self as raqm;

#[macro_use]
mod macros;
mod api;
pub mod constants;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod rules;
pub mod value;

pub use api::{Context, Dimension, Dimensions, Entity, Options, ParseResult, parse, parse_dimension, parse_with};
pub use engine::{Expression, ExpressionGroup, GroupMode, MatchResult, Matches, Resolver};
pub use error::{BuildError, Result};
pub use value::{DurationAmount, DurationUnit, DurationValue, RelativeWeekday, TimeValue, Value};
