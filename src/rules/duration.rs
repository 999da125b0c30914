//! Durations: "ساعتين وربع", "3 أيام و 4 ساعات", "نص دقيقه".
//!
//! Every unit has a forms group decomposing one unit slot (numeral + noun,
//! fractions of the singular or dual noun, the bare dual, the bare singular).
//! Composite rules chain unit slots from the most significant unit down and
//! sum what each slot resolves to.

pub mod rules;
pub(crate) mod values;


pub use rules::{combined_expression, rule_duration, rule_duration_unit, unit_forms};
