//! Cardinal numbers: spelled-out Arabic numerals, scale words and digits.
//!
//! The resolver maps a numeral fragment to an exact value; the rules wrap it
//! in expressions that other rule families embed through
//! [`rules::numeral_pattern`].

pub mod predicates;
pub mod resolver;
pub mod rules;
pub(crate) mod values;

#[cfg(test)]
mod tests;

pub use resolver::get_value;
pub use rules::{
    numeral_of, numeral_pattern, rule_numeral, rule_numeral_big, rule_numeral_decimals, rule_numeral_integers,
    rule_numeral_ones, rule_numeral_ones_tens, rule_numeral_scaled, rule_numeral_tens,
};
