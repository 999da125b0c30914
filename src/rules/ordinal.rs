//! Ordinal numbers: "الأول", "الثالثة عشرة", "الحادي والعشرين".

pub mod rules;
pub(crate) mod values;


pub use rules::{rule_ordinal, rule_ordinal_any_article, rule_ordinal_ones, rule_ordinal_tens};
