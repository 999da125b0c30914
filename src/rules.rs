//! Rule families, one module per dimension.
//!
//! Each family exposes `rule_*` accessors returning lazily built,
//! process-wide rule sets.

pub mod duration;
pub mod numeral;
pub mod ordinal;
pub mod time;
