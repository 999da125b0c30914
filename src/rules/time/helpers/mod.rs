//! Calendar arithmetic for resolving time values against a reference date.

pub mod shift;

pub use shift::{add_months, apply_time_value, days_in_month, shift_to_weekday};
