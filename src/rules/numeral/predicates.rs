use num_rational::Rational64;

use crate::Value;

/// Returns true when the value is a whole number.
pub fn is_integer(value: &Rational64) -> bool {
    value.is_integer()
}

/// Returns true when the value is a whole number within `MIN..=MAX`.
pub fn integer_between<const MIN: i64, const MAX: i64>(value: &Rational64) -> bool {
    value.is_integer() && (MIN..=MAX).contains(&value.to_integer())
}

/// The whole number carried by a numeral value, if any.
pub fn integer_value(value: &Value) -> Option<i64> {
    value.as_number().filter(is_integer).map(|n| n.to_integer())
}

/// A value usable as a day of the month (1 to 31).
pub fn day_of_month(value: &Value) -> Option<u32> {
    value.as_number().filter(integer_between::<1, 31>).and_then(|n| u32::try_from(n.to_integer()).ok())
}
