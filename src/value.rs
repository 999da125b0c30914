use std::fmt;

use chrono::{NaiveDateTime, Weekday};
use num_rational::Rational64;
use num_traits::ToPrimitive;

use crate::rules::time::helpers::shift::apply_time_value;

/// Duration units, ordered from the smallest to the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DurationUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl DurationUnit {
    /// Every unit, most significant first.
    pub const DESCENDING: [DurationUnit; 7] = [
        DurationUnit::Years,
        DurationUnit::Months,
        DurationUnit::Weeks,
        DurationUnit::Days,
        DurationUnit::Hours,
        DurationUnit::Minutes,
        DurationUnit::Seconds,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DurationUnit::Seconds => "seconds",
            DurationUnit::Minutes => "minutes",
            DurationUnit::Hours => "hours",
            DurationUnit::Days => "days",
            DurationUnit::Weeks => "weeks",
            DurationUnit::Months => "months",
            DurationUnit::Years => "years",
        }
    }

    /// The next smaller unit and how many of it make one of `self`.
    ///
    /// A month counts as 30 days.
    pub fn smaller(self) -> Option<(DurationUnit, i64)> {
        match self {
            DurationUnit::Seconds => None,
            DurationUnit::Minutes => Some((DurationUnit::Seconds, 60)),
            DurationUnit::Hours => Some((DurationUnit::Minutes, 60)),
            DurationUnit::Days => Some((DurationUnit::Hours, 24)),
            DurationUnit::Weeks => Some((DurationUnit::Days, 7)),
            DurationUnit::Months => Some((DurationUnit::Days, 30)),
            DurationUnit::Years => Some((DurationUnit::Months, 12)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationAmount {
    pub value: Rational64,
    pub unit: DurationUnit,
}

impl DurationAmount {
    pub fn new(value: Rational64, unit: DurationUnit) -> Self {
        DurationAmount { value, unit }
    }

    /// Re-express a fractional amount in the next smaller unit.
    ///
    /// Whole amounts and amounts already in seconds are returned unchanged.
    pub fn scaled_down(self) -> Self {
        if self.value.is_integer() {
            return self;
        }
        match self.unit.smaller() {
            Some((unit, factor)) => DurationAmount { value: self.value * factor, unit },
            None => self,
        }
    }
}

/// A duration made of one amount per unit, most significant unit first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DurationValue {
    amounts: Vec<DurationAmount>,
}

impl DurationValue {
    pub fn single(amount: DurationAmount) -> Self {
        DurationValue { amounts: vec![amount] }
    }

    /// Add `amount`, summing it into an existing amount of the same unit.
    pub fn push(&mut self, amount: DurationAmount) {
        match self.amounts.iter_mut().find(|a| a.unit == amount.unit) {
            Some(existing) => existing.value += amount.value,
            None => {
                self.amounts.push(amount);
                self.amounts.sort_by(|a, b| b.unit.cmp(&a.unit));
            }
        }
    }

    pub fn amounts(&self) -> &[DurationAmount] {
        &self.amounts
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> =
            self.amounts.iter().map(|a| format!("{} {}", format_number(&a.value), a.unit.name())).collect();
        f.write_str(&parts.join(" "))
    }
}

/// A weekday, optionally with a signed occurrence offset.
///
/// `n = None` names the weekday itself; `Some(1)` is the next occurrence,
/// `Some(-1)` the previous one, `Some(2)` the one after next, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeWeekday {
    pub weekday: Weekday,
    pub n: Option<i32>,
}

impl RelativeWeekday {
    pub fn bare(weekday: Weekday) -> Self {
        RelativeWeekday { weekday, n: None }
    }

    pub fn nth(self, n: i32) -> Self {
        RelativeWeekday { weekday: self.weekday, n: Some(n) }
    }
}

/// A calendar delta. Every field is optional; `None` means unspecified, not zero.
///
/// `years` through `seconds` are relative offsets; `weekday`, `month` and
/// `day` are absolute positions applied before the offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeValue {
    pub years: Option<i32>,
    pub months: Option<i32>,
    pub weeks: Option<i32>,
    pub days: Option<i32>,
    pub hours: Option<i32>,
    pub minutes: Option<i32>,
    pub seconds: Option<i32>,
    pub weekday: Option<RelativeWeekday>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl TimeValue {
    /// Apply this delta to `reference`.
    ///
    /// Returns `None` when the absolute fields cannot form a valid date.
    pub fn resolve(&self, reference: NaiveDateTime) -> Option<NaiveDateTime> {
        apply_time_value(self, reference)
    }
}

/// A resolved semantic value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A numeral or ordinal magnitude.
    Number(Rational64),
    Duration(DurationValue),
    Time(TimeValue),
}

impl Value {
    pub fn as_number(&self) -> Option<Rational64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<&DurationValue> {
        match self {
            Value::Duration(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&TimeValue> {
        match self {
            Value::Time(t) => Some(t),
            _ => None,
        }
    }
}

/// Format a rational without a trailing `.0` for whole numbers.
pub fn format_number(value: &Rational64) -> String {
    if value.is_integer() {
        format!("{}", value.to_integer())
    } else {
        match value.to_f64() {
            Some(v) => format!("{}", v),
            None => format!("{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fractional_amounts_scale_to_the_smaller_unit() {
        let amount = DurationAmount::new(Rational64::new(9, 4), DurationUnit::Minutes).scaled_down();
        assert_eq!(amount, DurationAmount::new(Rational64::from_integer(135), DurationUnit::Seconds));

        let whole = DurationAmount::new(Rational64::from_integer(2), DurationUnit::Minutes).scaled_down();
        assert_eq!(whole.unit, DurationUnit::Minutes);

        let seconds = DurationAmount::new(Rational64::new(1, 2), DurationUnit::Seconds).scaled_down();
        assert_eq!(seconds.unit, DurationUnit::Seconds);
    }

    #[test]
    fn push_merges_units_and_keeps_significance_order() {
        let mut d = DurationValue::default();
        d.push(DurationAmount::new(Rational64::from_integer(30), DurationUnit::Seconds));
        d.push(DurationAmount::new(Rational64::from_integer(2), DurationUnit::Hours));
        d.push(DurationAmount::new(Rational64::from_integer(15), DurationUnit::Seconds));

        let units: Vec<DurationUnit> = d.amounts().iter().map(|a| a.unit).collect();
        assert_eq!(units, vec![DurationUnit::Hours, DurationUnit::Seconds]);
        assert_eq!(d.amounts()[1].value, Rational64::from_integer(45));
        assert_eq!(d.to_string(), "2 hours 45 seconds");
    }

    #[test]
    fn numbers_format_without_trailing_zero() {
        assert_eq!(format_number(&Rational64::from_integer(23)), "23");
        assert_eq!(format_number(&Rational64::new(9, 2)), "4.5");
    }
}
