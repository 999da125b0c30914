use chrono::{NaiveDate, NaiveDateTime, Weekday};
use pretty_assertions::assert_eq;

use crate::Context;
use crate::rules::time::rule_time;
use crate::value::{RelativeWeekday, TimeValue};

/// Context pinned to a given date at midnight.
fn on(year: i32, month: u32, day: u32) -> Context {
    let reference_time = NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap();
    Context { reference_time }
}

fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

/// Run the time rules over `input`, expecting one match spanning all of it.
fn time_of_in(input: &str, ctx: &Context) -> TimeValue {
    let found: Vec<_> = rule_time().parse(input, ctx).collect();
    assert_eq!(found.len(), 1, "expected a single time in '{}', got {:#?}", input, found);
    let m = &found[0];
    assert_eq!((m.start, m.end), (0, input.chars().count()), "partial match for '{}'", input);
    match m.value.as_time() {
        Some(t) => *t,
        None => panic!("'{}' resolved to {:?}", input, m.value),
    }
}

fn time_of(input: &str) -> TimeValue {
    time_of_in(input, &Context::default())
}

fn days(n: i32) -> TimeValue {
    TimeValue { days: Some(n), ..TimeValue::default() }
}

fn months(n: i32) -> TimeValue {
    TimeValue { months: Some(n), ..TimeValue::default() }
}

fn weekday(weekday: Weekday, n: Option<i32>) -> TimeValue {
    TimeValue { weekday: Some(RelativeWeekday { weekday, n }), ..TimeValue::default() }
}

fn month(month: u32, years: Option<i32>) -> TimeValue {
    TimeValue { month: Some(month), years, ..TimeValue::default() }
}

fn check(cases: &[(TimeValue, &str)]) {
    for (expected, input) in cases {
        assert_eq!(time_of(input), *expected, "input '{}'", input);
    }
}

#[test]
fn now() {
    let expected = TimeValue {
        years: Some(0),
        months: Some(0),
        days: Some(0),
        hours: Some(0),
        minutes: Some(0),
        seconds: Some(0),
        ..TimeValue::default()
    };
    for input in ["الآن", "الان", "هذا الوقت", "هسة", "في الحال"] {
        assert_eq!(time_of(input), expected, "input '{}'", input);
    }
}

#[test]
fn days_relative_to_today() {
    check(&[
        (days(0), "اليوم"),
        (days(0), "في هذا اليوم"),
        (days(-1), "أمس"),
        (days(-1), "امبارح"),
        (days(-1), "البارحة"),
        (days(-1), "قبل يوم"),
        (days(-1), "اليوم السابق"),
        (days(-2), "أول أمس"),
        (days(-2), "قبل امس"),
        (days(-2), "قبل يومين"),
        (days(-2), "اليوم قبل الماضي"),
        (days(1), "غدا"),
        (days(1), "بكرة"),
        (days(1), "اليوم التالي"),
        (days(1), "بعد يوم"),
        (days(2), "بعد غد"),
        (days(2), "بعد بكرة"),
        (days(2), "بعد يومين"),
        (days(2), "اليوم بعد القادم"),
    ]);
}

#[test]
fn counted_days() {
    check(&[
        (days(3), "بعد 3 أيام"),
        (days(20), "بعد عشرين يوما"),
        (days(11), "بعد احدى عشر يوما"),
        (days(-5), "قبل خمسة أيام"),
    ]);
}

#[test]
fn fractional_counts_are_not_days() {
    let ctx = Context::default();
    assert_eq!(rule_time().parse("بعد 2.5 أيام", &ctx).count(), 0);
}

#[test]
fn weekdays() {
    check(&[
        (weekday(Weekday::Fri, None), "الجمعة"),
        (weekday(Weekday::Mon, None), "يوم الاثنين"),
        (weekday(Weekday::Tue, Some(1)), "يوم الثلاثاء القادم"),
        (weekday(Weekday::Sun, Some(-1)), "الاحد الماضي"),
        (weekday(Weekday::Thu, Some(2)), "الخميس بعد القادم"),
        (weekday(Weekday::Tue, Some(-2)), "الثلاثاء قبل الماضي"),
        (weekday(Weekday::Sat, Some(1)), "السبت الجاي"),
    ]);
}

#[test]
fn specific_months() {
    check(&[
        (month(3, None), "مارس"),
        (month(3, None), "شهر آذار"),
        (month(7, None), "شهر 7"),
        (month(9, None), "شهر تسعة"),
        (month(12, None), "كانون الأول"),
        (month(1, None), "كانون الثاني"),
        (month(4, None), "ابريل"),
        (month(11, None), "شهر احدى عشر"),
        (month(11, None), "شهر إحدى عشرة"),
        (month(11, None), "شهر احد عشر"),
        (month(12, None), "شهر اثنا عشر"),
        (month(1, None), "شهر واحد"),
    ]);
}

#[test]
fn next_and_previous_months_roll_over_the_year() {
    // Reference month is February.
    check(&[
        (month(1, Some(1)), "يناير القادم"),
        (month(8, Some(0)), "أغسطس القادم"),
        (month(2, Some(1)), "شباط القادم"),
        (month(3, Some(-1)), "مارس الماضي"),
        (month(1, Some(0)), "يناير الماضي"),
        (month(3, Some(1)), "مارس بعد القادم"),
        (month(1, Some(-1)), "يناير قبل الماضي"),
        (month(9, Some(0)), "شهر 9 القادم"),
        (month(11, Some(0)), "شهر احدى عشر القادم"),
    ]);
}

#[test]
fn rollover_follows_the_context() {
    let june = on(2013, 6, 15);
    assert_eq!(time_of_in("يناير القادم", &june), month(1, Some(1)));
    assert_eq!(time_of_in("أغسطس القادم", &june), month(8, Some(0)));
    assert_eq!(time_of_in("أغسطس الماضي", &june), month(8, Some(-1)));
}

#[test]
fn months_relative_to_this_one() {
    check(&[
        (months(0), "الشهر"),
        (months(0), "هذا الشهر"),
        (months(0), "في هذا الشهر"),
        (months(-1), "الشهر الماضي"),
        (months(-1), "قبل شهر"),
        (months(-2), "الشهر قبل الماضي"),
        (months(-2), "قبل شهرين"),
        (months(1), "الشهر القادم"),
        (months(1), "بعد شهر"),
        (months(2), "بعد شهرين"),
        (months(2), "الشهر بعد القادم"),
        (months(3), "بعد 3 أشهر"),
        (months(11), "بعد 11 شهرا"),
        (months(-4), "قبل اربعة شهور"),
    ]);
}

#[test]
fn day_and_month_compositions() {
    let date = |m, d| TimeValue { month: Some(m), day: Some(d), ..TimeValue::default() };
    let this_month = |d| TimeValue { months: Some(0), day: Some(d), ..TimeValue::default() };
    check(&[
        (date(3, 5), "الخامس من شهر مارس"),
        (date(3, 15), "15 مارس"),
        (date(1, 21), "الحادي والعشرين من كانون الثاني"),
        (date(3, 15), "خمسة عشر من شهر آذار"),
        (date(2, 29), "29 فبراير"),
        (date(10, 1), "يوم الأحد الأول من أكتوبر"),
        (this_month(15), "يوم الأحد 15 من هذا الشهر"),
        (this_month(21), "الحادي والعشرين من الشهر"),
        (this_month(3), "الثالث من هذا الشهر"),
    ]);
}

#[test]
fn impossible_days_are_dropped() {
    let ctx = Context::default();
    assert_eq!(rule_time().parse("30 فبراير", &ctx).count(), 0);
    assert_eq!(rule_time().parse("31 نيسان", &ctx).count(), 0);
    assert_eq!(rule_time().parse("40 من هذا الشهر", &ctx).count(), 0);
}

#[test]
fn times_in_a_sentence() {
    let ctx = Context::default();
    let found: Vec<_> = rule_time().parse("سافرت أمس وسأعود يوم الخميس القادم", &ctx).collect();
    let values: Vec<TimeValue> = found.iter().filter_map(|m| m.value.as_time().copied()).collect();

    assert_eq!(values, vec![days(-1), weekday(Weekday::Thu, Some(1))]);
    assert_eq!((found[0].start, found[0].end), (6, 9));
}

#[test]
fn values_resolve_against_the_reference_time() {
    // Tuesday 2013-02-12.
    let ctx = Context::default();
    let resolve = |input: &str| time_of(input).resolve(ctx.reference_time);

    assert_eq!(resolve("بعد 3 أيام"), Some(datetime(2013, 2, 15)));
    assert_eq!(resolve("أمس"), Some(datetime(2013, 2, 11)));
    assert_eq!(resolve("الثلاثاء القادم"), Some(datetime(2013, 2, 19)));
    assert_eq!(resolve("الجمعة الماضية"), Some(datetime(2013, 2, 8)));
    assert_eq!(resolve("الشهر الماضي"), Some(datetime(2013, 1, 12)));
    assert_eq!(resolve("الخامس من شهر مارس"), Some(datetime(2013, 3, 5)));
    assert_eq!(resolve("مارس الماضي"), Some(datetime(2012, 3, 12)));
    // Clamped to the last day of a common year's February.
    assert_eq!(resolve("29 فبراير"), Some(datetime(2013, 2, 28)));
}
