use num_rational::Rational64;
use pretty_assertions::assert_eq;

use crate::Context;
use crate::rules::numeral::rules::{rule_numeral, rule_numeral_scaled, rule_numeral_tens};

#[test]
fn numeral_examples_matching() {
    // Array of (expected_value, input_string)
    let cases: Vec<(Rational64, &str)> = vec![
        (Rational64::from_integer(1), "واحد"),
        (Rational64::from_integer(1), "واحدة"),
        (Rational64::from_integer(2), "اثنين"),
        (Rational64::from_integer(2), "اثنتان"),
        (Rational64::from_integer(3), "ثلاثة"),
        (Rational64::from_integer(3), "تلات"),
        (Rational64::from_integer(6), "ستة"),
        (Rational64::from_integer(8), "ثمانية"),
        (Rational64::from_integer(8), "تمن"),
        (Rational64::from_integer(10), "عشرة"),
        (Rational64::from_integer(11), "احدى عشرة"),
        (Rational64::from_integer(11), "احدعشر"),
        (Rational64::from_integer(12), "اثنا عشر"),
        (Rational64::from_integer(13), "ثلاثة عشر"),
        (Rational64::from_integer(19), "تسعة عشر"),
        (Rational64::from_integer(20), "عشرين"),
        (Rational64::from_integer(23), "ثلاثة وعشرين"),
        (Rational64::from_integer(45), "خمسة و أربعين"),
        (Rational64::from_integer(90), "تسعون"),
        (Rational64::from_integer(100), "مائة"),
        (Rational64::from_integer(100), "ميه"),
        (Rational64::from_integer(200), "مئتين"),
        (Rational64::from_integer(500), "خمسمائة"),
        (Rational64::from_integer(800), "ثمانمية"),
        (Rational64::from_integer(2000), "ألفين"),
        (Rational64::from_integer(3000), "ثلاثة آلاف"),
        (Rational64::from_integer(10_000), "عشرة الاف"),
        (Rational64::from_integer(1_000_000), "مليون"),
        (Rational64::from_integer(3_000_000), "3 ملايين"),
        (Rational64::from_integer(42), "42"),
        (Rational64::from_integer(42), "٤٢"),
        (Rational64::from_integer(42), "۴۲"),
        (Rational64::new(9, 2), "4.5"),
        (Rational64::new(9, 2), "٤٫٥"),
    ];

    let ctx = Context::default();
    for (expected, input) in cases {
        let found: Vec<_> = rule_numeral().parse(input, &ctx).collect();
        assert_eq!(found.len(), 1, "expected a single numeral in '{}', got {:#?}", input, found);
        let m = &found[0];
        assert_eq!(
            (m.start, m.end, m.value.as_number()),
            (0, input.chars().count(), Some(expected)),
            "numeral '{}' resolved by {}",
            input,
            m.expression.name()
        );
    }
}

#[test]
fn fractions_are_not_numerals() {
    let ctx = Context::default();
    for input in ["نص", "نصف", "ربع", "ثلث"] {
        assert_eq!(rule_numeral().parse(input, &ctx).count(), 0, "'{}' should not be a numeral", input);
    }
}

#[test]
fn numerals_inside_a_sentence() {
    let ctx = Context::default();
    let found: Vec<_> = rule_numeral().parse("اشتريت ثلاثة كتب و 4 أقلام", &ctx).collect();
    let spans: Vec<(usize, usize)> = found.iter().map(|m| (m.start, m.end)).collect();
    let values: Vec<Option<Rational64>> = found.iter().map(|m| m.value.as_number()).collect();

    assert_eq!(spans, vec![(7, 12), (19, 20)]);
    assert_eq!(values, vec![Some(Rational64::from_integer(3)), Some(Rational64::from_integer(4))]);
}

#[test]
fn numerals_are_not_found_inside_words() {
    let ctx = Context::default();
    assert_eq!(rule_numeral().parse("مستشفى", &ctx).count(), 0);
}

#[test]
fn family_rules_resolve_their_own_shapes() {
    let ctx = Context::default();
    let scaled = rule_numeral_scaled().evaluate("خمسمائة", &ctx).and_then(|v| v.as_number());
    assert_eq!(scaled, Some(Rational64::from_integer(500)));

    let tens = rule_numeral_tens().evaluate("واحد و تسعين", &ctx).and_then(|v| v.as_number());
    assert_eq!(tens, Some(Rational64::from_integer(91)));
    assert_eq!(rule_numeral_tens().evaluate("ثلاثة", &ctx), None);
}
