//! Noun forms of the duration units.

use crate::value::DurationUnit;

/// Singular, dual and plural spellings of one unit.
#[derive(Debug, Clone, Copy)]
pub struct UnitLexicon {
    pub singular: &'static str,
    pub dual: &'static str,
    pub plural: &'static str,
}

pub const LEXICON: &[(DurationUnit, UnitLexicon)] = &[
    (
        DurationUnit::Seconds,
        UnitLexicon { singular: "(?:ثاني[ةه])", dual: "(?:ثانيت(?:ين|ان))", plural: "(?:ثواني?)" },
    ),
    (
        DurationUnit::Minutes,
        UnitLexicon { singular: "(?:دقيق[ةه])", dual: "(?:دقيقت(?:ين|ان))", plural: "(?:دقا[ئي]ق)" },
    ),
    (
        DurationUnit::Hours,
        UnitLexicon { singular: "(?:ساع[ةه])", dual: "(?:ساعت(?:ين|ان))", plural: "(?:ساعات)" },
    ),
    (DurationUnit::Days, UnitLexicon { singular: "(?:يوما?)", dual: "(?:يوم(?:ين|ان))", plural: "(?:[أا]يام)" }),
    (
        DurationUnit::Weeks,
        UnitLexicon { singular: "(?:[أا]سبوعا?)", dual: "(?:[أا]سبوع(?:ين|ان))", plural: "(?:[أا]سابيع)" },
    ),
    (
        DurationUnit::Months,
        UnitLexicon { singular: "(?:شهرا?)", dual: "(?:شهر(?:ين|ان))", plural: "(?:[أا]شهر|شهور)" },
    ),
    (
        DurationUnit::Years,
        UnitLexicon {
            singular: "(?:سن[ةه]|عاما?)",
            dual: "(?:سنت(?:ين|ان)|عام(?:ين|ان))",
            plural: "(?:سنوات|سنين|[أا]عوام)",
        },
    ),
];

/// "two", optionally repeated after a dual noun: "يومان اثنان".
pub const DUAL_EMPHASIS: &str = r"(?:\s+[اإ]ثن(?:ان|ين|تان|تين))?";

/// "except": "ساعة الا ربع".
pub const EXCEPT: &str = "(?:[إا]لا)";

pub fn lexicon(unit: DurationUnit) -> Option<&'static UnitLexicon> {
    LEXICON.iter().find(|(u, _)| *u == unit).map(|(_, lex)| lex)
}
