//! Helpers for assembling rule patterns out of small fragments.
//!
//! Every rule in `src/rules/**` is built from strings produced here, so the
//! combinators stay dumb: they only add grouping syntax and never escape their
//! input. Fragments are regex source, not literal text.

/// One or more whitespace characters.
pub const SPACE: &str = r"\s+";
/// Optional whitespace.
pub const SPACE_OR_NONE: &str = r"\s*";

/// `(?P<name>pattern)`
pub fn named_group(name: &str, pattern: impl AsRef<str>) -> String {
    format!("(?P<{}>{})", name, pattern.as_ref())
}

/// `(?:a|b|c)`
pub fn non_capturing_group<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("(?:{})", join_alternatives(parts))
}

/// `(?:a|b|c)?`
pub fn optional_non_capturing_group<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    format!("{}?", non_capturing_group(parts))
}

/// Concatenate `parts` with mandatory whitespace between them.
pub fn spaced_patterns<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|p| p.as_ref().to_string()).collect::<Vec<_>>().join(SPACE)
}

/// `a|b|c` without the surrounding group.
pub fn join_alternatives<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts.into_iter().map(|p| p.as_ref().to_string()).collect::<Vec<_>>().join("|")
}

/// Wrap `pattern` in word boundaries.
pub fn bounded(pattern: impl AsRef<str>) -> String {
    format!(r"\b(?:{})\b", pattern.as_ref())
}

/// Turn every named group into a non-capturing one.
///
/// Group names are local to the expression that declares them. Once an
/// expression is embedded in a larger pattern its names would collide with
/// siblings, so joins demote them and the member is re-run on its own slice
/// when its captures are needed.
pub fn demote_named_groups(pattern: &str) -> String {
    crate::regex!(r"\(\?P?<[A-Za-z_][A-Za-z0-9_]*>").replace_all(pattern, "(?:").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combinators_compose() {
        let value = named_group("value", "a|b");
        let tail = optional_non_capturing_group(["c", "d"]);
        let p = spaced_patterns([value.as_str(), tail.as_str()]);
        assert_eq!(p, r"(?P<value>a|b)\s+(?:c|d)?");
        assert_eq!(bounded("x"), r"\b(?:x)\b");
    }

    #[test]
    fn demotion_strips_names_only() {
        let p = r"(?P<ones>\d)(?<tens>\d)(?:x)(y)";
        assert_eq!(demote_named_groups(p), r"(?:\d)(?:\d)(?:x)(y)");
    }
}
