/// Compile a fixed helper regex once and hand out a `&'static Regex`.
///
/// Rule patterns are assembled at runtime and go through
/// `engine::compile` instead; this is for the small literal patterns used
/// while resolving captures.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a built-in rule set, panicking with the build error.
///
/// Built-in rule sets are static data: a construction fault is a bug in the
/// lexical tables and must surface the first time the set is touched.
#[macro_export]
macro_rules! built {
    ($build:expr) => {
        match $build {
            Ok(value) => value,
            Err(err) => panic!("invalid built-in rule set: {err}"),
        }
    };
}
