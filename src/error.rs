//! Rule construction errors.
//!
//! Matching itself never fails: an input without matches yields an empty
//! iterator and a match whose fragment cannot be resolved is skipped. The
//! only errors are build-time faults in the rule sets.

use thiserror::Error;

use crate::value::DurationUnit;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("expression `{name}` has an invalid pattern: {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("expression group has no members")]
    EmptyGroup,

    #[error("no lexical forms registered for unit {unit:?}")]
    MissingUnitForm { unit: DurationUnit },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = BuildError::MissingUnitForm { unit: DurationUnit::Weeks };
        assert_eq!(err.to_string(), "no lexical forms registered for unit Weeks");
        assert_eq!(BuildError::EmptyGroup.to_string(), "expression group has no members");
    }
}
