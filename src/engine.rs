//! Expression and match-resolution engine.
//!
//! Rules are plain data: a compiled pattern plus either a fixed value or a
//! resolver that computes the value from the captures. Larger rules are built
//! by joining the sources of smaller ones, and a match on a joined pattern is
//! decomposed again by re-running the members against the matched slice.
//!
//! ## How the parts work together
//!
//! ```text
//! fragments (src/rules/**) ── pattern.rs combinators ──▶ pattern source
//!                                                          │
//!                          Expression::value / ::computed ◀┘ (expression.rs)
//!                                        │
//!                  ExpressionGroup::new / ::smart         (group.rs)
//!                    - join(): alternation of member sources
//!                    - get_matched_expression(): re-match a slice
//!                                        │
//! input ─────────────────────────────────┼──▶ Matches        (matches.rs)
//!                                        │      - scan left to right
//!                                        │      - resolve captures
//!                                        v      - byte -> char offsets
//!                                  MatchResult { start, end, value, expression }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `expression.rs`: a single pattern and its output; full-match evaluation of
//!   a fragment.
//! - `group.rs`: ordered member lists, alternation vs. smart (ordered fallback)
//!   scanning, reverse lookup of the member that produced a slice.
//! - `matches.rs`: the lazy iterator shared by expressions and groups.
//!
//! ## Errors
//!
//! Construction returns [`BuildError`](crate::BuildError); matching never
//! fails. A resolver returning `None` drops that one match (logged at `warn`)
//! and scanning continues after it.

#[path = "engine/expression.rs"]
mod expression;
#[path = "engine/group.rs"]
mod group;
#[path = "engine/matches.rs"]
mod matches;

pub use expression::{Expression, Resolver};
pub use group::{ExpressionGroup, GroupMode};
pub use matches::{MatchResult, Matches};

use crate::error::{BuildError, Result};
use regex::{Regex, RegexBuilder};

/// Joined rules (every numeral spelling repeated inside every duration slot)
/// are far larger than the `regex` defaults anticipate.
const SIZE_LIMIT: usize = 1 << 28;
const DFA_SIZE_LIMIT: usize = 1 << 26;

/// Compile a rule pattern with limits sized for joined rule sets.
pub(crate) fn compile(name: &str, pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .size_limit(SIZE_LIMIT)
        .dfa_size_limit(DFA_SIZE_LIMIT)
        .build()
        .map_err(|source| BuildError::InvalidPattern { name: name.to_string(), source })
}
