//! A backtracking matcher for a small regular-expression subset.
//!
//! # Example
//!
//! ```rust
//! use rematch::{PatternError, is_match};
//!
//! assert_eq!(is_match("(ab)*c", "ababc"), Ok(true));
//! assert_eq!(is_match("a|b", "c"), Ok(false));
//! assert!(matches!(is_match("(a", "a"), Err(PatternError::UnclosedGroup { .. })));
//! ```

pub mod checker;
pub mod pattern;
pub mod report;
pub mod suite;
pub mod verdict;

pub use pattern::{Limits, Matcher, Pattern, PatternError};
pub use verdict::Verdict;

/// Test whether `pattern` matches all of `target`, with default limits.
pub fn is_match(pattern: &str, target: &str) -> Result<bool, PatternError> {
    let pattern = Pattern::parse(pattern)?;
    Matcher::default().is_match(&pattern, target)
}
