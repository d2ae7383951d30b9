//! Verdict lines for one (pattern, target) pair.

use crate::pattern::{Matcher, Pattern, PatternError};

/// The outcome of matching one pair, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Yes,
    No,
    SyntaxError,
    Error,
}

impl Verdict {
    /// Parse and match a pair. Never fails: errors become verdicts.
    pub fn evaluate(matcher: &Matcher, pattern: &str, target: &str) -> Self {
        let outcome = Pattern::parse(pattern).and_then(|p| matcher.is_match(&p, target));
        Self::from_outcome(&outcome)
    }

    pub fn from_outcome(outcome: &Result<bool, PatternError>) -> Self {
        match outcome {
            Ok(true) => Verdict::Yes,
            Ok(false) => Verdict::No,
            Err(err) if err.is_syntax_error() => Verdict::SyntaxError,
            Err(_) => Verdict::Error,
        }
    }

    /// Two-letter code the checker compares on.
    pub fn category(&self) -> &'static str {
        match self {
            Verdict::Yes => "YE",
            Verdict::No => "NO",
            Verdict::SyntaxError => "SY",
            Verdict::Error => "ER",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Verdict::Yes => "YES: ",
            Verdict::No => "NO:  ",
            Verdict::SyntaxError => "SYNTAX ERROR: ",
            Verdict::Error => "ERROR: ",
        }
    }

    /// Render as e.g. `YES: a* with aaa`.
    pub fn render(&self, pattern: &str, target: &str) -> String {
        format!("{}{} with {}", self.label(), pattern, target)
    }
}
