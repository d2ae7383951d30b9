//! Tokenizer and well-formedness check for pattern strings.

use std::fmt;
use std::str::FromStr;

use super::error::PatternError;
use super::grammar::Symbol;

/// A tokenized, well-formed pattern.
///
/// No syntax tree is built: the matcher walks [`Pattern::symbols`]
/// positionally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    symbols: Vec<Symbol>,
}

impl Pattern {
    /// Tokenize `input` and check that it is well formed.
    pub fn parse(input: &str) -> Result<Self, PatternError> {
        let symbols: Vec<Symbol> = input.chars().map(Symbol::from_char).collect();
        if let Err(err) = validate(&symbols) {
            tracing::debug!(pattern = input, %err, "rejected malformed pattern");
            return Err(err);
        }
        Ok(Self {
            source: input.to_string(),
            symbols,
        })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Single pass over the symbols, tracking the previous symbol and the
/// positions of still-open groups.
fn validate(symbols: &[Symbol]) -> Result<(), PatternError> {
    let mut open_groups: Vec<usize> = Vec::new();
    let mut prev: Option<Symbol> = None;

    for (position, &sym) in symbols.iter().enumerate() {
        match sym {
            Symbol::Open => open_groups.push(position),
            Symbol::Close => {
                if open_groups.pop().is_none() {
                    return Err(PatternError::UnmatchedClose { position });
                }
                if prev == Some(Symbol::Bar) {
                    return Err(PatternError::EmptyAlternative {
                        position: position - 1,
                    });
                }
            }
            Symbol::Bar => {
                if matches!(prev, None | Some(Symbol::Open) | Some(Symbol::Bar)) {
                    return Err(PatternError::EmptyAlternative { position });
                }
            }
            Symbol::Star => {
                if matches!(
                    prev,
                    None | Some(Symbol::Open) | Some(Symbol::Bar) | Some(Symbol::Star)
                ) {
                    return Err(PatternError::DanglingStar { position });
                }
            }
            Symbol::Literal(_) | Symbol::Wildcard => {}
        }
        prev = Some(sym);
    }

    if let Some(&position) = open_groups.last() {
        return Err(PatternError::UnclosedGroup { position });
    }
    if prev == Some(Symbol::Bar) {
        return Err(PatternError::EmptyAlternative {
            position: symbols.len() - 1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(s: &str) -> Pattern {
        Pattern::parse(s).expect("parse should succeed")
    }
    fn parse_err(s: &str) -> PatternError {
        Pattern::parse(s).expect_err("parse should fail")
    }

    // --- Tokenizing ---

    #[test]
    fn test_symbols_follow_source() {
        let p = parse_ok("a.(b|c)*");
        assert_eq!(
            p.symbols(),
            &[
                Symbol::Literal('a'),
                Symbol::Wildcard,
                Symbol::Open,
                Symbol::Literal('b'),
                Symbol::Bar,
                Symbol::Literal('c'),
                Symbol::Close,
                Symbol::Star,
            ]
        );
        assert_eq!(p.as_str(), "a.(b|c)*");
        assert_eq!(p.to_string(), "a.(b|c)*");
    }

    #[test]
    fn test_empty_pattern() {
        assert!(parse_ok("").symbols().is_empty());
    }

    #[test]
    fn test_from_str() {
        let p: Pattern = "ab*".parse().unwrap();
        assert_eq!(p.symbols().len(), 3);
    }

    // --- Well-formed edge cases ---

    #[test]
    fn test_empty_group_allowed() {
        parse_ok("()");
        parse_ok("a()*b");
    }

    #[test]
    fn test_star_after_group_and_wildcard() {
        parse_ok("(ab)*");
        parse_ok(".*");
        parse_ok("((a)*)*");
    }

    #[test]
    fn test_group_body_ending_in_star_is_syntax_ok() {
        parse_ok("(a*)");
    }

    // --- Errors ---

    #[test]
    fn test_unclosed_group() {
        assert_eq!(parse_err("(a"), PatternError::UnclosedGroup { position: 0 });
        assert_eq!(parse_err("a(b(c)"), PatternError::UnclosedGroup { position: 1 });
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(parse_err("a)"), PatternError::UnmatchedClose { position: 1 });
        assert_eq!(parse_err("(a))"), PatternError::UnmatchedClose { position: 3 });
    }

    #[test]
    fn test_empty_alternatives() {
        assert_eq!(parse_err("|a"), PatternError::EmptyAlternative { position: 0 });
        assert_eq!(parse_err("a|"), PatternError::EmptyAlternative { position: 1 });
        assert_eq!(parse_err("a||b"), PatternError::EmptyAlternative { position: 2 });
        assert_eq!(parse_err("(|a)"), PatternError::EmptyAlternative { position: 1 });
        assert_eq!(parse_err("(a|)"), PatternError::EmptyAlternative { position: 2 });
    }

    #[test]
    fn test_dangling_star() {
        assert_eq!(parse_err("*a"), PatternError::DanglingStar { position: 0 });
        assert_eq!(parse_err("(*a)"), PatternError::DanglingStar { position: 1 });
        assert_eq!(parse_err("a|*b"), PatternError::DanglingStar { position: 2 });
        assert_eq!(parse_err("a**"), PatternError::DanglingStar { position: 2 });
    }

    #[test]
    fn test_errors_are_syntax_errors() {
        assert!(parse_err("(a").is_syntax_error());
        assert!(parse_err("*").is_syntax_error());
        assert!(!PatternError::LimitExceeded.is_syntax_error());
    }
}
