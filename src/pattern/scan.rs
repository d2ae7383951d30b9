//! Boundary scanning over flat symbol sequences.
//!
//! Both scans walk a nesting counter forward; neither recurses into matching.

use super::error::PatternError;
use super::grammar::Symbol;

/// Find the index of the `)` matching the `(` at `seq[0]`.
///
/// The scan stops at the end of `seq`; an unbalanced sequence is reported
/// as [`PatternError::UnclosedGroup`] with position 0 (relative to `seq`).
pub fn find_closing(seq: &[Symbol]) -> Result<usize, PatternError> {
    debug_assert_eq!(seq.first(), Some(&Symbol::Open));
    let mut depth = 1usize;
    for (idx, sym) in seq.iter().enumerate().skip(1) {
        match sym {
            Symbol::Open => depth += 1,
            Symbol::Close => {
                depth -= 1;
                if depth == 0 {
                    return Ok(idx);
                }
            }
            _ => {}
        }
    }
    Err(PatternError::UnclosedGroup { position: 0 })
}

/// Find the first `|` in `seq` that is not nested inside a group.
pub fn find_top_level_bar(seq: &[Symbol]) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, sym) in seq.iter().enumerate() {
        match sym {
            Symbol::Open => depth += 1,
            Symbol::Close => depth = depth.saturating_sub(1),
            Symbol::Bar if depth == 0 => return Some(idx),
            _ => {}
        }
    }
    None
}
