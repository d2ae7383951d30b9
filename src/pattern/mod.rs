//! Pattern matching engine.
//!
//! A pattern either matches the whole target or it does not; there are no
//! captures and no partial matches.
//!
//! # Pattern syntax
//!
//! | Token         | Meaning                                           |
//! |---------------|---------------------------------------------------|
//! | `x`           | The literal character `x`                         |
//! | `.`           | Any one character                                 |
//! | `x*`          | Zero or more of the preceding atom                |
//! | `(…)`         | Grouping                                          |
//! | `(…)*`        | Zero or more repetitions of the group             |
//! | `X\|Y`        | Alternation (first top-level bar splits)          |
//!
//! Resolution order at each step is fixed: a quantified atom first, then a
//! group, then a top-level alternation, then a plain character comparison.

pub mod error;
pub mod grammar;
pub mod matcher;
pub mod parser;
pub mod scan;
pub mod view;

pub use error::PatternError;
pub use grammar::Symbol;
pub use matcher::{Limits, Matcher, compare_atom};
pub use parser::Pattern;
