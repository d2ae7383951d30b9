/// Errors that can occur while parsing or matching a pattern.
///
/// Everything except [`PatternError::LimitExceeded`] means the pattern is
/// malformed; see [`PatternError::is_syntax_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `(` with no matching `)`.
    UnclosedGroup { position: usize },
    /// A `)` with no open group.
    UnmatchedClose { position: usize },
    /// A `|` with nothing on one of its sides.
    EmptyAlternative { position: usize },
    /// A `*` with no atom or group in front of it.
    DanglingStar { position: usize },
    /// The matcher ran out of steps or recursion depth.
    LimitExceeded,
}

impl PatternError {
    pub fn is_syntax_error(&self) -> bool {
        !matches!(self, Self::LimitExceeded)
    }
}

impl std::fmt::Display for PatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnclosedGroup { position } => {
                write!(f, "Unclosed group '(' at position {position}")
            }
            Self::UnmatchedClose { position } => {
                write!(f, "Unmatched ')' at position {position}")
            }
            Self::EmptyAlternative { position } => {
                write!(f, "Empty alternative next to '|' at position {position}")
            }
            Self::DanglingStar { position } => {
                write!(f, "'*' at position {position} has nothing to repeat")
            }
            Self::LimitExceeded => write!(f, "Match abandoned: step or depth limit exceeded"),
        }
    }
}

impl std::error::Error for PatternError {}
