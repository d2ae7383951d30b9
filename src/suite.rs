//! Line-oriented pattern, target and expected-outcome lists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Read a file as one entry per line, line terminators stripped.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Paired patterns and targets, with optional expected verdict lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    pub patterns: Vec<String>,
    pub targets: Vec<String>,
    pub expected: Option<Vec<String>>,
}

impl Suite {
    /// Build a suite from in-memory lists, checking that they line up.
    pub fn new(
        patterns: Vec<String>,
        targets: Vec<String>,
        expected: Option<Vec<String>>,
    ) -> Result<Self> {
        if patterns.len() != targets.len() {
            bail!(
                "{} patterns but {} targets; the lists must have one entry per line each",
                patterns.len(),
                targets.len()
            );
        }
        if let Some(expected) = &expected
            && expected.len() != patterns.len()
        {
            bail!(
                "{} expected outcomes for {} patterns",
                expected.len(),
                patterns.len()
            );
        }
        Ok(Self {
            patterns,
            targets,
            expected,
        })
    }

    pub fn load(expressions: &Path, targets: &Path, expected: Option<&Path>) -> Result<Self> {
        let expected = expected.map(read_lines).transpose()?;
        Self::new(read_lines(expressions)?, read_lines(targets)?, expected)
    }

    /// Load `<name>-expressions.txt`, `<name>-targets.txt` and, when present,
    /// `<name>-expected.txt` from `dir`.
    pub fn from_prefix(dir: &Path, name: &str) -> Result<Self> {
        let file = |suffix: &str| -> PathBuf { dir.join(format!("{name}-{suffix}.txt")) };
        let expected = file("expected");
        let expected = expected.exists().then_some(expected);
        Self::load(&file("expressions"), &file("targets"), expected.as_deref())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
