//! Compare a verdict output file against an expected file.
//!
//! Lines are compared on their first two characters only, so `YES: …`,
//! `NO:  …`, `SYNTAX ERROR: …` and `ERROR: …` are told apart regardless of
//! how the pattern and target are echoed.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::suite::read_lines;

/// Category codes and their display names, in report order.
const CATEGORIES: [(&str, &str); 4] = [
    ("YE", "Match"),
    ("NO", "No match"),
    ("SY", "Syntax error"),
    ("ER", "Other error"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    /// Expected lines in this category.
    pub expected: usize,
    /// Of those, how many the output got right.
    pub correct: usize,
    /// Output lines in this category where something else was expected.
    pub unexpected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub got: String,
    pub expected: String,
}

/// Result of comparing output lines against expected lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    pub total: usize,
    pub right: usize,
    pub categories: [CategoryStats; 4],
    pub mismatches: Vec<Mismatch>,
    /// Expected lines with no output line to compare against.
    pub missing: usize,
}

fn category(line: &str) -> String {
    line.chars().take(2).collect()
}

fn category_index(code: &str) -> Option<usize> {
    CATEGORIES.iter().position(|(c, _)| *c == code)
}

fn percent(num: usize, den: usize) -> String {
    if den == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", 100.0 * num as f64 / den as f64)
}

/// Compare `output` with `expected` line by line.
pub fn compare(output: &[String], expected: &[String]) -> Comparison {
    let mut cmp = Comparison {
        total: expected.len(),
        missing: expected.len().saturating_sub(output.len()),
        ..Comparison::default()
    };

    for (idx, (got, want)) in output.iter().zip(expected).enumerate() {
        let got_cat = category(got);
        let want_cat = category(want);
        let want_idx = category_index(&want_cat);
        if let Some(i) = want_idx {
            cmp.categories[i].expected += 1;
        }
        if got_cat == want_cat {
            cmp.right += 1;
            if let Some(i) = want_idx {
                cmp.categories[i].correct += 1;
            }
        } else {
            if let Some(i) = category_index(&got_cat) {
                cmp.categories[i].unexpected += 1;
            }
            cmp.mismatches.push(Mismatch {
                line: idx + 1,
                got: got.clone(),
                expected: want.clone(),
            });
        }
    }
    cmp
}

impl Comparison {
    pub fn write_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let total_line = format!(
            "Total: {} {}/{}",
            percent(self.right, self.total),
            self.right,
            self.total
        );
        writeln!(out, "{total_line}")?;
        writeln!(out, "Proportions of expected results right:")?;
        for ((_, name), stats) in CATEGORIES.iter().zip(&self.categories) {
            writeln!(
                out,
                "\t{name:12} {} {}/{} + {} unexpected",
                percent(stats.correct, stats.expected),
                stats.correct,
                stats.expected,
                stats.unexpected
            )?;
        }
        if self.missing > 0 {
            writeln!(
                out,
                "Missing: {} {}/{}",
                percent(self.missing, self.total),
                self.missing,
                self.total
            )?;
            writeln!(out, "Output file finished early!")?;
        }
        Ok(())
    }

    pub fn write_mismatches<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for m in &self.mismatches {
            writeln!(out, "Mismatch on line {}:", m.line)?;
            writeln!(out, "  Expected: {}", m.expected)?;
            writeln!(out, "  But got:  {}", m.got)?;
        }
        Ok(())
    }
}

/// Compare two files, print the report, and write any mismatches to
/// `mismatches_path`.
pub fn check_files<W: Write>(
    output: &Path,
    expected: &Path,
    mismatches_path: &Path,
    out: &mut W,
) -> Result<Comparison> {
    let cmp = compare(&read_lines(output)?, &read_lines(expected)?);
    cmp.write_report(out)?;

    if !cmp.mismatches.is_empty() {
        let mut buf = Vec::new();
        cmp.write_mismatches(&mut buf)?;
        fs::write(mismatches_path, buf)
            .with_context(|| format!("Failed to write {}", mismatches_path.display()))?;
        writeln!(
            out,
            "Wrote list of {} mismatched lines to {}",
            cmp.mismatches.len(),
            mismatches_path.display()
        )?;
    }
    writeln!(
        out,
        "\nTotal: {} {}/{}",
        percent(cmp.right, cmp.total),
        cmp.right,
        cmp.total
    )?;
    Ok(cmp)
}

/// For every `<prefix>-output.txt` in `dir`, print the percentage of lines
/// matching `<prefix>-expected.txt`.
pub fn check_all<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;
    let prefixes = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.strip_suffix("-output.txt").map(str::to_string)
        })
        .sorted();

    for prefix in prefixes {
        let output = read_lines(&dir.join(format!("{prefix}-output.txt")))?;
        let expected = read_lines(&dir.join(format!("{prefix}-expected.txt")))?;
        let cmp = compare(&output, &expected);
        writeln!(out, "{prefix:12}{}", percent(cmp.right, cmp.total))?;
    }
    Ok(())
}
