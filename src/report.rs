//! Evaluate a suite and report verdicts, optionally scored against expected lines.

use std::io::Write;

use anyhow::Result;
use itertools::izip;
use rayon::prelude::*;

use crate::pattern::Matcher;
use crate::suite::Suite;
use crate::verdict::Verdict;

/// Correct/wrong counts against expected verdict lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub wrong: usize,
}

impl Tally {
    /// Fraction of pairs whose verdict line equalled the expected line.
    ///
    /// `None` for an empty suite.
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.correct + self.wrong;
        (total > 0).then(|| self.correct as f64 / total as f64)
    }
}

/// Evaluate every pair independently; order follows the suite.
pub fn evaluate(suite: &Suite, matcher: &Matcher) -> Vec<Verdict> {
    suite
        .patterns
        .par_iter()
        .zip(suite.targets.par_iter())
        .map(|(pattern, target)| Verdict::evaluate(matcher, pattern, target))
        .collect()
}

/// Print one line per pair. With expected lines, prefix each with
/// `CORRECT => ` or `>>>> WRONG => ` and finish with the accuracy ratio.
pub fn run<W: Write>(suite: &Suite, matcher: &Matcher, out: &mut W) -> Result<Option<Tally>> {
    let verdicts = evaluate(suite, matcher);

    let Some(expected) = &suite.expected else {
        for (pattern, target, verdict) in izip!(&suite.patterns, &suite.targets, &verdicts) {
            writeln!(out, "{}", verdict.render(pattern, target))?;
        }
        return Ok(None);
    };

    let mut tally = Tally::default();
    for (pattern, target, verdict, expected) in
        izip!(&suite.patterns, &suite.targets, &verdicts, expected)
    {
        let line = verdict.render(pattern, target);
        if &line == expected {
            tally.correct += 1;
            writeln!(out, "CORRECT => {line}")?;
        } else {
            tally.wrong += 1;
            tracing::trace!(got = %line, %expected, "verdict differs from expected");
            writeln!(out, ">>>> WRONG => {line}")?;
        }
    }
    match tally.accuracy() {
        Some(ratio) => writeln!(out, "{ratio:?}")?,
        None => writeln!(out, "no pairs")?,
    }
    Ok(Some(tally))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn output(suite: &Suite) -> (String, Option<Tally>) {
        let mut buf = Vec::new();
        let tally = run(suite, &Matcher::default(), &mut buf).unwrap();
        (String::from_utf8(buf).unwrap(), tally)
    }

    #[test]
    fn evaluates_in_order() {
        let suite = Suite::new(
            strings(&["a*", "(ab)*c", "a|b"]),
            strings(&["aaa", "ababc", "c"]),
            None,
        )
        .unwrap();
        assert_eq!(
            evaluate(&suite, &Matcher::default()),
            vec![Verdict::Yes, Verdict::Yes, Verdict::No]
        );
    }

    #[test]
    fn prints_verdicts_without_expected() {
        let suite = Suite::new(strings(&["a*", "(a"]), strings(&["aaa", "a"]), None).unwrap();
        let (text, tally) = output(&suite);
        assert_eq!(text, "YES: a* with aaa\nSYNTAX ERROR: (a with a\n");
        assert!(tally.is_none());
    }

    #[test]
    fn scores_against_expected() {
        let suite = Suite::new(
            strings(&["a*", "a|b"]),
            strings(&["aaa", "c"]),
            Some(strings(&["YES: a* with aaa", "YES: a|b with c"])),
        )
        .unwrap();
        let (text, tally) = output(&suite);
        assert_eq!(
            text,
            "CORRECT => YES: a* with aaa\n>>>> WRONG => NO:  a|b with c\n0.5\n"
        );
        assert_eq!(
            tally,
            Some(Tally {
                correct: 1,
                wrong: 1
            })
        );
    }

    #[test]
    fn perfect_score_prints_one() {
        let suite = Suite::new(
            strings(&["."]),
            strings(&["x"]),
            Some(strings(&["YES: . with x"])),
        )
        .unwrap();
        let (text, _) = output(&suite);
        assert!(text.ends_with("1.0\n"));
    }

    #[test]
    fn empty_tally_has_no_accuracy() {
        assert_eq!(Tally::default().accuracy(), None);
    }
}
