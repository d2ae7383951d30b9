//! Recursive backtracking matcher.
//!
//! A pattern matches a target only if every pattern symbol is accounted for
//! and every target character is consumed. All positions are **character**
//! (not byte) indices.

use std::collections::{HashMap, HashSet};

use super::error::PatternError;
use super::grammar::Symbol;
use super::parser::Pattern;
use super::scan::{find_closing, find_top_level_bar};
use super::view::View;

/// Default maximum number of distinct states evaluated per match.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Default maximum nesting of dispatch calls per match.
///
/// Nesting grows with pattern structure only; runs of `x*` and `(…)*` are
/// walked in loops. This ceiling fits a 2 MiB thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Resource ceilings for a single match attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_steps: usize,
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Decides whether patterns fully match targets.
///
/// Holds no state between calls, so one `Matcher` can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher {
    limits: Limits,
}

// ─── Public API ─────────────────────────────────────────────────────────────

impl Matcher {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Test whether `pattern` matches all of `target`.
    pub fn is_match(&self, pattern: &Pattern, target: &str) -> Result<bool, PatternError> {
        let target: Vec<char> = target.chars().collect();
        let mut search = Search {
            pattern: pattern.symbols(),
            target: &target,
            limits: self.limits,
            steps: 0,
            depth: 0,
            memo: HashMap::new(),
        };
        let result = search.match_view(
            View::whole(pattern.symbols().len()),
            View::whole(target.len()),
        );
        if let Err(err) = &result {
            tracing::debug!(
                pattern = pattern.as_str(),
                steps = search.steps,
                %err,
                "match abandoned"
            );
        }
        result
    }
}

/// Compare one pattern symbol against the next target character.
///
/// Fails when the target is exhausted. Only literals and the wildcard can
/// consume a character.
pub fn compare_atom(symbol: Symbol, target: Option<char>) -> bool {
    match (symbol, target) {
        (_, None) => false,
        (Symbol::Wildcard, Some(_)) => true,
        (Symbol::Literal(expected), Some(actual)) => expected == actual,
        _ => false,
    }
}

// ─── Core matching functions ─────────────────────────────────────────────────

/// State of one top-level match attempt.
struct Search<'a> {
    pattern: &'a [Symbol],
    target: &'a [char],
    limits: Limits,
    steps: usize,
    depth: usize,
    /// Results already computed for a (pattern, target) view pair.
    memo: HashMap<(View, View), bool>,
}

impl Search<'_> {
    fn match_view(&mut self, pat: View, tgt: View) -> Result<bool, PatternError> {
        if pat.is_empty() && tgt.is_empty() {
            return Ok(true);
        }
        if let Some(&hit) = self.memo.get(&(pat, tgt)) {
            return Ok(hit);
        }

        self.steps += 1;
        if self.steps > self.limits.max_steps || self.depth >= self.limits.max_depth {
            return Err(PatternError::LimitExceeded);
        }

        self.depth += 1;
        let result = self.dispatch(pat, tgt);
        self.depth -= 1;

        let hit = result?;
        self.memo.insert((pat, tgt), hit);
        Ok(hit)
    }

    /// Pick exactly one resolver for the head of `pat`.
    ///
    /// Order matters: `x*` has to be recognised before anything looks at `x`.
    /// Plain atoms are consumed in place rather than by recursion.
    fn dispatch(&mut self, mut pat: View, mut tgt: View) -> Result<bool, PatternError> {
        loop {
            if pat.is_empty() && tgt.is_empty() {
                return Ok(true);
            }
            let syms = pat.of(self.pattern);
            if syms.get(1) == Some(&Symbol::Star) {
                return self.match_star(pat, tgt);
            }
            if syms.first() == Some(&Symbol::Open) {
                return self.match_group(pat, tgt);
            }
            if let Some(bar) = find_top_level_bar(syms) {
                return self.match_alternation(pat, tgt, bar);
            }
            match syms.first() {
                Some(&head) if compare_atom(head, self.head(tgt)) => {
                    pat = pat.skip(1);
                    tgt = tgt.skip(1);
                }
                _ => return Ok(false),
            }
        }
    }

    /// `x*rest`: the longest run of `x` first, then each shorter run down
    /// to zero, handing what is left to `rest`.
    fn match_star(&mut self, pat: View, tgt: View) -> Result<bool, PatternError> {
        let atom = self.pattern[pat.start];
        let rest = pat.skip(2);
        let run = tgt
            .of(self.target)
            .iter()
            .take_while(|&&ch| compare_atom(atom, Some(ch)))
            .count();
        for taken in (0..=run).rev() {
            if self.match_view(rest, tgt.skip(taken))? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// `before|after`, split at the first top-level bar.
    ///
    /// `a|b|c` resolves as `a|(b|c)` by recursion into `after`.
    fn match_alternation(
        &mut self,
        pat: View,
        tgt: View,
        bar: usize,
    ) -> Result<bool, PatternError> {
        let before = pat.slice(0, bar);
        let after = pat.slice(bar + 1, pat.len());
        Ok(self.match_view(before, tgt)? || self.match_view(after, tgt)?)
    }

    /// `(group)rest` or `(group)*rest`.
    ///
    /// The group is never compiled on its own. Each attempt slices the target
    /// by a length hint and asks the general matcher to verify that slice.
    fn match_group(&mut self, pat: View, tgt: View) -> Result<bool, PatternError> {
        let syms = pat.of(self.pattern);
        let close = find_closing(syms).map_err(|_| PatternError::UnclosedGroup {
            position: pat.start,
        })?;
        let group = pat.slice(1, close);

        // A body ending in `*` is unsupported and never matches.
        if group.of(self.pattern).last() == Some(&Symbol::Star) {
            return Ok(false);
        }

        let (first, second) = self.split_alternatives(group);
        let branches = std::iter::once(first).chain(second);

        if syms.get(close + 1) == Some(&Symbol::Star) {
            let remainder = pat.skip(close + 2);
            let branches: Vec<View> = branches.collect();
            self.repeat_group(&branches, remainder, tgt)
        } else {
            let remainder = pat.skip(close + 1);
            for branch in branches {
                let lits = self.literal_count(branch);
                if self.match_view(branch, tgt.prefix(lits))?
                    && self.match_view(remainder, tgt.skip(lits))?
                {
                    return Ok(true);
                }
            }
            Ok(false)
        }
    }

    /// `(group)*rest`, walked over target offsets instead of recursing once
    /// per repetition.
    ///
    /// From each reachable offset, a branch takes a target prefix of its own
    /// symbol length; if it matches, the offset after that prefix is reachable
    /// too. The pattern matches when `remainder` matches from any reachable
    /// offset. A repetition that consumes nothing is never taken.
    fn repeat_group(
        &mut self,
        branches: &[View],
        remainder: View,
        tgt: View,
    ) -> Result<bool, PatternError> {
        let mut pending = vec![tgt];
        let mut seen = HashSet::from([tgt.start]);

        while let Some(here) = pending.pop() {
            for &branch in branches {
                let rest = here.skip(branch.len());
                if rest.len() == here.len() || seen.contains(&rest.start) {
                    continue;
                }
                if self.match_view(branch, here.prefix(branch.len()))? {
                    seen.insert(rest.start);
                    pending.push(rest);
                }
            }
            // Zero further repetitions.
            if self.match_view(remainder, here)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn split_alternatives(&self, group: View) -> (View, Option<View>) {
        match find_top_level_bar(group.of(self.pattern)) {
            Some(bar) => (
                group.slice(0, bar),
                Some(group.slice(bar + 1, group.len())),
            ),
            None => (group, None),
        }
    }

    /// Number of non-parenthesis symbols in `view`.
    fn literal_count(&self, view: View) -> usize {
        view.of(self.pattern)
            .iter()
            .filter(|sym| !sym.is_paren())
            .count()
    }

    fn head(&self, tgt: View) -> Option<char> {
        tgt.of(self.target).first().copied()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
