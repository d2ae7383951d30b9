//! Offset ranges into an immutable sequence.
//!
//! The matcher never copies sub-patterns or sub-targets. Every recursive
//! call receives a [`View`] into the pattern symbols and another into the
//! target characters.

/// A half-open range `start..end` into some backing slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    pub start: usize,
    pub end: usize,
}

impl View {
    /// A view covering all of a sequence of length `len`.
    pub fn whole(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Resolve the view against its backing sequence.
    pub fn of<'a, T>(&self, seq: &'a [T]) -> &'a [T] {
        &seq[self.start..self.end]
    }

    /// Drop the first `n` elements, clamped to the view.
    pub fn skip(&self, n: usize) -> Self {
        Self {
            start: (self.start + n).min(self.end),
            end: self.end,
        }
    }

    /// Keep at most the first `n` elements.
    pub fn prefix(&self, n: usize) -> Self {
        Self {
            start: self.start,
            end: (self.start + n).min(self.end),
        }
    }

    /// Sub-view `from..to`, relative to this view's start.
    pub fn slice(&self, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= self.len());
        Self {
            start: self.start + from,
            end: self.start + to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_and_prefix_clamp() {
        let v = View { start: 2, end: 5 };
        assert_eq!(v.skip(1), View { start: 3, end: 5 });
        assert_eq!(v.skip(10), View { start: 5, end: 5 });
        assert_eq!(v.prefix(2), View { start: 2, end: 4 });
        assert_eq!(v.prefix(10), v);
        assert!(v.skip(3).is_empty());
    }

    #[test]
    fn slice_is_relative() {
        let v = View { start: 4, end: 10 };
        assert_eq!(v.slice(1, 3), View { start: 5, end: 7 });
        assert_eq!(v.slice(0, 0).len(), 0);
    }

    #[test]
    fn of_resolves_against_backing_slice() {
        let chars: Vec<char> = "hello".chars().collect();
        let v = View::whole(chars.len()).skip(1).prefix(3);
        assert_eq!(v.of(&chars), &['e', 'l', 'l']);
    }
}
