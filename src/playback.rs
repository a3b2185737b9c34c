//! Index navigation over a step trace. Timing belongs to the caller; the cursor only keeps
//! the current index inside `[0, len - 1]`.

use crate::solver::{Solution, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCursor {
    index: usize,
    len: usize,
}

impl StepCursor {
    pub fn new(len: usize) -> Self {
        StepCursor { index: 0, len }
    }

    pub fn for_solution(solution: &Solution) -> Self {
        Self::new(solution.steps.len())
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.len
    }

    /// Advance one step. Returns `false` when already on the last step.
    pub fn forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Go back one step. Returns `false` when already on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_at_start() {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Jump to `index`, clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.len.saturating_sub(1));
    }

    pub fn current<'a>(&self, solution: &'a Solution) -> Option<&'a Step> {
        solution.steps.get(self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_stays_in_bounds() {
        let mut cursor = StepCursor::new(3);
        assert_eq!(cursor.len(), 3);
        assert!(!cursor.back());
        assert_eq!(cursor.index(), 0);

        assert!(cursor.forward());
        assert!(cursor.forward());
        assert!(!cursor.forward());
        assert_eq!(cursor.index(), 2);
        assert!(cursor.is_at_end());

        cursor.seek(10);
        assert_eq!(cursor.index(), 2);
        cursor.reset();
        assert!(cursor.is_at_start());
    }

    #[test]
    fn empty_cursor_never_moves() {
        let mut cursor = StepCursor::new(0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.len(), 0);
        assert!(!cursor.forward());
        assert!(!cursor.back());
        cursor.seek(4);
        assert_eq!(cursor.index(), 0);
    }
}
