use crate::alignment::solver::Subproblem;
use std::collections::HashMap;

/// Memoization table for the top-down solver, keyed by the position pair
/// `(i, j)` identifying the suffixes still to be aligned.
///
/// The key carries positions only, not strand contents, so a table must
/// never outlive the alignment request that created it: reusing one across
/// a different strand pair would hand back results computed for different
/// symbols at matching coordinates. The solver builds a fresh table per
/// call and drops it on return.
#[derive(Debug, Default)]
pub(crate) struct Memo {
    entries: HashMap<(usize, usize), Subproblem>,
}

impl Memo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&Subproblem> {
        self.entries.get(&(i, j))
    }

    /// Records the solved subproblem for `(i, j)`. Within one request the
    /// result is a deterministic function of the position pair, so an
    /// overwrite can only mean the solver recomputed a solved state.
    pub fn put(&mut self, i: usize, j: usize, subproblem: Subproblem) {
        let previous = self.entries.insert((i, j), subproblem);
        debug_assert!(
            previous.is_none(),
            "subproblem ({}, {}) solved twice",
            i,
            j
        );
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
