use serde::{Deserialize, Serialize};

/// Linear scoring scheme for global alignment.
///
/// `gap_penalty` is charged per gap column regardless of run length; there
/// is no separate gap-open/gap-extend distinction. `match_score` must be
/// non-negative for the solver's match short-circuit to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_penalty: i32,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch_score: -1,
            gap_penalty: -2,
        }
    }
}

impl Scoring {
    pub fn new(match_score: i32, mismatch_score: i32, gap_penalty: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_penalty,
        }
    }

    /// Score for pairing two symbols in one alignment column.
    pub fn score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }
}
