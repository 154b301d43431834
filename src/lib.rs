//! Optimal global alignment of short DNA strands.
//!
//! The core is a linear-scoring global aligner (match +1, mismatch -1,
//! gap -2) with two interchangeable strategies: an iterative table-filling
//! solver used by default, and a top-down memoized recursion kept for
//! clarity and cross-checking on small inputs.

pub mod alignment;
pub mod cli;
pub mod sequence;

pub use crate::alignment::{align, Aligner, AlignmentResult, Scoring};
pub use crate::sequence::{random_strand, Strand};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChiasmaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ChiasmaError>;
