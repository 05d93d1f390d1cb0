pub mod alignment;
pub mod cli;
pub mod core;
pub mod text;
pub mod utils;

pub use crate::alignment::{
    align_pair, longest_common_subsequence, star_align, CandidatePolicy, PairwiseAligner,
    PairwiseAlignment, Scoring, StarAligner, DEFAULT_GAP_CHAR,
};
pub use crate::text::{AlignedDocument, Document};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynopsisError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Alignment inconsistency for '{id}': {reason}")]
    AlignmentInconsistency { id: String, reason: String },

    #[error("Degenerate alignment: {0}")]
    DegenerateAlignment(String),

    #[error("Alignment candidate rejected: {0}")]
    CandidateRejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, SynopsisError>;
