pub mod candidate;
pub mod lcs;
pub mod pairwise;
pub mod scoring;
pub mod star;

pub use candidate::{select_candidate, CandidatePolicy, CandidateRejection};
pub use lcs::longest_common_subsequence;
pub use pairwise::{align_pair, PairwiseAligner, PairwiseAlignment, DEFAULT_GAP_CHAR};
pub use scoring::{Scoring, ScoringScheme};
pub use star::{
    merge_projections, select_pivot, star_align, PivotProjection, StarAligner, StarAlignment,
};
