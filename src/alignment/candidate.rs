//! Candidate validation for pairwise alignments
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::alignment::pairwise::PairwiseAlignment;
use crate::text::normalize::tokenize;

/// What the aligner does when its candidate fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidatePolicy {
    /// Report the failure as an error.
    Strict,
    /// Keep the first candidate and log a warning.
    #[default]
    FallbackToFirst,
}

impl std::str::FromStr for CandidatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(CandidatePolicy::Strict),
            "fallback-to-first" | "fallback_to_first" | "fallback" | "first" => {
                Ok(CandidatePolicy::FallbackToFirst)
            }
            _ => Err(format!("Unknown candidate policy: {}", s)),
        }
    }
}

impl fmt::Display for CandidatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidatePolicy::Strict => write!(f, "strict"),
            CandidatePolicy::FallbackToFirst => write!(f, "fallback-to-first"),
        }
    }
}

/// Why no candidate could be selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateRejection {
    NoCandidates,
    TokenCount { expected: usize, candidates: usize },
    LengthMismatch { aligned_a: usize, aligned_b: usize },
}

impl fmt::Display for CandidateRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateRejection::NoCandidates => write!(f, "no alignment candidates"),
            CandidateRejection::TokenCount {
                expected,
                candidates,
            } => write!(
                f,
                "no alignment candidate keeps {} reference tokens (total candidates: {})",
                expected, candidates
            ),
            CandidateRejection::LengthMismatch {
                aligned_a,
                aligned_b,
            } => write!(
                f,
                "aligned strings differ in length ({} vs {})",
                aligned_a, aligned_b
            ),
        }
    }
}

/// Returns the first candidate whose reference side still splits into
/// `target_tokens` whitespace tokens. A token-preserving candidate with sides
/// of different lengths is a rejection, not a skip.
pub fn select_candidate(
    candidates: &[PairwiseAlignment],
    target_tokens: usize,
) -> Result<&PairwiseAlignment, CandidateRejection> {
    if candidates.is_empty() {
        return Err(CandidateRejection::NoCandidates);
    }

    for candidate in candidates {
        if tokenize(&candidate.aligned_a).len() != target_tokens {
            continue;
        }
        let aligned_a = candidate.aligned_a.chars().count();
        let aligned_b = candidate.aligned_b.chars().count();
        if aligned_a != aligned_b {
            return Err(CandidateRejection::LengthMismatch {
                aligned_a,
                aligned_b,
            });
        }
        return Ok(candidate);
    }

    Err(CandidateRejection::TokenCount {
        expected: target_tokens,
        candidates: candidates.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(a: &str, b: &str) -> PairwiseAlignment {
        PairwiseAlignment {
            aligned_a: a.to_string(),
            aligned_b: b.to_string(),
            score: 0.0,
            gap_char: '@',
        }
    }

    #[test]
    fn test_selects_first_token_preserving_candidate() {
        let candidates = vec![
            candidate("ab @ cd", "ab x cd"),
            candidate("ab@ cd", "abx cd"),
        ];
        let selected = select_candidate(&candidates, 2).unwrap();
        assert_eq!(selected.aligned_a, "ab@ cd");
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        let candidates = vec![candidate("ab cd", "ab c")];
        assert_eq!(
            select_candidate(&candidates, 2),
            Err(CandidateRejection::LengthMismatch {
                aligned_a: 5,
                aligned_b: 4
            })
        );
    }

    #[test]
    fn test_no_matching_token_count() {
        let candidates = vec![candidate("ab @ cd", "ab x cd")];
        assert_eq!(
            select_candidate(&candidates, 2),
            Err(CandidateRejection::TokenCount {
                expected: 2,
                candidates: 1
            })
        );
        assert_eq!(
            select_candidate(&[], 2),
            Err(CandidateRejection::NoCandidates)
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<CandidatePolicy>().unwrap(), CandidatePolicy::Strict);
        assert_eq!(
            "Fallback-To-First".parse::<CandidatePolicy>().unwrap(),
            CandidatePolicy::FallbackToFirst
        );
        assert!("lenient".parse::<CandidatePolicy>().is_err());
        assert_eq!(CandidatePolicy::default(), CandidatePolicy::FallbackToFirst);
    }
}
