//! Longest common subsequence via the pairwise aligner
use crate::alignment::pairwise::align_pair;
use crate::alignment::scoring::Scoring;
use crate::Result;

/// Longest common subsequence of `a` and `b`.
///
/// Runs a global alignment under `Scoring::LCS`, where a match outweighs any
/// number of free gaps and a mismatch is never worth taking, then reads the
/// matching columns.
///
/// An empty side yields `""`; a gap symbol on either side is rejected even
/// when the other side is empty.
pub fn longest_common_subsequence(a: &str, b: &str) -> Result<String> {
    let alignment = align_pair(a, b, &Scoring::LCS)?;
    Ok(alignment.common_subsequence())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SynopsisError;

    #[test]
    fn test_lcs_basic() {
        assert_eq!(longest_common_subsequence("ABCD", "ACD").unwrap(), "ACD");
        assert_eq!(longest_common_subsequence("ABCDEF", "ABXDF").unwrap(), "ABDF");
    }

    #[test]
    fn test_lcs_alignment_width() {
        let alignment = align_pair("ABCD", "ACD", &Scoring::LCS).unwrap();
        assert_eq!(alignment.len(), 4);
        assert_eq!(alignment.common_subsequence(), "ACD");
    }

    #[test]
    fn test_lcs_empty_and_disjoint() {
        assert_eq!(longest_common_subsequence("", "abc").unwrap(), "");
        assert_eq!(longest_common_subsequence("abc", "").unwrap(), "");
        assert_eq!(longest_common_subsequence("abc", "xyz").unwrap(), "");
    }

    #[test]
    fn test_lcs_length_on_noisy_text() {
        let lcs = longest_common_subsequence("The planet Mars", "The plamet Maris").unwrap();
        assert_eq!(lcs.chars().count(), 14);
    }

    #[test]
    fn test_lcs_rejects_gap_symbol() {
        assert!(matches!(
            longest_common_subsequence("a@c", "ac"),
            Err(SynopsisError::InvalidInput(_))
        ));
        assert!(matches!(
            longest_common_subsequence("a@c", ""),
            Err(SynopsisError::InvalidInput(_))
        ));
        assert!(matches!(
            longest_common_subsequence("", "@"),
            Err(SynopsisError::InvalidInput(_))
        ));
    }
}
