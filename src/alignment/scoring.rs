//! Scoring schemes for character-level alignment
use serde::{Deserialize, Serialize};

use crate::{Result, SynopsisError};

/// A substitution and affine-gap scoring scheme.
///
/// All values are added to the running score, so penalties are negative.
/// A gap run of length `L` contributes `gap_open() + (L - 1) * gap_extend()`.
pub trait ScoringScheme {
    fn substitution(&self, a: char, b: char) -> f64;
    fn gap_open(&self) -> f64;
    fn gap_extend(&self) -> f64;

    /// Score of a single gap run of `len` characters.
    fn gap_run(&self, len: usize) -> f64 {
        if len == 0 {
            0.0
        } else {
            self.gap_open() + self.gap_extend() * (len - 1) as f64
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.gap_open().is_finite() || !self.gap_extend().is_finite() {
            return Err(SynopsisError::InvalidInput(
                "gap scores must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Match/mismatch scoring with affine gaps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    pub match_score: f64,
    pub mismatch_score: f64,
    pub gap_open_score: f64,
    pub gap_extend_score: f64,
}

impl Scoring {
    /// Defaults tuned for OCR noise: gaps are cheap relative to substitutions.
    pub const DEFAULT: Scoring = Scoring {
        match_score: 1.0,
        mismatch_score: -2.0,
        gap_open_score: -0.5,
        gap_extend_score: -0.1,
    };

    /// Reward-dominant scheme under which the optimal alignment spells a
    /// longest common subsequence in its matching columns.
    pub const LCS: Scoring = Scoring {
        match_score: 1000.0,
        mismatch_score: -10000.0,
        gap_open_score: 0.0,
        gap_extend_score: 0.0,
    };

    pub fn new(
        match_score: f64,
        mismatch_score: f64,
        gap_open_score: f64,
        gap_extend_score: f64,
    ) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap_open_score,
            gap_extend_score,
        }
    }

    pub fn with_match_score(mut self, score: f64) -> Self {
        self.match_score = score;
        self
    }

    pub fn with_mismatch_score(mut self, score: f64) -> Self {
        self.mismatch_score = score;
        self
    }

    pub fn with_gap_scores(mut self, gap_open: f64, gap_extend: f64) -> Self {
        self.gap_open_score = gap_open;
        self.gap_extend_score = gap_extend;
        self
    }
}

impl Default for Scoring {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ScoringScheme for Scoring {
    fn substitution(&self, a: char, b: char) -> f64 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    fn gap_open(&self) -> f64 {
        self.gap_open_score
    }

    fn gap_extend(&self) -> f64 {
        self.gap_extend_score
    }

    fn validate(&self) -> Result<()> {
        let fields = [
            ("match_score", self.match_score),
            ("mismatch_score", self.mismatch_score),
            ("gap_open_score", self.gap_open_score),
            ("gap_extend_score", self.gap_extend_score),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(SynopsisError::InvalidInput(format!(
                    "scoring value '{}' must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
