//! Global pairwise alignment with affine gaps (Gotoh's three-state
//! Needleman-Wunsch)
use serde::{Deserialize, Serialize};

use crate::alignment::candidate::{select_candidate, CandidatePolicy};
use crate::alignment::scoring::{Scoring, ScoringScheme};
use crate::text::normalize::tokenize;
use crate::{Result, SynopsisError};

/// Reserved gap symbol used when none is configured
pub const DEFAULT_GAP_CHAR: char = '@';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseAlignment {
    pub aligned_a: String,
    pub aligned_b: String,
    pub score: f64,
    pub gap_char: char,
}

impl PairwiseAlignment {
    /// Number of alignment columns
    pub fn len(&self) -> usize {
        self.aligned_a.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_a.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.aligned_a.chars().zip(self.aligned_b.chars())
    }

    /// `aligned_a` with gap symbols removed
    pub fn ungapped_a(&self) -> String {
        self.aligned_a.chars().filter(|&c| c != self.gap_char).collect()
    }

    /// `aligned_b` with gap symbols removed
    pub fn ungapped_b(&self) -> String {
        self.aligned_b.chars().filter(|&c| c != self.gap_char).collect()
    }

    pub fn has_gaps(&self) -> bool {
        self.aligned_a.contains(self.gap_char) || self.aligned_b.contains(self.gap_char)
    }

    /// Characters of every column where both sides agree
    pub fn common_subsequence(&self) -> String {
        self.columns()
            .filter(|&(a, b)| a == b && a != self.gap_char)
            .map(|(a, _)| a)
            .collect()
    }

    /// '|' for match, 'X' for mismatch, ' ' for gap
    pub fn alignment_string(&self) -> String {
        self.columns()
            .map(|(a, b)| {
                if a == self.gap_char || b == self.gap_char {
                    ' '
                } else if a == b {
                    '|'
                } else {
                    'X'
                }
            })
            .collect()
    }

    /// Fraction of columns that are matches
    pub fn identity(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            return 0.0;
        }
        let matches = self
            .columns()
            .filter(|&(a, b)| a == b && a != self.gap_char)
            .count();
        matches as f64 / total as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Match,
    GapInB,
    GapInA,
}

impl State {
    fn from_bits(bits: u8) -> Option<State> {
        match bits {
            0 => Some(State::Match),
            1 => Some(State::GapInB),
            2 => Some(State::GapInA),
            _ => None,
        }
    }

    fn bits(self) -> u8 {
        match self {
            State::Match => 0,
            State::GapInB => 1,
            State::GapInA => 2,
        }
    }

    fn shift(self) -> u8 {
        self.bits() * 2
    }
}

/// Predecessor state of each of the three states of one cell, two bits each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TraceCell(u8);

impl TraceCell {
    const EMPTY: TraceCell = TraceCell(0b11_11_11);

    fn set(&mut self, state: State, from: State) {
        self.0 = (self.0 & !(0b11 << state.shift())) | (from.bits() << state.shift());
    }

    fn get(self, state: State) -> Option<State> {
        State::from_bits((self.0 >> state.shift()) & 0b11)
    }
}

/// Picks the maximum in the order Match, GapInB, GapInA. A later candidate
/// must be strictly greater to win.
fn best_of(from_match: f64, from_gap_b: f64, from_gap_a: f64) -> (f64, State) {
    let mut best = (from_match, State::Match);
    if from_gap_b > best.0 {
        best = (from_gap_b, State::GapInB);
    }
    if from_gap_a > best.0 {
        best = (from_gap_a, State::GapInA);
    }
    best
}

struct ScoreRow {
    matched: Vec<f64>,
    gap_b: Vec<f64>,
    gap_a: Vec<f64>,
}

impl ScoreRow {
    fn new(width: usize) -> Self {
        Self {
            matched: vec![f64::NEG_INFINITY; width],
            gap_b: vec![f64::NEG_INFINITY; width],
            gap_a: vec![f64::NEG_INFINITY; width],
        }
    }
}

pub struct PairwiseAligner<S: ScoringScheme = Scoring> {
    scoring: S,
    gap_char: char,
    policy: CandidatePolicy,
}

impl Default for PairwiseAligner<Scoring> {
    fn default() -> Self {
        Self::new(Scoring::default())
    }
}

impl<S: ScoringScheme> PairwiseAligner<S> {
    pub fn new(scoring: S) -> Self {
        Self {
            scoring,
            gap_char: DEFAULT_GAP_CHAR,
            policy: CandidatePolicy::default(),
        }
    }

    pub fn with_gap_char(mut self, gap_char: char) -> Self {
        self.gap_char = gap_char;
        self
    }

    pub fn with_policy(mut self, policy: CandidatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scoring(&self) -> &S {
        &self.scoring
    }

    pub fn gap_char(&self) -> char {
        self.gap_char
    }

    pub fn policy(&self) -> CandidatePolicy {
        self.policy
    }

    /// Computes one optimal global alignment of `a` against `b`.
    pub fn align(&self, a: &str, b: &str) -> Result<PairwiseAlignment> {
        self.scoring.validate()?;
        for (label, seq) in [("first", a), ("second", b)] {
            if seq.contains(self.gap_char) {
                return Err(SynopsisError::InvalidInput(format!(
                    "{} sequence contains the reserved gap symbol '{}'",
                    label, self.gap_char
                )));
            }
        }

        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();

        match (a_chars.is_empty(), b_chars.is_empty()) {
            (true, true) => {
                return Ok(PairwiseAlignment {
                    aligned_a: String::new(),
                    aligned_b: String::new(),
                    score: 0.0,
                    gap_char: self.gap_char,
                })
            }
            (true, false) => {
                return Ok(PairwiseAlignment {
                    aligned_a: self.gaps(b_chars.len()),
                    aligned_b: b.to_string(),
                    score: self.scoring.gap_run(b_chars.len()),
                    gap_char: self.gap_char,
                })
            }
            (false, true) => {
                return Ok(PairwiseAlignment {
                    aligned_a: a.to_string(),
                    aligned_b: self.gaps(a_chars.len()),
                    score: self.scoring.gap_run(a_chars.len()),
                    gap_char: self.gap_char,
                })
            }
            (false, false) => {}
        }

        let candidates = vec![self.global(&a_chars, &b_chars)?];
        let target_tokens = tokenize(a).len();

        match select_candidate(&candidates, target_tokens) {
            Ok(selected) => Ok(selected.clone()),
            Err(rejection) => match self.policy {
                CandidatePolicy::Strict => {
                    Err(SynopsisError::CandidateRejected(rejection.to_string()))
                }
                CandidatePolicy::FallbackToFirst => {
                    tracing::warn!(
                        "Candidate validation failed ({}); keeping first candidate",
                        rejection
                    );
                    candidates.into_iter().next().ok_or_else(|| {
                        SynopsisError::DegenerateAlignment("no candidate produced".to_string())
                    })
                }
            },
        }
    }

    fn gaps(&self, len: usize) -> String {
        std::iter::repeat(self.gap_char).take(len).collect()
    }

    fn global(&self, a: &[char], b: &[char]) -> Result<PairwiseAlignment> {
        let rows = a.len();
        let cols = b.len();
        let width = cols + 1;
        let open = self.scoring.gap_open();
        let extend = self.scoring.gap_extend();

        tracing::debug!(rows, cols, "Filling affine-gap alignment table");

        let mut trace = vec![TraceCell::EMPTY; (rows + 1) * width];
        let mut prev = ScoreRow::new(width);
        let mut cur = ScoreRow::new(width);

        for i in 0..=rows {
            for j in 0..=cols {
                if i == 0 && j == 0 {
                    cur.matched[0] = 0.0;
                    cur.gap_b[0] = f64::NEG_INFINITY;
                    cur.gap_a[0] = f64::NEG_INFINITY;
                    continue;
                }

                let mut cell = TraceCell::EMPTY;

                cur.matched[j] = if i > 0 && j > 0 {
                    let (best, from) =
                        best_of(prev.matched[j - 1], prev.gap_b[j - 1], prev.gap_a[j - 1]);
                    cell.set(State::Match, from);
                    best + self.scoring.substitution(a[i - 1], b[j - 1])
                } else {
                    f64::NEG_INFINITY
                };

                cur.gap_b[j] = if i > 0 {
                    let (best, from) = best_of(
                        prev.matched[j] + open,
                        prev.gap_b[j] + extend,
                        prev.gap_a[j] + open,
                    );
                    cell.set(State::GapInB, from);
                    best
                } else {
                    f64::NEG_INFINITY
                };

                cur.gap_a[j] = if j > 0 {
                    let (best, from) = best_of(
                        cur.matched[j - 1] + open,
                        cur.gap_b[j - 1] + open,
                        cur.gap_a[j - 1] + extend,
                    );
                    cell.set(State::GapInA, from);
                    best
                } else {
                    f64::NEG_INFINITY
                };

                trace[i * width + j] = cell;
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        let (score, mut state) = best_of(prev.matched[cols], prev.gap_b[cols], prev.gap_a[cols]);
        if !score.is_finite() {
            return Err(SynopsisError::DegenerateAlignment(format!(
                "no feasible path through a {}x{} table",
                rows + 1,
                width
            )));
        }

        let mut aligned_a = Vec::with_capacity(rows + cols);
        let mut aligned_b = Vec::with_capacity(rows + cols);
        let (mut i, mut j) = (rows, cols);

        while i > 0 || j > 0 {
            let from = trace[i * width + j].get(state).ok_or_else(|| {
                SynopsisError::DegenerateAlignment(format!(
                    "backtrace reached an unset cell at ({}, {})",
                    i, j
                ))
            })?;

            match state {
                State::Match if i > 0 && j > 0 => {
                    aligned_a.push(a[i - 1]);
                    aligned_b.push(b[j - 1]);
                    i -= 1;
                    j -= 1;
                }
                State::GapInB if i > 0 => {
                    aligned_a.push(a[i - 1]);
                    aligned_b.push(self.gap_char);
                    i -= 1;
                }
                State::GapInA if j > 0 => {
                    aligned_a.push(self.gap_char);
                    aligned_b.push(b[j - 1]);
                    j -= 1;
                }
                _ => {
                    return Err(SynopsisError::DegenerateAlignment(format!(
                        "backtrace left the table at ({}, {}) in state {:?}",
                        i, j, state
                    )))
                }
            }
            state = from;
        }

        Ok(PairwiseAlignment {
            aligned_a: aligned_a.into_iter().rev().collect(),
            aligned_b: aligned_b.into_iter().rev().collect(),
            score,
            gap_char: self.gap_char,
        })
    }
}

/// Aligns `a` against `b` with the default gap symbol.
pub fn align_pair(a: &str, b: &str, scoring: &Scoring) -> Result<PairwiseAlignment> {
    PairwiseAligner::new(*scoring).align(a, b)
}
