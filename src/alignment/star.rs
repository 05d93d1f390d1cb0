//! Star alignment: every document is aligned against one pivot and the
//! pairwise results are merged into a single gapped matrix.
use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::alignment::pairwise::{PairwiseAligner, PairwiseAlignment};
use crate::alignment::scoring::{Scoring, ScoringScheme};
use crate::text::document::{AlignedDocument, Document};
use crate::{Result, SynopsisError};

/// Index of the longest document; the first one wins ties.
pub fn select_pivot(documents: &[Document]) -> Option<usize> {
    let mut pivot: Option<(usize, usize)> = None;
    for (idx, doc) in documents.iter().enumerate() {
        let len = doc.len();
        match pivot {
            Some((_, best)) if len <= best => {}
            _ => pivot = Some((idx, len)),
        }
    }
    pivot.map(|(idx, _)| idx)
}

/// One document's pairwise alignment, re-expressed relative to pivot
/// positions.
///
/// `slots[k]` holds the characters inserted immediately before pivot
/// character `k` (`slots[pivot_len]` holds trailing insertions) and
/// `matches[k]` the character, possibly the gap symbol, aligned to pivot
/// character `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotProjection {
    pub slots: Vec<String>,
    pub matches: Vec<char>,
}

impl PivotProjection {
    pub fn from_alignment(
        id: &str,
        pivot: &[char],
        alignment: &PairwiseAlignment,
    ) -> Result<Self> {
        let aligned_pivot: Vec<char> = alignment.aligned_a.chars().collect();
        let aligned_other: Vec<char> = alignment.aligned_b.chars().collect();
        if aligned_pivot.len() != aligned_other.len() {
            return Err(SynopsisError::AlignmentInconsistency {
                id: id.to_string(),
                reason: format!(
                    "aligned pivot has length {}, aligned sequence has length {}",
                    aligned_pivot.len(),
                    aligned_other.len()
                ),
            });
        }

        let gap = alignment.gap_char;
        let mut slots = vec![String::new(); pivot.len() + 1];
        let mut matches = Vec::with_capacity(pivot.len());
        let mut insertion = String::new();
        let mut p = 0;

        for (&pivot_char, &other_char) in aligned_pivot.iter().zip(aligned_other.iter()) {
            if pivot_char == gap {
                insertion.push(other_char);
                continue;
            }
            if pivot.get(p) != Some(&pivot_char) {
                return Err(SynopsisError::AlignmentInconsistency {
                    id: id.to_string(),
                    reason: format!(
                        "aligned pivot diverges from the pivot at position {}",
                        p
                    ),
                });
            }
            slots[p] = std::mem::take(&mut insertion);
            matches.push(other_char);
            p += 1;
        }

        if p != pivot.len() {
            return Err(SynopsisError::AlignmentInconsistency {
                id: id.to_string(),
                reason: format!(
                    "aligned pivot covers {} of {} pivot characters",
                    p,
                    pivot.len()
                ),
            });
        }
        slots[p] = insertion;

        Ok(Self { slots, matches })
    }

    fn slot_width(&self, k: usize) -> usize {
        self.slots[k].chars().count()
    }
}

/// Merges projections into gapped rows. Returns the pivot row followed by
/// one row per projection, all of equal length.
///
/// Every projection must carry `pivot.len() + 1` slots and `pivot.len()`
/// matches; projection `i` is reported as `projection #i` otherwise.
pub fn merge_projections(
    pivot: &[char],
    projections: &[PivotProjection],
    gap: char,
) -> Result<(String, Vec<String>)> {
    for (i, projection) in projections.iter().enumerate() {
        if projection.slots.len() != pivot.len() + 1 || projection.matches.len() != pivot.len() {
            return Err(SynopsisError::AlignmentInconsistency {
                id: format!("projection #{}", i),
                reason: format!(
                    "{} slots and {} matches do not fit a pivot of length {}",
                    projection.slots.len(),
                    projection.matches.len(),
                    pivot.len()
                ),
            });
        }
    }

    let mut pivot_row = String::new();
    let mut rows = vec![String::new(); projections.len()];

    for k in 0..=pivot.len() {
        let width = projections
            .iter()
            .map(|projection| projection.slot_width(k))
            .max()
            .unwrap_or(0);

        if width > 0 {
            pivot_row.extend(std::iter::repeat(gap).take(width));
            for (row, projection) in rows.iter_mut().zip(projections) {
                row.push_str(&projection.slots[k]);
                row.extend(std::iter::repeat(gap).take(width - projection.slot_width(k)));
            }
        }

        if k < pivot.len() {
            pivot_row.push(pivot[k]);
            for (row, projection) in rows.iter_mut().zip(projections) {
                row.push(projection.matches[k]);
            }
        }
    }

    Ok((pivot_row, rows))
}

/// Result of one star-alignment run
#[derive(Debug, Clone)]
pub struct StarAlignment {
    pub pivot_index: usize,
    pub rows: Vec<AlignedDocument>,
}

impl StarAlignment {
    pub fn pivot(&self) -> &AlignedDocument {
        &self.rows[self.pivot_index]
    }

    /// Shared length of every row
    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }
}

pub struct StarAligner<S: ScoringScheme = Scoring> {
    aligner: PairwiseAligner<S>,
    parallel: bool,
    progress: Option<ProgressBar>,
}

impl Default for StarAligner<Scoring> {
    fn default() -> Self {
        Self::new(PairwiseAligner::default())
    }
}

impl<S: ScoringScheme + Sync> StarAligner<S> {
    pub fn new(aligner: PairwiseAligner<S>) -> Self {
        Self {
            aligner,
            parallel: true,
            progress: None,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Ticks `progress` once per aligned non-pivot document.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn aligner(&self) -> &PairwiseAligner<S> {
        &self.aligner
    }

    /// Aligns `documents` and returns the rows in input order.
    pub fn align(&self, documents: &[Document]) -> Result<Vec<AlignedDocument>> {
        Ok(self.run(documents)?.rows)
    }

    pub fn run(&self, documents: &[Document]) -> Result<StarAlignment> {
        if documents.len() < 2 {
            return Err(SynopsisError::InvalidInput(format!(
                "star alignment needs at least 2 sequences, got {}",
                documents.len()
            )));
        }

        let gap = self.aligner.gap_char();
        if let Some(doc) = documents.iter().find(|doc| doc.content.contains(gap)) {
            return Err(SynopsisError::InvalidInput(format!(
                "sequence '{}' contains the reserved gap symbol '{}'",
                doc.id, gap
            )));
        }

        let pivot_index = select_pivot(documents).ok_or_else(|| {
            SynopsisError::InvalidInput("no sequences to select a pivot from".to_string())
        })?;
        let pivot_doc = &documents[pivot_index];
        let pivot: Vec<char> = pivot_doc.content.chars().collect();
        tracing::info!(
            "Selected pivot: {} (Length: {})",
            pivot_doc.id,
            pivot.len()
        );

        let others: Vec<usize> = (0..documents.len()).filter(|&i| i != pivot_index).collect();
        if let Some(pb) = &self.progress {
            pb.set_length(others.len() as u64);
        }

        let project = |&idx: &usize| -> Result<PivotProjection> {
            let doc = &documents[idx];
            tracing::info!("Aligning {} against pivot...", doc.id);
            let alignment = self
                .aligner
                .align(&pivot_doc.content, &doc.content)
                .map_err(|e| match e {
                    SynopsisError::CandidateRejected(msg) => {
                        SynopsisError::CandidateRejected(format!("'{}': {}", doc.id, msg))
                    }
                    SynopsisError::DegenerateAlignment(msg) => {
                        SynopsisError::DegenerateAlignment(format!("'{}': {}", doc.id, msg))
                    }
                    other => other,
                })?;
            let projection = PivotProjection::from_alignment(&doc.id, &pivot, &alignment)?;
            if let Some(pb) = &self.progress {
                pb.inc(1);
            }
            Ok(projection)
        };

        // Either every pairwise alignment succeeds or nothing is merged.
        let projections: Vec<PivotProjection> = if self.parallel {
            others.par_iter().map(project).collect::<Result<_>>()?
        } else {
            others.iter().map(project).collect::<Result<_>>()?
        };

        let (pivot_row, other_rows) = merge_projections(&pivot, &projections, gap)?;
        tracing::debug!(width = pivot_row.chars().count(), "Merged star alignment");

        let mut rows: Vec<Option<String>> = vec![None; documents.len()];
        rows[pivot_index] = Some(pivot_row);
        for (idx, row) in others.iter().zip(other_rows) {
            rows[*idx] = Some(row);
        }

        let rows = documents
            .iter()
            .zip(rows)
            .map(|(doc, row)| AlignedDocument::new(doc.id.clone(), row.unwrap_or_default()))
            .collect();

        Ok(StarAlignment { pivot_index, rows })
    }
}

/// Star-aligns `documents` with the default scoring and gap symbol.
pub fn star_align(documents: &[Document]) -> Result<Vec<AlignedDocument>> {
    StarAligner::default().align(documents)
}
