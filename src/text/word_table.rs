//! Word table derived from a star alignment
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::text::document::AlignedDocument;
use crate::{Result, SynopsisError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    #[default]
    Tsv,
    Json,
}

impl TableFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Tsv => "tsv",
            TableFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(TableFormat::Tsv),
            "json" => Ok(TableFormat::Json),
            _ => Err(format!("Unknown table format: {}", s)),
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRow {
    pub id: String,
    pub words: Vec<String>,
}

/// Word columns per chunk in the printable layout
pub const DEFAULT_CHUNK_SIZE: usize = 20;

/// One row of words per aligned document; cell `j` of every row comes from
/// the same span of alignment columns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordTable {
    pub rows: Vec<WordRow>,
}

impl WordTable {
    /// Splits aligned rows into words. A column where any row has a space
    /// ends the current word of every row; gap symbols are dropped from
    /// committed words.
    pub fn from_aligned(aligned: &[AlignedDocument], gap: char) -> Result<Self> {
        let columns: Vec<Vec<char>> = aligned.iter().map(|row| row.aligned.chars().collect()).collect();
        let Some(width) = columns.first().map(Vec::len) else {
            return Ok(Self::default());
        };

        for (row, chars) in aligned.iter().zip(&columns) {
            if chars.len() != width {
                return Err(SynopsisError::InvalidInput(format!(
                    "Length mismatch: {} has {} vs {}",
                    row.id,
                    chars.len(),
                    width
                )));
            }
        }

        let mut words: Vec<Vec<String>> = vec![Vec::new(); aligned.len()];
        let mut current: Vec<String> = vec![String::new(); aligned.len()];

        for col in 0..width {
            let is_break = columns.iter().any(|chars| chars[col] == ' ');
            for (row_idx, chars) in columns.iter().enumerate() {
                if is_break {
                    words[row_idx].push(std::mem::take(&mut current[row_idx]));
                } else if chars[col] != gap {
                    current[row_idx].push(chars[col]);
                }
            }
        }
        for (row_words, word) in words.iter_mut().zip(current) {
            row_words.push(word);
        }

        let rows = aligned
            .iter()
            .zip(words)
            .map(|(row, words)| WordRow {
                id: row.id.clone(),
                words,
            })
            .collect();
        Ok(Self { rows })
    }

    /// Number of word columns
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|row| row.words.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated rows: the id followed by one cell per word.
    pub fn to_tsv(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.id);
            for word in &row.words {
                out.push('\t');
                out.push_str(word);
            }
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SynopsisError::Serialization(e.to_string()))
    }

    /// Splits the word columns into tables of exactly `size` columns each;
    /// the last chunk is padded with empty cells.
    pub fn chunks(&self, size: usize) -> Result<Vec<WordTable>> {
        if size == 0 {
            return Err(SynopsisError::InvalidInput(
                "chunk size must be at least 1".to_string(),
            ));
        }

        let columns = self.column_count();
        let chunks = (0..columns)
            .step_by(size)
            .map(|start| WordTable {
                rows: self
                    .rows
                    .iter()
                    .map(|row| WordRow {
                        id: row.id.clone(),
                        words: (start..start + size)
                            .map(|col| row.words.get(col).cloned().unwrap_or_default())
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Ok(chunks)
    }

    /// Printable TSV: chunks of `size` columns stacked vertically with an
    /// empty row between consecutive chunks.
    pub fn to_tsv_chunked(&self, size: usize) -> Result<String> {
        let separator = format!("{}\n", "\t".repeat(size));
        let chunks: Vec<String> = self.chunks(size)?.iter().map(WordTable::to_tsv).collect();
        Ok(chunks.join(&separator))
    }

    /// Writes the printable layout. JSON output is the list of chunks.
    pub fn write_chunked<P: AsRef<Path>>(
        &self,
        path: P,
        size: usize,
        format: TableFormat,
    ) -> Result<()> {
        let contents = match format {
            TableFormat::Tsv => self.to_tsv_chunked(size)?,
            TableFormat::Json => serde_json::to_string_pretty(&self.chunks(size)?)
                .map_err(|e| SynopsisError::Serialization(e.to_string()))?,
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, format: TableFormat) -> Result<()> {
        let contents = match format {
            TableFormat::Tsv => self.to_tsv(),
            TableFormat::Json => self.to_json()?,
        };
        std::fs::write(path, contents)?;
        Ok(())
    }
}
