use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::alignment::{CandidatePolicy, PairwiseAligner, Scoring, StarAligner, DEFAULT_GAP_CHAR};
use crate::text::{TableFormat, DEFAULT_ALIGNED_PREFIX, DEFAULT_CHUNK_SIZE};
use crate::SynopsisError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scoring: Scoring,
    pub alignment: AlignmentConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    pub gap_char: char,
    pub candidate_policy: CandidatePolicy,
    /// Align non-pivot documents on the rayon pool
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name prefix for aligned rows
    pub aligned_prefix: String,
    pub table_format: TableFormat,
    /// Word columns per chunk of the printable table; 0 turns it off
    pub chunk_size: usize,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            gap_char: DEFAULT_GAP_CHAR,
            candidate_policy: CandidatePolicy::FallbackToFirst,
            parallel: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            aligned_prefix: DEFAULT_ALIGNED_PREFIX.to_string(),
            table_format: TableFormat::Tsv,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), SynopsisError> {
        let scores = [
            ("scoring.match_score", self.scoring.match_score),
            ("scoring.mismatch_score", self.scoring.mismatch_score),
            ("scoring.gap_open_score", self.scoring.gap_open_score),
            ("scoring.gap_extend_score", self.scoring.gap_extend_score),
        ];
        for (name, value) in scores {
            if !value.is_finite() {
                return Err(SynopsisError::Config(format!("{} must be finite", name)));
            }
        }

        if self.alignment.gap_char.is_whitespace() || self.alignment.gap_char.is_control() {
            return Err(SynopsisError::Config(format!(
                "alignment.gap_char must be a visible character, got {:?}",
                self.alignment.gap_char
            )));
        }

        if self.output.aligned_prefix.is_empty() {
            return Err(SynopsisError::Config(
                "output.aligned_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pairwise_aligner(&self) -> PairwiseAligner {
        PairwiseAligner::new(self.scoring)
            .with_gap_char(self.alignment.gap_char)
            .with_policy(self.alignment.candidate_policy)
    }

    pub fn star_aligner(&self) -> StarAligner {
        StarAligner::new(self.pairwise_aligner()).with_parallel(self.alignment.parallel)
    }
}

pub fn default_config() -> Config {
    Config::default()
}

/// `~/.synopsis/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".synopsis").join("config.toml"))
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, SynopsisError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| SynopsisError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Loads `path` if given, otherwise the default location if it exists,
/// otherwise the built-in defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<Config, SynopsisError> {
    match path {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(default) if default.is_file() => {
                tracing::debug!("Using config from {}", default.display());
                load_config(default)
            }
            _ => Ok(default_config()),
        },
    }
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), SynopsisError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| SynopsisError::Config(format!("Failed to serialize config: {}", e)))?;
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = default_config();
        assert_eq!(config.scoring, Scoring::DEFAULT);
        assert_eq!(config.alignment.gap_char, '@');
        assert_eq!(config.alignment.candidate_policy, CandidatePolicy::FallbackToFirst);
        assert_eq!(config.output.aligned_prefix, "aligned_");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = default_config();
        config.scoring = Scoring::new(2.0, -1.0, -1.5, -0.25);
        config.alignment.gap_char = '~';
        config.alignment.candidate_policy = CandidatePolicy::Strict;
        config.output.table_format = TableFormat::Json;

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[alignment]\ngap_char = \"#\"\ncandidate_policy = \"strict\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.alignment.gap_char, '#');
        assert_eq!(config.alignment.candidate_policy, CandidatePolicy::Strict);
        assert!(config.alignment.parallel);
        assert_eq!(config.scoring, Scoring::DEFAULT);
    }

    #[test]
    fn test_invalid_gap_char_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[alignment]\ngap_char = \" \"\n").unwrap();

        assert!(matches!(load_config(&path), Err(SynopsisError::Config(_))));
    }

    #[test]
    fn test_malformed_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\nmatch_score = ").unwrap();

        assert!(matches!(load_config(&path), Err(SynopsisError::Config(_))));
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ntable_format = \"json\"\n").unwrap();

        let config = resolve_config(Some(path.as_path())).unwrap();
        assert_eq!(config.output.table_format, TableFormat::Json);
    }
}
