//! Directory-to-directory alignment: load, star-align, write rows and the
//! word table.
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::text::{load_directory, write_aligned, WordTable};
use crate::{Result, SynopsisError};

pub const TABLE_FILE_STEM: &str = "alignment_table";

/// `dir/alignment_table.tsv` becomes `dir/alignment_table_printable.tsv`.
pub fn printable_path(table_path: &Path) -> PathBuf {
    let stem = table_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| TABLE_FILE_STEM.to_string());
    let mut name = format!("{}_printable", stem);
    if let Some(ext) = table_path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    table_path.with_file_name(name)
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub documents: usize,
    pub pivot_id: String,
    pub width: usize,
    pub output_dir: PathBuf,
    pub aligned_files: Vec<PathBuf>,
    pub table_path: Option<PathBuf>,
    pub printable_path: Option<PathBuf>,
    pub table_columns: usize,
}

pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join("aligned")
}

pub struct AlignmentPipeline {
    config: Config,
    write_table: bool,
    progress: Option<ProgressBar>,
}

impl AlignmentPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            write_table: true,
            progress: None,
        }
    }

    pub fn with_table(mut self, write_table: bool) -> Self {
        self.write_table = write_table;
        self
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Aligns every document in `input_dir`. Output goes to `output_dir`, or
    /// `input_dir/aligned` when none is given.
    pub fn run(&self, input_dir: &Path, output_dir: Option<&Path>) -> Result<PipelineReport> {
        self.config.validate()?;

        tracing::info!("Loading texts from {}...", input_dir.display());
        let documents = load_directory(input_dir)?;
        if documents.len() < 2 {
            return Err(SynopsisError::InvalidInput(format!(
                "need at least 2 text files to align, found {} in {}",
                documents.len(),
                input_dir.display()
            )));
        }
        tracing::info!("Found {} files. Starting alignment...", documents.len());

        let mut aligner = self.config.star_aligner();
        if let Some(pb) = &self.progress {
            aligner = aligner.with_progress(pb.clone());
        }
        let alignment = aligner.run(&documents)?;

        let output_dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_dir(input_dir));
        tracing::info!("Saving aligned files to {}...", output_dir.display());
        let aligned_files =
            write_aligned(&output_dir, &alignment.rows, &self.config.output.aligned_prefix)?;

        let (table_path, printable, table_columns) = if self.write_table {
            let table = WordTable::from_aligned(&alignment.rows, self.config.alignment.gap_char)?;
            let format = self.config.output.table_format;
            let path = output_dir.join(format!("{}.{}", TABLE_FILE_STEM, format.extension()));
            table.write(&path, format)?;
            tracing::info!("Written word table to {}", path.display());

            let chunk_size = self.config.output.chunk_size;
            let printable = if chunk_size > 0 {
                let printable = printable_path(&path);
                table.write_chunked(&printable, chunk_size, format)?;
                tracing::debug!(chunk_size, "Written printable table to {}", printable.display());
                Some(printable)
            } else {
                None
            };
            (Some(path), printable, table.column_count())
        } else {
            (None, None, 0)
        };

        Ok(PipelineReport {
            documents: documents.len(),
            pivot_id: alignment.pivot().id.clone(),
            width: alignment.width(),
            output_dir,
            aligned_files,
            table_path,
            printable_path: printable,
            table_columns,
        })
    }
}

/// Runs the pipeline with `config` and the default options.
pub fn run_pipeline(
    input_dir: &Path,
    output_dir: Option<&Path>,
    config: &Config,
) -> Result<PipelineReport> {
    AlignmentPipeline::new(config.clone()).run(input_dir, output_dir)
}
