use anyhow::Context;
use clap::Args;
use indicatif::ProgressBar;
use std::path::PathBuf;

use crate::alignment::CandidatePolicy;
use crate::cli::formatter::{
    create_progress_style, format_number, print_section, print_stats_table, print_success,
    print_tip,
};
use crate::core::config::{resolve_config, Config};
use crate::core::pipeline::AlignmentPipeline;
use crate::text::TableFormat;

#[derive(Args, Debug)]
pub struct AlignArgs {
    /// Directory containing the text files to align
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory for aligned files (default: INPUT_DIR/aligned)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.synopsis/config.toml if present)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Reserved gap symbol
    #[arg(long)]
    pub gap_char: Option<char>,

    /// Score added for matching characters
    #[arg(long, allow_negative_numbers = true)]
    pub match_score: Option<f64>,

    /// Score added for mismatching characters
    #[arg(long, allow_negative_numbers = true)]
    pub mismatch_score: Option<f64>,

    /// Score added for the first character of a gap run
    #[arg(long, allow_negative_numbers = true)]
    pub gap_open: Option<f64>,

    /// Score added for every further character of a gap run
    #[arg(long, allow_negative_numbers = true)]
    pub gap_extend: Option<f64>,

    /// Fail instead of keeping an alignment that splits or merges pivot words
    #[arg(long)]
    pub strict: bool,

    /// Align documents one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Skip writing the word table
    #[arg(long)]
    pub no_table: bool,

    /// Word table format (tsv, json)
    #[arg(long)]
    pub format: Option<TableFormat>,

    /// Word columns per chunk of the printable table (0 = skip it)
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,
}

impl AlignArgs {
    /// Command-line values take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(gap_char) = self.gap_char {
            config.alignment.gap_char = gap_char;
        }
        if let Some(score) = self.match_score {
            config.scoring.match_score = score;
        }
        if let Some(score) = self.mismatch_score {
            config.scoring.mismatch_score = score;
        }
        if let Some(score) = self.gap_open {
            config.scoring.gap_open_score = score;
        }
        if let Some(score) = self.gap_extend {
            config.scoring.gap_extend_score = score;
        }
        if self.strict {
            config.alignment.candidate_policy = CandidatePolicy::Strict;
        }
        if self.sequential {
            config.alignment.parallel = false;
        }
        if let Some(format) = self.format {
            config.output.table_format = format;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.output.chunk_size = chunk_size;
        }
    }
}

pub fn run(args: AlignArgs) -> anyhow::Result<()> {
    let mut config = resolve_config(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate()?;

    print_section(&format!("Aligning {}", args.input_dir.display()));

    let pb = ProgressBar::new(0);
    pb.set_style(create_progress_style());
    pb.set_message("aligned against pivot");

    let report = AlignmentPipeline::new(config)
        .with_table(!args.no_table)
        .with_progress(pb.clone())
        .run(&args.input_dir, args.output_dir.as_deref())
        .with_context(|| format!("Failed to align documents in {}", args.input_dir.display()))?;
    pb.finish_and_clear();

    let mut stats = vec![
        ("Documents", format_number(report.documents)),
        ("Pivot", report.pivot_id.clone()),
        ("Aligned width", format_number(report.width)),
        ("Output directory", report.output_dir.display().to_string()),
    ];
    if let Some(table_path) = &report.table_path {
        stats.push(("Word columns", format_number(report.table_columns)));
        stats.push(("Word table", table_path.display().to_string()));
    }
    if let Some(printable) = &report.printable_path {
        stats.push(("Printable table", printable.display().to_string()));
    }
    print_stats_table("Alignment", stats);

    print_success("Alignment complete.");
    if report.table_path.is_none() {
        print_tip(&format!(
            "build the word table later with `synopsis table {}`",
            report.output_dir.display()
        ));
    }
    Ok(())
}
