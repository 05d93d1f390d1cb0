use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::cli::formatter::{format_number, print_success, print_warning, print_word_table};
use crate::core::config::resolve_config;
use crate::core::pipeline::{printable_path, TABLE_FILE_STEM};
use crate::text::{load_aligned, TableFormat, WordTable};

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Directory holding aligned files
    #[arg(value_name = "ALIGNED_DIR")]
    pub aligned_dir: PathBuf,

    /// Output file (default: ALIGNED_DIR/alignment_table.<format>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Table format (tsv, json)
    #[arg(long)]
    pub format: Option<TableFormat>,

    /// File name prefix of aligned files
    #[arg(long)]
    pub prefix: Option<String>,

    /// Configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Word columns per chunk of the printable table (0 = skip it)
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<usize>,

    /// Print the table to the terminal
    #[arg(long)]
    pub show: bool,

    /// Maximum number of word columns to print with --show
    #[arg(long, default_value = "12")]
    pub max_columns: usize,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref()).context("Failed to load configuration")?;
    let prefix = args
        .prefix
        .clone()
        .unwrap_or_else(|| config.output.aligned_prefix.clone());
    let format = args.format.unwrap_or(config.output.table_format);

    let rows = load_aligned(&args.aligned_dir, &prefix)
        .with_context(|| format!("Failed to read aligned files from {}", args.aligned_dir.display()))?;
    if rows.is_empty() {
        print_warning(&format!(
            "No aligned files matching '{}*.txt' found in {}",
            prefix,
            args.aligned_dir.display()
        ));
        return Ok(());
    }

    let table = WordTable::from_aligned(&rows, config.alignment.gap_char)?;
    let output = args.output.clone().unwrap_or_else(|| {
        args.aligned_dir
            .join(format!("{}.{}", TABLE_FILE_STEM, format.extension()))
    });
    table.write(&output, format)?;

    let chunk_size = args.chunk_size.unwrap_or(config.output.chunk_size);
    if chunk_size > 0 {
        let printable = printable_path(&output);
        table.write_chunked(&printable, chunk_size, format)?;
        print_success(&format!(
            "Written printable table ({} columns per chunk) to {}",
            chunk_size,
            printable.display()
        ));
    }

    if args.show {
        print_word_table(&table, args.max_columns);
    }
    print_success(&format!(
        "Written {} rows x {} word columns to {}",
        format_number(table.rows.len()),
        format_number(table.column_count()),
        output.display()
    ));
    Ok(())
}
