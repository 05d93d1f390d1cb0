pub mod commands;
pub mod formatter;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "synopsis",
    version,
    about = "Align noisy text documents into a column-consistent word table",
    long_about = "Synopsis star-aligns a directory of text documents (for example several OCR \
                  readings of the same page) against the longest one, writes the gapped rows \
                  and derives a word table whose columns line up across documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Number of threads to use (0 = all available)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub threads: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Star-align every text file in a directory
    Align(commands::align::AlignArgs),

    /// Print the longest common subsequence of two strings
    Lcs(commands::lcs::LcsArgs),

    /// Rebuild the word table from previously aligned files
    Table(commands::table::TableArgs),

    /// Show or initialize the configuration file
    Config(commands::config::ConfigArgs),
}
