use clap::Args;
use colored::*;

use crate::alignment::{align_pair, longest_common_subsequence, Scoring};

#[derive(Args, Debug)]
pub struct LcsArgs {
    /// First string
    pub first: String,

    /// Second string
    pub second: String,

    /// Also print the alignment the subsequence was read from
    #[arg(long)]
    pub show_alignment: bool,
}

pub fn run(args: LcsArgs) -> anyhow::Result<()> {
    let lcs = longest_common_subsequence(&args.first, &args.second)?;

    println!(
        "LCS('{}', '{}') = '{}' (Len: {})",
        args.first,
        args.second,
        lcs.green().bold(),
        lcs.chars().count()
    );

    if args.show_alignment && !args.first.is_empty() && !args.second.is_empty() {
        let alignment = align_pair(&args.first, &args.second, &Scoring::LCS)?;
        println!("\n  {}", alignment.aligned_a);
        println!("  {}", alignment.alignment_string().dimmed());
        println!("  {}", alignment.aligned_b);
    }
    Ok(())
}
