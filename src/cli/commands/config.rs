use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

use crate::cli::formatter::{print_section, print_success};
use crate::core::config::{default_config, default_config_path, resolve_config, save_config};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a default configuration file
    #[arg(long)]
    pub init: bool,

    /// Configuration file (default: ~/.synopsis/config.toml)
    #[arg(long, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file with --init
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    if args.init {
        let path = args
            .path
            .clone()
            .or_else(default_config_path)
            .context("Could not determine a home directory; pass --path")?;
        if path.exists() && !args.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        save_config(&path, &default_config())?;
        print_success(&format!("Wrote default configuration to {}", path.display()));
        return Ok(());
    }

    let config = resolve_config(args.path.as_deref())?;
    let source = args
        .path
        .clone()
        .or_else(|| default_config_path().filter(|p| p.is_file()))
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in defaults".to_string());

    print_section(&format!("Effective configuration ({})", source));
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}
