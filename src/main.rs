use clap::Parser;
use std::process;
use synopsis::cli::formatter;
use synopsis::cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise SYNOPSIS_LOG, otherwise info (debug with -v)
    let default_level = if cli.verbose > 0 { "debug" } else { "info" };
    let log_level = std::env::var("SYNOPSIS_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    formatter::init();

    if let Err(e) = run(cli) {
        formatter::print_error(&format!("{:#}", e));

        let exit_code = match e.downcast_ref::<synopsis::SynopsisError>() {
            Some(synopsis::SynopsisError::Config(_)) => 2,
            Some(synopsis::SynopsisError::Io(_)) => 3,
            Some(synopsis::SynopsisError::InvalidInput(_))
            | Some(synopsis::SynopsisError::AlignmentInconsistency { .. })
            | Some(synopsis::SynopsisError::DegenerateAlignment(_))
            | Some(synopsis::SynopsisError::CandidateRejected(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let threads = synopsis::utils::parallel::resolve_threads(cli.threads);
    synopsis::utils::parallel::configure_thread_pool(threads)?;
    tracing::debug!("Using {} threads", threads);

    match cli.command {
        Commands::Align(args) => synopsis::cli::commands::align::run(args),
        Commands::Lcs(args) => synopsis::cli::commands::lcs::run(args),
        Commands::Table(args) => synopsis::cli::commands::table::run(args),
        Commands::Config(args) => synopsis::cli::commands::config::run(args),
    }
}
