//! bbpscraper CLI
//!
//! Reads domains from stdin, one per line, and prints every qualifying
//! `<url> [matches]` line as soon as it is found.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use bbpscraper::{
    banner,
    error::Result,
    models::Config,
    pipeline,
    services::StdoutReporter,
    utils::input,
};
use clap::Parser;

const USAGE: &str =
    "Usage: bbpscraper --path bbp-paths.txt [--summary summary.txt] [--stop N] [--parallel N]";

/// bbpscraper - bug bounty program page finder
#[derive(Parser, Debug)]
#[command(name = "bbpscraper", disable_version_flag = true)]
struct Cli {
    /// File with list of paths to append
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// File to write path match summary (`.json` for JSON)
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Stop after N successful matches per domain (0 checks all paths) [default: 1]
    #[arg(long)]
    stop: Option<usize>,

    /// Timeout per request in seconds [default: 15]
    #[arg(long)]
    timeout: Option<u64>,

    /// Number of concurrent domain scans [default: 10]
    #[arg(long)]
    parallel: Option<usize>,

    /// Minimum number of distinct matches to consider a valid result [default: 2]
    #[arg(long)]
    mmc: Option<usize>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Silent mode: no banner, warnings and errors only
    #[arg(long)]
    silent: bool,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    verbose: bool,

    /// Print the version of the tool and exit
    #[arg(long)]
    version: bool,
}

impl Cli {
    /// Merge command-line overrides into the file configuration.
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(stop) = self.stop {
            config.scan.stop_count = stop;
        }
        if let Some(timeout) = self.timeout {
            config.scan.timeout_secs = timeout;
        }
        if let Some(parallel) = self.parallel {
            config.scan.parallel = parallel;
        }
        if let Some(mmc) = self.mmc {
            config.scan.min_matches = mmc;
        }
    }
}

/// Initialize logging based on verbosity flags.
fn init_logging(verbose: bool, silent: bool) {
    let level = match (verbose, silent) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

async fn run(cli: &Cli, path_file: &Path) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate()?;
    let config = Arc::new(config);

    let paths = input::read_path_file(path_file).await?;
    log::info!("Loaded {} paths from {}", paths.len(), path_file.display());

    let domains = input::read_domains().await?;

    let reporter = Arc::new(StdoutReporter::new(cli.verbose));
    let outcome = pipeline::run_scanner(Arc::clone(&config), paths, domains, reporter).await?;

    log::info!(
        "Scanned {} domains: {} requests, {} failed, {} qualifying results ({} domains stopped early) in {:.1}s",
        outcome.domain_total,
        outcome.request_total,
        outcome.fetch_failures,
        outcome.hit_total,
        outcome.stopped_early,
        outcome.elapsed_secs()
    );
    if outcome.task_failures > 0 {
        log::warn!("{} domain scans did not finish", outcome.task_failures);
    }

    if let Some(summary_path) = &cli.summary {
        pipeline::write_summary(summary_path, &outcome.summary).await?;
    }

    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        banner::print_banner();
        println!("{}", banner::version_line());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose, cli.silent);

    if !cli.silent {
        banner::print_banner();
    }

    let Some(path_file) = cli.path.clone() else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    match run(&cli, &path_file).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
