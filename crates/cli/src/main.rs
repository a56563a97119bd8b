//! MarkerSweep command-line tool.
//!
//! Provides subcommands for sweeping merge-conflict markers out of files in
//! place, generating a starter configuration file, and validating an
//! existing one.

mod style;

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use markersweep_core::config::AppConfig;
use markersweep_core::discover::FileDiscovery;
use markersweep_core::resolve::Strategy;
use markersweep_core::sweep::Sweeper;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// MarkerSweep command-line tool.
#[derive(Parser, Debug)]
#[command(
    name = "markersweep",
    version,
    about = "Strip merge-conflict markers from files, keeping the HEAD side"
)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true, default_value = "./markersweep.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sweep conflict markers out of the target files, in place.
    Run {
        /// Explicit files to sweep; bypasses the config file and discovery.
        paths: Vec<PathBuf>,

        /// Discovery root directory (with --glob; default ".").
        #[arg(long)]
        root: Option<PathBuf>,

        /// Glob pattern to discover files, repeatable; bypasses the config file.
        #[arg(long = "glob")]
        globs: Vec<String>,

        /// Resolution strategy: scan or erase.
        #[arg(long)]
        strategy: Option<String>,
    },

    /// Generate a default configuration file.
    Init {
        /// Output path for the generated config file.
        #[arg(short, long, default_value = "./markersweep.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file.
    Validate,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            paths,
            root,
            globs,
            strategy,
        } => cmd_run(&cli.config, paths, root, globs, strategy),
        Commands::Init { output } => {
            init_tracing("warn");
            cmd_init(&output)
        }
        Commands::Validate => {
            init_tracing("warn");
            cmd_validate(&cli.config)
        }
    }
}

/// Initialize tracing with `RUST_LOG` taking precedence over `level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

// ---------------------------------------------------------------------------
// Subcommand implementations
// ---------------------------------------------------------------------------

fn cmd_run(
    config_path: &PathBuf,
    paths: Vec<PathBuf>,
    root: Option<PathBuf>,
    globs: Vec<String>,
    strategy: Option<String>,
) -> Result<()> {
    // Explicit paths act as the injected file list; no config needed.
    if !paths.is_empty() {
        init_tracing("warn");
        let strategy = resolve_strategy(strategy.as_deref(), Strategy::Scan)?;
        return sweep(strategy, &paths);
    }

    // Glob flags likewise bypass the config file.
    if !globs.is_empty() {
        init_tracing("warn");
        let strategy = resolve_strategy(strategy.as_deref(), Strategy::Scan)?;
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let targets = FileDiscovery::new(root, globs).discover()?;
        return sweep(strategy, &targets);
    }

    // Otherwise everything comes from the config file.
    let config =
        AppConfig::load_from_file(config_path).context("failed to load configuration file")?;
    config
        .validate()
        .context("configuration validation failed")?;
    init_tracing(&config.sweep.log_level);

    let strategy = resolve_strategy(strategy.as_deref(), config.sweep.strategy)?;

    let targets = if !config.targets.paths.is_empty() {
        config.targets.paths.clone()
    } else {
        let root = root.unwrap_or_else(|| config.targets.root.clone());
        FileDiscovery::new(root, config.targets.include.clone()).discover()?
    };

    debug!(strategy = %strategy, targets = targets.len(), "run configured");
    sweep(strategy, &targets)
}

fn cmd_init(output: &PathBuf) -> Result<()> {
    if output.exists() {
        bail!("refusing to overwrite existing file: {}", output.display());
    }

    std::fs::write(output, AppConfig::default_template())
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{}",
        style::success(&format!("Wrote {}", output.display()))
    );
    Ok(())
}

fn cmd_validate(config_path: &PathBuf) -> Result<()> {
    let config =
        AppConfig::load_from_file(config_path).context("failed to load configuration file")?;
    config
        .validate()
        .context("configuration validation failed")?;

    println!(
        "{}",
        style::success(&format!(
            "Configuration OK (strategy: {})",
            config.sweep.strategy
        ))
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn resolve_strategy(flag: Option<&str>, fallback: Strategy) -> Result<Strategy> {
    match flag {
        Some(s) => Ok(Strategy::from_str(s)?),
        None => Ok(fallback),
    }
}

fn sweep(strategy: Strategy, paths: &[PathBuf]) -> Result<()> {
    if paths.is_empty() {
        println!("{}", style::warn("No files to sweep"));
        return Ok(());
    }

    let sweeper = Sweeper::new(strategy).context("failed to construct sweeper")?;
    let report = sweeper.sweep_paths(paths).context("sweep aborted")?;

    println!(
        "{}",
        style::success(&format!(
            "Swept {} files ({} modified, strategy: {})",
            report.files_processed, report.files_changed, strategy
        ))
    );
    Ok(())
}
