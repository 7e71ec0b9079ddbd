use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use stellahub::logging::{self, LogTarget};
use stellahub::model::AppConfig;
use stellahub::script::{load_script, run_script};
use stellahub::tui::TuiRunOptions;

#[derive(Parser)]
#[command(name = "stellahub")]
#[command(about = "Tokenized code ownership console (simulated testnet)", long_about = None)]
struct Cli {
    /// Path to a JSON config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive console (default)
    Tui {
        /// Connect this public key on startup
        #[arg(long)]
        identity: Option<String>,
    },

    /// Replay a JSON scenario against a fresh simulated ledger
    Script {
        file: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or write configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration as JSON
    Show,
    /// Write the default configuration
    Init {
        #[arg(long, default_value = "stellahub.json")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load(p),
        None => Ok(AppConfig::default()),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { identity: None });

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Tui { .. }) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(target)?;

    let config = load_config(cli.config.as_deref())?;

    match command {
        Commands::Tui { identity } => {
            stellahub::tui::run_with_options(TuiRunOptions { config, identity })?;
        }

        Commands::Script { file, json } => {
            let steps = load_script(&file)?;
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("build tokio runtime")?;
            let reports = rt.block_on(run_script(&steps, &config));
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&reports).context("serialize reports json")?
                );
            } else {
                for r in &reports {
                    let mark = if r.ok { "ok " } else { "ERR" };
                    println!("{:>3} {} {:<10} {}", r.index, mark, r.step, r.detail);
                }
            }
            if reports.iter().any(|r| !r.ok) {
                anyhow::bail!(
                    "{} of {} steps failed",
                    reports.iter().filter(|r| !r.ok).count(),
                    reports.len()
                );
            }
        }

        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&config).context("serialize config json")?
                );
            }
            ConfigCommands::Init { path, force } => {
                if path.exists() && !force {
                    anyhow::bail!("{} already exists (use --force)", path.display());
                }
                AppConfig::default().write(&path)?;
                println!("Wrote {}", path.display());
            }
        },
    }

    Ok(())
}
