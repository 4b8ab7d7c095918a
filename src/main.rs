//! `ministories` - terminal host for the MiniStories SDK

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use ministories::{Config, StoryId};

mod commands;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "MINISTORIES_LOG";

#[derive(Parser)]
#[command(name = "ministories")]
#[command(version, about = "Browse and play MiniStories from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API endpoint (overrides the config file)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Host page URL; `?debug=1` enables the debug overlay
    #[arg(long, global = true)]
    page_url: Option<String>,

    /// Show the performance debug overlay
    #[arg(long, global = true)]
    debug: bool,

    /// Config file path (default: <config dir>/ministories/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the story row
    Stories {
        /// Only list stories in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Browse the story row interactively
    Browse {
        /// Only list stories in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Open a story in the player
    Open {
        /// Story id
        id: StoryId,
        /// Page to start on (0-indexed)
        #[arg(long, default_value_t = 0)]
        start: usize,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Commands {
    /// Whether the command takes over the terminal.
    fn is_interactive(&self) -> bool {
        matches!(self, Commands::Browse { .. } | Commands::Open { .. })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref(), cli.command.is_interactive())?;

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "ministories", &mut io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Stories { category } => commands::stories::handle(&config, category).await,
        Commands::Browse { category } => commands::browse::handle(&config, category).await,
        Commands::Open { id, start } => commands::open::handle(&config, id, start).await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load the config file and apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(page_url) = &cli.page_url {
        config.page_url = Some(page_url.clone());
    }
    if cli.debug {
        config.debug = Some(true);
    }
    Ok(config)
}

/// Install the tracing subscriber.
///
/// Interactive commands own the terminal, so without a log file they log
/// nowhere.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None if interactive => {}
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
