//! DevAI CLI - Command-line interface for DevAI Pro.

use clap::{Parser, Subcommand};
use devai_core::config::Config;
use devai_core::view::SubmitPolicy;
use devai_core::Feature;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

/// DevAI Pro - AI-assisted repository analysis
#[derive(Parser, Debug)]
#[command(name = "devai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Backend URL (overrides the saved configuration)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available features
    Features,

    /// Run a feature against a repository
    Run {
        /// Feature slug or id (e.g. `history` or `6`)
        feature: Feature,
        /// Repository in owner/name form
        repo: String,
        /// Print the decoded result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Set the backend URL
    SetUrl {
        /// Base URL, e.g. http://127.0.0.1:5000
        url: String,
    },

    /// Set the behaviour for submissions while a request is in flight
    SetPolicy {
        /// `reject-if-busy` or `cancel-and-replace`
        policy: SubmitPolicy,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("devai={log_level},devai_core={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::load();
    if let Some(url) = cli.api_url.as_deref() {
        if let Err(e) = config.set_api_url(url) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let result = match cli.command {
        Commands::Features => commands::features(&config).await,
        Commands::Run {
            feature,
            repo,
            json,
        } => commands::run(&config, feature, &repo, json).await,
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config_show(&config),
            ConfigCommands::SetUrl { url } => commands::config_set_url(&url),
            ConfigCommands::SetPolicy { policy } => commands::config_set_policy(policy),
        },
        Commands::Version => {
            println!("devai {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
