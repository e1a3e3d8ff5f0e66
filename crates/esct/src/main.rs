// SPDX-FileCopyrightText: 2026 ESCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `esct`: command-line client for the ESCT welfare-fund platform.

mod admin;
mod claims;
mod config_check;
mod dashboard;
mod output;
mod queue;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use esct_client::{ApiClient, FileTokenStore};
use esct_config::EsctConfig;
use esct_core::EsctError;

/// Command-line client for the ESCT welfare-fund platform.
#[derive(Parser, Debug)]
#[command(name = "esct", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a bearer token after checking it with the server.
    Login {
        /// Token issued by the ESCT web app.
        #[arg(long)]
        token: String,
    },
    /// Forget the stored token.
    Logout,
    /// Show the signed-in member.
    Whoami {
        #[arg(long)]
        json: bool,
    },
    /// Member dashboard: claim totals, donation calendar, contributions.
    Dashboard {
        /// Output JSON.
        #[arg(long)]
        json: bool,
        /// Disable colors.
        #[arg(long)]
        plain: bool,
    },
    /// List claims.
    Claims {
        /// Only claims of this type, paginated (e.g. "Medical Claim").
        #[arg(long = "type", value_name = "TYPE")]
        claim_type: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
        /// Only claims you raised.
        #[arg(long, conflicts_with = "claim_type")]
        mine: bool,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        plain: bool,
    },
    /// Show one claim.
    Claim {
        id: String,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        plain: bool,
    },
    /// Manage your donation queue.
    Queue {
        #[command(subcommand)]
        action: QueueAction,
    },
    /// Create a payment order for a claim.
    Donate {
        claim_id: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        json: bool,
    },
    /// Administrator commands.
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Inspect the client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum QueueAction {
    /// Show queued claims.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Queue one or more claims.
    Add {
        #[arg(required = true)]
        claim_ids: Vec<String>,
    },
    /// Remove one or more claims from the queue.
    Remove {
        #[arg(required = true)]
        claim_ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum AdminAction {
    /// Platform headline numbers.
    Stats {
        #[arg(long)]
        json: bool,
        #[arg(long)]
        plain: bool,
    },
    /// Approve or reject a claim.
    VerifyClaim {
        id: String,
        /// Approved or Rejected.
        #[arg(long)]
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Platform settings.
    Config {
        #[command(subcommand)]
        action: AdminConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub(crate) enum AdminConfigAction {
    /// Current values on the server.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Validate and update one setting.
    Set { key: String, value: String },
    /// Known settings and their accepted values.
    Keys {
        /// Only this category (donations, claims, payments, credit, security, system).
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Validate configuration and print the resolved values.
    Check,
    /// Print the effective configuration as TOML.
    Show,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => esct_config::load_and_validate_path(path),
        None => esct_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            esct_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.log_level);

    if let Err(e) = run(cli.command, &config).await {
        eprintln!("esct: {}", e.display_message());
        std::process::exit(1);
    }
}

async fn run(command: Commands, config: &EsctConfig) -> Result<(), EsctError> {
    match command {
        Commands::Config {
            action: ConfigAction::Check,
        } => {
            config_check::run_check(config);
            Ok(())
        }
        Commands::Config {
            action: ConfigAction::Show,
        } => config_check::run_show(config),
        Commands::Login { token } => session::run_login(&client(config)?, token).await,
        Commands::Logout => session::run_logout(&client(config)?),
        Commands::Whoami { json } => session::run_whoami(&client(config)?, json).await,
        Commands::Dashboard { json, plain } => {
            dashboard::run_dashboard(&client(config)?, config, json, plain).await
        }
        Commands::Claims {
            claim_type,
            page,
            limit,
            mine,
            json,
            plain,
        } => {
            let query = claims::ClaimQuery {
                claim_type,
                page,
                limit,
                mine,
            };
            claims::run_claims(&client(config)?, query, json, plain).await
        }
        Commands::Claim { id, json, plain } => {
            claims::run_claim(&client(config)?, &id, json, plain).await
        }
        Commands::Donate {
            claim_id,
            amount,
            json,
        } => claims::run_donate(&client(config)?, &claim_id, amount, json).await,
        Commands::Queue { action } => queue::run_queue(&client(config)?, action).await,
        Commands::Admin { action } => admin::run_admin(&client(config)?, action).await,
    }
}

/// API client with the configured token file.
fn client(config: &EsctConfig) -> Result<ApiClient, EsctError> {
    let tokens = Arc::new(FileTokenStore::new(config.auth.resolved_token_path()));
    ApiClient::new(&config.api, tokens)
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over the config.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("esct={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
