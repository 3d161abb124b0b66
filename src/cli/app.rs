//! CLI definitions and entry point

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use super::commands;
use policyhub::VERSION;
use policyhub::adapters::build_service;
use policyhub::config::Config;
use policyhub::output::OutputMode;

/// policyhub - Policy management with notification contract refresh
#[derive(Parser, Debug)]
#[command(
    name = "policyhub",
    version,
    about = "Policy management with notification contract refresh",
    long_about = "Register, update and delete usage policies grouped by business partner.\n\n\
                  Every change republishes the notification contract definitions\n\
                  so counterparties always negotiate against current policies."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to $POLICYHUB_CONFIG or the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List policies
    List {
        /// Group by business partner number
        #[arg(short, long)]
        grouped: bool,
    },

    /// Show a single policy
    Get {
        /// Policy ID
        id: String,
    },

    /// Register a policy
    Create {
        /// Business partner number (omit for the default group)
        #[arg(short, long)]
        bpn: Option<String>,

        /// Expiry, RFC 3339 (e.g. 2030-01-01T00:00:00Z)
        #[arg(long)]
        valid_until: DateTime<Utc>,

        /// Policy ID (generated when omitted)
        #[arg(long)]
        policy_id: Option<String>,

        /// JSON file holding the permission list
        #[arg(short, long)]
        permissions: Option<PathBuf>,
    },

    /// Move policies to a business partner and set their expiry
    Update {
        /// Policy IDs
        #[arg(required = true)]
        ids: Vec<String>,

        /// Business partner number (omit for the default group)
        #[arg(short, long)]
        bpn: Option<String>,

        /// New expiry, RFC 3339
        #[arg(long)]
        valid_until: DateTime<Utc>,
    },

    /// Delete a policy
    Delete {
        /// Policy ID
        id: String,
    },

    /// Serve the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Bind address (overrides the config file)
        #[arg(short, long)]
        addr: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": VERSION,
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("policyhub v{}", VERSION);
            println!("\nRun 'policyhub --help' for usage");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": VERSION }));
        } else {
            println!("policyhub v{}", VERSION);
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let service = build_service(&config);

    match command {
        Command::List { grouped } => commands::list(&service, grouped, output_mode),
        Command::Get { id } => commands::get(&service, &id, output_mode),
        Command::Create {
            bpn,
            valid_until,
            policy_id,
            permissions,
        } => commands::create(
            &service,
            commands::CreateArgs {
                bpn,
                valid_until,
                policy_id,
                permissions,
            },
            output_mode,
        ),
        Command::Update {
            ids,
            bpn,
            valid_until,
        } => commands::update(&service, ids, bpn, valid_until, output_mode),
        Command::Delete { id } => commands::delete(&service, &id, output_mode),
        #[cfg(feature = "server")]
        Command::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.server.addr.clone());
            commands::serve(&service, &addr)
        },
        Command::Version => Ok(()),
    }
}
