//! Generates the genesis artifacts derived from the initial validator set.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod artifacts;
mod commands;
mod config;
mod errors;

/// Genesis validator set encoder
#[derive(Parser, Debug)]
#[command(name = "genesis-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build every artifact and write them as JSON
    Generate {
        /// Config file
        #[arg(short, long, env = "GENESIS_CONFIG")]
        config: PathBuf,
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the consensus extra data
    ExtraData {
        /// Config file
        #[arg(short, long, env = "GENESIS_CONFIG")]
        config: PathBuf,
    },

    /// Print the RLP encoded validator set
    ValidatorSet {
        /// Config file
        #[arg(short, long, env = "GENESIS_CONFIG")]
        config: PathBuf,
    },

    /// Print the RLP encoded member list
    Members {
        /// Config file
        #[arg(short, long, env = "GENESIS_CONFIG")]
        config: PathBuf,
        /// Network whose list to use (default: the top level list)
        #[arg(short, long)]
        network: Option<String>,
    },

    /// List the consensus addresses in an extra data blob
    InspectExtraData {
        /// Extra data hex, `0x` prefix optional
        hex: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("genesis_gen={log_level},genesis_fmt={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Commands::Generate { config, output } => {
            commands::generate(&config, output.as_deref(), &mut out)
        }
        Commands::ExtraData { config } => commands::extra_data(&config, &mut out),
        Commands::ValidatorSet { config } => commands::validator_set(&config, &mut out),
        Commands::Members { config, network } => {
            commands::members(&config, network.as_deref(), &mut out)
        }
        Commands::InspectExtraData { hex } => commands::inspect_extra_data(&hex, &mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
