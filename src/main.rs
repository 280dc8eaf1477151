mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use boulder_core::{AppointmentStore, BoulderConfig};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "boulder")]
#[command(about = "Manage bouldering session appointments and who is joining them")]
struct Cli {
    /// Appointments CSV file (defaults to store_path from config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all appointments
    List,
    /// Show one appointment and its participants
    Show {
        /// Appointment date (YYYY-MM-DD)
        date: String,
    },
    /// Add an appointment, or replace the one on that date
    Add {
        /// Appointment date (YYYY-MM-DD)
        date: String,

        /// Appointment title (defaults to default_title from config)
        #[arg(short, long)]
        title: Option<String>,

        /// Comma-separated participant names (e.g. "Alice, Bob")
        #[arg(short, long, default_value = "")]
        participants: String,
    },
    /// Add a participant to an appointment
    Join {
        /// Appointment date (YYYY-MM-DD)
        date: String,
        name: String,
    },
    /// Remove a participant from an appointment
    Leave {
        /// Appointment date (YYYY-MM-DD)
        date: String,
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = resolve_store(cli.store)?;
    debug!(path = %store.path().display(), "using store");

    match cli.command {
        Commands::List => commands::list::run(&store),
        Commands::Show { date } => commands::show::run(&store, &date),
        Commands::Add {
            date,
            title,
            participants,
        } => {
            let title = resolve_title(title)?;
            commands::add::run(&store, &date, &title, &participants)
        }
        Commands::Join { date, name } => commands::join::run(&store, &date, &name),
        Commands::Leave { date, name } => commands::leave::run(&store, &date, &name),
    }
}

/// An explicit `--store` wins; the config file is only read without one.
fn resolve_store(store: Option<PathBuf>) -> Result<AppointmentStore> {
    match store {
        Some(path) => Ok(AppointmentStore::new(path)),
        None => Ok(BoulderConfig::load()?.store()),
    }
}

fn resolve_title(title: Option<String>) -> Result<String> {
    match title {
        Some(title) => Ok(title),
        None => Ok(BoulderConfig::load()?.default_title),
    }
}
