//! CLI structure and command definitions.

use crate::commands::{
    BulkStatusCommand, CancelCommand, CheckInCommand, CheckOutCommand, CompletionsCommand,
    DecodeFormCommand, FacilitiesCommand, InitCommand, ListCommand, SetStatusCommand,
    ShowCommand, StatsCommand, TemplateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line dashboard for childcare facility reservations.
#[derive(Parser)]
#[command(name = "hoiku")]
#[command(version, about = "Manage childcare facility reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "HOIKU_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLIS", global = true, env = "HOIKU_BUSY_TIMEOUT_MS")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "HOIKU_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create the database and load the sample reservations
    Init(InitCommand),

    /// List reservations
    List(ListCommand),

    /// Show reservation counts
    Stats(StatsCommand),

    /// Show one reservation
    Show(ShowCommand),

    /// Move a reservation to another status
    SetStatus(SetStatusCommand),

    /// Record a child's arrival
    CheckIn(CheckInCommand),

    /// Record a child's departure
    CheckOut(CheckOutCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Change the status of every reservation matching a filter
    BulkStatus(BulkStatusCommand),

    /// Search childcare facilities
    Facilities(FacilitiesCommand),

    /// Export the Excel reservation template
    Template(TemplateCommand),

    /// Decode a deep-link application form payload
    DecodeForm(DecodeFormCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
