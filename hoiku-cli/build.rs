//! Build script for hoiku-cli.
//!
//! Renders the `hoiku.1` man page into `OUT_DIR` with clap_mangen. Build
//! scripts cannot depend on the crate being built, so the command tree is
//! declared here a second time.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("hoiku")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage childcare facility reservations")
        .long_about(
            "Command-line dashboard for childcare staff: list, filter and update reservations, \
             browse facilities and export the Excel template",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("HOIKU_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in milliseconds)")
                .value_name("MILLIS")
                .global(true)
                .env("HOIKU_BUSY_TIMEOUT_MS"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("HOIKU_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Create the database and load the sample reservations"),
            Command::new("list")
                .about("List reservations")
                .long_about("Filter, sort and print reservations as a table, JSON, CSV or TSV"),
            Command::new("stats").about("Show reservation counts"),
            Command::new("show").about("Show one reservation"),
            Command::new("set-status").about("Move a reservation to another status"),
            Command::new("check-in").about("Record a child's arrival"),
            Command::new("check-out").about("Record a child's departure"),
            Command::new("cancel").about("Cancel a reservation"),
            Command::new("bulk-status")
                .about("Change the status of every reservation matching a filter"),
            Command::new("facilities").about("Search childcare facilities"),
            Command::new("template").about("Export the Excel reservation template"),
            Command::new("decode-form").about("Decode a deep-link application form payload"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer).unwrap();
    fs::write(man_dir.join("hoiku.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
