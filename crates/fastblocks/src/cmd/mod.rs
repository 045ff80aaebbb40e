use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod insert;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Insert stop-bit block lengths into a captured message stream.
    Insert(InsertArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Insert(args) => insert::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct InsertArgs {
    /// Raw captured data file.
    pub data: PathBuf,
    /// Index file with message boundary markers.
    pub index: PathBuf,
    /// Output file for the length-prefixed stream.
    pub output: PathBuf,
    /// Suppress the summary line.
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
