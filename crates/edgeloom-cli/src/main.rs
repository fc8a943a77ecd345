//! Edgeloom CLI - Build graphs from line-oriented edge resources

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod settings;
mod typed;

use commands::{build, degree, edges, GraphArgs};
use config::Config;

#[derive(Parser)]
#[command(name = "edgeloom")]
#[command(author, version, about = "Build graphs from edge list resources")]
pub struct Cli {
    /// Resource root directory (repeatable, searched before configured roots)
    #[arg(short = 'R', long = "root", global = true)]
    pub roots: Vec<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assemble a graph and print its vertices, degrees and edges
    Build(GraphArgs),
    /// Parse a resource into its ordered edge list
    Edges(GraphArgs),
    /// Show degree, neighbors and incident edges of one vertex
    Degree(degree::DegreeArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting edgeloom CLI");

    let config = Config::load();

    match &cli.command {
        Commands::Build(args) => build::run(args, &cli, &config)?,
        Commands::Edges(args) => edges::run(args, &cli, &config)?,
        Commands::Degree(args) => degree::run(args, &cli, &config)?,
        Commands::Config(args) => commands::config::run(args)?,
    }

    Ok(())
}
