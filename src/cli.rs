use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Browse accessible tourist spots and build a travel plan
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// configuration file to use instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON spot catalog; overrides the configured catalog path
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CliCommand {
    /// print the spots that pass the given filters
    List {
        /// only spots with wheelchair access and an accessible restroom
        #[arg(short, long)]
        accessible_only: bool,

        /// minimum accessibility rating, 0 to 5
        #[arg(short, long)]
        min_rating: Option<String>,
    },
    /// print the detail popup of one spot
    Show {
        /// spot id
        id: u32,
    },
    /// read commands from stdin and keep a travel plan for the session
    Interactive,
}
