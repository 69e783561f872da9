use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "valcheck")]
#[command(about = "Check attribute records against configured value limits", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered checker types and their indexes
    #[command(alias = "ls")]
    Types,

    /// Check JSON Lines records and stamp each with a verdict
    Check {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Checker type index (see `valcheck types`)
        #[arg(short = 't', long)]
        data_type: Option<usize>,

        /// Attribute whose value is checked
        #[arg(short, long)]
        attr: Option<String>,

        /// Attribute receiving the boolean verdict
        #[arg(short, long)]
        result: Option<String>,

        /// Minimum bound, in the checker type's text format
        #[arg(long)]
        min: Option<String>,

        /// Maximum bound, in the checker type's text format
        #[arg(long)]
        max: Option<String>,
    },
}
