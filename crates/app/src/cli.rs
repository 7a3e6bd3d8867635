//! Command line arguments for the headless demo binary

use clap::Parser;
use std::path::PathBuf;

/// First-person navigation demo over a sphere-traced distance field
#[derive(Parser, Debug)]
#[command(name = "fieldwalk")]
pub struct Args {
    /// Load simulation configuration from a TOML file
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of fixed physics ticks to simulate before exiting
    #[arg(long, default_value_t = 600)]
    pub ticks: u32,

    /// Hold forward intent for the whole run
    #[arg(long)]
    pub walk: bool,
}
