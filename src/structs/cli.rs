use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "report-proxy")]
#[clap(about = "Generated JSON risk reports behind a single POST endpoint", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/report-proxy/config.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
