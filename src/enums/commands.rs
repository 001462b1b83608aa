use clap::Subcommand;
use crate::enums::report_variant::ReportVariant;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the HTTP endpoint
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        variant: Option<ReportVariant>,
    },
    /// Generate one report and print it to stdout
    Generate {
        target: String,
        #[clap(short, long)]
        variant: Option<ReportVariant>,
        #[clap(long)]
        compact: bool,
    },
    /// List built-in report variants
    Variants,
    /// Check the configuration
    Validate,
}
