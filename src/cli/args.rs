use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hypersystem",
    version,
    author,
    about = "Business health check for poker clubs: hours, risk and growth lost to manual work"
)]
pub struct Cli {
    /// Catalog language (zh-TW, zh-CN, en, ja). Overrides the config file.
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the calculator once and print the result
    Calc(CalcArgs),
    /// List the pain point checklist grouped by area
    Catalog {
        /// Only show one area (operations, control, growth)
        #[arg(long)]
        group: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Open the trial application form
    Apply,
    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Tournaments per month (non-numeric text counts as 0)
    #[arg(long, allow_hyphen_values = true)]
    pub events: Option<String>,
    /// Players per tournament (non-numeric text counts as 0)
    #[arg(long, allow_hyphen_values = true)]
    pub participants: Option<String>,
    /// Value of one staff hour (non-numeric text counts as 0)
    #[arg(long, allow_hyphen_values = true)]
    pub hourly: Option<String>,
    /// Comma-separated catalog indices to check, e.g. 0,4,7
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub select: Vec<usize>,
    /// Check every pain point
    #[arg(long)]
    pub all: bool,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}
