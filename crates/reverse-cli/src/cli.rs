use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "reverse",
    about = "Reverse: scripture memory review over rotating daily, odd/even, weekday and date buckets",
    version
)]
pub struct Cli {
    /// Data directory holding the verse and bucket files
    #[arg(long, global = true, default_value = ".")]
    pub dir: String,

    /// Config file (default: <dir>/reverse.toml, optional)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Seconds to pause before each card (overrides config)
    #[arg(long, global = true)]
    pub pace: Option<u64>,

    /// Review as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Defaults to `review`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run today's review session across all four buckets
    Review,

    /// Show learned/available verse counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create the data directory and empty master files
    Init,
}
