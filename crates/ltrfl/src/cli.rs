use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ltrfl")]
#[command(version)]
#[command(about = "Track AI generation spend and rank generation pipelines")]
pub struct Cli {
    /// Data directory (defaults to ~/.ltrfl)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config.json
    Init,

    /// Record a completed generation and print its id
    Record {
        /// Pipeline identifier (model/style combination)
        #[arg(short, long)]
        pipeline: String,

        /// Human-readable pipeline name
        #[arg(short, long)]
        name: String,

        /// Cost in cents
        #[arg(short, long, allow_hyphen_values = true)]
        cost: i64,

        /// Wall-clock latency in milliseconds
        #[arg(short, long, allow_hyphen_values = true)]
        latency: i64,

        #[arg(long)]
        content_type: Option<String>,

        #[arg(long)]
        city: Option<String>,
    },

    /// Mark a generation as the winner of a comparison
    Winner { id: String },

    /// Show this month's budget status as JSON
    Budget,

    /// Rank pipelines by win rate
    Leaderboard {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Clear this month's history and spend
    #[command(name = "reset-month")]
    ResetMonth,

    /// View this month's generation history
    History {
        /// Only show one pipeline
        #[arg(long)]
        pipeline: Option<String>,

        /// Maximum rows to show
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Show statistics summary
        #[arg(long)]
        stats: bool,

        /// Read a previous `export` file instead of the live month
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Export this month's history as JSONL
    Export {
        /// Output file (defaults to exports/<month>.jsonl under the data dir)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
