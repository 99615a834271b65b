use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "celltrace")]
#[command(about = "Parse and analyze battery cycler logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-cycle charge/energy statistics
    Stats {
        /// Cycler log file (EDF or CSV)
        file: PathBuf,
    },

    /// Export the parsed dataset
    Export {
        /// Cycler log file (EDF or CSV)
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Emit one cycle's flattened chart series as JSON
    Chart {
        /// Cycler log file (EDF or CSV)
        file: PathBuf,

        /// Cycle id to chart (default: first cycle)
        #[arg(long)]
        cycle: Option<i64>,

        /// Decimate to at most this many points
        #[arg(long)]
        max_points: Option<usize>,
    },

    /// Dump the raw token stream (for log debugging)
    Tokens {
        /// Cycler log file (EDF or CSV)
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}
