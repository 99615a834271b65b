use anyhow::Result;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Stats { file } => handlers::stats::handle(&file),
        Commands::Export {
            file,
            format,
            output,
        } => handlers::export::handle(&file, format, output.as_deref()),
        Commands::Chart {
            file,
            cycle,
            max_points,
        } => handlers::chart::handle(&file, cycle, max_points),
        Commands::Tokens { file } => handlers::tokens::handle(&file),
    }
}
