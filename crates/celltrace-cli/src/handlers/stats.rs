use std::path::Path;

use anyhow::Result;
use celltrace_engine::calculate_cycle_stats;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::context;

pub fn handle(file: &Path) -> Result<()> {
    let cycles = context::load_cycles(file)?;
    let color = std::io::stdout().is_terminal();

    println!("Parsed {} cycle(s) from {}", cycles.len(), file.display());

    for cycle in &cycles {
        let stats = calculate_cycle_stats(cycle);

        let header = format!(
            "Cycle {}: {} step(s), {} point(s)",
            cycle.cycle, stats.total_steps, stats.total_points
        );
        if color {
            println!("{}", header.cyan().bold());
        } else {
            println!("{}", header);
        }

        println!(
            "  charge: in {:.6}, out {:.6}, net {:.6}, efficiency {}",
            stats.charge_input,
            stats.discharge_output,
            stats.total_charge,
            format_ratio(stats.efficiency),
        );

        if stats.has_energy_data {
            println!(
                "  energy: in {:.6}, out {:.6}, efficiency {}",
                stats.energy_input.unwrap_or_default(),
                stats.energy_output.unwrap_or_default(),
                format_ratio(stats.energy_efficiency),
            );
        } else {
            println!("  energy: n/a");
        }
    }

    Ok(())
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{:.2}%", value * 100.0),
        None => "n/a".to_string(),
    }
}
