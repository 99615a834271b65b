use std::path::Path;

use anyhow::{Result, bail};
use celltrace_engine::{DownsampleOptions, build_cycle_chart};

use crate::context;

pub fn handle(file: &Path, cycle_id: Option<i64>, max_points: Option<usize>) -> Result<()> {
    let cycles = context::load_cycles(file)?;

    let cycle = match cycle_id {
        Some(id) => cycles
            .iter()
            .find(|c| c.cycle == id)
            .ok_or_else(|| anyhow::anyhow!("cycle {} not found in {}", id, file.display()))?,
        None => match cycles.first() {
            Some(cycle) => cycle,
            None => bail!("no cycles found in {}", file.display()),
        },
    };

    let opts = max_points.map(|max_points| DownsampleOptions { max_points });
    let chart = build_cycle_chart(cycle, opts);
    println!("{}", serde_json::to_string_pretty(&chart)?);

    Ok(())
}
