use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use celltrace_engine::{export_csv, export_json};

use crate::args::ExportFormat;
use crate::context;

pub fn handle(file: &Path, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let cycles = context::load_cycles(file)?;

    match format {
        ExportFormat::Json => {
            let json = export_json(&cycles)?;
            match output {
                Some(path) => {
                    let mut out = File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    out.write_all(json.as_bytes())?;
                    out.write_all(b"\n")?;
                }
                None => println!("{}", json),
            }
        }
        ExportFormat::Csv => match output {
            Some(path) => {
                let out = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                export_csv(&cycles, out)?;
            }
            None => export_csv(&cycles, std::io::stdout().lock())?,
        },
    }

    Ok(())
}
