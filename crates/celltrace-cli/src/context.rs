use std::path::Path;

use anyhow::{Context, Result};
use celltrace_engine::{assemble, normalize_cycles};
use celltrace_providers::extract_tokens_from_file;
use celltrace_types::Cycle;

/// Run the full ingest pipeline: tokenize, assemble, normalize.
pub fn load_cycles(path: &Path) -> Result<Vec<Cycle>> {
    let tokens = extract_tokens_from_file(path)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    let parsed = assemble(&tokens);
    Ok(normalize_cycles(&parsed))
}
