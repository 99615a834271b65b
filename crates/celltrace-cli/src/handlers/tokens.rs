use std::path::Path;

use anyhow::{Context, Result};
use celltrace_providers::extract_tokens_from_file;

pub fn handle(file: &Path) -> Result<()> {
    let tokens = extract_tokens_from_file(file)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    for token in &tokens {
        if token.values.is_empty() {
            println!("{}", token.key);
        } else {
            println!("{} {}", token.key, token.values.join(" "));
        }
    }
    eprintln!("{} token(s)", tokens.len());

    Ok(())
}
