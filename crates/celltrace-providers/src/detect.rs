use std::sync::LazyLock;

use regex::Regex;

use crate::{Error, Result};

/// Regex matching an EDF token line: a two-lowercase-letter key either
/// alone on the line or followed by whitespace (e.g. "dp 0 3.7 0.5", "de")
static TOKEN_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(\s|$)").unwrap());

/// Zip container magic; spreadsheet workbooks (xlsx) arrive as zip archives
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// How many head lines the EDF heuristic samples
const HEURISTIC_LINES: usize = 5;

/// Supported cycler log formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Line-oriented token format (one token per line, whitespace-split)
    Edf,
    /// Tabular rows, first cell is the token key
    Csv,
}

/// Detection verdict with the rule that produced it.
#[derive(Debug, Clone)]
pub struct Detection {
    pub kind: FileKind,
    pub reason: &'static str,
}

/// Decide which extractor should handle a file, from its name and the
/// first couple of KiB of content.
///
/// Binary workbooks are recognized by their zip signature and rejected
/// with a pointed message rather than lumped into the generic
/// unrecognized case. Text content is scored line-by-line: enough
/// token-shaped lines means EDF, otherwise extension and a comma
/// heuristic decide CSV.
pub fn detect_file_kind(name: &str, head: &[u8]) -> Result<Detection> {
    if head.starts_with(ZIP_MAGIC) {
        return Err(Error::UnsupportedFormat(
            "binary workbook (zip container); export the sheet as CSV first".to_string(),
        ));
    }

    let sample = String::from_utf8_lossy(head);
    let token_lines = sample
        .lines()
        .take(HEURISTIC_LINES)
        .filter(|line| TOKEN_LINE_REGEX.is_match(line))
        .count();
    if token_lines >= 2 {
        return Ok(Detection {
            kind: FileKind::Edf,
            reason: "token line heuristic",
        });
    }

    let lower = name.to_ascii_lowercase();
    if lower.ends_with(".edf") {
        return Ok(Detection {
            kind: FileKind::Edf,
            reason: "file extension",
        });
    }
    if lower.ends_with(".csv") {
        return Ok(Detection {
            kind: FileKind::Csv,
            reason: "file extension",
        });
    }
    if sample
        .lines()
        .take(HEURISTIC_LINES)
        .any(|line| line.contains(','))
    {
        return Ok(Detection {
            kind: FileKind::Csv,
            reason: "comma-separated head lines",
        });
    }

    Err(Error::UnrecognizedFormat)
}
