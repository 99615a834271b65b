use std::fs;
use std::path::Path;

use celltrace_types::Token;

use crate::detect::{FileKind, detect_file_kind};
use crate::edf::extract_tokens_from_edf;
use crate::tabular::extract_tokens_from_csv;
use crate::{Error, Result};

/// Whole files are parsed in memory; anything past this is refused.
pub const MAX_FILE_BYTES: u64 = 64 * 1024 * 1024;

/// How much of the file the format detector gets to look at.
pub const HEAD_SAMPLE_BYTES: usize = 2048;

/// Read a cycler log from disk and extract its token stream: size
/// guard, format detection on the head sample, then the matching
/// extractor over the full content.
pub fn extract_tokens_from_file(path: &Path) -> Result<Vec<Token>> {
    let size = fs::metadata(path)?.len();
    if size > MAX_FILE_BYTES {
        return Err(Error::FileTooLarge {
            size,
            limit: MAX_FILE_BYTES,
        });
    }

    let bytes = fs::read(path)?;
    let head = &bytes[..bytes.len().min(HEAD_SAMPLE_BYTES)];
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let detection = detect_file_kind(&name, head)?;
    match detection.kind {
        FileKind::Edf => Ok(extract_tokens_from_edf(&String::from_utf8_lossy(&bytes))),
        FileKind::Csv => extract_tokens_from_csv(bytes.as_slice()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        (dir, path)
    }

    #[test]
    fn extracts_edf_tokens_from_file() {
        let (_dir, path) = write_temp("run.edf", b"cy 1\nst 1\ndp 0 3.7 0.5\n");
        let tokens = extract_tokens_from_file(&path).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].key, "cy");
    }

    #[test]
    fn extracts_csv_tokens_from_file() {
        let (_dir, path) = write_temp("run.csv", b"header,row\ncy,1\ndp,0,3.7,0.5\n");
        let tokens = extract_tokens_from_file(&path).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].key, "cy");
        assert_eq!(tokens[1].values, vec!["1"]);
    }

    #[test]
    fn rejects_workbook_files() {
        let (_dir, path) = write_temp("run.xlsx", b"PK\x03\x04zipzipzip");
        assert!(matches!(
            extract_tokens_from_file(&path),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.edf");
        assert!(matches!(
            extract_tokens_from_file(&missing),
            Err(Error::Io(_))
        ));
    }
}
