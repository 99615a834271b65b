// Error types
pub mod error;

// File kind detection
pub mod detect;

// Format-specific token extractors
pub mod edf;
pub mod tabular;

// File reading facade
pub mod io;

pub use detect::{Detection, FileKind, detect_file_kind};
pub use edf::extract_tokens_from_edf;
pub use error::{Error, Result};
pub use io::{HEAD_SAMPLE_BYTES, MAX_FILE_BYTES, extract_tokens_from_file};
pub use tabular::extract_tokens_from_csv;
