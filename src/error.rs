use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ChessbookError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    /// An opening record file could not be decoded
    #[error("failed to decode opening record {path}: {source}")]
    Record {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A page referenced by the document order was not present
    #[error("a page in the document order is missing")]
    PageMissing,
}
