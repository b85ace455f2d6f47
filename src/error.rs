use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeaExportError {
    #[error("No folder chosen.")]
    NoDestination,

    #[error("Export destination {path:?} is not a folder")]
    NotADirectory { path: PathBuf },

    #[error("Unknown file type for file {path:?}")]
    UnknownFileType { path: PathBuf },

    #[error("Wrong convertor for file {path:?}")]
    WrongConvertor { path: PathBuf },

    #[error("IO Error for file {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("Error parsing feature source: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "glyphs")]
    #[error("Error parsing Glyphs file {path:?}: {message}")]
    PlistParse { path: PathBuf, message: String },
}
