#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod convertors;
mod error;
mod export;
mod features;
mod font;
mod options;

pub use crate::{
    error::FeaExportError,
    export::{export, write_ascii, ExportStatus},
    features::{assemble, comment_out, FeaCode, Feature, FeatureClass, FeaturePrefix, Features},
    font::Font,
    options::ExportOptions,
};
use std::path::PathBuf;

/// File extensions which [`load`] understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "json",
    #[cfg(feature = "glyphs")]
    "glyphs",
];

pub fn load(filename: impl Into<PathBuf>) -> Result<Font, FeaExportError> {
    let pb = filename.into();
    let pb_clone = pb.clone();
    log::debug!("Loading {}", pb.display());

    let mut font: Font = match pb.extension() {
        Some(ext) if ext == "json" => {
            let file = std::fs::File::open(&pb).map_err(|source| FeaExportError::Io {
                path: pb.clone(),
                source,
            })?;
            Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
        }
        #[cfg(feature = "glyphs")]
        Some(ext) if ext == "glyphs" => crate::convertors::glyphs3::load(pb),
        _ => Err(FeaExportError::UnknownFileType { path: pb }),
    }?;
    font.source = Some(pb_clone);
    Ok(font)
}
