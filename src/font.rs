use crate::{FeaExportError, Features};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FALLBACK_NAME: &str = "font";

/// A font, as far as its feature code is concerned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default)]
    pub family_name: String,
    #[serde(default, skip_serializing_if = "Features::is_empty")]
    pub features: Features,
    /// Where the font was loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Font {
    pub fn new() -> Self {
        Font::default()
    }

    /// The name the exported feature file should have, without extension.
    ///
    /// This is the source file name with its last suffix removed, falling
    /// back to the family name for fonts which have never been saved.
    pub fn export_stem(&self) -> String {
        if let Some(stem) = self
            .source
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
        {
            return stem.to_string();
        }
        let family = self.family_name.trim();
        if family.is_empty() {
            FALLBACK_NAME.to_string()
        } else {
            family.to_string()
        }
    }

    /// Save as the native JSON source format
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FeaExportError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| FeaExportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
