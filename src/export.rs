use crate::{ExportOptions, FeaExportError, Font};
use std::path::{Path, PathBuf};

const FEA_EXTENSION: &str = "fea";

/// Write `content` to `path` as ASCII, overwriting whatever is there.
///
/// Characters outside ASCII are dropped. Returns the number of characters
/// which were lost.
pub fn write_ascii(content: &str, path: &Path) -> Result<usize, FeaExportError> {
    let ascii: String = content.chars().filter(char::is_ascii).collect();
    let dropped = content.chars().count() - ascii.chars().count();
    if dropped > 0 {
        log::warn!(
            "Dropped {} non-ASCII character{} while writing {}",
            dropped,
            if dropped == 1 { "" } else { "s" },
            path.display()
        );
    }
    std::fs::write(path, ascii).map_err(|source| FeaExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(dropped)
}

/// Export the feature code of `font` into the folder `destination`.
///
/// The file is named after the font's source file (or its family name) and
/// any existing file of that name is replaced. Returns the path written.
pub fn export(
    font: &Font,
    destination: Option<&Path>,
    options: ExportOptions,
) -> Result<PathBuf, FeaExportError> {
    let folder = destination.ok_or(FeaExportError::NoDestination)?;
    if !folder.is_dir() {
        return Err(FeaExportError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }
    let target = folder.join(format!("{}.{}", font.export_stem(), FEA_EXTENSION));
    log::info!("Exporting features to {}", target.display());
    if options.include_inactive {
        log::debug!(
            "Including {} inactive entries as comments",
            font.features.inactive_count()
        );
    }
    let fea = font.features.to_fea(options.include_inactive);
    write_ascii(&fea, &target)?;
    Ok(target)
}

/// The outcome of an export, as reported back to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportStatus {
    pub success: bool,
    pub message: String,
}

impl ExportStatus {
    /// Summarise an export of `font` into `destination`.
    pub fn run(font: &Font, destination: Option<&Path>, options: ExportOptions) -> Self {
        let result = export(font, destination, options);
        ExportStatus::from(result)
    }
}

impl From<Result<PathBuf, FeaExportError>> for ExportStatus {
    fn from(result: Result<PathBuf, FeaExportError>) -> Self {
        match result {
            Ok(target) => {
                let folder = target
                    .parent()
                    .and_then(Path::file_name)
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_default();
                ExportStatus {
                    success: true,
                    message: format!("FEA file exported in ‘{}’.", folder),
                }
            }
            Err(e) => ExportStatus {
                success: false,
                message: e.to_string(),
            },
        }
    }
}
