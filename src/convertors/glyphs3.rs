use crate::{FeaExportError, Feature, FeatureClass, FeaturePrefix, Features, Font};
use serde::{Deserialize, Deserializer};
use smol_str::SmolStr;
use std::{fs, path::PathBuf};

/// The parts of a Glyphs class, prefix or feature entry that we care about.
///
/// Glyphs 3 names features by `tag` and everything else by `name`.
#[derive(Debug, Default, Deserialize)]
struct GlyphsCode {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    disabled: bool,
}

impl GlyphsCode {
    fn label(&self) -> SmolStr {
        self.tag
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
            .into()
    }
}

/// Glyphs writes flags as `1`, glyphslib may hand them over as bools or
/// leave them out entirely.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Str(String),
    }
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        Some(Flag::Str(s)) => s != "0" && !s.is_empty(),
    })
}

fn entries<T: serde::Serialize>(items: &T) -> Result<Vec<GlyphsCode>, FeaExportError> {
    Ok(serde_json::from_value(serde_json::to_value(items)?)?)
}

pub fn load(path: PathBuf) -> Result<Font, FeaExportError> {
    log::debug!("Reading to string");
    let s = fs::read_to_string(&path).map_err(|source| FeaExportError::Io {
        path: path.clone(),
        source,
    })?;
    load_str(&s, path)
}

pub fn load_str(s: &str, path: PathBuf) -> Result<Font, FeaExportError> {
    let glyphs_font =
        glyphslib::Font::load_str(s).map_err(|e| FeaExportError::PlistParse {
            path: path.clone(),
            message: e.to_string(),
        })?;
    let glyphs_font = glyphs_font
        .as_glyphs3()
        .ok_or_else(|| FeaExportError::WrongConvertor { path: path.clone() })?;

    let classes = entries(&glyphs_font.classes)?
        .into_iter()
        .map(|c| FeatureClass {
            name: c.label(),
            code: c.code.unwrap_or_default(),
            active: !c.disabled,
        })
        .collect();
    let prefixes = entries(&glyphs_font.feature_prefixes)?
        .into_iter()
        .map(|p| FeaturePrefix {
            name: p.label(),
            code: p.code.unwrap_or_default(),
            active: !p.disabled,
        })
        .collect();
    let features = entries(&glyphs_font.features)?
        .into_iter()
        .map(|f| Feature {
            name: f.label(),
            code: f.code.unwrap_or_default(),
            active: !f.disabled,
        })
        .collect();

    let font = Font {
        family_name: glyphs_font.family_name.clone(),
        features: Features {
            classes,
            prefixes,
            features,
        },
        source: Some(path),
    };
    log::debug!(
        "Read {} classes, {} prefixes and {} features ({} inactive)",
        font.features.classes.len(),
        font.features.prefixes.len(),
        font.features.features.len(),
        font.features.inactive_count()
    );
    Ok(font)
}
