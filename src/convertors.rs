#[cfg(feature = "glyphs")]
/// Glyphs 3 convertor
pub mod glyphs3;
