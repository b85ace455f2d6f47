use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

const COMMENT: &str = "# ";

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every line boundary, treating `\r\n` as one. A trailing
/// boundary does not start a new line.
fn split_lines(code: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let mut chars = code.char_indices().peekable();
    while let Some((ix, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&code[start..ix]);
        start = ix + c.len_utf8();
        if c == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < code.len() {
        lines.push(&code[start..]);
    }
    lines
}

fn active_by_default() -> bool {
    true
}

/// An OpenType glyph class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureClass {
    /// Class name, without the leading @
    pub name: SmolStr,
    /// The class body, a whitespace-separated list of glyphs
    pub code: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

/// A block of feature code placed before any features are defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePrefix {
    /// A user-defined label for the block
    pub name: SmolStr,
    /// Raw feature code, usually lookups and languagesystem statements
    pub code: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

/// An OpenType feature, keyed by its feature tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// The feature tag, e.g. `liga`
    pub name: SmolStr,
    /// The rules inside the feature block
    pub code: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

/// Something which can be rendered as a piece of a feature file
pub trait FeaCode {
    fn is_active(&self) -> bool;
    fn render(&self) -> String;
}

impl FeaCode for FeatureClass {
    fn is_active(&self) -> bool {
        self.active
    }

    fn render(&self) -> String {
        format!(
            "# CLASS: {}\n{}=[{}];",
            self.name,
            self.name,
            self.code.trim()
        )
    }
}

impl FeaCode for FeaturePrefix {
    fn is_active(&self) -> bool {
        self.active
    }

    fn render(&self) -> String {
        format!("# PREFIX: {}\n{}\n", self.name, self.code.trim())
    }
}

impl FeaCode for Feature {
    fn is_active(&self) -> bool {
        self.active
    }

    fn render(&self) -> String {
        format!("feature {} {{\n{}\n}};", self.name, self.code.trim())
    }
}

macro_rules! record_constructors {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn new(name: impl Into<SmolStr>, code: impl Into<String>) -> Self {
                    $ty {
                        name: name.into(),
                        code: code.into(),
                        active: true,
                    }
                }

                /// The same record, marked as inactive
                pub fn inactive(self) -> Self {
                    $ty {
                        active: false,
                        ..self
                    }
                }
            }
        )*
    };
}

record_constructors!(FeatureClass, FeaturePrefix, Feature);

/// The feature code of a font
///
/// Each list is kept in source order; nothing is sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    /// OpenType classes
    #[serde(default)]
    pub classes: Vec<FeatureClass>,
    /// Lookups and other feature code to be placed before the features
    #[serde(default)]
    pub prefixes: Vec<FeaturePrefix>,
    /// OpenType features
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Features {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.prefixes.is_empty() && self.features.is_empty()
    }

    /// Number of entries which are switched off
    pub fn inactive_count(&self) -> usize {
        self.classes.iter().filter(|c| !c.active).count()
            + self.prefixes.iter().filter(|p| !p.active).count()
            + self.features.iter().filter(|f| !f.active).count()
    }

    /// Render the whole feature file.
    ///
    /// Inactive entries are dropped unless `include_inactive` is set, in which
    /// case they are written out commented.
    pub fn to_fea(&self, include_inactive: bool) -> String {
        assemble(
            &self.classes,
            &self.prefixes,
            &self.features,
            include_inactive,
        )
    }
}

/// Prefix every line of `code` with `# `.
///
/// Empty code still produces a single (commented, empty) line.
pub fn comment_out(code: &str) -> String {
    if code.is_empty() {
        return COMMENT.to_string();
    }
    split_lines(code)
        .into_iter()
        .map(|line| format!("{}{}", COMMENT, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_section<T: FeaCode>(items: &[T], include_inactive: bool, pieces: &mut Vec<String>) {
    for item in items {
        if !item.is_active() && !include_inactive {
            continue;
        }
        let mut code = item.render();
        if !item.is_active() {
            code = comment_out(&code);
        }
        code.push('\n');
        pieces.push(code);
    }
}

/// Assemble classes, prefixes and features into one feature file.
pub fn assemble(
    classes: &[FeatureClass],
    prefixes: &[FeaturePrefix],
    features: &[Feature],
    include_inactive: bool,
) -> String {
    let mut pieces = vec!["# CLASSES\n".to_string()];
    render_section(classes, include_inactive, &mut pieces);
    pieces.push("\n\n# PREFIXES\n".to_string());
    render_section(prefixes, include_inactive, &mut pieces);
    pieces.push("\n\n# FEATURES".to_string());
    render_section(features, include_inactive, &mut pieces);
    pieces.join("\n")
}
