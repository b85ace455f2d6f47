use serde::{Deserialize, Serialize};

/// Settings for a single export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Write disabled classes, prefixes and features as comments instead of
    /// leaving them out
    #[serde(default)]
    pub include_inactive: bool,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }
}
