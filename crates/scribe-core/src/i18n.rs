//! User-facing string lookup.
//!
//! Translations are produced elsewhere; this module only resolves keys.
//! A catalog file is a flat TOML table of `"dotted.key" = "text"` entries
//! layered over the built-in English strings.

use std::collections::HashMap;
use std::path::Path;

const ENGLISH: &[(&str, &str)] = &[
    ("toolbar.insert_table", "Insert Table"),
    ("toolbar.insert_link", "Insert Link"),
    ("modal.dismiss", "Close"),
    ("table.title", "Insert Table"),
    ("table.rows", "Rows"),
    ("table.columns", "Columns"),
    ("link.title", "Insert Link"),
    ("link.url", "URL"),
    ("link.target", "Link target"),
    ("link.placeholder", "https://example.com"),
    ("dialog.confirm", "Confirm"),
    ("dialog.cancel", "Cancel"),
    ("document.title", "Document"),
    ("document.activity", "Activity"),
    ("document.select_hint", "Click a node to select it; use ⇢ to extend the selection."),
];

/// Maps string keys to display text.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Built-in English strings.
    pub fn english() -> Self {
        Self {
            entries: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Loads a catalog file over the English strings.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let overrides: HashMap<String, String> = toml::from_str(&content)?;

        let mut catalog = Self::english();
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = overrides.len(),
            "Loaded string catalog"
        );
        catalog.entries.extend(overrides);
        Ok(catalog)
    }

    /// Returns the text for `key`, or the key itself if unknown.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

/// Catalog loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lookup() {
        let catalog = Catalog::english();
        assert_eq!(catalog.get("table.rows"), "Rows");
        assert_eq!(catalog.get("dialog.cancel"), "Cancel");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let catalog = Catalog::english();
        assert_eq!(catalog.get("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_file_overrides_english() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fr.toml");
        std::fs::write(&path, "\"table.rows\" = \"Lignes\"\n").unwrap();

        let catalog = Catalog::load_from(&path).unwrap();
        assert_eq!(catalog.get("table.rows"), "Lignes");
        assert_eq!(catalog.get("table.columns"), "Columns");
    }

    #[test]
    fn test_nested_tables_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[table]\nrows = \"Lignes\"\n").unwrap();

        assert!(matches!(Catalog::load_from(&path), Err(CatalogError::Parse(_))));
    }
}
