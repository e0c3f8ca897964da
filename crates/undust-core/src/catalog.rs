//! Transformation catalogs for backup/archive filename mutations.
//!
//! Catalogs are built once at startup and passed explicitly into the
//! generator; they are iterated in stored order, so emission for a given
//! input is deterministic.

use crate::config::CatalogExtras;

/// Placeholder token replaced by the stem in wrap patterns.
pub const PATTERN_PLACEHOLDER: &str = "VAL";

/// Archive/backup suffixes appended after the stem (and the full filename).
const ARCHIVE_EXTENSIONS: &[&str] = &[
    "gz", "rar", "tar", "zip", "swp", "swo", "swn", "bak", "bak1", "bak2", "backup", "old", "copy",
    "save", "txt", "tmp", "temp", "~", "1", "2",
];

/// Markers prefixed to the filename (hidden-file and editor-swap conventions).
const PREFIX_SYMBOLS: &[&str] = &[".", "_", "__", "~", "._"];

/// Templates wrapping the stem; `VAL` stands in for the stem (or stem.ext).
const WRAP_PATTERNS: &[&str] = &[
    "_VAL_",
    "__VAL__",
    "--VAL--",
    "VAL--old",
    "__VAL_backup__",
    "__VAL__.bak",
];

/// Ordered transformation catalogs, fixed after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub extensions: Vec<String>,
    pub symbols: Vec<String>,
    pub patterns: Vec<String>,
}

impl Catalog {
    /// Catalog holding only the built-in transformation lists.
    pub fn builtin() -> Self {
        Self {
            extensions: ARCHIVE_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            symbols: PREFIX_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            patterns: WRAP_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-ins plus user additions from the config file.
    ///
    /// Extra patterns must contain the `VAL` placeholder; offenders are
    /// dropped with a warning rather than emitted verbatim for every URL.
    pub fn with_extras(extras: &CatalogExtras) -> Self {
        let mut catalog = Self::builtin();
        catalog
            .extensions
            .extend(extras.extra_extensions.iter().cloned());
        catalog.symbols.extend(extras.extra_symbols.iter().cloned());
        for pattern in &extras.extra_patterns {
            if pattern.contains(PATTERN_PLACEHOLDER) {
                catalog.patterns.push(pattern.clone());
            } else {
                tracing::warn!(
                    "ignoring configured pattern without a {} placeholder: {}",
                    PATTERN_PLACEHOLDER,
                    pattern
                );
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.extensions.len(), 20);
        assert_eq!(catalog.symbols.len(), 5);
        assert_eq!(catalog.patterns.len(), 6);
    }

    #[test]
    fn every_builtin_pattern_has_the_placeholder() {
        for pattern in &Catalog::builtin().patterns {
            assert!(pattern.contains(PATTERN_PLACEHOLDER), "pattern {pattern}");
        }
    }

    #[test]
    fn extras_are_appended_after_builtins() {
        let extras = CatalogExtras {
            extra_extensions: vec!["orig".to_string()],
            extra_symbols: vec!["~~".to_string()],
            extra_patterns: vec!["VAL.dist".to_string()],
        };
        let catalog = Catalog::with_extras(&extras);
        assert_eq!(catalog.extensions.last().map(String::as_str), Some("orig"));
        assert_eq!(catalog.symbols.last().map(String::as_str), Some("~~"));
        assert_eq!(
            catalog.patterns.last().map(String::as_str),
            Some("VAL.dist")
        );
    }

    #[test]
    fn pattern_without_placeholder_is_dropped() {
        let extras = CatalogExtras {
            extra_patterns: vec!["no-placeholder".to_string()],
            ..CatalogExtras::default()
        };
        let catalog = Catalog::with_extras(&extras);
        assert_eq!(catalog.patterns.len(), Catalog::builtin().patterns.len());
    }
}
