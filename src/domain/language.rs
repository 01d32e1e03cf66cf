// SPDX-License-Identifier: MPL-2.0
//! Supported language catalog.
//!
//! The catalog is the single source of truth for language codes and display
//! names. Both pick lists, the processing stage descriptions and the result
//! details read from here.

use std::fmt;

/// A language the translation pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    code: &'static str,
    name: &'static str,
}

impl Language {
    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    /// ISO 639-1 code (e.g. `en`).
    #[must_use]
    pub fn code(self) -> &'static str {
        self.code
    }

    /// English display name (e.g. `English`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The fixed catalog, in display order.
pub const CATALOG: [Language; 12] = [
    Language::new("en", "English"),
    Language::new("es", "Spanish"),
    Language::new("fr", "French"),
    Language::new("de", "German"),
    Language::new("it", "Italian"),
    Language::new("pt", "Portuguese"),
    Language::new("ru", "Russian"),
    Language::new("zh", "Chinese"),
    Language::new("ja", "Japanese"),
    Language::new("ko", "Korean"),
    Language::new("ar", "Arabic"),
    Language::new("hi", "Hindi"),
];

/// Default spoken language of an uploaded video.
pub const DEFAULT_SOURCE: &str = "en";

/// Default translation target.
pub const DEFAULT_TARGET: &str = "es";

/// Looks up a catalog entry by code (case-insensitive).
#[must_use]
pub fn find(code: &str) -> Option<Language> {
    CATALOG
        .iter()
        .copied()
        .find(|language| language.code.eq_ignore_ascii_case(code))
}

/// Resolves a configured code, falling back to `fallback` when the code is
/// missing from the catalog.
#[must_use]
pub fn resolve_or(code: Option<&str>, fallback: &'static str) -> Language {
    code.and_then(find)
        .or_else(|| find(fallback))
        .unwrap_or(CATALOG[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_twelve_unique_codes() {
        let codes: HashSet<_> = CATALOG.iter().map(|l| l.code()).collect();
        assert_eq!(CATALOG.len(), 12);
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn defaults_are_in_catalog() {
        assert_eq!(find(DEFAULT_SOURCE).map(Language::name), Some("English"));
        assert_eq!(find(DEFAULT_TARGET).map(Language::name), Some("Spanish"));
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("JA").map(Language::name), Some("Japanese"));
    }

    #[test]
    fn resolve_or_uses_fallback_for_unknown_code() {
        assert_eq!(resolve_or(Some("xx"), DEFAULT_TARGET).code(), "es");
        assert_eq!(resolve_or(None, DEFAULT_SOURCE).code(), "en");
        assert_eq!(resolve_or(Some("de"), DEFAULT_SOURCE).code(), "de");
    }
}
