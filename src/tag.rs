//! Language tag type: normalized locale identifiers.
//!
//! A tag names a translation, e.g. `en` or `pt_BR`. Browsers, cookies and
//! URL paths report these in several spellings (`pt-BR`, `pt_BR`,
//! `pt_BR/index.html`); `LanguageTag::normalize` folds them into the single
//! canonical form used everywhere else in this crate.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A normalized language tag.
///
/// Invariants: the separator between the primary and region subtags is
/// always `_`, and nothing after a `/` survives normalization. Comparisons
/// are case-sensitive; no case folding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

// Deserialization goes through `normalize` so the separator invariant holds
// for tags read from config or query strings too.
impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(LanguageTag::normalize(&raw))
    }
}

impl LanguageTag {
    /// Normalize a raw tag into canonical form.
    ///
    /// If the input contains a `/` (an artifact of being extracted from a
    /// path or URL), only the portion before the first `/` is kept. Every
    /// `-` is replaced with `_`. Anything else passes through unchanged.
    ///
    /// Never fails: empty or malformed input is carried through as-is, and
    /// callers treat the empty tag as "unknown".
    ///
    /// # Example
    /// ```
    /// use langpick::LanguageTag;
    ///
    /// assert_eq!(LanguageTag::normalize("pt-BR").as_str(), "pt_BR");
    /// assert_eq!(LanguageTag::normalize("fr/index.html").as_str(), "fr");
    /// ```
    pub fn normalize(raw: &str) -> LanguageTag {
        let head = raw.split('/').next().unwrap_or(raw);
        LanguageTag(head.replace('-', "_"))
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the base subtag, e.g. `pt` for `pt_BR`.
    pub fn base_subtag(&self) -> &str {
        base_subtag(&self.0)
    }

    /// Whether the tag is empty (normalized from empty input).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for LanguageTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Extract the primary language portion of a tag, excluding any region
/// suffix.
///
/// The portion before the first `_` is returned if one is present, then the
/// portion before the first `-`, otherwise the tag unchanged. This relates
/// regional variants (`pt_BR`) to their base language (`pt`) and works on
/// both normalized and raw tags.
pub fn base_subtag(tag: &str) -> &str {
    if let Some((base, _)) = tag.split_once('_') {
        base
    } else if let Some((base, _)) = tag.split_once('-') {
        base
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Normalize Tests ====================

    #[test]
    fn test_normalize_replaces_dash() {
        assert_eq!(LanguageTag::normalize("pt-BR").as_str(), "pt_BR");
    }

    #[test]
    fn test_normalize_keeps_underscore() {
        assert_eq!(LanguageTag::normalize("pt_BR").as_str(), "pt_BR");
    }

    #[test]
    fn test_normalize_plain_tag_unchanged() {
        assert_eq!(LanguageTag::normalize("en").as_str(), "en");
    }

    #[test]
    fn test_normalize_strips_path_suffix() {
        assert_eq!(LanguageTag::normalize("pt_BR/index.html").as_str(), "pt_BR");
        assert_eq!(LanguageTag::normalize("fr/").as_str(), "fr");
    }

    #[test]
    fn test_normalize_path_then_dash() {
        assert_eq!(LanguageTag::normalize("pt-BR/guide.html").as_str(), "pt_BR");
    }

    #[test]
    fn test_normalize_empty_input() {
        let tag = LanguageTag::normalize("");
        assert_eq!(tag.as_str(), "");
        assert!(tag.is_empty());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["pt-BR", "pt_BR", "en", "", "zh-Hant-TW", "es/index.html"] {
            let once = LanguageTag::normalize(raw);
            let twice = LanguageTag::normalize(once.as_str());
            assert_eq!(once, twice, "normalize not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_multiple_dashes() {
        // Every separator is normalized so a second pass is a no-op.
        assert_eq!(LanguageTag::normalize("zh-Hant-TW").as_str(), "zh_Hant_TW");
    }

    #[test]
    fn test_normalize_preserves_case() {
        assert_eq!(LanguageTag::normalize("PT-br").as_str(), "PT_br");
    }

    // ==================== Base Subtag Tests ====================

    #[test]
    fn test_base_subtag_with_region() {
        assert_eq!(base_subtag("pt_BR"), "pt");
    }

    #[test]
    fn test_base_subtag_without_region() {
        assert_eq!(base_subtag("en"), "en");
    }

    #[test]
    fn test_base_subtag_dash_separator() {
        assert_eq!(base_subtag("pt-BR"), "pt");
    }

    #[test]
    fn test_base_subtag_underscore_checked_first() {
        assert_eq!(base_subtag("pt_BR-x"), "pt");
    }

    #[test]
    fn test_base_subtag_empty() {
        assert_eq!(base_subtag(""), "");
    }

    #[test]
    fn test_base_subtag_method_matches_free_function() {
        let tag = LanguageTag::normalize("pt-BR");
        assert_eq!(tag.base_subtag(), "pt");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_roundtrip() {
        let tag = LanguageTag::normalize("pt-BR");
        assert_eq!(tag.to_string(), "pt_BR");
    }

    #[test]
    fn test_eq_with_str() {
        let tag = LanguageTag::normalize("fr");
        assert_eq!(tag, "fr");
        assert_ne!(tag, "en");
    }

    #[test]
    fn test_serde_transparent_string() {
        let tag = LanguageTag::normalize("pt-BR");
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"pt_BR\"");

        let back: LanguageTag = serde_json::from_str("\"pt_BR\"").unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let tag: LanguageTag = serde_json::from_str("\"pt-BR\"").unwrap();
        assert_eq!(tag, "pt_BR");
    }
}
