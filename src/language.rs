//! Language type: a validated, existing translation.
//!
//! `LanguageTag` is any normalized tag; `Language` is a tag proven to name a
//! published translation in the registry. Explicit user choices (a `?lang=`
//! query parameter, a stored cookie value) go through [`Language::from_tag`]
//! so that unknown or unpublished tags are rejected, while soft preferences
//! (browser locale lists) go through [`Language::resolve`], which never
//! fails.

use crate::registry::{LanguageConfig, LanguageRegistry};
use crate::resolver::resolve_with_default;
use anyhow::{bail, Result};

/// A validated language.
///
/// Only tags that name an enabled translation in the registry can be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    tag: &'static str,
}

impl Language {
    /// Create a Language from a raw tag.
    ///
    /// The tag is normalized, then validated against the registry.
    ///
    /// # Returns
    /// * `Ok(Language)` if the tag names an enabled translation
    /// * `Err` if the tag is unknown or the translation is disabled
    ///
    /// # Example
    /// ```
    /// use langpick::Language;
    ///
    /// let pt = Language::from_tag("pt-BR").unwrap();
    /// assert_eq!(pt.tag(), "pt_BR");
    /// assert!(Language::from_tag("de").is_err());
    /// ```
    pub fn from_tag(raw: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_tag(raw) {
            Some(config) if config.enabled => Ok(Language { tag: config.tag }),
            Some(_) => bail!("Language '{}' is not published", raw),
            None => bail!("Unknown language tag: '{}'", raw),
        }
    }

    /// Resolve a soft preference to the best available language.
    ///
    /// Runs exact-then-base matching over the registry's available tags and
    /// falls back to the default language, so this never fails. Use for
    /// browser-reported preferences where any related translation beats the
    /// default.
    pub fn resolve(preferred: &str) -> Language {
        let registry = LanguageRegistry::get();
        let resolved = resolve_with_default(
            preferred,
            &registry.available_tags(),
            registry.default_language().tag,
        );

        // The resolved tag is either a registry tag or the registry default.
        let config = registry
            .get_by_tag(resolved.as_str())
            .expect("resolved tag should always be in the registry");
        Language { tag: config.tag }
    }

    /// Get the default language.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { tag: config.tag }
    }

    /// Get the normalized language tag (e.g., "en", "pt_BR").
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the tag is missing from the registry, which cannot happen
    /// for a properly constructed Language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_tag(self.tag)
            .expect("Language tag should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
