//! Language registry: single source of truth for the translations that exist.
//!
//! The registry is the discovery half of resolution kept separate from
//! matching: it produces a plain list of tags, and the resolver works over
//! that list. It uses a singleton pattern with `OnceLock` for thread-safe
//! initialization and access.

use crate::tag::LanguageTag;
use std::sync::OnceLock;

/// Configuration for one translated page bundle.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Normalized language tag (e.g., "en", "pt_BR")
    pub tag: &'static str,

    /// English name of the language (e.g., "Brazilian Portuguese")
    pub name: &'static str,

    /// Native name of the language, as shown in a language menu
    /// (e.g., "Português (Brasil)")
    pub native_name: &'static str,

    /// Whether this is the default language (only one should be true)
    pub is_default: bool,

    /// Whether this translation is currently published
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Look up a language configuration by tag.
    ///
    /// The query is normalized first, so `pt-BR` and `pt_BR/index.html`
    /// both find the `pt_BR` entry. Lookup is exact beyond normalization;
    /// fallback matching belongs to the resolver, not the registry.
    pub fn get_by_tag(&self, tag: &str) -> Option<&LanguageConfig> {
        let tag = LanguageTag::normalize(tag);
        self.languages.iter().find(|lang| tag == lang.tag)
    }

    /// All enabled languages, in registry order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// All languages, including disabled ones.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Tags of all enabled languages, sorted lexicographically.
    ///
    /// This is the "available set" handed to the resolver, and the order a
    /// language menu lists its entries in.
    pub fn available_tags(&self) -> Vec<LanguageTag> {
        let mut tags: Vec<LanguageTag> = self
            .languages
            .iter()
            .filter(|lang| lang.enabled)
            .map(|lang| LanguageTag::normalize(lang.tag))
            .collect();
        tags.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        tags
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check whether a tag names a published translation.
    pub fn is_enabled(&self, tag: &str) -> bool {
        self.get_by_tag(tag).map(|lang| lang.enabled).unwrap_or(false)
    }
}

/// The translations the site ships.
///
/// German and Galician have menu entries but no published page bundles yet,
/// so they are registered disabled.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            tag: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
            enabled: false,
        },
        LanguageConfig {
            tag: "en",
            name: "English",
            native_name: "English",
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            tag: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            tag: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            tag: "gl",
            name: "Galician",
            native_name: "Galego",
            is_default: false,
            enabled: false,
        },
        LanguageConfig {
            tag: "pt_BR",
            name: "Brazilian Portuguese",
            native_name: "Português (Brasil)",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            tag: "ru",
            name: "Russian",
            native_name: "Русский",
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            tag: "uk",
            name: "Ukrainian",
            native_name: "Український",
            is_default: false,
            enabled: true,
        },
    ]
}
