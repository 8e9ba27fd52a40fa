//! Language-tag matching and fallback resolution for translated
//! documentation sites.
//!
//! A site ships a handful of human-curated translations; visitors arrive
//! with a preferred language sourced from a query parameter, a cookie, or a
//! browser locale list. This crate picks the best available translation:
//! exact match first, then base-subtag fallback (`pt` finds `pt_BR`), then a
//! default.
//!
//! # Architecture
//!
//! - `tag`: normalized `LanguageTag` values and base-subtag extraction
//! - `resolver`: pure exact-then-base matching with default fallback
//! - `registry`: single source of truth for the translations that exist
//! - `language`: type-safe `Language` validated against the registry
//!
//! Discovery and matching are deliberately separate: the registry (or any
//! caller-supplied list) produces plain tags, and the resolver is a pure
//! function over them. Consumers own the glue: reading cookies and query
//! parameters, persisting choices, and turning a resolved tag into a file
//! path or redirect.
//!
//! # Example
//!
//! ```
//! use langpick::{Language, LanguageTag, match_tag, resolve_with_default};
//!
//! // Pure matching over an explicit available set
//! let available = [LanguageTag::normalize("pt_BR"), LanguageTag::normalize("en")];
//! assert_eq!(match_tag("pt-BR", &available), Some(&available[0]));
//! assert_eq!(resolve_with_default("de", &available, "en"), "en");
//!
//! // Registry-backed resolution, never fails
//! assert_eq!(Language::resolve("fr_CA").tag(), "fr");
//! ```

mod language;
mod registry;
mod resolver;
mod tag;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{match_tag, resolve_with_default};
pub use tag::{base_subtag, LanguageTag};
