//! Matching and fallback resolution.
//!
//! Browser-reported language preferences are rarely exact matches for the
//! discrete set of translated page bundles that exist, so matching runs in
//! two tiers: exact match first, then base-subtag fallback (`pt` lands on an
//! available `pt_BR`). A handful of human-curated translations does not
//! justify full BCP-47 negotiation.
//!
//! Everything here is pure computation over its inputs: no I/O, no shared
//! state, safe to call concurrently from any number of callers.

use crate::tag::LanguageTag;
use tracing::debug;

/// Find the best match for a preferred language among the available tags.
///
/// The preference is normalized first. An exact match wins; otherwise the
/// first available tag sharing the preference's base subtag wins. In both
/// tiers the first hit in iteration order is returned. Callers control
/// tie-breaking among regional variants by ordering `available`.
///
/// # Returns
/// A reference to the matched entry, or `None` when nothing relates to the
/// preference at either tier. Absence of a match is an expected outcome,
/// not an error.
///
/// # Example
/// ```
/// use langpick::{match_tag, LanguageTag};
///
/// let available = [LanguageTag::normalize("pt_BR"), LanguageTag::normalize("en")];
/// assert_eq!(match_tag("pt", &available), Some(&available[0]));
/// assert_eq!(match_tag("de", &available), None);
/// ```
pub fn match_tag<'a>(preferred: &str, available: &'a [LanguageTag]) -> Option<&'a LanguageTag> {
    let preferred = LanguageTag::normalize(preferred);

    if let Some(hit) = available.iter().find(|tag| **tag == preferred) {
        debug!(preferred = %preferred, "matched exactly");
        return Some(hit);
    }

    let base = preferred.base_subtag();
    if let Some(hit) = available.iter().find(|tag| tag.base_subtag() == base) {
        debug!(preferred = %preferred, matched = %hit, "matched on base subtag");
        return Some(hit);
    }

    debug!(preferred = %preferred, "no match");
    None
}

/// Resolve a preferred language, falling back to a default.
///
/// Like [`match_tag`], but when nothing matches the (normalized) default is
/// returned, so resolution never fails. The conventional default is `en`.
pub fn resolve_with_default(
    preferred: &str,
    available: &[LanguageTag],
    default: &str,
) -> LanguageTag {
    match match_tag(preferred, available) {
        Some(tag) => tag.clone(),
        None => LanguageTag::normalize(default),
    }
}
