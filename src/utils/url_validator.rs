//! URL validation and scheme normalization.
//!
//! Two validation variants exist on purpose. The lenient check
//! ([`is_acceptable_url`]) answers "could we make a URL out of this friendly
//! input" and retries with an `https://` prefix. The strict check
//! ([`is_valid_url`]) runs immediately before persistence and validates
//! exactly the string that will be stored, with no fallback: callers must
//! normalize first via [`normalize_url`].

use url::Url;

/// Strict well-formedness check for the string that will be stored.
///
/// A candidate is valid when it parses as an absolute URL with an `http` or
/// `https` scheme and a non-empty host. Never applies a normalization
/// fallback and never signals malformed input with an error.
///
/// Rejects non-web schemes like `javascript:`, `data:` and `file:` so a
/// redirect can never target them.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Lenient, client-facing acceptance check.
///
/// Tries the strict check first; if the raw input fails, retries with an
/// `https://` prefix. Only when both attempts fail does the input count as
/// invalid.
pub fn is_acceptable_url(raw: &str) -> bool {
    is_valid_url(raw) || is_valid_url(&format!("https://{raw}"))
}

/// Normalizes a raw URL string for storage.
///
/// Trims surrounding whitespace and prefixes `https://` when no recognized
/// scheme is present. Idempotent: normalizing an already-normalized string
/// returns it unchanged.
///
/// Normalization does not imply validity; the result must still pass
/// [`is_valid_url`] before being persisted.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    if has_recognized_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Returns true when the string starts with `http://` or `https://`,
/// case-insensitively.
fn has_recognized_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
