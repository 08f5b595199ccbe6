//! BLAKE3 cache key derivation
//!
//! Cache keys are a stable digest of the resolved download URL, never of
//! the raw specifier: two specifiers resolving to the same artifact share
//! one cache entry, and a floating specifier can never alias a stale one.

/// Derive the cache key for a resolved download URL
pub fn cache_key(url: &str) -> String {
    blake3::hash(url.as_bytes()).to_hex().to_string()
}
