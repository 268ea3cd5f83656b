//! Cache key derivation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Joins the key fields before hashing. Callers are trusted not to embed
/// U+001F in text, language codes, or speaker names; within that assumption
/// distinct field triples never collide on concatenation.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Fixed-length lookup key derived from a normalized (text, language, speaker)
/// triple.
///
/// Using a digest instead of the raw text keeps key size bounded regardless of
/// phrase length and avoids holding a second copy of the text in the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for a triple.
    ///
    /// Text is trimmed and lowercased first, so payloads differing only in
    /// case or surrounding whitespace map to the same key. Empty text is a
    /// valid, distinct key.
    pub fn derive(text: &str, language: &str, speaker: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        let canonical = format!(
            "{normalized}{sep}{language}{sep}{speaker}",
            sep = FIELD_SEPARATOR
        );
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        let hash: String = hasher.finalize().iter().map(|b| format!("{:02x}", b)).collect();
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
