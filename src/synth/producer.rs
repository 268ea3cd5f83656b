//! The external synthesis producer seam.

use super::types::AudioClip;
use crate::Result;
use async_trait::async_trait;

/// External capability that synthesizes audio for a (text, language, speaker)
/// triple.
///
/// The cache treats implementations as opaque: it performs no validation of
/// the returned sample rate or audio content, and it only ever invokes the
/// producer during [`preload`](crate::AudioCache::preload) — regular `get`
/// misses are reported to the caller, who decides whether to synthesize.
///
/// A failure is reported as [`Error::Synthesis`](crate::Error::Synthesis)
/// with a human-readable reason.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language: &str, speaker: &str) -> Result<AudioClip>;
}
