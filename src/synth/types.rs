//! Synthesized audio types.

use bytes::Bytes;

/// Speaker variant applied when a caller does not specify one.
pub const DEFAULT_SPEAKER: &str = "female";

/// Immutable synthesized audio: an opaque byte payload plus its sample rate.
///
/// The payload is a reference-counted [`Bytes`] buffer, so cloning a clip is
/// cheap and cached audio is shared rather than copied on every hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Bytes,
    pub sample_rate: u32,
}

impl AudioClip {
    pub fn new(bytes: impl Into<Bytes>, sample_rate: u32) -> Self {
        Self {
            bytes: bytes.into(),
            sample_rate,
        }
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
