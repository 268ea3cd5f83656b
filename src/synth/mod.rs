//! Synthesis producer seam and audio payload types.
//!
//! The cache never synthesizes audio itself. [`SpeechSynthesizer`] is the
//! boundary to whatever engine produces the audio; the cache only stores and
//! serves the resulting [`AudioClip`] values.

mod producer;
mod types;

pub use producer::SpeechSynthesizer;
pub use types::{AudioClip, DEFAULT_SPEAKER};
