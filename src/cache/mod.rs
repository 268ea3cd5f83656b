//! Bounded LRU caching for synthesized audio responses.
//!
//! ## Overview
//!
//! Speech synthesis is slow relative to playback — a frequently spoken phrase
//! can take seconds to generate but is reused constantly. This module caches
//! synthesized audio keyed by the normalized (text, language, speaker) triple
//! so repeated phrases play back instantly instead of re-invoking the
//! synthesis engine.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`AudioCache`] | Thread-safe, fixed-capacity LRU cache with hit/miss counters |
//! | [`CacheKey`] | Digest key derived from normalized request fields |
//! | [`CacheStats`] | Consistent point-in-time statistics snapshot |
//! | [`Phrase`] | A (text, language, speaker) triple to preload |
//! | [`PreloadOutcome`] | Per-batch success/failure accounting |
//!
//! ## Eviction
//!
//! Strict LRU: every `get` hit promotes its entry to most-recently-used, and
//! inserting a new key at capacity evicts exactly one least-recently-used
//! entry. Recency is purely positional — entries carry no timestamps or TTL,
//! and the cache is volatile process-lifetime state with no persistence.

mod key;
mod preload;
mod store;

pub use key::CacheKey;
pub use preload::{default_phrases, Phrase, PreloadOutcome};
pub use store::{AudioCache, CacheStats, DEFAULT_CAPACITY};
