//! # tts-cache
//!
//! Bounded, thread-safe LRU cache for synthesized speech audio.
//!
//! ## Overview
//!
//! Text-to-speech synthesis is expensive; the same short phrases come up over
//! and over. This crate keeps synthesized audio in a fixed-capacity,
//! concurrency-safe LRU cache keyed by the normalized (text, language,
//! speaker) triple, with hit/miss telemetry and a batch preload operation for
//! warming the cache with known high-frequency phrases.
//!
//! ## Key Features
//!
//! - **Strict LRU eviction**: hits promote, new inserts evict the
//!   least-recently-used entry once capacity is reached
//! - **Normalized keys**: case and surrounding whitespace collapse to the
//!   same fixed-length digest key
//! - **Telemetry**: cumulative hit/miss counters and a consistent
//!   [`CacheStats`] snapshot
//! - **Preloading**: [`AudioCache::preload`] warms the cache from any
//!   [`SpeechSynthesizer`], tolerating and logging per-phrase failures
//!
//! ## Quick Start
//!
//! ```rust
//! use tts_cache::{AudioCache, AudioClip};
//!
//! let cache = AudioCache::new(100)?;
//!
//! // Miss: the caller synthesizes and stores the result.
//! assert!(cache.get("How are you feeling?", "en", "female").is_none());
//! cache.put(
//!     "How are you feeling?",
//!     "en",
//!     "female",
//!     AudioClip::new(vec![0u8; 1024], 22_050),
//! );
//!
//! // Hit: served from memory, no re-synthesis.
//! assert!(cache.get("how are you feeling?  ", "en", "female").is_some());
//! assert_eq!(cache.stats().hit_rate, 50.0);
//! # Ok::<(), tts_cache::Error>(())
//! ```
//!
//! Warming the cache at startup:
//!
//! ```rust,no_run
//! use tts_cache::{default_phrases, AudioCache, SpeechSynthesizer};
//!
//! # async fn warm(engine: &dyn SpeechSynthesizer) {
//! let cache = AudioCache::global();
//! let outcome = cache.preload(&default_phrases(), engine).await;
//! println!("warmed {} phrases, {} failed", outcome.succeeded, outcome.failed);
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | The LRU cache, key derivation, stats, and preloading |
//! | [`synth`] | The synthesis producer seam and audio payload types |
//! | [`error`] | Unified error type |

pub mod cache;
pub mod error;
pub mod synth;

// Re-export main types for convenience
pub use cache::{default_phrases, AudioCache, CacheKey, CacheStats, Phrase, PreloadOutcome, DEFAULT_CAPACITY};
pub use error::Error;
pub use synth::{AudioClip, SpeechSynthesizer, DEFAULT_SPEAKER};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
