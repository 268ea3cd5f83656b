//! The bounded audio cache.

use super::key::CacheKey;
use crate::synth::AudioClip;
use crate::{Error, Result};
use lru::LruCache;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

/// Capacity of the process-wide instance returned by [`AudioCache::global`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Point-in-time statistics snapshot.
///
/// All fields are read under the same critical section, so `hits` and
/// `misses` are always mutually consistent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// Hit rate as a percentage; 0.0 when no `get` has completed yet.
    pub hit_rate: f64,
}

struct Inner {
    entries: LruCache<CacheKey, AudioClip>,
    hits: u64,
    misses: u64,
}

/// Bounded, thread-safe LRU cache for synthesized audio.
///
/// Entries are keyed by a [`CacheKey`] derived from the normalized
/// (text, language, speaker) triple. Every `get` hit promotes the entry to
/// most-recently-used; inserting a new key at capacity evicts exactly one
/// least-recently-used entry. A single mutex guards the entry map and both
/// counters, and is only ever held for O(1) structural updates.
///
/// # Example
///
/// ```rust
/// use tts_cache::{AudioCache, AudioClip};
///
/// let cache = AudioCache::new(100)?;
/// cache.put("Hello there", "en", "female", AudioClip::new(vec![0u8; 4], 22_050));
///
/// // Case and surrounding whitespace collapse to the same key.
/// assert!(cache.get("  hello there ", "en", "female").is_some());
/// # Ok::<(), tts_cache::Error>(())
/// ```
pub struct AudioCache {
    inner: Mutex<Inner>,
}

impl AudioCache {
    /// Creates a cache holding at most `max_entries` clips.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when `max_entries` is zero.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries)
            .ok_or_else(|| Error::configuration("cache capacity must be at least 1"))?;
        Ok(Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(capacity),
                hits: 0,
                misses: 0,
            }),
        })
    }

    /// Process-wide shared instance with [`DEFAULT_CAPACITY`].
    ///
    /// Constructed exactly once, even under concurrent first access. New code
    /// should prefer owning an explicit instance; this accessor exists for
    /// callers without a composition root to hang the cache on.
    pub fn global() -> &'static AudioCache {
        static GLOBAL: OnceCell<AudioCache> = OnceCell::new();
        GLOBAL.get_or_init(|| {
            AudioCache::new(DEFAULT_CAPACITY).expect("default capacity is non-zero")
        })
    }

    /// Looks up cached audio for a triple.
    ///
    /// A hit promotes the entry to most-recently-used and increments `hits`;
    /// a miss increments `misses` and returns `None`. A miss is a normal
    /// outcome, not an error.
    pub fn get(&self, text: &str, language: &str, speaker: &str) -> Option<AudioClip> {
        let key = CacheKey::derive(text, language, speaker);
        let mut inner = self.lock();
        if let Some(clip) = inner.entries.get(&key).cloned() {
            inner.hits += 1;
            Some(clip)
        } else {
            inner.misses += 1;
            None
        }
    }

    /// Inserts audio for a triple at the most-recently-used position.
    ///
    /// An existing entry under the same key is replaced outright (last `put`
    /// wins, and the replacement counts as a fresh insertion for recency).
    /// When a new key would exceed capacity, the least-recently-used entry is
    /// evicted first. The cache stores whatever clip it is given; validating
    /// sample rate or payload is the producer's job.
    pub fn put(&self, text: &str, language: &str, speaker: &str, clip: AudioClip) {
        let key = CacheKey::derive(text, language, speaker);
        self.lock().entries.put(key, clip);
    }

    /// Removes all entries and resets both counters to zero.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.hits = 0;
        inner.misses = 0;
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Takes a consistent statistics snapshot.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let total = inner.hits + inner.misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            inner.hits as f64 / total as f64 * 100.0
        };
        CacheStats {
            size: inner.entries.len(),
            max_entries: inner.entries.cap().get(),
            hits: inner.hits,
            misses: inner.misses,
            hit_rate,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation here can panic between related updates, so a poisoned
        // lock still guards consistent state.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl std::fmt::Debug for AudioCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("AudioCache")
            .field("size", &inner.entries.len())
            .field("max_entries", &inner.entries.cap().get())
            .field("hits", &inner.hits)
            .field("misses", &inner.misses)
            .finish()
    }
}
