//! Multi-threaded invariant tests for the audio cache.

use std::sync::Arc;
use std::thread;
use tts_cache::{AudioCache, AudioClip};

const KEY_SPACE: usize = 32;
const CAPACITY: usize = 16;
const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 500;

fn clip(tag: u8) -> AudioClip {
    AudioClip::new(vec![tag; 16], 22_050)
}

fn phrase(k: usize) -> String {
    format!("phrase {k}")
}

#[test]
fn concurrent_gets_and_puts_preserve_invariants() {
    let cache = Arc::new(AudioCache::new(CAPACITY).unwrap());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut gets = 0u64;
                for i in 0..OPS_PER_THREAD {
                    // Deterministic per-thread walk over an overlapping key space.
                    let k = (t * 7 + i * 13) % KEY_SPACE;
                    if i % 3 == 0 {
                        cache.put(&phrase(k), "en", "female", clip(k as u8));
                    } else {
                        cache.get(&phrase(k), "en", "female");
                        gets += 1;
                    }
                }
                gets
            })
        })
        .collect();

    let total_gets: u64 = handles.into_iter().map(|h| h.join().unwrap()).sum();

    let stats = cache.stats();
    assert!(stats.size <= CAPACITY);
    assert_eq!(stats.hits + stats.misses, total_gets);

    // The reported size must equal the number of distinct keys still live.
    let live = (0..KEY_SPACE)
        .filter(|&k| cache.get(&phrase(k), "en", "female").is_some())
        .count();
    assert_eq!(stats.size, live);
}

#[test]
fn concurrent_clear_keeps_cache_consistent() {
    let cache = Arc::new(AudioCache::new(8).unwrap());

    let mut handles = Vec::new();
    for t in 0..4 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for i in 0..400 {
                let k = (t + i * 3) % KEY_SPACE;
                cache.put(&phrase(k), "en", "female", clip(k as u8));
                cache.get(&phrase(k), "en", "female");
                assert!(cache.stats().size <= 8);
            }
        }));
    }
    {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                cache.clear();
                thread::yield_now();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    // Still fully usable after the churn.
    cache.clear();
    let stats = cache.stats();
    assert_eq!(stats.size, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    cache.put("hello", "en", "female", clip(1));
    assert!(cache.get("hello", "en", "female").is_some());
}

#[test]
fn global_instance_is_constructed_once() {
    let addrs: Vec<usize> = (0..8)
        .map(|_| thread::spawn(|| AudioCache::global() as *const AudioCache as usize))
        .collect::<Vec<_>>()
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();

    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}
