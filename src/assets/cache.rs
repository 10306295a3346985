use std::collections::{HashMap, VecDeque};

use xxhash_rust::xxh3::xxh3_64;

use crate::assets::decode::ImageResource;

/// Content hash of encoded image bytes, used as the cache key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentFingerprint(pub(crate) u64);

impl ContentFingerprint {
    /// Fingerprint `bytes` with xxh3-64.
    pub fn of(bytes: &[u8]) -> Self {
        Self(xxh3_64(bytes))
    }

    /// Access raw 64-bit hash.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Engine-owned cache of decoded images keyed by content fingerprint.
///
/// Least-recently-used entries are evicted once `capacity` is exceeded. A capacity of zero
/// disables caching.
#[derive(Debug)]
pub struct ImageCache {
    capacity: usize,
    entries: HashMap<ContentFingerprint, ImageResource>,
    lru: VecDeque<ContentFingerprint>,
}

impl ImageCache {
    /// Create an empty cache holding at most `capacity` images.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            lru: VecDeque::new(),
        }
    }

    /// Maximum number of retained images.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained images.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is cached, without touching recency.
    pub fn contains(&self, key: ContentFingerprint) -> bool {
        self.entries.contains_key(&key)
    }

    /// Lookup and mark as most recently used.
    pub fn get(&mut self, key: ContentFingerprint) -> Option<ImageResource> {
        let img = self.entries.get(&key).cloned()?;
        self.touch(key);
        Some(img)
    }

    /// Insert (or refresh) an image, evicting least-recently-used entries beyond capacity.
    pub fn insert(&mut self, image: ImageResource) {
        if self.capacity == 0 {
            return;
        }
        let key = image.fingerprint();
        self.entries.insert(key, image);
        self.touch(key);
        while self.lru.len() > self.capacity {
            if let Some(old) = self.lru.pop_front() {
                self.entries.remove(&old);
                tracing::debug!(fingerprint = old.as_u64(), "image cache evicted entry");
            }
        }
    }

    /// Explicitly drop one entry. Returns whether it was present.
    pub fn evict(&mut self, key: ContentFingerprint) -> bool {
        if let Some(pos) = self.lru.iter().position(|k| *k == key) {
            self.lru.remove(pos);
        }
        self.entries.remove(&key).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    fn touch(&mut self, key: ContentFingerprint) {
        if let Some(pos) = self.lru.iter().position(|k| *k == key) {
            self.lru.remove(pos);
        }
        self.lru.push_back(key);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
