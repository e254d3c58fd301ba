use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    /// `None` means the entry never expires.
    expires_at: Option<Instant>,
}

/// In-process TTL key/value cache with lazy expiry.
///
/// Expiry is checked on `get`; there is no background eviction. Entries with
/// no deadline are safe for forecasts anchored strictly in the past, since
/// the past does not change; anything anchored to "now" must use a short TTL
/// because the anchor itself moves. The map is lock-guarded so concurrent
/// forecast requests cannot corrupt it.
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached value, treating expired entries as misses and
    /// dropping them on the way out.
    pub fn get(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) => match entry.expires_at {
                    Some(deadline) if Instant::now() > deadline => {}
                    _ => return Some(entry.value.clone()),
                },
            }
        }
        self.entries.write().remove(key);
        None
    }

    /// Inserts or overwrites. `ttl = None` means the entry never expires.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .write()
            .insert(key.into(), CacheEntry { value, expires_at });
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a stable cache key from its parts. Callers must include anything
/// that changes the answer -- for forecast entries that includes the length
/// of the historical dataset, so entries invalidate when the data grows.
pub fn cache_key(parts: &[&str]) -> String {
    parts.join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_entry_expires() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.set("k", 7, Some(Duration::from_millis(100)));
        assert_eq!(cache.get("k"), Some(7));
        std::thread::sleep(Duration::from_millis(150));
        assert_eq!(cache.get("k"), None);
        // expired entry was dropped on the miss
        assert!(cache.is_empty());
    }

    #[test]
    fn test_no_ttl_never_expires() {
        let cache: TtlCache<&str> = TtlCache::new();
        cache.set("k", "v", None);
        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(cache.get("k"), Some("v"));
    }

    #[test]
    fn test_set_overwrites() {
        let cache: TtlCache<u32> = TtlCache::new();
        cache.set("k", 1, None);
        cache.set("k", 2, None);
        assert_eq!(cache.get("k"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_key_folds_in_all_parts() {
        let a = cache_key(&["electricity", "2024-06", "3", "24"]);
        let b = cache_key(&["electricity", "2024-06", "3", "25"]);
        assert_ne!(a, b);
        assert_eq!(a, "electricity:2024-06:3:24");
    }
}
