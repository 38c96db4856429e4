use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

use super::models::NewsResponse;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub data: Arc<NewsResponse>,
    pub timestamp: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, window: Duration, now: DateTime<Utc>) -> bool {
        now - self.timestamp < window
    }
}

/// One entry per cache key, overwritten on refresh. Entries are never
/// expired proactively; callers decide freshness when reading.
#[derive(Debug, Default)]
pub struct NewsCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl NewsCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // Entries are replaced wholesale, so a poisoned map is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: String, data: Arc<NewsResponse>) {
        self.insert_at(key, data, Utc::now());
    }

    pub fn insert_at(&self, key: String, data: Arc<NewsResponse>, timestamp: DateTime<Utc>) {
        self.lock().insert(key, CacheEntry { data, timestamp });
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
