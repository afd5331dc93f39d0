use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{SessionStore, StoreError};

/// Process-local store for development and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
    offline: AtomicBool,
    stalled: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with [`StoreError::Unavailable`] until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Makes every call fail with [`StoreError::Timeout`], as a hung server would.
    pub fn set_stalled(&self, stalled: bool) {
        self.stalled.store(stalled, Ordering::SeqCst);
    }

    /// Sorted copy of all entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }

    fn check_reachable(&self, op: &'static str) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        if self.stalled.load(Ordering::SeqCst) {
            return Err(StoreError::Timeout(op));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_reachable("get")?;
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_reachable("set")?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.check_reachable("del")?;
        self.entries.remove(key);
        Ok(())
    }

    async fn increment(&self, key: &str) -> Result<i64, StoreError> {
        self.check_reachable("incr")?;
        // The entry guard holds the shard lock, so read and write are one step.
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| "0".to_string());
        let current: i64 = entry.parse().map_err(|_| StoreError::Corrupt {
            key: key.to_string(),
            detail: format!("not an integer: {:?}", entry.as_str()),
        })?;
        let next = current + 1;
        *entry = next.to_string();
        Ok(next)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_reachable("ping")
    }
}
