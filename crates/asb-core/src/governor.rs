use std::{
    collections::HashMap,
    sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError},
    time::Duration,
};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

use crate::{store::UsageStore, Result};

type LockTable = HashMap<String, Arc<Mutex<()>>>;

/// Async mutex table keyed by user id.
///
/// Entries live only while someone holds or waits for them.
#[derive(Default)]
pub struct KeyedLocks {
    inner: StdMutex<LockTable>,
}

impl KeyedLocks {
    pub async fn lock(&self, key: &str) -> KeyedGuard<'_> {
        let lock = self
            .table()
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.clone().lock_owned().await;
        KeyedGuard {
            owner: self,
            key: key.to_string(),
            lock,
            guard: Some(guard),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.table().is_empty()
    }

    fn table(&self) -> MutexGuard<'_, LockTable> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Held lock of one key; drops the table entry when it was the last user.
pub struct KeyedGuard<'a> {
    owner: &'a KeyedLocks,
    key: String,
    lock: Arc<Mutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyedGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        let mut table = self.owner.table();
        // Table entry plus this handle: no holder and no waiter left.
        if Arc::strong_count(&self.lock) == 2 {
            table.remove(&self.key);
        }
    }
}

/// Per-user cooldown enforcement backed by the usage store.
///
/// The read of `last_request` and the write of the new timestamp happen under
/// the id's lock, so two overlapping requests of one user cannot both pass.
pub struct RequestGovernor {
    store: UsageStore,
    cooldown: Duration,
    locks: KeyedLocks,
}

impl RequestGovernor {
    pub fn new(store: UsageStore, cooldown: Duration) -> Self {
        Self {
            store,
            cooldown,
            locks: KeyedLocks::default(),
        }
    }

    pub async fn try_accept_now(&self, id: &str) -> Result<bool> {
        self.try_accept(id, Utc::now()).await
    }

    /// Returns `false` (leaving state untouched) if the previous accepted
    /// request of `id` is less than one cooldown before `now`.
    pub async fn try_accept(&self, id: &str, now: DateTime<Utc>) -> Result<bool> {
        let _guard = self.locks.lock(id).await;

        if let Some(last) = self.store.read_last_request(id).await? {
            // A timestamp in the future counts as inside the window.
            let within = match (now - last).to_std() {
                Ok(elapsed) => elapsed < self.cooldown,
                Err(_) => true,
            };
            if within {
                debug!(user = id, "request rejected by cooldown");
                return Ok(false);
            }
        }

        self.store.record_request_time(id, now).await?;
        Ok(true)
    }
}
