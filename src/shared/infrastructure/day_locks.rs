// Serializes work on a single (user, calendar day).
//
// Every mutation of a time entry holds the lock of each day it touches from
// validation through the overtime recompute, so the stored overtime of a day
// always reflects the entries present after the last committed mutation.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, OwnedMutexGuard};

pub type DayKey = (String, NaiveDate);

#[derive(Default)]
pub struct DayLocks {
    slots: Mutex<HashMap<DayKey, Weak<Mutex<()>>>>,
}

/// Held locks for one or more days. Released on drop.
pub struct DayGuard {
    keys: Vec<DayKey>,
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl DayGuard {
    pub fn covers(&self, user_id: &str, date: NaiveDate) -> bool {
        self.keys
            .iter()
            .any(|(user, day)| user == user_id && *day == date)
    }

    pub fn keys(&self) -> &[DayKey] {
        &self.keys
    }
}

impl DayLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, user_id: &str, date: NaiveDate) -> DayGuard {
        self.lock_many(vec![(user_id.to_string(), date)]).await
    }

    /// Keys are deduplicated and acquired in sorted order so two callers
    /// locking overlapping sets cannot deadlock.
    pub async fn lock_many(&self, mut keys: Vec<DayKey>) -> DayGuard {
        keys.sort();
        keys.dedup();

        let slots: Vec<Arc<Mutex<()>>> = {
            let mut registry = self.slots.lock().await;
            registry.retain(|_, slot| slot.strong_count() > 0);
            keys.iter()
                .map(|key| match registry.get(key).and_then(Weak::upgrade) {
                    Some(slot) => slot,
                    None => {
                        let slot = Arc::new(Mutex::new(()));
                        registry.insert(key.clone(), Arc::downgrade(&slot));
                        slot
                    }
                })
                .collect()
        };

        let mut guards = Vec::with_capacity(slots.len());
        for slot in slots {
            guards.push(slot.lock_owned().await);
        }
        DayGuard {
            keys,
            _guards: guards,
        }
    }

    pub async fn tracked_slots(&self) -> usize {
        let registry = self.slots.lock().await;
        registry.values().filter(|slot| slot.strong_count() > 0).count()
    }
}
