// In memory implementation of a record store table.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store items per key, update attributes in place, and answer index queries.
// - Apply batches all-or-nothing.
// - Check conditions and unique attributes under the same write lock as the write.
// - Simulate outages and transient write failures.

use crate::shared::infrastructure::record_store::{Item, StoreError};
use serde_json::Value as Json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryTable {
    name: String,
    key_attribute: String,
    items: RwLock<HashMap<String, Item>>,
    is_offline: AtomicBool,
    failing_writes: AtomicU32,
}

impl InMemoryTable {
    pub fn new(name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key_attribute: key_attribute.into(),
            items: RwLock::new(HashMap::new()),
            is_offline: AtomicBool::new(false),
            failing_writes: AtomicU32::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// The next `count` writes fail with a backend error.
    pub fn fail_next_writes(&self, count: u32) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Offline);
        }
        Ok(())
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        self.check_online()?;
        let consumed = self
            .failing_writes
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1));
        if consumed.is_ok() {
            return Err(StoreError::Backend(format!("write to {} failed", self.name)));
        }
        Ok(())
    }

    fn key_of(&self, item: &Item) -> Result<String, StoreError> {
        match item.get(&self.key_attribute) {
            Some(Json::String(key)) => Ok(key.clone()),
            _ => Err(StoreError::Malformed {
                key: String::from("<unknown>"),
                reason: format!("missing key attribute {}", self.key_attribute),
            }),
        }
    }

    pub async fn put(&self, item: Item) -> Result<(), StoreError> {
        self.check_writable()?;
        let key = self.key_of(&item)?;
        self.items.write().await.insert(key, item);
        Ok(())
    }

    /// Inserts a new item unless its key, or its `unique_attribute` value,
    /// is already taken.
    pub async fn insert_unique(&self, item: Item, unique_attribute: &str) -> Result<(), StoreError> {
        self.check_writable()?;
        let key = self.key_of(&item)?;
        let mut guard = self.items.write().await;
        if guard.contains_key(&key) || holds_value(&guard, &key, unique_attribute, item.get(unique_attribute)) {
            return Err(StoreError::ConditionFailed(key));
        }
        guard.insert(key, item);
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<Item>, StoreError> {
        self.check_online()?;
        Ok(self.items.read().await.get(key).cloned())
    }

    /// Sets the given attributes on an existing item and returns the stored
    /// result. `Json::Null` values remove the attribute.
    pub async fn merge(&self, key: &str, attributes: Item) -> Result<Item, StoreError> {
        self.check_writable()?;
        let mut guard = self.items.write().await;
        let item = guard
            .get_mut(key)
            .ok_or_else(|| StoreError::MissingRecord(key.to_string()))?;
        apply_attributes(item, attributes);
        Ok(item.clone())
    }

    /// Like `merge`, but only while `condition` holds for the stored item.
    pub async fn merge_if<F>(&self, key: &str, condition: F, attributes: Item) -> Result<Item, StoreError>
    where
        F: FnOnce(&Item) -> bool + Send,
    {
        self.check_writable()?;
        let mut guard = self.items.write().await;
        let item = guard
            .get_mut(key)
            .ok_or_else(|| StoreError::MissingRecord(key.to_string()))?;
        if !condition(item) {
            return Err(StoreError::ConditionFailed(key.to_string()));
        }
        apply_attributes(item, attributes);
        Ok(item.clone())
    }

    /// Like `merge`, but fails if another item already holds the new
    /// `unique_attribute` value.
    pub async fn merge_unique(&self, key: &str, unique_attribute: &str, attributes: Item) -> Result<Item, StoreError> {
        self.check_writable()?;
        let mut guard = self.items.write().await;
        if !guard.contains_key(key) {
            return Err(StoreError::MissingRecord(key.to_string()));
        }
        if holds_value(&guard, key, unique_attribute, attributes.get(unique_attribute)) {
            return Err(StoreError::ConditionFailed(key.to_string()));
        }
        let item = guard
            .get_mut(key)
            .ok_or_else(|| StoreError::MissingRecord(key.to_string()))?;
        apply_attributes(item, attributes);
        Ok(item.clone())
    }

    /// Applies every patch or none of them.
    pub async fn update_many(&self, patches: Vec<(String, Item)>) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut guard = self.items.write().await;
        if let Some((missing, _)) = patches.iter().find(|(key, _)| !guard.contains_key(key)) {
            return Err(StoreError::MissingRecord(missing.clone()));
        }
        for (key, attributes) in patches {
            if let Some(item) = guard.get_mut(&key) {
                apply_attributes(item, attributes);
            }
        }
        Ok(())
    }

    pub async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        self.check_writable()?;
        Ok(self.items.write().await.remove(key).is_some())
    }

    /// Removes the item only while `condition` holds for it. `Ok(false)`
    /// means there was nothing to remove.
    pub async fn delete_if<F>(&self, key: &str, condition: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&Item) -> bool + Send,
    {
        self.check_writable()?;
        let mut guard = self.items.write().await;
        match guard.get(key) {
            None => Ok(false),
            Some(item) if !condition(item) => Err(StoreError::ConditionFailed(key.to_string())),
            Some(_) => Ok(guard.remove(key).is_some()),
        }
    }

    pub async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        self.check_online()?;
        Ok(self.items.read().await.values().cloned().collect())
    }

    /// Items whose string attribute `attribute` equals `value`.
    pub async fn query(&self, attribute: &str, value: &str) -> Result<Vec<Item>, StoreError> {
        self.check_online()?;
        Ok(self
            .items
            .read()
            .await
            .values()
            .filter(|item| item.get(attribute).and_then(Json::as_str) == Some(value))
            .cloned()
            .collect())
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

/// Whether an item other than `except_key` stores `value` under `attribute`.
fn holds_value(items: &HashMap<String, Item>, except_key: &str, attribute: &str, value: Option<&Json>) -> bool {
    match value {
        None | Some(Json::Null) => false,
        Some(value) => items
            .iter()
            .any(|(key, item)| key != except_key && item.get(attribute) == Some(value)),
    }
}

fn apply_attributes(item: &mut Item, attributes: Item) {
    for (attribute, value) in attributes {
        if value.is_null() {
            item.remove(&attribute);
        } else {
            item.insert(attribute, value);
        }
    }
}
