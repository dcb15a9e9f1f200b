//! Cached collections shared by the stock, equipment, and service screens.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::config::StorageKeys;
use crate::domain::catalog::{Equipment, ServiceTemplate, StockItem};
use crate::domain::common::CatalogRecord;
use crate::errors::Result;
use crate::storage::KeyValueStore;

/// Whole-collection cache over the key-value store.
///
/// Each screen's data lives under one key as a JSON array and is rewritten in
/// full on every mutation, the same contract the ledger list uses.
pub struct CatalogService<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CatalogService<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn stock_items(&self) -> Vec<StockItem> {
        self.load(&self.keys.stock())
    }

    pub fn save_stock_items(&self, items: &[StockItem]) -> Result<()> {
        self.save(&self.keys.stock(), items)
    }

    pub fn upsert_stock_item(&self, item: StockItem) -> Result<()> {
        self.upsert(&self.keys.stock(), item)
    }

    pub fn remove_stock_item(&self, id: &str) -> Result<bool> {
        self.remove::<StockItem>(&self.keys.stock(), id)
    }

    pub fn equipment(&self) -> Vec<Equipment> {
        self.load(&self.keys.equipment())
    }

    pub fn save_equipment(&self, items: &[Equipment]) -> Result<()> {
        self.save(&self.keys.equipment(), items)
    }

    pub fn upsert_equipment(&self, item: Equipment) -> Result<()> {
        self.upsert(&self.keys.equipment(), item)
    }

    pub fn remove_equipment(&self, id: &str) -> Result<bool> {
        self.remove::<Equipment>(&self.keys.equipment(), id)
    }

    pub fn service_templates(&self) -> Vec<ServiceTemplate> {
        self.load(&self.keys.service_templates())
    }

    pub fn save_service_templates(&self, items: &[ServiceTemplate]) -> Result<()> {
        self.save(&self.keys.service_templates(), items)
    }

    pub fn upsert_service_template(&self, item: ServiceTemplate) -> Result<()> {
        self.upsert(&self.keys.service_templates(), item)
    }

    pub fn remove_service_template(&self, id: &str) -> Result<bool> {
        self.remove::<ServiceTemplate>(&self.keys.service_templates(), id)
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(%key, %err, "catalog read failed, returning empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(%key, %err, "catalog unparsable, returning empty");
                Vec::new()
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.store.set(key, &json)
    }

    fn upsert<T>(&self, key: &str, record: T) -> Result<()>
    where
        T: CatalogRecord + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.load(key);
        match items.iter_mut().find(|item| item.id() == record.id()) {
            Some(existing) => *existing = record,
            None => items.push(record),
        }
        self.save(key, &items)
    }

    fn remove<T>(&self, key: &str, id: &str) -> Result<bool>
    where
        T: CatalogRecord + Serialize + DeserializeOwned,
    {
        let mut items: Vec<T> = self.load(key);
        let before = items.len();
        items.retain(|item| item.id() != id);
        if items.len() == before {
            return Ok(false);
        }
        self.save(key, &items)?;
        Ok(true)
    }
}
