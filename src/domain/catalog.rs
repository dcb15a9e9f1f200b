use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::CatalogRecord;

/// A stock entry cached by the inventory screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub updated_at: DateTime<Utc>,
}

impl StockItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            quantity,
            unit_price,
            updated_at: Utc::now(),
        }
    }
}

impl CatalogRecord for StockItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A piece of equipment tracked by the maintenance screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquired_at: Option<DateTime<Utc>>,
}

impl Equipment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            serial_number: None,
            acquired_at: None,
        }
    }
}

impl CatalogRecord for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A reusable service offering with its default price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTemplate {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ServiceTemplate {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            price,
            duration_minutes: None,
            description: None,
        }
    }
}

impl CatalogRecord for ServiceTemplate {
    fn id(&self) -> &str {
        &self.id
    }
}
