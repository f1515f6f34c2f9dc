//! The entry store: holds the in-memory record list and keeps the persisted
//! slot in sync. The JSON array under RECORDS_KEY is the entire durable
//! state; every mutation rewrites it in full.

pub mod slot;

use crate::errors::AppResult;
use crate::models::record::UsageRecord;
use slot::SlotStore;
use std::path::Path;

/// Slot holding the JSON-encoded record list.
pub const RECORDS_KEY: &str = "equipamentos.base.v1";

/// Slot holding the configured fuel price (plain decimal string).
pub const FUEL_PRICE_KEY: &str = "preco_combustivel";

pub struct RecordStore {
    slots: SlotStore,
    records: Vec<UsageRecord>,
}

impl RecordStore {
    /// Open the store rooted at `dir`, loading the persisted list once.
    /// Missing or corrupt data silently resets to an empty list.
    pub fn open(dir: &Path) -> AppResult<Self> {
        let slots = SlotStore::open(dir)?;
        let records = match slots.read(RECORDS_KEY) {
            Some(raw) => serde_json::from_str::<Vec<UsageRecord>>(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { slots, records })
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn records_slot_path(&self) -> std::path::PathBuf {
        self.slots.slot_path(RECORDS_KEY)
    }

    pub fn find(&self, id: &str) -> Option<&UsageRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn add(&mut self, rec: UsageRecord) -> AppResult<()> {
        self.records.push(rec);
        self.persist()
    }

    /// Replace the record with the same id in full. Returns false (without
    /// touching the slot) when no record carries that id.
    pub fn update(&mut self, rec: UsageRecord) -> AppResult<bool> {
        match self.records.iter_mut().find(|r| r.id == rec.id) {
            Some(existing) => {
                *existing = rec;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Swap in a whole new list (CSV import path).
    pub fn replace_all(&mut self, records: Vec<UsageRecord>) -> AppResult<()> {
        self.records = records;
        self.persist()
    }

    /// The persisted fuel price, defaulting to 0 on a missing or
    /// unparsable slot.
    pub fn fuel_price(&self) -> f64 {
        self.slots
            .read(FUEL_PRICE_KEY)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0)
    }

    pub fn set_fuel_price(&self, price: f64) -> AppResult<()> {
        self.slots.write(FUEL_PRICE_KEY, &price.to_string())
    }

    fn persist(&self) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        self.slots.write(RECORDS_KEY, &json)
    }
}
