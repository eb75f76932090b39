//! Catalog - the authoritative in-memory record collection
//!
//! Owned by the App and rendered by the inventory component. All
//! mutation flows through `upsert` and `remove`; ids are assigned here
//! and stay stable for the life of the session.

use super::record::Record;
use anyhow::{Context, Result};

/// Built-in sample rows, standing in for a backend that does not exist
const SAMPLE_RECORDS: &str = r#"[
  {
    "id": 1,
    "title": "Widget A",
    "subtitle": "Workbench staple",
    "description": "General purpose widget",
    "price": "50",
    "quantity": "50",
    "category": "Tools",
    "photo": "widget-a.jpg"
  },
  {
    "id": 2,
    "title": "Widget B",
    "subtitle": "Low-voltage",
    "description": "Widget with electronics fittings",
    "price": "50",
    "quantity": "30",
    "category": "Electronics",
    "photo": "widget-b.jpg"
  },
  {
    "id": 3,
    "title": "Gadget C",
    "subtitle": "Kitchen ready",
    "description": "Countertop gadget",
    "price": "50",
    "quantity": "20",
    "category": "Appliances",
    "photo": "gadget-c.jpg"
  },
  {
    "id": 4,
    "title": "Gadget D",
    "subtitle": "Flat packed",
    "description": "Assembles in minutes",
    "price": "50",
    "quantity": "15",
    "category": "Furniture",
    "photo": "gadget-d.jpg"
  },
  {
    "id": 5,
    "title": "Tool E",
    "subtitle": "Heavy duty",
    "description": "Shop floor tool",
    "price": "50",
    "quantity": "60",
    "category": "Hardware",
    "photo": "tool-e.jpg"
  }
]"#;

/// In-memory record collection with stable id assignment
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON array of records
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> =
            serde_json::from_str(json).context("Failed to parse catalog records")?;
        Ok(Self { records })
    }

    /// Catalog pre-loaded with the sample dataset
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_RECORDS)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn find(&self, id: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    fn next_id(&self) -> u64 {
        self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1
    }

    /// Merge a finalized record back into the collection
    ///
    /// A record whose id matches an existing row replaces that row in
    /// place; a record with id 0 gets the next free id and is appended.
    /// Returns the id the record ended up with.
    pub fn upsert(&mut self, mut record: Record) -> u64 {
        if record.id != 0 {
            if let Some(existing) = self.records.iter_mut().find(|r| r.id == record.id) {
                *existing = record;
                return existing.id;
            }
        }
        if record.id == 0 {
            record.id = self.next_id();
        }
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Remove the record with the given id, returning it if it existed
    pub fn remove(&mut self, id: u64) -> Option<Record> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }
}
