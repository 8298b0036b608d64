//! In-memory village records.
//!
//! Uses `RwLock::unwrap()`: a poisoned lock means another thread panicked
//! mid-write, which is unrecoverable here.

use async_trait::async_trait;
use desa_core::error::{DesaError, Result};
use desa_core::formats::decode_text;
use desa_core::models::{Village, VillageCentroid};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::ports::VillageStore;

#[derive(Debug, Default)]
struct Records {
    villages: Vec<Village>,
    by_id: HashMap<String, usize>,
}

impl Records {
    fn upsert(&mut self, village: Village) {
        match self.by_id.get(&village.id) {
            Some(&idx) => self.villages[idx] = village,
            None => {
                self.by_id.insert(village.id.clone(), self.villages.len());
                self.villages.push(village);
            }
        }
    }
}

/// In-memory implementation of VillageStore
#[derive(Debug, Clone, Default)]
pub struct MemoryVillageStore {
    records: Arc<RwLock<Records>>,
}

impl MemoryVillageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_villages(villages: Vec<Village>) -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write().unwrap();
            for village in villages {
                records.upsert(village);
            }
        }
        store
    }

    /// Parse a JSON array of village records
    pub fn from_json_str(text: &str) -> Result<Self> {
        let villages: Vec<Village> =
            serde_json::from_str(text).map_err(|e| DesaError::VillageRecordsInvalid {
                reason: e.to_string(),
            })?;
        tracing::info!(count = villages.len(), "Loaded village records");
        Ok(Self::from_villages(villages))
    }

    /// Load a JSON export of village records
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DesaError::VillageRecordsInvalid {
                reason: format!("file not found: {}", path.display()),
            });
        }
        tracing::info!(path = %path.display(), "Loading village records");
        let text = decode_text(std::fs::read(path)?);
        Self::from_json_str(&text)
    }
}

#[async_trait]
impl VillageStore for MemoryVillageStore {
    async fn store_villages(&self, villages: &[Village]) -> Result<()> {
        let mut records = self.records.write().unwrap();
        for village in villages {
            records.upsert(village.clone());
        }
        Ok(())
    }

    async fn get_village(&self, id: &str) -> Result<Option<Village>> {
        let records = self.records.read().unwrap();
        Ok(records.by_id.get(id).map(|&idx| records.villages[idx].clone()))
    }

    async fn list_villages(&self) -> Result<Vec<Village>> {
        Ok(self.records.read().unwrap().villages.clone())
    }

    async fn centroids(&self) -> Result<Vec<VillageCentroid>> {
        let records = self.records.read().unwrap();
        Ok(records
            .villages
            .iter()
            .filter_map(Village::centroid)
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.records.read().unwrap().villages.len())
    }
}
