use log::warn;
use std::sync::Arc;

use crate::constants::DONATIONS_STORE_KEY;
use crate::donations::{DonationRecord, DonationRepositoryTrait};
use crate::errors::{Error, Result, StorageError};
use crate::store::KeyValueStore;

/// Donation history over a key-value store.
pub struct DonationRepository {
    store: Arc<dyn KeyValueStore>,
}

impl DonationRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn save_all(&self, records: &[DonationRecord]) -> Result<()> {
        let json = serde_json::to_string(records).map_err(StorageError::from)?;
        self.store.set(DONATIONS_STORE_KEY, &json)
    }
}

impl DonationRepositoryTrait for DonationRepository {
    fn load(&self) -> Vec<DonationRecord> {
        let stored = match self.store.get(DONATIONS_STORE_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read donation history, assuming empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&stored) {
            Ok(records) => records,
            Err(e) => {
                // Shape drift or corruption is swallowed, not surfaced.
                warn!("Failed to parse donation history, assuming empty: {}", e);
                Vec::new()
            }
        }
    }

    fn append(&self, record: DonationRecord) -> Result<()> {
        let mut records = self.load();
        records.insert(0, record);
        self.save_all(&records)
    }

    fn toggle_verified(&self, id: &str) -> Result<DonationRecord> {
        let mut records = self.load();
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| Error::NotFound(format!("donation {}", id)))?;
        record.verified = !record.verified;
        let toggled = record.clone();
        self.save_all(&records)?;
        Ok(toggled)
    }

    fn total_credits(&self) -> i32 {
        self.load().iter().map(|r| r.credits).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryKeyValueStore;

    fn record(id: &str, credits: i32) -> DonationRecord {
        DonationRecord {
            id: id.to_string(),
            description: "黑色雷朋鏡框".to_string(),
            credits,
            verification_checklist: vec!["檢查鏡框".to_string()],
            verified: false,
            date: "2024年6月1日 10:00".to_string(),
        }
    }

    #[test]
    fn test_load_empty_store() {
        let repository = DonationRepository::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(repository.load().is_empty());
    }

    #[test]
    fn test_corrupted_value_loads_as_empty() {
        let store = MemoryKeyValueStore::with_value(DONATIONS_STORE_KEY, "{not json!");
        let repository = DonationRepository::new(Arc::new(store));
        assert!(repository.load().is_empty());
    }

    #[test]
    fn test_append_prepends_newest_first() {
        let repository = DonationRepository::new(Arc::new(MemoryKeyValueStore::new()));
        repository.append(record("d1", 40)).unwrap();
        repository.append(record("d2", 60)).unwrap();

        let records = repository.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "d2");
        assert_eq!(records[1].id, "d1");
    }

    #[test]
    fn test_toggle_verified_flips_only_target() {
        let repository = DonationRepository::new(Arc::new(MemoryKeyValueStore::new()));
        repository.append(record("d1", 40)).unwrap();
        repository.append(record("d2", 60)).unwrap();

        let toggled = repository.toggle_verified("d1").unwrap();
        assert!(toggled.verified);

        let records = repository.load();
        assert!(records.iter().find(|r| r.id == "d1").unwrap().verified);
        assert!(!records.iter().find(|r| r.id == "d2").unwrap().verified);
    }

    #[test]
    fn test_toggle_unknown_id_fails() {
        let repository = DonationRepository::new(Arc::new(MemoryKeyValueStore::new()));
        assert!(matches!(
            repository.toggle_verified("missing"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_total_credits_sums_history() {
        let repository = DonationRepository::new(Arc::new(MemoryKeyValueStore::new()));
        repository.append(record("d1", 40)).unwrap();
        repository.append(record("d2", 60)).unwrap();
        assert_eq!(repository.total_credits(), 100);
    }
}
