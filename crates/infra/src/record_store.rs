use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use stocktrack_core::RecordId;
use stocktrack_inventory::InventoryRecord;

/// Durable-collection boundary for inventory records.
///
/// The dashboard consumes `list` as one bulk read per render; there is no
/// caching and no incremental update. Writes are atomic per call but not
/// coordinated against concurrent readers: a read immediately following
/// another request's write may or may not observe it.
pub trait RecordStore: Send + Sync {
    fn insert(&self, record: InventoryRecord);

    fn get(&self, id: &RecordId) -> Option<InventoryRecord>;

    /// Replace an existing record wholesale. Returns `false` when
    /// `record.id` is absent.
    fn update(&self, record: InventoryRecord) -> bool;

    /// Returns `false` when `id` is absent.
    fn remove(&self, id: &RecordId) -> bool;

    /// Bulk read of the full record set, ordered by id (creation order for
    /// v7 ids).
    fn list(&self) -> Vec<InventoryRecord>;
}

impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    fn insert(&self, record: InventoryRecord) {
        (**self).insert(record)
    }

    fn get(&self, id: &RecordId) -> Option<InventoryRecord> {
        (**self).get(id)
    }

    fn update(&self, record: InventoryRecord) -> bool {
        (**self).update(record)
    }

    fn remove(&self, id: &RecordId) -> bool {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<InventoryRecord> {
        (**self).list()
    }
}

/// In-memory record store; records live for the process lifetime.
#[derive(Debug)]
pub struct InMemoryRecordStore {
    inner: RwLock<HashMap<RecordId, InventoryRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn insert(&self, record: InventoryRecord) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(record.id, record);
        }
    }

    fn get(&self, id: &RecordId) -> Option<InventoryRecord> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    fn update(&self, record: InventoryRecord) -> bool {
        match self.inner.write() {
            Ok(mut map) => match map.entry(record.id) {
                Entry::Occupied(mut occupied) => {
                    occupied.insert(record);
                    true
                }
                Entry::Vacant(_) => false,
            },
            Err(_) => false,
        }
    }

    fn remove(&self, id: &RecordId) -> bool {
        match self.inner.write() {
            Ok(mut map) => map.remove(id).is_some(),
            Err(_) => false,
        }
    }

    fn list(&self) -> Vec<InventoryRecord> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };

        let mut records: Vec<_> = map.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        records
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    fn record(id: RecordId, name: &str) -> InventoryRecord {
        InventoryRecord {
            id,
            name: name.to_string(),
            quantity_in_stock: 5,
            quantity_sold: 2,
            cost_per_item: 100,
            sales: 200,
            last_sale_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    fn id(n: u128) -> RecordId {
        RecordId::from_uuid(Uuid::from_u128(n))
    }

    #[test]
    fn insert_then_get() {
        let store = InMemoryRecordStore::new();
        store.insert(record(id(1), "Widget"));

        let found = store.get(&id(1)).unwrap();
        assert_eq!(found.name, "Widget");
        assert!(store.get(&id(2)).is_none());
    }

    #[test]
    fn update_replaces_only_existing_records() {
        let store = InMemoryRecordStore::new();
        store.insert(record(id(1), "Widget"));

        assert!(store.update(record(id(1), "Widget v2")));
        assert_eq!(store.get(&id(1)).unwrap().name, "Widget v2");

        assert!(!store.update(record(id(2), "Phantom")));
        assert!(store.get(&id(2)).is_none());
    }

    #[test]
    fn remove_reports_presence() {
        let store = InMemoryRecordStore::new();
        store.insert(record(id(1), "Widget"));

        assert!(store.remove(&id(1)));
        assert!(!store.remove(&id(1)));
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store = InMemoryRecordStore::new();
        store.insert(record(id(3), "C"));
        store.insert(record(id(1), "A"));
        store.insert(record(id(2), "B"));

        let names: Vec<_> = store.list().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
