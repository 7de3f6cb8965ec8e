use std::sync::{Arc, RwLock};

use crate::models::VehicleRecord;

pub type SharedFleet = Arc<Fleet>;

/// The one shared mutable dataset: an ordered fleet snapshot behind a lock.
///
/// Updates are wholesale replacements; there is no merging, versioning or
/// persistence across restarts.
pub struct Fleet {
    inner: RwLock<Vec<VehicleRecord>>,
}

impl Fleet {
    pub fn new(records: Vec<VehicleRecord>) -> SharedFleet {
        Arc::new(Self {
            inner: RwLock::new(records),
        })
    }

    /// Current records, in order.
    pub fn snapshot(&self) -> Vec<VehicleRecord> {
        self.inner.read().unwrap().clone()
    }

    /// Overwrites the whole dataset; returns the new record count.
    pub fn replace(&self, records: Vec<VehicleRecord>) -> usize {
        let mut inner = self.inner.write().unwrap();
        *inner = records;
        inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixture;

    fn record(plate: &str) -> VehicleRecord {
        VehicleRecord {
            plate: plate.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_initial_records() {
        let fleet = Fleet::new(fixture());
        assert_eq!(fleet.snapshot(), fixture());
    }

    #[test]
    fn replace_overwrites_instead_of_merging() {
        let fleet = Fleet::new(fixture());
        let count = fleet.replace(vec![record("AAA-111"), record("BBB-222")]);
        assert_eq!(count, 2);

        let snapshot = fleet.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.iter().all(|r| r.plate != "ABC-123"));
    }

    #[test]
    fn replace_preserves_order() {
        let fleet = Fleet::new(Vec::new());
        fleet.replace(vec![record("CCC-333"), record("AAA-111"), record("BBB-222")]);
        let plates: Vec<_> = fleet.snapshot().into_iter().map(|r| r.plate).collect();
        assert_eq!(plates, ["CCC-333", "AAA-111", "BBB-222"]);
    }

    #[test]
    fn replace_with_empty_clears_the_fleet() {
        let fleet = Fleet::new(fixture());
        assert_eq!(fleet.replace(Vec::new()), 0);
        assert!(fleet.snapshot().is_empty());
    }
}
