//! Vessel store

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::info;
use tripcost_domain::model::VesselRecord;
use tripcost_types::{Result, StoreError};

use crate::{load_map, write_map};

/// Persistent store for vessel documents
pub struct VesselStore {
    store_path: PathBuf,
    vessels: HashMap<String, VesselRecord>,
}

impl VesselStore {
    /// Create or load a vessel store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("vessels.json");
        let vessels = load_map(&store_path)?;
        Ok(Self { store_path, vessels })
    }

    fn save(&self) -> Result<()> {
        write_map(&self.store_path, &self.vessels)
    }

    /// Add a new vessel; ids must be unique
    pub fn add_vessel(&mut self, vessel: VesselRecord) -> Result<String> {
        if self.vessels.contains_key(&vessel.id) {
            return Err(StoreError::Duplicate(vessel.id).into());
        }
        let id = vessel.id.clone();
        info!(id = %id, name = %vessel.name, "vessel added");
        self.vessels.insert(id.clone(), vessel);
        self.save()?;
        Ok(id)
    }

    /// Insert or replace without the duplicate check
    pub fn upsert_vessel(&mut self, vessel: VesselRecord) -> Result<()> {
        self.vessels.insert(vessel.id.clone(), vessel);
        self.save()
    }

    /// Remove a vessel by id
    pub fn remove_vessel(&mut self, id: &str) -> Result<bool> {
        let removed = self.vessels.remove(id).is_some();
        if removed {
            info!(id = %id, "vessel removed");
            self.save()?;
        }
        Ok(removed)
    }

    pub fn get_vessel(&self, id: &str) -> Option<&VesselRecord> {
        self.vessels.get(id)
    }

    /// All vessels sorted by name
    pub fn all_vessels(&self) -> Vec<&VesselRecord> {
        let mut vessels: Vec<_> = self.vessels.values().collect();
        vessels.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        vessels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn ready(name: &str) -> VesselRecord {
        let mut v = VesselRecord::new(name);
        v.do_price = Some(500.0);
        v.do_standby = Some(1.0);
        v.do_at_sea = Some(3.0);
        v.do_discharge = Some(2.5);
        v.do_idle = Some(2.0);
        v.loading = Some(20.0);
        v.idle = Some(5.0);
        v.hire = Some(0.0);
        v.hire_per_day = Some(10000.0);
        v.vessel_capacity = Some("50000 MT".to_string());
        v.sea_ballast_with_cargo_temp = Some(1.0);
        v.discharging = Some(18.0);
        v
    }

    #[test]
    fn test_add_and_reload() {
        let dir = tempdir().unwrap();
        let id = {
            let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
            store.add_vessel(ready("MV Ocean Star")).unwrap()
        };
        let store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.all_vessels().len(), 1);
        assert_eq!(store.get_vessel(&id).unwrap().name, "MV Ocean Star");
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let dir = tempdir().unwrap();
        let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        let v = ready("MV One");
        store.add_vessel(v.clone()).unwrap();
        assert!(store.add_vessel(v).is_err());
    }

    #[test]
    fn test_all_vessels_sorted_by_name() {
        let dir = tempdir().unwrap();
        let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        store.add_vessel(ready("MV Zulu")).unwrap();
        store.add_vessel(ready("MV Alpha")).unwrap();
        store.add_vessel(VesselRecord::new("MV Draft")).unwrap();
        let names: Vec<_> = store.all_vessels().iter().map(|v| v.name.clone()).collect();
        assert_eq!(names, vec!["MV Alpha", "MV Draft", "MV Zulu"]);
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        let id = store.add_vessel(ready("MV Ocean Star")).unwrap();
        assert!(store.remove_vessel(&id).unwrap());
        assert!(!store.remove_vessel(&id).unwrap());
        let reopened = VesselStore::open(dir.path().to_path_buf()).unwrap();
        assert!(reopened.get_vessel(&id).is_none());
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let dir = tempdir().unwrap();
        let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        let mut v = ready("MV One");
        store.add_vessel(v.clone()).unwrap();
        v.flag = Some("PA".to_string());
        store.upsert_vessel(v.clone()).unwrap();
        assert_eq!(store.all_vessels().len(), 1);
        assert_eq!(store.get_vessel(&v.id).unwrap().flag.as_deref(), Some("PA"));
    }

    #[test]
    fn test_corrupt_file_is_kept_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vessels.json");
        let truncated = r#"{"a": {"id": "a", "name": "MV Keep"}"#;
        std::fs::write(&path, truncated).unwrap();

        let mut store = VesselStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(store.all_vessels().len(), 0);
        store.add_vessel(VesselRecord::new("MV New")).unwrap();

        let copies = crate::corrupt_copies(dir.path(), "vessels.json");
        assert_eq!(copies.len(), 1);
        assert_eq!(std::fs::read_to_string(&copies[0]).unwrap(), truncated);
        let reopened = VesselStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.all_vessels().len(), 1);
    }
}
