//! File-based implementation of VesselRepository

use std::cell::RefCell;
use std::path::PathBuf;

use tripcost_domain::model::VesselRecord;
use tripcost_domain::repository::VesselRepository;
use tripcost_store::VesselStore;
use tripcost_types::{Error, Result};

/// VesselRepository backed by the JSON vessel store
pub struct FileVesselRepository {
    store: RefCell<VesselStore>,
}

impl FileVesselRepository {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: RefCell::new(VesselStore::open(store_dir)?),
        })
    }
}

impl VesselRepository for FileVesselRepository {
    fn add(&self, vessel: &VesselRecord) -> std::result::Result<(), Error> {
        self.store.borrow_mut().add_vessel(vessel.clone()).map(|_| ())
    }

    fn save(&self, vessel: &VesselRecord) -> std::result::Result<(), Error> {
        self.store.borrow_mut().upsert_vessel(vessel.clone())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<VesselRecord>, Error> {
        Ok(self.store.borrow().get_vessel(id).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<VesselRecord>, Error> {
        Ok(self.store.borrow().all_vessels().into_iter().cloned().collect())
    }

    fn remove(&self, id: &str) -> std::result::Result<bool, Error> {
        self.store.borrow_mut().remove_vessel(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tripcost_types::StoreError;

    #[test]
    fn test_save_find_remove() {
        let dir = tempdir().unwrap();
        let repo = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
        let vessel = VesselRecord::new("MV Repo");
        repo.save(&vessel).unwrap();
        assert_eq!(repo.find_by_id(&vessel.id).unwrap().unwrap().name, "MV Repo");
        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert!(repo.remove(&vessel.id).unwrap());
        assert!(repo.find_by_id(&vessel.id).unwrap().is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_but_save_replaces() {
        let dir = tempdir().unwrap();
        let repo = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
        let mut vessel = VesselRecord::new("MV Repo");
        repo.add(&vessel).unwrap();
        assert!(matches!(
            repo.add(&vessel),
            Err(Error::Store(StoreError::Duplicate(_)))
        ));
        vessel.flag = Some("LR".to_string());
        repo.save(&vessel).unwrap();
        let stored = repo.find_by_id(&vessel.id).unwrap().unwrap();
        assert_eq!(stored.flag.as_deref(), Some("LR"));
    }
}
