//! File-based implementation of TripReportRepository

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use tripcost_domain::model::{AttachmentRef, TripReport};
use tripcost_domain::repository::TripReportRepository;
use tripcost_store::ReportStore;
use tripcost_types::{Error, Result};

/// TripReportRepository backed by the JSON report store
pub struct FileTripReportRepository {
    store: RefCell<ReportStore>,
}

impl FileTripReportRepository {
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: RefCell::new(ReportStore::open(store_dir)?),
        })
    }
}

impl TripReportRepository for FileTripReportRepository {
    fn save(&self, report: &TripReport) -> std::result::Result<(), Error> {
        self.store.borrow_mut().add_report(report.clone()).map(|_| ())
    }

    fn find_by_id(&self, id: &str) -> std::result::Result<Option<TripReport>, Error> {
        Ok(self.store.borrow().get_report(id).cloned())
    }

    fn find_all(&self) -> std::result::Result<Vec<TripReport>, Error> {
        Ok(self.store.borrow().all_reports().into_iter().cloned().collect())
    }

    fn find_by_vessel(&self, vessel_id: &str) -> std::result::Result<Vec<TripReport>, Error> {
        Ok(self
            .store
            .borrow()
            .reports_for_vessel(vessel_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn remove(&self, id: &str) -> std::result::Result<bool, Error> {
        self.store.borrow_mut().remove_report(id)
    }

    fn attach_file(&self, report_id: &str, path: &Path) -> std::result::Result<AttachmentRef, Error> {
        self.store.borrow_mut().attach_file(report_id, path)
    }
}
