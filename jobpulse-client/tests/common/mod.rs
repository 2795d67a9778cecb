//! Shared builders and a counting observer for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use jobpulse_client::{ScanNotice, SessionObserver};
use jobpulse_model::{
    ApplicationId, ApplicationRecord, ApplicationsPage, HistorySource,
    RecordAction, StatusHistoryEntry,
};

/// A fully valid record with the given id.
pub fn valid_record(id: &str) -> ApplicationRecord {
    ApplicationRecord {
        id: ApplicationId::from_string(id.to_string()).expect("test id"),
        company: "Acme".to_string(),
        role: "Engineer".to_string(),
        status: "Applied".to_string(),
        platform: "LinkedIn".to_string(),
        applied_date: "2024-01-01".to_string(),
        salary: String::new(),
        location: String::new(),
        job_url: String::new(),
        notes: String::new(),
        interview_date: String::new(),
        response_date: String::new(),
        updated_date: String::new(),
        status_history: Vec::new(),
        action: None,
    }
}

pub fn history_entry(status: &str, date: &str) -> StatusHistoryEntry {
    StatusHistoryEntry {
        status: status.to_string(),
        date: date.to_string(),
        source: HistorySource::Manual,
    }
}

pub fn tagged_record(
    id: &str,
    action: RecordAction,
) -> ApplicationRecord {
    let mut record = valid_record(id);
    record.action = Some(action);
    record
}

pub fn page(
    records: Vec<ApplicationRecord>,
    has_more: bool,
    total: u64,
) -> ApplicationsPage {
    ApplicationsPage {
        applications: records,
        total,
        has_more,
    }
}

pub fn id(raw: &str) -> ApplicationId {
    ApplicationId::from_string(raw.to_string()).expect("test id")
}

/// Observer that counts notifications and collects scan notices.
#[derive(Debug, Default)]
pub struct CountingObserver {
    pub records_changed: AtomicUsize,
    pub highlights_cleared: AtomicUsize,
    pub notices: Mutex<Vec<ScanNotice>>,
}

impl CountingObserver {
    pub fn records_changed_count(&self) -> usize {
        self.records_changed.load(Ordering::SeqCst)
    }

    pub fn highlights_cleared_count(&self) -> usize {
        self.highlights_cleared.load(Ordering::SeqCst)
    }

    pub fn notices(&self) -> Vec<ScanNotice> {
        self.notices.lock().expect("notices").clone()
    }
}

impl SessionObserver for CountingObserver {
    fn records_changed(&self) {
        self.records_changed.fetch_add(1, Ordering::SeqCst);
    }

    fn highlights_cleared(&self) {
        self.highlights_cleared.fetch_add(1, Ordering::SeqCst);
    }

    fn scan_notice(&self, notice: ScanNotice) {
        self.notices.lock().expect("notices").push(notice);
    }
}
