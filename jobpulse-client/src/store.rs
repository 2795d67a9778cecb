//! SyncStore - validated, paginated view of the application collection.
//!
//! The store is a synchronous state machine: `begin_load` claims a fetch,
//! and the fetched page comes back through `apply_page` (merge) or
//! `fail_load` (release). All I/O and notification plumbing lives in
//! [`crate::session`], which keeps every transition here unit-testable.

use jobpulse_model::{
    validate, ApplicationId, ApplicationRecord, ApplicationsPage,
    FieldIssue,
};

use crate::reconcile::{reconcile, StatusFix};

/// Pagination cursor and in-flight bookkeeping for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Count of valid records held; doubles as the next fetch offset.
    pub offset: u64,
    pub page_size: u64,
    pub has_more: bool,
    pub total: u64,
    pub is_loading_more: bool,
}

/// A fetched record that failed validation, with its per-field tags.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord {
    pub record: ApplicationRecord,
    pub issues: Vec<FieldIssue>,
}

/// Claim produced by [`SyncStore::begin_load`]. Must be handed back to
/// `apply_page` or `fail_load`; the generation inside it lets the store
/// discard responses that a newer reset has superseded.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    pub generation: u64,
    pub offset: u64,
    pub limit: u64,
    pub reset: bool,
}

/// Summary of one merged page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageApplied {
    /// Valid records added to the store by this page.
    pub appended: usize,
    /// Records quarantined by validation in this page.
    pub invalid: usize,
    /// Best-effort server corrections queued by reconciliation.
    pub fixes: Vec<StatusFix>,
}

/// Single source of truth for the fetched application collection.
#[derive(Debug)]
pub struct SyncStore {
    applications: Vec<ApplicationRecord>,
    invalid: Vec<InvalidRecord>,
    page: PageState,
    generation: u64,
}

impl SyncStore {
    pub fn new(page_size: u64) -> Self {
        Self {
            applications: Vec::new(),
            invalid: Vec::new(),
            page: PageState {
                offset: 0,
                page_size,
                has_more: true,
                total: 0,
                is_loading_more: false,
            },
            generation: 0,
        }
    }

    /// Valid records, in fetch order.
    pub fn applications(&self) -> &[ApplicationRecord] {
        &self.applications
    }

    /// Records quarantined on the last reset pass.
    pub fn invalid(&self) -> &[InvalidRecord] {
        &self.invalid
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn get(&self, id: &ApplicationId) -> Option<&ApplicationRecord> {
        self.applications.iter().find(|record| &record.id == id)
    }

    /// Claims the next fetch.
    ///
    /// A reset always proceeds and supersedes any in-flight fetch by
    /// bumping the generation. An append returns `None` when a fetch is
    /// already in flight or the server reported no further pages.
    pub fn begin_load(&mut self, reset: bool) -> Option<LoadTicket> {
        if reset {
            self.generation += 1;
        } else if self.page.is_loading_more || !self.page.has_more {
            return None;
        }
        self.page.is_loading_more = true;
        Some(LoadTicket {
            generation: self.generation,
            offset: if reset { 0 } else { self.page.offset },
            limit: self.page.page_size,
            reset,
        })
    }

    /// Merges a fetched page: reconcile each record, partition by
    /// validation, advance the cursor to the client-visible valid count.
    ///
    /// Returns `None` when the ticket is stale (a newer reset superseded
    /// it) and the response was discarded unseen.
    pub fn apply_page(
        &mut self,
        ticket: LoadTicket,
        page: ApplicationsPage,
    ) -> Option<PageApplied> {
        if ticket.generation != self.generation {
            log::debug!(
                "discarding stale page response (generation {} != {})",
                ticket.generation,
                self.generation
            );
            return None;
        }

        let mut fixes = Vec::new();
        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        for mut record in page.applications {
            if let Some(fix) = reconcile(&mut record) {
                fixes.push(fix);
            }
            let issues = validate(&record);
            if issues.is_empty() {
                valid.push(record);
            } else {
                if let Some(first) = issues.first() {
                    log::warn!(
                        "application {} failed validation: {}",
                        record.id,
                        first
                    );
                }
                invalid.push(InvalidRecord { record, issues });
            }
        }

        let appended = valid.len();
        let invalid_count = invalid.len();
        if ticket.reset {
            self.applications = valid;
            self.invalid = invalid;
        } else {
            self.applications.extend(valid);
            // Appends leave the needs-review list alone; it is rebuilt on
            // the next reset pass.
        }

        self.page.offset = self.applications.len() as u64;
        self.page.has_more = page.has_more;
        self.page.total = page.total;
        self.page.is_loading_more = false;

        Some(PageApplied {
            appended,
            invalid: invalid_count,
            fixes,
        })
    }

    /// Releases the in-flight claim after a failed fetch. Everything else
    /// is left untouched; the caller reports the failure.
    pub fn fail_load(&mut self, ticket: LoadTicket) {
        if ticket.generation == self.generation {
            self.page.is_loading_more = false;
        }
    }

    /// Drops one record from both lists (server-side delete succeeded).
    pub fn remove(&mut self, id: &ApplicationId) -> bool {
        let before = self.applications.len() + self.invalid.len();
        self.applications.retain(|record| &record.id != id);
        self.invalid.retain(|entry| &entry.record.id != id);
        let removed =
            self.applications.len() + self.invalid.len() < before;
        if removed {
            self.page.offset = self.applications.len() as u64;
            self.page.total = self.page.total.saturating_sub(1);
        }
        removed
    }

    /// Drops every record and rewinds the cursor (sign-out or clear-all).
    /// Any in-flight fetch is invalidated.
    pub fn clear(&mut self) {
        self.applications.clear();
        self.invalid.clear();
        self.generation += 1;
        self.page.offset = 0;
        self.page.total = 0;
        self.page.has_more = true;
        self.page.is_loading_more = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::from_string(id.to_string()).expect("id"),
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

    fn page(ids: &[&str], has_more: bool, total: u64) -> ApplicationsPage {
        ApplicationsPage {
            applications: ids.iter().map(|id| record(id)).collect(),
            total,
            has_more,
        }
    }

    #[test]
    fn append_is_refused_while_a_fetch_is_in_flight() {
        let mut store = SyncStore::new(50);
        let ticket = store.begin_load(false).expect("first claim");
        assert!(store.begin_load(false).is_none());
        store.fail_load(ticket);
        assert!(store.begin_load(false).is_some());
    }

    #[test]
    fn append_is_refused_once_has_more_is_false() {
        let mut store = SyncStore::new(50);
        let ticket = store.begin_load(true).expect("reset claim");
        store.apply_page(ticket, page(&["a1"], false, 1));
        assert!(store.begin_load(false).is_none());
        // A reset still goes through.
        assert!(store.begin_load(true).is_some());
    }

    #[test]
    fn offset_tracks_valid_count_across_appends() {
        let mut store = SyncStore::new(2);
        let ticket = store.begin_load(true).expect("reset claim");
        store.apply_page(ticket, page(&["a1", "a2"], true, 5));
        assert_eq!(store.page().offset, 2);

        let ticket = store.begin_load(false).expect("append claim");
        assert_eq!(ticket.offset, 2);
        store.apply_page(ticket, page(&["a3", "a4"], true, 5));
        assert_eq!(store.len(), 4);
        assert_eq!(store.page().offset, 4);
    }

    #[test]
    fn invalid_records_do_not_advance_the_cursor() {
        let mut store = SyncStore::new(3);
        let mut broken = record("a3");
        broken.role = String::new();
        let fetched = ApplicationsPage {
            applications: vec![record("a1"), record("a2"), broken],
            total: 3,
            has_more: false,
        };
        let ticket = store.begin_load(true).expect("reset claim");
        let applied =
            store.apply_page(ticket, fetched).expect("page applied");
        assert_eq!(applied.appended, 2);
        assert_eq!(applied.invalid, 1);
        assert_eq!(store.page().offset, 2);
        assert_eq!(store.invalid().len(), 1);
    }

    #[test]
    fn stale_response_is_discarded_after_a_newer_reset() {
        let mut store = SyncStore::new(50);
        let first = store.begin_load(true).expect("first reset");
        let second = store.begin_load(true).expect("second reset");

        // The newer fetch lands first.
        store
            .apply_page(second, page(&["b1"], false, 1))
            .expect("fresh page applies");
        // The slower, superseded response must not overwrite it.
        assert!(store.apply_page(first, page(&["a1"], true, 9)).is_none());

        assert_eq!(store.len(), 1);
        assert_eq!(store.applications()[0].id.as_str(), "b1");
        assert!(!store.page().has_more);
    }

    #[test]
    fn stale_failure_does_not_release_the_newer_claim() {
        let mut store = SyncStore::new(50);
        let first = store.begin_load(true).expect("first reset");
        let _second = store.begin_load(true).expect("second reset");
        store.fail_load(first);
        // The second fetch is still in flight; appends stay gated.
        assert!(store.page().is_loading_more);
    }

    #[test]
    fn reset_replaces_both_lists() {
        let mut store = SyncStore::new(50);
        let mut broken = record("bad");
        broken.company = String::new();
        let ticket = store.begin_load(true).expect("claim");
        store.apply_page(
            ticket,
            ApplicationsPage {
                applications: vec![record("a1"), broken],
                total: 2,
                has_more: false,
            },
        );
        assert_eq!(store.invalid().len(), 1);

        let ticket = store.begin_load(true).expect("claim");
        store.apply_page(ticket, page(&["c1", "c2"], false, 2));
        assert_eq!(store.len(), 2);
        assert!(store.invalid().is_empty());
    }

    #[test]
    fn remove_drops_record_and_rewinds_cursor() {
        let mut store = SyncStore::new(50);
        let ticket = store.begin_load(true).expect("claim");
        store.apply_page(ticket, page(&["a1", "a2"], false, 2));

        let id = ApplicationId::from_string("a1".to_string()).expect("id");
        assert!(store.remove(&id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.page().offset, 1);
        assert_eq!(store.page().total, 1);
        assert!(!store.remove(&id));
    }

    #[test]
    fn clear_invalidates_in_flight_fetches() {
        let mut store = SyncStore::new(50);
        let ticket = store.begin_load(true).expect("claim");
        store.clear();
        assert!(store.apply_page(ticket, page(&["a1"], false, 1)).is_none());
        assert!(store.is_empty());
    }
}
