//! Test support: a scripted, in-memory [`JobsApi`] implementation.
//!
//! Pages and scan statuses are queued up front and consumed in order;
//! failure switches simulate transport errors. Calls are recorded so
//! tests can assert on what the core actually sent.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use jobpulse_model::{
    ApplicationId, ApplicationStatus, ApplicationsPage, GmailStatus,
    NewApplication, QueryFilters, ScanOutcome, ScanStatusResponse,
    StatsSummary, UpdateApplication,
};

use crate::api::JobsApi;
use crate::error::{ClientError, ClientResult};

/// Scripted in-memory stand-in for the JobPulse backend.
#[derive(Debug, Clone, Default)]
pub struct StubJobsApi {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    pages: VecDeque<ApplicationsPage>,
    scan_statuses: VecDeque<ScanStatusResponse>,
    scan_now_outcome: Option<ScanOutcome>,
    gmail: GmailStatus,
    stats: StatsSummary,
    fail_fetches: bool,
    fail_updates: bool,
    fetch_calls: Vec<(u64, u64)>,
    update_calls: Vec<(ApplicationId, UpdateApplication)>,
    deleted: Vec<ApplicationId>,
    cleared: bool,
    created: u64,
}

impl StubJobsApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the next GET /applications response.
    pub fn push_page(&self, page: ApplicationsPage) {
        self.write().pages.push_back(page);
    }

    /// Queues the next GET /scan/status response. The final queued
    /// status repeats once the queue is down to one entry.
    pub fn push_scan_status(&self, status: ScanStatusResponse) {
        self.write().scan_statuses.push_back(status);
    }

    pub fn set_gmail_status(&self, status: GmailStatus) {
        self.write().gmail = status;
    }

    pub fn set_scan_now_outcome(&self, outcome: ScanOutcome) {
        self.write().scan_now_outcome = Some(outcome);
    }

    pub fn set_stats(&self, stats: StatsSummary) {
        self.write().stats = stats;
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.write().fail_fetches = fail;
    }

    pub fn fail_updates(&self, fail: bool) {
        self.write().fail_updates = fail;
    }

    /// `(limit, offset)` of every fetch the core issued.
    pub fn fetch_calls(&self) -> Vec<(u64, u64)> {
        self.read().fetch_calls.clone()
    }

    /// Every PUT body the core issued, auto-fixes included.
    pub fn update_calls(&self) -> Vec<(ApplicationId, UpdateApplication)> {
        self.read().update_calls.clone()
    }

    pub fn deleted(&self) -> Vec<ApplicationId> {
        self.read().deleted.clone()
    }

    pub fn was_cleared(&self) -> bool {
        self.read().cleared
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("stub state poisoned")
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("stub state poisoned")
    }
}

#[async_trait]
impl JobsApi for StubJobsApi {
    async fn fetch_applications(
        &self,
        _filters: &QueryFilters,
        limit: u64,
        offset: u64,
    ) -> ClientResult<ApplicationsPage> {
        let mut inner = self.write();
        inner.fetch_calls.push((limit, offset));
        if inner.fail_fetches {
            return Err(ClientError::Api {
                status: 500,
                message: "stub: fetch failure".to_string(),
            });
        }
        Ok(inner
            .pages
            .pop_front()
            .unwrap_or_else(ApplicationsPage::empty))
    }

    async fn update_application(
        &self,
        id: &ApplicationId,
        update: &UpdateApplication,
    ) -> ClientResult<()> {
        let mut inner = self.write();
        inner.update_calls.push((id.clone(), update.clone()));
        if inner.fail_updates {
            return Err(ClientError::Api {
                status: 500,
                message: "stub: update failure".to_string(),
            });
        }
        Ok(())
    }

    async fn create_application(
        &self,
        _application: &NewApplication,
    ) -> ClientResult<ApplicationId> {
        let mut inner = self.write();
        inner.created += 1;
        let id = format!("created-{}", inner.created);
        Ok(ApplicationId::from_string(id)?)
    }

    async fn delete_application(
        &self,
        id: &ApplicationId,
    ) -> ClientResult<()> {
        self.write().deleted.push(id.clone());
        Ok(())
    }

    async fn clear_all_applications(&self) -> ClientResult<u64> {
        self.write().cleared = true;
        Ok(0)
    }

    async fn scan_status(&self) -> ClientResult<ScanStatusResponse> {
        let mut inner = self.write();
        if inner.scan_statuses.len() > 1 {
            Ok(inner
                .scan_statuses
                .pop_front()
                .unwrap_or_default())
        } else {
            Ok(inner
                .scan_statuses
                .front()
                .cloned()
                .unwrap_or_default())
        }
    }

    async fn gmail_status(&self) -> ClientResult<GmailStatus> {
        Ok(self.read().gmail.clone())
    }

    async fn trigger_scan(
        &self,
        _days_back: u32,
        _max_results: u32,
    ) -> ClientResult<ScanOutcome> {
        Ok(self
            .read()
            .scan_now_outcome
            .clone()
            .unwrap_or_default())
    }

    async fn fetch_stats(&self) -> ClientResult<StatsSummary> {
        Ok(self.read().stats.clone())
    }

    async fn fetch_platforms(&self) -> ClientResult<Vec<String>> {
        Ok(vec![
            "LinkedIn".to_string(),
            "Indeed".to_string(),
            "Glassdoor".to_string(),
        ])
    }

    async fn fetch_statuses(&self) -> ClientResult<Vec<String>> {
        Ok(ApplicationStatus::all()
            .iter()
            .map(|status| status.api_name().to_string())
            .collect())
    }
}
