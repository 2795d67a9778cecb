//! Server communication seam.
//!
//! The sync store, session and poller talk to the backend only through
//! this trait, so tests can script responses with an in-memory stub.

use async_trait::async_trait;
use std::fmt::Debug;

use jobpulse_model::{
    ApplicationId, ApplicationsPage, GmailStatus, NewApplication,
    QueryFilters, ScanOutcome, ScanStatusResponse, StatsSummary,
    UpdateApplication,
};

use crate::error::ClientResult;

/// REST surface of the JobPulse backend consumed by the client core.
#[async_trait]
pub trait JobsApi: Send + Sync + Debug {
    /// GET /applications with server-side filters and pagination.
    async fn fetch_applications(
        &self,
        filters: &QueryFilters,
        limit: u64,
        offset: u64,
    ) -> ClientResult<ApplicationsPage>;

    /// PUT /applications/:id with a partial body. Reconciliation's
    /// auto-fix path sends a status-only body through here.
    async fn update_application(
        &self,
        id: &ApplicationId,
        update: &UpdateApplication,
    ) -> ClientResult<()>;

    /// POST /applications; returns the server-assigned id.
    async fn create_application(
        &self,
        application: &NewApplication,
    ) -> ClientResult<ApplicationId>;

    /// DELETE /applications/:id.
    async fn delete_application(
        &self,
        id: &ApplicationId,
    ) -> ClientResult<()>;

    /// DELETE /applications/clear/all; returns the deleted count.
    async fn clear_all_applications(&self) -> ClientResult<u64>;

    /// GET /scan/status for the login-triggered background scan.
    async fn scan_status(&self) -> ClientResult<ScanStatusResponse>;

    /// GET /gmail/status; decides whether the poller starts at all.
    async fn gmail_status(&self) -> ClientResult<GmailStatus>;

    /// POST /gmail/scan: the explicit "Scan Now" action. Unlike the
    /// background poll, its errors propagate to the caller.
    async fn trigger_scan(
        &self,
        days_back: u32,
        max_results: u32,
    ) -> ClientResult<ScanOutcome>;

    /// GET /stats.
    async fn fetch_stats(&self) -> ClientResult<StatsSummary>;

    /// GET /platforms (unauthenticated picker values).
    async fn fetch_platforms(&self) -> ClientResult<Vec<String>>;

    /// GET /statuses (unauthenticated picker values).
    async fn fetch_statuses(&self) -> ClientResult<Vec<String>>;
}
