//! Session wiring for one signed-in user.
//!
//! A [`Session`] owns the sync store, the highlight tracker and the API
//! handle, and is the only place the async plumbing lives: it claims
//! fetches from the store, dispatches reconciliation fixes, schedules
//! highlight expiry, and runs the background scan poller. Frontends keep
//! a cheap clone of the handle and register a [`SessionObserver`] to be
//! told when to re-render.

use std::sync::{Arc, Weak};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use jobpulse_model::{
    ApplicationId, ApplicationRecord, NewApplication, QueryFilters,
    ScanOutcome, StatsSummary,
};

use crate::api::JobsApi;
use crate::config::ClientConfig;
use crate::effects;
use crate::error::ClientResult;
use crate::highlight::HighlightTracker;
use crate::poller::{self, PollSchedule, ScanNotice};
use crate::store::{InvalidRecord, PageApplied, PageState, SyncStore};

/// UI-facing notifications. Implementors re-render on each callback.
pub trait SessionObserver: Send + Sync {
    /// The valid/invalid lists or pagination state changed.
    fn records_changed(&self);
    /// The highlight window expired; badge styling must be dropped.
    fn highlights_cleared(&self);
    /// A background scan finished with something to tell the user.
    fn scan_notice(&self, notice: ScanNotice) {
        let _ = notice;
    }
}

/// Outcome of a [`Session::load_page`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page merged; counts of records added and quarantined.
    Applied { appended: usize, invalid: usize },
    /// An append was already in flight (or no more pages); nothing was
    /// fetched.
    Skipped,
    /// A newer reset superseded this fetch; the response was discarded.
    Stale,
}

#[derive(Debug)]
struct SessionInner {
    api: Arc<dyn JobsApi>,
    config: ClientConfig,
    store: Mutex<SyncStore>,
    highlights: Mutex<HighlightTracker>,
    observers: Mutex<Vec<Weak<dyn SessionObserver>>>,
}

/// One signed-in user's client state. Cloning shares the same state;
/// created at sign-in and dropped at sign-out.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(api: Arc<dyn JobsApi>, config: ClientConfig) -> Self {
        let store = SyncStore::new(config.page_size);
        Session {
            inner: Arc::new(SessionInner {
                api,
                config,
                store: Mutex::new(store),
                highlights: Mutex::new(HighlightTracker::new()),
                observers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn api(&self) -> Arc<dyn JobsApi> {
        Arc::clone(&self.inner.api)
    }

    /// Register an observer; dead weak references are pruned on notify.
    pub async fn subscribe(&self, observer: Weak<dyn SessionObserver>) {
        self.inner.observers.lock().await.push(observer);
    }

    /// Fetches and merges one page. `reset` restarts the listing from
    /// offset zero (filter/sort/search changes must reset).
    pub async fn load_page(
        &self,
        filters: &QueryFilters,
        reset: bool,
    ) -> ClientResult<LoadOutcome> {
        load_page_impl(&self.inner, filters, reset).await
    }

    /// Valid records, in fetch order.
    pub async fn applications(&self) -> Vec<ApplicationRecord> {
        self.inner.store.lock().await.applications().to_vec()
    }

    /// Records quarantined by validation, for the needs-review surface.
    pub async fn invalid_records(&self) -> Vec<InvalidRecord> {
        self.inner.store.lock().await.invalid().to_vec()
    }

    pub async fn page_state(&self) -> PageState {
        self.inner.store.lock().await.page()
    }

    pub async fn is_new(&self, id: &ApplicationId) -> bool {
        self.inner.highlights.lock().await.is_new(id)
    }

    pub async fn is_updated(&self, id: &ApplicationId) -> bool {
        self.inner.highlights.lock().await.is_updated(id)
    }

    /// Creates a record server-side; callers reload to pick it up.
    pub async fn create_application(
        &self,
        application: &NewApplication,
    ) -> ClientResult<ApplicationId> {
        self.inner.api.create_application(application).await
    }

    /// Deletes a record server-side and drops it from the store.
    pub async fn delete_application(
        &self,
        id: &ApplicationId,
    ) -> ClientResult<()> {
        self.inner.api.delete_application(id).await?;
        let removed = self.inner.store.lock().await.remove(id);
        if removed {
            self.inner.notify(|o| o.records_changed()).await;
        }
        Ok(())
    }

    /// Clears every record server-side and locally.
    pub async fn clear_all(&self) -> ClientResult<u64> {
        let deleted = self.inner.api.clear_all_applications().await?;
        self.inner.store.lock().await.clear();
        self.inner.highlights.lock().await.clear();
        self.inner.notify(|o| o.records_changed()).await;
        Ok(deleted)
    }

    pub async fn fetch_stats(&self) -> ClientResult<StatsSummary> {
        self.inner.api.fetch_stats().await
    }

    /// Explicit "Scan Now": runs the scan synchronously and folds the
    /// result in. Unlike the background poller, errors propagate.
    pub async fn scan_now(
        &self,
        filters: &QueryFilters,
        days_back: u32,
        max_results: u32,
    ) -> ClientResult<ScanOutcome> {
        let outcome = self
            .inner
            .api
            .trigger_scan(days_back, max_results)
            .await?;
        absorb_scan_outcome(&self.inner, filters, outcome.clone()).await;
        Ok(outcome)
    }

    /// Spawns the fail-quiet poll for the login-triggered background
    /// scan. Abort the returned handle to stop polling early.
    pub fn spawn_scan_poller(
        &self,
        filters: QueryFilters,
    ) -> JoinHandle<()> {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let schedule = PollSchedule {
                initial_delay: inner.config.scan_poll_initial_delay(),
                interval: inner.config.scan_poll_interval(),
                max_attempts: inner.config.scan_poll_max_attempts,
            };
            let outcome =
                poller::await_scan_completion(inner.api.as_ref(), schedule)
                    .await;
            if let Some(outcome) = outcome {
                absorb_scan_outcome(&inner, &filters, outcome).await;
            }
        })
    }

    /// Checks Gmail linkage and starts the poller only when an account
    /// is connected. Returns the poll handle when one was started.
    pub async fn start_poller_if_linked(
        &self,
        filters: QueryFilters,
    ) -> ClientResult<Option<JoinHandle<()>>> {
        let status = self.inner.api.gmail_status().await?;
        if !status.is_authenticated {
            log::info!("no Gmail account linked; scan poller not started");
            return Ok(None);
        }
        Ok(Some(self.spawn_scan_poller(filters)))
    }
}

impl SessionInner {
    async fn notify(&self, f: impl Fn(&dyn SessionObserver)) {
        let mut observers = self.observers.lock().await;
        observers.retain(|weak| match weak.upgrade() {
            Some(observer) => {
                f(observer.as_ref());
                true
            }
            None => false,
        });
    }
}

async fn load_page_impl(
    inner: &SessionInner,
    filters: &QueryFilters,
    reset: bool,
) -> ClientResult<LoadOutcome> {
    let ticket = match inner.store.lock().await.begin_load(reset) {
        Some(ticket) => ticket,
        None => return Ok(LoadOutcome::Skipped),
    };

    // The store lock is not held across the fetch; a concurrent reset
    // can supersede this ticket and its response will be discarded.
    match inner
        .api
        .fetch_applications(filters, ticket.limit, ticket.offset)
        .await
    {
        Err(err) => {
            inner.store.lock().await.fail_load(ticket);
            Err(err)
        }
        Ok(page) => {
            let applied =
                inner.store.lock().await.apply_page(ticket, page);
            match applied {
                None => Ok(LoadOutcome::Stale),
                Some(PageApplied {
                    appended,
                    invalid,
                    fixes,
                }) => {
                    if !fixes.is_empty() {
                        effects::dispatch_fixes(
                            Arc::clone(&inner.api),
                            fixes,
                        );
                    }
                    inner.notify(|o| o.records_changed()).await;
                    Ok(LoadOutcome::Applied { appended, invalid })
                }
            }
        }
    }
}

/// Folds a completed scan into the store and tracker.
async fn absorb_scan_outcome(
    inner: &Arc<SessionInner>,
    filters: &QueryFilters,
    outcome: ScanOutcome,
) {
    if outcome.imported_anything() {
        let epoch = inner
            .highlights
            .lock()
            .await
            .mark(&outcome.applications);
        schedule_highlight_expiry(inner, epoch);
        if let Err(err) = load_page_impl(inner, filters, true).await {
            log::warn!("refresh after scan failed: {}", err);
        }
        inner
            .notify(|o| {
                o.scan_notice(ScanNotice::Imported {
                    imported: outcome.imported,
                    updated: outcome.updated,
                })
            })
            .await;
    } else if outcome.found > 0 {
        inner
            .notify(|o| o.scan_notice(ScanNotice::AlreadyUpToDate))
            .await;
    }
    // Nothing found: stay silent.
}

/// Arms the delayed clear for the current highlight batch. Only the
/// epoch that armed the timer may clear; newer marks win.
fn schedule_highlight_expiry(inner: &Arc<SessionInner>, epoch: u64) {
    let inner = Arc::clone(inner);
    tokio::spawn(async move {
        tokio::time::sleep(inner.config.highlight_ttl()).await;
        let cleared =
            inner.highlights.lock().await.clear_if_epoch(epoch);
        if cleared {
            inner.notify(|o| o.highlights_cleared()).await;
        }
    });
}
