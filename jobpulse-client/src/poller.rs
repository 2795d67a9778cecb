//! Background scan polling.
//!
//! The login-triggered Gmail scan runs server-side; this module waits for
//! it to finish. The poll is deliberately fail-quiet: transport errors
//! are swallowed, a server-side scan error is only logged, and running
//! out of attempts stops silently. The explicit "Scan Now" action does
//! not go through here - its errors belong to its own request.

use std::time::Duration;

use jobpulse_model::{ScanOutcome, ScanState};

use crate::api::JobsApi;

/// Terminal outcome surfaced to observers by a background poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanNotice {
    /// The scan changed something; the store has been refreshed.
    Imported { imported: u64, updated: u64 },
    /// The scan found known applications but nothing changed.
    AlreadyUpToDate,
}

/// Probe cadence for one poll run.
#[derive(Debug, Clone, Copy)]
pub struct PollSchedule {
    pub initial_delay: Duration,
    pub interval: Duration,
    pub max_attempts: u32,
}

/// Polls the scan-status endpoint until the job reaches a terminal state
/// or the attempt cap is hit.
///
/// Returns the completed outcome; `None` covers the quiet endings
/// (timeout, scan error, or a done status without a result payload).
pub(crate) async fn await_scan_completion(
    api: &dyn JobsApi,
    schedule: PollSchedule,
) -> Option<ScanOutcome> {
    tokio::time::sleep(schedule.initial_delay).await;
    let mut attempts = 0u32;
    loop {
        match api.scan_status().await {
            Ok(response) => match response.status {
                ScanState::Done => return response.result,
                ScanState::Error => {
                    let detail = response
                        .result
                        .and_then(|result| result.error)
                        .unwrap_or_default();
                    log::warn!("background scan failed: {}", detail);
                    return None;
                }
                ScanState::Idle | ScanState::Scanning => {}
            },
            Err(err) => {
                log::debug!("scan status poll failed: {}", err);
            }
        }
        attempts += 1;
        if attempts >= schedule.max_attempts {
            log::debug!(
                "scan status polling gave up after {} attempts",
                attempts
            );
            return None;
        }
        tokio::time::sleep(schedule.interval).await;
    }
}
