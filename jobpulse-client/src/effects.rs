//! Effect runner for reconciliation's best-effort server corrections.
//!
//! Fixes are dispatched as detached tasks so the load path stays pure:
//! failures are logged and never retried, and nothing waits on them.

use std::sync::Arc;

use jobpulse_model::UpdateApplication;

use crate::api::JobsApi;
use crate::reconcile::StatusFix;

/// Dispatches queued status fixes as fire-and-forget requests.
pub fn dispatch_fixes(api: Arc<dyn JobsApi>, fixes: Vec<StatusFix>) {
    for fix in fixes {
        let api = Arc::clone(&api);
        tokio::spawn(async move {
            let update = UpdateApplication::status_only(fix.status);
            if let Err(err) =
                api.update_application(&fix.id, &update).await
            {
                log::warn!(
                    "auto-fix for application {} failed: {}",
                    fix.id,
                    err
                );
            }
        });
    }
}
