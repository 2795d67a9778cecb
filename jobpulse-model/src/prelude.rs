//! Convenience re-exports for downstream crates.

pub use crate::application::{
    ApplicationRecord, HistorySource, RecordAction, StatusHistoryEntry,
};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::filters::{QueryFilters, SortField, SortOrder};
pub use crate::gmail::{GmailAccount, GmailStatus};
pub use crate::ids::ApplicationId;
pub use crate::page::ApplicationsPage;
pub use crate::requests::{NewApplication, UpdateApplication};
pub use crate::scan::{ScanOutcome, ScanState, ScanStatusResponse};
pub use crate::stats::StatsSummary;
pub use crate::status::ApplicationStatus;
pub use crate::validation::{is_valid, validate, FieldIssue, IssueKind};
