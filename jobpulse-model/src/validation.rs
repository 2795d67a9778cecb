use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::ApplicationRecord;
use crate::status::ApplicationStatus;

static DATE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern"));

/// Validation failure classes surfaced on the needs-review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    BadFormat,
    UnknownStatus,
    HistoryMismatch,
}

/// One per-field tag attached to an invalid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub kind: IssueKind,
}

impl FieldIssue {
    fn missing(field: &'static str) -> Self {
        FieldIssue {
            field,
            kind: IssueKind::Missing,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IssueKind::Missing => write!(f, "{} is missing", self.field),
            IssueKind::BadFormat => {
                write!(f, "{} is not YYYY-MM-DD", self.field)
            }
            IssueKind::UnknownStatus => {
                write!(f, "{} is not a known status", self.field)
            }
            IssueKind::HistoryMismatch => write!(
                f,
                "{} disagrees with the latest history entry",
                self.field
            ),
        }
    }
}

/// Runs the required-field, format, enum and history checks in order.
///
/// Every applicable issue is collected so the review surface can tag each
/// offending field; an empty list means the record is valid. Callers that
/// log a single diagnostic use the first entry.
pub fn validate(record: &ApplicationRecord) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    if record.company.trim().is_empty() {
        issues.push(FieldIssue::missing("company"));
    }
    if record.role.is_empty() {
        issues.push(FieldIssue::missing("role"));
    }
    if record.status.is_empty() {
        issues.push(FieldIssue::missing("status"));
    }
    if record.platform.is_empty() {
        issues.push(FieldIssue::missing("platform"));
    }
    if record.applied_date.is_empty() {
        issues.push(FieldIssue::missing("applied_date"));
    } else if !DATE_FORMAT.is_match(&record.applied_date) {
        issues.push(FieldIssue {
            field: "applied_date",
            kind: IssueKind::BadFormat,
        });
    }
    if !record.status.is_empty()
        && !ApplicationStatus::is_known(&record.status)
    {
        issues.push(FieldIssue {
            field: "status",
            kind: IssueKind::UnknownStatus,
        });
    }
    // Reconciliation heals mismatches before validation runs; this check
    // stays as a second line of defense.
    if let Some(latest) = record.latest_history_status() {
        if latest != record.status {
            issues.push(FieldIssue {
                field: "status_history",
                kind: IssueKind::HistoryMismatch,
            });
        }
    }
    issues
}

/// Convenience wrapper over [`validate`].
pub fn is_valid(record: &ApplicationRecord) -> bool {
    validate(record).is_empty()
}
