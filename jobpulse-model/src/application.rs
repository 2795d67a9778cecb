use crate::ids::ApplicationId;

/// Provenance of a status-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum HistorySource {
    Manual,
    GmailScan,
}

/// One appended entry in a record's status history.
///
/// Dates are kept as the backend's raw strings: `YYYY-MM-DD` for imported
/// entries, `YYYY-MM-DD HH:MM:SS` for server-stamped ones. Both shapes
/// order correctly under plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusHistoryEntry {
    pub status: String,
    pub date: String,
    pub source: HistorySource,
}

/// Tag the Gmail scanner attaches to records it created or touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RecordAction {
    New,
    Updated,
}

/// One tracked job application, exactly as the backend serializes it.
///
/// Required scalars decode with empty-string defaults so that records
/// missing them still arrive and can be quarantined by validation; only a
/// missing `id` fails the decode outright.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub company: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub platform: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applied_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub salary: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub job_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub interview_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub response_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated_date: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub status_history: Vec<StatusHistoryEntry>,
    /// Only present on records returned by a scan.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "_action",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub action: Option<RecordAction>,
}

impl ApplicationRecord {
    /// Status of the history entry with the latest date, if any history
    /// exists. Sorts a copy; ties keep append order.
    pub fn latest_history_status(&self) -> Option<&str> {
        if self.status_history.is_empty() {
            return None;
        }
        let mut entries: Vec<&StatusHistoryEntry> =
            self.status_history.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.first().map(|entry| entry.status.as_str())
    }
}
