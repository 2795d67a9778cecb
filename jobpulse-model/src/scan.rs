use crate::application::ApplicationRecord;

/// Lifecycle of the server-side Gmail scan job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ScanState {
    #[default]
    Idle,
    Scanning,
    Done,
    Error,
}

/// Counters and payload reported by a finished scan.
///
/// The background scan reports only the counters; the explicit
/// "Scan Now" endpoint additionally returns the touched records with
/// their `_action` tags.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ScanOutcome {
    #[cfg_attr(feature = "serde", serde(default))]
    pub imported: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub updated: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub found: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skipped: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub error: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub applications: Vec<ApplicationRecord>,
}

impl ScanOutcome {
    /// True when the scan changed anything worth refreshing for.
    pub fn imported_anything(&self) -> bool {
        self.imported > 0 || self.updated > 0
    }
}

/// GET /scan/status response.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ScanStatusResponse {
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: ScanState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub result: Option<ScanOutcome>,
}
