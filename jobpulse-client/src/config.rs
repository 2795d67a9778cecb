use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Client-side tunables. Defaults mirror the hosted JobPulse frontend:
/// 50-record pages, a 3 s head start before the first scan probe, 2 s
/// probe cadence capped at 60 attempts, and a 10 s highlight window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u64,
    pub request_timeout_secs: u64,
    pub scan_poll_initial_delay_secs: u64,
    pub scan_poll_interval_secs: u64,
    pub scan_poll_max_attempts: u32,
    pub highlight_ttl_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            page_size: 50,
            request_timeout_secs: 30,
            scan_poll_initial_delay_secs: 3,
            scan_poll_interval_secs: 2,
            scan_poll_max_attempts: 60,
            highlight_ttl_secs: 10,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn scan_poll_initial_delay(&self) -> Duration {
        Duration::from_secs(self.scan_poll_initial_delay_secs)
    }

    pub fn scan_poll_interval(&self) -> Duration {
        Duration::from_secs(self.scan_poll_interval_secs)
    }

    pub fn highlight_ttl(&self) -> Duration {
        Duration::from_secs(self.highlight_ttl_secs)
    }
}
