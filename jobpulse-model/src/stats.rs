use std::collections::HashMap;

/// GET /stats response: dashboard counters computed server-side.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct StatsSummary {
    pub total: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub by_status: HashMap<String, u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub by_platform: HashMap<String, u64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub response_rate: f64,
}
