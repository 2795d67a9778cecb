/// One linked Gmail account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GmailAccount {
    pub id: String,
    pub email: String,
}

/// GET /gmail/status response; gates the background scan poller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GmailStatus {
    pub is_authenticated: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accounts: Vec<GmailAccount>,
}
