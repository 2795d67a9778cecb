use std::fmt;

/// Closed set of application statuses understood by the tracker.
///
/// Records arriving with any other status string are quarantined by
/// validation rather than rejected at decode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Viewed,
    InReview,
    PhoneScreen,
    InterviewScheduled,
    Interviewed,
    TechnicalRound,
    HrRound,
    Assessment,
    OfferReceived,
    Accepted,
    Rejected,
    Withdrawn,
    Ghosted,
}

impl ApplicationStatus {
    pub fn all() -> &'static [ApplicationStatus] {
        use ApplicationStatus::*;
        &[
            Applied,
            Viewed,
            InReview,
            PhoneScreen,
            InterviewScheduled,
            Interviewed,
            TechnicalRound,
            HrRound,
            Assessment,
            OfferReceived,
            Accepted,
            Rejected,
            Withdrawn,
            Ghosted,
        ]
    }

    /// The exact string the backend stores and expects in query params.
    pub fn api_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Viewed => "Viewed",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::PhoneScreen => "Phone Screen",
            ApplicationStatus::InterviewScheduled => "Interview Scheduled",
            ApplicationStatus::Interviewed => "Interviewed",
            ApplicationStatus::TechnicalRound => "Technical Round",
            ApplicationStatus::HrRound => "HR Round",
            ApplicationStatus::Assessment => "Assessment",
            ApplicationStatus::OfferReceived => "Offer Received",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
            ApplicationStatus::Ghosted => "Ghosted",
        }
    }

    /// Membership check used by validation.
    pub fn parse(value: &str) -> Option<ApplicationStatus> {
        Self::all().iter().copied().find(|s| s.api_name() == value)
    }

    pub fn is_known(value: &str) -> bool {
        Self::parse(value).is_some()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
