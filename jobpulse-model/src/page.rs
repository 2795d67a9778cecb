use crate::application::ApplicationRecord;

/// GET /applications response.
///
/// The backend returns a paginated envelope when a limit is supplied and a
/// bare array for legacy callers; both decode into this shape. On the bare
/// form `has_more` is `false` and `total` is the list length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "PageWire")
)]
pub struct ApplicationsPage {
    pub applications: Vec<ApplicationRecord>,
    pub total: u64,
    pub has_more: bool,
}

impl ApplicationsPage {
    pub fn empty() -> Self {
        ApplicationsPage {
            applications: Vec::new(),
            total: 0,
            has_more: false,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum PageWire {
    Envelope {
        applications: Vec<ApplicationRecord>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default)]
        has_more: bool,
    },
    Legacy(Vec<ApplicationRecord>),
}

#[cfg(feature = "serde")]
impl From<PageWire> for ApplicationsPage {
    fn from(wire: PageWire) -> Self {
        match wire {
            PageWire::Envelope {
                applications,
                total,
                has_more,
            } => {
                let total =
                    total.unwrap_or(applications.len() as u64);
                ApplicationsPage {
                    applications,
                    total,
                    has_more,
                }
            }
            PageWire::Legacy(applications) => ApplicationsPage {
                total: applications.len() as u64,
                has_more: false,
                applications,
            },
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    const RECORD: &str = r#"{
        "id": "66b2f0c4e1a3",
        "company": "Acme",
        "role": "Engineer",
        "status": "Applied",
        "platform": "LinkedIn",
        "applied_date": "2024-01-01"
    }"#;

    #[test]
    fn decodes_paginated_envelope() {
        let body = format!(
            r#"{{"applications": [{RECORD}], "total": 120, "offset": 0, "limit": 50, "has_more": true}}"#
        );
        let page: ApplicationsPage =
            serde_json::from_str(&body).expect("envelope decodes");
        assert_eq!(page.applications.len(), 1);
        assert_eq!(page.total, 120);
        assert!(page.has_more);
    }

    #[test]
    fn decodes_legacy_bare_array() {
        let body = format!("[{RECORD}, {RECORD}]");
        let page: ApplicationsPage =
            serde_json::from_str(&body).expect("bare array decodes");
        assert_eq!(page.applications.len(), 2);
        assert_eq!(page.total, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn envelope_total_defaults_to_list_length() {
        let body = format!(r#"{{"applications": [{RECORD}]}}"#);
        let page: ApplicationsPage =
            serde_json::from_str(&body).expect("sparse envelope decodes");
        assert_eq!(page.total, 1);
        assert!(!page.has_more);
    }

    #[test]
    fn record_without_id_fails_decode() {
        let body = r#"{"applications": [{"company": "Acme"}], "has_more": false}"#;
        assert!(serde_json::from_str::<ApplicationsPage>(body).is_err());
    }

    #[test]
    fn record_with_missing_scalars_still_decodes() {
        let body = r#"[{"id": "x1"}]"#;
        let page: ApplicationsPage =
            serde_json::from_str(body).expect("defaults fill in");
        assert_eq!(page.applications[0].company, "");
        assert!(page.applications[0].status_history.is_empty());
    }
}
