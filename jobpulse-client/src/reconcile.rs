use jobpulse_model::{ApplicationId, ApplicationRecord};

/// A best-effort server correction queued by reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFix {
    pub id: ApplicationId,
    pub status: String,
}

/// Syncs a record's top-level status to its most recent history entry.
///
/// The record is rewritten in place so the same pass's validation already
/// sees the healed value; the returned fix is the server side of the
/// correction, dispatched separately by the effect runner. `None` means
/// the record was already consistent (or has no history).
pub fn reconcile(record: &mut ApplicationRecord) -> Option<StatusFix> {
    let latest = record.latest_history_status()?.to_string();
    if latest == record.status {
        return None;
    }
    log::debug!(
        "healing status of application {}: {:?} -> {:?}",
        record.id,
        record.status,
        latest
    );
    record.status = latest.clone();
    Some(StatusFix {
        id: record.id.clone(),
        status: latest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobpulse_model::{HistorySource, StatusHistoryEntry};

    fn record(
        status: &str,
        history: Vec<(&str, &str)>,
    ) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::from_string("a1".to_string()).expect("id"),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status: status.to_string(),
            platform: "LinkedIn".to_string(),
            applied_date: "2024-01-01".to_string(),
            salary: String::new(),
            location: String::new(),
            job_url: String::new(),
            notes: String::new(),
            interview_date: String::new(),
            response_date: String::new(),
            updated_date: String::new(),
            status_history: history
                .into_iter()
                .map(|(status, date)| StatusHistoryEntry {
                    status: status.to_string(),
                    date: date.to_string(),
                    source: HistorySource::Manual,
                })
                .collect(),
            action: None,
        }
    }

    #[test]
    fn consistent_record_is_untouched() {
        let mut consistent = record(
            "Interviewed",
            vec![
                ("Applied", "2024-01-01"),
                ("Interviewed", "2024-01-05"),
            ],
        );
        let before = consistent.clone();
        assert_eq!(reconcile(&mut consistent), None);
        assert_eq!(consistent, before);
    }

    #[test]
    fn mismatched_record_is_healed_and_fix_emitted() {
        let mut stale = record(
            "Applied",
            vec![
                ("Applied", "2024-01-01"),
                ("Interviewed", "2024-01-05"),
            ],
        );
        let fix = reconcile(&mut stale).expect("fix emitted");
        assert_eq!(stale.status, "Interviewed");
        assert_eq!(fix.status, "Interviewed");
        assert_eq!(fix.id.as_str(), "a1");
    }

    #[test]
    fn history_free_record_is_a_no_op() {
        let mut bare = record("Applied", vec![]);
        assert_eq!(reconcile(&mut bare), None);
        assert_eq!(bare.status, "Applied");
    }
}
