use std::collections::HashSet;

use jobpulse_model::{ApplicationId, ApplicationRecord, RecordAction};

/// Transient `new`/`updated` badges for the latest import batch.
///
/// Membership is purely presentational. Every `mark` replaces the whole
/// batch and bumps an epoch; the delayed clear scheduled after a mark
/// only fires while its epoch is still current, so a stale timer never
/// wipes a newer batch.
#[derive(Debug, Default)]
pub struct HighlightTracker {
    new_ids: HashSet<ApplicationId>,
    updated_ids: HashSet<ApplicationId>,
    epoch: u64,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the highlighted batch with the given records' action
    /// tags. Returns the epoch to pass to [`Self::clear_if_epoch`] when
    /// the display window ends.
    pub fn mark(&mut self, records: &[ApplicationRecord]) -> u64 {
        self.new_ids.clear();
        self.updated_ids.clear();
        self.epoch += 1;
        for record in records {
            match record.action {
                Some(RecordAction::New) => {
                    self.new_ids.insert(record.id.clone());
                }
                Some(RecordAction::Updated) => {
                    self.updated_ids.insert(record.id.clone());
                }
                None => {}
            }
        }
        self.epoch
    }

    /// Empties both sets immediately and cancels any pending delayed
    /// clear by moving the epoch forward.
    pub fn clear(&mut self) {
        self.epoch += 1;
        self.new_ids.clear();
        self.updated_ids.clear();
    }

    /// Delayed-expiry path: clears only when no newer `mark` or `clear`
    /// happened since the epoch was taken. Returns whether it fired.
    pub fn clear_if_epoch(&mut self, epoch: u64) -> bool {
        if self.epoch != epoch {
            return false;
        }
        self.new_ids.clear();
        self.updated_ids.clear();
        true
    }

    pub fn is_new(&self, id: &ApplicationId) -> bool {
        self.new_ids.contains(id)
    }

    pub fn is_updated(&self, id: &ApplicationId) -> bool {
        self.updated_ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.new_ids.is_empty() && self.updated_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(id: &str, action: Option<RecordAction>) -> ApplicationRecord {
        ApplicationRecord {
            id: ApplicationId::from_string(id.to_string()).expect("id"),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status: "Applied".to_string(),
            platform: "LinkedIn".to_string(),
            applied_date: "2024-01-01".to_string(),
            salary: String::new(),
            location: String::new(),
            job_url: String::new(),
            notes: String::new(),
            interview_date: String::new(),
            response_date: String::new(),
            updated_date: String::new(),
            status_history: Vec::new(),
            action,
        }
    }

    fn id(raw: &str) -> ApplicationId {
        ApplicationId::from_string(raw.to_string()).expect("id")
    }

    #[test]
    fn marks_are_mutually_exclusive_per_record() {
        let mut tracker = HighlightTracker::new();
        tracker.mark(&[
            tagged("n1", Some(RecordAction::New)),
            tagged("u1", Some(RecordAction::Updated)),
            tagged("plain", None),
        ]);

        assert!(tracker.is_new(&id("n1")));
        assert!(!tracker.is_updated(&id("n1")));
        assert!(tracker.is_updated(&id("u1")));
        assert!(!tracker.is_new(&id("u1")));
        assert!(!tracker.is_new(&id("plain")));
        assert!(!tracker.is_updated(&id("plain")));
    }

    #[test]
    fn a_new_mark_replaces_the_previous_batch() {
        let mut tracker = HighlightTracker::new();
        tracker.mark(&[tagged("n1", Some(RecordAction::New))]);
        tracker.mark(&[tagged("n2", Some(RecordAction::New))]);
        assert!(!tracker.is_new(&id("n1")));
        assert!(tracker.is_new(&id("n2")));
    }

    #[test]
    fn clear_empties_both_sets() {
        let mut tracker = HighlightTracker::new();
        tracker.mark(&[
            tagged("n1", Some(RecordAction::New)),
            tagged("u1", Some(RecordAction::Updated)),
        ]);
        tracker.clear();
        assert!(tracker.is_empty());
        assert!(!tracker.is_new(&id("n1")));
        assert!(!tracker.is_updated(&id("u1")));
    }

    #[test]
    fn stale_epoch_does_not_wipe_a_newer_batch() {
        let mut tracker = HighlightTracker::new();
        let first = tracker.mark(&[tagged("n1", Some(RecordAction::New))]);
        let second =
            tracker.mark(&[tagged("n2", Some(RecordAction::New))]);

        assert!(!tracker.clear_if_epoch(first));
        assert!(tracker.is_new(&id("n2")));

        assert!(tracker.clear_if_epoch(second));
        assert!(tracker.is_empty());
    }
}
