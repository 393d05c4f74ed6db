use serde::Serialize;

use crate::model::email::EmailRecord;
use crate::model::filter::FilterCriteria;

/// The read-only record collection for a session. Seeded once at load time;
/// nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct TriageStore {
    records: Vec<EmailRecord>,
}

/// Sidebar counters computed from the loaded collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub total: usize,
    pub pending: usize,
    pub urgent: usize,
}

impl TriageStore {
    pub fn new(records: Vec<EmailRecord>) -> Self {
        TriageStore { records }
    }

    pub fn records(&self) -> &[EmailRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&EmailRecord> {
        self.records.first()
    }

    pub fn get(&self, id: &str) -> Option<&EmailRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records matching `criteria`, in collection order
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&EmailRecord> {
        filter_emails(&self.records, criteria)
    }

    pub fn quick_stats(&self) -> QuickStats {
        QuickStats {
            total: self.records.len(),
            pending: self.records.iter().filter(|r| r.is_pending()).count(),
            urgent: self.records.iter().filter(|r| r.is_urgent()).count(),
        }
    }
}

/// Select the records that satisfy every criterion. Order is preserved and
/// an empty result is a normal outcome.
pub fn filter_emails<'a>(records: &'a [EmailRecord], criteria: &FilterCriteria) -> Vec<&'a EmailRecord> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|r| matches(r, &needle, criteria))
        .collect()
}

/// `needle` must already be lowercased
fn matches(record: &EmailRecord, needle: &str, criteria: &FilterCriteria) -> bool {
    let search_ok = needle.is_empty()
        || record.subject.to_lowercase().contains(needle)
        || record.sender.to_lowercase().contains(needle);
    let sentiment_ok = criteria.sentiment.is_none_or(|s| s == record.sentiment);
    let priority_ok = criteria.priority.is_none_or(|p| p == record.priority);
    search_ok && sentiment_ok && priority_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::source::sample_records;
    use crate::model::email::{Priority, Sentiment};
    use pretty_assertions::assert_eq;

    fn store() -> TriageStore {
        TriageStore::new(sample_records())
    }

    fn ids(records: &[&EmailRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn empty_criteria_returns_everything_in_order() {
        let s = store();
        let all = s.filter(&FilterCriteria::default());
        assert_eq!(ids(&all), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn sentiment_filter_includes_and_excludes() {
        let s = store();
        for r in s.records() {
            let got = s.filter(&FilterCriteria::default().with_sentiment(Some(r.sentiment)));
            assert!(got.iter().any(|g| g.id == r.id));
            assert!(got.iter().all(|g| g.sentiment == r.sentiment));
        }
        let negative = s.filter(&FilterCriteria::default().with_sentiment(Some(Sentiment::Negative)));
        assert_eq!(ids(&negative), vec!["1", "4"]);
    }

    #[test]
    fn priority_filter() {
        let s = store();
        let urgent = s.filter(&FilterCriteria::default().with_priority(Some(Priority::Urgent)));
        assert_eq!(ids(&urgent), vec!["1", "4"]);
        let low = s.filter(&FilterCriteria::default().with_priority(Some(Priority::Low)));
        assert_eq!(ids(&low), vec!["3"]);
    }

    #[test]
    fn search_is_case_insensitive_on_subject() {
        let s = store();
        let got = s.filter(&FilterCriteria::new("URGENT"));
        assert_eq!(ids(&got), vec!["1"]);
        let got = s.filter(&FilterCriteria::new("billing"));
        assert_eq!(ids(&got), vec!["2"]);
    }

    #[test]
    fn search_matches_sender_name() {
        let s = store();
        let got = s.filter(&FilterCriteria::new("emma"));
        assert_eq!(ids(&got), vec!["3"]);
    }

    #[test]
    fn search_ignores_body_and_address() {
        let s = store();
        // "presentation" only appears in a body, "techcorp" only in an address
        assert!(s.filter(&FilterCriteria::new("presentation")).is_empty());
        assert!(s.filter(&FilterCriteria::new("techcorp")).is_empty());
    }

    #[test]
    fn criteria_combine() {
        let s = store();
        let got = s.filter(
            &FilterCriteria::new("server")
                .with_sentiment(Some(Sentiment::Negative))
                .with_priority(Some(Priority::Urgent)),
        );
        assert_eq!(ids(&got), vec!["4"]);
        let none = s.filter(
            &FilterCriteria::new("server").with_priority(Some(Priority::Low)),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn empty_store_filters_to_empty() {
        let s = TriageStore::default();
        assert!(s.filter(&FilterCriteria::new("x")).is_empty());
        assert_eq!(s.quick_stats(), QuickStats::default());
    }

    #[test]
    fn quick_stats_counts_sample() {
        assert_eq!(
            store().quick_stats(),
            QuickStats {
                total: 4,
                pending: 3,
                urgent: 2,
            }
        );
    }

    #[test]
    fn get_by_id() {
        let s = store();
        assert_eq!(s.get("3").map(|r| r.sender.as_str()), Some("Emma Davis"));
        assert!(s.get("99").is_none());
    }
}
