use super::email::{Priority, Sentiment};

/// Active list filters. `None` on either enum filter means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text search, matched case-insensitively against subject and sender
    pub search: String,
    pub sentiment: Option<Sentiment>,
    pub priority: Option<Priority>,
}

impl FilterCriteria {
    pub fn new(search: impl Into<String>) -> Self {
        FilterCriteria {
            search: search.into(),
            ..Default::default()
        }
    }

    pub fn with_sentiment(mut self, sentiment: Option<Sentiment>) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    /// True if any criterion narrows the collection
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.sentiment.is_some() || self.priority.is_some()
    }

    /// Advance the sentiment filter: all → positive → neutral → negative → all
    pub fn cycle_sentiment(&mut self) {
        self.sentiment = match self.sentiment {
            None => Some(Sentiment::Positive),
            Some(Sentiment::Positive) => Some(Sentiment::Neutral),
            Some(Sentiment::Neutral) => Some(Sentiment::Negative),
            Some(Sentiment::Negative) => None,
        };
    }

    /// Advance the priority filter: all → urgent → normal → low → all
    pub fn cycle_priority(&mut self) {
        self.priority = match self.priority {
            None => Some(Priority::Urgent),
            Some(Priority::Urgent) => Some(Priority::Normal),
            Some(Priority::Normal) => Some(Priority::Low),
            Some(Priority::Low) => None,
        };
    }

    /// Short label used in list headers, e.g. `sentiment: all`
    pub fn sentiment_label(&self) -> &'static str {
        self.sentiment.map_or("all", Sentiment::as_str)
    }

    pub fn priority_label(&self) -> &'static str {
        self.priority.map_or("all", Priority::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        assert!(!FilterCriteria::default().is_active());
        assert!(FilterCriteria::new("x").is_active());
        assert!(
            FilterCriteria::default()
                .with_priority(Some(Priority::Low))
                .is_active()
        );
    }

    #[test]
    fn cycle_sentiment_wraps_to_none() {
        let mut f = FilterCriteria::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            f.cycle_sentiment();
            seen.push(f.sentiment);
        }
        assert_eq!(
            seen,
            vec![
                Some(Sentiment::Positive),
                Some(Sentiment::Neutral),
                Some(Sentiment::Negative),
                None
            ]
        );
    }

    #[test]
    fn cycle_priority_wraps_to_none() {
        let mut f = FilterCriteria::default();
        f.cycle_priority();
        assert_eq!(f.priority, Some(Priority::Urgent));
        f.cycle_priority();
        f.cycle_priority();
        assert_eq!(f.priority_label(), "low");
        f.cycle_priority();
        assert_eq!(f.priority_label(), "all");
    }
}
