//! Placeholder analytics for the Analytics tab.
//!
//! These figures are fixed display values. They are not derived from the
//! loaded records.

use crate::model::email::{Priority, Sentiment};

pub const SENTIMENT_DISTRIBUTION: [(Sentiment, u8); 3] = [
    (Sentiment::Positive, 25),
    (Sentiment::Neutral, 25),
    (Sentiment::Negative, 50),
];

pub const PRIORITY_BREAKDOWN: [(Priority, u8); 3] = [
    (Priority::Urgent, 50),
    (Priority::Normal, 25),
    (Priority::Low, 25),
];

/// (value, caption)
pub const RESPONSE_METRICS: [(&str, &str); 3] = [
    ("15 min", "Avg Response Time"),
    ("95%", "Customer Satisfaction"),
    ("78%", "AI Response Accuracy"),
];

/// Split a `width`-cell bar into (filled, empty) cells for `percent`
pub fn percent_bar(percent: u8, width: usize) -> (usize, usize) {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    (filled, width - filled)
}
