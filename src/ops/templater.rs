use serde::Serialize;

use crate::model::email::{EmailRecord, Priority, Sentiment};

/// The three canned replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseTemplate {
    /// Escalation to the priority queue with a 30-minute window
    Urgent,
    /// Thanks for positive feedback, no action requested
    Appreciation,
    /// Standard 2-4 hour response window
    Default,
}

const URGENT_BODY: &str = "\
Thank you for contacting our support team. I understand the urgency of your situation and I'm here to help resolve this immediately.

I've escalated your case to our priority queue and our technical team is already investigating the issue. You should expect a resolution within the next 30 minutes.

In the meantime, I've sent you a direct phone number where you can reach our priority support line.";

const APPRECIATION_BODY: &str = "\
Thank you so much for taking the time to share your positive feedback! We're thrilled to hear about your excellent experience with our support team.

Your kind words mean a lot to us and I'll make sure to share this with the technician who assisted you. We're committed to maintaining this level of service excellence.

Thank you for being a valued customer!";

const DEFAULT_BODY: &str = "\
Thank you for reaching out to us. I'm happy to help you with your inquiry.

Based on your message, I understand you need information about your billing cycle. I'll provide you with the details and ensure all your questions are answered.

Please expect a detailed response within 2-4 hours. If you need immediate assistance, please don't hesitate to contact our support line.";

const SIGN_OFF: &str = "Best regards,\nAI Support Assistant";

impl ResponseTemplate {
    pub fn body(self) -> &'static str {
        match self {
            ResponseTemplate::Urgent => URGENT_BODY,
            ResponseTemplate::Appreciation => APPRECIATION_BODY,
            ResponseTemplate::Default => DEFAULT_BODY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResponseTemplate::Urgent => "urgent",
            ResponseTemplate::Appreciation => "appreciation",
            ResponseTemplate::Default => "default",
        }
    }

    /// Full reply text addressed to `sender`
    pub fn render(self, sender: &str) -> String {
        format!("Dear {},\n\n{}\n\n{}", sender, self.body(), SIGN_OFF)
    }
}

/// Pick the template for a record. Urgency wins over sentiment; status, body
/// and requirement tags are never consulted.
pub fn select_template(record: &EmailRecord) -> ResponseTemplate {
    match (record.priority, record.sentiment) {
        (Priority::Urgent, _) => ResponseTemplate::Urgent,
        (Priority::Normal | Priority::Low, Sentiment::Positive) => ResponseTemplate::Appreciation,
        (Priority::Normal | Priority::Low, Sentiment::Neutral | Sentiment::Negative) => {
            ResponseTemplate::Default
        }
    }
}

/// The draft reply for a record
pub fn generate_response(record: &EmailRecord) -> String {
    select_template(record).render(&record.sender)
}
