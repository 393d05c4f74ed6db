use serde::Serialize;

use crate::model::config::SettingsConfig;
use crate::model::email::EmailRecord;
use crate::ops::templater::ResponseTemplate;
use crate::ops::triage::QuickStats;
use crate::parse::IngestError;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct EmailDetailJson<'a> {
    #[serde(flatten)]
    pub email: &'a EmailRecord,
    pub template: ResponseTemplate,
}

#[derive(Serialize)]
pub struct DraftJson<'a> {
    pub id: &'a str,
    pub template: ResponseTemplate,
    pub draft: String,
}

#[derive(Serialize)]
pub struct RejectionJson {
    pub record: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    pub message: String,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub source: String,
    pub loaded: usize,
    pub rejected: Vec<RejectionJson>,
    pub valid: bool,
}

pub fn rejection_to_json(err: &IngestError) -> RejectionJson {
    RejectionJson {
        record: err.record().to_string(),
        field: err.field(),
        message: err.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per email: id, badges, status, sender and subject
pub fn format_email_line(record: &EmailRecord) -> String {
    format!(
        "{:<4} {:<11}{:<9}{:<9}{} - {}",
        record.id,
        format!("[{}]", record.sentiment.as_str()),
        format!("[{}]", record.priority.as_str()),
        record.status.as_str(),
        record.sender,
        record.subject,
    )
}

/// Full record for `desk show`
pub fn format_email_detail(record: &EmailRecord) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", record.id, record.subject),
        format!("from: {} <{}>", record.sender, record.sender_email),
        format!("received: {}", record.timestamp.format("%Y-%m-%d %H:%M UTC")),
        format!("sentiment: {}", record.sentiment.as_str()),
        format!("priority: {}", record.priority.as_str()),
        format!("status: {}", record.status.as_str()),
    ];
    if let Some(phone) = &record.phone {
        lines.push(format!("phone: {}", phone));
    }
    if !record.requirements.is_empty() {
        lines.push(format!("requirements: {}", record.requirements.join(", ")));
    }
    lines.push(String::new());
    lines.extend(record.body.lines().map(str::to_string));
    lines
}

pub fn format_stats(stats: &QuickStats) -> Vec<String> {
    vec![
        format!("total:   {}", stats.total),
        format!("pending: {}", stats.pending),
        format!("urgent:  {}", stats.urgent),
    ]
}

pub fn format_settings(settings: &SettingsConfig) -> Vec<String> {
    vec![
        format!("provider = {}", settings.provider.key()),
        format!("model = {}", settings.model.key()),
        format!("tone = {}", settings.tone.key()),
    ]
}
