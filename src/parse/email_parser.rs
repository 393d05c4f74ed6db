use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::model::email::{EmailRecord, Priority, Sentiment, Status};

/// A record rejected at ingestion. `record` is the record's id when it has
/// one, otherwise its 1-based position in the source (`#3`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("{record}: not a valid record: {message}")]
    Malformed { record: String, message: String },
    #[error("{record}: missing required field `{field}`")]
    MissingField { record: String, field: &'static str },
    #[error("{record}: field `{field}` must be {expected}")]
    WrongType {
        record: String,
        field: &'static str,
        expected: &'static str,
    },
    #[error("{record}: invalid {field} {value:?}")]
    InvalidValue {
        record: String,
        field: &'static str,
        value: String,
    },
    #[error("{record}: timestamp {value:?} is not an ISO-8601 instant")]
    InvalidTimestamp { record: String, value: String },
    #[error("{record}: duplicate id")]
    DuplicateId { record: String },
}

impl IngestError {
    /// The offending record label
    pub fn record(&self) -> &str {
        match self {
            IngestError::Malformed { record, .. }
            | IngestError::MissingField { record, .. }
            | IngestError::WrongType { record, .. }
            | IngestError::InvalidValue { record, .. }
            | IngestError::InvalidTimestamp { record, .. }
            | IngestError::DuplicateId { record } => record,
        }
    }

    /// The offending field, when the error is about one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            IngestError::MissingField { field, .. }
            | IngestError::WrongType { field, .. }
            | IngestError::InvalidValue { field, .. } => Some(*field),
            IngestError::InvalidTimestamp { .. } => Some("timestamp"),
            IngestError::DuplicateId { .. } => Some("id"),
            IngestError::Malformed { .. } => None,
        }
    }
}

/// Result of ingesting a batch: the accepted records in source order, and
/// one error per rejected record.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<EmailRecord>,
    pub rejected: Vec<IngestError>,
}

/// Parse a JSON array of records. Fails only when the text is not a JSON
/// array at all; bad entries are reported in `Ingested::rejected`.
pub fn parse_emails(text: &str) -> Result<Ingested, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(text)?;
    Ok(ingest(values))
}

/// Validate a batch of raw JSON records. A rejected record never prevents
/// the rest of the batch from loading. For duplicate ids the first
/// occurrence wins.
pub fn ingest(values: Vec<Value>) -> Ingested {
    let mut out = Ingested::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, value) in values.iter().enumerate() {
        let position = format!("#{}", i + 1);
        match validate(value, &position) {
            Ok(record) => {
                if !seen.insert(record.id.clone()) {
                    reject(&mut out, IngestError::DuplicateId { record: record.id });
                    continue;
                }
                out.records.push(record);
            }
            Err(e) => reject(&mut out, e),
        }
    }

    out
}

fn reject(out: &mut Ingested, err: IngestError) {
    tracing::warn!(record = err.record(), "rejected email record: {}", err);
    out.rejected.push(err);
}

/// Typed access to the keys of one record. Errors carry `record` as the label.
struct Fields<'a> {
    map: &'a Map<String, Value>,
    record: String,
}

impl<'a> Fields<'a> {
    fn wrong_type(&self, field: &'static str, expected: &'static str) -> IngestError {
        IngestError::WrongType {
            record: self.record.clone(),
            field,
            expected,
        }
    }

    /// An absent or null key is `None`
    fn optional_text(&self, field: &'static str) -> Result<Option<&'a str>, IngestError> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.wrong_type(field, "a string")),
        }
    }

    fn text(&self, field: &'static str) -> Result<&'a str, IngestError> {
        self.optional_text(field)?
            .ok_or_else(|| IngestError::MissingField {
                record: self.record.clone(),
                field,
            })
    }

    fn optional_list(&self, field: &'static str) -> Result<Option<Vec<String>>, IngestError> {
        let items = match self.map.get(field) {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(self.wrong_type(field, "an array of strings")),
        };
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(self.wrong_type(field, "an array of strings")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Parse a key with `parse`, reporting the raw text on failure
    fn parsed<T>(
        &self,
        field: &'static str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, IngestError> {
        let text = self.text(field)?;
        parse(text).ok_or_else(|| IngestError::InvalidValue {
            record: self.record.clone(),
            field,
            value: text.to_string(),
        })
    }
}

/// Requirement tags may arrive as `requirements` or as `extractedRequirements`.
/// When a record carries both, `requirements` is used.
fn validate(value: &Value, position: &str) -> Result<EmailRecord, IngestError> {
    let Value::Object(map) = value else {
        return Err(IngestError::Malformed {
            record: position.to_string(),
            message: format!("expected a JSON object, found {}", json_kind(value)),
        });
    };

    let mut fields = Fields {
        map,
        record: position.to_string(),
    };
    let id = fields.text("id")?.trim().to_string();
    if id.is_empty() {
        return Err(IngestError::MissingField {
            record: position.to_string(),
            field: "id",
        });
    }
    fields.record = id.clone();

    let sender = fields.text("sender")?.to_string();
    let sender_email = fields.text("senderEmail")?.to_string();
    let subject = fields.text("subject")?.to_string();
    let body = fields.text("body")?.to_string();

    let timestamp_text = fields.text("timestamp")?;
    let timestamp = parse_timestamp(timestamp_text).ok_or_else(|| {
        IngestError::InvalidTimestamp {
            record: id.clone(),
            value: timestamp_text.to_string(),
        }
    })?;

    let sentiment = fields.parsed("sentiment", Sentiment::parse)?;
    let priority = fields.parsed("priority", Priority::parse)?;
    let status = fields.parsed("status", Status::parse)?;

    let phone = fields
        .optional_text("phone")?
        .filter(|p| !p.trim().is_empty())
        .map(str::to_string);
    let requirements = match fields.optional_list("requirements")? {
        Some(list) => list,
        None => fields
            .optional_list("extractedRequirements")?
            .unwrap_or_default(),
    };

    Ok(EmailRecord {
        id,
        sender,
        sender_email,
        subject,
        body,
        timestamp,
        sentiment,
        priority,
        status,
        phone,
        requirements,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(id: &str) -> Value {
        json!({
            "id": id,
            "sender": "Mike Chen",
            "senderEmail": "mike.chen@techcorp.com",
            "subject": "Question about billing cycle",
            "body": "When does my billing cycle start?",
            "timestamp": "2024-01-15T08:45:00Z",
            "sentiment": "neutral",
            "priority": "normal",
            "status": "pending"
        })
    }

    #[test]
    fn accepts_well_formed_record() {
        let out = ingest(vec![record("2")]);
        assert!(out.rejected.is_empty());
        assert_eq!(out.records.len(), 1);
        let r = &out.records[0];
        assert_eq!(r.id, "2");
        assert_eq!(r.sentiment, Sentiment::Neutral);
        assert_eq!(r.priority, Priority::Normal);
        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.phone, None);
        assert!(r.requirements.is_empty());
        assert_eq!(r.timestamp.to_rfc3339(), "2024-01-15T08:45:00+00:00");
    }

    #[test]
    fn optional_fields_are_carried() {
        let mut v = record("1");
        v["phone"] = json!("+1-555-0123");
        v["extractedRequirements"] = json!(["Account access issue", "Business critical"]);
        let out = ingest(vec![v]);
        let r = &out.records[0];
        assert_eq!(r.phone.as_deref(), Some("+1-555-0123"));
        assert_eq!(r.requirements, vec!["Account access issue", "Business critical"]);
    }

    #[test]
    fn unknown_enum_value_names_the_field() {
        let mut v = record("7");
        v["sentiment"] = json!("furious");
        let out = ingest(vec![v]);
        assert!(out.records.is_empty());
        assert_eq!(
            out.rejected,
            vec![IngestError::InvalidValue {
                record: "7".into(),
                field: "sentiment",
                value: "furious".into(),
            }]
        );
        assert_eq!(out.rejected[0].field(), Some("sentiment"));
    }

    #[test]
    fn wrong_json_type_names_the_field() {
        let mut v = record("8");
        v["sentiment"] = json!(5);
        let mut w = record("9");
        w["priority"] = json!(true);
        let mut x = record("10");
        x["requirements"] = json!("x");
        let out = ingest(vec![v, w, x]);
        assert!(out.records.is_empty());
        assert_eq!(
            out.rejected[0],
            IngestError::WrongType {
                record: "8".into(),
                field: "sentiment",
                expected: "a string",
            }
        );
        assert_eq!(out.rejected[0].field(), Some("sentiment"));
        assert_eq!(out.rejected[1].field(), Some("priority"));
        assert_eq!(out.rejected[2].field(), Some("requirements"));
        assert_eq!(
            out.rejected[2].to_string(),
            "10: field `requirements` must be an array of strings"
        );
    }

    #[test]
    fn non_string_id_uses_position() {
        let mut v = record("x");
        v["id"] = json!(42);
        let out = ingest(vec![v]);
        assert_eq!(out.rejected[0].record(), "#1");
        assert_eq!(out.rejected[0].field(), Some("id"));
    }

    #[test]
    fn requirements_key_wins_over_extracted() {
        let mut v = record("5");
        v["requirements"] = json!(["Refund"]);
        v["extractedRequirements"] = json!(["Ignored"]);
        let out = ingest(vec![v]);
        assert!(out.rejected.is_empty());
        assert_eq!(out.records[0].requirements, vec!["Refund"]);
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let mut v = record("6");
        v["phone"] = Value::Null;
        v["requirements"] = Value::Null;
        let out = ingest(vec![v]);
        assert_eq!(out.records[0].phone, None);
        assert!(out.records[0].requirements.is_empty());
    }

    #[test]
    fn missing_field_is_reported() {
        let mut v = record("3");
        v.as_object_mut().unwrap().remove("priority");
        let out = ingest(vec![v]);
        assert_eq!(
            out.rejected,
            vec![IngestError::MissingField {
                record: "3".into(),
                field: "priority",
            }]
        );
    }

    #[test]
    fn missing_id_uses_position() {
        let mut v = record("x");
        v.as_object_mut().unwrap().remove("id");
        let out = ingest(vec![record("1"), v]);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.rejected[0].record(), "#2");
        assert_eq!(out.rejected[0].field(), Some("id"));
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let mut v = record("4");
        v["timestamp"] = json!("yesterday");
        let out = ingest(vec![v]);
        assert!(matches!(
            &out.rejected[0],
            IngestError::InvalidTimestamp { value, .. } if value == "yesterday"
        ));
    }

    #[test]
    fn duplicate_id_keeps_first() {
        let mut dup = record("1");
        dup["subject"] = json!("Second copy");
        let out = ingest(vec![record("1"), record("2"), dup]);
        let ids: Vec<&str> = out.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(out.records[0].subject, "Question about billing cycle");
        assert_eq!(
            out.rejected,
            vec![IngestError::DuplicateId { record: "1".into() }]
        );
    }

    #[test]
    fn one_bad_record_does_not_block_the_rest() {
        let mut bad = record("2");
        bad["priority"] = json!("whenever");
        let out = ingest(vec![record("1"), bad, json!("not an object"), record("3")]);
        let ids: Vec<&str> = out.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(out.rejected.len(), 2);
        assert!(matches!(out.rejected[1], IngestError::Malformed { .. }));
        assert_eq!(out.rejected[1].record(), "#3");
        assert_eq!(out.rejected[1].field(), None);
    }

    #[test]
    fn parse_emails_requires_array() {
        assert!(parse_emails("{\"id\": \"1\"}").is_err());
        let out = parse_emails("[]").unwrap();
        assert!(out.records.is_empty());
        assert!(out.rejected.is_empty());
    }

    #[test]
    fn serialized_records_ingest_back() {
        let out = ingest(vec![record("9")]);
        let text = serde_json::to_string(&out.records).unwrap();
        let again = parse_emails(&text).unwrap();
        assert_eq!(again.records, out.records);
    }
}
