//! Session log record types

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Token and cost usage reported on a message record
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Usage {
    pub total_tokens: u64,
    pub cost: f64,
}

impl Usage {
    fn from_value(usage: &Value) -> Option<Self> {
        if !usage.is_object() {
            return None;
        }
        let total_tokens = usage
            .get("totalTokens")
            .and_then(|t| t.as_u64().or_else(|| t.as_f64().map(|f| f.max(0.0) as u64)))
            .unwrap_or(0);
        let cost = usage
            .pointer("/cost/total")
            .and_then(|c| c.as_f64())
            .unwrap_or(0.0);
        Some(Self { total_tokens, cost })
    }
}

/// One decoded line of a session log, discriminated by its `type` tag
#[derive(Debug, Clone, PartialEq)]
pub enum SessionRecord {
    /// `toolCall`
    ToolCall { name: Option<String> },
    /// `message` with role `user`; text is the first content block's text
    UserMessage {
        text: Option<String>,
        usage: Option<Usage>,
    },
    /// `message` with role `assistant`; text is the first `text` block
    AssistantMessage {
        text: Option<String>,
        usage: Option<Usage>,
    },
    /// `message` with any other role
    Message { usage: Option<Usage> },
    /// Any other tag, or no tag at all
    Other,
}

impl SessionRecord {
    pub fn from_value(entry: &Value) -> Self {
        match entry.get("type").and_then(|t| t.as_str()) {
            Some("toolCall") => SessionRecord::ToolCall {
                name: non_empty_str(entry.get("name")),
            },
            Some("message") => {
                let message = entry.get("message");
                let usage = message
                    .and_then(|m| m.get("usage"))
                    .and_then(Usage::from_value);
                let content = message
                    .and_then(|m| m.get("content"))
                    .and_then(|c| c.as_array());

                match message.and_then(|m| m.get("role")).and_then(|r| r.as_str()) {
                    Some("user") => SessionRecord::UserMessage {
                        text: content
                            .and_then(|blocks| blocks.first())
                            .and_then(|block| non_empty_str(block.get("text"))),
                        usage,
                    },
                    Some("assistant") => SessionRecord::AssistantMessage {
                        text: content
                            .and_then(|blocks| {
                                blocks.iter().find(|block| {
                                    block.get("type").and_then(|t| t.as_str()) == Some("text")
                                })
                            })
                            .and_then(|block| non_empty_str(block.get("text"))),
                        usage,
                    },
                    _ => SessionRecord::Message { usage },
                }
            }
            _ => SessionRecord::Other,
        }
    }

    /// Usage payload, present only on `message` records
    pub fn usage(&self) -> Option<Usage> {
        match self {
            SessionRecord::UserMessage { usage, .. }
            | SessionRecord::AssistantMessage { usage, .. }
            | SessionRecord::Message { usage } => *usage,
            SessionRecord::ToolCall { .. } | SessionRecord::Other => None,
        }
    }
}

/// A session log line: optional timestamp plus its decoded record
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEvent {
    pub timestamp: Option<String>,
    pub record: SessionRecord,
}

impl SessionEvent {
    pub fn from_value(entry: &Value) -> Self {
        Self {
            timestamp: timestamp_of(entry),
            record: SessionRecord::from_value(entry),
        }
    }
}

/// Extract the `timestamp` field as a string.
///
/// Numeric timestamps are read as epoch milliseconds and rendered as RFC 3339;
/// empty strings and zero count as absent.
pub fn timestamp_of(entry: &Value) -> Option<String> {
    match entry.get("timestamp")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            if millis == 0 {
                return None;
            }
            DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.to_rfc3339())
        }
        _ => None,
    }
}

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%dT%H:%M%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse a log timestamp.
///
/// Accepts RFC 3339, compact `+hhmm` offsets, minute precision and bare
/// dates. Timestamps without an offset (date-only included) are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = raw.strip_suffix('Z').unwrap_or(raw);
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(naive, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
