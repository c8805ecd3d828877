//! Recent activity feed built from session logs

use chrono::{DateTime, Utc};
use clawdash_telemetry::{parse_timestamp, SessionEvent, SessionRecord};

use crate::agents::AgentSessions;
use crate::config::{AgentIdentity, Config};
use crate::types::{ActivityEvent, ActivityKind};

/// Activity events of one agent, from its `activity_window` newest files.
///
/// Lines without a parseable timestamp produce no event.
pub fn agent_activity(sessions: &AgentSessions, config: &Config) -> Vec<ActivityEvent> {
    let agent = AgentIdentity::for_id(&sessions.id).name;

    sessions
        .recent
        .iter()
        .take(config.activity_window)
        .flatten()
        .filter_map(|event| describe(event, config.summary_chars))
        .map(|(timestamp, action, kind)| ActivityEvent {
            timestamp,
            agent: agent.clone(),
            agent_id: sessions.id.clone(),
            action,
            kind,
        })
        .collect()
}

fn describe(
    event: &SessionEvent,
    summary_chars: usize,
) -> Option<(String, String, ActivityKind)> {
    let (action, kind) = match &event.record {
        SessionRecord::ToolCall { name: Some(name) } => {
            (format!("Used tool: {name}"), ActivityKind::Tool)
        }
        SessionRecord::UserMessage { text: Some(text), .. } => (
            format!("Received: \"{}\"", summarize(text, summary_chars)),
            ActivityKind::Input,
        ),
        SessionRecord::AssistantMessage { text: Some(text), .. } => (
            format!("Responded: \"{}\"", summarize(text, summary_chars)),
            ActivityKind::Response,
        ),
        _ => return None,
    };
    let timestamp = event.timestamp.clone()?;
    Some((timestamp, action, kind))
}

/// Cut `text` to `max_chars` characters, marking the cut with `...`
pub fn summarize(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Merge per-agent events: newest first, at most `limit`.
///
/// Events whose timestamp does not parse are dropped. Ties keep input order.
pub fn merge_recent(events: Vec<ActivityEvent>, limit: usize) -> Vec<ActivityEvent> {
    let mut dated: Vec<(DateTime<Utc>, ActivityEvent)> = events
        .into_iter()
        .filter_map(|event| parse_timestamp(&event.timestamp).map(|at| (at, event)))
        .collect();

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().take(limit).map(|(_, event)| event).collect()
}
