//! Agent enumeration and per-agent session aggregation

use chrono::{DateTime, Duration, Utc};
use clawdash_telemetry::{
    discover_session_files, parse_timestamp, read_jsonl, Paths, SessionEvent, Usage,
};
use serde_json::Value;
use std::path::Path;

use crate::config::{AgentIdentity, Config};
use crate::error::{Result, SnapshotError};
use crate::types::{AgentRecord, AgentStatus};

/// Session data loaded for one agent
#[derive(Debug, Clone, Default)]
pub struct AgentSessions {
    pub id: String,
    /// Number of session files on disk
    pub session_count: usize,
    /// Decoded lines of the most recently modified files, newest file first
    pub recent: Vec<Vec<SessionEvent>>,
}

/// List agent ids: non-hidden subdirectories of the agents root, sorted.
///
/// This is the one read that must succeed.
pub fn enumerate_agents(agents_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(agents_dir).map_err(|source| SnapshotError::AgentsRoot {
        path: agents_dir.to_path_buf(),
        source,
    })?;

    let mut ids: Vec<String> = entries
        .flatten()
        .filter(|entry| std::fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()))
        .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
        .filter(|name| !name.starts_with('.'))
        .collect();
    ids.sort();

    Ok(ids)
}

/// Load the session files of one agent.
///
/// A missing or unreadable `sessions` directory yields an agent with no
/// sessions; unreadable files contribute no lines.
pub fn load_agent_sessions(paths: &Paths, id: &str, config: &Config) -> AgentSessions {
    let sessions_dir = paths.sessions_dir(id);
    if !sessions_dir.exists() {
        tracing::debug!(agent = id, "no sessions directory");
        return AgentSessions {
            id: id.to_string(),
            ..Default::default()
        };
    }

    let files = match discover_session_files(&sessions_dir) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!(path = %sessions_dir.display(), error = %e, "could not list sessions");
            Vec::new()
        }
    };

    let recent = files
        .iter()
        .take(config.session_window())
        .map(|file| load_session_events(&file.path))
        .collect();

    tracing::debug!(agent = id, sessions = files.len(), "loaded agent sessions");

    AgentSessions {
        id: id.to_string(),
        session_count: files.len(),
        recent,
    }
}

fn load_session_events(path: &Path) -> Vec<SessionEvent> {
    match read_jsonl::<Value>(path) {
        Ok(lines) => lines.iter().map(SessionEvent::from_value).collect(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read session");
            Vec::new()
        }
    }
}

/// Build the dashboard record of one agent
pub fn aggregate_agent(
    sessions: &AgentSessions,
    config: &Config,
    now: DateTime<Utc>,
) -> AgentRecord {
    let identity = AgentIdentity::for_id(&sessions.id);
    let last_activity = last_activity(sessions);
    let usage = sum_usage(sessions, config.token_window);

    AgentRecord {
        id: sessions.id.clone(),
        name: identity.name,
        emoji: identity.emoji,
        role: identity.role,
        status: derive_status(last_activity.as_deref(), now, config.active_window),
        last_activity,
        session_count: sessions.session_count,
        total_tokens: usage.total_tokens,
        total_cost: round_cents(usage.cost),
    }
}

/// Timestamp of the last timestamped line in the most recent session file
pub fn last_activity(sessions: &AgentSessions) -> Option<String> {
    sessions
        .recent
        .first()?
        .iter()
        .rev()
        .find_map(|event| event.timestamp.clone())
}

/// Sum message usage over the `window` most recent session files
pub fn sum_usage(sessions: &AgentSessions, window: usize) -> Usage {
    sessions
        .recent
        .iter()
        .take(window)
        .flatten()
        .filter_map(|event| event.record.usage())
        .fold(Usage::default(), |acc, usage| Usage {
            total_tokens: acc.total_tokens.saturating_add(usage.total_tokens),
            cost: acc.cost + usage.cost,
        })
}

/// `Active` iff `now - last_activity` is under `window`
pub fn derive_status(
    last_activity: Option<&str>,
    now: DateTime<Utc>,
    window: Duration,
) -> AgentStatus {
    match last_activity.and_then(parse_timestamp) {
        Some(at) if now - at < window => AgentStatus::Active,
        _ => AgentStatus::Idle,
    }
}

/// Round to two decimal places
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
