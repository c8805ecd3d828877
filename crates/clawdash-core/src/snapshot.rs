//! One-shot snapshot assembly

use chrono::{DateTime, SecondsFormat, Utc};
use clawdash_telemetry::{atomic_write, read_json_file, Paths};
use serde_json::{Map, Value};
use std::path::Path;

use crate::activity::{agent_activity, merge_recent};
use crate::agents::{aggregate_agent, enumerate_agents, load_agent_sessions, AgentSessions};
use crate::config::Config;
use crate::content::{flatten_notion, group_drive_content};
use crate::error::{Result, SnapshotError};
use crate::pipeline::read_pipeline;
use crate::stats::build_stats;
use crate::types::Snapshot;

/// Read every input under `paths` and assemble the snapshot as of `now`.
///
/// Only an unreadable agents root fails the build; every other input
/// degrades to an empty or null field.
pub fn build_snapshot(
    paths: &Paths,
    config: &Config,
    now: DateTime<Utc>,
    uptime_seconds: f64,
) -> Result<Snapshot> {
    let ids = enumerate_agents(&paths.agents_dir)?;
    let sessions: Vec<AgentSessions> = ids
        .iter()
        .map(|id| load_agent_sessions(paths, id, config))
        .collect();

    let agents: Vec<_> = sessions
        .iter()
        .map(|s| aggregate_agent(s, config, now))
        .collect();

    let recent_activity = merge_recent(
        sessions
            .iter()
            .flat_map(|s| agent_activity(s, config))
            .collect(),
        config.activity_limit,
    );

    let pipeline = read_pipeline(&paths.pipeline_file());

    let drive_index: Map<String, Value> =
        read_json_file(&paths.drive_index_file()).unwrap_or_default();
    let drive_content = group_drive_content(&drive_index, config);

    let notion_content = read_json_file::<Value>(&paths.notion_index_file())
        .map(|tree| flatten_notion(&tree, config))
        .unwrap_or_default();

    let generated_at = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let system_stats = build_stats(&agents, &drive_index, config, uptime_seconds, &generated_at);

    tracing::info!(
        agents = agents.len(),
        activities = recent_activity.len(),
        "snapshot built"
    );

    Ok(Snapshot {
        agents,
        pipeline,
        drive_content,
        notion_content,
        recent_activity,
        system_stats,
        generated_at,
    })
}

/// Serialize the snapshot (two-space pretty JSON) and replace `path` with it
pub fn write_snapshot(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    atomic_write(path, json.as_bytes()).map_err(|source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentStatus;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Paths) {
        let temp = TempDir::new().unwrap();
        let agents = temp.path().join("agents");
        let data = temp.path().join("data");
        std::fs::create_dir_all(&agents).unwrap();
        std::fs::create_dir_all(&data).unwrap();
        let paths = Paths::from_dirs(&agents, &data, &temp.path().join("out/snapshot.json"));
        (temp, paths)
    }

    #[test]
    fn test_empty_inputs_produce_empty_snapshot() {
        let (_temp, paths) = fixture();
        let now = Utc::now();

        let snapshot = build_snapshot(&paths, &Config::new(), now, 0.0).unwrap();

        assert!(snapshot.agents.is_empty());
        assert!(snapshot.pipeline.is_none());
        assert!(snapshot.drive_content.is_empty());
        assert!(snapshot.notion_content.is_empty());
        assert!(snapshot.recent_activity.is_empty());
        assert_eq!(snapshot.system_stats.videos_produced, 0);
        assert_eq!(snapshot.generated_at, snapshot.system_stats.snapshot_time);
    }

    #[test]
    fn test_missing_agents_root_fails() {
        let temp = TempDir::new().unwrap();
        let paths = Paths::from_dirs(
            &temp.path().join("nope"),
            temp.path(),
            &temp.path().join("out.json"),
        );
        let err = build_snapshot(&paths, &Config::new(), Utc::now(), 0.0).unwrap_err();
        assert!(matches!(err, SnapshotError::AgentsRoot { .. }));
    }

    #[test]
    fn test_recent_session_marks_agent_active() {
        let (_temp, paths) = fixture();
        let sessions_dir = paths.sessions_dir("coder");
        std::fs::create_dir_all(&sessions_dir).unwrap();
        let now = Utc::now();
        let line = serde_json::json!({
            "type": "toolCall",
            "timestamp": (now - chrono::Duration::seconds(30)).to_rfc3339(),
            "name": "deploy"
        });
        std::fs::write(sessions_dir.join("s1.jsonl"), format!("{line}\n")).unwrap();

        let snapshot = build_snapshot(&paths, &Config::new(), now, 0.0).unwrap();

        assert_eq!(snapshot.agents[0].status, AgentStatus::Active);
        assert_eq!(snapshot.agents[0].name, "Stack");
        assert_eq!(snapshot.recent_activity[0].action, "Used tool: deploy");
        assert_eq!(snapshot.recent_activity[0].agent, "Stack");
    }

    #[test]
    fn test_write_snapshot_creates_directories() {
        let (_temp, paths) = fixture();
        let snapshot = build_snapshot(&paths, &Config::new(), Utc::now(), 0.0).unwrap();

        write_snapshot(&snapshot, &paths.output).unwrap();

        let written = std::fs::read_to_string(&paths.output).unwrap();
        assert!(written.contains("\n  \"agents\": []"));
        let parsed: Snapshot = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_wrong_shaped_index_is_ignored() {
        let (_temp, paths) = fixture();
        std::fs::write(paths.drive_index_file(), "[\"a/b\"]").unwrap();
        std::fs::write(paths.notion_index_file(), "\"just a string\"").unwrap();

        let snapshot = build_snapshot(&paths, &Config::new(), Utc::now(), 0.0).unwrap();
        assert!(snapshot.drive_content.is_empty());
        assert!(snapshot.notion_content.is_empty());
    }
}
