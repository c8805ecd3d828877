//! System-wide totals

use serde_json::{Map, Value};
use sysinfo::System;

use crate::agents::round_cents;
use crate::config::Config;
use crate::content::count_category_items;
use crate::types::{AgentRecord, SystemStats};

/// Sum agent totals and count produced videos from the drive index
pub fn build_stats(
    agents: &[AgentRecord],
    drive_index: &Map<String, Value>,
    config: &Config,
    uptime_seconds: f64,
    snapshot_time: &str,
) -> SystemStats {
    SystemStats {
        uptime: format_uptime(uptime_seconds),
        uptime_seconds,
        vps_cost: config.vps_cost.clone(),
        videos_produced: count_category_items(drive_index, &config.video_category),
        total_tokens: agents
            .iter()
            .fold(0, |total: u64, a| total.saturating_add(a.total_tokens)),
        total_cost: round_cents(agents.iter().map(|a| a.total_cost).sum()),
        total_sessions: agents.iter().map(|a| a.session_count).sum(),
        snapshot_time: snapshot_time.to_string(),
    }
}

/// `"<days>d <hours>h"`
pub fn format_uptime(seconds: f64) -> String {
    let seconds = seconds.max(0.0) as u64;
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    format!("{days}d {hours}h")
}

/// Host uptime in seconds
pub fn host_uptime() -> f64 {
    System::uptime() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentStatus;
    use serde_json::json;

    fn agent(id: &str, sessions: usize, tokens: u64, cost: f64) -> AgentRecord {
        AgentRecord {
            id: id.to_string(),
            name: id.to_string(),
            emoji: "🤖".to_string(),
            role: "Unknown".to_string(),
            status: AgentStatus::Idle,
            last_activity: None,
            session_count: sessions,
            total_tokens: tokens,
            total_cost: cost,
        }
    }

    #[test]
    fn test_build_stats_sums_agents() {
        let agents = vec![agent("a", 2, 1_000, 0.1), agent("b", 3, 500, 0.2)];
        let drive = match json!({
            "YouTube/one": "x",
            "YouTube/two": "y",
            "YouTube/two/script": "z"
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        let stats = build_stats(
            &agents,
            &drive,
            &Config::new(),
            90_061.0,
            "2024-01-01T00:00:00.000Z",
        );

        assert_eq!(stats.total_sessions, 5);
        assert_eq!(stats.total_tokens, 1_500);
        assert_eq!(stats.total_cost, 0.3);
        assert_eq!(stats.videos_produced, 2);
        assert_eq!(stats.uptime, "1d 1h");
        assert_eq!(stats.vps_cost, "$15/mo");
        assert_eq!(stats.snapshot_time, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_build_stats_saturates_token_total() {
        let agents = vec![agent("a", 1, u64::MAX, 0.0), agent("b", 1, 10, 0.0)];
        let stats = build_stats(&agents, &Map::new(), &Config::new(), 0.0, "t");
        assert_eq!(stats.total_tokens, u64::MAX);
    }

    #[test]
    fn test_host_uptime_is_reported() {
        assert!(host_uptime() > 0.0);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0.0), "0d 0h");
        assert_eq!(format_uptime(3_599.9), "0d 0h");
        assert_eq!(format_uptime(86_400.0 * 12.0 + 7_200.0), "12d 2h");
    }
}
