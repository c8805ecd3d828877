//! Snapshot document types (camelCase on the wire)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether an agent has logged anything recently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Idle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRecord {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub role: String,
    pub status: AgentStatus,
    pub last_activity: Option<String>,
    pub session_count: usize,
    pub total_tokens: u64,
    pub total_cost: f64,
}

/// Status of one pipeline step. Unrecognised values pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Done,
    InProgress,
    Waiting,
    Pending,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStep {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StepStatus>,
    pub completed_at: Option<String>,
    pub note: Option<String>,
}

/// Production pipeline of the active video.
///
/// Header fields are copied from the state document without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_video: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Value>,
    pub steps: Vec<PipelineStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Doc,
    Folder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveItem {
    pub name: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub url: String,
    pub path: String,
}

/// Drive items sharing the first two path segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveGroup {
    pub name: String,
    pub items: Vec<DriveItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotionItem {
    pub name: String,
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Tool,
    Input,
    Response,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub timestamp: String,
    pub agent: String,
    pub agent_id: String,
    pub action: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub uptime: String,
    pub uptime_seconds: f64,
    pub vps_cost: String,
    pub videos_produced: usize,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub total_sessions: usize,
    pub snapshot_time: String,
}

/// The consolidated dashboard document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub agents: Vec<AgentRecord>,
    pub pipeline: Option<PipelineView>,
    pub drive_content: Vec<DriveGroup>,
    pub notion_content: Vec<NotionItem>,
    pub recent_activity: Vec<ActivityEvent>,
    pub system_stats: SystemStats,
    pub generated_at: String,
}
