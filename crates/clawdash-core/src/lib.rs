//! Dashboard snapshot builder: agent status, pipeline, content indexes and activity

mod activity;
mod agents;
mod config;
mod content;
mod error;
mod pipeline;
mod snapshot;
mod stats;
mod types;

pub use activity::{agent_activity, merge_recent, summarize};
pub use agents::{
    aggregate_agent, derive_status, enumerate_agents, last_activity, load_agent_sessions,
    round_cents, sum_usage, AgentSessions,
};
pub use config::{AgentIdentity, Config, StepInfo, UrlTemplates};
pub use content::{classify_id, count_category_items, flatten_notion, group_drive_content};
pub use error::{Result, SnapshotError};
pub use pipeline::{parse_pipeline, read_pipeline};
pub use snapshot::{build_snapshot, write_snapshot};
pub use stats::{build_stats, format_uptime, host_uptime};
pub use types::{
    ActivityEvent, ActivityKind, AgentRecord, AgentStatus, DriveGroup, DriveItem, ItemKind,
    NotionItem, PipelineStep, PipelineView, Snapshot, StepStatus, SystemStats,
};
