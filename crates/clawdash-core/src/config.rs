//! Snapshot configuration: agent roster, pipeline step table and tunables

use chrono::Duration;

/// Display identity of an agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub name: String,
    pub emoji: String,
    pub role: String,
}

impl AgentIdentity {
    /// Look up the identity for an agent directory name.
    ///
    /// Unknown ids are shown under their own name with a generic icon.
    pub fn for_id(id: &str) -> Self {
        let (name, emoji, role) = match id {
            "main" => ("TARS", "🧠", "Main Agent - Orchestrator & Decision Maker"),
            "hook" => ("Hook", "✍️", "Content Writer - Scripts, Posts & Copy"),
            "coder" => ("Stack", "⚡", "Coder Agent - Development & Deployment"),
            _ => (id, "🤖", "Unknown"),
        };
        Self {
            name: name.to_string(),
            emoji: emoji.to_string(),
            role: role.to_string(),
        }
    }
}

/// Label and responsible agent of a canonical pipeline step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepInfo {
    pub label: &'static str,
    pub agent: &'static str,
}

impl StepInfo {
    pub fn for_step(step_id: &str) -> Option<Self> {
        let (label, agent) = match step_id {
            "1_idea_pitched" => ("Idea", "TARS"),
            "2_idea_approved" => ("Approved", "Jess"),
            "3_script_written" => ("Script", "Hook"),
            "4_script_approved" => ("Review", "Jess"),
            "5_broll_created" => ("B-Roll", "Hook"),
            "6_thumbnail_headlines_proposed" => ("Headlines", "Hook"),
            "7_thumbnail_headline_approved" => ("Headline OK", "Jess"),
            "8_thumbnail_generated" => ("Thumbnail", "Stack"),
            "9_synced_notion_drive" => ("Synced", "TARS"),
            _ => return None,
        };
        Some(Self { label, agent })
    }
}

/// Link templates for content-index items; `{id}` is substituted
#[derive(Debug, Clone)]
pub struct UrlTemplates {
    pub doc: String,
    pub folder: String,
    pub notion: String,
}

impl UrlTemplates {
    pub fn new() -> Self {
        Self {
            doc: "https://docs.google.com/document/d/{id}/edit".to_string(),
            folder: "https://drive.google.com/drive/folders/{id}".to_string(),
            notion: "https://notion.so/{id}".to_string(),
        }
    }

    pub fn render(template: &str, id: &str) -> String {
        template.replace("{id}", id)
    }
}

impl Default for UrlTemplates {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot builder configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Agents with activity more recent than this are `active`
    pub active_window: Duration,

    /// Most recent session files summed for token/cost totals
    pub token_window: usize,

    /// Most recent session files scanned per agent for the activity feed
    pub activity_window: usize,

    /// Max activity feed entries
    pub activity_limit: usize,

    /// Message text longer than this is cut in activity summaries
    pub summary_chars: usize,

    /// Drive ids longer than this are documents, otherwise folders
    pub doc_id_threshold: usize,

    /// Drive category whose direct children count as produced videos
    pub video_category: String,

    /// Fixed hosting cost label
    pub vps_cost: String,

    /// Nesting limit when flattening the notion index
    pub max_tree_depth: usize,

    pub urls: UrlTemplates,
}

impl Config {
    pub fn new() -> Self {
        Self {
            active_window: Duration::minutes(5),
            token_window: 3,
            activity_window: 2,
            activity_limit: 30,
            summary_chars: 100,
            doc_id_threshold: 30,
            video_category: "YouTube".to_string(),
            vps_cost: "$15/mo".to_string(),
            max_tree_depth: 64,
            urls: UrlTemplates::new(),
        }
    }

    /// Number of session files that need to be read per agent
    pub fn session_window(&self) -> usize {
        self.token_window.max(self.activity_window).max(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
