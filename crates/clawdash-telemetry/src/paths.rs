//! Path resolution for agent logs, content indexes and the snapshot output

use std::path::{Path, PathBuf};

pub const AGENTS_DIR_ENV: &str = "CLAWDASH_AGENTS_DIR";
pub const DATA_DIR_ENV: &str = "CLAWDASH_DATA_DIR";
pub const OUTPUT_ENV: &str = "CLAWDASH_OUTPUT";

/// Snapshot location relative to the working directory
pub const DEFAULT_OUTPUT: &str = "public/data/snapshot.json";

const PIPELINE_FILE: &str = "pipeline-state.json";
const DRIVE_INDEX_FILE: &str = "drive-content-ids.json";
const NOTION_INDEX_FILE: &str = "notion-content-ids.json";

/// Resolves the input and output locations of a snapshot run
#[derive(Debug, Clone)]
pub struct Paths {
    pub agents_dir: PathBuf,
    pub data_dir: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    /// Resolve paths from the environment, falling back to the defaults
    /// under the home directory.
    pub fn new() -> std::io::Result<Self> {
        Self::resolve(None, None, None)
    }

    /// Resolve each location from its explicit value, then the environment,
    /// then the default. The home directory is only looked up when a
    /// default is needed.
    pub fn resolve(
        agents_dir: Option<PathBuf>,
        data_dir: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> std::io::Result<Self> {
        let agents_dir = match agents_dir.or_else(|| env_path(AGENTS_DIR_ENV)) {
            Some(dir) => dir,
            None => home_dir()?.join(".clawdbot").join("agents"),
        };
        let data_dir = match data_dir.or_else(|| env_path(DATA_DIR_ENV)) {
            Some(dir) => dir,
            None => home_dir()?.join("clawd").join("data"),
        };
        let output = output
            .or_else(|| env_path(OUTPUT_ENV))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            agents_dir,
            data_dir,
            output,
        })
    }

    /// Build paths from explicit locations
    pub fn from_dirs(agents_dir: &Path, data_dir: &Path, output: &Path) -> Self {
        Self {
            agents_dir: agents_dir.to_path_buf(),
            data_dir: data_dir.to_path_buf(),
            output: output.to_path_buf(),
        }
    }

    /// Session log directory of one agent
    pub fn sessions_dir(&self, agent_id: &str) -> PathBuf {
        self.agents_dir.join(agent_id).join("sessions")
    }

    pub fn pipeline_file(&self) -> PathBuf {
        self.data_dir.join(PIPELINE_FILE)
    }

    pub fn drive_index_file(&self) -> PathBuf {
        self.data_dir.join(DRIVE_INDEX_FILE)
    }

    pub fn notion_index_file(&self) -> PathBuf {
        self.data_dir.join(NOTION_INDEX_FILE)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

fn home_dir() -> std::io::Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })
}
