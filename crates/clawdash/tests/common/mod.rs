#![allow(dead_code)]

use clawdash_telemetry::Paths;
use filetime::FileTime;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Temporary agents root + data directory laid out like a live host
pub struct Workspace {
    pub dir: TempDir,
    pub paths: Paths,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let agents = dir.path().join("agents");
        let data = dir.path().join("data");
        std::fs::create_dir_all(&agents).unwrap();
        std::fs::create_dir_all(&data).unwrap();
        let output = dir.path().join("public/data/snapshot.json");
        let paths = Paths::from_dirs(&agents, &data, &output);
        Self { dir, paths }
    }

    pub fn add_agent(&self, id: &str) {
        std::fs::create_dir_all(self.paths.agents_dir.join(id)).unwrap();
    }

    /// Write a session file with the given lines and mtime (unix seconds)
    pub fn write_session(&self, agent: &str, name: &str, lines: &[Value], mtime: i64) {
        let sessions = self.paths.sessions_dir(agent);
        std::fs::create_dir_all(&sessions).unwrap();
        let path = sessions.join(name);
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        std::fs::write(&path, content).unwrap();
        set_mtime(&path, mtime);
    }

    pub fn write_data(&self, name: &str, document: &Value) {
        std::fs::write(
            self.paths.data_dir.join(name),
            serde_json::to_string_pretty(document).unwrap(),
        )
        .unwrap();
    }
}

pub fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, FileTime::from_unix_time(unix_seconds, 0)).unwrap();
}
