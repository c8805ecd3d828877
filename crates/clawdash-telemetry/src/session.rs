//! Session log discovery

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A session log file and its modification time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

impl SessionFile {
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

/// List the `.jsonl` session logs in `sessions_dir`, most recently modified first.
///
/// Ordering is by filesystem mtime, not by the timestamps inside the files,
/// so a file that is touched without being appended to moves to the front.
/// Files whose metadata cannot be read sort last.
pub fn discover_session_files(sessions_dir: &Path) -> std::io::Result<Vec<SessionFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(sessions_dir)?.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".jsonl") {
            continue;
        }

        let metadata = match std::fs::metadata(entry.path()) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "no metadata");
                files.push(SessionFile {
                    path: entry.path(),
                    modified: SystemTime::UNIX_EPOCH,
                });
                continue;
            }
        };
        if metadata.is_dir() {
            continue;
        }

        files.push(SessionFile {
            path: entry.path(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    files.sort_by(|a, b| {
        b.modified
            .cmp(&a.modified)
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(files)
}
