//! Filesystem access to agent session logs and dashboard data files

mod io;
mod paths;
mod session;
mod types;

pub use io::{atomic_write, read_json_file, read_jsonl};
pub use paths::{Paths, AGENTS_DIR_ENV, DATA_DIR_ENV, DEFAULT_OUTPUT, OUTPUT_ENV};
pub use session::{discover_session_files, SessionFile};
pub use types::{parse_timestamp, timestamp_of, SessionEvent, SessionRecord, Usage};
