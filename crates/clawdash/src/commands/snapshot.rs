use anyhow::Context;
use clawdash_core::{build_snapshot, host_uptime, write_snapshot, Config, Snapshot};
use clawdash_telemetry::Paths;
use serde_json::Value;
use std::path::Path;

use crate::cli::Cli;

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let paths = Paths::resolve(
        cli.agents_dir.clone(),
        cli.data_dir.clone(),
        cli.output.clone(),
    )?;
    let config = Config::new();

    println!("📸 Creating dashboard snapshot...");

    let snapshot = build_snapshot(&paths, &config, chrono::Utc::now(), host_uptime())
        .context("failed to build snapshot")?;
    write_snapshot(&snapshot, &paths.output)?;

    println!("{}", build_summary(&snapshot, &paths.output));
    Ok(())
}

fn build_summary(snapshot: &Snapshot, output: &Path) -> String {
    let pipeline = match snapshot.pipeline.as_ref().map(|p| p.title.as_ref()) {
        None => "none".to_string(),
        Some(None) => "untitled".to_string(),
        Some(Some(Value::String(title))) => title.clone(),
        Some(Some(title)) => title.to_string(),
    };

    format!(
        "✅ Snapshot saved to {}\n   \
         Agents: {}\n   \
         Activities: {}\n   \
         Drive groups: {}\n   \
         Notion items: {}\n   \
         Pipeline: {}",
        output.display(),
        snapshot.agents.len(),
        snapshot.recent_activity.len(),
        snapshot.drive_content.len(),
        snapshot.notion_content.len(),
        pipeline
    )
}
