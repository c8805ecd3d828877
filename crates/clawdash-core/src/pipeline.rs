//! Pipeline state document mapping

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::config::StepInfo;
use crate::types::{PipelineStep, PipelineView, StepStatus};

/// Read the pipeline state; `None` when the file is absent or unparsable
pub fn read_pipeline(path: &Path) -> Option<PipelineView> {
    let document: Value = clawdash_telemetry::read_json_file(path)?;
    let view = parse_pipeline(&document);
    if view.is_none() {
        tracing::warn!(path = %path.display(), "unexpected pipeline state shape");
    }
    view
}

/// Parse a pipeline document already held in memory.
///
/// Only a non-object document is rejected. Header fields pass through as
/// they are; a badly typed step field is dropped on its own.
pub fn parse_pipeline(document: &Value) -> Option<PipelineView> {
    let state = document.as_object()?;

    let steps = state
        .get("steps")
        .and_then(Value::as_object)
        .map(|steps| {
            steps
                .iter()
                .map(|(id, step)| map_step(id, step))
                .collect()
        })
        .unwrap_or_default();

    Some(PipelineView {
        active_video: state.get("activeVideo").cloned(),
        title: state.get("title").cloned(),
        started_at: state.get("startedAt").cloned(),
        steps,
    })
}

fn map_step(id: &str, step: &Value) -> PipelineStep {
    let info = StepInfo::for_step(id);
    PipelineStep {
        id: id.to_string(),
        label: info.map(|i| i.label.to_string()),
        agent: info.map(|i| i.agent.to_string()),
        status: step
            .get("status")
            .and_then(|status| StepStatus::deserialize(status).ok()),
        completed_at: non_empty_str(step.get("completedAt")),
        note: non_empty_str(step.get("note")),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
