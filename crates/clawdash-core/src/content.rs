//! Content index grouping (drive) and tree flattening (notion)

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::config::{Config, UrlTemplates};
use crate::types::{DriveGroup, DriveItem, ItemKind, NotionItem};

/// Document ids are long; folder ids are short
pub fn classify_id(id: &str, threshold: usize) -> ItemKind {
    if id.chars().count() > threshold {
        ItemKind::Doc
    } else {
        ItemKind::Folder
    }
}

/// Group a flat `path -> id` index by its first two path segments.
///
/// Paths with fewer than two segments and non-string ids are dropped.
/// Groups appear in order of first occurrence.
pub fn group_drive_content(index: &Map<String, Value>, config: &Config) -> Vec<DriveGroup> {
    let mut groups: Vec<DriveGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (path, id) in index {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() < 2 {
            continue;
        }
        let Some(id) = id.as_str() else {
            tracing::debug!(path = %path, "skipping non-string drive id");
            continue;
        };

        let group_name = format!("{}/{}", segments[0], segments[1]);
        let kind = classify_id(id, config.doc_id_threshold);
        let template = match kind {
            ItemKind::Doc => &config.urls.doc,
            ItemKind::Folder => &config.urls.folder,
        };
        let item = DriveItem {
            name: segments[segments.len() - 1].to_string(),
            id: id.to_string(),
            kind,
            url: UrlTemplates::render(template, id),
            path: path.clone(),
        };

        let position = *positions.entry(group_name.clone()).or_insert_with(|| {
            groups.push(DriveGroup {
                name: group_name,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].items.push(item);
    }

    groups
}

/// Count `<category>/<item>` keys, the direct children of one category
pub fn count_category_items(index: &Map<String, Value>, category: &str) -> usize {
    let prefix = format!("{category}/");
    index
        .keys()
        .filter(|key| key.starts_with(&prefix) && key.split('/').count() == 2)
        .count()
}

/// Flatten a nested index into one item per string leaf.
///
/// Names are the `" / "`-joined keys from the root; array elements use their
/// index as key. Non-string scalars are ignored.
pub fn flatten_notion(tree: &Value, config: &Config) -> Vec<NotionItem> {
    let mut items = Vec::new();
    walk(tree, None, 0, config, &mut items);
    items
}

fn walk(
    node: &Value,
    prefix: Option<&str>,
    depth: usize,
    config: &Config,
    out: &mut Vec<NotionItem>,
) {
    if depth > config.max_tree_depth {
        tracing::warn!(prefix = prefix.unwrap_or_default(), "notion index nested too deep");
        return;
    }

    let children: Vec<(String, &Value)> = match node {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v)).collect(),
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        _ => return,
    };

    for (key, value) in children {
        let name = match prefix {
            Some(p) => format!("{p} / {key}"),
            None => key,
        };
        match value {
            Value::String(id) => out.push(NotionItem {
                url: UrlTemplates::render(&config.urls.notion, &id.replace('-', "")),
                id: id.clone(),
                name,
            }),
            Value::Object(_) | Value::Array(_) => walk(value, Some(&name), depth + 1, config, out),
            _ => {}
        }
    }
}
