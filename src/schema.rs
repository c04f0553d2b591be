//! Settings schema flattening
//!
//! A settings schema is a two-level JSON object: top-level groups (such as
//! `core` or `editor`) whose `properties` hold the individual settings.
//! Only groups of `"type": "object"` are searched; each of their properties
//! becomes one [`SettingCandidate`] addressed as `group.item`.

use crate::candidate::SettingCandidate;
use crate::error::SearchError;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read and flatten a schema file
pub fn load_schema(path: &Path) -> Result<Vec<SettingCandidate>, SearchError> {
    let data = fs::read_to_string(path)?;
    let schema: Value = serde_json::from_str(&data)?;
    let candidates = flatten_schema(&schema)?;
    debug!(
        "Loaded {} settings from {}",
        candidates.len(),
        path.display()
    );
    Ok(candidates)
}

/// Flatten a schema value into candidates, in declaration order.
///
/// The root may be the group map itself or an object wrapping it in
/// `properties`.
pub fn flatten_schema(schema: &Value) -> Result<Vec<SettingCandidate>, SearchError> {
    let root = schema
        .as_object()
        .ok_or_else(|| SearchError::InvalidSchema("root must be an object".to_string()))?;

    let groups = match root.get("properties") {
        Some(Value::Object(properties)) if !is_group(root) => properties,
        _ => root,
    };

    let mut candidates = Vec::new();
    for (group_name, group) in groups {
        if group.get("type").and_then(Value::as_str) != Some("object") {
            debug!("Skipping non-object group '{}'", group_name);
            continue;
        }

        let Some(items) = group.get("properties").and_then(Value::as_object) else {
            warn!("Object group '{}' has no properties", group_name);
            continue;
        };

        for (item_name, item) in items {
            candidates.push(candidate_from(group_name, item_name, item));
        }
    }

    Ok(candidates)
}

/// A group itself carries `"type": "object"`; a wrapper does not
fn is_group(object: &Map<String, Value>) -> bool {
    object.get("type").and_then(Value::as_str) == Some("object")
}

fn candidate_from(group_name: &str, item_name: &str, item: &Value) -> SettingCandidate {
    let text = |key: &str| item.get(key).and_then(Value::as_str).map(str::to_string);

    SettingCandidate {
        title: text("title"),
        description: text("description"),
        ..SettingCandidate::new(group_name, item_name)
    }
}
