use serde_json::Value;

use crate::error::ArgumentError;
use crate::operation::Operation;

const ROOT: &str = "_watcher";

/// Join non-empty segments into an absolute path, percent-encoding each one.
///
/// `,` and `*` stay literal so multi-value and wildcard segments survive.
pub fn make_path<S: AsRef<str>>(segments: &[S]) -> String {
    let encoded: Vec<String> = segments
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| !s.is_empty())
        .map(encode_segment)
        .collect();
    format!("/{}", encoded.join("/"))
}

fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment)
        .replace("%2C", ",")
        .replace("%2A", "*")
}

/// Path for `operation`, substituting `id` into the watch slot.
pub fn operation_path(operation: Operation, id: Option<&str>) -> Result<String, ArgumentError> {
    let template = operation.path_template();
    if template.is_empty() {
        return Ok(format!("/{ROOT}/"));
    }

    let mut segments = Vec::with_capacity(template.len() + 1);
    segments.push(ROOT);
    for slot in template.iter().copied() {
        match slot {
            Some(fixed) => segments.push(fixed),
            None => match id {
                Some(id) if !id.is_empty() => segments.push(id),
                _ => return Err(ArgumentError::empty("id")),
            },
        }
    }
    Ok(make_path(segments.as_slice()))
}

/// A body counts as missing when it carries nothing to send.
pub fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(_) | Value::Bool(_) | Value::Number(_) => false,
    }
}
