use crate::conf::ConfigError;
use serde_yaml::{Mapping, Value};

/// A single `--set path.to.key=value` assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub path: Vec<String>,
    pub value: Value,
}

pub fn parse_override(raw: &str) -> Result<Override, ConfigError> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(ConfigError::invalid_override(raw, "missing '='"));
    };

    let path = split_path(key);
    if path.iter().any(|segment| segment.is_empty()) {
        return Err(ConfigError::invalid_override(raw, "empty key segment"));
    }

    let value = match scalar(value) {
        Value::Null => Value::Null,
        // Annotations are string-to-string; keep exactly what was typed.
        _ if is_annotation_path(&path) => Value::String(value.to_owned()),
        typed => typed,
    };

    Ok(Override { path, value })
}

/// Write every override into `doc`, creating intermediate mappings on the way.
///
/// A `null` value deletes the key instead, so the chart default applies, the
/// same as `null` in a values file.
pub fn apply_overrides(doc: &mut Value, overrides: &[Override]) {
    for o in overrides {
        if o.value.is_null() {
            remove_path(doc, &o.path);
        } else {
            set_path(doc, &o.path, o.value.clone());
        }
    }
}

fn is_annotation_path(path: &[String]) -> bool {
    path.len() > 2 && path[0] == "ingress" && path[1] == "annotations"
}

fn remove_path(node: &mut Value, path: &[String]) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut node = node;
    for segment in parents {
        match node.get_mut(segment.as_str()) {
            Some(child) => node = child,
            None => return,
        }
    }

    if let Value::Mapping(map) = node {
        map.remove(last.as_str());
    }
}

fn set_path(node: &mut Value, path: &[String], value: Value) {
    let Some((head, rest)) = path.split_first() else {
        *node = value;
        return;
    };

    if !node.is_mapping() {
        *node = Value::Mapping(Mapping::new());
    }

    if let Value::Mapping(map) = node {
        let child = map
            .entry(Value::String(head.clone()))
            .or_insert(Value::Null);
        set_path(child, rest, value);
    }
}

/// Split on unescaped dots. `\.` keeps a literal dot inside a segment.
fn split_path(key: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push('.');
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    segments.push(current);
    segments
}

/// Interpret the right-hand side as a YAML scalar; anything else stays text.
fn scalar(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    match serde_yaml::from_str::<Value>(raw) {
        Ok(v @ (Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Null)) => v,
        _ => Value::String(raw.to_owned()),
    }
}
