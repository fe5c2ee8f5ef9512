use serde_yaml::{Mapping, Value};

/// Deep-merge `overlay` onto `base`, the way repeated values files stack.
///
/// Mappings merge key by key; any other value replaces what was there.
/// A `null` in the overlay deletes the key from the base.
pub fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, strip_nulls(value));
                    }
                }
            }
        }
        (_, Value::Null) => {}
        (base, overlay) => *base = strip_nulls(overlay),
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect::<Mapping>(),
        ),
        other => other,
    }
}
