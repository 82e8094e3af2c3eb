//! Dot-notation field addressing over JSON documents
//!
//! Provides the minimal path operations the translate stage needs: reading a
//! value by path while keeping "absent" distinguishable from "present but
//! null", and writing a value by path with intermediate objects created on
//! demand.

use serde_json::{Map, Value};

/// Read the value at a dot-separated path.
///
/// Returns `None` when any segment is absent and `Some(&Value::Null)` when
/// the leaf exists and holds null. Numeric segments index into arrays.
pub fn get<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(document, |current, segment| resolve_segment(current, segment))
}

fn resolve_segment<'a>(current: &'a Value, segment: &str) -> Option<&'a Value> {
    match current {
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => current.get(segment),
    }
}

/// Write a value at a dot-separated path.
///
/// Mirrors [`get`]: an in-range numeric segment addresses an existing array
/// slot in place. Missing intermediate segments are created as empty
/// objects, and an intermediate holding a scalar (or an out-of-range array
/// index) is replaced by an object; the write always lands.
pub fn set(document: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let (leaf, parents) = match segments.split_last() {
        Some(split) => split,
        None => return,
    };

    let mut current = document;
    for segment in parents {
        current = descend_segment(current, segment);
    }
    write_leaf(current, leaf, value);
}

fn array_slot(current: &Value, segment: &str) -> Option<usize> {
    match current {
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .filter(|index| *index < items.len()),
        _ => None,
    }
}

fn descend_segment<'a>(current: &'a mut Value, segment: &str) -> &'a mut Value {
    if let Some(index) = array_slot(current, segment) {
        let next = &mut current[index];
        if !next.is_object() && !next.is_array() {
            *next = Value::Object(Map::new());
        }
        return next;
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    match current {
        Value::Object(map) => {
            let next = map.entry(segment.to_string()).or_insert(Value::Null);
            if !next.is_object() && !next.is_array() {
                *next = Value::Object(Map::new());
            }
            next
        }
        other => other,
    }
}

fn write_leaf(current: &mut Value, leaf: &str, value: Value) {
    if let Some(index) = array_slot(current, leaf) {
        current[index] = value;
        return;
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Value::Object(map) = current {
        map.insert(leaf.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_top_level_field() {
        let doc = json!({"status": "10"});
        assert_eq!(get(&doc, "status"), Some(&json!("10")));
    }

    #[test]
    fn test_get_nested_field() {
        let doc = json!({"response": {"status": {"code": "20"}}});
        assert_eq!(get(&doc, "response.status.code"), Some(&json!("20")));
    }

    #[test]
    fn test_get_absent_field_is_none() {
        let doc = json!({"status": "10"});
        assert_eq!(get(&doc, "missing"), None);
        assert_eq!(get(&doc, "status.deeper"), None);
    }

    #[test]
    fn test_get_null_is_distinct_from_absent() {
        let doc = json!({"status": null});
        assert_eq!(get(&doc, "status"), Some(&Value::Null));
    }

    #[test]
    fn test_get_array_index_segment() {
        let doc = json!({"codes": ["10", "20"]});
        assert_eq!(get(&doc, "codes.1"), Some(&json!("20")));
        assert_eq!(get(&doc, "codes.5"), None);
    }

    #[test]
    fn test_set_top_level_field() {
        let mut doc = json!({});
        set(&mut doc, "status", json!("success"));
        assert_eq!(doc, json!({"status": "success"}));
    }

    #[test]
    fn test_set_creates_intermediate_objects() {
        let mut doc = json!({});
        set(&mut doc, "response.status.label", json!("success"));
        assert_eq!(doc, json!({"response": {"status": {"label": "success"}}}));
    }

    #[test]
    fn test_set_overwrites_existing_value() {
        let mut doc = json!({"status": "10"});
        set(&mut doc, "status", json!("success"));
        assert_eq!(doc, json!({"status": "success"}));
    }

    #[test]
    fn test_set_replaces_non_object_intermediate() {
        let mut doc = json!({"response": "scalar"});
        set(&mut doc, "response.label", json!("success"));
        assert_eq!(doc, json!({"response": {"label": "success"}}));
    }

    #[test]
    fn test_set_array_index_writes_in_place() {
        let mut doc = json!({"codes": ["10", "20"]});
        set(&mut doc, "codes.1", json!("fail"));
        assert_eq!(doc, json!({"codes": ["10", "fail"]}));
    }

    #[test]
    fn test_set_descends_through_array_elements() {
        let mut doc = json!({"items": [{"code": "10"}]});
        set(&mut doc, "items.0.label", json!("success"));
        assert_eq!(doc, json!({"items": [{"code": "10", "label": "success"}]}));
    }

    #[test]
    fn test_set_out_of_range_index_falls_back_to_object_key() {
        let mut doc = json!({"codes": ["10"]});
        set(&mut doc, "codes.5", json!("fail"));
        assert_eq!(doc, json!({"codes": {"5": "fail"}}));
    }

    #[test]
    fn test_set_null_value_creates_the_key() {
        let mut doc = json!({});
        set(&mut doc, "status", Value::Null);
        let map = doc.as_object().unwrap();
        assert!(map.contains_key("status"));
        assert_eq!(map["status"], Value::Null);
    }
}
