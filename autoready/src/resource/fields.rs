//! Nested field access over semi-structured manifests.

use serde_json::Value;

/// Walk a path of object keys.
pub fn nested<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(doc, |v, key| v.get(key))
}

/// Read an integer field, normalizing any numeric representation to i64.
/// Status numbers arrive integer- or float-encoded depending on the
/// serializer that produced the document.
pub fn nested_i64(doc: &Value, path: &[&str]) -> Option<i64> {
    match nested(doc, path)? {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i),
            None => n.as_f64().map(|f| f as i64),
        },
        _ => None,
    }
}

pub fn nested_str<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a str> {
    nested(doc, path)?.as_str()
}

pub fn nested_slice<'a>(
    doc: &'a Value,
    path: &[&str],
) -> Option<&'a Vec<Value>> {
    nested(doc, path)?.as_array()
}
