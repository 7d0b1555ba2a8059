//! Structural deep equality, as `test` operations require.

use serde_json::Value;

/// Performs a deep equality check between two documents.
///
/// Object member order is irrelevant; list order is significant. Primitives
/// compare by strict JSON equality: a number is never equal to its string
/// form, and an integer is never equal to its float spelling.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_patch::deep_equal;
///
/// assert!(deep_equal(
///     &json!({"a": 1, "b": [2, 3]}),
///     &json!({"b": [2, 3], "a": 1})
/// ));
/// assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
/// assert!(!deep_equal(&json!(1337), &json!("1337")));
/// ```
pub fn deep_equal(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(list_a), Value::Array(list_b)) => {
            if list_a.len() != list_b.len() {
                return false;
            }
            for i in 0..list_a.len() {
                if !deep_equal(&list_a[i], &list_b[i]) {
                    return false;
                }
            }
            true
        }

        (Value::Object(map_a), Value::Object(map_b)) => {
            if map_a.len() != map_b.len() {
                return false;
            }
            for (key, value_a) in map_a {
                match map_b.get(key) {
                    Some(value_b) => {
                        if !deep_equal(value_a, value_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different kinds are never equal
        _ => false,
    }
}
