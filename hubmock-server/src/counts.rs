//! Item count derivation for import request bodies
//!
//! The HUB import clients are not consistent about payload nesting: some
//! send the entity array at the top level, others wrap it in an `items`
//! object. The mock accepts both and treats anything else as zero items —
//! a silent default, not an error.

use serde_json::Value;

/// Count importable items in a request body
///
/// Two-tier lookup: an array at `body[field]`, else an array at
/// `body["items"][field]`, else 0. Any other body shape (missing field,
/// non-array value, non-object body) yields 0.
///
/// # Examples
///
/// ```
/// use hubmock_server::counts::item_count;
/// use serde_json::json;
///
/// assert_eq!(item_count(&json!({"customers": [1, 2, 3]}), "customers"), 3);
/// assert_eq!(item_count(&json!({"items": {"customers": [1]}}), "customers"), 1);
/// assert_eq!(item_count(&json!({"customers": "oops"}), "customers"), 0);
/// ```
pub fn item_count(body: &Value, field: &str) -> u64 {
    if let Some(items) = body.get(field).and_then(Value::as_array) {
        return items.len() as u64;
    }

    if let Some(items) = body
        .get("items")
        .and_then(|wrapper| wrapper.get(field))
        .and_then(Value::as_array)
    {
        return items.len() as u64;
    }

    0
}
