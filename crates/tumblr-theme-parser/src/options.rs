//! Option scopes for theme rendering.
//!
//! An options scope maps string keys to the values a theme can consume:
//! strings, booleans, and sequences of nested mappings (for iteration
//! blocks). Keys are case-sensitive. Scopes are represented as
//! [`serde_json::Map`] so callers can build them with the `json!` macro or
//! from any serializable source.
//!
//! Scopes are never mutated during a render. Iteration is the only directive
//! that changes what a block body sees, and it does so by building a fresh
//! merged mapping per item, so sibling branches cannot observe each other.

use serde_json::Value;

/// An ordered mapping from option key to option value.
pub type Options = serde_json::Map<String, Value>;

/// Reserved key holding the current post type, consulted by typed blocks
/// such as `{block:Photo}`.
pub const POST_TYPE_KEY: &str = "PostType";

/// Truthiness rule for definedness blocks.
///
/// True for non-empty strings, `true`, non-empty sequences and mappings, and
/// non-zero numbers. `null` is always false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
    }
}

/// Formats an option value for variable substitution.
///
/// Strings are emitted as-is, booleans and numbers are stringified, and
/// anything else (sequences, mappings, null) is treated as if the key were
/// absent.
pub(crate) fn variable_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Builds the effective scope for one iteration item.
///
/// The item's keys overlay the outer scope (item wins on collision), and the
/// iteration key itself is removed so the body cannot re-read the sequence
/// it is iterating. Items that are not mappings contribute no overlay.
pub(crate) fn item_scope(outer: &Options, key: &str, item: &Value) -> Options {
    let mut merged = outer.clone();
    if let Value::Object(overlay) = item {
        for (k, v) in overlay {
            merged.insert(k.clone(), v.clone());
        }
    }
    merged.remove(key);
    merged
}
