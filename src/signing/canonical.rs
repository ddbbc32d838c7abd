//! Canonical JSON encoding for signing strings.
//!
//! The signer and the verifier must feed byte-identical input to the tag
//! function, so the payload is re-encoded deterministically on both sides:
//! object keys sorted lexicographically at every nesting level, no
//! whitespace. Key order and formatting on the wire therefore do not affect
//! verification.

use serde_json::Value;

/// Encodes a JSON value in canonical form.
///
/// Scalars use `serde_json` formatting; objects are emitted with keys in
/// lexicographic order.
pub fn to_canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_escaped(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(out, key);
                out.push(':');
                write_value(out, &map[key.as_str()]);
            }
            out.push('}');
        }
    }
}

/// Writes a JSON string literal with standard escaping.
fn write_escaped(out: &mut String, s: &str) {
    let escaped = serde_json::to_string(s).expect("string serialization is infallible");
    out.push_str(&escaped);
}
