use serde::Serialize;
use serde_json::Value;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The value could not be represented as a JSON value.
    #[error("value is not representable as JSON: {0}")]
    NotJson(String),
}

/// Produces the canonical string for any serializable value.
///
/// Fails only when the value cannot be converted to a JSON value (for
/// example, a map with non-string keys). For values already parsed as
/// [`serde_json::Value`], use [`canonical_string`], which is total.
pub fn canonicalize<T: Serialize>(value: &T) -> Result<String, CanonicalizationError> {
    let value =
        serde_json::to_value(value).map_err(|e| CanonicalizationError::NotJson(e.to_string()))?;
    Ok(canonical_string(&value))
}

/// Produces the canonical string for a JSON value.
///
/// The encoding is deterministic: object members are sorted by code-point
/// order of their keys, absent members are omitted, numbers render in
/// minimal decimal form with negative zero normalized to `0`, and no
/// whitespace is emitted. Structurally equal values always produce
/// byte-identical output, on every platform.
pub fn canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// Canonical UTF-8 bytes for a JSON value; the exact hash input.
pub fn canonical_bytes(value: &Value) -> Vec<u8> {
    canonical_string(value).into_bytes()
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(num) => write_number(num, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly; determinism must not depend on the map's
            // iteration order (serde_json's `preserve_order` feature).
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort_unstable();
            out.push('{');
            for (idx, key) in keys.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(&map[*key], out);
            }
            out.push('}');
        }
    }
}

/// Minimal decimal rendering. Integers print their digits directly; floats
/// use the shortest round-trip decimal form, which never carries an
/// exponent or padding zeros. Negative zero renders as `0`.
fn write_number(num: &serde_json::Number, out: &mut String) {
    if num.is_f64() {
        let f = num.as_f64().unwrap();
        if f == 0.0 {
            out.push('0');
        } else {
            out.push_str(&f.to_string());
        }
    } else {
        out.push_str(&num.to_string());
    }
}

/// JSON string quoting: control characters escaped (short forms where the
/// grammar defines them), quote and backslash escaped, all other Unicode
/// preserved literally.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
