//! Compact JSON serialization.
//!
//! Turns a [`Value`] back into JSON text: object members in insertion order,
//! strings escaped per RFC 8259, numbers in Rust's shortest round-trip `f64`
//! form. Backs the parse/serialize round-trip guarantees; this is a plain
//! writer, not a canonicalizer.

use indexmap::IndexMap;

use crate::value::Value;

/// Serialize a value to compact JSON text.
pub fn to_string(value: &Value) -> String {
    let mut output = String::new();
    write_value(value, &mut output);
    output
}

fn write_value(value: &Value, output: &mut String) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(true) => output.push_str("true"),
        Value::Bool(false) => output.push_str("false"),
        Value::Number(n) => write_number(*n, output),
        Value::String(s) => write_string(s, output),
        Value::Array(items) => write_array(items, output),
        Value::Object(map) => write_object(map, output),
    }
}

/// Write a number in shortest round-trip form.
///
/// Non-finite values have no JSON representation and cannot come out of the
/// parser; they serialize as `null`, matching ECMAScript `JSON.stringify`.
fn write_number(n: f64, output: &mut String) {
    if n.is_finite() {
        output.push_str(&n.to_string());
    } else {
        output.push_str("null");
    }
}

/// Write a string with proper JSON escaping.
fn write_string(s: &str, output: &mut String) {
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\x08' => output.push_str("\\b"),
            '\x0C' => output.push_str("\\f"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c < '\x20' => {
                // Remaining control characters as \u00XX
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
    output.push('"');
}

fn write_array(items: &[Value], output: &mut String) {
    output.push('[');
    for (i, value) in items.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_value(value, output);
    }
    output.push(']');
}

/// Write an object with members in insertion order.
fn write_object(map: &IndexMap<String, Value>, output: &mut String) {
    output.push('{');
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }
        write_string(key, output);
        output.push(':');
        write_value(value, output);
    }
    output.push('}');
}
