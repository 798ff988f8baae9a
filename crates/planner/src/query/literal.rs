//! Encodes column values as SQL literals for inline batch statements.
//!
//! Coercion policy:
//! - `NULL` is emitted bare so that nullable columns stay NULL.
//! - numbers, dates and text are emitted single-quoted in their textual form;
//!   MySQL coerces the quoted text to the column type on insert.
//! - byte payloads are emitted as quoted text when they are valid UTF-8 and
//!   as a hex literal (`0x..`) otherwise.
//! - quoted text is escaped like `mysql_real_escape_string`, which assumes the
//!   server does not run with `NO_BACKSLASH_ESCAPES`.

use model::core::value::Value;
use std::fmt::Write;

/// Provides database-specific literal encoding for inline statements.
pub trait LiteralEncoder: Send + Sync {
    /// Encodes a concrete value into its literal form.
    fn encode_value(&self, value: &Value) -> String;

    /// Encodes a SQL NULL.
    fn encode_null(&self) -> String;

    /// Encodes text as a quoted string literal.
    fn encode_str(&self, s: &str) -> String;
}

pub struct MySqlLiteralEncoder;

impl MySqlLiteralEncoder {
    fn encode_bytes(&self, bytes: &[u8]) -> String {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.encode_str(text),
            Err(_) => encode_hex(bytes),
        }
    }
}

impl LiteralEncoder for MySqlLiteralEncoder {
    fn encode_value(&self, value: &Value) -> String {
        match value {
            Value::Null => self.encode_null(),
            Value::Int(v) => quote(&v.to_string()),
            Value::Uint(v) => quote(&v.to_string()),
            Value::Float(v) => quote(&v.to_string()),
            Value::Decimal(v) => self.encode_str(v),
            Value::String(v) | Value::Time(v) => self.encode_str(v),
            Value::Json(v) => self.encode_str(v),
            Value::Bytes(v) => self.encode_bytes(v),
            Value::Date(d) => quote(&d.format("%Y-%m-%d").to_string()),
            Value::Timestamp(ts) => quote(&ts.format("%Y-%m-%d %H:%M:%S%.f").to_string()),
        }
    }

    fn encode_null(&self) -> String {
        "NULL".to_string()
    }

    fn encode_str(&self, s: &str) -> String {
        quote(&escape_string(s))
    }
}

fn quote(s: &str) -> String {
    format!("'{s}'")
}

/// Backslash-escapes the characters `mysql_real_escape_string` escapes.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for ch in s.chars() {
        match ch {
            '\0' => out.push_str("\\0"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\x1a' => out.push_str("\\Z"),
            _ => out.push(ch),
        }
    }
    out
}

fn encode_hex(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "''".to_string();
    }
    let mut out = String::with_capacity(2 + 2 * bytes.len());
    out.push_str("0x");
    for byte in bytes {
        // writing into a String cannot fail
        let _ = write!(&mut out, "{byte:02x}");
    }
    out
}
