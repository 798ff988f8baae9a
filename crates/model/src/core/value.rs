use crate::core::data_type::DataType;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A single cell read from the source database.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i64),
    Uint(u64),
    Float(f64),
    /// Exact numerics are kept in their textual form to avoid any rounding.
    Decimal(String),
    String(String),
    Bytes(Vec<u8>),
    /// JSON documents are kept as the server sent them so that number
    /// formatting inside the document survives the copy.
    Json(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    /// `TIME` values may exceed 24 hours or be negative, so they stay textual.
    Time(String),
    Null,
}

/// A named value inside a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Value,
    pub data_type: DataType,
}

impl Value {
    /// Decodes a text-protocol cell according to its column type.
    ///
    /// Cells that do not parse as their declared type (zero dates such as
    /// `0000-00-00`, out of range numbers) fall back to their raw text so
    /// that they are written back unchanged.
    pub fn from_text(data_type: &DataType, raw: Vec<u8>) -> Value {
        if data_type.is_binary() {
            return Value::Bytes(raw);
        }

        let text = match String::from_utf8(raw) {
            Ok(text) => text,
            Err(err) => return Value::Bytes(err.into_bytes()),
        };

        match data_type {
            // `0000` must not shrink to `0`, which MySQL reads as year 2000
            DataType::Year => Value::String(text),
            DataType::Int => text
                .parse::<i64>()
                .map(Value::Int)
                .unwrap_or(Value::Decimal(text)),
            DataType::IntUnsigned => text
                .parse::<u64>()
                .map(Value::Uint)
                .unwrap_or(Value::Decimal(text)),
            DataType::Float | DataType::Double => match text.parse::<f64>() {
                Ok(v) if v.is_finite() => Value::Float(v),
                _ => Value::Decimal(text),
            },
            DataType::Decimal => Value::Decimal(text),
            DataType::Date => NaiveDate::parse_from_str(&text, DATE_FORMAT)
                .map(Value::Date)
                .unwrap_or(Value::String(text)),
            DataType::Timestamp => NaiveDateTime::parse_from_str(&text, DATETIME_FORMAT)
                .map(Value::Timestamp)
                .unwrap_or(Value::String(text)),
            DataType::Time => Value::Time(text),
            DataType::Json => Value::Json(text),
            _ => Value::String(text),
        }
    }

    /// Integer view covering both signed and unsigned columns, used for
    /// keyset cursors.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Int(v) => Some(i128::from(*v)),
            Value::Uint(v) => Some(i128::from(*v)),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Int(v) => Some(v.to_string()),
            Value::Uint(v) => Some(v.to_string()),
            Value::Float(v) => Some(v.to_string()),
            Value::Decimal(v) | Value::String(v) | Value::Time(v) | Value::Json(v) => {
                Some(v.clone())
            }
            Value::Bytes(v) => String::from_utf8(v.clone()).ok(),
            Value::Date(v) => Some(v.format(DATE_FORMAT).to_string()),
            Value::Timestamp(v) => Some(v.format(DATETIME_FORMAT).to_string()),
            Value::Null => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            other => write!(f, "{}", other.as_string().unwrap_or_default()),
        }
    }
}
