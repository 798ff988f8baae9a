use model::{
    core::{
        data_type::DataType,
        value::{FieldValue, Value},
    },
    records::row::RowData,
};
use mysql_async::{Row as MySqlRow, Value as MySqlValue};

/// Name and decoded type of one result column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub data_type: DataType,
}

pub fn row_data(table: &str, columns: &[ColumnInfo], mut row: MySqlRow) -> RowData {
    let field_values = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let raw = row.take::<MySqlValue, _>(idx).unwrap_or(MySqlValue::NULL);
            FieldValue {
                name: column.name.clone(),
                value: cell_value(&column.data_type, raw),
                data_type: column.data_type.clone(),
            }
        })
        .collect();

    RowData::new(table, field_values)
}

/// Converts one driver cell. Text protocol cells are always `Bytes` or
/// `NULL`; the typed variants only show up on prepared statements.
pub fn cell_value(data_type: &DataType, raw: MySqlValue) -> Value {
    match raw {
        MySqlValue::NULL => Value::Null,
        MySqlValue::Bytes(bytes) => Value::from_text(data_type, bytes),
        MySqlValue::Int(v) => Value::Int(v),
        MySqlValue::UInt(v) => Value::Uint(v),
        MySqlValue::Float(v) => Value::Float(f64::from(v)),
        MySqlValue::Double(v) => Value::Float(v),
        // Date and Time render through the driver's SQL text form
        other @ (MySqlValue::Date(..) | MySqlValue::Time(..)) => {
            let text = other.as_sql(true);
            let text = text.trim_matches('\'');
            Value::from_text(data_type, text.as_bytes().to_vec())
        }
    }
}
