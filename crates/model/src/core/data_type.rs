use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Column type as far as value decoding is concerned.
///
/// MySQL reports many physical types; rows are read over the text protocol,
/// so all that matters is how the textual cell should be interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataType {
    Int,
    IntUnsigned,
    Float,
    Double,
    Decimal,
    Year,
    Date,
    Timestamp,
    Time,
    Json,
    Bit,
    Enum,
    Set,
    Char,
    VarChar,
    String,
    Binary,
    Blob,
    Geometry,
    Null,
    Custom(String),
}

lazy_static! {
    static ref MYSQL_TYPE_MAP: HashMap<&'static str, DataType> = build_mysql_type_map();
}

impl DataType {
    /// Resolves a type name as reported by `information_schema.COLUMNS`
    /// (`DATA_TYPE` or `COLUMN_TYPE`).
    pub fn from_mysql_type(type_name: &str) -> Result<Self, String> {
        let normalized = Self::normalize_type_name(type_name);
        MYSQL_TYPE_MAP
            .get(normalized.as_str())
            .cloned()
            .ok_or_else(|| format!("Unknown MySQL column type: {type_name}"))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DataType::Int | DataType::IntUnsigned)
    }

    /// Types whose cells are raw bytes rather than character data.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            DataType::Binary | DataType::Blob | DataType::Bit | DataType::Geometry
        )
    }

    // `COLUMN_TYPE` carries display widths and modifiers (`int(11) unsigned`),
    // only the base name and signedness are relevant here.
    fn normalize_type_name(type_name: &str) -> String {
        let upper = type_name.trim().to_uppercase();
        let unsigned = upper.contains("UNSIGNED");
        let base = upper
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()
            .unwrap_or_default();
        if unsigned {
            format!("{base} UNSIGNED")
        } else {
            base.to_string()
        }
    }
}

fn build_mysql_type_map() -> HashMap<&'static str, DataType> {
    use DataType::*;

    let entries = [
        ("BOOLEAN", Int),
        ("BOOL", Int),
        ("TINYINT", Int),
        ("SMALLINT", Int),
        ("MEDIUMINT", Int),
        ("INT", Int),
        ("INTEGER", Int),
        ("BIGINT", Int),
        ("TINYINT UNSIGNED", IntUnsigned),
        ("SMALLINT UNSIGNED", IntUnsigned),
        ("MEDIUMINT UNSIGNED", IntUnsigned),
        ("INT UNSIGNED", IntUnsigned),
        ("INTEGER UNSIGNED", IntUnsigned),
        ("BIGINT UNSIGNED", IntUnsigned),
        ("FLOAT", Float),
        ("FLOAT UNSIGNED", Float),
        ("DOUBLE", Double),
        ("DOUBLE UNSIGNED", Double),
        ("REAL", Double),
        ("DECIMAL", Decimal),
        ("DECIMAL UNSIGNED", Decimal),
        ("NUMERIC", Decimal),
        ("YEAR", Year),
        ("DATE", Date),
        ("DATETIME", Timestamp),
        ("TIMESTAMP", Timestamp),
        ("TIME", Time),
        ("JSON", Json),
        ("BIT", Bit),
        ("ENUM", Enum),
        ("SET", Set),
        ("CHAR", Char),
        ("VARCHAR", VarChar),
        ("TINYTEXT", String),
        ("TEXT", String),
        ("MEDIUMTEXT", String),
        ("LONGTEXT", String),
        ("BINARY", Binary),
        ("VARBINARY", Binary),
        ("TINYBLOB", Blob),
        ("BLOB", Blob),
        ("MEDIUMBLOB", Blob),
        ("LONGBLOB", Blob),
        ("GEOMETRY", Geometry),
        ("POINT", Geometry),
        ("LINESTRING", Geometry),
        ("POLYGON", Geometry),
    ];

    let mut map = HashMap::new();
    for (name, data_type) in entries {
        map.insert(name, data_type);
    }
    map
}
