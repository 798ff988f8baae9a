use model::core::data_type::DataType;
use mysql_async::Column;
use mysql_common::constants::{ColumnFlags, ColumnType};

/// Collation id MySQL reports for binary strings and blobs.
const BINARY_CHARSET: u16 = 63;

pub trait MySqlColumnDataType {
    fn from_mysql_column(column: &Column) -> DataType;
}

impl MySqlColumnDataType for DataType {
    fn from_mysql_column(column: &Column) -> DataType {
        let flags = column.flags();
        let unsigned = flags.contains(ColumnFlags::UNSIGNED_FLAG);
        let binary = column.character_set() == BINARY_CHARSET;

        match column.column_type() {
            ColumnType::MYSQL_TYPE_TINY
            | ColumnType::MYSQL_TYPE_SHORT
            | ColumnType::MYSQL_TYPE_INT24
            | ColumnType::MYSQL_TYPE_LONG
            | ColumnType::MYSQL_TYPE_LONGLONG => {
                if unsigned {
                    DataType::IntUnsigned
                } else {
                    DataType::Int
                }
            }
            ColumnType::MYSQL_TYPE_YEAR => DataType::Year,
            ColumnType::MYSQL_TYPE_FLOAT => DataType::Float,
            ColumnType::MYSQL_TYPE_DOUBLE => DataType::Double,
            ColumnType::MYSQL_TYPE_DECIMAL | ColumnType::MYSQL_TYPE_NEWDECIMAL => {
                DataType::Decimal
            }
            ColumnType::MYSQL_TYPE_DATE | ColumnType::MYSQL_TYPE_NEWDATE => DataType::Date,
            ColumnType::MYSQL_TYPE_DATETIME
            | ColumnType::MYSQL_TYPE_DATETIME2
            | ColumnType::MYSQL_TYPE_TIMESTAMP
            | ColumnType::MYSQL_TYPE_TIMESTAMP2 => DataType::Timestamp,
            ColumnType::MYSQL_TYPE_TIME | ColumnType::MYSQL_TYPE_TIME2 => DataType::Time,
            ColumnType::MYSQL_TYPE_JSON => DataType::Json,
            ColumnType::MYSQL_TYPE_BIT => DataType::Bit,
            ColumnType::MYSQL_TYPE_ENUM => DataType::Enum,
            ColumnType::MYSQL_TYPE_SET => DataType::Set,
            ColumnType::MYSQL_TYPE_GEOMETRY => DataType::Geometry,
            ColumnType::MYSQL_TYPE_NULL => DataType::Null,
            // ENUM and SET arrive as strings carrying a flag
            ColumnType::MYSQL_TYPE_STRING if flags.contains(ColumnFlags::ENUM_FLAG) => {
                DataType::Enum
            }
            ColumnType::MYSQL_TYPE_STRING if flags.contains(ColumnFlags::SET_FLAG) => {
                DataType::Set
            }
            ColumnType::MYSQL_TYPE_STRING => {
                if binary {
                    DataType::Binary
                } else {
                    DataType::Char
                }
            }
            ColumnType::MYSQL_TYPE_VARCHAR | ColumnType::MYSQL_TYPE_VAR_STRING => {
                if binary {
                    DataType::Binary
                } else {
                    DataType::VarChar
                }
            }
            ColumnType::MYSQL_TYPE_TINY_BLOB
            | ColumnType::MYSQL_TYPE_MEDIUM_BLOB
            | ColumnType::MYSQL_TYPE_LONG_BLOB
            | ColumnType::MYSQL_TYPE_BLOB => {
                if binary {
                    DataType::Blob
                } else {
                    DataType::String
                }
            }
            other => DataType::Custom(format!("{other:?}")),
        }
    }
}
