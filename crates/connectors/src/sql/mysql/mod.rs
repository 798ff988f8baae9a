pub mod adapter;
pub mod connection;
pub mod data_type;
pub mod row;
