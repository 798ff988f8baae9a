pub mod runner;
pub mod schema;
pub mod table;
