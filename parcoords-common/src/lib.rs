pub mod error;
pub mod table;
pub mod types;
pub mod value;
