pub mod json_writer;

pub use json_writer::{records_to_string, write_records, JsonLayout};
