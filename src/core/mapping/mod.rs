pub mod mapping_table;

pub use mapping_table::{load_mapping, parse_mapping, MappingTable};

#[cfg(test)]
pub mod __tests__;
