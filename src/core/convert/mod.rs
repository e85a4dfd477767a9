pub mod config;
pub mod converter;

pub use config::{ConvertConfig, DatasetSplit};
pub use converter::{convert, ConversionReport};

#[cfg(test)]
pub mod __tests__;
