pub mod mapping_table_test;
