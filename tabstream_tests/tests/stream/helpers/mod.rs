pub mod gen;
pub mod mem_table;
