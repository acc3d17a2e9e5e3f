pub mod csv2parquet;
pub mod head;
pub mod info;
pub mod merge;
