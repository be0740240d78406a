pub mod batch;
pub mod cram;
pub mod grid;
