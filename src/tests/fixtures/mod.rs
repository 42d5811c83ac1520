pub mod records;
pub mod seed;
pub mod state;
