pub mod adjust;
pub mod grid;
