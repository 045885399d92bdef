// Roel Kluin, 2023, GPL v3

pub mod base;
pub mod node;
pub mod slot;
