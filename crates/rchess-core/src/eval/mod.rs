//! 局面評価モジュール

mod material;

pub use material::{evaluate, piece_value};
