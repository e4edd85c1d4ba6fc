//! 基本型定義
//!
//! - `Color`: 手番（白/黒）
//! - `File` / `Rank` / `Square`: 盤上の座標
//! - `PieceType` / `Piece`: 駒種と駒
//! - `Move`: 指し手（移動元・移動先のみ。成り・キャスリングは実行時に推定）
//! - `Value`: 評価値
//! - `NotationError`: 代数記法の解析エラー

mod color;
mod file;
mod mv;
mod notation;
mod piece;
mod rank;
mod square;
mod value;

pub use color::Color;
pub use file::File;
pub use mv::Move;
pub use notation::NotationError;
pub use piece::{Piece, PieceType};
pub use rank::Rank;
pub use square::Square;
pub use value::Value;
