//! 終局判定
//!
//! 手番側の合法手が尽きたとき、王手されていればチェックメイト、
//! そうでなければステイルメイトと分類する。

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::movegen::{in_check, legal_moves};
use crate::types::Color;

/// 局面の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// 継続中
    Ongoing,
    /// 手番側がチェックメイトされた
    Checkmate,
    /// ステイルメイト（引き分け）
    Stalemate,
}

impl GameStatus {
    /// 終局かどうか
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// `color`の手番として局面を分類する
pub fn game_status(board: &Board, color: Color) -> GameStatus {
    if !legal_moves(board, color).is_empty() {
        return GameStatus::Ongoing;
    }
    if in_check(board, color) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}
