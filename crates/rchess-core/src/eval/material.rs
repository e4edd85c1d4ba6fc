//! マテリアル評価
//!
//! 盤上の全マスを走査し、駒種ごとの固定値を符号付きで合計する。
//! 白有利が正、黒有利が負。位置・駒の働き・王の安全度などの項は持たない。
//! 決定的で O(64)。

use crate::board::Board;
use crate::types::{Color, Piece, PieceType, Value};

/// 駒種ごとのマテリアル値
///
/// ポーン1、ナイト・ビショップ3、ルーク5、クイーン9、キング1000。
/// キングの値は「キングを失った側が必ず劣る」ことを保証するための
/// 番兵で、通常の駒の交換値とは桁を分けてある。
#[inline]
pub const fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 1,
        PieceType::Knight => 3,
        PieceType::Bishop => 3,
        PieceType::Rook => 5,
        PieceType::Queen => 9,
        PieceType::King => 1000,
    }
}

/// 駒の符号付きマテリアル値（白が正、黒が負、空マスは0）
#[inline]
const fn signed_value(piece: Piece) -> i32 {
    if piece.is_none() {
        return 0;
    }
    let v = piece_value(piece.piece_type());
    match piece.color() {
        Color::White => v,
        Color::Black => -v,
    }
}

/// 盤面をマテリアル合計で評価する
pub fn evaluate(board: &Board) -> Value {
    let mut score = 0;
    for sq in crate::types::Square::all() {
        score += signed_value(board.piece_on(sq));
    }
    Value::new(score)
}
