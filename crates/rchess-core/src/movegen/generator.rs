//! 指し手生成器
//!
//! 盤面を行優先で走査し、駒種ごとに固定順の方向テーブルで候補手を
//! 列挙する。生成順は決定的（同一局面・同一手番なら常に同じ並び）。

use crate::board::Board;
use crate::types::{Color, Move, PieceType, Square};

/// ナイトの跳び先オフセット（行, 列）
const KNIGHT_OFFSETS: [(i8, i8); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

/// ビショップの走査方向
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// ルークの走査方向
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// クイーンの走査方向（斜め4方向の後に縦横4方向）
const QUEEN_DIRECTIONS: [(i8, i8); 8] =
    [(-1, -1), (-1, 1), (1, -1), (1, 1), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// キングの移動オフセット
const KING_OFFSETS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// 合法手を生成する
///
/// 擬似合法手のうち、適用後に自玉が相手の利きに入る手を除外したもの。
/// 生成順は`pseudo_legal_moves`の順を保つ。
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    pseudo_legal_moves(board, color)
        .into_iter()
        .filter(|&mv| !in_check(&board.apply_move(mv), color))
        .collect()
}

/// 擬似合法手を生成する
///
/// 駒の幾何と占有ルールのみで列挙し、自玉の安全は考慮しない。
/// キャスリング候補もここで生成される（ホームマスの占有条件のみ）。
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        let piece = board.piece_on(from);
        if !piece.is_color(color) {
            continue;
        }
        match piece.piece_type() {
            PieceType::Pawn => generate_pawn_moves(board, color, from, &mut moves),
            PieceType::Knight => {
                generate_step_moves(board, color, from, &KNIGHT_OFFSETS, &mut moves)
            }
            PieceType::Bishop => {
                generate_slider_moves(board, color, from, &BISHOP_DIRECTIONS, &mut moves)
            }
            PieceType::Rook => {
                generate_slider_moves(board, color, from, &ROOK_DIRECTIONS, &mut moves)
            }
            PieceType::Queen => {
                generate_slider_moves(board, color, from, &QUEEN_DIRECTIONS, &mut moves)
            }
            PieceType::King => {
                generate_step_moves(board, color, from, &KING_OFFSETS, &mut moves);
                generate_castling_moves(board, color, from, &mut moves);
            }
        }
    }
    moves
}

/// 王手判定
///
/// `color`のキングのマスが相手の利き集合に含まれるかを返す。
/// キングが盤上にいない場合は王手扱い（エラーにはしない防御的
/// フォールバック。不正局面の検出は上位の責務）。
pub fn in_check(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(ksq) => attacks_square(board, color.opponent(), ksq),
        None => true,
    }
}

/// `color`側の駒が`target`に利きを持つか
///
/// 合法手生成と同じ駒種別の幾何を使うが、自己王手の再帰フィルタは
/// かけない（相互再帰の回避）。ポーンは斜めの利きのみを数え、
/// 前進は利きに含めない。
pub(crate) fn attacks_square(board: &Board, color: Color, target: Square) -> bool {
    for from in Square::all() {
        let piece = board.piece_on(from);
        if !piece.is_color(color) {
            continue;
        }
        let hit = match piece.piece_type() {
            PieceType::Pawn => {
                let d = color.forward();
                from.offset(d, -1) == Some(target) || from.offset(d, 1) == Some(target)
            }
            PieceType::Knight => step_reaches(from, &KNIGHT_OFFSETS, target),
            PieceType::Bishop => ray_reaches(board, from, &BISHOP_DIRECTIONS, target),
            PieceType::Rook => ray_reaches(board, from, &ROOK_DIRECTIONS, target),
            PieceType::Queen => ray_reaches(board, from, &QUEEN_DIRECTIONS, target),
            PieceType::King => step_reaches(from, &KING_OFFSETS, target),
        };
        if hit {
            return true;
        }
    }
    false
}

/// ポーンの指し手を生成
///
/// 前進1マス（空マスのみ）、初期配置行からの前進2マス（中間・移動先とも
/// 空マスのみ）、斜め前の駒取り（相手駒がいる場合のみ）。アンパッサンなし。
fn generate_pawn_moves(board: &Board, color: Color, from: Square, moves: &mut Vec<Move>) {
    let d = color.forward();

    if let Some(to) = from.offset(d, 0) {
        if board.piece_on(to).is_none() {
            moves.push(Move::new(from, to));
            if from.row() == color.pawn_row() {
                if let Some(to2) = from.offset(2 * d, 0) {
                    if board.piece_on(to2).is_none() {
                        moves.push(Move::new(from, to2));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(d, dc) {
            let target = board.piece_on(to);
            if target.is_color(color.opponent()) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// 跳び駒（ナイト・キング）の指し手を生成
///
/// 移動先が空マスか相手駒なら許可。
fn generate_step_moves(
    board: &Board,
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            let target = board.piece_on(to);
            if target.is_none() || target.is_color(color.opponent()) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

/// 遠方駒（ビショップ・ルーク・クイーン）の指し手を生成
///
/// 各方向へ盤端か駒に当たるまで走査する。相手駒のマスは含めて打ち切り、
/// 自駒のマスは含めずに打ち切る。
fn generate_slider_moves(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            let target = board.piece_on(to);
            if target.is_none() {
                moves.push(Move::new(from, to));
            } else {
                if target.is_color(color.opponent()) {
                    moves.push(Move::new(from, to));
                }
                break;
            }
            cur = to;
        }
    }
}

/// 簡易キャスリングの候補を生成
///
/// キングがホームマス（e1/e8）にいて、対応するルークのホームマスに
/// 同色ルークがあり、間のマスが全て空のときに許可する。
/// キングの通過マス・移動先が利きにあるかは検査しない簡易ルール。
/// 「動かした履歴」も追跡しない。
fn generate_castling_moves(board: &Board, color: Color, from: Square, moves: &mut Vec<Move>) {
    let row = color.home_row();
    if from.row() != row || from.col() != 4 {
        return;
    }
    let rook = crate::types::Piece::new(color, PieceType::Rook);

    // キングサイド: f・gが空、hにルーク
    let path_clear = [5u8, 6]
        .iter()
        .all(|&c| Square::from_row_col(row, c).is_some_and(|sq| board.piece_on(sq).is_none()));
    if path_clear && Square::from_row_col(row, 7).is_some_and(|sq| board.piece_on(sq) == rook) {
        if let Some(to) = Square::from_row_col(row, 6) {
            moves.push(Move::new(from, to));
        }
    }

    // クイーンサイド: b・c・dが空、aにルーク
    let path_clear = [3u8, 2, 1]
        .iter()
        .all(|&c| Square::from_row_col(row, c).is_some_and(|sq| board.piece_on(sq).is_none()));
    if path_clear && Square::from_row_col(row, 0).is_some_and(|sq| board.piece_on(sq) == rook) {
        if let Some(to) = Square::from_row_col(row, 2) {
            moves.push(Move::new(from, to));
        }
    }
}

/// 固定オフセットで`target`に届くか
fn step_reaches(from: Square, offsets: &[(i8, i8)], target: Square) -> bool {
    offsets.iter().any(|&(dr, dc)| from.offset(dr, dc) == Some(target))
}

/// 走査方向のいずれかで`target`に届くか（途中の駒で遮られたら不可）
fn ray_reaches(board: &Board, from: Square, directions: &[(i8, i8)], target: Square) -> bool {
    for &(dr, dc) in directions {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            if to == target {
                return true;
            }
            if board.piece_on(to).is_some() {
                break;
            }
            cur = to;
        }
    }
    false
}
