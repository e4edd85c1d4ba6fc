//! Alpha-Beta探索の実装
//!
//! 白を最大化側、黒を最小化側とする素朴なミニマックス。
//! 兄弟枝の間で盤面を共有しない（`apply_move`が常に新しい値を返す）ため、
//! 巻き戻し処理は不要。再帰深さは呼び出し側が渡す`depth`で上から
//! 抑えられる。

use log::debug;

use crate::board::Board;
use crate::eval::evaluate;
use crate::movegen::legal_moves;
use crate::types::{Color, Move, Value};

/// ルート局面から探索する（初期ウィンドウは±∞）
///
/// `maximizing = true`なら白番、`false`なら黒番の手を探す。
pub fn search_root(board: &Board, depth: u32, maximizing: bool) -> (Value, Option<Move>) {
    let (score, best) = search(board, depth, -Value::INFINITE, Value::INFINITE, maximizing);
    debug!(
        "search depth={} side={} score={} best={}",
        depth,
        if maximizing { Color::White } else { Color::Black },
        score.raw(),
        best.map_or_else(|| "none".to_string(), |m| m.to_uci()),
    );
    (score, best)
}

/// アルファベータ探索
///
/// - 終端: `depth == 0`または手番側に合法手がないとき、
///   `(evaluate(board), None)`を返す（詰み・ステイルメイトの区別は
///   しない。上位の`game_status`が担う）
/// - それ以外: 合法手を生成順に適用して再帰し、最大化側はα、
///   最小化側はβを更新する。`beta <= alpha`になった時点で残りの
///   兄弟手を打ち切る（枝刈りはルートの返り値を変えない）
/// - 最善手の更新は厳密な大小比較（同点なら先に見つかった手を保持）
pub fn search(
    board: &Board,
    depth: u32,
    mut alpha: Value,
    mut beta: Value,
    maximizing: bool,
) -> (Value, Option<Move>) {
    let color = if maximizing { Color::White } else { Color::Black };
    let moves = legal_moves(board, color);
    if depth == 0 || moves.is_empty() {
        return (evaluate(board), None);
    }

    let mut best_move = None;
    if maximizing {
        let mut max_score = -Value::INFINITE;
        for mv in moves {
            let next = board.apply_move(mv);
            let (score, _) = search(&next, depth - 1, alpha, beta, false);
            if score > max_score {
                max_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (max_score, best_move)
    } else {
        let mut min_score = Value::INFINITE;
        for mv in moves {
            let next = board.apply_move(mv);
            let (score, _) = search(&next, depth - 1, alpha, beta, true);
            if score < min_score {
                min_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (min_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(s: &str) -> Move {
        Move::from_uci(s).unwrap()
    }

    /// 枝刈りなしの参照実装（テスト専用）
    fn minimax_reference(board: &Board, depth: u32, maximizing: bool) -> Value {
        let color = if maximizing { Color::White } else { Color::Black };
        let moves = legal_moves(board, color);
        if depth == 0 || moves.is_empty() {
            return evaluate(board);
        }
        let mut best = if maximizing { -Value::INFINITE } else { Value::INFINITE };
        for m in moves {
            let score = minimax_reference(&board.apply_move(m), depth - 1, !maximizing);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        best
    }

    #[test]
    fn test_depth_zero_returns_static_eval() {
        let board = Board::initial();
        let (score, best) = search_root(&board, 0, true);
        assert_eq!(score, evaluate(&board));
        assert_eq!(best, None);
    }

    #[test]
    fn test_no_legal_moves_returns_none() {
        // 黒のステイルメイト局面で黒番を探索
        let board = Board::from_ascii(
            "k.......\n\
             ..Q.....\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .......K",
        )
        .unwrap();
        assert!(legal_moves(&board, Color::Black).is_empty());
        let (score, best) = search_root(&board, 3, false);
        assert_eq!(score, evaluate(&board));
        assert_eq!(best, None);
    }

    #[test]
    fn test_depth_one_takes_winning_capture() {
        // 白ルークがぶら下がりの黒クイーンを取れる唯一の駒得手を持つ
        let board = Board::from_ascii(
            "....k...\n\
             ........\n\
             ........\n\
             .q......\n\
             ........\n\
             ........\n\
             ........\n\
             .R..K...",
        )
        .unwrap();
        let (score, best) = search_root(&board, 1, true);
        assert_eq!(best, Some(mv("b1b5")));
        // クイーンを取った後のマテリアル: ルーク5が残り、クイーン-9が消える
        assert_eq!(score, evaluate(&board.apply_move(mv("b1b5"))));
    }

    #[test]
    fn test_minimizing_side_prefers_lower_score() {
        // 黒ルークがぶら下がりの白クイーンを取れる
        let board = Board::from_ascii(
            ".r..k...\n\
             ........\n\
             ........\n\
             .Q......\n\
             ........\n\
             ........\n\
             ........\n\
             ....K...",
        )
        .unwrap();
        let (score, best) = search_root(&board, 1, false);
        assert_eq!(best, Some(mv("b8b5")));
        assert!(score < Value::ZERO);
    }

    #[test]
    fn test_pruning_matches_reference_minimax() {
        // 枝刈りは返り値を変えず、探索量だけを減らす
        let boards = [
            Board::initial(),
            Board::from_ascii(
                "....k...\n\
                 ........\n\
                 ........\n\
                 .q......\n\
                 ........\n\
                 ....n...\n\
                 ........\n\
                 .R..K...",
            )
            .unwrap(),
        ];
        for board in &boards {
            for depth in 0..=3 {
                for maximizing in [true, false] {
                    let (pruned, _) =
                        search(board, depth, -Value::INFINITE, Value::INFINITE, maximizing);
                    let exhaustive = minimax_reference(board, depth, maximizing);
                    assert_eq!(
                        pruned, exhaustive,
                        "depth={depth} maximizing={maximizing} mismatch"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tie_keeps_earlier_move() {
        // 評価が全て同点の静かな局面では、生成順で最初の手が選ばれる
        let board = Board::initial();
        let moves = legal_moves(&board, Color::White);
        let (_, best) = search_root(&board, 1, true);
        assert_eq!(best, Some(moves[0]));
    }

    #[test]
    fn test_search_resolves_check_by_best_capture() {
        // 白は王手されており、応手は Kxe2 / Kd1 / Kf1 のみ。
        // 深さ2ではルークを取る Kxe2 が最善（取り返しはない）
        let board = Board::from_ascii(
            "....k...\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ....r...\n\
             Q...K...",
        )
        .unwrap();
        assert_eq!(legal_moves(&board, Color::White).len(), 3);
        let (score, best) = search_root(&board, 2, true);
        assert_eq!(best, Some(mv("e1e2")));
        assert_eq!(score, Value::new(9));
    }
}
