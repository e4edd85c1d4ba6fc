//! 盤面表現モジュール
//!
//! チェスの盤面を表現し、手の実行を行う。
//!
//! - `Board`: 8x8の盤面配列（64マスが常に初期化済み）
//! - `apply_move`: 手を適用した新しい盤面を返す（値セマンティクス）
//! - ASCII形式の解析・出力（`ascii`モジュール）
//!
//! 盤面はキャスリング権・アンパッサン・手数カウンタを持たない。
//! 手番は盤面の外で引数として引き回す。

mod ascii;

pub use ascii::BoardParseError;

use crate::types::{Color, Move, Piece, PieceType, Square};

/// 盤面（8x8、行優先）
///
/// 各マスは `Piece`（空マスは `Piece::NONE`）。手の適用は常に新しい
/// `Board` 値を返すため、探索木の兄弟枝の間で盤面が共有されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; Square::NUM],
}

impl Board {
    /// 空の盤面
    pub const fn empty() -> Board {
        Board { cells: [Piece::NONE; Square::NUM] }
    }

    /// 標準の初期配置
    pub const fn initial() -> Board {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];
        let mut cells = [Piece::NONE; Square::NUM];
        let mut col = 0;
        while col < 8 {
            // row 0-1 が黒陣、row 6-7 が白陣
            cells[col] = Piece::new(Color::Black, BACK_RANK[col]);
            cells[8 + col] = Piece::new(Color::Black, PieceType::Pawn);
            cells[48 + col] = Piece::new(Color::White, PieceType::Pawn);
            cells[56 + col] = Piece::new(Color::White, BACK_RANK[col]);
            col += 1;
        }
        Board { cells }
    }

    /// 指定マスの駒を取得
    #[inline]
    pub const fn piece_on(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// 指定マスに駒を置く（空マスにするには`Piece::NONE`）
    #[inline]
    pub const fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = piece;
    }

    /// 指定した手番のキングのマスを探す（行優先で最初の一致）
    ///
    /// 見つからない場合は`None`。王手判定側はこれを「王手されている」
    /// 扱いにフォールバックする。
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceType::King);
        Square::all().find(|&sq| self.piece_on(sq) == king)
    }

    /// 手を適用した新しい盤面を返す
    ///
    /// 合法性チェックは行わない全域関数。合法性の責務は指し手生成側にある。
    /// - ポーンが敵陣最終段に到達した場合は無条件に同色クイーンへ置換
    /// - キングが横に2マス動く手はキャスリングとみなし、対応する
    ///   ルークも無条件に移動させる（生成側が正当な局面でのみこの手を
    ///   提示している前提）
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut board = self.clone();
        let from = mv.from();
        let to = mv.to();
        let piece = board.piece_on(from);
        board.put_piece(to, piece);
        board.put_piece(from, Piece::NONE);

        if piece.is_none() {
            return board;
        }

        // ポーンの強制クイーン成り
        if piece.piece_type() == PieceType::Pawn && to.row() == piece.color().promotion_row() {
            board.put_piece(to, Piece::new(piece.color(), PieceType::Queen));
        }

        // キャスリング: キングの横2マス移動でルークを随伴させる
        if piece.piece_type() == PieceType::King && to.col().abs_diff(from.col()) == 2 {
            let (rook_from, rook_to) = if to.col() > from.col() {
                // キングサイド: h筋のルークをキングの左隣へ
                (
                    Square::from_row_col(from.row(), 7),
                    Square::from_row_col(from.row(), to.col() - 1),
                )
            } else {
                // クイーンサイド: a筋のルークをキングの右隣へ
                (
                    Square::from_row_col(from.row(), 0),
                    Square::from_row_col(from.row(), to.col() + 1),
                )
            };
            if let (Some(rf), Some(rt)) = (rook_from, rook_to) {
                let rook = board.piece_on(rf);
                board.put_piece(rt, rook);
                board.put_piece(rf, Piece::NONE);
            }
        }

        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}
