//! 盤面のASCII形式
//!
//! 8行×8文字のテキストと`Board`を相互変換する。白は大文字、黒は小文字、
//! 空マスは'.'。1行目が8段（黒陣）、8行目が1段（白陣）。
//! テスト用の局面構築と、テキストフロントエンドの盤面表示に使う。

use thiserror::Error;

use super::Board;
use crate::types::{Piece, Square};

/// ASCII形式の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    /// 行数が8でない
    #[error("expected 8 rows, got {0}")]
    BadRowCount(usize),
    /// 行の文字数が8でない
    #[error("row {row} has {len} cells, expected 8")]
    BadRowLength { row: usize, len: usize },
    /// 駒として解釈できない文字
    #[error("invalid piece char {ch:?} at row {row}")]
    BadPieceChar { row: usize, ch: char },
}

impl Board {
    /// ASCII形式の文字列から盤面を構築する
    ///
    /// 行は改行区切り。行内の空白は無視する（桁揃え用の空白を許す）。
    pub fn from_ascii(s: &str) -> Result<Board, BoardParseError> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != 8 {
            return Err(BoardParseError::BadRowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(BoardParseError::BadRowLength { row, len: cells.len() });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let piece = Piece::from_char(ch)
                    .ok_or(BoardParseError::BadPieceChar { row, ch })?;
                // row/col は 0..8 の範囲なので必ず Some
                if let Some(sq) = Square::from_row_col(row as u8, col as u8) {
                    board.put_piece(sq, piece);
                }
            }
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    /// 段・筋のラベル付きでASCII表示する
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                // 0..8 の範囲なので必ず Some
                let piece = Square::from_row_col(row, col)
                    .map(|sq| self.piece_on(sq))
                    .unwrap_or(Piece::NONE);
                write!(f, " {}", piece.to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn test_from_ascii_initial() {
        let board = Board::from_ascii(
            "rnbqkbnr\n\
             pppppppp\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             PPPPPPPP\n\
             RNBQKBNR",
        )
        .unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_from_ascii_with_spacing() {
        // 空白で桁揃えした表記も受け付ける
        let board = Board::from_ascii(
            ". . . . k . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . . . . .\n\
             . . . . K . . .",
        )
        .unwrap();
        assert_eq!(board.king_square(Color::White).unwrap().to_algebraic(), "e1");
        assert_eq!(board.king_square(Color::Black).unwrap().to_algebraic(), "e8");
    }

    #[test]
    fn test_from_ascii_errors() {
        assert!(matches!(
            Board::from_ascii("........"),
            Err(BoardParseError::BadRowCount(1))
        ));
        let short_row = ".......\n........\n........\n........\n\
                         ........\n........\n........\n........";
        assert!(matches!(
            Board::from_ascii(short_row),
            Err(BoardParseError::BadRowLength { row: 0, len: 7 })
        ));
        let bad_char = "x.......\n........\n........\n........\n\
                        ........\n........\n........\n........";
        assert!(matches!(
            Board::from_ascii(bad_char),
            Err(BoardParseError::BadPieceChar { row: 0, ch: 'x' })
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        let board = Board::initial();
        let text = board.to_string();
        // 表示にはラベルが含まれるが、駒文字部分だけ拾えば復元できる
        let body: String = text
            .lines()
            .take(8)
            .map(|l| l[2..].to_string())
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(Board::from_ascii(&body).unwrap(), board);
    }
}
