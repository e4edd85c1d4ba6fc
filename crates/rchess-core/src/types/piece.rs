//! 駒（Piece）と駒種（PieceType）
//!
//! `Piece` の内部表現は4bitラッパー。
//! - bit 0-2: `PieceType`（1..=6）。0 は `Piece::NONE` のみで使用される。
//! - bit 3:   `Color`（0 = White, 1 = Black）。
//!
//! `Piece::NONE` 以外の値は常に有効な `PieceType` / `Color` の組み合わせで
//! あることを前提とする。`piece_type()` / `color()` を呼び出す前に
//! `is_none()` を避けるのが契約。空マスは `Piece::NONE` で表し、
//! `Option<Piece>` は盤面表現には使わない。

use serde::{Deserialize, Serialize};

use super::Color;

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// 駒種の数
    pub const NUM: usize = 6;

    /// 全ての駒種
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// 遠方駒（ビショップ・ルーク・クイーン）かどうか
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// 駒種を表すASCII文字（大文字）
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒なし（空マス）
    pub const NONE: Piece = Piece(0);

    // 白の駒
    pub const W_PAWN: Piece = Piece(1);
    pub const W_KNIGHT: Piece = Piece(2);
    pub const W_BISHOP: Piece = Piece(3);
    pub const W_ROOK: Piece = Piece(4);
    pub const W_QUEEN: Piece = Piece(5);
    pub const W_KING: Piece = Piece(6);

    // 黒の駒（+8）
    pub const B_PAWN: Piece = Piece(9);
    pub const B_KNIGHT: Piece = Piece(10);
    pub const B_BISHOP: Piece = Piece(11);
    pub const B_ROOK: Piece = Piece(12);
    pub const B_QUEEN: Piece = Piece(13);
    pub const B_KING: Piece = Piece(14);

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(piece_type as u8 | ((color as u8) << 3))
    }

    /// 駒種を取得
    ///
    /// `NONE`に対して呼んではならない（`is_none()`で判定すること）
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(!self.is_none());
        // SAFETY: NONE以外なら self.0 & 0x07 は 1..=6 で有効なPieceType値
        unsafe { std::mem::transmute(self.0 & 0x07) }
    }

    /// 手番を取得
    ///
    /// `NONE`に対して呼んではならない
    #[inline]
    pub const fn color(self) -> Color {
        debug_assert!(!self.is_none());
        // SAFETY: (self.0 >> 3) & 1 は 0 or 1 なので有効なColor値
        unsafe { std::mem::transmute((self.0 >> 3) & 1) }
    }

    /// 駒がないか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// 駒があるか
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 指定した手番の駒かどうか（空マスはfalse）
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.is_some() && (self.0 >> 3) == color as u8
    }

    /// 指定した手番・駒種の駒かどうか
    #[inline]
    pub const fn is(self, color: Color, piece_type: PieceType) -> bool {
        self.0 == Piece::new(color, piece_type).0
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// ASCII表現（白は大文字、黒は小文字、空マスは'.'）
    pub const fn to_char(self) -> char {
        if self.is_none() {
            return '.';
        }
        let c = self.piece_type().to_char();
        match self.color() {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// ASCII表現からの変換（`to_char`の逆。'.'は`NONE`）
    pub const fn from_char(c: char) -> Option<Piece> {
        if c == '.' {
            return Some(Piece::NONE);
        }
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let pt = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'N' => PieceType::Knight,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'Q' => PieceType::Queen,
            'K' => PieceType::King,
            _ => return None,
        };
        Some(Piece::new(color, pt))
    }
}

// JSONではASCII表現の1文字として扱う。復元時に不正な値を弾く
impl Serialize for Piece {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.to_char())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Piece, D::Error> {
        let c = char::deserialize(deserializer)?;
        Piece::from_char(c)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid piece char {c:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_new() {
        assert_eq!(Piece::new(Color::White, PieceType::Pawn), Piece::W_PAWN);
        assert_eq!(Piece::new(Color::Black, PieceType::King), Piece::B_KING);
    }

    #[test]
    fn test_piece_accessors() {
        let p = Piece::B_QUEEN;
        assert_eq!(p.piece_type(), PieceType::Queen);
        assert_eq!(p.color(), Color::Black);
        assert!(p.is_some());
        assert!(!p.is_none());
        assert!(p.is_color(Color::Black));
        assert!(!p.is_color(Color::White));
        assert!(p.is(Color::Black, PieceType::Queen));
        assert!(!p.is(Color::White, PieceType::Queen));
    }

    #[test]
    fn test_piece_none() {
        assert!(Piece::NONE.is_none());
        assert!(!Piece::NONE.is_color(Color::White));
        assert!(!Piece::NONE.is_color(Color::Black));
    }

    #[test]
    fn test_piece_char_roundtrip() {
        assert_eq!(Piece::W_KING.to_char(), 'K');
        assert_eq!(Piece::B_KING.to_char(), 'k');
        assert_eq!(Piece::NONE.to_char(), '.');
        for p in [
            Piece::W_PAWN,
            Piece::W_KNIGHT,
            Piece::W_BISHOP,
            Piece::W_ROOK,
            Piece::W_QUEEN,
            Piece::W_KING,
            Piece::B_PAWN,
            Piece::B_KNIGHT,
            Piece::B_BISHOP,
            Piece::B_ROOK,
            Piece::B_QUEEN,
            Piece::B_KING,
            Piece::NONE,
        ] {
            assert_eq!(Piece::from_char(p.to_char()), Some(p));
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_piece_serde_uses_char_form() {
        let json = serde_json::to_string(&Piece::B_QUEEN).unwrap();
        assert_eq!(json, r#""q""#);
        let back: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Piece::B_QUEEN);
        assert_eq!(serde_json::from_str::<Piece>(r#"".""#).unwrap(), Piece::NONE);
        assert!(serde_json::from_str::<Piece>(r#""x""#).is_err());
    }

    #[test]
    fn test_piece_type_is_slider() {
        assert!(PieceType::Bishop.is_slider());
        assert!(PieceType::Rook.is_slider());
        assert!(PieceType::Queen.is_slider());
        assert!(!PieceType::Pawn.is_slider());
        assert!(!PieceType::Knight.is_slider());
        assert!(!PieceType::King.is_slider());
    }
}
