//! 升目（Square）

use serde::{Deserialize, Serialize};

use super::{File, NotationError, Rank};

/// 升目（0-63）
///
/// 配置: 行優先（row-major）
/// index = row * 8 + col。row 0 が黒陣最終段（8段）、col 0 がa筋。
/// a8=0, b8=1, ..., h8=7, a7=8, ..., h1=63
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 64;

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank.row() * 8 + file as u8)
    }

    /// 行・列からSquareを生成（範囲チェックあり）
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// 行を取得（0-7。0が黒陣最終段）
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// 列を取得（0-7。0がa筋）
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        // SAFETY: self.0 % 8 は 0..=7 なので有効なFile値
        unsafe { std::mem::transmute(self.0 % 8) }
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        // SAFETY: 7 - self.0 / 8 は 0..=7 なので有効なRank値
        unsafe { std::mem::transmute(7 - self.0 / 8) }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < 64 {
            Some(Square(n))
        } else {
            None
        }
    }

    /// u8から生成（範囲チェックなし）
    ///
    /// # Safety
    /// n < 64 でなければならない
    #[inline]
    pub const unsafe fn from_u8_unchecked(n: u8) -> Square {
        debug_assert!(n < 64);
        Square(n)
    }

    /// 行・列方向のオフセットを加えた升目を返す（盤外ならNone）
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row() as i8 + dr;
        let col = self.col() as i8 + dc;
        if 0 <= row && row < 8 && 0 <= col && col < 8 {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    /// 代数記法の文字列（"e2"等）に変換
    pub fn to_algebraic(self) -> String {
        let file = self.file().to_char();
        let rank = self.rank().to_char();
        format!("{file}{rank}")
    }

    /// 代数記法の文字列からSquareに変換
    ///
    /// 2文字未満は`TooShort`、筋・段が範囲外の文字は
    /// `InvalidFile` / `InvalidRank`を返す。
    pub fn from_algebraic(s: &str) -> Result<Square, NotationError> {
        let mut chars = s.chars();
        let fc = chars.next().ok_or(NotationError::TooShort { len: s.chars().count() })?;
        let rc = chars.next().ok_or(NotationError::TooShort { len: s.chars().count() })?;
        let file = File::from_char(fc).ok_or(NotationError::InvalidFile(fc))?;
        let rank = Rank::from_char(rc).ok_or(NotationError::InvalidRank(rc))?;
        Ok(Square::new(file, rank))
    }

    /// 全ての升を返すイテレータ（行優先順）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

// JSONでは代数記法の文字列として扱う。復元時に範囲も検証される
impl Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_algebraic())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        let s = String::deserialize(deserializer)?;
        Square::from_algebraic(&s).map_err(serde::de::Error::custom)
    }
}
