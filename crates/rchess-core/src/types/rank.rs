//! 段（Rank）
//!
//! 盤の内部表現は行（row）ベースで、row 0 が黒陣最終段＝8段に対応する。
//! 代数記法の段数字（'1'-'8'）との変換はこの型が担う。

use serde::{Deserialize, Serialize};

/// 段（1段〜8段。1段が白陣側、8段が黒陣側）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 8;

    /// 全ての段
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// u8からRankに変換（0-7）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Rank> {
        if n < 8 {
            // SAFETY: n < 8 なので有効なRank値
            Some(unsafe { std::mem::transmute::<u8, Rank>(n) })
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 対応する行番号（row 0 = 8段）
    #[inline]
    pub const fn row(self) -> u8 {
        7 - self as u8
    }

    /// 行番号からRankに変換（0-7）
    #[inline]
    pub const fn from_row(row: u8) -> Option<Rank> {
        if row < 8 {
            Rank::from_u8(7 - row)
        } else {
            None
        }
    }

    /// 代数記法の文字（'1'-'8'）に変換
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// 代数記法の文字からRankに変換
    #[inline]
    pub const fn from_char(c: char) -> Option<Rank> {
        let n = (c as u8).wrapping_sub(b'1');
        Rank::from_u8(n)
    }
}
