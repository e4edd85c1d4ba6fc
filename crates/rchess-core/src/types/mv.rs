//! 指し手（Move）
//!
//! 移動元・移動先のみを持つ16bit表現。成り・キャスリング・駒取りの
//! フラグは持たず、実行時（`Board::apply_move`）に駒と幾何から推定する。
//!
//! - bit 0-5:  移動先 (to)
//! - bit 6-11: 移動元 (from)
//! - bit 12-15: 予約

use serde::{Deserialize, Serialize};

use super::{NotationError, Square};

/// 指し手（16bit）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    const TO_MASK: u16 = 0x003F; // bit 0-5
    const FROM_SHIFT: u16 = 6;

    /// 移動元と移動先から生成
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move((to.raw() as u16) | ((from.raw() as u16) << Self::FROM_SHIFT))
    }

    /// 移動元を取得
    #[inline]
    pub const fn from(self) -> Square {
        // SAFETY: from は 0-63 の範囲（6bit）
        unsafe { Square::from_u8_unchecked((self.0 >> Self::FROM_SHIFT) as u8 & 0x3F) }
    }

    /// 移動先を取得
    #[inline]
    pub const fn to(self) -> Square {
        // SAFETY: to は 0-63 の範囲（6bit）
        unsafe { Square::from_u8_unchecked((self.0 & Self::TO_MASK) as u8) }
    }

    /// UCI形式の文字列（"e2e4"等）に変換
    pub fn to_uci(self) -> String {
        format!("{}{}", self.from(), self.to())
    }

    /// UCI形式の文字列からMoveに変換
    ///
    /// 4文字未満は`TooShort`。4文字を超える部分は無視する。
    pub fn from_uci(s: &str) -> Result<Move, NotationError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 4 {
            return Err(NotationError::TooShort { len: chars.len() });
        }
        let from = Square::from_algebraic(&chars[0..2].iter().collect::<String>())?;
        let to = Square::from_algebraic(&chars[2..4].iter().collect::<String>())?;
        Ok(Move::new(from, to))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

// JSONではUCI文字列として扱う。内部のビット配置は表現に出さない
impl Serialize for Move {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_uci())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Move, D::Error> {
        let s = String::deserialize(deserializer)?;
        Move::from_uci(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn test_move_new() {
        let m = Move::new(sq("e2"), sq("e4"));
        assert_eq!(m.from(), sq("e2"));
        assert_eq!(m.to(), sq("e4"));
    }

    #[test]
    fn test_move_uci_roundtrip() {
        let m = Move::new(sq("g1"), sq("f3"));
        assert_eq!(m.to_uci(), "g1f3");
        assert_eq!(Move::from_uci("g1f3").unwrap(), m);
    }

    #[test]
    fn test_move_from_uci_too_short() {
        assert!(matches!(Move::from_uci(""), Err(NotationError::TooShort { len: 0 })));
        assert!(matches!(Move::from_uci("e2e"), Err(NotationError::TooShort { len: 3 })));
    }

    #[test]
    fn test_move_from_uci_out_of_range() {
        assert!(matches!(Move::from_uci("i2e4"), Err(NotationError::InvalidFile('i'))));
        assert!(matches!(Move::from_uci("e9e4"), Err(NotationError::InvalidRank('9'))));
        assert!(matches!(Move::from_uci("e2e0"), Err(NotationError::InvalidRank('0'))));
    }

    #[test]
    fn test_move_serde_uses_uci_form() {
        let m = Move::new(sq("e2"), sq("e4"));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#""e2e4""#);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<Move>(r#""e9e4""#).is_err());
    }

    #[test]
    fn test_move_from_uci_ignores_trailing() {
        // 5文字目以降（成り指定等）は無視される
        assert_eq!(Move::from_uci("e7e8q").unwrap(), Move::new(sq("e7"), sq("e8")));
    }
}
