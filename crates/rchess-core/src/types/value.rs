//! 評価値（Value）
//!
//! マテリアル合計による局面評価を同一の整数スケールで扱う。
//! 白有利が正、黒有利が負。通常の評価値はキング（±1000）を含めても
//! `INFINITE` には到達しない。

use serde::{Deserialize, Serialize};

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 無限大（探索の初期ウィンドウ用。どの局面評価よりも大きい）
    pub const INFINITE: Value = Value(32001);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: Value) -> Value {
        Value(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: Value) -> Value {
        Value(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Value {
    #[inline]
    fn add_assign(&mut self, rhs: Value) {
        self.0 += rhs.0;
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value(v)
    }
}

impl From<Value> for i32 {
    fn from(v: Value) -> i32 {
        v.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_constants() {
        assert_eq!(Value::ZERO.raw(), 0);
        assert_eq!(Value::INFINITE.raw(), 32001);
        assert_eq!(Value::default(), Value::ZERO);
    }

    #[test]
    fn test_value_neg() {
        assert_eq!(-Value::new(100), Value::new(-100));
        assert_eq!(-Value::ZERO, Value::ZERO);
    }

    #[test]
    fn test_value_add_sub() {
        let a = Value::new(100);
        let b = Value::new(50);
        assert_eq!(a + b, Value::new(150));
        assert_eq!(a - b, Value::new(50));
        let mut c = a;
        c += b;
        assert_eq!(c, Value::new(150));
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::INFINITE > Value::new(3000));
        assert!(-Value::INFINITE < Value::new(-3000));
        assert!(Value::new(1) > Value::ZERO);
    }

    #[test]
    fn test_value_from() {
        let v: Value = 100.into();
        assert_eq!(v.raw(), 100);
        let i: i32 = v.into();
        assert_eq!(i, 100);
    }
}
