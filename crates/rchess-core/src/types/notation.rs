//! 代数記法の解析エラー
//!
//! 長さ不足だけでなく、筋・段の範囲外の文字も型付きエラーとして報告する。

use thiserror::Error;

/// 代数記法（"e2" / "e2e4"形式）の解析エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NotationError {
    /// 入力が短すぎる
    #[error("input too short: {len} chars")]
    TooShort { len: usize },
    /// 筋の文字が'a'-'h'の範囲外
    #[error("invalid file char: {0:?}")]
    InvalidFile(char),
    /// 段の文字が'1'-'8'の範囲外
    #[error("invalid rank char: {0:?}")]
    InvalidRank(char),
}
