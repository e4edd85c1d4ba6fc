//! 対局進行モジュール
//!
//! - `GameStatus` / `game_status`: 局面の終局判定（チェックメイト/
//!   ステイルメイト/継続中）
//! - `GameSession`: 確定手の適用・棋譜記録・観測側へのイベント通知

mod session;
mod status;

pub use session::{GameEvent, GameSession, MoveRecord, PlayError};
pub use status::{GameStatus, game_status};
