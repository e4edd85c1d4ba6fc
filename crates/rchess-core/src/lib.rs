//! rchess-core: チェスエンジンのコアライブラリ
//!
//! 盤面表現・合法手生成・王手判定・手の適用・マテリアル評価・
//! 固定深さのアルファベータ探索・終局判定を提供する。
//!
//! 簡易化したルールを採用する:
//! - キャスリングはホームマスの占有条件のみで許可（通過マスの利き・
//!   移動履歴は見ない）
//! - ポーンは最終段で無条件にクイーンへ成る
//! - アンパッサン・50手ルール・千日手検出なし
//!
//! 全ての操作は同期・単一スレッドで、手の適用は常に新しい盤面値を
//! 返す。描画・入力・設定読み込みは本クレートの外の協調者が担う。

pub mod board;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod search;
pub mod types;

pub use board::{Board, BoardParseError};
pub use eval::evaluate;
pub use game::{GameEvent, GameSession, GameStatus, MoveRecord, PlayError, game_status};
pub use movegen::{in_check, legal_moves, pseudo_legal_moves};
pub use search::{search, search_root};
pub use types::{Color, File, Move, NotationError, Piece, PieceType, Rank, Square, Value};
