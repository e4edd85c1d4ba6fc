//! 指し手生成モジュール
//!
//! - `pseudo_legal_moves`: 駒の幾何と占有ルールのみに基づく擬似合法手
//! - `legal_moves`: 擬似合法手から「自玉が取られる手」を除外した合法手
//! - `in_check`: 王手判定（相手の利き集合に自玉のマスが含まれるか）
//!
//! 合法手フィルタは各候補手を試しに適用して王手判定にかける方式で、
//! これが「王手放置」を防ぐ唯一の機構。キャスリングの通過マスの利きは
//! 意図的に検査しない簡易ルールを採用する。

mod generator;

pub use generator::{in_check, legal_moves, pseudo_legal_moves};
