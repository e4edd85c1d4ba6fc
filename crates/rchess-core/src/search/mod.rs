//! 探索モジュール
//!
//! 固定深さのミニマックス探索（アルファベータ枝刈り付き）。
//! 反復深化・時間管理・置換表は持たない。探索コストは固定深さの
//! 枝刈り済みゲーム木そのもの。

mod alpha_beta;

pub use alpha_beta::{search, search_root};
