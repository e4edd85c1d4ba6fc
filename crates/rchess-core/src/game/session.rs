//! 対局セッション
//!
//! 確定済みの手だけを盤面に反映し、棋譜（UCI文字列の列）を記録する。
//! 観測側（表示・ロガー等）へはエンジン内部の可変状態を直接見せず、
//! 確定時点で`GameEvent`をチャネルに流して通知する。受信側が
//! 切断済みでも対局継続には影響しない。

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GameStatus, game_status};
use crate::board::Board;
use crate::movegen::legal_moves;
use crate::types::{Color, Move, NotationError};

/// 棋譜の1手分の記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 手数（1始まり。1手=1plyで数える）
    pub ply: u32,
    /// 指した側
    pub by: Color,
    /// UCI形式の指し手（"e2e4"等）
    pub uci: String,
}

/// 手の確定時に観測側へ流すイベント
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// 手が確定した（適用後の盤面を含む）
    MovePlayed { mv: Move, by: Color, board: Board },
    /// 対局が終了した（`status`は手番側から見た分類）
    Finished { status: GameStatus, side_to_move: Color },
}

/// 手の適用エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    /// 記法の解析に失敗した
    #[error("bad notation: {0}")]
    BadNotation(#[from] NotationError),
    /// 現局面の合法手に含まれない
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    /// 既に終局している
    #[error("game is already over")]
    GameOver,
}

/// 対局セッション
///
/// 盤面・手番・棋譜を所有する。手は`play` / `play_uci`経由でのみ
/// 反映され、合法手チェックを通らない手は盤面に触れない。
pub struct GameSession {
    board: Board,
    side_to_move: Color,
    history: Vec<MoveRecord>,
    events: Sender<GameEvent>,
}

impl GameSession {
    /// 初期局面からセッションを開始する
    ///
    /// 返り値のReceiverで`GameEvent`を購読できる。
    pub fn new() -> (GameSession, Receiver<GameEvent>) {
        GameSession::with_board(Board::initial(), Color::White)
    }

    /// 任意の局面・手番からセッションを開始する（検討用）
    pub fn with_board(board: Board, side_to_move: Color) -> (GameSession, Receiver<GameEvent>) {
        let (tx, rx) = unbounded();
        let session = GameSession { board, side_to_move, history: Vec::new(), events: tx };
        (session, rx)
    }

    /// 現在の盤面
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 現在の手番
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 棋譜
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// 現在の手番側から見た局面の状態
    pub fn status(&self) -> GameStatus {
        game_status(&self.board, self.side_to_move)
    }

    /// 現在の手番側の合法手
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(&self.board, self.side_to_move)
    }

    /// 手を確定させる
    ///
    /// 合法手でなければ`IllegalMove`で拒否し、状態は変化しない。
    /// 成功時は適用後の局面を新しい手番側から見て分類した
    /// `GameStatus`を返す。
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, PlayError> {
        if self.status().is_over() {
            return Err(PlayError::GameOver);
        }
        if !self.legal_moves().contains(&mv) {
            return Err(PlayError::IllegalMove(mv));
        }

        let by = self.side_to_move;
        self.board = self.board.apply_move(mv);
        self.side_to_move = by.opponent();
        self.history.push(MoveRecord {
            ply: self.history.len() as u32 + 1,
            by,
            uci: mv.to_uci(),
        });
        debug!("move committed: {} by {}", mv, by);

        // 観測側が全て切断していても対局は続行する
        if self
            .events
            .send(GameEvent::MovePlayed { mv, by, board: self.board.clone() })
            .is_err()
        {
            trace!("no observers for move event");
        }

        let status = self.status();
        if status.is_over() {
            let _ = self
                .events
                .send(GameEvent::Finished { status, side_to_move: self.side_to_move });
        }
        Ok(status)
    }

    /// テキスト入力経路: UCI形式の文字列を解析して確定させる
    ///
    /// 4文字未満・範囲外の文字は`BadNotation`で拒否する（呼び出し側が
    /// 再入力を促す想定。致命的エラーにはしない）。
    pub fn play_uci(&mut self, s: &str) -> Result<GameStatus, PlayError> {
        let mv = Move::from_uci(s)?;
        self.play(mv)
    }
}
