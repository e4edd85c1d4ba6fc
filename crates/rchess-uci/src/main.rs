//! rchessのテキストフロントエンド
//!
//! 人間（白）の手を標準入力からUCI形式（"e2e4"）で受け取り、
//! エンジン（黒）は固定深さのアルファベータ探索で応答する。
//! 盤面の描画と棋譜表の表示のみを担い、ルール判定は全て
//! rchess-coreに委ねる。

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rchess_core::{Color, GameEvent, GameSession, GameStatus, MoveRecord, search_root};

/// コマンドライン引数
#[derive(Debug, Parser)]
#[command(name = "rchess-uci", about = "Play chess against the rchess engine")]
struct Args {
    /// エンジンの探索深さ（ply、1以上）
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    depth: u32,

    /// 終局時に棋譜をJSONで書き出すパス
    #[arg(long)]
    export: Option<std::path::PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("starting game: engine depth = {}", args.depth);

    let (mut session, events) = GameSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", session.board());

        let status = session.status();
        if status.is_over() {
            announce_result(status, session.side_to_move());
            break;
        }

        if session.side_to_move() == Color::White {
            // 人間の手番
            print!("your move (e.g. e2e4, or 'quit'): ");
            io::stdout().flush().context("flush stdout")?;
            let Some(line) = lines.next() else {
                println!("input closed, exiting.");
                break;
            };
            let input = line.context("read stdin")?.trim().to_string();
            if input == "quit" {
                break;
            }
            if let Err(err) = session.play_uci(&input) {
                println!("rejected: {err}");
                continue;
            }
        } else {
            // エンジンの手番（黒は最小化側）
            let (score, best) = search_root(session.board(), args.depth, false);
            let Some(mv) = best else {
                // 手が返らなければ対局続行は不可能。次周回に回さず抜ける
                println!("engine has no move to play.");
                break;
            };
            println!("engine plays {} (score {})", mv, score.raw());
            session
                .play(mv)
                .context("engine produced a move the session rejected")?;
        }

        // 確定イベントを購読している体で流す（ロガー相当の観測者）
        for event in events.try_iter() {
            if let GameEvent::MovePlayed { mv, by, .. } = event {
                info!("played: {mv} by {by}");
            }
        }
    }

    if !session.history().is_empty() {
        println!("\n{}", format_history(session.history()));
    }
    if let Some(path) = args.export {
        let json = serde_json::to_string_pretty(session.history())
            .context("serialize move history")?;
        std::fs::write(&path, json)
            .with_context(|| format!("write history to {}", path.display()))?;
        println!("history exported to {}", path.display());
    }
    Ok(())
}

/// 終局理由の表示
fn announce_result(status: GameStatus, side_to_move: Color) {
    match status {
        GameStatus::Checkmate => {
            let winner = side_to_move.opponent();
            println!("Checkmate! {winner} wins!");
        }
        GameStatus::Stalemate => println!("Stalemate! The game is drawn."),
        GameStatus::Ongoing => {}
    }
}

/// 棋譜を白黒ペアの表形式に整形する
fn format_history(history: &[MoveRecord]) -> String {
    let mut out = String::from("No.   White        Black\n");
    for pair in history.chunks(2) {
        let no = pair[0].ply.div_ceil(2);
        let white = pair[0].uci.as_str();
        let black = pair.get(1).map_or("", |r| r.uci.as_str());
        out.push_str(&format!("{no:3}.  {white:12} {black:12}\n"));
    }
    out
}
