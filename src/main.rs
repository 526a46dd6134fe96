//! Headless Blockfall runner (default binary).
//!
//! Commands are read from stdin, one per line; every session event is
//! written to stdout as one JSON line. After game over the session waits for
//! `restart`. The process exits when stdin is closed.

use std::io::BufRead;
use std::thread;

use anyhow::Result;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use blockfall::cli::{parse_args, USAGE};
use blockfall::runtime::{
    parse_input_line, OutboundMessage, Session, SessionConfig, SessionError, SessionHandle,
};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = SessionConfig::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    let (session, handle, mut events) = Session::from_config(config);
    let (err_tx, mut err_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(handle, err_tx);

    let session_task = tokio::spawn(session.run());

    let mut stdout = tokio::io::stdout();
    let mut seq: u64 = 1;
    loop {
        let message = tokio::select! {
            event = events.recv() => match event {
                Some(event) => OutboundMessage::from_event(seq, &event),
                None => break,
            },
            Some(err) = err_rx.recv() => OutboundMessage::error(seq, &err),
        };
        seq += 1;

        let mut line = message.to_line()?;
        line.push('\n');
        stdout.write_all(line.as_bytes()).await?;
        stdout.flush().await?;
    }

    let outcome = session_task.await?;
    // stdout carries only protocol lines.
    eprintln!("final score: {}", outcome.final_score);
    log::info!(
        "final score {} ({} lines{}) after {} game(s)",
        outcome.final_score,
        outcome.lines,
        if outcome.game_over { ", game over" } else { "" },
        outcome.games
    );
    Ok(())
}

/// Blocking stdin reads stay off the runtime so shutdown never waits on them.
fn spawn_stdin_reader(handle: SessionHandle, errors: mpsc::UnboundedSender<SessionError>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("stdin read error: {}", e);
                    break;
                }
            };
            match parse_input_line(&line) {
                Ok(Some(request)) => {
                    if handle.blocking_request(request).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("rejected input {:?}: {}", line, e);
                    let _ = errors.send(e);
                }
            }
        }
        log::debug!("stdin closed");
    });
}
