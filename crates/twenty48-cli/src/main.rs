//! Terminal front end for the twenty48 engine.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twenty48_core::{GameConfig, GameError, GameEvent, GameSession};

mod input;
mod render;

use input::Command;

/// Read an optional numeric setting from the environment
fn env_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: {:?}", name, value)),
        Err(_) => Ok(None),
    }
}

/// Build the game config from defaults plus environment overrides
fn load_config() -> anyhow::Result<GameConfig> {
    let mut config = GameConfig::default();
    if let Some(size) = env_var("TWENTY48_SIZE")? {
        config.size = size;
    }
    if let Some(win_tile) = env_var("TWENTY48_WIN_TILE")? {
        config.win_tile = win_tile;
    }
    config.seed = env_var("TWENTY48_SEED")?;
    config.validate()?;
    Ok(config)
}

fn print_events(out: &mut impl Write, events: &[GameEvent]) -> io::Result<()> {
    for event in events {
        match event {
            GameEvent::MoveRejected { direction } => {
                writeln!(out, "Nothing moves {}.", direction)?;
            }
            GameEvent::GameWon { score } => {
                writeln!(out, "You won! Score: {}. Keep going for a higher score.", score)?;
            }
            GameEvent::GameLost { score } => {
                writeln!(out, "Game over! No more moves. Final score: {}", score)?;
            }
            GameEvent::Moved { .. } | GameEvent::TileSpawned { .. } => {}
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = load_config()?;
    info!(size = config.size, win_tile = config.win_tile, "Starting twenty48...");

    let mut session = GameSession::new(config)?;
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", input::HELP)?;
    write!(out, "{}", render::render_session(&session))?;
    out.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = match input::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Move(direction) => match session.apply_move(direction) {
                Ok(events) => print_events(&mut out, &events)?,
                Err(GameError::GameOver) => {
                    writeln!(out, "The game is over. Type 'r' to play again.")?;
                }
                Err(e) => warn!("Move failed: {}", e),
            },
            Command::Reset => session.reset()?,
            Command::Resize(size) => {
                if let Err(e) = session.resize(size) {
                    writeln!(out, "{}", e)?;
                }
            }
            Command::State => {
                writeln!(out, "{}", serde_json::to_string_pretty(&session)?)?;
                continue;
            }
            Command::Help => {
                writeln!(out, "{}", input::HELP)?;
                continue;
            }
            Command::Quit => break,
        }

        write!(out, "{}", render::render_session(&session))?;
        out.flush()?;
    }

    info!(
        score = session.score(),
        best = session.best_score(),
        moves = session.moves(),
        "Session ended"
    );
    Ok(())
}
