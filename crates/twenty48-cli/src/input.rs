//! Parsing of player commands typed on stdin.

use thiserror::Error;
use twenty48_core::Direction;

pub const HELP: &str = "\
Move: w/a/s/d, h/j/k/l or up/left/down/right
Other: r (reset), size N (new board of N x N, 3-8), state (dump JSON), help, q (quit)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help')")]
    Unknown(String),

    #[error("Usage: size N")]
    MissingSize,

    #[error("Not a board size: {0}")]
    BadSize(String),
}

/// A single line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Resize(usize),
    State,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let command = match first.to_ascii_lowercase().as_str() {
        "w" | "k" | "up" => Command::Move(Direction::Up),
        "s" | "j" | "down" => Command::Move(Direction::Down),
        "a" | "h" | "left" => Command::Move(Direction::Left),
        "d" | "l" | "right" => Command::Move(Direction::Right),
        "r" | "reset" | "new" => Command::Reset,
        "size" => {
            let arg = words.next().ok_or(CommandError::MissingSize)?;
            let size = arg
                .parse()
                .map_err(|_| CommandError::BadSize(arg.to_string()))?;
            Command::Resize(size)
        }
        "state" => Command::State,
        "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_keys() {
        assert_eq!(parse_command("w"), Ok(Some(Command::Move(Direction::Up))));
        assert_eq!(parse_command(" H "), Ok(Some(Command::Move(Direction::Left))));
        assert_eq!(parse_command("down"), Ok(Some(Command::Move(Direction::Down))));
        assert_eq!(parse_command("d"), Ok(Some(Command::Move(Direction::Right))));
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_size_command() {
        assert_eq!(parse_command("size 6"), Ok(Some(Command::Resize(6))));
        assert_eq!(parse_command("size"), Err(CommandError::MissingSize));
        assert_eq!(
            parse_command("size big"),
            Err(CommandError::BadSize("big".into()))
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_command("jump"),
            Err(CommandError::Unknown("jump".into()))
        );
    }
}
