//! Plain-text rendering of the board and session stats.

use twenty48_core::{Board, GameSession, EMPTY};

/// Draw the board as a grid with right-aligned tile values
pub fn render_board(board: &Board) -> String {
    let width = board.max_tile().to_string().len().max(4);
    let border = format!(
        "+{}\n",
        format!("{}+", "-".repeat(width + 2)).repeat(board.size())
    );

    let mut out = border.clone();
    for row in board.rows() {
        out.push('|');
        for &value in row {
            if value == EMPTY {
                out.push_str(&format!(" {:>width$} |", ".", width = width));
            } else {
                out.push_str(&format!(" {:>width$} |", value, width = width));
            }
        }
        out.push('\n');
        out.push_str(&border);
    }
    out
}

/// Board plus the score line shown after every command
pub fn render_session(session: &GameSession) -> String {
    format!(
        "{}Score: {}  Best: {}  Moves: {}  Max tile: {}  Empty: {}\n",
        render_board(session.board()),
        session.score(),
        session.best_score(),
        session.moves(),
        session.max_tile(),
        session.count_empty(),
    )
}
