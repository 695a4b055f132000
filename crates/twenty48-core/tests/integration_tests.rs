//! Integration tests for the twenty48 engine.
//!
//! These tests drive complete games through the public API, from a fresh
//! board until the session can no longer move.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use twenty48_core::*;

/// Pick the first direction that would change the board, in a fixed order
fn first_legal_move(board: &Board) -> Option<Direction> {
    Direction::ALL
        .into_iter()
        .find(|&d| apply_move(board, d).changed)
}

/// Play until the game ends, returning the number of accepted moves
fn play_to_end(session: &mut GameSession, max_moves: usize) -> usize {
    let mut played = 0;
    while !session.is_over() && played < max_moves {
        let direction = first_legal_move(session.board())
            .expect("a session that is not over has a legal move");
        session.apply_move(direction).unwrap();
        played += 1;
    }
    played
}

#[test]
fn test_engine_turn_by_hand() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut board = initialize_board(4, &mut rng).unwrap();
    let mut score: Score = 0;

    for _ in 0..50 {
        let Some(direction) = first_legal_move(&board) else {
            break;
        };
        let outcome = apply_move(&board, direction);
        assert!(outcome.changed);
        assert_eq!(outcome.board.tile_sum(), board.tile_sum());

        score += outcome.score_delta;
        let before_spawn = outcome.board.count_empty();
        board = spawn_tile(&outcome.board, &mut rng);
        assert_eq!(board.count_empty(), before_spawn - 1);
    }

    assert!(score > 0);
    assert_ne!(status(&board, DEFAULT_WIN_TILE), GameStatus::Won);
}

#[test]
fn test_full_game_reaches_game_over() {
    let config = GameConfig {
        size: 3,
        seed: Some(17),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();

    let played = play_to_end(&mut session, 10_000);

    assert!(session.is_over(), "3x3 game should end within 10k moves");
    assert_eq!(session.moves() as usize, played);
    assert_eq!(session.status(), GameStatus::Lost);
    assert!(!can_move(session.board()));
    assert_eq!(session.count_empty(), 0);
    assert_eq!(session.best_score(), session.score());

    for direction in Direction::ALL {
        assert_eq!(session.apply_move(direction), Err(GameError::GameOver));
    }
}

#[test]
fn test_score_equals_sum_of_deltas() {
    let config = GameConfig {
        size: 4,
        seed: Some(8),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config).unwrap();
    let mut total: Score = 0;

    for _ in 0..200 {
        let Some(direction) = first_legal_move(session.board()) else {
            break;
        };
        for event in session.apply_move(direction).unwrap() {
            if let GameEvent::Moved { score_delta, score, .. } = event {
                total += score_delta;
                assert_eq!(score, total);
            }
        }
    }

    assert_eq!(session.score(), total);
}

#[test]
fn test_small_win_tile_is_reached_and_play_continues() {
    let config = GameConfig {
        size: 4,
        win_tile: 16,
        seed: Some(31),
    };
    let mut session = GameSession::new(config).unwrap();
    let mut wins = 0;

    while !session.is_over() && session.moves() < 5_000 {
        let direction = first_legal_move(session.board()).unwrap();
        let events = session.apply_move(direction).unwrap();
        wins += events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameWon { .. }))
            .count();
    }

    assert_eq!(wins, 1);
    assert!(session.is_won());
    assert!(session.max_tile() >= 16);
}

#[test]
fn test_reference_boards() {
    let sparse = Board::from_rows(vec![
        vec![2, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 2],
    ])
    .unwrap();
    assert!(apply_move(&sparse, Direction::Down).changed);

    let packed = Board::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
    .unwrap();
    for direction in Direction::ALL {
        assert!(!apply_move(&packed, direction).changed);
    }
    assert_eq!(status(&packed, DEFAULT_WIN_TILE), GameStatus::Lost);

    assert_eq!(slide_row(&[0, 2, 0, 2]), (vec![4, 0, 0, 0], 4));
    let right = apply_move(
        &Board::from_rows(vec![
            vec![0, 2, 0, 2],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap(),
        Direction::Right,
    );
    assert_eq!(right.board.rows()[0], vec![0, 0, 0, 4]);
    assert_eq!(right.score_delta, 4);
}

#[test]
fn test_board_json_boundary() {
    let board: Board = serde_json::from_str("[[2,0,0],[0,4,0],[0,0,8]]").unwrap();
    assert_eq!(board.size(), 3);

    let err = serde_json::from_str::<Board>("[[2,0,0],[0,5,0],[0,0,8]]").unwrap_err();
    assert!(err.to_string().contains("not a power of two"));

    let config = GameConfig {
        size: 3,
        ..GameConfig::default()
    };
    let session = GameSession::from_board(config, board.clone()).unwrap();
    assert_eq!(session.board(), &board);
}
