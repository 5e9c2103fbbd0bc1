use tictactoe::{Board, GameEngine, GameError, GameStatus, Player, COLS, ROWS};
use proptest::prelude::*;

/// Play whatever prefix of `coords` is legal, skipping rejected cells.
fn engine_from(coords: &[(usize, usize)]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &(r, c) in coords {
        let _ = engine.apply_move(r, c);
    }
    engine
}

fn coords() -> impl Strategy<Value = Vec<(usize, usize)>> {
    // Includes off-board values so rejections are exercised too.
    prop::collection::vec((0..4usize, 0..4usize), 0..16)
}

fn changed_cells(a: &Board, b: &Board) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for r in 0..ROWS {
        for c in 0..COLS {
            if a.get(r, c) != b.get(r, c) {
                out.push((r, c));
            }
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A legal move marks exactly its target with the mover's seed.
    #[test]
    fn legal_move_changes_only_target(seq in coords(), row in 0..3usize, col in 0..3usize) {
        let mut engine = engine_from(&seq);
        prop_assume!(engine.is_legal_move(row, col));
        let before = *engine.board();
        let mover = engine.current_player();

        engine.apply_move(row, col).unwrap();

        prop_assert_eq!(engine.cell(row, col), Some(mover.seed()));
        prop_assert_eq!(changed_cells(&before, engine.board()), vec![(row, col)]);
    }

    /// Illegal moves are rejected without touching any state.
    #[test]
    fn illegal_move_leaves_state_unchanged(seq in coords(), row in 0..5usize, col in 0..5usize) {
        let mut engine = engine_from(&seq);
        prop_assume!(!engine.is_legal_move(row, col));
        let before = engine.state();

        prop_assert_eq!(engine.apply_move(row, col), Err(GameError::InvalidMove { row, col }));
        prop_assert_eq!(engine.state(), before);
    }

    /// Replaying the history from scratch reproduces the whole engine.
    #[test]
    fn history_replays_to_current_board(seq in coords()) {
        let engine = engine_from(&seq);
        let replayed = GameEngine::replay(engine.history()).unwrap();
        prop_assert_eq!(replayed.board(), engine.board());
        prop_assert_eq!(replayed.status(), engine.status());
        prop_assert_eq!(replayed.current_player(), engine.current_player());

        // Each prefix adds exactly the recorded cell, never skipping or repeating one.
        let mut board = Board::default();
        for (i, mv) in engine.history().iter().enumerate() {
            let next = *GameEngine::replay(&engine.history()[..=i]).unwrap().board();
            prop_assert_eq!(changed_cells(&board, &next), vec![(mv.row, mv.col)]);
            prop_assert_eq!(next.get(mv.row, mv.col), Some(mv.player.seed()));
            board = next;
        }
        prop_assert_eq!(&board, engine.board());
    }

    /// Undo is the inverse of a legal move, including terminal ones.
    #[test]
    fn undo_inverts_apply(seq in coords(), row in 0..3usize, col in 0..3usize) {
        let mut engine = engine_from(&seq);
        prop_assume!(engine.is_legal_move(row, col));
        let before = engine.clone();

        engine.apply_move(row, col).unwrap();
        let undone = engine.undo().unwrap();

        prop_assert_eq!((undone.row, undone.col), (row, col));
        prop_assert_eq!(undone.player, before.current_player());
        prop_assert_eq!(engine.status(), GameStatus::Playing);
        prop_assert_eq!(engine, before);
    }

    /// Reset always yields a fresh game.
    #[test]
    fn reset_from_any_state(seq in coords()) {
        let mut engine = engine_from(&seq);
        engine.reset();
        prop_assert!(engine.board().is_empty());
        prop_assert_eq!(engine.current_player(), Player::Cross);
        prop_assert_eq!(engine.status(), GameStatus::Playing);
        prop_assert!(engine.history().is_empty());
    }

    /// Status and turn agree with the history.
    #[test]
    fn status_consistent_with_history(seq in coords()) {
        let engine = engine_from(&seq);
        let history = engine.history();
        prop_assert_eq!(history.len(), engine.board().occupied());
        for (i, mv) in history.iter().enumerate() {
            let expected = if i % 2 == 0 { Player::Cross } else { Player::Nought };
            prop_assert_eq!(mv.player, expected);
        }
        match engine.status() {
            GameStatus::Playing => {
                let expected = if history.len() % 2 == 0 { Player::Cross } else { Player::Nought };
                prop_assert_eq!(engine.current_player(), expected);
            }
            GameStatus::CrossWon | GameStatus::NoughtWon | GameStatus::Draw => {
                prop_assert_eq!(Some(engine.current_player()), history.last().map(|m| m.player));
                prop_assert!((0..3).all(|r| (0..3).all(|c| !engine.is_legal_move(r, c))));
            }
        }
    }
}
