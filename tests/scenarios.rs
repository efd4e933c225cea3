//! Whole-game scenarios driven through the public API

use four_in_a_row::{Cell, GameState, GameStatus, Player, Pos, BOARD_SIZE, WIN_LENGTH};

/// X cells of a full board that holds no four-in-a-row for either side
const DRAW_X: [(i32, i32); 13] = [
    (0, 0), (0, 1), (0, 4),
    (1, 2), (1, 3),
    (2, 0), (2, 1), (2, 4),
    (3, 2), (3, 3),
    (4, 0), (4, 1), (4, 4),
];
const DRAW_O: [(i32, i32); 12] = [
    (0, 2), (0, 3),
    (1, 0), (1, 1), (1, 4),
    (2, 2), (2, 3),
    (3, 0), (3, 1), (3, 4),
    (4, 2), (4, 3),
];

fn draw_sequence() -> Vec<(i32, i32)> {
    let mut moves = Vec::with_capacity(25);
    for i in 0..DRAW_X.len() {
        moves.push(DRAW_X[i]);
        if let Some(&o) = DRAW_O.get(i) {
            moves.push(o);
        }
    }
    moves
}

/// Winning cells must hold the winner's mark and lie on one straight, gapless line
fn assert_contiguous_line(game: &GameState) {
    let winner = game.winner().expect("game should have a winner");
    let mut cells = game.winning_cells().to_vec();
    assert!(cells.len() >= WIN_LENGTH);
    for &pos in &cells {
        assert_eq!(game.board().get(pos), winner.mark());
    }

    cells.sort();
    let dr = cells[1].row as i32 - cells[0].row as i32;
    let dc = cells[1].col as i32 - cells[0].col as i32;
    assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
    for pair in cells.windows(2) {
        assert_eq!(pair[1].row as i32 - pair[0].row as i32, dr);
        assert_eq!(pair[1].col as i32 - pair[0].col as i32, dc);
    }
}

#[test]
fn scenario_a_top_row_win() {
    let mut game = GameState::new();
    let moves = [(0, 0), (4, 4), (0, 1), (4, 3), (0, 2), (4, 2)];
    for (r, c) in moves {
        assert!(game.make_move(r, c));
        assert!(!game.is_game_over());
    }
    assert!(game.make_move(0, 3));

    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::X));

    let mut cells = game.winning_cells().to_vec();
    cells.sort();
    assert_eq!(
        cells,
        vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]
    );
    // Reported order: placed cell, east side, then west side
    assert_eq!(
        game.winning_cells(),
        &[Pos::new(0, 3), Pos::new(0, 2), Pos::new(0, 1), Pos::new(0, 0)]
    );
    assert_contiguous_line(&game);
}

#[test]
fn scenario_b_full_board_draw() {
    let mut game = GameState::new();
    let moves = draw_sequence();
    assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE);

    for (k, &(r, c)) in moves.iter().enumerate() {
        assert!(!game.is_game_over(), "game ended early before move {}", k + 1);
        assert!(game.make_move(r, c));
    }

    assert!(game.is_game_over());
    assert_eq!(game.winner(), None);
    assert!(game.winning_cells().is_empty());
    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn win_on_last_empty_cell_beats_draw() {
    let xs = [
        (0, 1), (0, 3), (0, 4), (1, 0), (1, 1), (1, 4), (2, 2),
        (3, 1), (3, 3), (3, 4), (4, 0), (4, 3), (4, 4),
    ];
    let os = [
        (0, 0), (0, 2), (1, 2), (1, 3), (2, 0), (2, 1),
        (2, 3), (2, 4), (3, 0), (3, 2), (4, 1), (4, 2),
    ];

    let mut game = GameState::new();
    for i in 0..xs.len() {
        assert!(!game.is_game_over(), "game ended early at X move {}", i + 1);
        assert!(game.make_move(xs[i].0, xs[i].1));
        if let Some(&(r, c)) = os.get(i) {
            assert!(game.make_move(r, c));
        }
    }

    assert!(game.board().is_full());
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(
        game.winning_cells(),
        &[Pos::new(4, 4), Pos::new(3, 3), Pos::new(2, 2), Pos::new(1, 1)]
    );
    assert_contiguous_line(&game);
}

#[test]
fn scenario_c_double_click_same_cell() {
    let mut game = GameState::new();
    assert!(game.make_move(2, 2));
    assert!(!game.make_move(2, 2));

    assert_eq!(game.board().get(Pos::new(2, 2)), Cell::X);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn players_alternate_by_move_parity() {
    let mut game = GameState::new();
    for (k, &(r, c)) in draw_sequence().iter().enumerate() {
        let move_number = k + 1;
        let expected = if move_number % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(game.current_player(), expected);
        assert!(game.make_move(r, c));
    }
}

#[test]
fn rejected_moves_never_change_state() {
    let mut game = GameState::new();
    for (k, &(r, c)) in draw_sequence().iter().enumerate().take(10) {
        assert!(game.make_move(r, c), "move {}", k + 1);

        let before = game.clone();
        assert!(!game.make_move(r, c));
        assert!(!game.make_move(-1, c));
        assert!(!game.make_move(r, BOARD_SIZE as i32));
        assert_eq!(game, before);
    }
}

#[test]
fn every_axis_produces_a_valid_line() {
    // (X moves, O moves) with X's last move completing the line
    let games: [(&[(i32, i32)], &[(i32, i32)]); 4] = [
        (&[(3, 1), (3, 2), (3, 3), (3, 4)], &[(0, 0), (0, 1), (1, 0)]),
        (&[(0, 2), (1, 2), (2, 2), (3, 2)], &[(0, 0), (4, 4), (1, 0)]),
        (&[(1, 0), (2, 1), (3, 2), (4, 3)], &[(0, 0), (0, 4), (0, 2)]),
        (&[(0, 4), (1, 3), (3, 1), (2, 2)], &[(0, 0), (4, 4), (0, 1)]),
    ];

    for (xs, os) in games {
        let mut game = GameState::new();
        for i in 0..xs.len() {
            assert!(game.make_move(xs[i].0, xs[i].1));
            if let Some(&(r, c)) = os.get(i) {
                assert!(game.make_move(r, c));
            }
        }
        assert_eq!(game.winner(), Some(Player::X));
        assert_contiguous_line(&game);
    }
}

#[test]
fn reset_mid_game_and_after_win() {
    let mut game = GameState::new();
    assert!(game.make_move(1, 1));
    assert!(game.make_move(2, 2));
    game.reset();
    assert_eq!(game, GameState::new());

    for (r, c) in [(0, 0), (4, 4), (0, 1), (4, 3), (0, 2), (4, 2), (0, 3)] {
        game.make_move(r, c);
    }
    assert!(game.is_game_over());
    game.reset();
    assert_eq!(game, GameState::new());
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.last_move(), None);
}
