use super::*;

fn place_all(board: &mut Board, coords: &[(usize, usize)], stone: Stone) {
    for &(x, y) in coords {
        assert!(board.place_move(x, y, stone), "({x}, {y}) should be free");
    }
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_wire_values() {
    assert_eq!(Stone::Empty.to_u8(), 0);
    assert_eq!(Stone::Black.to_u8(), 1);
    assert_eq!(Stone::White.to_u8(), 2);
    assert_eq!(Stone::from_u8(2), Some(Stone::White));
    assert_eq!(Stone::from_u8(3), None);
}

#[test]
fn test_pos_offset_bounds() {
    let pos = Pos::new(0, 4);
    assert_eq!(pos.offset(1, -1, 2, 5), Some(Pos::new(2, 2)));
    assert_eq!(pos.offset(-1, 0, 1, 5), None);
    assert_eq!(pos.offset(0, 1, 1, 5), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(1, 0));
    assert!(Pos::new(4, 0) < Pos::new(0, 1));
}

#[test]
fn test_illegal_move_is_noop() {
    let mut board = Board::new(5);
    assert!(board.place_move(0, 0, Stone::Black));
    assert!(!board.place_move(0, 0, Stone::White));
    assert_eq!(board.get(Pos::new(0, 0)), Stone::Black);
    assert_eq!(board.history().len(), 1);

    assert!(!board.place_move(5, 0, Stone::White));
    assert!(!board.place_move(0, 7, Stone::White));
    assert!(!board.place_move(1, 1, Stone::Empty));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_changes_exactly_one_cell() {
    let mut board = Board::new(7);
    let before = board.grid();
    assert!(board.place_move(3, 2, Stone::White));
    let after = board.grid();

    let changed: Vec<_> = (0..7)
        .flat_map(|y| (0..7).map(move |x| (x, y)))
        .filter(|&(x, y)| before[y][x] != after[y][x])
        .collect();
    assert_eq!(changed, vec![(3, 2)]);
    assert_eq!(after[2][3], Stone::White);
}

#[test]
fn test_undo_redo_on_empty_stacks() {
    let mut board = Board::new(5);
    assert_eq!(board.undo(), None);
    assert_eq!(board.redo(), None);
}

#[test]
fn test_undo_then_redo_restores_placement() {
    let mut board = Board::new(9);
    board.place_move(4, 4, Stone::Black);

    let undone = board.undo();
    assert_eq!(undone, Some(Move::new(4, 4, Stone::Black)));
    assert!(board.is_empty(Pos::new(4, 4)));
    assert!(board.history().is_empty());

    let redone = board.redo();
    assert_eq!(redone, undone);
    assert_eq!(board.get(Pos::new(4, 4)), Stone::Black);
    assert_eq!(board.history(), &[Move::new(4, 4, Stone::Black)]);
}

#[test]
fn test_three_undos_three_redos() {
    let mut board = Board::new(15);
    board.place_move(7, 7, Stone::Black);
    board.place_move(8, 7, Stone::White);
    board.place_move(7, 8, Stone::Black);
    let snapshot = board.clone();

    for _ in 0..3 {
        assert!(board.undo().is_some());
    }
    assert!(board.is_board_empty());
    assert_eq!(board.redo_stack().len(), 3);

    for _ in 0..3 {
        assert!(board.redo().is_some());
    }
    assert_eq!(board.grid(), snapshot.grid());
    assert_eq!(board.history(), snapshot.history());
    assert!(board.redo_stack().is_empty());
}

#[test]
fn test_new_move_clears_redo() {
    let mut board = Board::new(9);
    board.place_move(1, 1, Stone::Black);
    board.place_move(2, 2, Stone::White);
    board.undo();
    assert_eq!(board.redo_stack().len(), 1);

    board.place_move(3, 3, Stone::White);
    assert!(board.redo_stack().is_empty());
    assert_eq!(board.redo(), None);
}

#[test]
fn test_failed_move_keeps_redo() {
    let mut board = Board::new(9);
    board.place_move(1, 1, Stone::Black);
    board.place_move(2, 2, Stone::White);
    board.undo();

    assert!(!board.place_move(1, 1, Stone::White));
    assert_eq!(board.redo_stack().len(), 1);
}

#[test]
fn test_history_and_redo_partition_played_moves() {
    let mut board = Board::new(9);
    let moves = [(0, 0), (1, 0), (2, 0), (3, 0)];
    for (i, &(x, y)) in moves.iter().enumerate() {
        let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
        board.place_move(x, y, stone);
    }
    board.undo();
    board.undo();
    board.redo();

    let mut all: Vec<Move> = board
        .history()
        .iter()
        .chain(board.redo_stack())
        .copied()
        .collect();
    all.sort_by_key(|m| m.pos);
    assert_eq!(all.len(), moves.len());
    for (m, &(x, y)) in all.iter().zip(moves.iter()) {
        assert_eq!(m.pos, Pos::new(x, y));
    }
}

#[test]
fn test_horizontal_win() {
    let mut board = Board::new(15);
    place_all(&mut board, &[(3, 7), (4, 7), (5, 7), (6, 7), (7, 7)], Stone::Black);

    let win = board
        .check_win(Some(Move::new(7, 7, Stone::Black)))
        .expect("five in a row");
    assert_eq!(win.winner, Stone::Black);
    assert_eq!(
        win.line,
        vec![
            Pos::new(3, 7),
            Pos::new(4, 7),
            Pos::new(5, 7),
            Pos::new(6, 7),
            Pos::new(7, 7)
        ]
    );
}

#[test]
fn test_vertical_win_from_middle_stone() {
    let mut board = Board::new(15);
    place_all(&mut board, &[(5, 4), (5, 5), (5, 6), (5, 7), (5, 8)], Stone::White);

    let win = board
        .check_win(Some(Move::new(5, 6, Stone::White)))
        .expect("five in a column");
    assert_eq!(win.winner, Stone::White);
    assert_eq!(win.line.first(), Some(&Pos::new(5, 4)));
    assert_eq!(win.line.last(), Some(&Pos::new(5, 8)));
    assert_eq!(win.line.len(), 5);
}

#[test]
fn test_diagonal_win() {
    let mut board = Board::new(15);
    place_all(&mut board, &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], Stone::Black);

    let win = board
        .check_win(Some(Move::new(4, 4, Stone::Black)))
        .expect("five on the diagonal");
    assert_eq!(win.line[0], Pos::new(2, 2));
    assert_eq!(win.line[4], Pos::new(6, 6));
}

#[test]
fn test_anti_diagonal_win_ordered_along_direction() {
    let mut board = Board::new(15);
    // (1, -1) direction: x grows while y shrinks
    place_all(&mut board, &[(2, 10), (3, 9), (4, 8), (5, 7), (6, 6)], Stone::White);

    let win = board.check_win(None).expect("five on the anti-diagonal");
    assert_eq!(win.winner, Stone::White);
    assert_eq!(
        win.line,
        vec![
            Pos::new(2, 10),
            Pos::new(3, 9),
            Pos::new(4, 8),
            Pos::new(5, 7),
            Pos::new(6, 6)
        ]
    );
}

#[test]
fn test_overline_reports_full_run() {
    let mut board = Board::new(15);
    place_all(
        &mut board,
        &[(0, 0), (1, 0), (2, 0), (4, 0), (5, 0), (3, 0)],
        Stone::Black,
    );

    let win = board.check_win(None).expect("six in a row");
    assert_eq!(win.line.len(), 6);
    assert_eq!(win.line[0], Pos::new(0, 0));
    assert_eq!(win.line[5], Pos::new(5, 0));
}

#[test]
fn test_four_is_not_a_win() {
    let mut board = Board::new(15);
    place_all(&mut board, &[(0, 0), (1, 0), (2, 0), (3, 0)], Stone::Black);
    board.place_move(4, 0, Stone::White);
    assert_eq!(board.check_win(Some(Move::new(3, 0, Stone::Black))), None);
    assert_eq!(board.check_win(None), None);
}

#[test]
fn test_check_win_empty_history() {
    let board = Board::new(15);
    assert_eq!(board.check_win(None), None);
}

#[test]
fn test_win_at_board_edge() {
    let mut board = Board::new(9);
    place_all(&mut board, &[(8, 4), (8, 5), (8, 6), (8, 7), (8, 8)], Stone::White);
    let win = board.check_win(None).expect("five along the edge");
    assert_eq!(win.line.last(), Some(&Pos::new(8, 8)));
}

#[test]
fn test_from_parts_injects_without_replay() {
    let mut grid = vec![vec![Stone::Empty; 5]; 5];
    grid[0][0] = Stone::Black;
    grid[1][1] = Stone::White;
    // History deliberately inconsistent with the grid: nothing is validated
    let history = vec![Move::new(0, 0, Stone::Black)];

    let board = Board::from_parts(grid.clone(), history.clone());
    assert_eq!(board.size(), 5);
    assert_eq!(board.grid(), grid);
    assert_eq!(board.history(), history.as_slice());
    assert!(board.redo_stack().is_empty());
}

#[test]
fn test_from_parts_pads_short_rows() {
    let grid = vec![vec![Stone::Black], vec![], vec![Stone::Empty, Stone::Empty, Stone::White, Stone::Black]];
    let board = Board::from_parts(grid, Vec::new());
    assert_eq!(board.size(), 3);
    assert_eq!(board.get(Pos::new(0, 0)), Stone::Black);
    assert_eq!(board.get(Pos::new(2, 2)), Stone::White);
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_signature_tracks_cells() {
    let mut a = Board::new(5);
    let mut b = Board::new(5);
    a.place_move(1, 1, Stone::Black);
    a.place_move(2, 2, Stone::White);
    b.place_move(2, 2, Stone::White);
    b.place_move(1, 1, Stone::Black);
    assert_eq!(a.signature(), b.signature());
    assert_eq!(a.signature()[5 + 1], 1);
    assert_eq!(a.signature()[2 * 5 + 2], 2);

    b.undo();
    assert_ne!(a.signature(), b.signature());
}

#[test]
fn test_display() {
    let mut board = Board::new(3);
    board.place_move(0, 0, Stone::Black);
    board.place_move(2, 1, Stone::White);
    assert_eq!(board.to_string(), "X..\n..O\n...");
}
