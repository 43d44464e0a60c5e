//! Pseudo-legal range tests.

use crate::board::{Board, Color, Game, Piece, PieceKind, Square, SquareSet};

fn sorted(set: SquareSet) -> Vec<Square> {
    let mut squares: Vec<Square> = set.iter().collect();
    squares.sort();
    squares
}

fn lone(sq: Square, piece: Piece) -> Board {
    let mut board = Board::empty(Color::White);
    board.set_piece(sq, piece);
    board
}

#[test]
fn test_starting_ranges() {
    let game = Game::new(Color::White);
    assert_eq!(
        sorted(game.range(Square(6, 0))),
        vec![Square(4, 0), Square(5, 0)]
    );
    assert_eq!(
        sorted(game.range(Square(7, 1))),
        vec![Square(5, 0), Square(5, 2)]
    );
    assert!(game.range(Square(7, 0)).is_empty());
    assert!(game.range(Square(7, 2)).is_empty());
    assert!(game.range(Square(7, 3)).is_empty());
    assert!(game.range(Square(4, 2)).is_empty());
}

#[test]
fn test_top_pawns_move_down() {
    let game = Game::new(Color::White);
    assert_eq!(
        sorted(game.range(Square(1, 2))),
        vec![Square(2, 2), Square(3, 2)]
    );

    // With Black at the bottom White starts on top and still moves down.
    let game = Game::new(Color::Black);
    assert_eq!(
        sorted(game.range(Square(1, 2))),
        vec![Square(2, 2), Square(3, 2)]
    );
    assert_eq!(
        game.board().piece_at(Square(1, 2)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_pawn_blocked_and_captures() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let mut board = lone(Square(6, 1), pawn);
    board.set_piece(Square(4, 1), Piece::new(Color::Black, PieceKind::Knight));
    assert_eq!(sorted(pawn.range(Square(6, 1), &board)), vec![Square(5, 1)]);

    board.set_piece(Square(5, 1), Piece::new(Color::Black, PieceKind::Rook));
    assert!(pawn.range(Square(6, 1), &board).is_empty());

    board.set_piece(Square(5, 0), Piece::new(Color::Black, PieceKind::Bishop));
    board.set_piece(Square(5, 2), Piece::new(Color::White, PieceKind::Bishop));
    assert_eq!(sorted(pawn.range(Square(6, 1), &board)), vec![Square(5, 0)]);
}

#[test]
fn test_pawn_double_step_only_from_start() {
    let pawn = Piece::new(Color::White, PieceKind::Pawn);
    let board = lone(Square(5, 3), pawn);
    assert_eq!(sorted(pawn.range(Square(5, 3), &board)), vec![Square(4, 3)]);
}

#[test]
fn test_queen_on_open_board() {
    let queen = Piece::new(Color::White, PieceKind::Queen);
    let board = lone(Square(3, 1), queen);
    // Seven squares on the file, three on the row and six on diagonals.
    assert_eq!(queen.range(Square(3, 1), &board).len(), 16);
}

#[test]
fn test_rook_stops_at_blockers() {
    let rook = Piece::new(Color::White, PieceKind::Rook);
    let mut board = lone(Square(4, 0), rook);
    board.set_piece(Square(2, 0), Piece::new(Color::Black, PieceKind::Pawn));
    board.set_piece(Square(4, 2), Piece::new(Color::White, PieceKind::Pawn));
    assert_eq!(
        sorted(rook.range(Square(4, 0), &board)),
        vec![
            Square(2, 0),
            Square(3, 0),
            Square(4, 1),
            Square(5, 0),
            Square(6, 0),
            Square(7, 0)
        ]
    );
}

#[test]
fn test_bishop_in_corner() {
    let bishop = Piece::new(Color::Black, PieceKind::Bishop);
    let board = lone(Square(0, 0), bishop);
    assert_eq!(
        sorted(bishop.range(Square(0, 0), &board)),
        vec![Square(1, 1), Square(2, 2), Square(3, 3)]
    );
}

#[test]
fn test_knight_and_king_near_edge() {
    let knight = Piece::new(Color::White, PieceKind::Knight);
    let board = lone(Square(0, 3), knight);
    assert_eq!(
        sorted(knight.range(Square(0, 3), &board)),
        vec![Square(1, 1), Square(2, 2)]
    );

    let king = Piece::new(Color::White, PieceKind::King);
    let board = lone(Square(7, 0), king);
    assert_eq!(
        sorted(king.range(Square(7, 0), &board)),
        vec![Square(6, 0), Square(6, 1), Square(7, 1)]
    );
}

#[test]
fn test_king_range_excludes_castling() {
    let game = crate::board::BoardBuilder::starting_position(Color::White)
        .clear(Square(7, 1))
        .clear(Square(7, 2))
        .build()
        .unwrap();
    assert_eq!(sorted(game.range(Square(7, 3))), vec![Square(7, 2)]);
}

#[test]
fn test_can_move_matches_range() {
    let game = Game::new(Color::White);
    let knight = Piece::new(Color::White, PieceKind::Knight);
    assert!(knight.can_move(Square(7, 1), Square(5, 2), game.board()));
    assert!(!knight.can_move(Square(7, 1), Square(6, 3), game.board()));
}

#[test]
fn test_pawns_attack_diagonals_only() {
    let board = Board::new(Color::White);
    let attacked = board.attacked_by(Color::White);
    assert!(attacked.contains(Square(5, 1)));
    assert!(attacked.contains(Square(5, 0)));
    assert!(!attacked.contains(Square(4, 0)));
    assert!(board.attackers_of(Square(5, 1), Color::White).contains(&Square(6, 0)));
}
