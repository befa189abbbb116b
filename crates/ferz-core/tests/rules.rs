//! Integration tests for the rules engine.
//!
//! Exercises the public surface only: exact undo, legality filtering,
//! castling, en passant, promotion, and game-state classification.

use ferz_core::{
    CastleFlags, CastleSide, Color, GameState, Move, MoveOutcome, Piece, Position,
    PromotionPiece, Square,
};

/// Helper: parse a move in coordinate notation.
fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

/// Helper: an empty board with the listed `(square, piece letter)` pairs.
fn setup(side_to_move: Color, pieces: &[(&str, char)]) -> Position {
    let mut pos = Position::empty(side_to_move);
    for &(sq, letter) in pieces {
        let sq: Square = sq.parse().unwrap();
        pos.put(sq, Piece::from_letter(letter));
    }
    pos
}

/// Helper: play a sequence of moves, panicking on the first rejection.
fn play(pos: &mut Position, moves: &[&str]) {
    for &text in moves {
        assert!(pos.attempt_move(mv(text)), "{text} should be legal");
    }
}

// ── Execute / undo ───────────────────────────────────────────────────────────

#[test]
fn execute_undo_is_exact_for_every_legal_move() {
    let mut pos = Position::new_game();
    play(
        &mut pos,
        &["e2e4", "a7a6", "g1f3", "b7b6", "f1e2", "c7c6", "e4e5", "f7f5"],
    );
    // En passant (e5f6), castling (e1g1), and ordinary moves are all here.
    let moves = pos.legal_moves();
    assert!(moves.contains(mv("e5f6")));
    assert!(moves.contains(mv("e1g1")));

    for &m in &moves {
        let before = pos;
        let undo = pos.execute(m);
        pos.undo(m, undo);
        assert_eq!(pos, before, "execute/undo of {m} was not exact");
    }
}

#[test]
fn undo_restores_promoted_pawn() {
    let mut pos = setup(Color::Black, &[("e8", 'k'), ("e1", 'K'), ("b2", 'p'), ("a1", 'R')]);
    let before = pos;
    for promo in PromotionPiece::ALL {
        let m = Move::new_promotion(Square::B2, Square::A1, promo);
        let undo = pos.execute(m);
        assert_eq!(pos.piece_at(Square::A1).map(|p| p.kind()), Some(promo.to_piece_kind()));
        pos.undo(m, undo);
        assert_eq!(pos, before);
    }
}

// ── Legality ─────────────────────────────────────────────────────────────────

#[test]
fn opening_has_twenty_moves() {
    let pos = Position::new_game();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(Position::starting_position(), pos);
}

#[test]
fn move_exposing_king_is_rejected() {
    let mut pos = setup(Color::White, &[("e1", 'K'), ("e2", 'N'), ("e8", 'r'), ("a8", 'k')]);
    let before = pos;
    assert_eq!(pos.check_move(mv("e2c3")), MoveOutcome::LeavesKingInCheck);
    assert!(!pos.attempt_move(mv("e2c3")));
    assert_eq!(pos, before);
    assert!(pos.legal_moves().iter().all(|m| m.source() == Square::E1));
}

#[test]
fn moving_out_of_turn_is_rejected() {
    let mut pos = Position::new_game();
    assert_eq!(pos.make_move(mv("e7e5")), MoveOutcome::NotOwnPiece);
    assert_eq!(pos.side_to_move(), Color::White);
}

// ── Castling ─────────────────────────────────────────────────────────────────

fn castling_setup() -> Position {
    setup(
        Color::White,
        &[("e1", 'K'), ("a1", 'R'), ("h1", 'R'), ("e8", 'k'), ("a8", 'r'), ("h8", 'r')],
    )
}

#[test]
fn castling_both_sides() {
    let mut pos = castling_setup();
    assert!(pos.attempt_move(mv("e1g1")));
    assert_eq!(pos.piece_at(Square::F1), Some(Piece::WHITE_ROOK));
    assert_eq!(pos.piece_at(Square::G1), Some(Piece::WHITE_KING));
    assert!(pos.attempt_move(mv("e8c8")));
    assert_eq!(pos.piece_at(Square::D8), Some(Piece::BLACK_ROOK));
    assert_eq!(pos.piece_at(Square::C8), Some(Piece::BLACK_KING));
    assert!(pos.castling().king_moved(Color::White));
    assert!(pos.castling().king_moved(Color::Black));
}

#[test]
fn no_castling_after_king_returns_home() {
    let mut pos = castling_setup();
    play(&mut pos, &["e1f1", "e8f8", "f1e1", "f8e8"]);
    assert_eq!(pos.check_move(mv("e1g1")), MoveOutcome::IllegalForPiece);
    assert_eq!(pos.check_move(mv("e1c1")), MoveOutcome::IllegalForPiece);
}

#[test]
fn no_castling_after_rook_returns_home() {
    let mut pos = castling_setup();
    play(&mut pos, &["h1h2", "e8e7", "h2h1", "e7e8"]);
    assert!(!pos.is_legal(mv("e1g1")));
    assert!(pos.is_legal(mv("e1c1")));
    assert!(pos.castling().rook_moved(Color::White, CastleSide::KingSide));
}

#[test]
fn no_castling_out_of_through_or_into_check() {
    // Out of check.
    let mut pos = castling_setup();
    pos.put(Square::E4, Some(Piece::BLACK_ROOK));
    assert!(!pos.is_legal(mv("e1g1")));
    assert!(!pos.is_legal(mv("e1c1")));

    // Through an attacked square.
    let mut pos = castling_setup();
    pos.put(Square::D4, Some(Piece::BLACK_ROOK));
    assert!(!pos.is_legal(mv("e1c1")));
    assert!(pos.is_legal(mv("e1g1")));

    // Into check.
    let mut pos = castling_setup();
    pos.put(Square::G4, Some(Piece::BLACK_ROOK));
    assert_eq!(pos.check_move(mv("e1g1")), MoveOutcome::LeavesKingInCheck);
}

#[test]
fn no_castling_through_pieces() {
    let mut pos = Position::new_game();
    assert!(!pos.is_legal(mv("e1g1")));
    play(&mut pos, &["g1f3", "g8f6", "e2e3", "e7e6", "f1e2", "f8e7"]);
    assert!(pos.is_legal(mv("e1g1")));
    assert!(!pos.is_legal(mv("e1c1")));
}

#[test]
fn castle_flags_can_be_preset() {
    let pos = castling_setup().with_castle_flags(CastleFlags::ALL_MOVED);
    assert!(!pos.is_legal(mv("e1g1")));
    assert!(!pos.is_legal(mv("e1c1")));
}

// ── En passant ───────────────────────────────────────────────────────────────

#[test]
fn en_passant_only_immediately() {
    let mut pos = Position::new_game();
    play(&mut pos, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    assert_eq!(pos.en_passant(), Some(Square::D6));
    assert!(pos.is_legal(mv("e5d6")));

    // Waiting a move forfeits the capture.
    let mut waited = pos;
    play(&mut waited, &["h2h3", "h7h6"]);
    assert_eq!(waited.en_passant(), None);
    assert!(!waited.is_legal(mv("e5d6")));

    assert!(pos.attempt_move(mv("e5d6")));
    assert_eq!(pos.piece_at(Square::D5), None);
    assert_eq!(pos.piece_at(Square::D6), Some(Piece::WHITE_PAWN));
}

#[test]
fn en_passant_exposing_king_is_rejected() {
    // White king a5, pawn b5; Black pawn c7 double-steps past it with a rook on h5.
    let mut pos = setup(
        Color::Black,
        &[("a5", 'K'), ("b5", 'P'), ("c7", 'p'), ("h5", 'r'), ("e8", 'k')],
    );
    play(&mut pos, &["c7c5"]);
    assert_eq!(pos.check_move(mv("b5c6")), MoveOutcome::LeavesKingInCheck);
}

// ── Promotion ────────────────────────────────────────────────────────────────

#[test]
fn promotion_defaults_to_queen() {
    let mut pos = setup(Color::White, &[("a7", 'P'), ("h1", 'K'), ("h8", 'k')]);
    assert!(pos.attempt_move(mv("a7a8")));
    assert_eq!(pos.piece_at(Square::A8), Some(Piece::WHITE_QUEEN));
}

#[test]
fn promotion_to_each_piece() {
    for (letter, piece) in [
        ('q', Piece::WHITE_QUEEN),
        ('r', Piece::WHITE_ROOK),
        ('b', Piece::WHITE_BISHOP),
        ('n', Piece::WHITE_KNIGHT),
    ] {
        let mut pos = setup(Color::White, &[("a7", 'P'), ("h1", 'K'), ("h7", 'k')]);
        assert!(pos.attempt_move(mv(&format!("a7a8{letter}"))));
        assert_eq!(pos.piece_at(Square::A8), Some(piece));
    }
}

#[test]
fn promotion_letter_on_ordinary_move_is_ignored() {
    let mut pos = Position::new_game();
    assert_eq!(pos.check_move(mv("e2e4q")), MoveOutcome::Legal);
    assert!(pos.attempt_move(mv("e2e4q")));
    assert_eq!(pos.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
    assert_eq!(pos.piece_at(Square::E2), None);
    assert_eq!(pos.side_to_move(), Color::Black);

    // Knights and kings ignore the letter as well.
    assert!(pos.attempt_move(mv("g8f6r")));
    assert_eq!(pos.piece_at(Square::F6), Some(Piece::BLACK_KNIGHT));
}

// ── Game state ───────────────────────────────────────────────────────────────

#[test]
fn fools_mate() {
    let mut pos = Position::new_game();
    play(&mut pos, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(pos.is_check(Color::White));
    assert!(pos.is_checkmate());
    assert!(pos.legal_moves().is_empty());
    assert_eq!(pos.game_state(), GameState::Checkmate { winner: Color::Black });
    assert_eq!(pos.game_state().to_string(), "Black wins by checkmate");
}

#[test]
fn lone_minor_piece_is_a_draw() {
    let bishop = setup(Color::White, &[("e1", 'K'), ("c1", 'B'), ("e8", 'k')]);
    assert!(bishop.is_draw());
    assert_eq!(bishop.game_state(), GameState::InsufficientMaterial);

    let knight = setup(Color::Black, &[("e1", 'K'), ("g8", 'n'), ("e8", 'k')]);
    assert!(knight.is_draw());

    let rook = setup(Color::White, &[("e1", 'K'), ("a1", 'R'), ("e8", 'k')]);
    assert!(!rook.is_draw());
    assert_eq!(rook.game_state(), GameState::Normal(Color::White));
}

#[test]
fn pretty_board_shows_pieces() {
    let text = Position::new_game().pretty().to_string();
    assert!(text.starts_with("  +---+"));
    assert!(text.contains("2 | P | P | P | P | P | P | P | P |"));
}
