//! Game controller: a position plus the list of moves played.

use tracing::{debug, info};

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::movegen::MoveList;
use crate::position::Position;

/// A game in progress from the standard starting position.
#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
}

impl Game {
    /// Start a new game.
    pub fn new() -> Game {
        Game::default()
    }

    /// Continue play from an arbitrary position with an empty history.
    pub fn from_position(position: Position) -> Game {
        Game {
            position,
            history: Vec::new(),
        }
    }

    /// Discard the current game and start over.
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "game reset");
        *self = Game::new();
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.legal_moves()
    }

    pub fn state(&self) -> GameState {
        self.position.game_state()
    }

    pub fn is_over(&self) -> bool {
        self.state().is_game_over()
    }

    /// Play `mv` for the side to move.
    ///
    /// Rejected moves leave the game untouched and report why.
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let mover = self.side_to_move();
        let outcome = self.position.make_move(mv);
        if !outcome.is_legal() {
            return Err(GameError::Illegal {
                mv,
                reason: outcome,
            });
        }

        self.history.push(mv);
        debug!(%mv, color = %mover, ply = self.history.len(), "move played");

        let state = self.state();
        if state.is_game_over() {
            info!(%state, plies = self.history.len(), "game over");
        }
        Ok(())
    }

    /// Parse `text` in coordinate notation and play it.
    pub fn play_str(&mut self, text: &str) -> Result<Move, GameError> {
        let mv: Move = text.trim().parse()?;
        self.play(mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make_move::MoveOutcome;
    use crate::square::Square;

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.legal_moves().len(), 20);
        assert_eq!(game.state(), GameState::Normal(Color::White));
        assert!(!game.is_over());
    }

    #[test]
    fn play_records_history() {
        let mut game = Game::new();
        let mv = game.play_str("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));
        game.play_str(" e7e5\n").unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn illegal_move_reports_reason() {
        let mut game = Game::new();
        let err = game.play_str("e2e5").unwrap_err();
        assert_eq!(
            err,
            GameError::Illegal {
                mv: Move::new(Square::E2, Square::E5),
                reason: MoveOutcome::IllegalForPiece,
            }
        );
        assert!(game.history().is_empty());
        assert_eq!(*game.position(), Position::new_game());
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let mut game = Game::new();
        assert!(matches!(game.play_str("hello"), Err(GameError::Parse(_))));
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.play_str(text).unwrap();
        }
        assert_eq!(game.state(), GameState::Checkmate { winner: Color::Black });
        assert!(game.is_over());
        assert_eq!(game.play_str("a2a3"), Err(GameError::GameOver));
    }

    #[test]
    fn reset_starts_over() {
        let mut game = Game::new();
        game.play_str("d2d4").unwrap();
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(*game.position(), Position::new_game());
    }
}
