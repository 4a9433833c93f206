//! Game session management for the tic-tac-toe GUI

use tracing::info;

use crate::board::{Board, Mark, Pos, BOARD_SIZE};
use crate::engine::{AiOpponent, MoveResult};

/// Outcome state of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Draw,
    HumanWon,
    ComputerWon,
}

/// One human-versus-computer game.
///
/// The human's mark is fixed at creation; the computer takes the other
/// mark. X always moves first. The computer move runs synchronously - a
/// depth-2 search over at most nine cells finishes within a frame.
pub struct GameSession {
    pub board: Board,
    pub human_mark: Mark,
    pub current_turn: Mark,
    pub status: GameStatus,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub winning_line: Option<[Pos; 3]>,
    pub message: Option<String>,
    opponent: AiOpponent,
}

impl GameSession {
    pub fn new(human_mark: Mark) -> Self {
        debug_assert!(human_mark != Mark::Empty);
        Self {
            board: Board::new(),
            human_mark,
            current_turn: Mark::X,
            status: GameStatus::InProgress,
            move_history: Vec::new(),
            last_ai_result: None,
            winning_line: None,
            message: None,
            opponent: AiOpponent::new(human_mark.opponent()),
        }
    }

    /// Start over with the same symbol assignment
    pub fn reset(&mut self) {
        *self = Self::new(self.human_mark);
    }

    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current_turn == self.human_mark
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.current_turn == self.computer_mark()
    }

    /// Attempt the human's move.
    ///
    /// An invalid placement is recoverable: the board is unchanged and the
    /// caller re-prompts with the returned message.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.board
            .place(pos, self.human_mark)
            .map_err(|e| e.to_string())?;
        self.finish_move(pos, self.human_mark);
        Ok(())
    }

    /// Run the computer's move if it is the computer's turn.
    pub fn play_computer_move(&mut self) {
        if !self.is_computer_turn() {
            return;
        }

        let mark = self.computer_mark();
        let result = self.opponent.get_move_with_stats(&self.board);
        let chosen = result.best_move;
        self.last_ai_result = Some(result);

        match chosen {
            Some(pos) => {
                // The search only yields cells reported empty by the board
                self.board.set(pos, mark);
                self.finish_move(pos, mark);
            }
            None => {
                self.message = Some("Computer has no move".to_string());
            }
        }
    }

    /// Record a placed move and update the game status.
    fn finish_move(&mut self, pos: Pos, mark: Mark) {
        self.move_history.push((pos, mark));
        self.message = None;

        if self.board.is_win(mark) {
            self.status = if mark == self.human_mark {
                GameStatus::HumanWon
            } else {
                GameStatus::ComputerWon
            };
            self.winning_line = self.find_winning_line(pos, mark);
            info!(status = ?self.status, moves = self.move_history.len(), "game over");
        } else if self.board.is_draw() {
            self.status = GameStatus::Draw;
            info!(moves = self.move_history.len(), "game drawn");
        } else {
            self.current_turn = mark.opponent();
        }
    }

    /// The completed line through the just-placed mark, for highlighting.
    fn find_winning_line(&self, pos: Pos, mark: Mark) -> Option<[Pos; 3]> {
        let (r, c) = (pos.row, pos.col);
        let size = BOARD_SIZE as u8;

        let row: [Pos; 3] = std::array::from_fn(|i| Pos::new(r, i as u8));
        if row.iter().all(|&p| self.board.get(p) == mark) {
            return Some(row);
        }

        let col: [Pos; 3] = std::array::from_fn(|i| Pos::new(i as u8, c));
        if col.iter().all(|&p| self.board.get(p) == mark) {
            return Some(col);
        }

        if r == c {
            let diag: [Pos; 3] = std::array::from_fn(|i| Pos::new(i as u8, i as u8));
            if diag.iter().all(|&p| self.board.get(p) == mark) {
                return Some(diag);
            }
        }

        if r + c == size - 1 {
            let diag: [Pos; 3] = std::array::from_fn(|i| Pos::new(i as u8, size - 1 - i as u8));
            if diag.iter().all(|&p| self.board.get(p) == mark) {
                return Some(diag);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first() {
        let session = GameSession::new(Mark::X);
        assert!(session.is_human_turn());

        let session = GameSession::new(Mark::O);
        assert!(session.is_computer_turn());
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut session = GameSession::new(Mark::X);
        session.try_place(Pos::new(0, 0)).unwrap();

        assert_eq!(session.board.get(Pos::new(0, 0)), Mark::X);
        assert!(session.is_computer_turn());
        assert_eq!(session.move_history.len(), 1);
    }

    #[test]
    fn test_occupied_cell_is_recoverable() {
        let mut session = GameSession::new(Mark::X);
        session.try_place(Pos::new(0, 0)).unwrap();
        session.play_computer_move();

        let taken = session.move_history[1].0;
        assert!(session.try_place(taken).is_err());
        // Still the human's turn, board unchanged
        assert!(session.is_human_turn());
        assert_eq!(session.move_history.len(), 2);
    }

    #[test]
    fn test_out_of_turn_move_rejected() {
        let mut session = GameSession::new(Mark::O);
        // X (the computer) has not moved yet
        let err = session.try_place(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, "Not your turn");
    }

    #[test]
    fn test_computer_opens_when_human_is_o() {
        let mut session = GameSession::new(Mark::O);
        session.play_computer_move();

        assert_eq!(session.move_history.len(), 1);
        assert_eq!(session.move_history[0].1, Mark::X);
        assert!(session.is_human_turn());
        assert!(session.last_ai_result.is_some());
    }

    #[test]
    fn test_game_always_terminates() {
        let mut session = GameSession::new(Mark::X);

        while !session.is_over() {
            if session.is_human_turn() {
                let pos = session.board.available_moves()[0];
                session.try_place(pos).unwrap();
            } else {
                session.play_computer_move();
            }
        }

        assert!(session.move_history.len() <= 9);
        assert_ne!(session.status, GameStatus::InProgress);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut session = GameSession::new(Mark::X);
        // Drive the board directly into a human win
        session.try_place(Pos::new(0, 0)).unwrap();
        session.board.set(Pos::new(2, 2), Mark::O);
        session.current_turn = Mark::X;
        session.try_place(Pos::new(0, 1)).unwrap();
        session.board.set(Pos::new(2, 0), Mark::O);
        session.current_turn = Mark::X;
        session.try_place(Pos::new(0, 2)).unwrap();

        assert_eq!(session.status, GameStatus::HumanWon);
        assert_eq!(
            session.winning_line,
            Some([Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(session.try_place(Pos::new(1, 1)), Err("Game is over".to_string()));
    }

    #[test]
    fn test_computer_blocks_in_session() {
        let mut session = GameSession::new(Mark::X);
        session.try_place(Pos::new(0, 0)).unwrap();
        session.play_computer_move();

        // Force the threat if the computer's reply left row 0 open
        if session.board.is_empty(Pos::new(0, 1)) {
            session.try_place(Pos::new(0, 1)).unwrap();
            session.play_computer_move();
            if session.board.is_empty(Pos::new(0, 2)) {
                // Computer failed to block the completed threat
                session.try_place(Pos::new(0, 2)).unwrap();
                assert_ne!(session.status, GameStatus::HumanWon, "computer let a row through");
            }
        }
    }

    #[test]
    fn test_reset_keeps_assignment() {
        let mut session = GameSession::new(Mark::O);
        session.play_computer_move();
        session.reset();

        assert_eq!(session.human_mark, Mark::O);
        assert!(session.move_history.is_empty());
        assert_eq!(session.status, GameStatus::InProgress);
        assert!(session.is_computer_turn());
    }
}
