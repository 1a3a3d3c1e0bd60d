//! Turn state machine sequencing human and automated moves
//!
//! A session owns the board and the only mutation path for it. Every
//! externally submitted move runs to completion on the caller's thread:
//! occupancy update, win scan, draw check, turn flip, and at most one
//! automated reply. Invalid submissions (occupied cell, wrong turn,
//! terminal state) are silent no-ops; gating input is the caller's job
//! via [`GameSession::accepts_input`].

use crate::board::{Board, Mark, Pos, WIN_LENGTH};
use crate::eval::select_move;
use crate::rules::find_winning_run;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won(Mark),
    Draw,
}

/// Terminal result from the human player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HumanWin,
    HumanLoss,
    Draw,
}

/// One game of 6x6 four-in-a-row between a human and the automated
/// opponent.
///
/// X always moves first; the construction flag decides whether X is the
/// automated role. When it is, the automated opening move is played
/// during construction, so the session is always waiting on human input
/// while the game is live.
pub struct GameSession {
    board: Board,
    turn: Mark,
    human: Mark,
    automated: Mark,
    available: Vec<Pos>,
    status: Status,
    winning_run: Option<[Pos; WIN_LENGTH]>,
    last_move: Option<Pos>,
    accepts_input: bool,
}

impl GameSession {
    pub fn new(automated_first: bool) -> Self {
        let board = Board::new();
        let (human, automated) = if automated_first {
            (Mark::O, Mark::X)
        } else {
            (Mark::X, Mark::O)
        };

        let mut session = Self {
            available: board.empty_positions().collect(),
            board,
            turn: Mark::X,
            human,
            automated,
            status: Status::Playing,
            winning_run: None,
            last_move: None,
            accepts_input: true,
        };
        session.automated_reply();
        session
    }

    /// Resume from an arbitrary position.
    ///
    /// The available set is rebuilt from the board's empty cells. If the
    /// side to move is the automated role its reply is played
    /// immediately, keeping the invariant that a live session waits on
    /// human input.
    pub fn from_position(board: Board, human: Mark, turn: Mark) -> Self {
        let mut session = Self {
            available: board.empty_positions().collect(),
            board,
            turn,
            human,
            automated: human.opponent(),
            status: Status::Playing,
            winning_run: None,
            last_move: None,
            accepts_input: true,
        };
        session.automated_reply();
        session
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn human_mark(&self) -> Mark {
        self.human
    }

    #[inline]
    pub fn automated_mark(&self) -> Mark {
        self.automated
    }

    /// Cells forming the winning run, in detection order
    #[inline]
    pub fn winning_run(&self) -> Option<[Pos; WIN_LENGTH]> {
        self.winning_run
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Whether external input should still be forwarded to the session
    #[inline]
    pub fn accepts_input(&self) -> bool {
        self.accepts_input
    }

    /// Terminal result, `None` while the game is live
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Playing => None,
            Status::Won(mark) if mark == self.human => Some(Outcome::HumanWin),
            Status::Won(_) => Some(Outcome::HumanLoss),
            Status::Draw => Some(Outcome::Draw),
        }
    }

    /// Submit a move for `mark`.
    ///
    /// A no-op unless the session is live, it is `mark`'s turn, and the
    /// cell is empty. On success the move is applied in full, including
    /// the automated reply when the turn passes to the automated role.
    pub fn apply_move(&mut self, pos: Pos, mark: Mark) {
        if self.status != Status::Playing {
            return;
        }
        if mark != self.turn || !self.board.is_empty(pos) {
            return;
        }

        self.place(pos);
        self.automated_reply();
    }

    /// Apply one move for the side to move: occupancy, win scan,
    /// available-set update, draw check, turn flip.
    fn place(&mut self, pos: Pos) {
        let mark = self.turn;
        self.board.place_mark(pos, mark);
        self.last_move = Some(pos);

        if let Some(run) = find_winning_run(&self.board, pos, mark) {
            self.winning_run = Some(run);
            self.game_over(Status::Won(mark));
            return;
        }

        if let Ok(idx) = self.available.binary_search(&pos) {
            self.available.remove(idx);
        }
        if self.available.is_empty() {
            self.game_over(Status::Draw);
            return;
        }

        self.turn = mark.opponent();
    }

    /// Play the automated move when it is due. At most one reply per
    /// external move: after it the turn is back with the human.
    fn automated_reply(&mut self) {
        if self.status != Status::Playing || self.turn != self.automated {
            return;
        }

        match select_move(&self.board, self.automated) {
            Some(pos) => self.place(pos),
            // Unreachable when the available set is maintained, kept as
            // the degraded terminal per the error model
            None => self.game_over(Status::Draw),
        }
    }

    fn game_over(&mut self, status: Status) {
        self.status = status;
        self.accepts_input = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: [&str; 6]) -> Board {
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.place_mark(Pos::new(x as u8, y as u8), mark);
            }
        }
        board
    }

    #[test]
    fn test_new_session_roles() {
        let session = GameSession::new(false);
        assert_eq!(session.human_mark(), Mark::X);
        assert_eq!(session.automated_mark(), Mark::O);
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.status(), Status::Playing);
        assert!(session.accepts_input());
        assert_eq!(session.board().mark_count(), 0);
    }

    #[test]
    fn test_automated_first_plays_opening_move() {
        let session = GameSession::new(true);
        assert_eq!(session.automated_mark(), Mark::X);
        // Deterministic opening: first cell with all four axes included
        assert_eq!(session.board().get(Pos::new(2, 1)), Mark::X);
        assert_eq!(session.board().mark_count(), 1);
        assert_eq!(session.turn(), Mark::O);
    }

    #[test]
    fn test_human_move_draws_one_automated_reply() {
        let mut session = GameSession::new(false);
        session.apply_move(Pos::new(0, 0), Mark::X);

        assert_eq!(session.board().get(Pos::new(0, 0)), Mark::X);
        assert_eq!(session.board().get(Pos::new(2, 1)), Mark::O);
        assert_eq!(session.board().mark_count(), 2);
        assert_eq!(session.turn(), Mark::X);
    }

    #[test]
    fn test_wrong_turn_is_ignored() {
        let mut session = GameSession::new(false);
        session.apply_move(Pos::new(0, 0), Mark::O);
        assert_eq!(session.board().mark_count(), 0);
        assert_eq!(session.turn(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut session = GameSession::new(false);
        session.apply_move(Pos::new(0, 0), Mark::X);
        let marks = session.board().mark_count();

        session.apply_move(Pos::new(0, 0), Mark::X);
        session.apply_move(Pos::new(2, 1), Mark::X); // automated reply cell
        assert_eq!(session.board().mark_count(), marks);
    }

    #[test]
    fn test_completing_a_row_wins() {
        let board = board_from_rows([
            "XXX...",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        let mut session = GameSession::from_position(board, Mark::X, Mark::X);
        session.apply_move(Pos::new(3, 0), Mark::X);

        assert_eq!(session.status(), Status::Won(Mark::X));
        assert_eq!(session.outcome(), Some(Outcome::HumanWin));
        assert!(!session.accepts_input());

        let mut run: Vec<Pos> = session.winning_run().unwrap().to_vec();
        run.sort();
        assert_eq!(
            run,
            vec![
                Pos::new(0, 0),
                Pos::new(1, 0),
                Pos::new(2, 0),
                Pos::new(3, 0)
            ]
        );
    }

    #[test]
    fn test_three_in_a_row_keeps_playing() {
        let board = board_from_rows([
            "XX....",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        let mut session = GameSession::from_position(board, Mark::X, Mark::X);
        session.apply_move(Pos::new(2, 0), Mark::X);

        assert_eq!(session.status(), Status::Playing);
        assert!(session.winning_run().is_none());
        // The automated reply landed somewhere
        assert_eq!(session.board().mark_count(), 4);
        assert_eq!(session.turn(), Mark::X);
    }

    #[test]
    fn test_no_moves_accepted_after_win() {
        let board = board_from_rows([
            "XXX...",
            "......",
            "......",
            "......",
            "......",
            "......",
        ]);
        let mut session = GameSession::from_position(board, Mark::X, Mark::X);
        session.apply_move(Pos::new(3, 0), Mark::X);
        assert_eq!(session.status(), Status::Won(Mark::X));

        let marks = session.board().mark_count();
        session.apply_move(Pos::new(0, 5), Mark::X);
        session.apply_move(Pos::new(0, 5), Mark::O);
        assert_eq!(session.board().mark_count(), marks);
        assert_eq!(session.status(), Status::Won(Mark::X));
    }

    #[test]
    fn test_filling_the_board_without_a_run_is_a_draw() {
        // Full 6x6 filling with no 4-run for either mark. X moved
        // first, so the 36th cell falls to O; the human plays O here.
        let board = board_from_rows([
            "XXOXOX",
            "OOOXOO",
            "OXOXXX",
            "XOXOXX",
            "OXOXXO",
            "OOOX.X",
        ]);
        let mut session = GameSession::from_position(board, Mark::O, Mark::O);
        session.apply_move(Pos::new(4, 5), Mark::O);

        assert_eq!(session.status(), Status::Draw);
        assert_eq!(session.outcome(), Some(Outcome::Draw));
        assert!(!session.accepts_input());
        assert!(session.board().is_full());
    }

    #[test]
    fn test_turn_alternates_until_terminal() {
        let mut session = GameSession::new(false);
        while session.status() == Status::Playing {
            assert_eq!(session.turn(), session.human_mark());
            let pos = session.board().empty_positions().next().unwrap();
            session.apply_move(pos, Mark::X);
        }
        assert!(session.outcome().is_some());
    }

    #[test]
    fn test_greedy_human_loses_to_column_block_failure() {
        // Human always takes the lowest-index cell; the automated side
        // builds and completes column x=2 on its sixth move.
        let mut session = GameSession::new(false);
        while session.status() == Status::Playing {
            let pos = session.board().empty_positions().next().unwrap();
            session.apply_move(pos, Mark::X);
        }

        assert_eq!(session.status(), Status::Won(Mark::O));
        assert_eq!(session.outcome(), Some(Outcome::HumanLoss));
        assert_eq!(session.board().mark_count(), 12);

        let mut run: Vec<Pos> = session.winning_run().unwrap().to_vec();
        run.sort();
        assert_eq!(
            run,
            vec![
                Pos::new(2, 0),
                Pos::new(2, 1),
                Pos::new(2, 2),
                Pos::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_greedy_human_loses_when_automated_opens() {
        let mut session = GameSession::new(true);
        while session.status() == Status::Playing {
            let pos = session.board().empty_positions().next().unwrap();
            session.apply_move(pos, Mark::O);
        }

        assert_eq!(session.status(), Status::Won(Mark::X));
        assert_eq!(session.outcome(), Some(Outcome::HumanLoss));
        assert_eq!(session.board().mark_count(), 19);
    }

    #[test]
    fn test_available_set_matches_empty_cells() {
        let mut session = GameSession::new(false);
        for &(x, y) in &[(0u8, 0u8), (4, 4), (0, 5)] {
            session.apply_move(Pos::new(x, y), Mark::X);
            if session.status() != Status::Playing {
                break;
            }
            let empties: Vec<Pos> = session.board().empty_positions().collect();
            assert_eq!(session.available, empties);
        }
    }
}
