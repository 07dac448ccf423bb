//
// This file is part of perfect_tic_tac_toe.
//
// perfect_tic_tac_toe is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// perfect_tic_tac_toe is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with perfect_tic_tac_toe. If not, see <http://www.gnu.org/licenses/>.
//
// Copyright 2017 Chris Foster
//

//! The game of tic-tac-toe.
//!
//! The functions at the bottom of this module form the engine's public surface: board
//! queries, the transition function and `best_move`, which runs an exhaustive alpha-beta
//! search from the given position.
//!
//! ```rust
//! use perfect_tic_tac_toe::impls::tic_tac_toe::{self, Action, Mark};
//!
//! let board = "XX./OO./...".parse().unwrap();
//!
//! assert_eq!(tic_tac_toe::player_to_move(&board), Mark::X);
//! assert_eq!(tic_tac_toe::best_move(&board), Some(Action::new(0, 2)));
//! ```

use crate::analysis::search::{AlphaBeta, Search};

/// Either X or O.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// The contents of a single space.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Returns the mark in this space, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Cell {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// The placement of the next mark in an empty space.
///
/// The mark itself is implied by the board the action is applied to.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Action {
        Action { row, col }
    }

    /// The row-major index of the targeted space, or `None` if it lies off the board.
    fn index(&self) -> Option<usize> {
        if self.row < 3 && self.col < 3 {
            Some(self.col + 3 * self.row)
        } else {
            None
        }
    }

    fn from_index(index: usize) -> Action {
        Action::new(index / 3, index % 3)
    }
}

/// Either a win or a cat's game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resolution {
    Win(Mark),
    CatsGame,
}

/// Where a game stands.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Outcome {
    InProgress,
    WinX,
    WinO,
    Draw,
}

/// Rows, then columns, then diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 game board, stored row-major.
///
/// Boards are small `Copy` values.  Nothing mutates a board once it exists; `apply_move`
/// returns a new one.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Board([Cell; 9]);

impl Board {
    /// Creates an empty board.
    pub fn new() -> Board {
        Board([Cell::Empty; 9])
    }

    /// Creates a board from row-major cells.
    ///
    /// The cells must describe a position alternating play could reach: X has as many marks
    /// as O, or one more.
    pub fn from_cells(cells: [Cell; 9]) -> Result<Board, ParseBoardError> {
        let board = Board(cells);
        let x_count = board.count(Cell::X);
        let o_count = board.count(Cell::O);

        if x_count == o_count || x_count == o_count + 1 {
            Ok(board)
        } else {
            Err(ParseBoardError::ImpossibleMarkCounts { x_count, o_count })
        }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }

    /// Returns the contents of the space at `row`, `col`, or `None` if it lies off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Action::new(row, col).index().map(|index| self.0[index])
    }

    fn count(&self, cell: Cell) -> usize {
        self.0.iter().filter(|&&space| space == cell).count()
    }

    /// Returns the mark that will make the next move.
    pub fn next_mark(&self) -> Mark {
        if self.count(Cell::X) == self.count(Cell::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns every empty space, in row-major order.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.0.iter()
            .enumerate()
            .filter(|&(_, space)| space.is_empty())
            .map(|(index, _)| Action::from_index(index))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|space| !space.is_empty())
    }

    /// Returns the owner of the first completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter()
            .find(|line| {
                let [a, b, c] = **line;
                !self.0[a].is_empty() && self.0[a] == self.0[b] && self.0[a] == self.0[c]
            })
            .and_then(|line| self.0[line[0]].mark())
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Scores the board from X's perspective: 1 if X has won, -1 if O has won, 0 otherwise.
    ///
    /// This doesn't check whether the game is over; an unfinished board without a winner
    /// scores 0.
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Mark::X) => Outcome::WinX,
            Some(Mark::O) => Outcome::WinO,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Returns the board that results from the next mark being placed at `action`.
    pub fn apply_move(&self, action: Action) -> Result<Board, InvalidMove> {
        let index = action.index().ok_or(InvalidMove::OutOfBounds { action })?;

        if let Some(occupant) = self.0[index].mark() {
            return Err(InvalidMove::Occupied { action, occupant });
        }

        let mut next = *self;
        next.0[index] = Cell::from(self.next_mark());
        Ok(next)
    }
}

/// Returns the empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark that moves next.  This is defined even for finished games.
pub fn player_to_move(board: &Board) -> Mark {
    board.next_mark()
}

pub fn legal_actions(board: &Board) -> Vec<Action> {
    board.legal_actions()
}

pub fn apply_move(board: &Board, action: Action) -> Result<Board, InvalidMove> {
    board.apply_move(action)
}

pub fn winner(board: &Board) -> Option<Mark> {
    board.winner()
}

pub fn is_terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// Scores a finished board: 1 for an X win, -1 for an O win, 0 for a draw.
pub fn utility(board: &Board) -> i8 {
    board.utility()
}

pub fn outcome(board: &Board) -> Outcome {
    board.outcome()
}

/// Returns the optimal move for the player to move, or `None` if the game is over.
///
/// Among equally good moves, the first in row-major order wins.
pub fn best_move(board: &Board) -> Option<Action> {
    AlphaBeta::<Board>::new().search(board).ply
}

pub use self::error::{InvalidMove, ParseBoardError};

mod display;
mod engine;
mod error;

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use crate::impls::tic_tac_toe::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    /// Plays optimal moves for both sides until the game ends.
    fn play_optimally(mut board: Board) -> Board {
        while let Some(action) = best_move(&board) {
            board = apply_move(&board, action).unwrap();
        }
        board
    }

    #[test]
    fn test_initial_state() {
        let board = initial_state();

        assert!(board.cells().iter().all(|space| space.is_empty()));
        assert_eq!(player_to_move(&board), Mark::X);
        assert_eq!(legal_actions(&board).len(), 9);
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_player_to_move() {
        assert_eq!(player_to_move(&board("X../.../...")), Mark::O);
        assert_eq!(player_to_move(&board("X../.O./...")), Mark::X);
        // Defined on finished boards too.
        assert_eq!(player_to_move(&board("XXX/OO./...")), Mark::O);
        assert_eq!(player_to_move(&board("XOX/XOO/OXX")), Mark::O);
    }

    #[test]
    fn test_legal_actions() {
        let actions = legal_actions(&board("XO./.X./..O"));

        assert_eq!(actions, vec![
            Action::new(0, 2),
            Action::new(1, 0),
            Action::new(1, 2),
            Action::new(2, 0),
            Action::new(2, 1),
        ]);
        assert!(legal_actions(&board("XOX/XOO/OXX")).is_empty());
    }

    #[test]
    fn test_apply_move() {
        let before = board("X../.../...");
        let after = apply_move(&before, Action::new(1, 1)).unwrap();

        assert_eq!(after, board("X../.O./..."));
        assert_eq!(before, board("X../.../..."));
    }

    #[test]
    fn test_apply_move_occupied() {
        let before = board("X../.O./...");

        assert_eq!(
            apply_move(&before, Action::new(1, 1)),
            Err(InvalidMove::Occupied { action: Action::new(1, 1), occupant: Mark::O }),
        );
        assert_eq!(
            apply_move(&before, Action::new(0, 0)).unwrap_err().action(),
            Action::new(0, 0),
        );
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let error = apply_move(&initial_state(), Action::new(0, 3)).unwrap_err();

        assert_eq!(error, InvalidMove::OutOfBounds { action: Action::new(0, 3) });
        assert_eq!(error.to_string(), "invalid move (0, 3): coordinates out of bounds");
        assert_eq!(initial_state().get(3, 0), None);
    }

    #[test]
    fn test_winner() {
        let cases = [
            ("XXX/OO./...", Some(Mark::X)),
            ("OO./XXX/...", Some(Mark::X)),
            ("X../XO./XO.", Some(Mark::X)),
            ("X.O/.XO/X.O", Some(Mark::O)),
            ("X.O/.X./O.X", Some(Mark::X)),
            ("XXO/.O./O.X", Some(Mark::O)),
            ("OX./OX./O.X", Some(Mark::O)),
            ("XOX/XOO/OXX", None),
            ("X../.O./...", None),
            (".../.../...", None),
        ];

        for &(text, expected) in &cases {
            assert_eq!(winner(&board(text)), expected, "{}", text);
        }
    }

    #[test]
    fn test_terminal_and_utility() {
        let x_won = board("XXX/OO./...");
        let o_won = board("XX./OOO/X..");
        let drawn = board("XOX/XOO/OXX");
        let unfinished = board("XO./.../...");

        assert!(is_terminal(&x_won));
        assert!(is_terminal(&o_won));
        assert!(is_terminal(&drawn));
        assert!(!is_terminal(&unfinished));

        assert_eq!(utility(&x_won), 1);
        assert_eq!(utility(&o_won), -1);
        assert_eq!(utility(&drawn), 0);

        assert_eq!(outcome(&x_won), Outcome::WinX);
        assert_eq!(outcome(&o_won), Outcome::WinO);
        assert_eq!(outcome(&drawn), Outcome::Draw);
    }

    #[test]
    fn test_best_move_opening_draws() {
        let opening = best_move(&initial_state()).unwrap();
        let finished = play_optimally(apply_move(&initial_state(), opening).unwrap());

        assert!(is_terminal(&finished));
        assert_eq!(utility(&finished), 0);
    }

    #[test]
    fn test_best_move_completes_row() {
        let before = board("XX./OO./...");
        let action = best_move(&before).unwrap();

        assert_eq!(action, Action::new(0, 2));
        assert_eq!(utility(&apply_move(&before, action).unwrap()), 1);
    }

    #[test]
    fn test_best_move_last_space() {
        let before = board("XOX/XOO/OX.");
        let action = best_move(&before).unwrap();
        let after = apply_move(&before, action).unwrap();

        assert_eq!(action, Action::new(2, 2));
        assert!(is_terminal(&after));
        assert_eq!(utility(&after), 0);
    }

    #[test]
    fn test_best_move_o_wins() {
        let before = board("X.O/.XO/X..");
        assert_eq!(player_to_move(&before), Mark::O);

        let action = best_move(&before).unwrap();

        assert_eq!(action, Action::new(2, 2));
        assert_eq!(utility(&apply_move(&before, action).unwrap()), -1);
    }

    #[test]
    fn test_best_move_finished_game() {
        assert_eq!(best_move(&board("XXX/OO./...")), None);
        assert_eq!(best_move(&board("XOX/XOO/OXX")), None);
    }

    proptest! {
        #[test]
        fn test_random_playout(choices in proptest::collection::vec(any::<prop::sample::Index>(), 0..9)) {
            let mut board = initial_state();
            let mut moves = 0;

            for choice in choices {
                if is_terminal(&board) {
                    break;
                }

                let actions = legal_actions(&board);
                prop_assert_eq!(actions.len(), 9 - moves);

                let action = *choice.get(&actions);
                let mover = player_to_move(&board);
                let before = board;
                let after = apply_move(&board, action).unwrap();

                prop_assert_eq!(before, board);
                for row in 0..3 {
                    for col in 0..3 {
                        let expected = if Action::new(row, col) == action {
                            Cell::from(mover)
                        } else {
                            board.get(row, col).unwrap()
                        };
                        prop_assert_eq!(after.get(row, col), Some(expected));
                    }
                }
                prop_assert!(apply_move(&after, action).is_err());

                board = after;
                moves += 1;

                prop_assert_eq!(player_to_move(&board), mover.opponent());
                prop_assert_eq!(player_to_move(&board) == Mark::X, moves % 2 == 0);
                prop_assert_eq!(
                    is_terminal(&board),
                    winner(&board).is_some() || legal_actions(&board).is_empty()
                );
            }
        }
    }
}
