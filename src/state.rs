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

use std::fmt::Display;
use std::hash::Hash;

use crate::{Ply, Resolution};

/// The state of the game.
///
/// This should represent everything that makes up a single moment of the game, i.e. in chess,
/// this would be the board and all of its pieces, the side to move, etc.
///
/// States are values.  Executing a ply produces a new state and leaves `self` untouched, so
/// a search can explore sibling plies from the same state without any bookkeeping.
///
/// `Hash` and `Eq` should only cover data that matters to the outcome of the game, so that
/// identical positions reached through different move orders can share a transposition
/// table entry.
///
/// # Example
///
/// ```rust
/// use perfect_tic_tac_toe::State;
/// use perfect_tic_tac_toe::impls::tic_tac_toe::{Action, Board};
///
/// let board = Board::new();
/// let next = board.execute_plies(&[Action::new(1, 1), Action::new(0, 0)]).unwrap();
///
/// assert!(next.check_resolution().is_none());
/// assert_eq!(board, Board::new());
/// ```
pub trait State: Clone + Display + Eq + Hash {
    type Ply: Ply;
    type Resolution: Resolution;
    type Error: std::error::Error;

    /// Returns the state that results from executing `ply` on this state.
    fn execute_ply(&self, ply: &Self::Ply) -> Result<Self, Self::Error>;

    /// Returns `None` if the game has not reached a conclusion.
    fn check_resolution(&self) -> Option<Self::Resolution>;

    /// Executes each ply in `plies` on the result of the previous ply.
    fn execute_plies(&self, plies: &[Self::Ply]) -> Result<Self, Self::Error> {
        let mut state = self.clone();
        for ply in plies {
            state = state.execute_ply(ply)?;
        }
        Ok(state)
    }
}
