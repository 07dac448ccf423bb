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

use std::fmt;

use crate::state::State;

/// The minimax value of a state, from the perspective of the player who moves first.
///
/// Positive values favor the first player and negative values their opponent.  `MIN` and
/// `MAX` lie beyond any utility a game produces and serve as the infinite bounds of a search
/// window.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Evaluation(pub i8);

impl Evaluation {
    pub const MIN: Evaluation = Evaluation(i8::MIN);
    pub const MAX: Evaluation = Evaluation(i8::MAX);
    pub const DRAW: Evaluation = Evaluation(0);
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Evaluation::MIN => write!(f, "-inf"),
            Evaluation::MAX => write!(f, "+inf"),
            Evaluation(value) => write!(f, "{}", value),
        }
    }
}

/// Scores concluded states.
///
/// This is usually implemented on a `State`.
pub trait Evaluatable: State {
    /// Returns the utility of a concluded state.
    ///
    /// No check is made that the game is actually over; the search only calls this on states
    /// whose `check_resolution` is `Some`.
    fn utility(&self) -> Evaluation;

    /// Returns `true` if the player to move is the first player, who maximizes utility.
    fn is_maximizing(&self) -> bool;

    /// Returns the utility of the state after executing `plies`.
    ///
    /// # Panics
    /// Will panic if the execution of any ply in `plies` causes an error.
    fn utility_after(&self, plies: &[Self::Ply]) -> Evaluation {
        match self.execute_plies(plies) {
            Ok(state) => state.utility(),
            Err(error) => panic!("Error calculating utility: {}", error),
        }
    }
}
