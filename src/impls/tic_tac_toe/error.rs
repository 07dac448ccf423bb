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

use derive_more::{Display, Error};

use crate::impls::tic_tac_toe::{Action, Mark};

/// A move that cannot be made on the board it was offered to.
///
/// This is a caller error: every action returned by `legal_actions` can be applied to the
/// board it came from.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum InvalidMove {
    /// The targeted space already holds a mark.
    #[display("invalid move {action}: space already occupied by {occupant}")]
    Occupied { action: Action, occupant: Mark },
    /// The coordinates don't name a space on the board.
    #[display("invalid move {action}: coordinates out of bounds")]
    OutOfBounds { action: Action },
}

impl InvalidMove {
    /// Returns the action that was rejected.
    pub fn action(&self) -> Action {
        match *self {
            InvalidMove::Occupied { action, .. } |
            InvalidMove::OutOfBounds { action } => action,
        }
    }
}

/// An error building a `Board` from text or from raw cells.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display("expected 9 spaces, found {found}")]
    WrongSpaceCount { found: usize },
    #[display("unexpected character {found:?}")]
    UnexpectedCharacter { found: char },
    /// X moves first and the players alternate, so X has either as many marks as O or one more.
    #[display("{x_count} X and {o_count} O marks cannot arise from alternating play")]
    ImpossibleMarkCounts { x_count: usize, o_count: usize },
}
