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
use std::str::FromStr;

use crate::impls::tic_tac_toe::{Action, Board, Cell, Mark, Outcome, ParseBoardError};

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Outcome::InProgress => "in progress",
            Outcome::WinX => "X wins",
            Outcome::WinO => "O wins",
            Outcome::Draw => "cat's game",
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   0  1  2")?;
        for (row, spaces) in self.cells().chunks(3).enumerate() {
            write!(f, "\n{} ", row)?;
            for space in spaces {
                match space.mark() {
                    Some(mark) => write!(f, "[{}]", mark)?,
                    None => write!(f, "[ ]")?,
                }
            }
        }
        Ok(())
    }
}

/// Reads nine spaces in row-major order.  `X` and `O` (either case) are marks; `.`, `-`, `_`
/// and spaces are empty.  `/` and line breaks may separate rows and are otherwise ignored.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Board, ParseBoardError> {
        let mut cells = [Cell::Empty; 9];
        let mut found = 0;

        for c in s.chars() {
            let cell = match c {
                'X' | 'x' => Cell::X,
                'O' | 'o' => Cell::O,
                '.' | '-' | '_' | ' ' => Cell::Empty,
                '/' | '\n' | '\r' => continue,
                _ => return Err(ParseBoardError::UnexpectedCharacter { found: c }),
            };

            if let Some(space) = cells.get_mut(found) {
                *space = cell;
            }
            found += 1;
        }

        if found != 9 {
            return Err(ParseBoardError::WrongSpaceCount { found });
        }

        Board::from_cells(cells)
    }
}
