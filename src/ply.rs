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

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// This trait marks a ply.
///
/// A ply is a single move by a single player.  It only has meaning relative to the
/// state it was generated from.
///
/// # Example
///
/// For tic-tac-toe, we might have:
///
/// ```rust
/// # use std::fmt;
/// # use perfect_tic_tac_toe::Ply;
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// struct Move {
///     row: usize,
///     col: usize,
/// }
///
/// impl Ply for Move { }
/// # impl fmt::Display for Move { fn fmt(&self, _: &mut fmt::Formatter) -> fmt::Result { Ok(()) } }
/// ```
pub trait Ply: Clone + Debug + Display + Eq + Hash { }
