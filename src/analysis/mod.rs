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

//! Traits and tools for analyzing a game.
//!
//! A `State` becomes searchable once it implements `Evaluatable`, which scores concluded
//! positions, and `Extrapolatable`, which lists the plies available from a position.

use crate::ply::Ply;

/// Provides the plies available from a state.
///
/// This is usually implemented on a `State`.  The order of the plies is the order in which a
/// search considers them, so it should be deterministic.
pub trait Extrapolatable<P> where
    P: Ply {
    /// Pushes every ply that can be executed on this state onto `plies`.
    fn extrapolate_into(&self, plies: &mut Vec<P>);

    /// Returns every ply that can be executed on this state.
    fn extrapolate(&self) -> Vec<P> {
        let mut plies = Vec::new();
        self.extrapolate_into(&mut plies);
        plies
    }
}

pub use self::evaluation::{Evaluatable, Evaluation};

pub mod search;

mod evaluation;
