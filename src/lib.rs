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

//! A perfect-play engine for tic-tac-toe.
//!
//! The engine answers every question a tic-tac-toe front-end needs to ask of a position:
//! whose turn it is, which moves are legal, whether the game is over and how it ended, and
//! which move is best.  The best move comes from an exhaustive minimax search with
//! alpha-beta pruning, so the engine never loses.
//!
//! # Usage
//!
//! ```rust
//! use perfect_tic_tac_toe::impls::tic_tac_toe::{self, Outcome};
//!
//! let mut board = tic_tac_toe::initial_state();
//! while let Some(action) = tic_tac_toe::best_move(&board) {
//!     board = tic_tac_toe::apply_move(&board, action).unwrap();
//! }
//!
//! assert_eq!(tic_tac_toe::outcome(&board), Outcome::Draw);
//! ```
//!
//! # Implementation
//!
//! The three basic traits are `Ply`, `Resolution`, and `State`.  These form the basic
//! building blocks of a zero-sum game.  A state that also implements
//! `analysis::Evaluatable` and `analysis::Extrapolatable` can be searched with
//! `analysis::search::AlphaBeta`.  The game of tic-tac-toe in `impls::tic_tac_toe` is
//! built this way.
//!
//! The search reports its progress through `tracing`; install a subscriber to see it.

pub use self::ply::Ply;
pub use self::resolution::Resolution;
pub use self::state::State;

pub mod analysis;
pub mod impls;

mod ply;
mod resolution;
mod state;
