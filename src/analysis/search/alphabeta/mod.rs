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

//! Exhaustive minimax search with alpha-beta pruning.

use std::cmp;
use std::fmt;
use std::time::Instant;

use tracing::{debug, trace};

use crate::analysis::{Evaluatable, Evaluation, Extrapolatable};
use crate::analysis::search::Search;
use crate::state::State;

use self::transposition_table::{Bound, TranspositionTable, TranspositionTableEntry};

/// The results of the search.
pub struct Analysis<S> where
    S: State {
    /// The state on which the search was performed.
    pub state: S,
    /// The best ply for the player to move, or `None` if the game is already over.
    pub ply: Option<<S as State>::Ply>,
    /// The minimax value of the state.
    pub evaluation: Evaluation,
    pub statistics: Statistics,
}

/// A minimax search that runs every line of play to its conclusion.
///
/// The first player maximizes utility and the second minimizes it.  Ties between equally
/// good plies go to whichever the state extrapolates first.
///
/// # Example
///
/// ```rust
/// use perfect_tic_tac_toe::analysis::search::{AlphaBeta, Search};
/// use perfect_tic_tac_toe::impls::tic_tac_toe::{Action, Board};
///
/// let board: Board = "XX./OO./...".parse().unwrap();
/// let analysis = AlphaBeta::new().search(&board);
///
/// assert_eq!(analysis.ply, Some(Action::new(0, 2)));
/// assert_eq!(analysis.evaluation.0, 1);
/// ```
pub struct AlphaBeta<S> where
    S: State + Evaluatable + Extrapolatable<<S as State>::Ply> {
    transposition_table: Option<TranspositionTable<S>>,
    statistics: Statistics,
}

impl<S> AlphaBeta<S> where
    S: State + Evaluatable + Extrapolatable<<S as State>::Ply> {
    /// Creates a plain search that caches nothing.
    pub fn new() -> AlphaBeta<S> {
        AlphaBeta {
            transposition_table: None,
            statistics: Statistics::new(),
        }
    }

    /// Creates a search that remembers the value of every state it finishes, so transposed
    /// states are only searched once.  The table is emptied at the start of each search.
    pub fn with_transposition_table() -> AlphaBeta<S> {
        AlphaBeta {
            transposition_table: Some(TranspositionTable::new()),
            statistics: Statistics::new(),
        }
    }

    /// Returns the value of `state` for a maximizing player to move, given that the
    /// maximizer can already guarantee `alpha` and the minimizer `beta`.
    pub fn max_value(&mut self, state: &S, mut alpha: Evaluation, beta: Evaluation) -> Evaluation {
        self.statistics.visited += 1;

        if state.check_resolution().is_some() {
            self.statistics.evaluated += 1;
            return state.utility();
        }

        if let Some(value) = self.probe(state, alpha, beta) {
            return value;
        }

        let window = (alpha, beta);
        let mut value = Evaluation::MIN;

        for ply in state.extrapolate() {
            let next = expand(state, &ply);
            value = cmp::max(value, self.min_value(&next, alpha, beta));
            alpha = cmp::max(alpha, value);

            if alpha >= beta {
                self.statistics.cutoffs += 1;
                break;
            }
        }

        self.store(state, value, window);
        value
    }

    /// Returns the value of `state` for a minimizing player to move.  The mirror image of
    /// `max_value`.
    pub fn min_value(&mut self, state: &S, alpha: Evaluation, mut beta: Evaluation) -> Evaluation {
        self.statistics.visited += 1;

        if state.check_resolution().is_some() {
            self.statistics.evaluated += 1;
            return state.utility();
        }

        if let Some(value) = self.probe(state, alpha, beta) {
            return value;
        }

        let window = (alpha, beta);
        let mut value = Evaluation::MAX;

        for ply in state.extrapolate() {
            let next = expand(state, &ply);
            value = cmp::min(value, self.max_value(&next, alpha, beta));
            beta = cmp::min(beta, value);

            if beta <= alpha {
                self.statistics.cutoffs += 1;
                break;
            }
        }

        self.store(state, value, window);
        value
    }

    /// Returns the plies of a game played out from `state` with both sides following
    /// this search.
    pub fn principal_variation(&mut self, state: &S) -> Vec<<S as State>::Ply> {
        let mut plies = Vec::new();
        let mut state = state.clone();

        while let Some(ply) = self.search(&state).ply {
            state = expand(&state, &ply);
            plies.push(ply);
        }

        plies
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn probe(&mut self, state: &S, alpha: Evaluation, beta: Evaluation) -> Option<Evaluation> {
        let entry = *self.transposition_table.as_ref()?.get(state)?;
        self.statistics.tt_hits += 1;

        let value = entry.resolve(alpha, beta)?;
        self.statistics.tt_saves += 1;
        Some(value)
    }

    fn store(&mut self, state: &S, value: Evaluation, (alpha, beta): (Evaluation, Evaluation)) {
        if let Some(ref mut transposition_table) = self.transposition_table {
            transposition_table.insert(state.clone(), TranspositionTableEntry {
                value,
                bound: Bound::of(value, alpha, beta),
            });
            self.statistics.tt_stores += 1;
        }
    }
}

impl<S> Default for AlphaBeta<S> where
    S: State + Evaluatable + Extrapolatable<<S as State>::Ply> {
    fn default() -> AlphaBeta<S> {
        AlphaBeta::new()
    }
}

impl<S> Search<S> for AlphaBeta<S> where
    S: State + Evaluatable + Extrapolatable<<S as State>::Ply> {
    type Analysis = Analysis<S>;

    fn search(&mut self, state: &S) -> Analysis<S> {
        let start = Instant::now();

        self.statistics = Statistics::new();
        if let Some(ref mut transposition_table) = self.transposition_table {
            transposition_table.clear();
        }

        let mut best: Option<(<S as State>::Ply, Evaluation)> = None;

        if state.check_resolution().is_none() {
            let maximizing = state.is_maximizing();

            for ply in state.extrapolate() {
                let next = expand(state, &ply);
                let value = if maximizing {
                    self.min_value(&next, Evaluation::MIN, Evaluation::MAX)
                } else {
                    self.max_value(&next, Evaluation::MIN, Evaluation::MAX)
                };

                trace!(%ply, %value, "evaluated root ply");

                let improves = match best {
                    None => true,
                    Some((_, best_value)) if maximizing => value > best_value,
                    Some((_, best_value)) => value < best_value,
                };

                if improves {
                    best = Some((ply, value));
                }
            }
        }

        self.statistics.time = start.elapsed();

        let (ply, evaluation) = match best {
            Some((ply, value)) => (Some(ply), value),
            None => (None, state.utility()),
        };

        debug!(
            ply = ?ply.as_ref().map(|ply| ply.to_string()),
            %evaluation,
            visited = self.statistics.visited,
            cutoffs = self.statistics.cutoffs,
            tt_saves = self.statistics.tt_saves,
            "search complete"
        );

        Analysis {
            state: state.clone(),
            ply,
            evaluation,
            statistics: self.statistics,
        }
    }
}

/// Executes a ply that `state` itself extrapolated.
///
/// # Panics
/// Panics if the state rejects it, which means its `Extrapolatable` and `State`
/// implementations disagree.
fn expand<S>(state: &S, ply: &<S as State>::Ply) -> S where
    S: State {
    match state.execute_ply(ply) {
        Ok(next) => next,
        Err(error) => panic!("Extrapolated ply {} could not be executed on {}: {}", ply, state, error),
    }
}

impl<S> fmt::Display for Analysis<S> where
    S: State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        match self.ply {
            Some(ref ply) => writeln!(f, "Ply: {}", ply)?,
            None => writeln!(f, "Ply: none")?,
        }
        writeln!(f, "Evaluation: {}", self.evaluation)?;
        write!(f, "Statistics:\n{}", self.statistics)
    }
}

pub use self::statistics::Statistics;

mod statistics;
mod transposition_table;
