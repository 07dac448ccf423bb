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

use std::collections::HashMap;
use std::hash::BuildHasherDefault;

use fnv::FnvHasher;

use crate::analysis::Evaluation;
use crate::state::State;

/// How a stored value relates to the true minimax value of its state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Bound {
    /// The true value is at least the stored value.
    Lower,
    Exact,
    /// The true value is at most the stored value.
    Upper,
}

impl Bound {
    /// Classifies a value returned by a search of the window `alpha`, `beta`.
    pub fn of(value: Evaluation, alpha: Evaluation, beta: Evaluation) -> Bound {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TranspositionTableEntry {
    pub value: Evaluation,
    pub bound: Bound,
}

impl TranspositionTableEntry {
    /// Returns the stored value if it settles a search of the window `alpha`, `beta`.
    pub fn resolve(&self, alpha: Evaluation, beta: Evaluation) -> Option<Evaluation> {
        let usable = match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.value >= beta,
            Bound::Upper => self.value <= alpha,
        };

        if usable {
            Some(self.value)
        } else {
            None
        }
    }
}

pub struct TranspositionTable<S> where
    S: State {
    map: HashMap<S, TranspositionTableEntry, BuildHasherDefault<FnvHasher>>,
}

impl<S> TranspositionTable<S> where
    S: State {
    pub fn new() -> TranspositionTable<S> {
        TranspositionTable {
            map: HashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, state: &S) -> Option<&TranspositionTableEntry> {
        self.map.get(state)
    }

    pub fn insert(&mut self, state: S, entry: TranspositionTableEntry) -> Option<TranspositionTableEntry> {
        self.map.insert(state, entry)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
