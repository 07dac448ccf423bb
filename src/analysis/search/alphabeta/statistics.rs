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
use std::time::Duration;

/// Counters collected during a single search.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Statistics {
    /// States entered by the value functions.
    pub visited: u32,
    /// Concluded states scored by their utility.
    pub evaluated: u32,
    /// Times the remaining plies of a state were skipped because alpha met beta.
    pub cutoffs: u32,
    pub tt_hits: u32,
    /// Hits whose stored value settled the state without searching it.
    pub tt_saves: u32,
    pub tt_stores: u32,
    pub time: Duration,
}

impl Statistics {
    pub fn new() -> Statistics {
        Statistics::default()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rows = [
            ("Visited:", self.visited.to_string()),
            ("Evaluated:", self.evaluated.to_string()),
            ("Cutoffs:", self.cutoffs.to_string()),
            ("TT Hits:", self.tt_hits.to_string()),
            ("TT Saves:", self.tt_saves.to_string()),
            ("TT Stores:", self.tt_stores.to_string()),
            ("Time:", format!("{:.3}s", self.time.as_secs_f32())),
        ];

        let title_width = rows.iter().map(|&(title, _)| title.len()).max().unwrap_or(0) + 1;
        let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (i, (title, value)) in rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {0:1$}{2:>3$}", title, title_width, value, value_width)?;
        }
        Ok(())
    }
}
