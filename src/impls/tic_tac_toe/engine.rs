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

use crate::analysis::{self, Evaluation};
use crate::impls::tic_tac_toe::{Action, Board, InvalidMove, Mark, Resolution};
use crate::ply;
use crate::resolution;
use crate::state;

impl ply::Ply for Action { }

impl resolution::Resolution for Resolution {
    fn get_winner(&self) -> Option<u8> {
        match *self {
            Resolution::Win(Mark::X) => Some(0),
            Resolution::Win(Mark::O) => Some(1),
            Resolution::CatsGame => None,
        }
    }

    fn is_draw(&self) -> bool {
        *self == Resolution::CatsGame
    }
}

impl state::State for Board {
    type Ply = Action;
    type Resolution = Resolution;
    type Error = InvalidMove;

    fn execute_ply(&self, ply: &Action) -> Result<Board, InvalidMove> {
        self.apply_move(*ply)
    }

    fn check_resolution(&self) -> Option<Resolution> {
        if let Some(mark) = self.winner() {
            Some(Resolution::Win(mark))
        } else if self.is_full() {
            Some(Resolution::CatsGame)
        } else {
            None
        }
    }
}

impl analysis::Extrapolatable<Action> for Board {
    fn extrapolate_into(&self, plies: &mut Vec<Action>) {
        plies.extend(self.legal_actions());
    }
}

impl analysis::Evaluatable for Board {
    fn utility(&self) -> Evaluation {
        Evaluation(Board::utility(self))
    }

    fn is_maximizing(&self) -> bool {
        self.next_mark() == Mark::X
    }
}

#[cfg(test)]
mod test {
    use std::collections::{HashMap, HashSet};

    use crate::analysis::search::{AlphaBeta, Search};
    use crate::impls::tic_tac_toe::*;
    use crate::resolution::Resolution as ResolutionTrait;
    use crate::state::State;

    /// Every position alternating play can reach from the empty board.
    fn reachable_boards() -> Vec<Board> {
        fn visit(board: Board, seen: &mut HashSet<Board>) {
            if !seen.insert(board) || board.is_terminal() {
                return;
            }
            for action in board.legal_actions() {
                visit(board.apply_move(action).unwrap(), seen);
            }
        }

        let mut seen = HashSet::new();
        visit(Board::new(), &mut seen);
        seen.into_iter().collect()
    }

    /// Plain minimax without pruning.
    fn minimax_value(board: Board, memo: &mut HashMap<Board, i8>) -> i8 {
        if let Some(&value) = memo.get(&board) {
            return value;
        }

        let value = if board.is_terminal() {
            board.utility()
        } else {
            let values = board.legal_actions()
                .into_iter()
                .map(|action| minimax_value(board.apply_move(action).unwrap(), memo));
            match board.next_mark() {
                Mark::X => values.max().unwrap(),
                Mark::O => values.min().unwrap(),
            }
        };

        memo.insert(board, value);
        value
    }

    #[test]
    fn test_reachable_board_count() {
        assert_eq!(reachable_boards().len(), 5478);
    }

    #[test]
    fn test_check_resolution() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        let drawn: Board = "XOX/XOO/OXX".parse().unwrap();

        assert_eq!(won.check_resolution(), Some(Resolution::Win(Mark::X)));
        assert_eq!(won.check_resolution().unwrap().get_winner(), Some(0));
        assert_eq!(drawn.check_resolution(), Some(Resolution::CatsGame));
        assert!(drawn.check_resolution().unwrap().is_draw());
        assert_eq!(Board::new().check_resolution(), None);
    }

    #[test]
    fn test_execute_plies() {
        let board = Board::new()
            .execute_plies(&[Action::new(0, 0), Action::new(1, 1), Action::new(0, 1)])
            .unwrap();

        assert_eq!(board, "XX./.O./...".parse::<Board>().unwrap());
        assert_eq!(
            board.execute_plies(&[Action::new(2, 2), Action::new(1, 1)]),
            Err(InvalidMove::Occupied { action: Action::new(1, 1), occupant: Mark::O }),
        );
    }

    #[test]
    fn test_best_move_is_optimal_everywhere() {
        let mut memo = HashMap::new();

        for board in reachable_boards() {
            let chosen = best_move(&board);

            if board.is_terminal() {
                assert_eq!(chosen, None, "{}", board);
                continue;
            }

            let action = chosen.unwrap();
            assert!(board.legal_actions().contains(&action), "{}\n{}", board, action);

            let value = minimax_value(board, &mut memo);
            let achieved = minimax_value(board.apply_move(action).unwrap(), &mut memo);
            assert_eq!(achieved, value, "{}\nchose {}", board, action);
        }
    }

    #[test]
    fn test_transposition_table_agrees() {
        let mut plain = AlphaBeta::new();
        let mut cached = AlphaBeta::with_transposition_table();

        for board in reachable_boards() {
            let expected = plain.search(&board);
            let actual = cached.search(&board);

            assert_eq!(actual.ply, expected.ply, "{}", board);
            assert_eq!(actual.evaluation, expected.evaluation, "{}", board);
        }
    }
}
