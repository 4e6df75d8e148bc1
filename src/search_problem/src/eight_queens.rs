//! The 8-queens problem with one queen per column. A state says which row each
//! column's queen sits in; an action moves one queen within its column.

use crate::{Problem, ProblemError, Rng};
use itertools::Itertools;
use log::debug;
use std::{fmt, ops::RangeInclusive};

pub const N: usize = 8;
#[allow(clippy::cast_possible_truncation)]
const ROWS: RangeInclusive<u8> = 1..=N as u8;

/// `rows()[i]` is the 1-based row of the queen in column `i + 1`. Rows may
/// repeat; only the range `1..=8` is enforced.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QueensState([u8; N]);

impl QueensState {
    /// An owned copy of the row assignment.
    #[must_use]
    pub fn rows(&self) -> [u8; N] {
        self.0
    }
}

impl TryFrom<&[u8]> for QueensState {
    type Error = ProblemError;

    fn try_from(rows: &[u8]) -> Result<Self, Self::Error> {
        let rows: [u8; N] = rows.try_into().map_err(|_| ProblemError::LengthError {
            expected: N,
            actual: rows.len(),
        })?;
        if let Some(&value) = rows.iter().find(|&&row| !ROWS.contains(&row)) {
            return Err(ProblemError::RangeError { name: "Row", value });
        }
        Ok(QueensState(rows))
    }
}

impl fmt::Display for QueensState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(" "))
    }
}

/// Move the queen in `column` to `row`, both 1-based.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QueensAction {
    pub row: u8,
    pub column: u8,
}

impl fmt::Display for QueensAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Clone, Debug)]
pub struct EightQueensProblem {
    initial: QueensState,
}

impl EightQueensProblem {
    /// Start from `initial` if given, otherwise from a random state drawn
    /// from `rng`.
    pub fn new(initial: Option<&[u8]>, rng: &mut Rng) -> Result<Self, ProblemError> {
        match initial {
            Some(initial) => Self::with_initial(initial),
            None => Ok(Self::random(rng)),
        }
    }

    pub fn with_initial(initial: &[u8]) -> Result<Self, ProblemError> {
        let initial = QueensState::try_from(initial)?;
        debug!("8-queens initial state: {initial}");
        Ok(EightQueensProblem { initial })
    }

    pub fn random(rng: &mut Rng) -> Self {
        let initial = random_state(rng);
        debug!("8-queens initial state: {initial}");
        EightQueensProblem { initial }
    }
}

fn random_state(rng: &mut Rng) -> QueensState {
    QueensState(std::array::from_fn(|_| rng.u8(ROWS)))
}

impl Problem for EightQueensProblem {
    type State = QueensState;
    type Action = QueensAction;

    fn initial_state(&self) -> QueensState {
        self.initial
    }

    /// Every reassignment of a queen to another row of its own column,
    /// column by column. Always 56 actions.
    fn actions(&self, state: &QueensState) -> Result<Vec<QueensAction>, ProblemError> {
        Ok(ROWS
            .zip(state.0)
            .flat_map(|(column, current_row)| {
                ROWS.filter(move |&row| row != current_row)
                    .map(move |row| QueensAction { row, column })
            })
            .collect())
    }

    fn result(
        &self,
        state: &QueensState,
        action: QueensAction,
    ) -> Result<QueensState, ProblemError> {
        if !ROWS.contains(&action.row) {
            return Err(ProblemError::RangeError {
                name: "Row",
                value: action.row,
            });
        }
        if !ROWS.contains(&action.column) {
            return Err(ProblemError::RangeError {
                name: "Column",
                value: action.column,
            });
        }
        let mut rows = state.0;
        rows[usize::from(action.column - 1)] = action.row;
        Ok(QueensState(rows))
    }

    /// The number of pairs of queens sharing a row or a diagonal.
    #[allow(clippy::cast_possible_truncation)]
    fn objective_value(&self, state: &QueensState) -> u32 {
        // at most C(8, 2) = 28 pairs
        state
            .0
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter(|&((i, &row_i), (j, &row_j))| {
                row_i == row_j || usize::from(row_i.abs_diff(row_j)) == i.abs_diff(j)
            })
            .count() as u32
    }

    fn random_state(&self, rng: &mut Rng) -> QueensState {
        random_state(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(rows: [u8; N]) -> QueensState {
        QueensState::try_from(rows.as_slice()).unwrap()
    }

    #[test]
    fn validates_initial_state() {
        assert_eq!(
            EightQueensProblem::with_initial(&[1, 2, 3]).unwrap_err(),
            ProblemError::LengthError {
                expected: 8,
                actual: 3
            }
        );
        assert_eq!(
            EightQueensProblem::with_initial(&[1, 2, 3, 4, 5, 6, 7, 9]).unwrap_err(),
            ProblemError::RangeError {
                name: "Row",
                value: 9
            }
        );
        assert!(matches!(
            EightQueensProblem::with_initial(&[0; 8]),
            Err(ProblemError::RangeError { value: 0, .. })
        ));
    }

    #[test]
    fn actions_are_column_major() {
        let problem = EightQueensProblem::with_initial(&[1; 8]).unwrap();
        let actions = problem.actions(&problem.initial_state()).unwrap();
        assert_eq!(actions.len(), 56);
        assert_eq!(actions[0], QueensAction { row: 2, column: 1 });
        assert_eq!(actions[6], QueensAction { row: 8, column: 1 });
        assert_eq!(actions[7], QueensAction { row: 2, column: 2 });
        assert_eq!(actions[55], QueensAction { row: 8, column: 8 });
    }

    #[test]
    fn result_moves_one_queen() {
        let problem = EightQueensProblem::with_initial(&[1; 8]).unwrap();
        let initial = problem.initial_state();
        let moved = problem
            .result(&initial, QueensAction { row: 5, column: 3 })
            .unwrap();
        assert_eq!(moved.rows(), [1, 1, 5, 1, 1, 1, 1, 1]);
        assert_eq!(initial.rows(), [1; 8]);
    }

    #[test]
    fn result_rejects_out_of_range() {
        let problem = EightQueensProblem::with_initial(&[1; 8]).unwrap();
        let initial = problem.initial_state();
        assert_eq!(
            problem.result(&initial, QueensAction { row: 9, column: 1 }),
            Err(ProblemError::RangeError {
                name: "Row",
                value: 9
            })
        );
        assert_eq!(
            problem.result(&initial, QueensAction { row: 1, column: 0 }),
            Err(ProblemError::RangeError {
                name: "Column",
                value: 0
            })
        );
    }

    #[test]
    fn attacking_pairs() {
        let problem = EightQueensProblem::with_initial(&[1; 8]).unwrap();
        assert_eq!(problem.objective_value(&state([1, 5, 8, 6, 3, 7, 2, 4])), 0);
        assert_eq!(problem.objective_value(&state([1; 8])), 28);
        // columns 1 and 8 share the long diagonal
        assert_eq!(problem.objective_value(&state([1, 3, 5, 7, 2, 4, 6, 8])), 1);
        // main diagonal: every pair attacks
        assert_eq!(problem.objective_value(&state([1, 2, 3, 4, 5, 6, 7, 8])), 28);
        assert_eq!(problem.objective_value(&state([8, 7, 6, 5, 4, 3, 2, 1])), 28);
        assert_eq!(problem.objective_value(&state([4, 2, 7, 3, 6, 8, 5, 1])), 0);
    }

    #[test]
    fn display() {
        assert_eq!(state([1, 3, 5, 7, 2, 4, 6, 8]).to_string(), "[1 3 5 7 2 4 6 8]");
        assert_eq!(QueensAction { row: 4, column: 2 }.to_string(), "(4, 2)");
    }
}
