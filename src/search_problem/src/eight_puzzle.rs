//! The 8-puzzle: eight numbered tiles and one blank on a 3x3 board. The blank
//! slides into a neighbouring cell, and the goal is the row-major ascending
//! layout with the blank in the top-left corner.

use crate::{Problem, ProblemError, Rng, discrete_math::is_solvable, start, success};
use itertools::Itertools;
use log::{debug, trace};
use std::{fmt, str::FromStr};

pub const SIDE: usize = 3;
const TILE_COUNT: usize = SIDE * SIDE;

const GOAL: [[u8; SIDE]; SIDE] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// A 3x3 arrangement of the tiles `0..=8`, each exactly once, `0` being the
/// blank. Only valid arrangements can be constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PuzzleState([[u8; SIDE]; SIDE]);

impl PuzzleState {
    #[must_use]
    pub fn goal() -> Self {
        PuzzleState(GOAL)
    }

    /// An owned copy of the grid, indexed `[row][column]`.
    #[must_use]
    pub fn grid(&self) -> [[u8; SIDE]; SIDE] {
        self.0
    }

    /// The `(row, column)` of the blank.
    pub fn blank_position(&self) -> Result<(usize, usize), ProblemError> {
        // unreachable through the validating constructor, kept as a guard
        (0..SIDE)
            .cartesian_product(0..SIDE)
            .find(|&(row, column)| self.0[row][column] == 0)
            .ok_or_else(|| ProblemError::InvalidState {
                detail: "the grid has no blank cell".to_owned(),
            })
    }

    fn from_row_major(tiles: [u8; TILE_COUNT]) -> Self {
        let [a, b, c, d, e, f, g, h, i] = tiles;
        PuzzleState([[a, b, c], [d, e, f], [g, h, i]])
    }
}

impl TryFrom<[[u8; SIDE]; SIDE]> for PuzzleState {
    type Error = ProblemError;

    fn try_from(grid: [[u8; SIDE]; SIDE]) -> Result<Self, Self::Error> {
        // nine distinct values in 0..=8 is exactly a permutation
        let mut seen = [false; TILE_COUNT];
        for &tile in grid.as_flattened() {
            let Some(slot) = seen.get_mut(usize::from(tile)) else {
                return Err(ProblemError::InvalidState {
                    detail: format!("tile {tile} is not between 0 and 8"),
                });
            };
            if std::mem::replace(slot, true) {
                return Err(ProblemError::InvalidState {
                    detail: format!("tile {tile} appears more than once"),
                });
            }
        }
        Ok(PuzzleState(grid))
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let row = row
                .iter()
                .map(|&tile| {
                    if tile == 0 {
                        "_".to_owned()
                    } else {
                        tile.to_string()
                    }
                })
                .join(" ");
            f.write_str(&row)?;
        }
        Ok(())
    }
}

/// The direction the blank moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PuzzleAction {
    Up,
    Down,
    Left,
    Right,
}

impl PuzzleAction {
    /// Every action, in the order `actions` enumerates them.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            PuzzleAction::Up => "UP",
            PuzzleAction::Down => "DOWN",
            PuzzleAction::Left => "LEFT",
            PuzzleAction::Right => "RIGHT",
        }
    }

    /// The action that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            PuzzleAction::Up => PuzzleAction::Down,
            PuzzleAction::Down => PuzzleAction::Up,
            PuzzleAction::Left => PuzzleAction::Right,
            PuzzleAction::Right => PuzzleAction::Left,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            PuzzleAction::Up => (-1, 0),
            PuzzleAction::Down => (1, 0),
            PuzzleAction::Left => (0, -1),
            PuzzleAction::Right => (0, 1),
        }
    }
}

impl FromStr for PuzzleAction {
    type Err = ProblemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UP" => Ok(PuzzleAction::Up),
            "DOWN" => Ok(PuzzleAction::Down),
            "LEFT" => Ok(PuzzleAction::Left),
            "RIGHT" => Ok(PuzzleAction::Right),
            _ => Err(ProblemError::InvalidAction {
                symbol: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for PuzzleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug)]
pub struct EightPuzzleProblem {
    initial: PuzzleState,
    /// Indexed by tile value. Fixed for the lifetime of the problem.
    goal_positions: [(usize, usize); TILE_COUNT],
}

impl EightPuzzleProblem {
    /// Start from `initial` if given, otherwise from a random solvable state
    /// drawn from `rng`.
    pub fn new(initial: Option<PuzzleState>, rng: &mut Rng) -> Self {
        match initial {
            Some(initial) => Self::with_initial(initial),
            None => Self::random(rng),
        }
    }

    #[must_use]
    pub fn with_initial(initial: PuzzleState) -> Self {
        debug!("8-puzzle initial state:\n{initial}");
        EightPuzzleProblem {
            initial,
            goal_positions: goal_positions(),
        }
    }

    pub fn random(rng: &mut Rng) -> Self {
        Self::with_initial(random_solvable_state(rng))
    }
}

fn goal_positions() -> [(usize, usize); TILE_COUNT] {
    let mut positions = [(0, 0); TILE_COUNT];
    for (row, tiles) in GOAL.iter().enumerate() {
        for (column, &tile) in tiles.iter().enumerate() {
            positions[usize::from(tile)] = (row, column);
        }
    }
    positions
}

/// Shuffle until the arrangement has an even inversion count. About half of
/// all draws are rejected.
fn random_solvable_state(rng: &mut Rng) -> PuzzleState {
    debug!(start!("Drawing a solvable 8-puzzle state"));
    let mut tiles: [u8; TILE_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
    let mut rejected = 0_u32;
    loop {
        rng.shuffle(&mut tiles);
        if is_solvable(&tiles) {
            break;
        }
        trace!("Rejected unsolvable draw {tiles:?}");
        rejected += 1;
    }
    debug!(success!("Drew a solvable state after {} rejected draws"), rejected);
    PuzzleState::from_row_major(tiles)
}

impl Problem for EightPuzzleProblem {
    type State = PuzzleState;
    type Action = PuzzleAction;

    fn initial_state(&self) -> PuzzleState {
        self.initial
    }

    fn actions(&self, state: &PuzzleState) -> Result<Vec<PuzzleAction>, ProblemError> {
        let (row, column) = state.blank_position()?;
        Ok(PuzzleAction::ALL
            .into_iter()
            .filter(|action| match action {
                PuzzleAction::Up => row > 0,
                PuzzleAction::Down => row < SIDE - 1,
                PuzzleAction::Left => column > 0,
                PuzzleAction::Right => column < SIDE - 1,
            })
            .collect())
    }

    fn result(
        &self,
        state: &PuzzleState,
        action: PuzzleAction,
    ) -> Result<PuzzleState, ProblemError> {
        let (row, column) = state.blank_position()?;
        let (row_delta, column_delta) = action.delta();
        let (target_row, target_column) = row
            .checked_add_signed(row_delta)
            .zip(column.checked_add_signed(column_delta))
            .filter(|&(r, c)| r < SIDE && c < SIDE)
            .ok_or_else(|| ProblemError::OutOfBounds {
                action: action.to_string(),
                row,
                column,
            })?;

        let mut grid = state.0;
        grid[row][column] = grid[target_row][target_column];
        grid[target_row][target_column] = 0;
        Ok(PuzzleState(grid))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn objective_value(&self, state: &PuzzleState) -> u32 {
        // at most 8 tiles * 4 steps, never truncates
        (0..SIDE)
            .cartesian_product(0..SIDE)
            .filter_map(|(row, column)| {
                let tile = state.0[row][column];
                (tile != 0).then(|| {
                    let (goal_row, goal_column) = self.goal_positions[usize::from(tile)];
                    row.abs_diff(goal_row) + column.abs_diff(goal_column)
                })
            })
            .sum::<usize>() as u32
    }

    fn random_state(&self, rng: &mut Rng) -> PuzzleState {
        random_solvable_state(rng)
    }
}
