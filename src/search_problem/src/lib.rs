#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Problem formulations for local search.
//!
//! A search algorithm (hill climbing, simulated annealing, genetic search, ...)
//! holds a [`Problem`], reads its initial state, and walks the state space by
//! querying the applicable actions of a state, applying one to get a
//! successor, and scoring states by their objective value. The formulations
//! here only describe the state space; they never search it.

pub mod config;
pub mod discrete_math;
pub mod eight_puzzle;
pub mod eight_queens;
pub mod error;

pub use config::{ConfigError, ProblemConfig};
pub use eight_puzzle::{EightPuzzleProblem, PuzzleAction, PuzzleState};
pub use eight_queens::{EightQueensProblem, QueensAction, QueensState};
pub use error::ProblemError;
pub use fastrand::Rng;

use std::fmt::Debug;

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// The contract every problem formulation implements so that search
/// algorithms stay formulation-agnostic.
///
/// All operations are pure: none of them mutate the state passed in, and
/// every state handed back is an owned value independent of the problem's
/// internal storage.
pub trait Problem {
    type State: Clone + PartialEq + Debug;
    type Action: Copy + PartialEq + Debug;

    /// The state the search should start from.
    fn initial_state(&self) -> Self::State;

    /// Every action applicable in `state`, in a deterministic order.
    fn actions(&self, state: &Self::State) -> Result<Vec<Self::Action>, ProblemError>;

    /// The successor produced by applying `action` to `state`.
    fn result(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Result<Self::State, ProblemError>;

    /// How far `state` is from a goal. Lower is better and zero is a goal.
    fn objective_value(&self, state: &Self::State) -> u32;

    /// Draw a state from the problem's random distribution.
    fn random_state(&self, rng: &mut Rng) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool {
        self.objective_value(state) == 0
    }

    /// Every applicable action paired with the successor it produces, in the
    /// same order as [`Problem::actions`].
    fn neighbors(
        &self,
        state: &Self::State,
    ) -> Result<Vec<(Self::Action, Self::State)>, ProblemError> {
        self.actions(state)?
            .into_iter()
            .map(|action| self.result(state, action).map(|next| (action, next)))
            .collect()
    }
}
