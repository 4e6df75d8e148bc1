//! Run configuration: which initial states to start from and how to seed the
//! random source, read from TOML.
//!
//! ```toml
//! seed = 42
//!
//! [eight_puzzle]
//! initial = [[1, 2, 0], [3, 4, 5], [6, 7, 8]]
//!
//! [eight_queens]
//! initial = [1, 5, 8, 6, 3, 7, 2, 4]
//! ```
//!
//! Every key is optional. A missing `initial` means the problem starts from a
//! random state, and a missing `seed` means the random source is seeded from
//! the environment.

use crate::{
    EightPuzzleProblem, EightQueensProblem, ProblemError, PuzzleState, Rng,
    eight_puzzle::SIDE,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProblemConfig {
    pub seed: Option<u64>,
    pub eight_puzzle: Option<EightPuzzleConfig>,
    pub eight_queens: Option<EightQueensConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EightPuzzleConfig {
    pub initial: Option<[[u8; SIDE]; SIDE]>,
}

/// Lengths are checked when the problem is built, not when parsing, so that a
/// wrong length surfaces as [`ProblemError::LengthError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EightQueensConfig {
    pub initial: Option<Vec<u8>>,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read the configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse the configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not write the configuration: {0}")]
    Write(#[from] toml::ser::Error),
    #[error("The configured initial state is invalid: {0}")]
    Problem(#[from] ProblemError),
}

impl ProblemConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Reading problem configuration from {}", path.display());
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// A random source seeded from `seed`, or from the environment if unset.
    #[must_use]
    pub fn rng(&self) -> Rng {
        self.seed.map_or_else(Rng::new, Rng::with_seed)
    }

    pub fn eight_puzzle(&self, rng: &mut Rng) -> Result<EightPuzzleProblem, ConfigError> {
        let initial = self
            .eight_puzzle
            .as_ref()
            .and_then(|puzzle| puzzle.initial)
            .map(PuzzleState::try_from)
            .transpose()?;
        Ok(EightPuzzleProblem::new(initial, rng))
    }

    pub fn eight_queens(&self, rng: &mut Rng) -> Result<EightQueensProblem, ConfigError> {
        let initial = self
            .eight_queens
            .as_ref()
            .and_then(|queens| queens.initial.as_deref());
        Ok(EightQueensProblem::new(initial, rng)?)
    }
}
