use thiserror::Error;

use crate::{CellCount, CellIndex, Coord2};

/// Which part of a configuration, or of a board checked against one, was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("grid has no cells")]
    EmptyGrid,
    #[error("at least one pair is required")]
    NoPairs,
    #[error("{pairs} pairs do not fit in {cells} cells")]
    TooManyPairs { pairs: CellCount, cells: CellCount },
    #[error("time limit must be at least one second")]
    NoTimeLimit,
    #[error("board is {actual:?} but the grid is configured as {expected:?}")]
    ShapeMismatch { expected: Coord2, actual: Coord2 },
    #[error("{actual} words given for {expected} cells")]
    WordCountMismatch { expected: CellCount, actual: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    #[error("Word supply produced {found} distinct words but {needed} are needed")]
    InsufficientWords { needed: CellCount, found: CellCount },
    #[error("Word supply is exhausted")]
    SupplyExhausted,
    #[error("Invalid cell index {0}")]
    InvalidIndex(CellIndex),
}

impl From<ConfigIssue> for GameError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
