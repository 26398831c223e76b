#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use supply::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod supply;
mod types;

pub const DEFAULT_SIZE: Coord2 = (5, 6);
pub const DEFAULT_MAX_SCORE: CellCount = 10;
pub const DEFAULT_TIME_LIMIT: Seconds = 180;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid dimensions as `(rows, cols)`.
    pub size: Coord2,
    /// Pairs on the board, which is also the score needed to win.
    pub max_score: CellCount,
    pub time_limit: Seconds,
}

impl GameConfig {
    pub const fn new(size: Coord2, max_score: CellCount, time_limit: Seconds) -> Self {
        Self {
            size,
            max_score,
            time_limit,
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.max_score
    }

    /// Cells left over once every pair is placed.
    pub const fn singleton_count(&self) -> CellCount {
        self.total_cells()
            .saturating_sub(self.max_score.saturating_mul(2))
    }

    pub fn validate(&self) -> Result<()> {
        let cells = self.total_cells();
        if cells == 0 {
            return Err(ConfigIssue::EmptyGrid.into());
        }
        if self.max_score == 0 {
            return Err(ConfigIssue::NoPairs.into());
        }
        if u32::from(self.max_score) * 2 > u32::from(cells) {
            return Err(ConfigIssue::TooManyPairs {
                pairs: self.max_score,
                cells,
            }
            .into());
        }
        if self.time_limit == 0 {
            return Err(ConfigIssue::NoTimeLimit.into());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_MAX_SCORE, DEFAULT_TIME_LIMIT)
    }
}

/// The grid of cards for one game, laid out row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn from_words(size: Coord2, words: Vec<Word>) -> Result<Self> {
        let expected = mult(size.0, size.1);
        let actual = words.len();
        let mismatch = ConfigIssue::WordCountMismatch { expected, actual };
        if actual != usize::from(expected) {
            return Err(mismatch.into());
        }

        let cells: Vec<Cell> = words.into_iter().map(Cell::new).collect();
        let cells = Array2::from_shape_vec(size.to_nd_index(), cells)
            .map_err(|_| GameError::from(mismatch))?;
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0 as Coord, dim.1 as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        let index = self.validate_index(index)?;
        Ok(index_to_coords(index, self.size()))
    }

    pub fn cell(&self, index: CellIndex) -> Option<&Cell> {
        let index = self.validate_index(index).ok()?;
        self.cell_at(index_to_coords(index, self.size()))
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.iter().map(Cell::word)
    }

    pub fn word_counts(&self) -> BTreeMap<&Word, usize> {
        let mut counts = BTreeMap::new();
        for word in self.words() {
            *counts.entry(word).or_insert(0) += 1;
        }
        counts
    }

    /// Whether exactly `pair_count` words appear twice and every other word once.
    pub fn has_pair_layout(&self, pair_count: CellCount) -> bool {
        let counts = self.word_counts();
        let pairs = counts.values().filter(|&&count| count == 2).count();
        let singles = counts.values().filter(|&&count| count == 1).count();
        pairs == usize::from(pair_count) && pairs * 2 + singles == self.cells.len()
    }

    pub(crate) fn cell_mut(&mut self, index: CellIndex) -> &mut Cell {
        let coords = index_to_coords(index, self.size());
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index_to_coords(index, self.size()).to_nd_index()]
    }
}
