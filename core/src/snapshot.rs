use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player can see of one cell. `word` is `None` once a matched
/// cell's text has been cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub word: Option<Word>,
    pub state: CellState,
}

impl CellView {
    pub fn from_cell(cell: &Cell) -> Self {
        Self {
            word: cell.text_revealed().then(|| cell.word().clone()),
            state: cell.state(),
        }
    }
}

/// Everything a presentation layer needs to redraw after an engine call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub cells: Vec<CellView>,
    pub selection: Vec<CellIndex>,
    pub pending: Option<Resolution>,
    pub state: GameState,
}

impl Snapshot {
    pub fn from_engine(engine: &MatchEngine) -> Self {
        Self {
            size: engine.board().size(),
            cells: engine.board().iter().map(CellView::from_cell).collect(),
            selection: engine.selection().to_vec(),
            pending: engine.pending(),
            state: engine.state(),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&CellView> {
        if coords.0 >= self.size.0 || coords.1 >= self.size.1 {
            return None;
        }
        self.cells.get(coords_to_index(coords, self.size))
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(usize::from(self.size.1.max(1)))
    }
}
