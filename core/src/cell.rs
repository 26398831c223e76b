use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Opaque token shown on a card. Only equality matters to the rules.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(word: &str) -> Self {
        Self::new(word)
    }
}

impl From<String> for Word {
    fn from(word: String) -> Self {
        Self(word)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Selected,
    Matched,
}

impl CellState {
    pub const fn is_matched(self) -> bool {
        matches!(self, Self::Matched)
    }

    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    word: Word,
    state: CellState,
    text_revealed: bool,
}

impl Cell {
    pub fn new(word: Word) -> Self {
        Self {
            word,
            state: CellState::Hidden,
            text_revealed: true,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// Matched cells stop showing their word once the match is acknowledged.
    pub fn text_revealed(&self) -> bool {
        self.text_revealed
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.state = CellState::Matched;
        self.text_revealed = false;
    }
}
