use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Read-only scoreboard for the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub matched: CellCount,
    pub max_score: CellCount,
    pub remaining: Seconds,
    pub time_limit: Seconds,
    pub outcome: Outcome,
}

impl GameState {
    /// Remaining time as `(minutes, seconds)`.
    pub const fn clock(&self) -> (Seconds, Seconds) {
        (self.remaining / 60, self.remaining % 60)
    }
}

/// Decision made as soon as a second cell is selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Match(CellIndex, CellIndex),
    Mismatch(CellIndex, CellIndex),
}

impl Resolution {
    pub const fn cells(self) -> (CellIndex, CellIndex) {
        match self {
            Self::Match(first, second) | Self::Mismatch(first, second) => (first, second),
        }
    }

    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match(..))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapOutcome {
    NoChange,
    Selected,
    Deselected,
    Resolved(Resolution),
}

impl TapOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AckOutcome {
    NoChange,
    Scored,
    Won,
    Hidden,
}

impl AckOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Counted,
    TimeUp,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

pub type Selection = SmallVec<[CellIndex; 2]>;

/// Rules engine for one game: selection, scoring and the countdown.
///
/// The engine never measures time. The presentation layer calls
/// [`MatchEngine::on_tick`] once per elapsed second, and calls
/// [`MatchEngine::on_resolution_acknowledged`] once it has finished showing
/// the feedback for a resolved pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    config: GameConfig,
    board: Board,
    selection: Selection,
    pending: Option<Resolution>,
    matched: CellCount,
    remaining: Seconds,
    outcome: Outcome,
}

impl MatchEngine {
    pub fn new(config: GameConfig, board: Board) -> Result<Self> {
        config.validate()?;
        check_board_shape(&config, &board)?;
        Ok(Self {
            config,
            board,
            selection: Selection::new(),
            pending: None,
            matched: 0,
            remaining: config.time_limit,
            outcome: Outcome::InProgress,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &[CellIndex] {
        &self.selection
    }

    /// Resolution waiting for [`MatchEngine::on_resolution_acknowledged`].
    pub fn pending(&self) -> Option<Resolution> {
        self.pending
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn state(&self) -> GameState {
        GameState {
            matched: self.matched,
            max_score: self.config.max_score,
            remaining: self.remaining,
            time_limit: self.config.time_limit,
            outcome: self.outcome,
        }
    }

    pub fn cell(&self, index: CellIndex) -> Result<&Cell> {
        let index = self.board.validate_index(index)?;
        Ok(&self.board[index])
    }

    pub fn on_cell_tapped(&mut self, index: CellIndex) -> Result<TapOutcome> {
        use TapOutcome::*;

        let index = self.board.validate_index(index)?;
        log::trace!("tap {}", index);

        if self.outcome.is_finished() || self.pending.is_some() {
            return Ok(NoChange);
        }

        Ok(match self.board[index].state() {
            CellState::Matched => NoChange,
            CellState::Selected => {
                self.selection.retain(|selected| *selected != index);
                self.board.cell_mut(index).set_state(CellState::Hidden);
                Deselected
            }
            CellState::Hidden => {
                self.board.cell_mut(index).set_state(CellState::Selected);
                self.selection.push(index);
                if self.selection.len() == 2 {
                    Resolved(self.resolve())
                } else {
                    Selected
                }
            }
        })
    }

    pub fn on_resolution_acknowledged(&mut self) -> AckOutcome {
        let Some(resolution) = self.pending.take() else {
            return AckOutcome::NoChange;
        };
        self.selection.clear();

        let (first, second) = resolution.cells();
        match resolution {
            Resolution::Match(..) => {
                self.board.cell_mut(first).mark_matched();
                self.board.cell_mut(second).mark_matched();
                self.matched += 1;
                if self.matched >= self.config.max_score {
                    self.end_game(Outcome::Won);
                    AckOutcome::Won
                } else {
                    AckOutcome::Scored
                }
            }
            Resolution::Mismatch(..) => {
                self.board.cell_mut(first).set_state(CellState::Hidden);
                self.board.cell_mut(second).set_state(CellState::Hidden);
                AckOutcome::Hidden
            }
        }
    }

    pub fn on_tick(&mut self) -> TickOutcome {
        if self.outcome.is_finished() || self.matched >= self.config.max_score {
            return TickOutcome::NoChange;
        }

        self.remaining = self.remaining.saturating_sub(1);
        log::trace!("tick, {}s left", self.remaining);

        if self.remaining == 0 {
            self.end_game(Outcome::Lost);
            TickOutcome::TimeUp
        } else {
            TickOutcome::Counted
        }
    }

    /// Discards everything about the current game and starts over on `board`.
    pub fn on_restart(&mut self, board: Board) -> Result<()> {
        check_board_shape(&self.config, &board)?;

        self.board = board;
        self.selection.clear();
        self.pending = None;
        self.matched = 0;
        self.remaining = self.config.time_limit;
        self.outcome = Outcome::InProgress;
        log::debug!("Game restarted");
        Ok(())
    }

    fn resolve(&mut self) -> Resolution {
        let (first, second) = (self.selection[0], self.selection[1]);
        let resolution = if self.board[first].word() == self.board[second].word() {
            Resolution::Match(first, second)
        } else {
            Resolution::Mismatch(first, second)
        };
        log::debug!("Resolved {:?}", resolution);
        self.pending = Some(resolution);
        resolution
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.outcome.is_finished() {
            return;
        }

        self.outcome = outcome;
        if outcome == Outcome::Lost {
            self.pending = None;
            for &index in &self.selection {
                self.board.cell_mut(index).set_state(CellState::Hidden);
            }
            self.selection.clear();
        }
        log::debug!("Game ended: {:?} with {} matched", outcome, self.matched);
    }
}

fn check_board_shape(config: &GameConfig, board: &Board) -> Result<()> {
    if board.size() == config.size {
        Ok(())
    } else {
        Err(ConfigIssue::ShapeMismatch {
            expected: config.size,
            actual: board.size(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn board(size: Coord2, words: &[&str]) -> Board {
        Board::from_words(size, words.iter().copied().map(Word::from).collect()).unwrap()
    }

    /// 2x2 board where cells 0 and 2 share a word, as do 1 and 3.
    fn small_engine() -> MatchEngine {
        let config = GameConfig::new((2, 2), 2, 5);
        MatchEngine::new(config, board((2, 2), &["sun", "moon", "sun", "moon"])).unwrap()
    }

    #[test]
    fn starts_in_progress_with_full_clock() {
        let engine = small_engine();

        assert_eq!(
            engine.state(),
            GameState {
                matched: 0,
                max_score: 2,
                remaining: 5,
                time_limit: 5,
                outcome: Outcome::InProgress,
            }
        );
        assert!(engine.selection().is_empty());
        assert_eq!(engine.pending(), None);
    }

    #[test]
    fn tapping_twice_toggles_selection() {
        let mut engine = small_engine();

        assert_eq!(engine.on_cell_tapped(1).unwrap(), TapOutcome::Selected);
        assert_eq!(engine.selection(), &[1]);
        assert_eq!(engine.cell(1).unwrap().state(), CellState::Selected);

        assert_eq!(engine.on_cell_tapped(1).unwrap(), TapOutcome::Deselected);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.cell(1).unwrap().state(), CellState::Hidden);
    }

    #[test]
    fn out_of_range_tap_is_an_error() {
        let mut engine = small_engine();

        assert_eq!(engine.on_cell_tapped(4), Err(GameError::InvalidIndex(4)));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn matching_pair_scores_on_acknowledgment() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();
        let outcome = engine.on_cell_tapped(2).unwrap();

        assert_eq!(outcome, TapOutcome::Resolved(Resolution::Match(0, 2)));
        assert_eq!(engine.state().matched, 0);
        assert_eq!(engine.cell(0).unwrap().state(), CellState::Selected);

        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::Scored);
        assert_eq!(engine.state().matched, 1);
        assert!(engine.selection().is_empty());
        for index in [0, 2] {
            let cell = engine.cell(index).unwrap();
            assert_eq!(cell.state(), CellState::Matched);
            assert!(!cell.text_revealed());
        }
        assert_eq!(engine.outcome(), Outcome::InProgress);
    }

    #[test]
    fn mismatched_pair_hides_on_acknowledgment() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();
        let outcome = engine.on_cell_tapped(1).unwrap();

        assert_eq!(outcome, TapOutcome::Resolved(Resolution::Mismatch(0, 1)));
        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::Hidden);
        assert_eq!(engine.state().matched, 0);
        assert!(engine.selection().is_empty());
        for index in [0, 1] {
            let cell = engine.cell(index).unwrap();
            assert_eq!(cell.state(), CellState::Hidden);
            assert!(cell.text_revealed());
        }
    }

    #[test]
    fn taps_wait_for_pending_resolution() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();
        engine.on_cell_tapped(1).unwrap();

        assert_eq!(engine.on_cell_tapped(3).unwrap(), TapOutcome::NoChange);
        assert_eq!(engine.on_cell_tapped(0).unwrap(), TapOutcome::NoChange);
        assert_eq!(engine.selection(), &[0, 1]);
        assert_eq!(engine.cell(3).unwrap().state(), CellState::Hidden);
    }

    #[test]
    fn matched_cells_ignore_taps() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();
        engine.on_cell_tapped(2).unwrap();
        engine.on_resolution_acknowledged();

        assert_eq!(engine.on_cell_tapped(0).unwrap(), TapOutcome::NoChange);
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn acknowledgment_without_resolution_is_a_no_op() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();

        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::NoChange);
        assert_eq!(engine.selection(), &[0]);
    }

    #[test]
    fn last_pair_wins_with_time_left() {
        let mut engine = small_engine();
        engine.on_cell_tapped(0).unwrap();
        engine.on_cell_tapped(2).unwrap();
        engine.on_resolution_acknowledged();
        engine.on_tick();
        engine.on_cell_tapped(3).unwrap();
        engine.on_cell_tapped(1).unwrap();

        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::Won);
        assert_eq!(engine.outcome(), Outcome::Won);
        assert_eq!(engine.state().remaining, 4);
        assert_eq!(engine.on_tick(), TickOutcome::NoChange);
        assert_eq!(engine.state().remaining, 4);
        assert_eq!(engine.on_cell_tapped(0).unwrap(), TapOutcome::NoChange);
    }

    #[test]
    fn clock_running_out_loses_exactly_once() {
        let mut engine = small_engine();

        let outcomes: Vec<_> = (0..5).map(|_| engine.on_tick()).collect();

        assert_eq!(
            outcomes,
            [
                TickOutcome::Counted,
                TickOutcome::Counted,
                TickOutcome::Counted,
                TickOutcome::Counted,
                TickOutcome::TimeUp,
            ]
        );
        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(engine.state().remaining, 0);
        assert_eq!(engine.on_tick(), TickOutcome::NoChange);
        assert_eq!(engine.outcome(), Outcome::Lost);
    }

    #[test]
    fn time_up_drops_pending_resolution() {
        let mut engine = small_engine();

        engine.on_cell_tapped(0).unwrap();
        engine.on_cell_tapped(2).unwrap();
        for _ in 0..5 {
            engine.on_tick();
        }

        assert_eq!(engine.pending(), None);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.cell(0).unwrap().state(), CellState::Hidden);
        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::NoChange);
        assert_eq!(engine.state().matched, 0);
    }

    #[test]
    fn restart_resets_everything_and_installs_board() {
        let mut engine = small_engine();
        engine.on_cell_tapped(0).unwrap();
        engine.on_cell_tapped(2).unwrap();
        engine.on_resolution_acknowledged();
        engine.on_cell_tapped(1).unwrap();
        for _ in 0..5 {
            engine.on_tick();
        }
        assert_eq!(engine.outcome(), Outcome::Lost);

        let next = board((2, 2), &["fox", "fox", "elk", "elk"]);
        engine.on_restart(next.clone()).unwrap();

        assert_eq!(engine.board(), &next);
        assert_eq!(engine.state().matched, 0);
        assert_eq!(engine.state().remaining, 5);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert!(engine.selection().is_empty());
        assert_eq!(engine.pending(), None);
    }

    #[test]
    fn restart_rejects_board_of_another_shape() {
        let mut engine = small_engine();

        let result = engine.on_restart(board((1, 2), &["a", "a"]));

        assert_eq!(
            result,
            Err(GameError::InvalidConfiguration(ConfigIssue::ShapeMismatch {
                expected: (2, 2),
                actual: (1, 2)
            }))
        );
        assert_eq!(engine.board().size(), (2, 2));
    }

    #[test]
    fn clock_splits_minutes_and_seconds() {
        let config = GameConfig::default();
        let board = RandomBoardGenerator::new(1)
            .generate(&mut RandomWordSupply::new(1), &config)
            .unwrap();
        let mut engine = MatchEngine::new(config, board).unwrap();

        assert_eq!(engine.state().clock(), (3, 0));
        engine.on_tick();
        assert_eq!(engine.state().clock(), (2, 59));
    }

    #[test]
    fn generated_two_by_two_game_is_won_by_matching_both_pairs() {
        let config = GameConfig::new((2, 2), 2, 5);
        let mut supply = WordList::new(["kiwi", "plum", "pear", "fig"]);
        let board = RandomBoardGenerator::new(9)
            .generate(&mut supply, &config)
            .unwrap();
        let mut engine = MatchEngine::new(config, board).unwrap();

        let partner = |engine: &MatchEngine, index: CellIndex| {
            let word = engine.board()[index].word();
            (0..4)
                .find(|&other| other != index && engine.board()[other].word() == word)
                .unwrap()
        };

        let first_partner = partner(&engine, 0);
        engine.on_cell_tapped(0).unwrap();
        let outcome = engine.on_cell_tapped(first_partner).unwrap();
        assert_eq!(outcome, TapOutcome::Resolved(Resolution::Match(0, first_partner)));
        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::Scored);
        assert_eq!(engine.state().matched, 1);
        assert_eq!(engine.outcome(), Outcome::InProgress);

        let rest: Vec<CellIndex> = (0..4)
            .filter(|&index| !engine.board()[index].state().is_matched())
            .collect();
        engine.on_cell_tapped(rest[0]).unwrap();
        engine.on_cell_tapped(rest[1]).unwrap();

        assert_eq!(engine.on_resolution_acknowledged(), AckOutcome::Won);
        assert_eq!(engine.state().matched, 2);
        assert_eq!(engine.outcome(), Outcome::Won);
    }
}
