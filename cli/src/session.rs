use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use thiserror::Error;
use wordmatch_core::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Tap(CellIndex),
    Restart,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command `{0}`, type `help` for the list")]
    Unknown(String),
    #[error("`{0}` is not a cell number")]
    BadCell(String),
    #[error("`tap` needs a cell number")]
    MissingCell,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Self::Show);
        };

        let parse_cell = |text: &str| {
            text.parse()
                .map_err(|_| CommandError::BadCell(text.to_string()))
        };

        match head.to_ascii_lowercase().as_str() {
            "tap" | "t" => match parts.next() {
                Some(cell) => parse_cell(cell).map(Self::Tap),
                None => Err(CommandError::MissingCell),
            },
            "restart" | "r" => Ok(Self::Restart),
            "show" | "s" => Ok(Self::Show),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                parse_cell(other).map(Self::Tap)
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Something worth telling the player after a command or a clock update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Matched(Word),
    Mismatched(Word, Word),
    Won,
    TimeUp,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched(word) => write!(f, "Matched words! ({word})"),
            Self::Mismatched(first, second) => write!(f, "No match: {first} / {second}"),
            Self::Won => write!(f, "Game won! Type `restart` to play again."),
            Self::TimeUp => write!(f, "Time's up! Game over. Type `restart` to play again."),
        }
    }
}

/// Terminal stand-in for a presentation layer: owns the wall clock and
/// acknowledges every resolution as soon as it has been reported.
#[derive(Debug)]
pub struct Session {
    engine: MatchEngine,
    supply: RandomWordSupply,
    seed: u64,
    last_tick: Instant,
}

impl Session {
    pub fn start(
        config: GameConfig,
        mut supply: RandomWordSupply,
        seed: u64,
        now: Instant,
    ) -> wordmatch_core::Result<Self> {
        let board = RandomBoardGenerator::new(seed).generate(&mut supply, &config)?;
        Ok(Self {
            engine: MatchEngine::new(config, board)?,
            supply,
            seed,
            last_tick: now,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(&self.engine)
    }

    /// Delivers one tick per whole second elapsed since the previous one.
    pub fn catch_up(&mut self, now: Instant) -> Vec<Notice> {
        let elapsed = now.saturating_duration_since(self.last_tick).as_secs();
        self.last_tick += Duration::from_secs(elapsed);

        let mut notices = Vec::new();
        for _ in 0..elapsed {
            match self.engine.on_tick() {
                TickOutcome::TimeUp => notices.push(Notice::TimeUp),
                TickOutcome::Counted => {}
                TickOutcome::NoChange => break,
            }
        }
        notices
    }

    pub fn apply(&mut self, command: Command, now: Instant) -> wordmatch_core::Result<Vec<Notice>> {
        match command {
            Command::Tap(index) => self.tap(index),
            Command::Restart => {
                self.restart(now)?;
                Ok(Vec::new())
            }
            Command::Show | Command::Help | Command::Quit => Ok(Vec::new()),
        }
    }

    fn tap(&mut self, index: CellIndex) -> wordmatch_core::Result<Vec<Notice>> {
        let TapOutcome::Resolved(resolution) = self.engine.on_cell_tapped(index)? else {
            return Ok(Vec::new());
        };

        let (first, second) = resolution.cells();
        let first_word = self.engine.board()[first].word().clone();
        let mut notices = vec![if resolution.is_match() {
            Notice::Matched(first_word)
        } else {
            Notice::Mismatched(first_word, self.engine.board()[second].word().clone())
        }];

        if self.engine.on_resolution_acknowledged() == AckOutcome::Won {
            notices.push(Notice::Won);
        }
        Ok(notices)
    }

    fn restart(&mut self, now: Instant) -> wordmatch_core::Result<()> {
        self.seed = self.seed.wrapping_add(1);
        let config = *self.engine.config();
        let board = RandomBoardGenerator::new(self.seed).generate(&mut self.supply, &config)?;
        self.engine.on_restart(board)?;
        self.last_tick = now;
        Ok(())
    }
}
