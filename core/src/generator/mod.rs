use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Supply draws allowed per distinct word needed before giving up.
pub const DRAW_ATTEMPTS_PER_WORD: usize = 16;

pub trait BoardGenerator {
    fn generate<S: WordSupply + ?Sized>(self, supply: &mut S, config: &GameConfig) -> Result<Board>;
}

/// Pulls words from `supply` until `needed` distinct ones are collected, in draw order.
pub(crate) fn draw_distinct<S: WordSupply + ?Sized>(
    supply: &mut S,
    needed: CellCount,
) -> Result<Vec<Word>> {
    let needed_len = usize::from(needed);
    let max_attempts = needed_len.saturating_mul(DRAW_ATTEMPTS_PER_WORD);

    let mut seen = BTreeSet::new();
    let mut distinct = Vec::with_capacity(needed_len);
    let mut attempts = 0;

    while distinct.len() < needed_len {
        if attempts >= max_attempts {
            log::warn!(
                "Gave up after {} draws with {} of {} distinct words",
                attempts,
                distinct.len(),
                needed
            );
            return Err(GameError::InsufficientWords {
                needed,
                found: distinct.len() as CellCount,
            });
        }
        attempts += 1;

        let word = supply.next_word()?;
        if seen.insert(word.clone()) {
            distinct.push(word);
        }
    }

    let duplicates = attempts - needed_len;
    if duplicates > needed_len {
        log::warn!("Word supply repeated itself {} times", duplicates);
    }
    Ok(distinct)
}
