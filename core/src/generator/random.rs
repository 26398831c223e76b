use super::*;

/// Uniformly random board: picks the paired words from the distinct draw, fills
/// the rest with singletons, then shuffles the whole grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate<S: WordSupply + ?Sized>(self, supply: &mut S, config: &GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let total_cells = config.total_cells();
        let pairs = usize::from(config.pair_count());
        let singletons = usize::from(config.singleton_count());

        let mut distinct = draw_distinct(supply, total_cells)?;
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // the first `pairs` words after a shuffle are a uniform choice
        distinct.shuffle(&mut rng);
        let (paired, rest) = distinct.split_at(pairs);

        let mut words = Vec::with_capacity(usize::from(total_cells));
        for word in paired {
            words.push(word.clone());
            words.push(word.clone());
        }
        words.extend(rest[..singletons].iter().cloned());
        words.shuffle(&mut rng);

        let board = Board::from_words(config.size, words)?;
        log::debug!(
            "Generated {}x{} board with {} pairs and {} singletons",
            config.size.0,
            config.size.1,
            pairs,
            singletons
        );
        Ok(board)
    }
}
