use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Source of candidate words for board generation.
pub trait WordSupply {
    fn next_word(&mut self) -> Result<Word>;
}

impl<S: WordSupply + ?Sized> WordSupply for &mut S {
    fn next_word(&mut self) -> Result<Word> {
        (**self).next_word()
    }
}

/// Hands out a fixed list of words in order, then reports exhaustion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList {
    words: VecDeque<Word>,
}

impl WordList {
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.words.len()
    }
}

impl WordSupply for WordList {
    fn next_word(&mut self) -> Result<Word> {
        self.words.pop_front().ok_or(GameError::SupplyExhausted)
    }
}

/// Draws words uniformly at random from a vocabulary, repeats included, the way
/// a random-word service would.
#[derive(Clone, Debug)]
pub struct RandomWordSupply {
    vocabulary: Vec<Word>,
    rng: SmallRng,
}

impl RandomWordSupply {
    /// Uses [`DEFAULT_VOCABULARY`].
    pub fn new(seed: u64) -> Self {
        Self::with_vocabulary(seed, DEFAULT_VOCABULARY.iter().copied())
    }

    pub fn with_vocabulary<I>(seed: u64, vocabulary: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

impl WordSupply for RandomWordSupply {
    fn next_word(&mut self) -> Result<Word> {
        if self.vocabulary.is_empty() {
            return Err(GameError::SupplyExhausted);
        }
        let pick = self.rng.random_range(0..self.vocabulary.len());
        Ok(self.vocabulary[pick].clone())
    }
}

pub const DEFAULT_VOCABULARY: &[&str] = &[
    "acorn", "anchor", "anvil", "apron", "arrow", "attic", "badge", "bamboo", "banjo", "barrel",
    "basket", "beacon", "beetle", "bellow", "biscuit", "blanket", "blossom", "bonnet", "boulder",
    "bramble", "bridge", "bucket", "buckle", "bundle", "butter", "cabin", "cactus", "candle",
    "canyon", "carpet", "castle", "cellar", "chalk", "cherry", "chimney", "cinder", "clover",
    "cobble", "comet", "copper", "coral", "cotton", "cradle", "crayon", "cricket", "crystal",
    "cushion", "dagger", "daisy", "dancer", "desert", "dolphin", "donkey", "dragon", "drizzle",
    "eagle", "easel", "ember", "engine", "falcon", "feather", "fennel", "fiddle", "flannel",
    "flute", "forest", "fossil", "fountain", "garden", "garnet", "ginger", "glacier", "goblet",
    "granite", "gravel", "hammer", "harbor", "harvest", "hazel", "helmet", "hermit", "hollow",
    "honey", "hornet", "island", "ivory", "jacket", "jasmine", "jigsaw", "jungle", "kettle",
    "kitten", "ladder", "lantern", "lemon", "lilac", "lizard", "locket", "lumber", "magnet",
    "mantle", "maple", "marble", "meadow", "mirror", "mitten", "monkey", "mortar", "muffin",
    "needle", "nickel", "noodle", "nutmeg", "oyster", "paddle", "palace", "parcel", "parrot",
    "pebble", "pepper", "pillow", "pirate", "planet", "pocket", "pollen", "potato", "puddle",
    "pumpkin", "puzzle", "quarry", "quill", "rabbit", "raisin", "ribbon", "river", "rocket",
    "saddle", "salmon", "satchel", "scarf", "shadow", "shovel", "silver", "sketch", "socket",
    "spider", "sponge", "sprout", "squash", "staple", "statue", "summit", "sundial", "tablet",
    "teapot", "thimble", "thistle", "thunder", "timber", "tinsel", "toffee", "tomato", "trellis",
    "tulip", "tunnel", "turnip", "velvet", "violin", "voyage", "waffle", "wagon", "walnut",
    "willow", "window", "wizard", "yarrow", "zephyr",
];
