use crate::constants::DEFAULT_HAND_SIZE;
use crate::deck::DeckConfig;

/// Everything needed to set up a table before players join.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub deck: DeckConfig,
    /// How many copies of `deck` are shuffled together.
    pub deck_count: usize,
    pub hand_size: usize,
    /// Fixes shuffles and generated player ids. Unseeded games use entropy.
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            deck: DeckConfig::standard(),
            deck_count: 1,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl GameSettings {
    pub fn deck(mut self, deck: DeckConfig) -> Self {
        self.deck = deck;
        self
    }

    pub fn deck_count(mut self, deck_count: usize) -> Self {
        self.deck_count = deck_count.max(1);
        self
    }

    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
