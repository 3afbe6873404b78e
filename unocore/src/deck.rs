use rand::{seq::SliceRandom, Rng};
use strum::IntoEnumIterator;

use crate::{
    card::{Action, Card, Color},
    constants::*,
};

/// Which colors a [`DeckRule`] produces cards for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorFilter {
    #[default]
    All,
    Include(Vec<Color>),
    Exclude(Vec<Color>),
}

impl ColorFilter {
    pub fn colors(&self) -> Vec<Color> {
        match self {
            ColorFilter::All => Color::iter().collect(),
            ColorFilter::Include(colors) => {
                Color::iter().filter(|color| colors.contains(color)).collect()
            }
            ColorFilter::Exclude(colors) => Color::iter()
                .filter(|color| !colors.contains(color))
                .collect(),
        }
    }
}

/// One line of a deck configuration: every (color × number) and
/// (color × action) pair, produced `times` times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckRule {
    pub times: usize,
    pub numbers: Vec<u8>,
    pub actions: Vec<Action>,
    pub colors: ColorFilter,
}

impl DeckRule {
    pub fn new(times: usize) -> Self {
        Self {
            times,
            ..Default::default()
        }
    }

    pub fn numbers(mut self, numbers: &[u8]) -> Self {
        self.numbers = numbers.to_vec();
        self
    }

    pub fn actions(mut self, actions: &[Action]) -> Self {
        self.actions = actions.to_vec();
        self
    }

    pub fn include_colors(mut self, colors: &[Color]) -> Self {
        self.colors = ColorFilter::Include(colors.to_vec());
        self
    }

    pub fn exclude_colors(mut self, colors: &[Color]) -> Self {
        self.colors = ColorFilter::Exclude(colors.to_vec());
        self
    }

    fn make_cards(&self, cards: &mut Vec<Card>) {
        let colors = self.colors.colors();

        for _ in 0..self.times {
            for color in &colors {
                for number in &self.numbers {
                    cards.push(Card::numbered(*color, *number));
                }
            }

            for color in &colors {
                for action in &self.actions {
                    cards.push(Card::action(*color, *action));
                }
            }
        }
    }

    fn cards_count(&self) -> usize {
        self.times * self.colors.colors().len() * (self.numbers.len() + self.actions.len())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckConfig(pub Vec<DeckRule>);

impl DeckConfig {
    /// The regular 108 card UNO deck.
    pub fn standard() -> Self {
        Self(vec![
            DeckRule::new(ZERO_CARDS_PER_COLOR)
                .numbers(ZERO_CARDS)
                .exclude_colors(&[Color::Any]),
            DeckRule::new(NON_ZERO_CARDS_PER_COLOR)
                .numbers(NON_ZERO_CARDS)
                .actions(COLORED_ACTIONS)
                .exclude_colors(&[Color::Any]),
            DeckRule::new(WILD_CARDS_PER_KIND)
                .actions(WILD_ACTIONS)
                .include_colors(&[Color::Any]),
        ])
    }

    pub fn cards_count(&self) -> usize {
        self.0.iter().map(DeckRule::cards_count).sum()
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// Builds the cards in declaration order. Shuffling is left to the caller.
    pub fn from_config(config: &DeckConfig) -> Self {
        let mut cards = Vec::with_capacity(config.cards_count());

        for rule in &config.0 {
            rule.make_cards(&mut cards);
        }

        Self(cards)
    }

    pub fn standard() -> Self {
        Self::from_config(&DeckConfig::standard())
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn extend(&mut self, other: Deck) {
        self.0.extend(other.0);
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }
}
