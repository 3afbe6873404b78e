use std::fmt;

use crate::card::Card;

/// Opaque player handle. Assigned by whoever hosts the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    display_name: String,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            hand: Vec::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.card_index(card).is_some()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }

    /// Removes the first copy of `card`, returning whether one was held.
    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.card_index(card) {
            Some(index) => {
                self.hand.remove(index);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.id)
    }
}
