use std::collections::VecDeque;

use crate::card::Card;
use crate::error::{Result, UnoError};

/// Face-down pile players draw from, front first.
#[derive(Debug, Default)]
pub struct DrawPile(VecDeque<Card>);

impl DrawPile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }

    pub fn draw_one(&mut self) -> Result<Card> {
        self.0.pop_front().ok_or(UnoError::EmptyPile)
    }

    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.0.extend(cards);
    }

    /// Whether a number card is left once the first `skip` cards are dealt.
    pub(crate) fn has_number_card_after(&self, skip: usize) -> bool {
        self.0.iter().skip(skip).any(Card::is_number_card)
    }

    /// Removes the first number card, used to seed the discard pile.
    pub(crate) fn take_first_number_card(&mut self) -> Option<Card> {
        self.0
            .iter()
            .position(Card::is_number_card)
            .and_then(|pos| self.0.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Face-up pile. The last card is the one in play.
#[derive(Debug, Default)]
pub struct DiscardPile(Vec<Card>);

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discard(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn top_card(&self) -> Result<&Card> {
        self.0.last().ok_or(UnoError::EmptyPile)
    }

    /// The card that was on top before the current one.
    pub fn card_below_top(&self) -> Option<&Card> {
        self.0.len().checked_sub(2).map(|index| &self.0[index])
    }

    /// Takes every card except the top one, oldest first.
    pub fn reclaim_all_but_top(&mut self) -> Vec<Card> {
        let keep_from = self.0.len().saturating_sub(1);
        let top = self.0.split_off(keep_from);
        std::mem::replace(&mut self.0, top)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
