use strum::EnumCount;

use crate::card::{Action, Color};

pub(crate) const ZERO_CARDS: &[u8] = &[0];
pub(crate) const NON_ZERO_CARDS: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9];
pub(crate) const COLORED_ACTIONS: &[Action] = &[Action::Skip, Action::Reverse, Action::DrawTwo];
pub(crate) const WILD_ACTIONS: &[Action] = &[Action::Wild, Action::DrawFour];

pub(crate) const ZERO_CARDS_PER_COLOR: usize = 1;
pub(crate) const NON_ZERO_CARDS_PER_COLOR: usize = 2;
pub(crate) const WILD_CARDS_PER_KIND: usize = 4;

pub(crate) const CONCRETE_COLORS: usize = Color::COUNT - 1;

pub const TOTAL_CARDS_IN_DECK: usize = CONCRETE_COLORS
    * (ZERO_CARDS.len() * ZERO_CARDS_PER_COLOR
        + (NON_ZERO_CARDS.len() + COLORED_ACTIONS.len()) * NON_ZERO_CARDS_PER_COLOR)
    + WILD_ACTIONS.len() * WILD_CARDS_PER_KIND;

pub const DEFAULT_HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

pub(crate) const CHALLENGE_SUCCESS_PENALTY: usize = 4;
pub(crate) const CHALLENGE_FAILURE_PENALTY: usize = 6;
pub(crate) const MISSED_UNO_PENALTY: usize = 2;
