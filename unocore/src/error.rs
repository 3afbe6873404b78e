use std::fmt::Debug;

use thiserror::Error;

use crate::card::Card;
use crate::player::PlayerId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player {0} has already joined")]
    DuplicatePlayer(PlayerId),
    #[error("The game has already started")]
    AlreadyStarted,
    #[error("The game has not started yet")]
    NotStarted,
    #[error("The game is over")]
    GameOver,
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),
    #[error("It is not {0}'s turn")]
    NotYourTurn(PlayerId),
    #[error("{0} cannot be played on the current discard pile")]
    InvalidCardPlayed(Card),
    #[error("A color must be chosen when playing {0}")]
    ColorNotChosen(Card),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("No cards left in the draw pile or the discard pile")]
    EmptyPile,
}

impl UnoError {
    /// Running out of cards in both piles cannot be recovered from; every other
    /// error rejects the command and leaves the game untouched.
    pub fn is_fatal(&self) -> bool {
        matches!(self, UnoError::EmptyPile)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("Empty card description")]
    Empty,
    #[error("Card numbers go from 0 to 9, got {0}")]
    NumberOutOfRange(u8),
    #[error("Unrecognised card `{0}`")]
    Unrecognised(String),
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
