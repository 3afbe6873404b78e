use crate::card::{Card, Color};
use crate::command::{Command, CommandOutcome};
use crate::error::{Result, UnoError};
use crate::player::PlayerId;
use crate::uno::Uno;

/// A player's place at the table: issues commands to the game on their behalf.
pub struct Seat<'a> {
    game: &'a mut Uno,
    player: PlayerId,
}

impl Uno {
    pub fn seat(&mut self, player: PlayerId) -> Result<Seat<'_>> {
        if self.get_player(&player).is_none() {
            return Err(UnoError::PlayerNotFound(player));
        }
        Ok(Seat { game: self, player })
    }
}

impl<'a> Seat<'a> {
    pub fn id(&self) -> PlayerId {
        self.player
    }

    pub fn hand(&self) -> &[Card] {
        self.game
            .get_player(&self.player)
            .map(|player| player.hand.as_slice())
            .unwrap_or_default()
    }

    /// Cards in hand that may be discarded right now.
    pub fn playable_cards(&self) -> Vec<Card> {
        self.hand()
            .iter()
            .filter(|card| self.game.is_valid_play(card))
            .copied()
            .collect()
    }

    pub fn command(&mut self, command: Command) -> Result<CommandOutcome> {
        self.game.process_command(self.player, command)
    }

    /// Returns whether the player went out.
    pub fn discard(
        &mut self,
        card: Card,
        color_chosen: Option<Color>,
        say_uno: bool,
    ) -> Result<bool> {
        match self.command(Command::Discard {
            card,
            color_chosen,
            say_uno,
        })? {
            CommandOutcome::Discarded { won } => Ok(won),
            _ => Ok(false),
        }
    }

    pub fn draw(&mut self) -> Result<Vec<Card>> {
        match self.command(Command::Draw)? {
            CommandOutcome::Drew(cards) => Ok(cards),
            _ => Ok(Vec::new()),
        }
    }

    pub fn challenge(&mut self) -> Result<bool> {
        match self.command(Command::Challenge)? {
            CommandOutcome::Challenged { succeeded } => Ok(succeeded),
            _ => Ok(false),
        }
    }

    pub fn catch(&mut self) -> Result<bool> {
        match self.command(Command::Catch)? {
            CommandOutcome::Caught { succeeded } => Ok(succeeded),
            _ => Ok(false),
        }
    }

    pub fn end_turn(&mut self) -> Result<()> {
        self.command(Command::EndTurn).map(|_| ())
    }
}
