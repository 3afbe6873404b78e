use std::fmt;

use strum_macros::Display;

use crate::card::{Card, Color};
use crate::command::{HistoryEntry, Record};
use crate::player::PlayerId;
use crate::turn::Direction;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub display_name: String,
    pub cards_count: usize,
}

/// Point-in-time copy of everything a table shows. Hands are reduced to
/// their sizes; look a hand up through the game itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub phase: GamePhase,
    pub top_card: Option<Card>,
    pub current_player: Option<PlayerId>,
    pub direction: Direction,
    pub color_in_play: Option<Color>,
    pub draw_stack: usize,
    pub history: Vec<HistoryEntry>,
    pub players: Vec<PlayerSummary>,
    pub players_in_game: Vec<PlayerId>,
    pub winners: Vec<PlayerId>,
    /// Last player left holding cards once the game is over.
    pub loser: Option<PlayerId>,
}

impl GameState {
    fn name_of(&self, id: PlayerId) -> String {
        self.players
            .iter()
            .find(|p| p.id == id)
            .map_or_else(|| id.to_string(), |p| format!("{} ({})", p.display_name, id))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- players ---")?;
        for player in &self.players {
            let marker = if Some(player.id) == self.current_player {
                "*"
            } else {
                " "
            };
            writeln!(
                f,
                "{marker} {} ({}): {} cards",
                player.display_name, player.id, player.cards_count
            )?;
        }

        if !self.winners.is_empty() {
            writeln!(f, "--- winners ---")?;
            for (place, id) in self.winners.iter().enumerate() {
                writeln!(f, "{}. {}", place + 1, self.name_of(*id))?;
            }
        }

        writeln!(f, "--- history ---")?;
        for entry in &self.history {
            let who = self.name_of(entry.player);
            match &entry.record {
                Record::Discard {
                    card,
                    color_chosen,
                    say_uno,
                } => {
                    write!(f, "{who} discarded {card}")?;
                    if let Some(color) = color_chosen {
                        write!(f, " as {color}")?;
                    }
                    if *say_uno {
                        write!(f, " and called UNO")?;
                    }
                    writeln!(f)?;
                }
                Record::Draw { count } => writeln!(f, "{who} drew {count}")?,
                Record::Challenge { succeeded } => {
                    writeln!(f, "{who} challenged ({})", outcome(*succeeded))?
                }
                Record::Catch { succeeded } => {
                    writeln!(f, "{who} tried a catch ({})", outcome(*succeeded))?
                }
            }
        }

        writeln!(f, "--- table ---")?;
        writeln!(f, "phase: {}", self.phase)?;
        if let Some(current) = self.current_player {
            writeln!(f, "turn: {}", self.name_of(current))?;
        }
        writeln!(f, "direction: {}", self.direction)?;
        if let Some(card) = self.top_card {
            writeln!(f, "top card: {card}")?;
        }
        if let Some(color) = self.color_in_play {
            writeln!(f, "color in play: {color}")?;
        }
        if self.draw_stack > 0 {
            writeln!(f, "pending draw: {}", self.draw_stack)?;
        }
        if let Some(loser) = self.loser {
            writeln!(f, "last one holding cards: {}", self.name_of(loser))?;
        }
        Ok(())
    }
}

fn outcome(succeeded: bool) -> &'static str {
    if succeeded {
        "succeeded"
    } else {
        "failed"
    }
}
