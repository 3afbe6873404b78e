use strum_macros::{Display, EnumString};

use crate::card::{Card, Color};
use crate::player::PlayerId;

#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum CommandKind {
    Discard,
    Draw,
    Challenge,
    Catch,
    EndTurn,
}

impl CommandKind {
    /// Only the turn holder may discard, draw or challenge.
    pub fn is_turn_gated(self) -> bool {
        matches!(
            self,
            CommandKind::Discard | CommandKind::Draw | CommandKind::Challenge
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Discard {
        card: Card,
        color_chosen: Option<Color>,
        say_uno: bool,
    },
    Draw,
    /// Accuse the previous player of an illegal Wild Draw Four.
    Challenge,
    /// Accuse the previous player of not calling UNO.
    Catch,
    EndTurn,
}

impl Command {
    pub fn discard(card: Card) -> Self {
        Command::Discard {
            card,
            color_chosen: None,
            say_uno: false,
        }
    }

    pub fn discard_wild(card: Card, color: Color) -> Self {
        Command::Discard {
            card,
            color_chosen: Some(color),
            say_uno: false,
        }
    }

    /// Sets the UNO call on a discard. Other commands are returned unchanged.
    pub fn with_uno(self) -> Self {
        match self {
            Command::Discard {
                card, color_chosen, ..
            } => Command::Discard {
                card,
                color_chosen,
                say_uno: true,
            },
            other => other,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Discard { .. } => CommandKind::Discard,
            Command::Draw => CommandKind::Draw,
            Command::Challenge => CommandKind::Challenge,
            Command::Catch => CommandKind::Catch,
            Command::EndTurn => CommandKind::EndTurn,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Discarded { won: bool },
    /// Cards drawn, already placed in the player's hand.
    Drew(Vec<Card>),
    Challenged { succeeded: bool },
    Caught { succeeded: bool },
    TurnEnded,
}

/// What a history entry remembers about the command it logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Discard {
        card: Card,
        color_chosen: Option<Color>,
        say_uno: bool,
    },
    Draw {
        count: usize,
    },
    Challenge {
        succeeded: bool,
    },
    Catch {
        succeeded: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub player: PlayerId,
    pub record: Record,
}

impl HistoryEntry {
    pub fn discarded_card(&self) -> Option<&Card> {
        match &self.record {
            Record::Discard { card, .. } => Some(card),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn command_kinds_parse_from_snake_case() {
        assert_eq!(CommandKind::from_str("end_turn"), Ok(CommandKind::EndTurn));
        assert_eq!(CommandKind::from_str("Discard"), Ok(CommandKind::Discard));
        assert_eq!(CommandKind::EndTurn.to_string(), "end_turn");
    }

    #[test]
    fn catch_and_end_turn_are_not_turn_gated() {
        assert!(CommandKind::Discard.is_turn_gated());
        assert!(CommandKind::Draw.is_turn_gated());
        assert!(CommandKind::Challenge.is_turn_gated());
        assert!(!CommandKind::Catch.is_turn_gated());
        assert!(!CommandKind::EndTurn.is_turn_gated());
    }

    #[test]
    fn with_uno_only_touches_discards() {
        let card = Card::numbered(Color::Red, 1);
        assert_eq!(
            Command::discard(card).with_uno(),
            Command::Discard {
                card,
                color_chosen: None,
                say_uno: true
            }
        );
        assert_eq!(Command::Draw.with_uno(), Command::Draw);
    }
}
