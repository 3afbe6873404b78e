use core::fmt;
use std::{fmt::Display, str::FromStr};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::error::ParseCardError;

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Any,
}

impl Color {
    pub fn is_any(self) -> bool {
        self == Color::Any
    }

    /// The four colors a wild card can be declared as.
    pub fn concrete() -> impl Iterator<Item = Color> {
        Color::iter().filter(|color| !color.is_any())
    }
}

#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
#[strum(ascii_case_insensitive)]
pub enum Action {
    Skip,
    Reverse,
    #[strum(to_string = "Draw Two", serialize = "draw2", serialize = "drawtwo")]
    DrawTwo,
    Wild,
    #[strum(
        to_string = "Wild Draw Four",
        serialize = "draw4",
        serialize = "drawfour",
        serialize = "wilddrawfour",
        serialize = "wilddraw4"
    )]
    DrawFour,
}

impl Action {
    /// Penalty this action adds to the pending draw stack.
    pub fn draw_penalty(self) -> Option<usize> {
        match self {
            Action::DrawTwo => Some(2),
            Action::DrawFour => Some(4),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number(u8),
    Action(Action),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    kind: CardKind,
}

impl Card {
    pub fn numbered(color: Color, number: u8) -> Self {
        Self {
            color,
            kind: CardKind::Number(number),
        }
    }

    pub fn action(color: Color, action: Action) -> Self {
        Self {
            color,
            kind: CardKind::Action(action),
        }
    }

    pub fn wild() -> Self {
        Self::action(Color::Any, Action::Wild)
    }

    pub fn wild_draw_four() -> Self {
        Self::action(Color::Any, Action::DrawFour)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn number(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(number) => Some(number),
            CardKind::Action(_) => None,
        }
    }

    pub fn action_kind(&self) -> Option<Action> {
        match self.kind {
            CardKind::Number(_) => None,
            CardKind::Action(action) => Some(action),
        }
    }

    pub fn is_number_card(&self) -> bool {
        matches!(self.kind, CardKind::Number(_))
    }

    pub fn is_action_card(&self) -> bool {
        matches!(self.kind, CardKind::Action(_))
    }

    /// Wild and Wild Draw Four let the player declare the color in play.
    pub fn can_choose_color(&self) -> bool {
        matches!(
            self.kind,
            CardKind::Action(Action::Wild) | CardKind::Action(Action::DrawFour)
        )
    }

    pub fn is_draw_four(&self) -> bool {
        self.action_kind() == Some(Action::DrawFour)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color, self.kind) {
            (Color::Any, CardKind::Action(action)) => write!(f, "{action}"),
            (color, CardKind::Number(number)) => write!(f, "{color} {number}"),
            (color, CardKind::Action(action)) => write!(f, "{color} {action}"),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts `red_3`, `Blue Skip`, `green-draw2`, `wild`, `draw4` and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace(['_', '-'], " ");
        let mut tokens = normalized.split_whitespace();

        let Some(first) = tokens.next() else {
            return Err(ParseCardError::Empty);
        };
        let rest = tokens.collect::<String>();

        if let Ok(color) = Color::from_str(first) {
            if color.is_any() || rest.is_empty() {
                return Err(ParseCardError::Unrecognised(s.to_string()));
            }

            if let Ok(number) = rest.parse::<u8>() {
                if number > 9 {
                    return Err(ParseCardError::NumberOutOfRange(number));
                }
                return Ok(Card::numbered(color, number));
            }

            return match Action::from_str(&rest) {
                Ok(action) if !matches!(action, Action::Wild | Action::DrawFour) => {
                    Ok(Card::action(color, action))
                }
                _ => Err(ParseCardError::Unrecognised(s.to_string())),
            };
        }

        let joined = format!("{first}{rest}");
        match Action::from_str(&joined) {
            Ok(Action::Wild) => Ok(Card::wild()),
            Ok(Action::DrawFour) => Ok(Card::wild_draw_four()),
            _ => Err(ParseCardError::Unrecognised(s.to_string())),
        }
    }
}
