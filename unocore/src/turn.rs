use strum_macros::Display;

use crate::card::{Action, Card};
use crate::player::PlayerId;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seating order and whose turn it is.
///
/// Players are stored by id only; the game owns the actual [`Player`](crate::player::Player)
/// values. Positions are always looked up by identity, so removing players
/// never leaves a stale index behind.
#[derive(Clone, Debug, Default)]
pub struct TurnTracker {
    tracked: Vec<PlayerId>,
    direction: Direction,
    current: Option<PlayerId>,
    previous: Option<PlayerId>,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whoever holds the turn, or the first seated player if no turn has been
    /// played yet.
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.tracked.is_empty() {
            return None;
        }
        self.current.or_else(|| self.tracked.first().copied())
    }

    pub fn previous_player(&self) -> Option<PlayerId> {
        self.previous
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn tracked(&self) -> &[PlayerId] {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    fn current_index(&self) -> Option<usize> {
        let current = self.current_player()?;
        self.tracked.iter().position(|id| *id == current)
    }

    /// Passes the turn on, applying the effect of `played` if there is one.
    /// Returns the new turn holder.
    pub fn advance(&mut self, played: Option<&Card>) -> Option<PlayerId> {
        let index = self.current_index()?;
        let len = self.tracked.len();
        let action = played.and_then(Card::action_kind);

        if action == Some(Action::Reverse) {
            self.direction = self.direction.reversed();
        }

        // With two players a reverse hands the turn straight back.
        let step = match action {
            Some(Action::Skip) => 2,
            Some(Action::Reverse) if len == 2 => 2,
            _ => 1,
        } % len;

        let next = match self.direction {
            Direction::Clockwise => (index + step) % len,
            Direction::CounterClockwise => (index + len - step) % len,
        };

        self.previous = Some(self.tracked[index]);
        self.current = Some(self.tracked[next]);
        self.current
    }

    /// Seats a player at the end of the table.
    pub fn start_tracking(&mut self, player: PlayerId) {
        if self.tracked.is_empty() {
            self.current = Some(player);
        }
        self.tracked.push(player);
    }

    /// Removes a player from the rotation. If they held the turn it moves to
    /// whoever now sits next in the current direction, and the removed player
    /// becomes the previous turn holder.
    pub fn stop_tracking(&mut self, player: PlayerId) -> bool {
        let Some(index) = self.tracked.iter().position(|id| *id == player) else {
            return false;
        };
        let held_turn = self.current_player() == Some(player);

        self.tracked.remove(index);

        if held_turn {
            let len = self.tracked.len();
            self.previous = Some(player);
            self.current = match (len, self.direction) {
                (0, _) => None,
                (_, Direction::Clockwise) => Some(self.tracked[index % len]),
                (_, Direction::CounterClockwise) => Some(self.tracked[(index + len - 1) % len]),
            };
        }

        true
    }
}
