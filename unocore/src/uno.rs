use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::{debug, error, info, warn};

use crate::card::{Action, Card, Color};
use crate::command::{Command, CommandOutcome, HistoryEntry, Record};
use crate::constants::{
    CHALLENGE_FAILURE_PENALTY, CHALLENGE_SUCCESS_PENALTY, MAX_PLAYERS, MIN_PLAYERS,
    MISSED_UNO_PENALTY,
};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::pile::{DiscardPile, DrawPile};
use crate::player::{Player, PlayerId};
use crate::rules;
use crate::settings::GameSettings;
use crate::state::{GamePhase, GameState, PlayerSummary};
use crate::turn::{Direction, TurnTracker};

/// One game of UNO and the single source of truth for it.
///
/// Every command takes `&mut self`, so a game is only ever changed by one
/// caller at a time. Hosts running several games keep one lock per game.
#[derive(Debug)]
pub struct Uno {
    settings: GameSettings,
    rng: StdRng,
    phase: GamePhase,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    turns: TurnTracker,
    players: Vec<Player>,
    color_in_play: Option<Color>,
    /// Color in play before the most recent discard, needed to judge challenges
    /// against a wild card.
    earlier_color: Option<Color>,
    draw_stack: usize,
    history: Vec<HistoryEntry>,
    winners: Vec<PlayerId>,
}

impl Default for Uno {
    fn default() -> Self {
        Self::new(GameSettings::default())
    }
}

impl Uno {
    pub fn new(settings: GameSettings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut deck = Deck::from_config(&settings.deck);
        for _ in 1..settings.deck_count {
            deck.extend(Deck::from_config(&settings.deck));
        }
        deck.shuffle(&mut rng);

        Self {
            draw_pile: DrawPile::new(deck.into_cards()),
            discard_pile: DiscardPile::new(),
            turns: TurnTracker::new(),
            players: Vec::new(),
            phase: GamePhase::Setup,
            color_in_play: None,
            earlier_color: None,
            draw_stack: 0,
            history: Vec::new(),
            winners: Vec::new(),
            settings,
            rng,
        }
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.phase != GamePhase::Setup {
            return Err(UnoError::AlreadyStarted);
        }
        if self.get_player(&player.id).is_some() {
            return Err(UnoError::DuplicatePlayer(player.id));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        debug!(player = %player, "player joined");
        self.turns.start_tracking(player.id);
        self.players.push(player);
        Ok(())
    }

    /// Adds a player under a freshly generated id.
    pub fn join(&mut self, display_name: impl Into<String>) -> Result<PlayerId> {
        let id = loop {
            let id = PlayerId(self.rng.gen());
            if self.get_player(&id).is_none() {
                break id;
            }
        };

        self.add_player(Player::new(id, display_name))?;
        Ok(id)
    }

    /// Deals the starting hands and turns over the first number card.
    pub fn start(&mut self) -> Result<()> {
        if self.phase != GamePhase::Setup {
            return Err(UnoError::AlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }
        let dealt = self.players.len() * self.settings.hand_size;
        if !self.draw_pile.has_number_card_after(dealt) {
            error!(
                cards = self.draw_pile.len(),
                players = self.players.len(),
                "no number card left to start the discard pile"
            );
            return Err(UnoError::EmptyPile);
        }

        for _ in 0..self.settings.hand_size {
            for player in self.players.iter_mut() {
                player.add_card(self.draw_pile.draw_one()?);
            }
        }

        let starter = self
            .draw_pile
            .take_first_number_card()
            .ok_or(UnoError::EmptyPile)?;
        self.color_in_play = Some(starter.color());
        self.discard_pile.discard(starter);
        self.phase = GamePhase::InProgress;

        info!(
            players = self.players.len(),
            starter = %starter,
            "game started"
        );
        Ok(())
    }

    /// Runs one command on behalf of `player_id`. Rejected commands leave the
    /// game exactly as it was.
    pub fn process_command(
        &mut self,
        player_id: PlayerId,
        command: Command,
    ) -> Result<CommandOutcome> {
        match self.phase {
            GamePhase::Setup => return Err(UnoError::NotStarted),
            GamePhase::Finished => return Err(UnoError::GameOver),
            GamePhase::InProgress => {}
        }
        if self.get_player(&player_id).is_none() {
            return Err(UnoError::PlayerNotFound(player_id));
        }

        let kind = command.kind();
        if kind.is_turn_gated() && self.turns.current_player() != Some(player_id) {
            warn!(player = %player_id, command = %kind, "command out of turn");
            return Err(UnoError::NotYourTurn(player_id));
        }

        debug!(player = %player_id, command = %kind, "processing command");

        let outcome = match command {
            Command::Discard {
                card,
                color_chosen,
                say_uno,
            } => self.discard(player_id, card, color_chosen, say_uno),
            Command::Draw => self.draw(player_id),
            Command::Challenge => self.challenge(player_id),
            Command::Catch => self.catch(player_id),
            Command::EndTurn => {
                self.turns.advance(None);
                Ok(CommandOutcome::TurnEnded)
            }
        };

        match &outcome {
            Ok(outcome) => debug!(player = %player_id, ?outcome, "command applied"),
            Err(err) if err.is_fatal() => error!(player = %player_id, %err, "command failed"),
            Err(err) => warn!(player = %player_id, %err, "command rejected"),
        }

        if self.turns.len() < MIN_PLAYERS {
            self.phase = GamePhase::Finished;
            info!(winners = self.winners.len(), "game over");
        }

        outcome
    }

    /// Whether `card` could be discarded right now.
    pub fn is_valid_play(&self, card: &Card) -> bool {
        let Ok(top) = self.discard_pile.top_card() else {
            return false;
        };
        let color_in_play = self.color_in_play.unwrap_or(top.color());
        rules::is_valid_play(top, color_in_play, self.draw_stack, card)
    }

    fn discard(
        &mut self,
        player_id: PlayerId,
        card: Card,
        color_chosen: Option<Color>,
        say_uno: bool,
    ) -> Result<CommandOutcome> {
        if !self.is_valid_play(&card) {
            return Err(UnoError::InvalidCardPlayed(card));
        }

        let next_color = if card.can_choose_color() {
            match color_chosen {
                Some(color) if !color.is_any() => color,
                _ => return Err(UnoError::ColorNotChosen(card)),
            }
        } else {
            card.color()
        };

        let player = self.player_mut(player_id)?;
        if !player.remove_card(&card) {
            return Err(UnoError::CardNotInHand(card));
        }
        let won = player.hand.is_empty();

        self.earlier_color = self.color_in_play;
        self.color_in_play = Some(next_color);
        self.discard_pile.discard(card);

        self.draw_stack = match card.action_kind().and_then(Action::draw_penalty) {
            Some(penalty) => self.draw_stack + penalty,
            None => 0,
        };

        // Going out on an action card does not hand its effect to anyone.
        let turn_ends = !(card.is_action_card() && won);
        if turn_ends {
            self.turns.advance(Some(&card));
        }

        if won {
            info!(player = %player_id, place = self.winners.len() + 1, "player went out");
            self.winners.push(player_id);
            self.turns.stop_tracking(player_id);
        }

        self.history.push(HistoryEntry {
            player: player_id,
            record: Record::Discard {
                card,
                color_chosen,
                say_uno,
            },
        });

        Ok(CommandOutcome::Discarded { won })
    }

    fn draw(&mut self, player_id: PlayerId) -> Result<CommandOutcome> {
        let forced = self.draw_stack > 0;
        let count = if forced { self.draw_stack } else { 1 };

        let cards = self.draw_cards(count)?;
        self.player_mut(player_id)?.add_cards(cards.iter().copied());

        if forced {
            self.draw_stack = 0;
            self.turns.advance(None);
        }

        self.history.push(HistoryEntry {
            player: player_id,
            record: Record::Draw { count },
        });

        Ok(CommandOutcome::Drew(cards))
    }

    fn challenge(&mut self, player_id: PlayerId) -> Result<CommandOutcome> {
        let draw_four_on_top = matches!(
            self.history.last().and_then(HistoryEntry::discarded_card),
            Some(card) if card.is_draw_four()
        );
        let accused = self
            .turns
            .previous_player()
            .filter(|_| draw_four_on_top);
        if accused.is_none() {
            debug!(player = %player_id, "no draw four to challenge, counting as failed");
        }

        // Challenging anything but a fresh draw four is a failed challenge.
        let succeeded = match (accused, self.discard_pile.card_below_top()) {
            (Some(accused), Some(earlier_top)) => {
                let earlier_color = self.earlier_color.unwrap_or(earlier_top.color());
                self.get_player(&accused).map_or(false, |player| {
                    player.hand.iter().any(|card| {
                        !card.is_draw_four()
                            && rules::could_have_played(card, earlier_top, earlier_color)
                    })
                })
            }
            _ => false,
        };

        let (penalized, penalty) = match accused {
            Some(accused) if succeeded => (accused, CHALLENGE_SUCCESS_PENALTY),
            _ => (player_id, CHALLENGE_FAILURE_PENALTY),
        };
        let cards = self.draw_cards(penalty)?;
        self.player_mut(penalized)?.add_cards(cards);

        if !succeeded {
            self.turns.advance(None);
        }
        self.draw_stack = 0;

        info!(player = %player_id, accused = ?accused, succeeded, "challenge resolved");
        self.history.push(HistoryEntry {
            player: player_id,
            record: Record::Challenge { succeeded },
        });

        Ok(CommandOutcome::Challenged { succeeded })
    }

    fn catch(&mut self, player_id: PlayerId) -> Result<CommandOutcome> {
        let unannounced_discard = matches!(
            self.history.last(),
            Some(HistoryEntry {
                record: Record::Discard { say_uno: false, .. },
                ..
            })
        );

        let culprit = self
            .turns
            .previous_player()
            .filter(|_| unannounced_discard)
            .filter(|id| self.get_player(id).map_or(false, |p| p.cards_count() == 1));

        if let Some(culprit) = culprit {
            let cards = self.draw_cards(MISSED_UNO_PENALTY)?;
            self.player_mut(culprit)?.add_cards(cards);
            info!(player = %player_id, culprit = %culprit, "caught a missed UNO");
        }

        let succeeded = culprit.is_some();
        self.history.push(HistoryEntry {
            player: player_id,
            record: Record::Catch { succeeded },
        });

        Ok(CommandOutcome::Caught { succeeded })
    }

    /// Draws `count` cards, turning the discard pile over whenever the draw
    /// pile runs out. Fails up front if both piles together are too small.
    fn draw_cards(&mut self, count: usize) -> Result<Vec<Card>> {
        let available = self.draw_pile.len() + self.discard_pile.len().saturating_sub(1);
        if available < count {
            error!(count, available, "not enough cards left to draw");
            return Err(UnoError::EmptyPile);
        }

        (0..count).map(|_| self.draw_one()).collect()
    }

    fn draw_one(&mut self) -> Result<Card> {
        self.draw_pile.draw_one().or_else(|_| {
            self.reshuffle();
            self.draw_pile.draw_one()
        })
    }

    fn reshuffle(&mut self) {
        let mut cards = self.discard_pile.reclaim_all_but_top();
        cards.shuffle(&mut self.rng);
        warn!(cards = cards.len(), "draw pile empty, reshuffling discard pile");
        self.draw_pile.add_cards(cards);
    }

    fn player_mut(&mut self, player_id: PlayerId) -> Result<&mut Player> {
        self.get_player_mut(&player_id)
            .ok_or(UnoError::PlayerNotFound(player_id))
    }

    pub fn get_player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|player| player.id).collect()
    }

    pub fn get_player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == *player_id)
    }

    pub fn get_player_mut(&mut self, player_id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == *player_id)
    }

    pub fn get_current_turn_player_id(&self) -> Option<PlayerId> {
        self.turns.current_player()
    }

    pub fn get_previous_turn_player_id(&self) -> Option<PlayerId> {
        self.turns.previous_player()
    }

    pub fn get_top_card(&self) -> Option<&Card> {
        self.discard_pile.top_card().ok()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn direction(&self) -> Direction {
        self.turns.direction()
    }

    pub fn color_in_play(&self) -> Option<Color> {
        self.color_in_play
    }

    pub fn draw_stack(&self) -> usize {
        self.draw_stack
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    pub fn players_in_game(&self) -> &[PlayerId] {
        self.turns.tracked()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    pub fn state(&self) -> GameState {
        GameState {
            phase: self.phase,
            top_card: self.get_top_card().copied(),
            current_player: self.turns.current_player(),
            direction: self.turns.direction(),
            color_in_play: self.color_in_play,
            draw_stack: self.draw_stack,
            history: self.history.clone(),
            players: self
                .players
                .iter()
                .map(|player| PlayerSummary {
                    id: player.id,
                    display_name: player.display_name().to_string(),
                    cards_count: player.cards_count(),
                })
                .collect(),
            players_in_game: self.turns.tracked().to_vec(),
            winners: self.winners.clone(),
            loser: match self.phase {
                GamePhase::Finished => self.turns.tracked().first().copied(),
                _ => None,
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn set_top_card(&mut self, card: Card, color_in_play: Color) {
        self.discard_pile.discard(card);
        self.color_in_play = Some(color_in_play);
    }

    #[cfg(test)]
    pub(crate) fn set_draw_pile(&mut self, cards: Vec<Card>) {
        self.draw_pile = DrawPile::new(cards);
    }
}
