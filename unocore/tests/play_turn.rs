use unocore::{
    card::{Action, Card, Color},
    command::{Command, CommandOutcome, Record},
    error::UnoError,
    player::{Player, PlayerId},
    settings::GameSettings,
    state::GamePhase,
    turn::Direction,
    uno::Uno,
};

fn create_game(count: u64) -> Uno {
    let mut uno = Uno::new(GameSettings::default().seed(42));
    for i in 0..count {
        uno.add_player(Player::new(PlayerId(i), format!("Player {}", i + 1))).unwrap();
    }
    uno.start().unwrap();
    uno
}

/// A number card sharing the color in play but not the starter's number.
fn matching_card(uno: &Uno) -> Card {
    let top = uno.get_top_card().expect("Game has started.");
    let number = top.number().expect("Starter is a number card.");
    Card::numbered(uno.color_in_play().unwrap(), (number + 1) % 10)
}

fn matching_action(uno: &Uno, action: Action) -> Card {
    Card::action(uno.color_in_play().unwrap(), action)
}

fn set_hand(uno: &mut Uno, id: u64, hand: Vec<Card>) {
    uno.get_player_mut(&PlayerId(id))
        .expect("Player must exist.")
        .hand = hand;
}

fn cards_count(uno: &Uno, id: u64) -> usize {
    uno.get_player(&PlayerId(id))
        .expect("Player must exist.")
        .cards_count()
}

#[test]
fn play_turn_works_if_card_in_hand() {
    let mut uno = create_game(4);
    let card = matching_card(&uno);
    set_hand(&mut uno, 0, vec![card, Card::wild()]);

    let outcome = uno
        .process_command(PlayerId(0), Command::discard(card))
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Discarded { won: false });
    assert_eq!(uno.get_top_card(), Some(&card));
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(1)));
    assert_eq!(uno.get_previous_turn_player_id(), Some(PlayerId(0)));
    assert_eq!(
        uno.history().last().unwrap().record,
        Record::Discard {
            card,
            color_chosen: None,
            say_uno: false
        }
    );
}

#[test]
fn play_turn_fails_if_card_not_in_hand() {
    let mut uno = create_game(4);
    let card = matching_card(&uno);
    set_hand(&mut uno, 0, vec![Card::wild()]);
    let top_before = *uno.get_top_card().unwrap();

    let result = uno.process_command(PlayerId(0), Command::discard(card));

    assert_eq!(result, Err(UnoError::CardNotInHand(card)));
    assert_eq!(uno.get_top_card(), Some(&top_before));
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(0)));
    assert!(uno.history().is_empty());
}

#[test]
fn play_turn_skips_player_properly() {
    let mut uno = create_game(4);
    let skip = matching_action(&uno, Action::Skip);
    set_hand(&mut uno, 0, vec![skip, Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard(skip)).unwrap();

    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(2)));
}

#[test]
fn play_turn_performs_reverse_properly() {
    let mut uno = create_game(4);
    let reverse = matching_action(&uno, Action::Reverse);
    set_hand(&mut uno, 0, vec![reverse, Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard(reverse)).unwrap();

    assert_eq!(uno.direction(), Direction::CounterClockwise);
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(3)));

    uno.process_command(PlayerId(3), Command::EndTurn).unwrap();
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(2)));
}

#[test]
fn reverse_with_two_players_repeats_the_turn() {
    let mut uno = create_game(2);
    let reverse = matching_action(&uno, Action::Reverse);
    set_hand(&mut uno, 0, vec![reverse, Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard(reverse)).unwrap();

    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(0)));
}

#[test]
fn play_turn_performs_draw_properly() {
    let mut uno = create_game(4);
    let draw_two = matching_action(&uno, Action::DrawTwo);
    set_hand(&mut uno, 0, vec![draw_two, Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard(draw_two)).unwrap();
    assert_eq!(uno.draw_stack(), 2);
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(1)));

    // Nothing in the next hand can be stacked on a Draw Two.
    set_hand(&mut uno, 1, vec![Card::wild(), Card::numbered(Color::Red, 3)]);
    assert_eq!(
        uno.process_command(PlayerId(1), Command::discard_wild(Card::wild(), Color::Red)),
        Err(UnoError::InvalidCardPlayed(Card::wild()))
    );

    let outcome = uno.process_command(PlayerId(1), Command::Draw).unwrap();

    let CommandOutcome::Drew(cards) = outcome else {
        panic!("Expected drawn cards.");
    };
    assert_eq!(cards.len(), 2);
    assert_eq!(cards_count(&uno, 1), 4);
    assert_eq!(uno.draw_stack(), 0);
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(2)));
}

#[test]
fn stacked_draw_twos_accumulate() {
    let mut uno = create_game(4);
    let color = uno.color_in_play().unwrap();
    let other = Color::concrete().find(|c| *c != color).unwrap();
    let first = Card::action(color, Action::DrawTwo);
    let second = Card::action(other, Action::DrawTwo);
    set_hand(&mut uno, 0, vec![first, Card::wild()]);
    set_hand(&mut uno, 1, vec![second, Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard(first)).unwrap();
    uno.process_command(PlayerId(1), Command::discard(second)).unwrap();

    assert_eq!(uno.draw_stack(), 4);
    assert_eq!(uno.color_in_play(), Some(other));

    uno.process_command(PlayerId(2), Command::Draw).unwrap();

    assert_eq!(cards_count(&uno, 2), 11);
    assert_eq!(uno.draw_stack(), 0);
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(3)));
}

#[test]
fn play_turn_performs_wild_properly() {
    let mut uno = create_game(4);
    set_hand(&mut uno, 0, vec![Card::wild(), Card::wild()]);

    uno.process_command(PlayerId(0), Command::discard_wild(Card::wild(), Color::Yellow)).unwrap();

    assert_eq!(uno.color_in_play(), Some(Color::Yellow));
    assert_eq!(uno.get_top_card(), Some(&Card::wild()));
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(1)));
    assert_eq!(cards_count(&uno, 0), 1);
}

#[test]
fn play_turn_performs_wild_draw_properly() {
    let mut uno = create_game(4);
    set_hand(&mut uno, 0, vec![Card::wild_draw_four(), Card::wild()]);

    uno.process_command(
        PlayerId(0),
        Command::discard_wild(Card::wild_draw_four(), Color::Green),
    )
    .unwrap();

    assert_eq!(uno.draw_stack(), 4);
    uno.process_command(PlayerId(1), Command::Draw).unwrap();

    assert_eq!(cards_count(&uno, 1), 11);
    assert_eq!(uno.get_current_turn_player_id(), Some(PlayerId(2)));
    assert!(uno.is_valid_play(&Card::numbered(Color::Green, 1)));
}

#[test]
fn turn_winning_works_properly() {
    let mut uno = create_game(3);
    let card = matching_card(&uno);
    set_hand(&mut uno, 0, vec![card]);

    let outcome = uno
        .process_command(PlayerId(0), Command::discard(card))
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Discarded { won: true });
    assert_eq!(uno.winners(), &[PlayerId(0)]);
    assert_eq!(uno.players_in_game(), &[PlayerId(1), PlayerId(2)]);
    assert_eq!(uno.phase(), GamePhase::InProgress);

    for _ in 0..6 {
        let current = uno.get_current_turn_player_id().unwrap();
        assert_ne!(current, PlayerId(0));
        uno.process_command(current, Command::EndTurn).unwrap();
    }

    assert_eq!(
        uno.process_command(PlayerId(0), Command::Draw),
        Err(UnoError::NotYourTurn(PlayerId(0)))
    );
}

#[test]
fn seat_issues_commands_for_its_player() {
    let mut uno = create_game(3);
    let card = matching_card(&uno);
    set_hand(&mut uno, 0, vec![card, Card::wild()]);

    let mut seat = uno.seat(PlayerId(0)).unwrap();
    assert_eq!(seat.id(), PlayerId(0));
    assert_eq!(seat.playable_cards(), vec![card, Card::wild()]);

    let drawn = seat.draw().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(seat.hand().len(), 3);

    assert!(!seat.discard(card, None, false).unwrap());
    assert_eq!(seat.hand().len(), 2);

    assert!(matches!(
        uno.seat(PlayerId(9)),
        Err(UnoError::PlayerNotFound(PlayerId(9)))
    ));
}

#[test]
fn state_reports_the_table() {
    let mut uno = create_game(3);
    let card = matching_card(&uno);
    set_hand(&mut uno, 0, vec![card, Card::wild()]);
    uno.process_command(PlayerId(0), Command::discard(card).with_uno()).unwrap();

    let state = uno.state();

    assert_eq!(state.phase, GamePhase::InProgress);
    assert_eq!(state.top_card, Some(card));
    assert_eq!(state.current_player, Some(PlayerId(1)));
    assert_eq!(state.direction, Direction::Clockwise);
    assert_eq!(state.color_in_play, Some(card.color()));
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.players.len(), 3);
    assert_eq!(state.players[0].cards_count, 1);
    assert_eq!(state.players_in_game.len(), 3);
    assert!(state.winners.is_empty());
    assert_eq!(state.loser, None);

    let printed = state.to_string();
    assert!(printed.contains("Player 1 (#0) discarded"));
    assert!(printed.contains("called UNO"));
}
