mod commands;
mod config;

use std::io::{self, BufRead, Write};

use color_eyre::{eyre::WrapErr, Result};
use commands::{Line, HELP};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use unocore::{
    command::CommandOutcome,
    player::{Player, PlayerId},
    state::GamePhase,
    uno::Uno,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = config::settings_from_env()?;
    info!(
        seed = ?settings.seed,
        hand_size = settings.hand_size,
        decks = settings.deck_count,
        "opening table"
    );
    let mut game = Uno::new(settings);

    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.wrap_err("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Line>() {
            Ok(Line::Quit) => break,
            Ok(line) => run(&mut game, line)?,
            Err(err) => println!("{err:#}"),
        }
        stdout.flush()?;
    }

    Ok(())
}

/// Applies one parsed line. Only unrecoverable game errors end the session.
fn run(game: &mut Uno, line: Line) -> Result<()> {
    let result = match line {
        Line::Join(name) => game.join(name.as_str()).map(|id| {
            println!("{name} joined as {id}");
        }),
        Line::Start => game.start().map(|()| {
            if let Some(card) = game.get_top_card() {
                println!("first card: {card}");
            }
        }),
        Line::Hand(name) => {
            match find_player(game, &name) {
                Some(player) => {
                    let hand = player
                        .hand
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("{player}: {hand}");
                }
                None => println!("no player called {name}"),
            }
            Ok(())
        }
        Line::State => {
            print!("{}", game.state());
            Ok(())
        }
        Line::Help => {
            println!("{HELP}");
            Ok(())
        }
        Line::Quit => Ok(()),
        Line::Play { player, command } => {
            let Some(id) = find_player(game, &player).map(|p| p.id) else {
                println!("no player called {player}");
                return Ok(());
            };
            game.process_command(id, command).map(|outcome| report(game, id, outcome))
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) if err.is_fatal() => Err(err).wrap_err("the game cannot continue"),
        Err(err) => {
            warn!(%err, "rejected");
            println!("{err}");
            Ok(())
        }
    }
}

fn report(game: &Uno, id: PlayerId, outcome: CommandOutcome) {
    let name = game
        .get_player(&id)
        .map_or_else(|| id.to_string(), |p| p.display_name().to_string());

    match outcome {
        CommandOutcome::Discarded { won: true } => println!("{name} is out of cards!"),
        CommandOutcome::Discarded { won: false } => {}
        CommandOutcome::Drew(cards) => {
            let cards = cards.iter().map(ToString::to_string).collect::<Vec<_>>();
            println!("{name} drew {}", cards.join(", "));
        }
        CommandOutcome::Challenged { succeeded } => {
            println!("challenge {}", if succeeded { "succeeded" } else { "failed" })
        }
        CommandOutcome::Caught { succeeded } => {
            println!("catch {}", if succeeded { "succeeded" } else { "failed" })
        }
        CommandOutcome::TurnEnded => {}
    }

    if game.phase() == GamePhase::Finished {
        if let Some(loser) = game.state().loser.and_then(|id| game.get_player(&id)) {
            println!("game over, {} is left holding cards", loser.display_name());
        }
        return;
    }

    if let Some(next) = game.get_current_turn_player_id().and_then(|id| game.get_player(&id)) {
        println!(
            "top card: {}, color in play: {}, {} to play",
            game.get_top_card().map_or_else(String::new, ToString::to_string),
            game.color_in_play().map_or_else(String::new, |c| c.to_string()),
            next.display_name()
        );
    }
}

/// Looks a player up by display name, falling back to the numeric id.
fn find_player<'a>(game: &'a Uno, name: &str) -> Option<&'a Player> {
    game.get_player_ids()
        .into_iter()
        .filter_map(|id| game.get_player(&id))
        .find(|p| p.display_name().eq_ignore_ascii_case(name))
        .or_else(|| {
            let id = name.trim_start_matches('#').parse().ok()?;
            game.get_player(&PlayerId(id))
        })
}
