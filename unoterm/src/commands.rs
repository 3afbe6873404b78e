use std::str::FromStr;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use strum_macros::EnumString;
use unocore::{
    card::{Card, Color},
    command::{Command, CommandKind},
};

/// Table management words. Anything else is tried as a game command.
#[derive(Debug, EnumString, PartialEq, Eq)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
enum Verb {
    Join,
    Start,
    Hand,
    State,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Line {
    Join(String),
    Start,
    Hand(String),
    State,
    Help,
    Quit,
    Play { player: String, command: Command },
}

pub const HELP: &str = "\
join <name>                      seat a new player
start                            deal and turn over the first card
hand <name>                      show a player's cards
discard <name> <card> [as <color>] [uno]
draw <name>
challenge <name>
catch <name>
end_turn <name>
state                            show the table
quit";

impl FromStr for Line {
    type Err = color_eyre::Report;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or_else(|| eyre!("empty line"))?;

        if let Ok(verb) = Verb::from_str(word) {
            return match verb {
                Verb::Join => Ok(Line::Join(rest_of(words, "join")?)),
                Verb::Start => Ok(Line::Start),
                Verb::Hand => Ok(Line::Hand(rest_of(words, "hand")?)),
                Verb::State => Ok(Line::State),
                Verb::Help => Ok(Line::Help),
                Verb::Quit => Ok(Line::Quit),
            };
        }

        let kind = CommandKind::from_str(word)
            .wrap_err_with(|| format!("unknown command `{word}`"))?;
        let player = words
            .next()
            .ok_or_else(|| eyre!("`{kind}` needs a player name"))?
            .to_string();

        let command = match kind {
            CommandKind::Discard => parse_discard(words.collect())?,
            CommandKind::Draw => Command::Draw,
            CommandKind::Challenge => Command::Challenge,
            CommandKind::Catch => Command::Catch,
            CommandKind::EndTurn => Command::EndTurn,
        };

        Ok(Line::Play { player, command })
    }
}

fn rest_of<'a>(words: impl Iterator<Item = &'a str>, verb: &str) -> Result<String> {
    let rest = words.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        return Err(eyre!("`{verb}` needs a player name"));
    }
    Ok(rest)
}

/// `<card words> [as <color>] [uno]`
fn parse_discard(words: Vec<&str>) -> Result<Command> {
    let say_uno = words.last().map_or(false, |w| w.eq_ignore_ascii_case("uno"));
    let words = if say_uno {
        &words[..words.len() - 1]
    } else {
        &words[..]
    };

    let (card_words, color_chosen) = match words.iter().position(|w| w.eq_ignore_ascii_case("as")) {
        Some(at) => {
            let color = words
                .get(at + 1)
                .ok_or_else(|| eyre!("`as` needs a color"))?;
            let color =
                Color::from_str(color).wrap_err_with(|| format!("unknown color `{color}`"))?;
            (&words[..at], Some(color))
        }
        None => (words, None),
    };

    let card = card_words
        .join(" ")
        .parse::<Card>()
        .wrap_err("could not read the card to discard")?;

    Ok(Command::Discard {
        card,
        color_chosen,
        say_uno,
    })
}

#[cfg(test)]
mod tests {
    use unocore::card::Action;

    use super::*;

    fn play(player: &str, command: Command) -> Line {
        Line::Play {
            player: player.to_string(),
            command,
        }
    }

    #[test]
    fn parses_table_words() {
        assert_eq!("join Ada Lovelace".parse::<Line>().unwrap(), Line::Join("Ada Lovelace".into()));
        assert_eq!("START".parse::<Line>().unwrap(), Line::Start);
        assert_eq!("hand ada".parse::<Line>().unwrap(), Line::Hand("ada".into()));
        assert!("join".parse::<Line>().is_err());
    }

    #[test]
    fn parses_simple_game_commands() {
        assert_eq!("draw ada".parse::<Line>().unwrap(), play("ada", Command::Draw));
        assert_eq!("catch bob".parse::<Line>().unwrap(), play("bob", Command::Catch));
        assert_eq!(
            "end_turn bob".parse::<Line>().unwrap(),
            play("bob", Command::EndTurn)
        );
        assert!("draw".parse::<Line>().is_err());
        assert!("dance ada".parse::<Line>().is_err());
    }

    #[test]
    fn parses_discards() {
        assert_eq!(
            "discard ada red 3".parse::<Line>().unwrap(),
            play("ada", Command::discard(Card::numbered(Color::Red, 3)))
        );
        assert_eq!(
            "discard ada blue skip uno".parse::<Line>().unwrap(),
            play(
                "ada",
                Command::discard(Card::action(Color::Blue, Action::Skip)).with_uno()
            )
        );
        assert_eq!(
            "discard ada wild draw four as green".parse::<Line>().unwrap(),
            play(
                "ada",
                Command::discard_wild(Card::wild_draw_four(), Color::Green)
            )
        );
        assert!("discard ada wild as".parse::<Line>().is_err());
        assert!("discard ada purple 3".parse::<Line>().is_err());
    }
}
