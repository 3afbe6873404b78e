use std::env::{self, VarError};
use std::str::FromStr;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use unocore::settings::GameSettings;

/// Reads the table setup from `UNO_SEED`, `UNO_HAND_SIZE` and `UNO_DECKS`.
pub fn settings_from_env() -> Result<GameSettings> {
    let mut settings = GameSettings::default();

    if let Some(seed) = read_var::<u64>("UNO_SEED")? {
        settings = settings.seed(seed);
    }
    if let Some(hand_size) = read_var::<usize>("UNO_HAND_SIZE")? {
        settings = settings.hand_size(hand_size);
    }
    if let Some(decks) = read_var::<usize>("UNO_DECKS")? {
        settings = settings.deck_count(decks);
    }

    Ok(settings)
}

fn read_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .wrap_err_with(|| format!("`{name}` is set to `{value}`, which is not valid")),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(eyre!("`{name}` is not valid unicode")),
    }
}
