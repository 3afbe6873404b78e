pub mod card;
pub mod command;
pub mod constants;
pub mod deck;
pub mod error;
pub mod pile;
pub mod player;
pub mod rules;
pub mod seat;
pub mod settings;
pub mod state;
pub mod turn;
pub mod uno;
