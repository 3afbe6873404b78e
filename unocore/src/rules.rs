//! Card legality checks.
//!
//! Both functions are pure: they look at the card on top of the discard pile
//! plus whatever the game tracks next to it and never touch game state.

use crate::card::{Action, Card, CardKind, Color};

/// Whether `candidate` may be discarded on top of `top`.
///
/// `color_in_play` is the declared color after a wild card, and
/// `draw_stack` the forced-draw penalty still waiting to be taken.
pub fn is_valid_play(
    top: &Card,
    color_in_play: Color,
    draw_stack: usize,
    candidate: &Card,
) -> bool {
    // A pending penalty can only be passed on, never covered.
    if draw_stack > 0 {
        return candidate.is_action_card() && candidate.action_kind() == top.action_kind();
    }

    let wild = candidate.color().is_any();
    let same_color = candidate.color() == top.color();

    match top.kind() {
        CardKind::Number(number) => same_color || candidate.number() == Some(number) || wild,
        CardKind::Action(action @ (Action::Skip | Action::Reverse)) => {
            same_color || candidate.action_kind() == Some(action) || wild
        }
        CardKind::Action(action @ (Action::DrawTwo | Action::DrawFour)) => {
            same_color
                || candidate.color() == color_in_play
                || wild
                || candidate.action_kind() == Some(action)
        }
        CardKind::Action(Action::Wild) => candidate.color() == color_in_play || wild,
    }
}

/// Whether `candidate` could have been played on `earlier_top`, the card a
/// Wild Draw Four was placed on. Used to settle challenges.
///
/// `earlier_color` is the color that was in play at that moment; it only
/// matters when `earlier_top` was itself a wild card.
pub fn could_have_played(candidate: &Card, earlier_top: &Card, earlier_color: Color) -> bool {
    let color = if earlier_top.color().is_any() {
        earlier_color
    } else {
        earlier_top.color()
    };

    let same_color = candidate.color() == color || candidate.color().is_any();
    let same_number = candidate.number().is_some() && candidate.number() == earlier_top.number();
    let same_action =
        candidate.action_kind().is_some() && candidate.action_kind() == earlier_top.action_kind();

    same_color || same_number || same_action
}
