use crate::player::Role;
use crate::{Card, CardStyle, Hand, Player};

pub const FACE_DOWN: &str = "[FACE DOWN]";
pub const EMPTY: &str = "Empty";

fn render_card(card: &Card, style: CardStyle) -> String {
    match style {
        CardStyle::Long => card.to_string(),
        CardStyle::Compact => card.to_code(),
    }
}

/// Comma-separated cards, or `Empty` for a hand with none
pub fn render_cards(hand: &Hand, style: CardStyle) -> String {
    if hand.is_empty() {
        return EMPTY.to_string();
    }
    hand.cards
        .iter()
        .map(|card| render_card(card, style))
        .collect::<Vec<_>>()
        .join(", ")
}

/// First card face up, every other card as a placeholder
pub fn render_hidden(hand: &Hand, style: CardStyle) -> String {
    match hand.first_card() {
        None => EMPTY.to_string(),
        Some(first) => std::iter::once(render_card(first, style))
            .chain(std::iter::repeat(FACE_DOWN.to_string()).take(hand.len() - 1))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Full table line for a player. `reveal` only affects the dealer's primary
/// hand; a split hand is always dealt and shown face up.
pub fn render_player(player: &Player, reveal: bool, style: CardStyle) -> String {
    let (label, second_label) = match player.role {
        Role::Human => ("Your Hand", "Your Second Hand"),
        Role::Dealer => ("Dealer's Hand", "Dealer's Second Hand"),
    };

    let primary = match player.role {
        Role::Dealer if !reveal => render_hidden(&player.hand, style),
        _ => render_cards(&player.hand, style),
    };

    let mut out = format!("{label}: {primary}");
    if let Some(split) = player.split_hand() {
        out.push_str(&format!("\n{second_label}: {}", render_cards(split, style)));
    }
    out
}
