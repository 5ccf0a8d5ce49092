use serde::{Deserialize, Serialize};

/// How cards are written out when a hand is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CardStyle {
    /// `Ace of Clubs`
    #[default]
    Long,
    /// `CA`
    Compact,
}

/// Table rules for a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Dealer hits a 17 that still counts an ace as 11
    pub dealer_hits_soft_17: bool,

    /// Dealer splits a pair only when the pair scores at most this
    pub dealer_split_max_score: u16,

    /// Allow either player to split once
    pub allow_split: bool,

    /// Show the dealer's face-down cards while the round is in progress
    pub reveal_dealer: bool,

    pub card_style: CardStyle,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            dealer_hits_soft_17: true,
            dealer_split_max_score: 17,
            allow_split: true,
            reveal_dealer: false,
            card_style: CardStyle::Long,
        }
    }
}

impl GameRules {
    /// Default rules with the dealer's hole cards visible
    pub fn debug() -> Self {
        Self {
            reveal_dealer: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_rules_default() {
        let rules = GameRules::default();
        assert!(rules.dealer_hits_soft_17);
        assert_eq!(rules.dealer_split_max_score, 17);
        assert!(rules.allow_split);
        assert!(!rules.reveal_dealer);
        assert_eq!(rules.card_style, CardStyle::Long);
    }

    #[test]
    fn test_game_rules_debug_reveals_dealer() {
        let rules = GameRules::debug();
        assert!(rules.reveal_dealer);
        assert_eq!(rules.dealer_split_max_score, 17);
    }

    #[test]
    fn test_game_rules_serde() {
        let json = serde_json::to_string(&GameRules::debug()).unwrap();
        assert!(json.contains("\"card_style\":\"Long\""));
        let back: GameRules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GameRules::debug());
    }
}
