//! Validation of raw console and replay-file tokens. Nothing unvalidated
//! reaches the rule engine.

const VALID_INPUTS: [&str; 8] = ["Q", "C", "F", "H", "S", "D", "CD", "FD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Console,
    File,
    Quit,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Hit,
    Stay,
    Split,
}

/// Upper-cased input if it is one of the recognised tokens
pub fn validate_input(raw: &str) -> Option<&'static str> {
    let upper = raw.trim().to_ascii_uppercase();
    VALID_INPUTS.iter().copied().find(|valid| *valid == upper)
}

/// Input mode and whether debug (dealer cards face up) was requested
pub fn mode_from_input(raw: &str) -> (Mode, bool) {
    match validate_input(raw) {
        Some("C") => (Mode::Console, false),
        Some("F") => (Mode::File, false),
        Some("Q") => (Mode::Quit, false),
        Some("CD") => (Mode::Console, true),
        Some("FD") => (Mode::File, true),
        _ => (Mode::Invalid, false),
    }
}

pub fn parse_player_command(raw: &str) -> Option<PlayerCommand> {
    match validate_input(raw) {
        Some("H") => Some(PlayerCommand::Hit),
        Some("S") => Some(PlayerCommand::Stay),
        Some("D") => Some(PlayerCommand::Split),
        _ => None,
    }
}
