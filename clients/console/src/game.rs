use crate::input::{parse_player_command, PlayerCommand};
use crate::replay::Replay;
use blackjack::{DealerAction, Error, GamePhase, GameRules, HandSlot, Round, RoundOutcome};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

pub type BoxErr = Box<dyn std::error::Error + Send + Sync>;

/// Where the human's decisions come from
pub trait CommandSource {
    fn next_command(&mut self, can_split: bool) -> Result<PlayerCommand, BoxErr>;
}

/// Interactive prompt; reprompts until a usable command is entered.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> CommandSource for ConsolePrompt<R, W> {
    fn next_command(&mut self, can_split: bool) -> Result<PlayerCommand, BoxErr> {
        loop {
            if can_split {
                write!(self.output, "Would you like to (H)it, (S)tay, or (D)split?: ")?;
            } else {
                write!(self.output, "Would you like to (H)it or (S)tay?: ")?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // stdin closed
                return Ok(PlayerCommand::Stay);
            }
            match parse_player_command(&line) {
                Some(PlayerCommand::Split) if !can_split => {
                    writeln!(self.output, "You can't split this hand.")?
                }
                Some(command) => return Ok(command),
                None => writeln!(self.output, "Invalid input.")?,
            }
        }
    }
}

/// Commands read from a replay file. Once they run out the human stays.
pub struct ScriptedCommands {
    commands: VecDeque<PlayerCommand>,
}

impl ScriptedCommands {
    pub fn new(commands: Vec<PlayerCommand>) -> Self {
        Self {
            commands: commands.into(),
        }
    }
}

impl CommandSource for ScriptedCommands {
    fn next_command(&mut self, _can_split: bool) -> Result<PlayerCommand, BoxErr> {
        Ok(self.commands.pop_front().unwrap_or(PlayerCommand::Stay))
    }
}

fn hand_suffix(round: &Round, slot: HandSlot) -> &'static str {
    match (round.dealer().is_split(), slot) {
        (false, _) => "",
        (true, HandSlot::Primary) => " for their first hand",
        (true, HandSlot::Split) => " for their second hand",
    }
}

fn play_human<S: CommandSource, W: Write>(
    round: &mut Round,
    source: &mut S,
    out: &mut W,
) -> Result<(), BoxErr> {
    while round.phase() == GamePhase::HumanTurn {
        match source.next_command(round.can_human_split())? {
            PlayerCommand::Hit => {
                let slot = round.human().current_slot();
                let card = round.human_hit()?;
                writeln!(out, "You hit: {card}")?;
                if round.human().hand_in(slot).is_some_and(|hand| hand.is_busted()) {
                    writeln!(out, "You bust!")?;
                }
            }
            PlayerCommand::Stay => {
                round.human_stay()?;
                writeln!(out, "You stay.")?;
            }
            PlayerCommand::Split => match round.human_split() {
                Ok(()) => writeln!(out, "You split.")?,
                Err(e) => {
                    log::warn!("split rejected: {e}");
                    writeln!(out, "You can't split this hand.")?;
                    continue;
                }
            },
        }
        writeln!(out, "{}", round.render_human())?;
    }
    Ok(())
}

fn play_dealer<W: Write>(round: &mut Round, out: &mut W) -> Result<(), BoxErr> {
    writeln!(out)?;
    writeln!(out, "{}", round.render_dealer())?;
    let actions = round.play_dealer()?.to_vec();

    for action in actions {
        match action {
            DealerAction::Split => {
                writeln!(out, "The dealer splits.")?;
            }
            DealerAction::Hit { slot, card } => {
                writeln!(out, "The dealer hits{}: {card}", hand_suffix(round, slot))?;
            }
            DealerAction::Stay(slot) => {
                writeln!(out, "The dealer stays{}.", hand_suffix(round, slot))?;
            }
            DealerAction::Bust(slot) => {
                writeln!(out, "The dealer busts{}!", hand_suffix(round, slot))?;
            }
        }
    }
    Ok(())
}

/// Play a round to completion, writing the table to `out`.
pub fn play_round<S: CommandSource, W: Write>(
    round: &mut Round,
    source: &mut S,
    out: &mut W,
) -> Result<RoundOutcome, BoxErr> {
    writeln!(out)?;
    writeln!(out, "{}", round.render_dealer())?;
    writeln!(out, "{}", round.render_human())?;

    play_human(round, source, out)?;
    if round.phase() == GamePhase::DealerTurn {
        play_dealer(round, out)?;
    }

    let outcome = round.outcome()?;
    writeln!(out)?;
    writeln!(
        out,
        "{} Final Score: {}",
        round.render_dealer(),
        round.dealer().best_hand_score()
    )?;
    writeln!(
        out,
        "{} Final Score: {}",
        round.render_human(),
        round.human().best_hand_score()
    )?;
    writeln!(out, "{}", outcome.message())?;
    log::info!("round settled: {:?} ({:?})", outcome.winner, outcome.reason);
    Ok(outcome)
}

/// Play the round stored in a replay file. The table is written to `out`
/// only once the round settles. `None` means the file could not be read as
/// a round: a flagged input error, a repeated card, or a deck that runs out
/// before the round is over.
pub fn play_replay<W: Write>(
    replay: &Replay,
    rules: GameRules,
    out: &mut W,
) -> Result<Option<RoundOutcome>, BoxErr> {
    let Some(deck) = replay.deck() else {
        return Ok(None);
    };

    let mut table = Vec::new();
    let played = Round::start(deck, rules)
        .map_err(BoxErr::from)
        .and_then(|mut round| {
            let mut commands = ScriptedCommands::new(replay.commands.clone());
            play_round(&mut round, &mut commands, &mut table)
        });

    match played {
        Ok(outcome) => {
            out.write_all(&table)?;
            Ok(Some(outcome))
        }
        Err(e) if matches!(e.downcast_ref::<Error>(), Some(Error::EmptyDeck)) => {
            log::warn!("replay deck ran out before the round settled");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
