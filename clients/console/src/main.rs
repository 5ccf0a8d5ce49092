mod game;
mod input;
mod replay;

use blackjack::{CardStyle, Deck, GameRules, Round};
use clap::Parser;
use game::{play_replay, play_round, BoxErr, ConsolePrompt};
use input::{mode_from_input, Mode};
use replay::Replay;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blackjack", about = "Play one round of blackjack against the dealer")]
struct Cli {
    /// Input mode: C (console), F (file), CD/FD for debug, Q to quit.
    /// Prompted for when omitted.
    #[arg(long)]
    mode: Option<String>,

    /// Replay file used in file mode
    #[arg(long, env = "BLACKJACK_REPLAY_FILE")]
    file: Option<PathBuf>,

    /// Seed for a reproducible shuffle in console mode
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Show the dealer's face-down cards
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Print cards as suit/rank codes (e.g. HA, S10)
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Dealer hits soft 17
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    dealer_hits_soft_17: bool,
}

fn prompt_mode<R: BufRead>(input: &mut R) -> Result<(Mode, bool), BoxErr> {
    loop {
        print!("Would you like to use (c)onsole or (f)ile input?: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok((Mode::Quit, false));
        }
        match mode_from_input(&line) {
            (Mode::Invalid, _) => println!(
                "Invalid input. Please enter 'C' for console input, 'F' for file input, or 'Q' to quit.\n"
            ),
            selected => return Ok(selected),
        }
    }
}

fn rules_from(cli: &Cli, debug: bool) -> GameRules {
    GameRules {
        dealer_hits_soft_17: cli.dealer_hits_soft_17,
        reveal_dealer: debug,
        card_style: if cli.compact {
            CardStyle::Compact
        } else {
            CardStyle::Long
        },
        ..GameRules::default()
    }
}

fn run_console(cli: &Cli, rules: GameRules) -> Result<(), BoxErr> {
    let deck = match cli.seed {
        Some(seed) => Deck::seeded(seed),
        None => Deck::new_shuffled(),
    };
    let mut round = Round::start(deck, rules)?;
    let stdin = io::stdin();
    let mut prompt = ConsolePrompt::new(stdin.lock(), io::stdout());
    play_round(&mut round, &mut prompt, &mut io::stdout())?;
    Ok(())
}

fn run_file(cli: &Cli, rules: GameRules) -> Result<(), BoxErr> {
    let path = cli
        .file
        .as_ref()
        .ok_or("file mode needs --file or BLACKJACK_REPLAY_FILE")?;
    let replay = Replay::from_file(path)?;
    log::info!(
        "replaying {} cards and {} commands from {}",
        replay.cards.len(),
        replay.commands.len(),
        path.display()
    );
    if play_replay(&replay, rules, &mut io::stdout())?.is_none() {
        println!("The input file {} could not be read as a round.", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (mode, debug) = match &cli.mode {
        Some(raw) => mode_from_input(raw),
        None => match prompt_mode(&mut io::stdin().lock()) {
            Ok(selected) => selected,
            Err(e) => {
                log::error!("Failed to read input mode: {e}");
                std::process::exit(1);
            }
        },
    };
    let rules = rules_from(&cli, debug || cli.debug);

    let result = match mode {
        Mode::Console => run_console(&cli, rules),
        Mode::File => run_file(&cli, rules),
        Mode::Quit => Ok(()),
        Mode::Invalid => {
            eprintln!("Unknown mode. Available: C, F, CD, FD, Q");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        log::error!("Round failed: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_from_flags() {
        let cli = Cli::parse_from(["blackjack", "--compact", "--dealer-hits-soft-17", "false"]);
        let rules = rules_from(&cli, true);
        assert_eq!(rules.card_style, CardStyle::Compact);
        assert!(!rules.dealer_hits_soft_17);
        assert!(rules.reveal_dealer);
        assert_eq!(rules.dealer_split_max_score, 17);
    }

    #[test]
    fn test_mode_flag() {
        let cli = Cli::parse_from(["blackjack", "--mode", "fd", "--file", "round.txt"]);
        assert_eq!(mode_from_input(cli.mode.as_deref().unwrap()), (Mode::File, true));
        assert_eq!(cli.file, Some(PathBuf::from("round.txt")));
    }
}
