use crate::console::Console;
use crate::contest::MatchOutcome;
use crate::error::SessionError;
use crate::oracle::ShotSource;
use crate::render::{format_player_header, format_turn, format_winner};
use crate::turn::play_turn;
use hoops_core::{PlayerConfig, RackNumber, ShootingCapability, MIN_PLAYERS};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the basketball shooting contest!";
pub const PLAYER_COUNT_PROMPT: &str = "Enter the number of players: ";
pub const NOT_A_NUMBER: &str = "Invalid input. Enter a whole number.";
pub const MONEY_RACK_PROMPT: &str = "Where do you want to put your money-ball rack? Enter 1-5: ";
pub const MONEY_RACK_INVALID: &str = "Invalid input. Enter a number between 1 and 5 inclusive.";
pub const CAPABILITY_PROMPT: &str = "Enter your shooting capability, from 1 to 99: ";
pub const CAPABILITY_INVALID: &str = "Invalid input. Enter a number between 1 and 99 inclusive.";
pub const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (1 for Yes, 0 for No): ";
pub const FAREWELL: &str = "Thanks for playing! Goodbye!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub matches_played: usize,
    /// 0-based winner of each match, in play order.
    pub winners: Vec<usize>,
}

/// Asks for the player count. Fewer than two players ends the session; the
/// refusal is printed on the console before the error is returned.
pub fn read_player_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<usize, SessionError> {
    loop {
        match console.read_int(PLAYER_COUNT_PROMPT)? {
            Some(n) if n < MIN_PLAYERS as i64 => {
                let err = SessionError::NotEnoughPlayers { given: n };
                console.write_line(&err.to_string())?;
                return Err(err);
            }
            Some(n) => return Ok(usize::try_from(n).unwrap_or(usize::MAX)),
            None => console.write_line(NOT_A_NUMBER)?,
        }
    }
}

pub fn read_player_config<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<PlayerConfig, SessionError> {
    let money_rack = console.read_valid(MONEY_RACK_PROMPT, MONEY_RACK_INVALID, RackNumber::new)?;
    let capability =
        console.read_valid(CAPABILITY_PROMPT, CAPABILITY_INVALID, ShootingCapability::new)?;
    Ok(PlayerConfig::new(money_rack, capability))
}

/// Re-asks silently until the answer is 0 or 1.
pub fn read_play_again<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<bool, SessionError> {
    loop {
        match console.read_int(PLAY_AGAIN_PROMPT)? {
            Some(1) => return Ok(true),
            Some(0) => return Ok(false),
            _ => {}
        }
    }
}

/// Plays one interactive match: each player in turn configures and shoots,
/// then the winner is announced.
pub fn run_match<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    source: &mut impl ShotSource,
    players: usize,
) -> Result<MatchOutcome, SessionError> {
    if players < MIN_PLAYERS {
        return Err(SessionError::NotEnoughPlayers {
            given: players as i64,
        });
    }

    // Sized by finished turns, never by the typed count.
    let mut outcome = MatchOutcome::new();
    for player in 0..players {
        console.write_line(&format_player_header(player))?;
        let config = read_player_config(console)?;
        let turn = play_turn(source, &config);
        log::info!(
            "player {} ({}) scored {}",
            player + 1,
            config,
            turn.total()
        );
        console.write_str(&format_turn(&turn))?;
        outcome.record_turn(turn);
    }

    console.write_line(&format_winner(outcome.winner()))?;
    Ok(outcome)
}

/// Plays matches until the players decline another one.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    source: &mut impl ShotSource,
) -> Result<SessionSummary, SessionError> {
    let mut summary = SessionSummary::default();
    loop {
        console.write_line(WELCOME)?;
        let players = read_player_count(console)?;
        let outcome = run_match(console, source, players)?;
        summary.matches_played += 1;
        summary.winners.push(outcome.winner());
        if !read_play_again(console)? {
            break;
        }
    }
    console.write_line(FAREWELL)?;
    log::info!("session over after {} match(es)", summary.matches_played);
    Ok(summary)
}
